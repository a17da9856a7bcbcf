//! `/audio` command group for playing background ambiance in a voice channel.
//!
//! Files come from the configured audio directory. The bot joins the caller's voice
//! channel on `/audio play` and leaves once the track ends, unless repeat is on.

use std::sync::Arc;

use async_trait::async_trait;
use poise::{ChoiceParameter, CreateReply};
use serenity::all::{ChannelId, GuildId};
use songbird::{
    input::File, tracks::PlayMode, Event, EventContext, EventHandler as VoiceEventHandler,
    Songbird, TrackEvent,
};

use crate::{
    bot::Context,
    error::{internal::InternalError, AppError},
    model::audio::{MAX_VOLUME_PERCENT, MIN_VOLUME_PERCENT},
    service::audio::AudioService,
};

const NOT_PLAYING_MESSAGE: &str = "Cantrip is not currently playing any audio.";
const NOTHING_TO_RESUME_MESSAGE: &str = "Use `/audio play` to choose a song to play.";
const NO_VOICE_CHANNEL_MESSAGE: &str =
    "You must connect to a voice channel before Cantrip can play audio for you.";
const GUILD_ONLY_MESSAGE: &str = "Audio can only be played in a server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum RepeatSetting {
    On,
    Off,
}

/// Commands to play background ambiance audio loaded on the bot
#[poise::command(
    slash_command,
    guild_only,
    subcommands("play", "stop", "pause", "resume", "volume", "repeat"),
    subcommand_required
)]
pub async fn audio(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Plays background ambiance audio loaded on the bot
#[poise::command(slash_command, guild_only, member_cooldown = 1)]
pub async fn play(
    ctx: Context<'_>,
    #[description = "Name of audio file to play"]
    #[autocomplete = "autocomplete_audio_file"]
    file: String,
) -> Result<(), AppError> {
    let audio = &ctx.data().audio;
    audio.ensure_enabled()?;
    let path = audio.resolve(&file)?;

    let guild_id = guild_id(ctx)?;
    let channel_id = author_voice_channel(ctx)
        .ok_or_else(|| AppError::BadRequest(NO_VOICE_CHANNEL_MESSAGE.to_string()))?;

    let manager = voice_manager(ctx).await?;
    let call = manager
        .join(guild_id, channel_id)
        .await
        .map_err(InternalError::from)?;

    // Forget the old track first so its end event does not make the bot leave
    audio.clear_track(guild_id.get()).await;

    let track = {
        let mut handler = call.lock().await;
        handler.stop();
        handler.play_only_input(File::new(path).into())
    };

    track
        .add_event(
            Event::Track(TrackEvent::End),
            LeaveWhenFinished {
                manager: manager.clone(),
                audio: audio.clone(),
                guild_id,
            },
        )
        .map_err(InternalError::from)?;

    audio.start_track(guild_id.get(), track).await?;

    tracing::debug!("{} started playing \"{}\"", ctx.author().name, file);

    ctx.say(format!("Now playing: \"{}\"", file)).await?;

    Ok(())
}

/// Stops Cantrip from playing audio and disconnects it
#[poise::command(slash_command, guild_only)]
pub async fn stop(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.data().audio.ensure_enabled()?;
    let guild_id = guild_id(ctx)?;

    say_ephemeral(ctx, "Stopping...").await?;

    ctx.data().audio.clear_track(guild_id.get()).await;

    let manager = voice_manager(ctx).await?;
    if manager.get(guild_id).is_some() {
        manager.remove(guild_id).await.map_err(InternalError::from)?;
    }

    Ok(())
}

/// Pauses playing audio
#[poise::command(slash_command, guild_only)]
pub async fn pause(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.data().audio.ensure_enabled()?;
    let guild_id = guild_id(ctx)?;

    let Some(track) = ctx.data().audio.current_track(guild_id.get()).await else {
        return say_ephemeral(ctx, NOT_PLAYING_MESSAGE).await;
    };

    let playing = matches!(
        track.get_info().await.map(|state| state.playing),
        Ok(PlayMode::Play)
    );
    if !playing {
        return say_ephemeral(ctx, NOT_PLAYING_MESSAGE).await;
    }

    track.pause().map_err(InternalError::from)?;

    say_ephemeral(ctx, "Pausing...").await
}

/// Resumes playing audio
#[poise::command(slash_command, guild_only)]
pub async fn resume(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.data().audio.ensure_enabled()?;
    let guild_id = guild_id(ctx)?;

    let Some(track) = ctx.data().audio.current_track(guild_id.get()).await else {
        return say_ephemeral(ctx, NOTHING_TO_RESUME_MESSAGE).await;
    };

    track.play().map_err(InternalError::from)?;

    say_ephemeral(ctx, "Resuming...").await
}

/// Changes the volume of playing audio
#[poise::command(slash_command, guild_only)]
pub async fn volume(
    ctx: Context<'_>,
    #[description = "New volume percentage"]
    #[min = 1]
    #[max = 100]
    percent: u8,
) -> Result<(), AppError> {
    ctx.data().audio.ensure_enabled()?;
    let guild_id = guild_id(ctx)?;
    let percent = percent.clamp(MIN_VOLUME_PERCENT, MAX_VOLUME_PERCENT);

    ctx.data().audio.set_volume(guild_id.get(), percent).await;

    say_ephemeral(ctx, format!("Changed volume to {}%", percent)).await
}

/// Turn audio repeat on or off
#[poise::command(slash_command, guild_only)]
pub async fn repeat(
    ctx: Context<'_>,
    #[description = "Whether finished audio starts over"] setting: RepeatSetting,
) -> Result<(), AppError> {
    ctx.data().audio.ensure_enabled()?;
    let guild_id = guild_id(ctx)?;

    ctx.data()
        .audio
        .set_repeat(guild_id.get(), setting == RepeatSetting::On)
        .await;

    say_ephemeral(ctx, format!("Turned repeat {}.", setting.name())).await
}

/// Leaves the voice channel when the guild's current track ends.
struct LeaveWhenFinished {
    manager: Arc<Songbird>,
    audio: AudioService,
    guild_id: GuildId,
}

#[async_trait]
impl VoiceEventHandler for LeaveWhenFinished {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        let EventContext::Track(tracks) = ctx else {
            return None;
        };

        for (_, handle) in tracks.iter() {
            if self.audio.finish_track(self.guild_id.get(), handle).await {
                if let Err(e) = self.manager.remove(self.guild_id).await {
                    tracing::warn!("Failed to leave voice channel after playback: {}", e);
                }
            }
        }

        None
    }
}

/// Suggests audio files from the audio directory.
async fn autocomplete_audio_file(ctx: Context<'_>, partial: &str) -> Vec<String> {
    match ctx.data().audio.autocomplete_files(partial) {
        Ok(files) => files,
        Err(e) => {
            tracing::error!("Failed to autocomplete audio files: {}", e);
            Vec::new()
        }
    }
}

fn guild_id(ctx: Context<'_>) -> Result<GuildId, AppError> {
    ctx.guild_id()
        .ok_or_else(|| AppError::BadRequest(GUILD_ONLY_MESSAGE.to_string()))
}

/// Voice channel the invoking member is connected to, from the cache.
fn author_voice_channel(ctx: Context<'_>) -> Option<ChannelId> {
    let guild = ctx.guild()?;

    guild
        .voice_states
        .get(&ctx.author().id)
        .and_then(|state| state.channel_id)
}

async fn voice_manager(ctx: Context<'_>) -> Result<Arc<Songbird>, AppError> {
    songbird::get(ctx.serenity_context())
        .await
        .ok_or_else(|| InternalError::VoiceNotRegistered.into())
}

async fn say_ephemeral(ctx: Context<'_>, message: impl Into<String>) -> Result<(), AppError> {
    ctx.send(CreateReply::default().content(message).ephemeral(true))
        .await?;

    Ok(())
}
