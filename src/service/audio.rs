//! Background ambiance playback state.
//!
//! The voice connection itself belongs to songbird. This service owns what songbird does
//! not know about: which files may be played, each guild's volume and repeat settings,
//! and the track currently playing in each guild so later commands can control it.

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use songbird::tracks::TrackHandle;
use tokio::sync::RwLock;

use crate::{
    error::{internal::InternalError, AppError},
    model::audio::{filter_audio_files, volume_factor, GuildAudioSettings},
};

/// Reply used when audio commands are disabled.
pub const AUDIO_DISABLED_MESSAGE: &str = ":warning: Unable to run command at this time";

/// Discord caps autocomplete responses at 25 choices.
const MAX_AUTOCOMPLETE_CHOICES: usize = 25;

#[derive(Default)]
struct GuildPlayer {
    settings: GuildAudioSettings,
    current: Option<TrackHandle>,
}

/// Service for tracking ambiance playback across guilds.
///
/// Cloning is cheap; clones share the same per-guild state, which lets songbird event
/// handlers hold their own copy.
#[derive(Clone)]
pub struct AudioService {
    dir: PathBuf,
    enabled: bool,
    guilds: Arc<RwLock<HashMap<u64, GuildPlayer>>>,
}

impl AudioService {
    /// Creates the service for the given audio directory.
    ///
    /// Audio commands are disabled when the directory does not exist at startup, in
    /// which case a warning is logged once.
    ///
    /// # Arguments
    /// - `dir` - Directory containing the playable audio files
    ///
    /// # Returns
    /// - `AudioService` - Service with no guild state yet
    pub fn load(dir: PathBuf) -> Self {
        let enabled = dir.is_dir();
        let service = Self {
            dir,
            enabled,
            guilds: Arc::new(RwLock::new(HashMap::new())),
        };

        if !service.enabled {
            tracing::warn!(
                "[Audio] Disabled because '{}' is not a directory",
                service.dir.display()
            );
            return service;
        }

        match service.list_files() {
            Ok(files) => tracing::info!("[Audio] Loaded with {} audio files", files.len()),
            Err(e) => tracing::warn!("[Audio] {}", e),
        }

        service
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// # Returns
    /// - `Ok(())` - Audio commands may run
    /// - `Err(AppError::BadRequest)` - Audio was disabled at startup
    pub fn ensure_enabled(&self) -> Result<(), AppError> {
        if self.enabled {
            Ok(())
        } else {
            Err(AppError::BadRequest(AUDIO_DISABLED_MESSAGE.to_string()))
        }
    }

    /// Lists the playable files in the audio directory, sorted by name.
    ///
    /// The directory is read on every call so files added while the bot runs show up.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - File names with a supported extension
    /// - `Err(AppError::InternalErr(AudioDir))` - Directory could not be read
    pub fn list_files(&self) -> Result<Vec<String>, AppError> {
        let read_err = |source| InternalError::AudioDir {
            path: self.dir.display().to_string(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            if !entry.path().is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        Ok(filter_audio_files(names))
    }

    /// Suggests file names starting with `partial`, ignoring case.
    pub fn autocomplete_files(&self, partial: &str) -> Result<Vec<String>, AppError> {
        let partial = partial.to_lowercase();

        Ok(self
            .list_files()?
            .into_iter()
            .filter(|name| name.to_lowercase().starts_with(&partial))
            .take(MAX_AUTOCOMPLETE_CHOICES)
            .collect())
    }

    /// Resolves a user-supplied file name to a path inside the audio directory.
    ///
    /// Only names returned by `list_files` are accepted, so paths pointing elsewhere are
    /// rejected.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the file to play
    /// - `Err(AppError::BadRequest)` - The name is not a loaded audio file
    pub fn resolve(&self, file: &str) -> Result<PathBuf, AppError> {
        if self.list_files()?.iter().any(|name| name == file) {
            return Ok(self.dir.join(file));
        }

        Err(AppError::BadRequest(format!(
            "\"{}\" is not an audio file that is loaded on the bot.",
            file
        )))
    }

    /// Gets a guild's player settings, defaults if it never changed them.
    pub async fn settings(&self, guild_id: u64) -> GuildAudioSettings {
        self.guilds
            .read()
            .await
            .get(&guild_id)
            .map(|player| player.settings)
            .unwrap_or_default()
    }

    /// Sets a guild's volume and applies it to the playing track.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose player changes
    /// - `percent` - Volume in percent, clamped to `1..=100`
    ///
    /// # Returns
    /// - `f32` - The volume factor now in effect
    pub async fn set_volume(&self, guild_id: u64, percent: u8) -> f32 {
        let factor = volume_factor(percent);

        let mut guilds = self.guilds.write().await;
        let player = guilds.entry(guild_id).or_default();
        player.settings.volume = factor;

        if let Some(track) = &player.current {
            if track.set_volume(factor).is_err() {
                player.current = None;
            }
        }

        factor
    }

    /// Turns repeat on or off for a guild, including the playing track.
    pub async fn set_repeat(&self, guild_id: u64, repeat: bool) {
        let mut guilds = self.guilds.write().await;
        let player = guilds.entry(guild_id).or_default();
        player.settings.repeat = repeat;

        if let Some(track) = &player.current {
            let result = if repeat {
                track.enable_loop()
            } else {
                track.disable_loop()
            };
            if result.is_err() {
                player.current = None;
            }
        }
    }

    /// Records a freshly started track and applies the guild's settings to it.
    ///
    /// # Returns
    /// - `Ok(())` - Track is now the guild's current track
    /// - `Err(AppError::InternalErr(TrackControl))` - Track ended before settings applied
    pub async fn start_track(&self, guild_id: u64, track: TrackHandle) -> Result<(), AppError> {
        let mut guilds = self.guilds.write().await;
        let player = guilds.entry(guild_id).or_default();

        track
            .set_volume(player.settings.volume)
            .map_err(InternalError::from)?;
        if player.settings.repeat {
            track.enable_loop().map_err(InternalError::from)?;
        }

        player.current = Some(track);

        Ok(())
    }

    /// Gets the track currently playing in a guild.
    pub async fn current_track(&self, guild_id: u64) -> Option<TrackHandle> {
        self.guilds
            .read()
            .await
            .get(&guild_id)
            .and_then(|player| player.current.clone())
    }

    /// Forgets the guild's current track. Settings are kept.
    pub async fn clear_track(&self, guild_id: u64) {
        if let Some(player) = self.guilds.write().await.get_mut(&guild_id) {
            player.current = None;
        }
    }

    /// Clears the guild's current track if `track` is that track.
    ///
    /// # Returns
    /// - `true` - `track` was current; the bot should leave the voice channel
    /// - `false` - `track` was replaced or stopped earlier
    pub async fn finish_track(&self, guild_id: u64, track: &TrackHandle) -> bool {
        let mut guilds = self.guilds.write().await;
        let Some(player) = guilds.get_mut(&guild_id) else {
            return false;
        };

        let is_current = player
            .current
            .as_ref()
            .is_some_and(|current| current.uuid() == track.uuid());
        if is_current {
            player.current = None;
        }

        is_current
    }
}
