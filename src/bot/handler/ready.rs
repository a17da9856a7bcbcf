//! Ready event handling for bot initialization.
//!
//! The `ready` event fires when the bot connects to Discord's gateway and completes the
//! initial handshake. On the first one the framework runs `setup_guild`, which checks
//! the configured guild and registers slash commands; every `ready` is then logged.

use serenity::all::{Context, GuildId, Ready};

use crate::{
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Verifies guild membership and registers the slash commands in that guild.
///
/// Guild commands update instantly, unlike global commands, so everything is registered
/// in the single configured guild.
///
/// # Arguments
/// - `ctx` - Discord context for the registration HTTP calls
/// - `ready` - Ready event data containing the guilds the bot is in
/// - `framework` - Framework holding the command list
/// - `guild_id` - Configured guild ID
///
/// # Returns
/// - `Ok(())` - Commands registered
/// - `Err(AppError::ConfigErr(GuildNotFound))` - The bot is not a member of the guild
/// - `Err(AppError::DiscordErr)` - Registration request failed
pub async fn setup_guild(
    ctx: &Context,
    ready: &Ready,
    framework: &poise::Framework<AppState, AppError>,
    guild_id: u64,
) -> Result<(), AppError> {
    let guild = GuildId::new(guild_id);

    if !contains_guild(ready.guilds.iter().map(|g| g.id), guild) {
        return Err(ConfigError::GuildNotFound(guild_id).into());
    }

    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild).await?;

    tracing::info!(
        "Registered {} commands in guild {}",
        framework.options().commands.len(),
        guild_id
    );

    Ok(())
}

/// Whether `guild` is among the guilds the bot has joined.
fn contains_guild(joined: impl IntoIterator<Item = GuildId>, guild: GuildId) -> bool {
    joined.into_iter().any(|id| id == guild)
}

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ready` - Ready event data containing bot user information
pub fn handle_ready(ready: &Ready) {
    tracing::info!("{} is ready and online!", ready.user.name);
}
