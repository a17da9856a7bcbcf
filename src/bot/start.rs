use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, Client, GatewayIntents};
use songbird::SerenityInit;

use crate::{
    bot::{command, error, handler},
    config::Config,
    error::AppError,
    service::audio::AudioService,
    state::AppState,
};

/// Builds the Discord client with the command framework attached.
///
/// The framework setup callback runs on the first `Ready` event: it verifies the bot is a
/// member of the configured guild, registers the slash commands in that guild and
/// creates the shared `AppState`. Songbird is registered on the client for `/audio`.
///
/// # Arguments
/// - `config` - Application configuration (token and guild)
/// - `db` - Database connection moved into the shared state
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let guild_id = config.guild_id;
    let audio_dir = config.audio_dir.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: command::commands(),
            on_error: |error| Box::pin(error::on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handler::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                handler::ready::setup_guild(ctx, ready, framework, guild_id).await?;

                Ok(AppState::new(db, AudioService::load(audio_dir)))
            })
        })
        .build();

    let client = Client::builder(&config.discord_token, intents)
        .framework(framework)
        .activity(ActivityData::playing("D&D 5e"))
        .register_songbird()
        .await?;

    Ok(client)
}

/// Runs the bot until every shard has shut down.
///
/// Returns once `/shutdown` (or Ctrl-C) stops the shard manager.
///
/// # Returns
/// - `Ok(())` - Clean shutdown
/// - `Err(AppError::DiscordErr)` - Login or gateway failure
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
