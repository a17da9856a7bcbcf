use poise::{CreateReply, FrameworkError};

use crate::{
    bot::Context,
    error::{AppError, GENERIC_ERROR_MESSAGE},
    state::AppState,
};

/// Framework-wide error handler.
///
/// User-facing errors are answered ephemerally with their own message; anything else is
/// logged and answered with a generic message. A failed setup shuts the bot down since
/// no commands could be registered.
pub async fn on_error(error: FrameworkError<'_, AppState, AppError>) {
    match error {
        FrameworkError::Setup {
            error, framework, ..
        } => {
            tracing::error!("Failed to set up the bot: {}", error);
            framework.shard_manager().shutdown_all().await;
        }
        FrameworkError::Command { error, ctx, .. } => {
            let message = match error.user_message() {
                Some(message) => message,
                None => {
                    tracing::error!(
                        "Error in command /{}: {}",
                        ctx.command().qualified_name,
                        error
                    );
                    GENERIC_ERROR_MESSAGE.to_string()
                }
            };

            reply_ephemeral(ctx, message).await;
        }
        FrameworkError::CooldownHit {
            remaining_cooldown,
            ctx,
            ..
        } => {
            let message = format!(
                "You are on cooldown. Try again in {:.2}s",
                remaining_cooldown.as_secs_f32()
            );

            reply_ephemeral(ctx, message).await;
        }
        FrameworkError::ArgumentParse { error, ctx, .. } => {
            reply_ephemeral(ctx, error.to_string()).await;
        }
        FrameworkError::EventHandler { error, event, .. } => {
            tracing::error!(
                "Error handling {} event: {}",
                event.snake_case_name(),
                error
            );
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

async fn reply_ephemeral(ctx: Context<'_>, message: String) {
    let reply = CreateReply::default().content(message).ephemeral(true);

    if let Err(e) = ctx.send(reply).await {
        tracing::error!("Failed to send error reply: {}", e);
    }
}
