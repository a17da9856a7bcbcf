use crate::{bot::Context, error::AppError};

/// Cleanly shuts Cantrip down. Only admins can do this.
///
/// Stopping every shard makes the client return, which ends the process with exit code 0.
#[poise::command(slash_command, default_member_permissions = "ADMINISTRATOR")]
pub async fn shutdown(ctx: Context<'_>) -> Result<(), AppError> {
    tracing::info!("Shutdown command issued by {}", ctx.author().name);

    ctx.say("Goodbye.").await?;

    ctx.framework().shard_manager().shutdown_all().await;

    Ok(())
}
