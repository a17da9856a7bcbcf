use poise::CreateReply;

use crate::{
    bot::{embed::about_embed, Context},
    error::AppError,
};

/// Displays information about the Cantrip Bot.
#[poise::command(slash_command, user_cooldown = 60)]
pub async fn about(ctx: Context<'_>) -> Result<(), AppError> {
    let command_names = ctx
        .framework()
        .options()
        .commands
        .iter()
        .map(|command| command.name.clone())
        .collect::<Vec<_>>();

    let latency = ctx.ping().await;

    ctx.send(CreateReply::default().embed(about_embed(&command_names, latency)))
        .await?;

    Ok(())
}
