use serenity::all::{Context, Message, UserId};

use crate::error::AppError;

const PRAISE_TRIGGER: &str = "good bot";
const PRAISE_REPLY: &str = "Aww shucks!";

/// Replies to "good bot" messages directed at the bot.
///
/// A message qualifies when it mentions the bot and contains "good bot" in any case.
/// Messages from bots, including this one, are ignored.
pub async fn handle_message(
    ctx: &Context,
    message: &Message,
    bot_id: UserId,
) -> Result<(), AppError> {
    let mentions_bot = message.mentions_user_id(bot_id);
    if !should_praise(message.author.bot, mentions_bot, &message.content) {
        return Ok(());
    }

    tracing::debug!("{} called the bot good", message.author.name);

    message.reply(ctx, PRAISE_REPLY).await?;

    Ok(())
}

/// Whether a message earns the praise reply.
fn should_praise(author_is_bot: bool, mentions_bot: bool, content: &str) -> bool {
    !author_is_bot && mentions_bot && is_praise(content)
}

fn is_praise(content: &str) -> bool {
    content.to_lowercase().contains(PRAISE_TRIGGER)
}
