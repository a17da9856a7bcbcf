use serenity::all::{Context, FullEvent};

use crate::{error::AppError, state::AppState};

pub mod message;
pub mod ready;

/// Dispatches raw gateway events to their handlers.
///
/// Slash commands are dispatched by the framework itself; only events the bot reacts to
/// outside of commands are routed here.
pub async fn event_handler(
    ctx: &Context,
    event: &FullEvent,
    framework: poise::FrameworkContext<'_, AppState, AppError>,
    _data: &AppState,
) -> Result<(), AppError> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            ready::handle_ready(data_about_bot);
        }
        FullEvent::Message { new_message } => {
            message::handle_message(ctx, new_message, framework.bot_id).await?;
        }
        _ => {}
    }

    Ok(())
}
