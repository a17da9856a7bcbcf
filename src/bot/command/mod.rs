//! Slash commands registered by the bot.

pub mod about;
pub mod audio;
pub mod character;
pub mod roll;
pub mod shutdown;

use crate::{error::AppError, state::AppState};

/// All top-level commands, in the order they are registered and listed by `/about`.
pub fn commands() -> Vec<poise::Command<AppState, AppError>> {
    vec![
        about::about(),
        shutdown::shutdown(),
        roll::roll(),
        character::character(),
        audio::audio(),
    ]
}
