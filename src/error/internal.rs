use std::num::ParseIntError;

use songbird::{error::JoinError, tracks::ControlError};
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored proficiency key does not match any known skill.
    ///
    /// Only possible when the `character` table was edited outside the bot.
    #[error("Unknown skill key '{0}' stored in database")]
    UnknownStoredSkill(String),

    /// Songbird was not registered on the client, so voice is unavailable.
    #[error("Songbird voice client is not registered")]
    VoiceNotRegistered,

    /// Joining or leaving a voice channel failed.
    #[error("Voice connection error: {0}")]
    VoiceJoin(#[from] JoinError),

    /// A playing track no longer accepts commands.
    #[error("Failed to control audio track: {0}")]
    TrackControl(#[from] ControlError),

    /// The audio directory could not be read.
    #[error("Failed to read audio directory '{path}': {source}")]
    AudioDir {
        /// Directory that was listed
        path: String,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },
}
