//! Error types and user-facing error handling.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. It is the error type
//! of every command, so it also decides what a Discord user gets to see when a command
//! fails and which exit code the process returns when startup fails.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Reply shown to users when a command fails for a reason they cannot act on.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong while running that command.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion. `NotFound` and `BadRequest` carry
/// messages meant for the invoking user; all other variants are logged and replaced by
/// a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Unexpected internal state, typically corrupt stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Requested resource does not exist.
    ///
    /// # Fields
    /// - Message shown to the invoking user
    #[error("{0}")]
    NotFound(String),

    /// Invalid command input.
    ///
    /// # Fields
    /// - Message shown to the invoking user
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the message that may be shown to the Discord user who triggered the error.
    ///
    /// # Returns
    /// - `Some(String)` - For `NotFound` and `BadRequest`, the carried message
    /// - `None` - For every other variant; callers log the error and show a generic reply
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    /// Maps a startup failure to the process exit code.
    ///
    /// # Returns
    /// - `2` - Configuration is missing or invalid
    /// - `3` - Database could not be opened or migrated
    /// - `1` - Anything else (login failure, gateway error)
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigErr(_) => 2,
            Self::DbErr(_) => 3,
            _ => 1,
        }
    }
}
