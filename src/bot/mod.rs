//! Discord bot integration.
//!
//! This module wires the bot together: the poise framework owns slash command
//! registration and dispatch, while serenity owns the gateway connection, reconnection
//! and rate limiting. Songbird rides on the same gateway connection for voice. Commands
//! live in `command/`, raw gateway events in `handler/`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - Non-privileged intents - Guild, message, interaction and voice state events
//! - `GUILD_MEMBERS` - Member data for display names (privileged intent)
//! - `MESSAGE_CONTENT` - Reading message text for the "good bot" responder (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal
//! for the bot application.

pub mod command;
pub mod embed;
pub mod error;
pub mod handler;
pub mod start;

use crate::{error::AppError, state::AppState};

/// Context passed to every command.
pub type Context<'a> = poise::Context<'a, AppState, AppError>;
