//! Shared state handed to every command and event handler.
//!
//! The poise framework builds `AppState` once, in its setup callback after the first
//! `Ready` event, and passes a reference to it through `ctx.data()`.

use sea_orm::DatabaseConnection;

use crate::service::audio::AudioService;

/// Application state containing shared resources and dependencies.
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// `DatabaseConnection` is a pool, so every command shares the same connections.
    pub db: DatabaseConnection,
    /// Per-guild ambiance playback state.
    pub audio: AudioService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `audio` - Audio service loaded from the configured directory
    pub fn new(db: DatabaseConnection, audio: AudioService) -> Self {
        Self { db, audio }
    }
}
