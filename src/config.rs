use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://cantrip.db?mode=rwc";
const DEFAULT_AUDIO_DIR: &str = "./audio/";

pub struct Config {
    pub discord_token: String,
    pub guild_id: u64,
    pub database_url: String,
    /// Directory holding the ambiance files `/audio play` can choose from.
    pub audio_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let discord_token = required("DISCORD_TOKEN")?;

        let raw_guild_id = required("GUILD_ID")?;
        let guild_id = raw_guild_id
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or_else(|| ConfigError::InvalidSnowflake {
                name: "GUILD_ID".to_string(),
                value: raw_guild_id.clone(),
            })?;

        let optional = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            discord_token,
            guild_id,
            database_url: optional("DATABASE_URL", DEFAULT_DATABASE_URL),
            audio_dir: PathBuf::from(optional("AUDIO_DIR", DEFAULT_AUDIO_DIR)),
        })
    }
}
