use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but does not hold a valid Discord snowflake ID.
    #[error("Environment variable {name} is not a valid Discord ID: '{value}'")]
    InvalidSnowflake {
        /// Name of the offending variable
        name: String,
        /// The value that failed to parse
        value: String,
    },

    /// The bot is not a member of the configured guild.
    #[error("Could not find valid guild with ID: {0}")]
    GuildNotFound(u64),
}
