use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake stored as text.
///
/// Owner IDs are kept as strings in the database, so a value that fails to parse means
/// the row was written by something other than this bot.
///
/// # Returns
/// - `Ok(u64)` - The snowflake
/// - `Err(AppError::InternalErr(ParseStringId))` - The stored text is not a u64
pub fn parse_snowflake(stored: &str) -> Result<u64, AppError> {
    stored.trim().parse::<u64>().map_err(|source| {
        InternalError::ParseStringId {
            value: stored.to_string(),
            source,
        }
        .into()
    })
}
