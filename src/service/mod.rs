//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot commands and the data (repository) layer. They enforce
//! business rules (character limits, naming, input validation) and work with domain
//! models rather than entity models or Discord types. `audio` keeps in-memory playback
//! state instead of touching the database.

pub mod audio;
pub mod character;

#[cfg(test)]
mod test;
