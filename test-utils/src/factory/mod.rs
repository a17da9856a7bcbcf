//! Factory methods for creating test data.
//!
//! Factories create entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let character = factory::create_character(&db).await?;
//! let roster = factory::helpers::create_characters_for_user(&db, "42", 5).await?;
//! ```

pub mod character;
pub mod helpers;

pub use character::{create_character, create_character_for_user};
