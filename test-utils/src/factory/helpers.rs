//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test identifiers
/// across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Fills a user's roster with `count` characters named `"Adventurer {n}"`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the owner as string
/// - `count` - Number of characters to create
///
/// # Returns
/// - `Ok(Vec<entity::character::Model>)` - Created characters in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_characters_for_user(
    db: &DatabaseConnection,
    user_id: &str,
    count: usize,
) -> Result<Vec<entity::character::Model>, DbErr> {
    let mut characters = Vec::with_capacity(count);
    for n in 1..=count {
        let character = crate::factory::character::create_character_for_user(
            db,
            user_id,
            format!("Adventurer {}", n),
        )
        .await?;
        characters.push(character);
    }

    Ok(characters)
}
