//! Character factory for creating test character entities.
//!
//! Provides a builder with sensible defaults for the `character` table so repository
//! and service tests only spell out the fields they care about.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Portrait URL used by factory-created characters.
pub const TEST_PORTRAIT_URL: &str = "https://example.com/portrait.png";

/// Factory for creating test characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::character::CharacterFactory;
///
/// let character = CharacterFactory::new(&db)
///     .user_id("123456789")
///     .name("Tordek")
///     .level(5)
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    name: String,
    level: i32,
    proficiencies: Option<String>,
    race: Option<String>,
    class: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented numeric string
    /// - name: `"Character {id}"`
    /// - level: `1`, every ability score `10`, initiative `0`
    /// - no proficiencies, race or class
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            name: format!("Character {}", id),
            level: 1,
            proficiencies: None,
            race: None,
            class: None,
        }
    }

    /// Sets the owning Discord user ID.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the character name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the character level.
    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Sets the stored proficiency keys (comma separated, e.g. `"arcana,stealth"`).
    pub fn proficiencies(mut self, proficiencies: impl Into<String>) -> Self {
        self.proficiencies = Some(proficiencies.into());
        self
    }

    /// Sets the character race.
    pub fn race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    /// Sets the character class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            created: ActiveValue::Set(Utc::now().date_naive()),
            level: ActiveValue::Set(self.level),
            initiative: ActiveValue::Set(0),
            strength: ActiveValue::Set(10),
            dexterity: ActiveValue::Set(10),
            constitution: ActiveValue::Set(10),
            intelligence: ActiveValue::Set(10),
            wisdom: ActiveValue::Set(10),
            charisma: ActiveValue::Set(10),
            proficiencies: ActiveValue::Set(self.proficiencies),
            race: ActiveValue::Set(self.race),
            class: ActiveValue::Set(self.class),
            portrait: ActiveValue::Set(TEST_PORTRAIT_URL.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db).build().await`.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}

/// Creates a character owned by a specific user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the owner as string
/// - `name` - Character name
pub async fn create_character_for_user(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    name: impl Into<String>,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db)
        .user_id(user_id)
        .name(name)
        .build()
        .await
}
