//! Player character domain models and parameters.
//!
//! Characters belong to a single Discord user and hold the basic D&D 5e character sheet
//! values the bot can display. Entity models are converted to `Character` at the
//! repository boundary so the rest of the bot works with a parsed owner ID and typed
//! proficiency list.

use chrono::NaiveDate;

use crate::{
    error::{internal::InternalError, AppError},
    model::skill::Skill,
    util::parse::parse_snowflake,
};

/// Player character owned by a Discord user.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Database ID of the character.
    pub id: i32,
    /// Discord ID of the owning user.
    pub user_id: u64,
    pub name: String,
    /// Date the character was created (UTC).
    pub created: NaiveDate,
    pub level: i32,
    /// Initiative modifier.
    pub initiative: i32,
    pub abilities: AbilityScores,
    /// Proficient skills in canonical order.
    pub proficiencies: Vec<Skill>,
    pub race: Option<String>,
    pub class: Option<String>,
    /// URL of the character portrait image.
    pub portrait: String,
}

/// The six D&D ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    /// Ability names paired with their scores, in character sheet order.
    pub fn labeled(&self) -> [(&'static str, i32); 6] {
        [
            ("Strength", self.strength),
            ("Dexterity", self.dexterity),
            ("Constitution", self.constitution),
            ("Intelligence", self.intelligence),
            ("Wisdom", self.wisdom),
            ("Charisma", self.charisma),
        ]
    }
}

impl Character {
    /// Converts an entity model to a character domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Character)` - The converted character domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored owner ID is not a u64
    /// - `Err(AppError::InternalErr(UnknownStoredSkill))` - Stored proficiency key is unknown
    pub fn from_entity(entity: entity::character::Model) -> Result<Self, AppError> {
        let user_id = parse_snowflake(&entity.user_id)?;

        let proficiencies = match entity.proficiencies.as_deref() {
            Some(stored) => stored
                .split(',')
                .filter(|key| !key.is_empty())
                .map(|key| {
                    Skill::from_key(key)
                        .ok_or_else(|| InternalError::UnknownStoredSkill(key.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            id: entity.id,
            user_id,
            name: entity.name,
            created: entity.created,
            level: entity.level,
            initiative: entity.initiative,
            abilities: AbilityScores {
                strength: entity.strength,
                dexterity: entity.dexterity,
                constitution: entity.constitution,
                intelligence: entity.intelligence,
                wisdom: entity.wisdom,
                charisma: entity.charisma,
            },
            proficiencies,
            race: entity.race,
            class: entity.class,
            portrait: entity.portrait,
        })
    }

    /// Sheet subtitle such as `"Level 3 Half-Elf Bard"`.
    ///
    /// Missing race or class are simply skipped.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Level {}", self.level)];
        parts.extend(self.race.iter().cloned());
        parts.extend(self.class.iter().cloned());
        parts.join(" ")
    }
}

/// Parameters for creating a new character.
///
/// `proficiencies` holds the raw user input; it is validated by the service.
#[derive(Debug, Clone)]
pub struct CreateCharacterParam {
    /// Discord ID of the owning user.
    pub user_id: u64,
    pub name: String,
    pub level: i32,
    pub initiative: i32,
    pub abilities: AbilityScores,
    /// Comma separated skill names as typed by the user.
    pub proficiencies: Option<String>,
    pub race: Option<String>,
    pub class: Option<String>,
    /// Portrait URL; the default portrait is used when `None`.
    pub portrait: Option<String>,
}

/// Row values ready to be inserted by the repository.
#[derive(Debug, Clone)]
pub struct InsertCharacterParam {
    pub user_id: u64,
    pub name: String,
    pub created: NaiveDate,
    pub level: i32,
    pub initiative: i32,
    pub abilities: AbilityScores,
    pub proficiencies: Vec<Skill>,
    pub race: Option<String>,
    pub class: Option<String>,
    pub portrait: String,
}

/// Result of a successful `/character create`.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateCharacterOutcome {
    /// The character was stored under the requested name.
    Created(Character),
    /// The requested name was taken, the character was stored as a " Jr." next of kin.
    CreatedNextOfKin {
        character: Character,
        requested_name: String,
    },
    /// The user already owns the maximum number of characters.
    LimitReached { limit: usize },
}
