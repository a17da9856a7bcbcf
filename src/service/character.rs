use std::ops::RangeInclusive;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::character::CharacterRepository,
    error::AppError,
    model::{
        character::{
            Character, CreateCharacterOutcome, CreateCharacterParam, InsertCharacterParam,
        },
        skill::Skill,
    },
};

/// Maximum number of characters a single user may have saved.
pub const MAX_CHARACTERS: usize = 5;

/// Portrait shown when a character is created without one.
pub const DEFAULT_PORTRAIT_URL: &str = "https://bitbucket.org/comp-350-2/cantrip-discord-bot/raw/947ae7ddbb6e2396ee55864c991e5a2935331ee6/assets/default_portrait.png";

/// Suffix appended to a duplicate name to create a next of kin.
const NEXT_OF_KIN_SUFFIX: &str = " Jr.";

pub const LEVEL_RANGE: RangeInclusive<i32> = 1..=20;
pub const INITIATIVE_RANGE: RangeInclusive<i32> = -20..=20;
pub const ABILITY_SCORE_RANGE: RangeInclusive<i32> = 1..=30;

/// Discord caps autocomplete responses at 25 choices.
const MAX_AUTOCOMPLETE_CHOICES: usize = 25;

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character for a user.
    ///
    /// Proficiencies are validated first. If the user already owns `MAX_CHARACTERS`
    /// characters nothing is stored. A name the user already uses gets " Jr." appended
    /// until it is free. The limit check, name lookup and insert share one transaction.
    ///
    /// # Returns
    /// - `Ok(CreateCharacterOutcome)` - Created, created as next of kin, or limit reached
    /// - `Err(AppError::BadRequest)` - A score is out of range or proficiencies contain an unknown skill
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateCharacterParam,
    ) -> Result<CreateCharacterOutcome, AppError> {
        check_range("Level", param.level, &LEVEL_RANGE)?;
        check_range("Initiative", param.initiative, &INITIATIVE_RANGE)?;
        for (label, score) in param.abilities.labeled() {
            check_range(label, score, &ABILITY_SCORE_RANGE)?;
        }

        let proficiencies = match param.proficiencies.as_deref() {
            Some(raw) => Skill::parse_list(raw).map_err(|unknown| {
                AppError::BadRequest(format!(
                    "\"{}\" is not a skill. Valid skills are: {}",
                    unknown,
                    Skill::join_display_names(&Skill::ALL)
                ))
            })?,
            None => Vec::new(),
        };

        let txn = self.db.begin().await?;
        let repo = CharacterRepository::new(&txn);

        if repo.count_by_user(param.user_id).await? >= MAX_CHARACTERS as u64 {
            txn.rollback().await?;
            return Ok(CreateCharacterOutcome::LimitReached {
                limit: MAX_CHARACTERS,
            });
        }

        let existing = repo.get_names_by_user(param.user_id).await?;

        let name = next_free_name(&param.name, &existing);
        let renamed = name != param.name;

        let entity = repo
            .create(InsertCharacterParam {
                user_id: param.user_id,
                name,
                created: Utc::now().date_naive(),
                level: param.level,
                initiative: param.initiative,
                abilities: param.abilities,
                proficiencies,
                race: param.race,
                class: param.class,
                portrait: param
                    .portrait
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_PORTRAIT_URL.to_string()),
            })
            .await?;

        txn.commit().await?;

        let character = Character::from_entity(entity)?;

        if renamed {
            Ok(CreateCharacterOutcome::CreatedNextOfKin {
                character,
                requested_name: param.name,
            })
        } else {
            Ok(CreateCharacterOutcome::Created(character))
        }
    }

    /// Gets a user's character by name.
    ///
    /// # Returns
    /// - `Ok(Character)` - The character
    /// - `Err(AppError::NotFound)` - The user has no character with that name
    pub async fn get_by_name(&self, user_id: u64, name: &str) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        let entity = repo
            .find_by_user_and_name(user_id, name)
            .await?
            .ok_or_else(|| not_found(name))?;

        Character::from_entity(entity)
    }

    /// Suggests a user's character names for slash command autocomplete.
    ///
    /// Matches names starting with `partial`, ignoring case.
    pub async fn autocomplete_names(
        &self,
        user_id: u64,
        partial: &str,
    ) -> Result<Vec<String>, AppError> {
        let repo = CharacterRepository::new(self.db);
        let partial = partial.to_lowercase();

        let names = repo
            .get_names_by_user(user_id)
            .await?
            .into_iter()
            .filter(|name| name.to_lowercase().starts_with(&partial))
            .take(MAX_AUTOCOMPLETE_CHOICES)
            .collect();

        Ok(names)
    }

    /// Deletes a user's character.
    ///
    /// # Returns
    /// - `Ok(())` - Character deleted
    /// - `Err(AppError::NotFound)` - The character no longer exists for this user
    pub async fn delete(&self, user_id: u64, character: &Character) -> Result<(), AppError> {
        let repo = CharacterRepository::new(self.db);

        if !repo.delete(character.id, user_id).await? {
            return Err(not_found(&character.name));
        }

        Ok(())
    }
}

fn check_range(label: &str, value: i32, range: &RangeInclusive<i32>) -> Result<(), AppError> {
    if range.contains(&value) {
        return Ok(());
    }

    Err(AppError::BadRequest(format!(
        "{} must be between {} and {}.",
        label,
        range.start(),
        range.end()
    )))
}

fn not_found(name: &str) -> AppError {
    AppError::NotFound(format!("You do not have a character named \"{}\"", name))
}

/// Appends " Jr." to `requested` until it no longer collides with `existing`.
fn next_free_name(requested: &str, existing: &[String]) -> String {
    let mut name = requested.to_string();
    while existing.iter().any(|taken| *taken == name) {
        name.push_str(NEXT_OF_KIN_SUFFIX);
    }
    name
}
