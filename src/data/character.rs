//! Character data repository for database operations.
//!
//! This module provides the `CharacterRepository` for managing player character records.
//! Owner IDs are stored as strings, so every query converts the u64 Discord ID at this
//! boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{character::InsertCharacterParam, skill::Skill};

/// Repository providing database operations for player characters.
///
/// Works on a plain connection or inside a transaction.
pub struct CharacterRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new character.
    ///
    /// An empty proficiency list is stored as NULL.
    ///
    /// # Arguments
    /// - `param` - Fully validated row values
    ///
    /// # Returns
    /// - `Ok(Model)` - The created character
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: InsertCharacterParam,
    ) -> Result<entity::character::Model, DbErr> {
        let proficiencies = if param.proficiencies.is_empty() {
            None
        } else {
            Some(Skill::join_keys(&param.proficiencies))
        };

        entity::character::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            name: ActiveValue::Set(param.name),
            created: ActiveValue::Set(param.created),
            level: ActiveValue::Set(param.level),
            initiative: ActiveValue::Set(param.initiative),
            strength: ActiveValue::Set(param.abilities.strength),
            dexterity: ActiveValue::Set(param.abilities.dexterity),
            constitution: ActiveValue::Set(param.abilities.constitution),
            intelligence: ActiveValue::Set(param.abilities.intelligence),
            wisdom: ActiveValue::Set(param.abilities.wisdom),
            charisma: ActiveValue::Set(param.abilities.charisma),
            proficiencies: ActiveValue::Set(proficiencies),
            race: ActiveValue::Set(param.race),
            class: ActiveValue::Set(param.class),
            portrait: ActiveValue::Set(param.portrait),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the names of every character a user owns, alphabetically.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the owner
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Character names, empty if the user owns none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_names_by_user(&self, user_id: u64) -> Result<Vec<String>, DbErr> {
        entity::prelude::Character::find()
            .select_only()
            .column(entity::character::Column::Name)
            .filter(entity::character::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::character::Column::Name)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Counts the characters a user owns.
    pub async fn count_by_user(&self, user_id: u64) -> Result<u64, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id.to_string()))
            .count(self.db)
            .await
    }

    /// Finds a user's character by exact name.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user owns a character with that name
    /// - `Ok(None)` - No such character for this user (other users' characters are ignored)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_and_name(
        &self,
        user_id: u64,
        name: &str,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id.to_string()))
            .filter(entity::character::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Deletes a character if it belongs to the given user.
    ///
    /// # Returns
    /// - `Ok(true)` - Character deleted
    /// - `Ok(false)` - No character with that ID owned by the user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_many()
            .filter(entity::character::Column::Id.eq(id))
            .filter(entity::character::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
