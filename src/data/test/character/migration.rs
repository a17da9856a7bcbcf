use super::*;

use ::migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use crate::{error::AppError, model::character::Character};

/// Tests the repository against the schema built by the migrations.
///
/// Runs every migration on a fresh in-memory database instead of the entity-derived
/// test schema, then stores and reads back a character.
///
/// Expected: Ok with the stored row converting into a `Character`
#[tokio::test]
async fn repository_works_on_migrated_schema() -> Result<(), AppError> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    let repo = CharacterRepository::new(&db);
    let mut param = insert_param(42, "Soveliss");
    param.proficiencies = vec![Skill::Perception, Skill::Survival];
    param.race = Some("Elf".to_string());
    repo.create(param).await?;

    let stored = repo
        .find_by_user_and_name(42, "Soveliss")
        .await?
        .expect("character stored");
    let character = Character::from_entity(stored)?;

    assert_eq!(character.user_id, 42);
    assert_eq!(character.name, "Soveliss");
    assert_eq!(
        character.proficiencies,
        vec![Skill::Perception, Skill::Survival]
    );
    assert_eq!(character.race.as_deref(), Some("Elf"));
    assert_eq!(repo.count_by_user(42).await?, 1);

    Ok(())
}

/// Tests that running the migrations twice leaves nothing pending.
///
/// Expected: Ok with no pending migrations after the second run
#[tokio::test]
async fn migrations_are_idempotent() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;
    Migrator::up(&db, None).await?;

    assert!(Migrator::get_pending_migrations(&db).await?.is_empty());

    Ok(())
}
