use super::*;

/// Tests fetching an owned character as a domain model.
///
/// Expected: Ok with parsed proficiencies
#[tokio::test]
async fn returns_owned_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::character::CharacterFactory::new(db)
        .user_id("42")
        .name("Jozan")
        .proficiencies("insight,medicine")
        .build()
        .await?;

    let service = CharacterService::new(db);
    let character = service.get_by_name(42, "Jozan").await?;

    assert_eq!(character.name, "Jozan");
    assert_eq!(
        character.proficiencies,
        vec![Skill::Insight, Skill::Medicine]
    );

    Ok(())
}

/// Tests the not found message for an unknown character.
///
/// Expected: Err(NotFound) with the user-facing message
#[tokio::test]
async fn reports_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character_for_user(db, "7", "Jozan").await?;

    let service = CharacterService::new(db);
    let result = service.get_by_name(42, "Jozan").await;

    match result {
        Err(AppError::NotFound(msg)) => {
            assert_eq!(msg, "You do not have a character named \"Jozan\"")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
