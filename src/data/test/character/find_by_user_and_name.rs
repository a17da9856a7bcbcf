use super::*;

/// Tests finding a character by owner and name.
///
/// Expected: Ok(Some) with the matching character
#[tokio::test]
async fn finds_owned_character_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_character_for_user(db, "42", "Ember").await?;

    let repo = CharacterRepository::new(db);
    let found = repo.find_by_user_and_name(42, "Ember").await?;

    assert_eq!(found.map(|c| c.id), Some(created.id));

    Ok(())
}

/// Tests that another user's character with the same name is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_characters_of_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character_for_user(db, "7", "Ember").await?;

    let repo = CharacterRepository::new(db);
    let found = repo.find_by_user_and_name(42, "Ember").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that name matching is exact.
///
/// Expected: Ok(None) for a prefix of an existing name
#[tokio::test]
async fn requires_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character_for_user(db, "42", "Ember Jr.").await?;

    let repo = CharacterRepository::new(db);
    let found = repo.find_by_user_and_name(42, "Ember").await?;

    assert!(found.is_none());

    Ok(())
}
