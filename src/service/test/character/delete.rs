use super::*;

/// Tests deleting a character fetched through the service.
///
/// Expected: Ok and the character can no longer be fetched
#[tokio::test]
async fn deletes_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character_for_user(db, "42", "Ember").await?;

    let service = CharacterService::new(db);
    let character = service.get_by_name(42, "Ember").await?;
    service.delete(42, &character).await?;

    assert!(matches!(
        service.get_by_name(42, "Ember").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a character that was already removed (e.g. a second button press).
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn deleting_twice_reports_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character_for_user(db, "42", "Ember").await?;

    let service = CharacterService::new(db);
    let character = service.get_by_name(42, "Ember").await?;
    service.delete(42, &character).await?;

    let result = service.delete(42, &character).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
