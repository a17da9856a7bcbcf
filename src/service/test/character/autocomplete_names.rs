use super::*;

/// Tests case-insensitive prefix matching of character names.
///
/// Expected: Ok with only the matching names of the invoking user
#[tokio::test]
async fn suggests_matching_names_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character_for_user(db, "42", "Regdar").await?;
    factory::create_character_for_user(db, "42", "Redgar the Bold").await?;
    factory::create_character_for_user(db, "42", "Mialee").await?;
    factory::create_character_for_user(db, "7", "Reginald").await?;

    let service = CharacterService::new(db);
    let names = service.autocomplete_names(42, "RE").await?;

    assert_eq!(
        names,
        vec!["Redgar the Bold".to_string(), "Regdar".to_string()]
    );

    Ok(())
}

/// Tests that an empty partial suggests every owned character.
///
/// Expected: Ok with all names
#[tokio::test]
async fn empty_partial_suggests_everything() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_characters_for_user(db, "42", 3).await?;

    let service = CharacterService::new(db);
    let names = service.autocomplete_names(42, "").await?;

    assert_eq!(names.len(), 3);

    Ok(())
}
