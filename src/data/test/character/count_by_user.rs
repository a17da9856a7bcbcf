use super::*;

/// Tests counting characters per owner.
///
/// Verifies that only the given user's characters are counted.
///
/// Expected: Ok with per-user counts
#[tokio::test]
async fn counts_only_owned_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_characters_for_user(db, "42", 3).await?;
    factory::create_character_for_user(db, "7", "Someone Else").await?;

    let repo = CharacterRepository::new(db);

    assert_eq!(repo.count_by_user(42).await?, 3);
    assert_eq!(repo.count_by_user(7).await?, 1);
    assert_eq!(repo.count_by_user(1).await?, 0);

    Ok(())
}
