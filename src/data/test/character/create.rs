use super::*;

/// Tests creating a character without proficiencies.
///
/// Verifies that the repository stores every sheet value and writes NULL for an
/// empty proficiency list.
///
/// Expected: Ok with character created and proficiencies NULL
#[tokio::test]
async fn creates_character_without_proficiencies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo.create(insert_param(42, "Lidda")).await?;

    assert_eq!(character.user_id, "42");
    assert_eq!(character.name, "Lidda");
    assert_eq!(character.level, 1);
    assert_eq!(character.initiative, 2);
    assert_eq!(character.dexterity, 14);
    assert_eq!(character.charisma, 15);
    assert_eq!(
        character.created,
        NaiveDate::from_ymd_opt(2023, 4, 16).unwrap()
    );
    assert!(character.proficiencies.is_none());

    Ok(())
}

/// Tests creating a character with proficiencies.
///
/// Verifies that proficiencies are stored as comma separated skill keys.
///
/// Expected: Ok with proficiencies stored as keys
#[tokio::test]
async fn stores_proficiencies_as_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = insert_param(42, "Lidda");
    param.proficiencies = vec![Skill::Acrobatics, Skill::SleightOfHand];
    param.race = Some("Halfling".to_string());
    param.class = Some("Rogue".to_string());

    let repo = CharacterRepository::new(db);
    let character = repo.create(param).await?;

    assert_eq!(
        character.proficiencies.as_deref(),
        Some("acrobatics,sleightofhand")
    );
    assert_eq!(character.race.as_deref(), Some("Halfling"));
    assert_eq!(character.class.as_deref(), Some("Rogue"));

    let stored = entity::prelude::Character::find().count(db).await?;
    assert_eq!(stored, 1);

    Ok(())
}

/// Tests creating a character inside a transaction that is rolled back.
///
/// Verifies the repository runs on a transaction and that its writes are discarded with
/// it.
///
/// Expected: Ok with the row visible inside the transaction and gone after rollback
#[tokio::test]
async fn create_in_rolled_back_transaction_is_discarded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    let repo = CharacterRepository::new(&txn);
    repo.create(insert_param(42, "Tordek")).await?;
    assert_eq!(repo.count_by_user(42).await?, 1);
    txn.rollback().await?;

    assert_eq!(CharacterRepository::new(db).count_by_user(42).await?, 0);

    Ok(())
}
