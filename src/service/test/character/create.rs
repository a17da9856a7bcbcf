use super::*;

/// Tests creating a character under a free name.
///
/// Verifies the default portrait is applied and the character is returned as created.
///
/// Expected: Ok(Created)
#[tokio::test]
async fn creates_character_with_default_portrait() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CharacterService::new(db);
    let outcome = service.create(create_param(42, "Mialee")).await?;

    match outcome {
        CreateCharacterOutcome::Created(character) => {
            assert_eq!(character.user_id, 42);
            assert_eq!(character.name, "Mialee");
            assert_eq!(character.portrait, DEFAULT_PORTRAIT_URL);
            assert!(character.proficiencies.is_empty());
        }
        other => panic!("expected Created, got {:?}", other),
    }

    Ok(())
}

/// Tests that a supplied portrait is kept and proficiencies are normalised.
///
/// Expected: Ok(Created) with canonical proficiency order
#[tokio::test]
async fn keeps_portrait_and_normalises_proficiencies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = create_param(42, "Lidda");
    param.portrait = Some("https://example.com/lidda.png".to_string());
    param.proficiencies = Some("Stealth, sleight of hand, Acrobatics".to_string());

    let service = CharacterService::new(db);
    let outcome = service.create(param).await?;

    let CreateCharacterOutcome::Created(character) = outcome else {
        panic!("expected Created");
    };
    assert_eq!(character.portrait, "https://example.com/lidda.png");
    assert_eq!(
        character.proficiencies,
        vec![Skill::Acrobatics, Skill::SleightOfHand, Skill::Stealth]
    );

    Ok(())
}

/// Tests that a duplicate name creates a next of kin.
///
/// Expected: Ok(CreatedNextOfKin) named "Ember Jr. Jr."
#[tokio::test]
async fn creates_next_of_kin_for_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character_for_user(db, "42", "Ember").await?;
    factory::create_character_for_user(db, "42", "Ember Jr.").await?;

    let service = CharacterService::new(db);
    let outcome = service.create(create_param(42, "Ember")).await?;

    match outcome {
        CreateCharacterOutcome::CreatedNextOfKin {
            character,
            requested_name,
        } => {
            assert_eq!(character.name, "Ember Jr. Jr.");
            assert_eq!(requested_name, "Ember");
        }
        other => panic!("expected CreatedNextOfKin, got {:?}", other),
    }

    Ok(())
}

/// Tests that another user's character name does not cause a rename.
///
/// Expected: Ok(Created) under the requested name
#[tokio::test]
async fn same_name_for_different_user_is_not_renamed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character_for_user(db, "7", "Ember").await?;

    let service = CharacterService::new(db);
    let outcome = service.create(create_param(42, "Ember")).await?;

    assert!(matches!(
        outcome,
        CreateCharacterOutcome::Created(ref character) if character.name == "Ember"
    ));

    Ok(())
}

/// Tests the per-user character limit.
///
/// Expected: Ok(LimitReached) and nothing stored
#[tokio::test]
async fn refuses_character_over_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_characters_for_user(db, "42", MAX_CHARACTERS).await?;

    let service = CharacterService::new(db);
    let outcome = service.create(create_param(42, "One Too Many")).await?;

    assert_eq!(
        outcome,
        CreateCharacterOutcome::LimitReached {
            limit: MAX_CHARACTERS
        }
    );
    let stored = entity::prelude::Character::find().count(db).await?;
    assert_eq!(stored, MAX_CHARACTERS as u64);

    Ok(())
}

/// Tests that an unknown skill is rejected before anything is stored.
///
/// Expected: Err(BadRequest) naming the unknown skill
#[tokio::test]
async fn rejects_unknown_skill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = create_param(42, "Mialee");
    param.proficiencies = Some("Arcana, Fireball".to_string());

    let service = CharacterService::new(db);
    let result = service.create(param).await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert!(msg.contains("\"fireball\" is not a skill"));
            assert!(msg.contains("Sleight of Hand"));
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
    assert_eq!(entity::prelude::Character::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an out of range initiative is refused before anything is stored.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_out_of_range_initiative() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = create_param(42, "Regdar");
    param.initiative = -25;

    let service = CharacterService::new(db);
    let result = service.create(param).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Character::find().count(db).await?, 0);

    Ok(())
}

/// Tests filling the character limit one create at a time.
///
/// Each create counts the characters stored by the previous ones, so the create after
/// the limit is refused.
///
/// Expected: Ok(Created) up to the limit, then Ok(LimitReached)
#[tokio::test]
async fn creates_up_to_limit_then_refuses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CharacterService::new(db);
    for n in 0..MAX_CHARACTERS {
        let outcome = service
            .create(create_param(42, &format!("Hero {}", n)))
            .await?;
        assert!(matches!(outcome, CreateCharacterOutcome::Created(_)));
    }

    let outcome = service.create(create_param(42, "Hero 0")).await?;

    assert_eq!(
        outcome,
        CreateCharacterOutcome::LimitReached {
            limit: MAX_CHARACTERS
        }
    );
    let stored = entity::prelude::Character::find().count(db).await?;
    assert_eq!(stored, MAX_CHARACTERS as u64);

    Ok(())
}
