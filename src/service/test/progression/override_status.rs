use super::*;

/// Tests placing a brand-new user directly at a rung.
///
/// Expected: Ok with the position persisted as given
#[tokio::test]
async fn places_new_user_at_rung() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProgressionService::new(db);
    let status = service
        .override_status(OverrideStatusParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            category: Category::Arc,
            stage: 3,
        })
        .await?;

    assert_eq!(status.category, Category::Arc);
    assert_eq!(status.stage, 3);
    assert!(!status.max_rank);

    Ok(())
}

/// Tests that an override clears a previous max-rank flag.
///
/// Demoting a max-rank user back onto the ladder must re-enable promotion
/// evaluation for them.
///
/// Expected: persisted position with max_rank false
#[tokio::test]
async fn override_clears_max_rank() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserStatusFactory::new(db)
        .user_id(123456789)
        .category("republic_commando")
        .stage(4)
        .max_rank(true)
        .build()
        .await?;

    let service = ProgressionService::new(db);
    let status = service
        .override_status(OverrideStatusParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            category: Category::Arf,
            stage: 2,
        })
        .await?;

    assert_eq!(status.category, Category::Arf);
    assert_eq!(status.stage, 2);
    assert!(!status.max_rank);

    let persisted = UserStatusRepository::new(db).find(123456789).await?.unwrap();
    assert!(!persisted.max_rank);

    Ok(())
}

/// Tests that an override leaves track records untouched.
///
/// Expected: the seeded record survives the rung change
#[tokio::test]
async fn override_keeps_track_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserStatusFactory::new(db)
        .user_id(123456789)
        .category("clone_trooper")
        .stage(1)
        .build()
        .await?;
    TrackRecordFactory::new(db)
        .user_id(123456789)
        .category("clone_trooper")
        .track("main_quest")
        .total_value(45)
        .completed_tiers(json!([1, 2, 3]))
        .build()
        .await?;

    let service = ProgressionService::new(db);
    service
        .override_status(OverrideStatusParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            category: Category::Arc,
            stage: 1,
        })
        .await?;

    let record = TrackRecordRepository::new(db)
        .find(123456789, Category::CloneTrooper, Track::MainQuest)
        .await?;
    assert!(record.is_some());

    Ok(())
}
