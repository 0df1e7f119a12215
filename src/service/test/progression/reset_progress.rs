use super::*;

/// Tests clearing one category's records while leaving others alone.
///
/// Expected: Ok(2) with the ARF record still present
#[tokio::test]
async fn removes_only_target_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TrackRecordFactory::new(db)
        .user_id(123456789)
        .category("clone_trooper")
        .track("main_quest")
        .total_value(45)
        .completed_tiers(json!([1, 2, 3]))
        .build()
        .await?;
    TrackRecordFactory::new(db)
        .user_id(123456789)
        .category("clone_trooper")
        .track("medals")
        .total_value(24)
        .completed_tiers(json!({"clone_trooper": [1, 2]}))
        .build()
        .await?;
    TrackRecordFactory::new(db)
        .user_id(123456789)
        .category("arf")
        .track("main_quest")
        .total_value(10)
        .completed_tiers(json!([1]))
        .build()
        .await?;

    let service = ProgressionService::new(db);
    let removed = service
        .reset_progress(123456789, Category::CloneTrooper)
        .await?;

    assert_eq!(removed, 2);

    let cleared = TrackRecordRepository::new(db)
        .find_all_for_category(123456789, Category::CloneTrooper)
        .await?;
    assert!(cleared.is_empty());

    let kept = TrackRecordRepository::new(db)
        .find_all_for_category(123456789, Category::Arf)
        .await?;
    assert_eq!(kept.len(), 1);

    Ok(())
}

/// Tests resetting a user with nothing recorded.
///
/// Expected: Ok(0), no error
#[tokio::test]
async fn reset_with_no_records_is_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProgressionService::new(db);
    let removed = service
        .reset_progress(123456789, Category::CloneTrooper)
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}
