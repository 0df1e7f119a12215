use super::*;

/// Tests the category-wide reset used by promotions.
///
/// Verifies that all four of a user's records for one category are removed
/// while other categories and users are untouched.
///
/// Expected: Ok(4) with only the CloneTrooper rows removed
#[tokio::test]
async fn clears_exactly_one_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for track in ["main_quest", "side_quest", "medals", "event_victories"] {
        TrackRecordFactory::new(db)
            .user_id(123456789)
            .category("clone_trooper")
            .track(track)
            .total_value(10)
            .build()
            .await?;
    }
    TrackRecordFactory::new(db)
        .user_id(123456789)
        .category("arf")
        .track("main_quest")
        .total_value(25)
        .build()
        .await?;
    TrackRecordFactory::new(db)
        .user_id(987654321)
        .category("clone_trooper")
        .track("main_quest")
        .total_value(10)
        .build()
        .await?;

    let repo = TrackRecordRepository::new(db);
    let removed = repo
        .delete_all_for_category(123456789, Category::CloneTrooper)
        .await?;

    assert_eq!(removed, 4);
    assert!(repo
        .find_all_for_category(123456789, Category::CloneTrooper)
        .await?
        .is_empty());
    assert_eq!(
        repo.find_all_for_category(123456789, Category::Arf)
            .await?
            .len(),
        1
    );
    assert_eq!(
        repo.find_all_for_category(987654321, Category::CloneTrooper)
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Tests resetting a category with no records.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_category_reset_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackRecordRepository::new(db);
    let removed = repo
        .delete_all_for_category(123456789, Category::RepublicCommando)
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}
