use super::*;

/// Tests finding a seeded user status.
///
/// Expected: Ok(Some) with entity fields converted into the domain model
#[tokio::test]
async fn finds_seeded_status() -> Result<(), AppError> {
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

    let repo = UserStatusRepository::new(db);
    let status = repo.find(123456789).await?;

    assert!(status.is_some());
    let status = status.unwrap();
    assert_eq!(status.category, Category::RepublicCommando);
    assert_eq!(status.stage, 4);
    assert!(status.max_rank);

    Ok(())
}

/// Tests finding a user with no status row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserStatusRepository::new(db);
    let status = repo.find(123456789).await?;

    assert!(status.is_none());

    Ok(())
}
