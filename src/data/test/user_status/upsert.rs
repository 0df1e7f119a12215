use super::*;

/// Tests creating a ladder position via upsert.
///
/// Expected: Ok with the persisted position matching the parameters
#[tokio::test]
async fn creates_new_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserStatusRepository::new(db);
    let status = repo
        .upsert(UpsertUserStatusParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            category: Category::Arf,
            stage: 2,
            max_rank: false,
        })
        .await?;

    assert_eq!(status.category, Category::Arf);
    assert_eq!(status.stage, 2);

    Ok(())
}

/// Tests replacing an existing ladder position.
///
/// Verifies the admin-override path: category, stage, and display name are
/// all replaced in place.
///
/// Expected: Ok with the persisted position holding the second write's values
#[tokio::test]
async fn replaces_existing_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserStatusFactory::new(db)
        .user_id(123456789)
        .user_name("OldName")
        .category("clone_trooper")
        .stage(1)
        .build()
        .await?;

    let repo = UserStatusRepository::new(db);
    let status = repo
        .upsert(UpsertUserStatusParam {
            user_id: 123456789,
            user_name: "NewName".to_string(),
            category: Category::RepublicCommando,
            stage: 3,
            max_rank: false,
        })
        .await?;

    assert_eq!(status.user_name, "NewName");
    assert_eq!(status.category, Category::RepublicCommando);
    assert_eq!(status.stage, 3);

    Ok(())
}
