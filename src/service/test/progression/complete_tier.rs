use super::*;

/// Tests a first completion for a brand-new user.
///
/// The default status row is created on the fly and the tier 1 main quest
/// value is credited against the Clone Trooper category.
///
/// Expected: Ok with value 10, new total 10, and no promotion
#[tokio::test]
async fn credits_first_completion_for_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProgressionService::new(db);
    let outcome = service
        .complete_tier(CompleteTierParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            track: Track::MainQuest,
            tier: 1,
        })
        .await?;

    assert_eq!(outcome.category, Category::CloneTrooper);
    assert_eq!(outcome.value, 10);
    assert_eq!(outcome.new_total, 10);
    assert!(outcome.promotion.is_none());

    Ok(())
}

/// Tests that point values follow the user's current category.
///
/// The same medal tier is worth different amounts per category; a user
/// ranked ARC must get the ARC value.
///
/// Expected: Ok with the ARC tier 1 medal value of 12
#[tokio::test]
async fn credits_value_for_current_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserStatusFactory::new(db)
        .user_id(123456789)
        .category("arc")
        .stage(1)
        .build()
        .await?;

    let service = ProgressionService::new(db);
    let outcome = service
        .complete_tier(CompleteTierParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            track: Track::Medals,
            tier: 1,
        })
        .await?;

    assert_eq!(outcome.category, Category::Arc);
    assert_eq!(outcome.value, 12);

    Ok(())
}

/// Tests the one-shot rule on quest tracks.
///
/// Expected: second completion of the same tier fails with
/// DuplicateCompletion and the total is unchanged
#[tokio::test]
async fn rejects_duplicate_quest_tier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProgressionService::new(db);
    let param = CompleteTierParam {
        user_id: 123456789,
        user_name: "TestUser".to_string(),
        track: Track::SideQuest,
        tier: 2,
    };

    service.complete_tier(param.clone()).await?;
    let result = service.complete_tier(param).await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.as_progression()),
        Some(ProgressionError::DuplicateCompletion { tier: 2, .. })
    ));

    let record = TrackRecordRepository::new(db)
        .find(123456789, Category::CloneTrooper, Track::SideQuest)
        .await?
        .unwrap();
    assert_eq!(record.total_value, 5);

    Ok(())
}

/// Tests that medal tiers re-accrue on repeat completions.
///
/// Expected: both completions succeed and the total doubles
#[tokio::test]
async fn accrues_repeat_medal_completions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProgressionService::new(db);
    let param = CompleteTierParam {
        user_id: 123456789,
        user_name: "TestUser".to_string(),
        track: Track::Medals,
        tier: 1,
    };

    let first = service.complete_tier(param.clone()).await?;
    let second = service.complete_tier(param).await?;

    assert_eq!(first.new_total, 6);
    assert_eq!(second.new_total, 12);

    Ok(())
}

/// Tests that two overlapping completions both land.
///
/// Main quest tiers 1 and 2 are worth 10 points each. Both calls are fired
/// at once; the status row lock makes the second wait for the first instead
/// of reading the same prior total, so neither credit is lost.
///
/// Expected: both succeed and the track total is 20
#[tokio::test]
async fn overlapping_completions_both_credit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProgressionService::new(db);
    let first = service.complete_tier(CompleteTierParam {
        user_id: 123456789,
        user_name: "TestUser".to_string(),
        track: Track::MainQuest,
        tier: 1,
    });
    let second = service.complete_tier(CompleteTierParam {
        user_id: 123456789,
        user_name: "TestUser".to_string(),
        track: Track::MainQuest,
        tier: 2,
    });

    let (first, second) = tokio::join!(first, second);
    first?;
    second?;

    let record = TrackRecordRepository::new(db)
        .find(123456789, Category::CloneTrooper, Track::MainQuest)
        .await?
        .unwrap();
    assert_eq!(record.total_value, 20);
    assert!(record.completed_tiers.contains(1));
    assert!(record.completed_tiers.contains(2));

    Ok(())
}

/// Tests that tiers outside the tabulated range are rejected up front.
///
/// Expected: UnknownPointValue and no record written
#[tokio::test]
async fn rejects_out_of_range_tier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProgressionService::new(db);
    let result = service
        .complete_tier(CompleteTierParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            track: Track::MainQuest,
            tier: 5,
        })
        .await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.as_progression()),
        Some(ProgressionError::UnknownPointValue { tier: 5, .. })
    ));

    let record = TrackRecordRepository::new(db)
        .find(123456789, Category::CloneTrooper, Track::MainQuest)
        .await?;
    assert!(record.is_none());

    Ok(())
}

/// Tests the starter path across all four tracks.
///
/// Tier 1 of each track for a fresh Clone Trooper is worth 10 + 4 + 6 + 6 =
/// 26 points, well short of the 250 quota.
///
/// Expected: all four completions succeed, no promotion
#[tokio::test]
async fn four_track_start_stays_below_quota() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProgressionService::new(db);
    for track in [
        Track::MainQuest,
        Track::SideQuest,
        Track::Medals,
        Track::EventVictories,
    ] {
        let outcome = service
            .complete_tier(CompleteTierParam {
                user_id: 123456789,
                user_name: "TestUser".to_string(),
                track,
                tier: 1,
            })
            .await?;
        assert!(outcome.promotion.is_none());
    }

    let snapshot = service.status(123456789, "TestUser").await?;
    assert_eq!(snapshot.total, 26);
    assert_eq!(snapshot.records.len(), 4);

    Ok(())
}

/// Tests a completion that lands exactly on the quota.
///
/// The Clone Trooper stage 1 quota is 250; with 225 banked, the 25-point
/// main quest tier 4 meets it exactly. The old category's records are
/// cleared and the user advances to the next rung.
///
/// Expected: Advanced to ARF stage 1 with Clone Trooper records deleted
#[tokio::test]
async fn promotes_when_quota_met() -> Result<(), AppError> {
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
        .track("medals")
        .total_value(225)
        .completed_tiers(json!({"clone_trooper": [4, 4, 4, 4, 2]}))
        .build()
        .await?;

    let service = ProgressionService::new(db);
    let outcome = service
        .complete_tier(CompleteTierParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            track: Track::MainQuest,
            tier: 4,
        })
        .await?;

    assert_eq!(
        outcome.promotion,
        Some(Promotion::Advanced {
            category: Category::Arf,
            stage: 1,
        })
    );

    let status = UserStatusRepository::new(db).find(123456789).await?.unwrap();
    assert_eq!(status.category, Category::Arf);
    assert_eq!(status.stage, 1);
    assert!(!status.max_rank);

    let leftovers = TrackRecordRepository::new(db)
        .find_all_for_category(123456789, Category::CloneTrooper)
        .await?;
    assert!(leftovers.is_empty());

    Ok(())
}

/// Tests that a total one point short of quota does not promote.
///
/// Expected: no promotion and the records stay in place
#[tokio::test]
async fn does_not_promote_below_quota() -> Result<(), AppError> {
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
        .track("medals")
        .total_value(224)
        .completed_tiers(json!({"clone_trooper": [4, 4, 4, 3, 3]}))
        .build()
        .await?;

    let service = ProgressionService::new(db);
    let outcome = service
        .complete_tier(CompleteTierParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            track: Track::MainQuest,
            tier: 4,
        })
        .await?;

    // 224 + 25 = 249, one short of the 250 quota.
    assert!(outcome.promotion.is_none());

    let status = UserStatusRepository::new(db).find(123456789).await?.unwrap();
    assert_eq!(status.category, Category::CloneTrooper);

    let records = TrackRecordRepository::new(db)
        .find_all_for_category(123456789, Category::CloneTrooper)
        .await?;
    assert_eq!(records.len(), 2);

    Ok(())
}

/// Tests quota completion on the final ladder rung.
///
/// Republic Commando stage 4 has no rung after it; meeting its quota flags
/// the user max-rank instead of advancing.
///
/// Expected: Promotion::MaxRank with the max_rank flag persisted
#[tokio::test]
async fn flags_max_rank_on_final_rung() -> Result<(), AppError> {
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
        .build()
        .await?;
    // Stage 4 quota for Republic Commando is 550 + 150 = 700.
    TrackRecordFactory::new(db)
        .user_id(123456789)
        .category("republic_commando")
        .track("event_victories")
        .total_value(695)
        .completed_tiers(json!({"republic_commando": [4, 4, 4, 4, 4, 4, 4, 4]}))
        .build()
        .await?;

    let service = ProgressionService::new(db);
    let outcome = service
        .complete_tier(CompleteTierParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            track: Track::MainQuest,
            tier: 1,
        })
        .await?;

    assert_eq!(outcome.promotion, Some(Promotion::MaxRank));

    let status = UserStatusRepository::new(db).find(123456789).await?.unwrap();
    assert!(status.max_rank);
    assert_eq!(status.category, Category::RepublicCommando);
    assert_eq!(status.stage, 4);

    // The final quota still clears its category's records.
    let leftovers = TrackRecordRepository::new(db)
        .find_all_for_category(123456789, Category::RepublicCommando)
        .await?;
    assert!(leftovers.is_empty());

    Ok(())
}

/// Tests that max-rank users keep accruing without re-promotion.
///
/// Expected: completion credited, no promotion, records not reset
#[tokio::test]
async fn max_rank_user_accrues_without_promotion() -> Result<(), AppError> {
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
    TrackRecordFactory::new(db)
        .user_id(123456789)
        .category("republic_commando")
        .track("medals")
        .total_value(900)
        .completed_tiers(json!({"republic_commando": [4, 4, 4, 4]}))
        .build()
        .await?;

    let service = ProgressionService::new(db);
    let outcome = service
        .complete_tier(CompleteTierParam {
            user_id: 123456789,
            user_name: "TestUser".to_string(),
            track: Track::Medals,
            tier: 4,
        })
        .await?;

    assert!(outcome.promotion.is_none());
    assert_eq!(outcome.new_total, 1025);

    let records = TrackRecordRepository::new(db)
        .find_all_for_category(123456789, Category::RepublicCommando)
        .await?;
    assert!(!records.is_empty());

    Ok(())
}
