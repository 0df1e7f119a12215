//! Progression engine: tier completions, promotion evaluation, resets.
//!
//! This is the one parameterized implementation of what the legacy bot spread
//! across a dozen copy-pasted command files. Each completion runs inside a
//! single database transaction and takes an exclusive lock on the user's
//! status row before reading any track totals, so overlapping completions for
//! the same user serialize and the read-modify-write of the track total
//! cannot lose an update - the legacy behavior was a plain read then write
//! with last-writer-wins. A transaction alone would not be enough on MySQL:
//! under REPEATABLE READ two overlapping transactions would both see the same
//! prior total from their non-locking snapshots and the second write would
//! overwrite the first.

use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{track_record::TrackRecordRepository, user_status::UserStatusRepository},
    error::{internal::InternalError, progression::ProgressionError, AppError},
    model::{
        category::{next_rung, Category, Track},
        progression::{
            CompleteTierParam, CompletionOutcome, OverrideStatusParam, ProgressionStatus,
            Promotion,
        },
        track_record::{CompletedTiers, TrackRecord, UpsertTrackRecordParam},
        user_status::{UpsertUserStatusParam, UserStatus},
    },
    service::points,
};

/// Service providing the progression ledger's business logic.
///
/// Holds a reference to the database connection; each completion opens its
/// own transaction. No state is cached between calls - everything lives in
/// the store.
pub struct ProgressionService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProgressionService<'a> {
    /// Creates a new ProgressionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a tier completion and evaluates promotion.
    ///
    /// Resolves the user's current category, credits the tabulated point
    /// value to the matching track record, and checks the category total
    /// against the promotion quota - all inside one transaction holding an
    /// exclusive lock on the user's status row. On quota the old category's
    /// records are reset and the user advances one rung. Two overlapping
    /// completions for the same user run one after the other, so both
    /// credits land.
    ///
    /// # Arguments
    /// - `param` - User identity plus the completed (track, tier)
    ///
    /// # Returns
    /// - `Ok(CompletionOutcome)` - Credited value, new track total, and any promotion
    /// - `Err(AppError::ProgressionErr(DuplicateCompletion))` - Tier already
    ///   completed on a track that rejects repeats
    /// - `Err(AppError::ProgressionErr(UnknownPointValue))` - Tier outside 1..=4
    /// - `Err(AppError::DbErr)` - Store failure; the transaction rolls back and
    ///   nothing is partially applied
    pub async fn complete_tier(
        &self,
        param: CompleteTierParam,
    ) -> Result<CompletionOutcome, AppError> {
        let txn = self.db.begin().await?;
        let outcome = Self::complete_tier_in(&txn, param).await?;
        txn.commit().await?;

        if let Some(promotion) = &outcome.promotion {
            tracing::info!(
                "Promotion: user advanced off {} stage via {:?}",
                outcome.category,
                promotion
            );
        }

        Ok(outcome)
    }

    /// Completion body, scoped to an open transaction.
    ///
    /// Dropping the transaction on any error path rolls the whole completion
    /// back, so a failed promotion reset cannot leave a half-applied credit.
    async fn complete_tier_in(
        txn: &DatabaseTransaction,
        param: CompleteTierParam,
    ) -> Result<CompletionOutcome, AppError> {
        let status_repo = UserStatusRepository::new(txn);
        let record_repo = TrackRecordRepository::new(txn);

        // Ensure the status row exists, then re-read it under an exclusive
        // row lock. Every completion for this user contends on that lock, so
        // the total read below cannot go stale before the upsert lands.
        status_repo
            .get_or_create(param.user_id, &param.user_name)
            .await?;
        let status = status_repo
            .find_for_update(param.user_id)
            .await?
            .ok_or(InternalError::MissingAfterUpsert {
                table: "user_status",
            })?;
        let value = points::point_value(status.category, param.track, param.tier)?;

        let (mut completed_tiers, prior_total) = match record_repo
            .find(param.user_id, status.category, param.track)
            .await?
        {
            Some(record) => (record.completed_tiers, record.total_value),
            None => (CompletedTiers::empty_for(param.track), 0),
        };

        if param.track.rejects_duplicates() && completed_tiers.contains(param.tier) {
            return Err(ProgressionError::DuplicateCompletion {
                track: param.track,
                tier: param.tier,
            }
            .into());
        }

        completed_tiers.record(status.category, param.tier);

        let record = record_repo
            .upsert(UpsertTrackRecordParam {
                user_id: param.user_id,
                user_name: param.user_name,
                category: status.category,
                track: param.track,
                total_value: prior_total + value,
                completed_tiers,
            })
            .await?;

        let promotion = Self::evaluate(txn, &status).await?;

        Ok(CompletionOutcome {
            category: status.category,
            track: param.track,
            tier: param.tier,
            value,
            new_total: record.total_value,
            promotion,
        })
    }

    /// Evaluates the promotion quota for a user's current rung.
    ///
    /// Sums `total_value` across the four tracks of the user's current
    /// category and compares it against the quota; a sum equal to the quota
    /// promotes. On promotion the old category's records are deleted and the
    /// status is advanced to the next rung, or flagged max-rank when the
    /// ladder is exhausted. Max-rank users short-circuit to no-op.
    ///
    /// # Arguments
    /// - `txn` - Open transaction shared with the triggering completion
    /// - `status` - The user's current ladder position
    ///
    /// # Returns
    /// - `Ok(Some(Promotion))` - Quota met; records reset and status advanced
    /// - `Ok(None)` - Quota not met, or user already at max rank
    /// - `Err(AppError)` - Store failure or missing quota configuration
    pub async fn evaluate(
        txn: &DatabaseTransaction,
        status: &UserStatus,
    ) -> Result<Option<Promotion>, AppError> {
        if status.max_rank {
            return Ok(None);
        }

        let record_repo = TrackRecordRepository::new(txn);
        let status_repo = UserStatusRepository::new(txn);

        let records = record_repo
            .find_all_for_category(status.user_id, status.category)
            .await?;
        let total: i32 = records.iter().map(|r| r.total_value).sum();
        let quota = points::promotion_quota(status.category, status.stage)?;

        if total < quota {
            return Ok(None);
        }

        record_repo
            .delete_all_for_category(status.user_id, status.category)
            .await?;

        match next_rung(status.category, status.stage) {
            Some((category, stage)) => {
                status_repo
                    .upsert(UpsertUserStatusParam {
                        user_id: status.user_id,
                        user_name: status.user_name.clone(),
                        category,
                        stage,
                        max_rank: false,
                    })
                    .await?;
                Ok(Some(Promotion::Advanced { category, stage }))
            }
            None => {
                status_repo
                    .upsert(UpsertUserStatusParam {
                        user_id: status.user_id,
                        user_name: status.user_name.clone(),
                        category: status.category,
                        stage: status.stage,
                        max_rank: true,
                    })
                    .await?;
                Ok(Some(Promotion::MaxRank))
            }
        }
    }

    /// Builds a status snapshot for the user's current category.
    ///
    /// Read-only; creates the default status row on first access like every
    /// other entry point.
    ///
    /// # Returns
    /// - `Ok(ProgressionStatus)` - Ladder position, per-track records, totals
    /// - `Err(AppError)` - Store failure
    pub async fn status(
        &self,
        user_id: u64,
        user_name: &str,
    ) -> Result<ProgressionStatus, AppError> {
        let status_repo = UserStatusRepository::new(self.db);
        let record_repo = TrackRecordRepository::new(self.db);

        let status = status_repo.get_or_create(user_id, user_name).await?;
        let records = record_repo
            .find_all_for_category(user_id, status.category)
            .await?;

        let total: i32 = records.iter().map(|r| r.total_value).sum();
        let quota = points::promotion_quota(status.category, status.stage)?;

        let records: BTreeMap<Track, TrackRecord> =
            records.into_iter().map(|r| (r.track, r)).collect();

        Ok(ProgressionStatus {
            status,
            records,
            total,
            quota,
        })
    }

    /// Admin override of a user's ladder position.
    ///
    /// Places the user directly at (category, stage), clearing any max-rank
    /// flag. Track records are left alone; combine with `reset_progress` to
    /// also clear accumulated points.
    ///
    /// # Returns
    /// - `Ok(UserStatus)` - The persisted position
    /// - `Err(AppError)` - Store failure
    pub async fn override_status(
        &self,
        param: OverrideStatusParam,
    ) -> Result<UserStatus, AppError> {
        let status_repo = UserStatusRepository::new(self.db);

        let status = status_repo
            .upsert(UpsertUserStatusParam {
                user_id: param.user_id,
                user_name: param.user_name,
                category: param.category,
                stage: param.stage,
                max_rank: false,
            })
            .await?;

        tracing::info!(
            "Status override: user {} set to {} stage {}",
            status.user_id,
            status.category,
            status.stage
        );

        Ok(status)
    }

    /// Admin reset of a user's accumulated progress in one category.
    ///
    /// Hard-deletes the four track records for (user, category). The user's
    /// ladder position is untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed
    /// - `Err(AppError)` - Store failure
    pub async fn reset_progress(
        &self,
        user_id: u64,
        category: Category,
    ) -> Result<u64, AppError> {
        let record_repo = TrackRecordRepository::new(self.db);
        let removed = record_repo
            .delete_all_for_category(user_id, category)
            .await?;

        tracing::info!(
            "Progress reset: user {} cleared {} records in {}",
            user_id,
            removed,
            category
        );

        Ok(removed)
    }
}
