//! Track record repository for database operations.
//!
//! This module provides the `TrackRecordRepository` for managing per-track
//! ledger rows. It handles lookups, last-writer-wins upserts, and the resets
//! issued by promotions and administrative commands, with conversion between
//! entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        category::{Category, Track},
        track_record::{TrackRecord, UpsertTrackRecordParam},
    },
};

/// Repository providing database operations for track records.
///
/// Generic over the connection so the same repository runs against the pool
/// or inside an open transaction; the progression engine uses the latter to
/// keep each completion atomic.
pub struct TrackRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackRecordRepository<'a, C> {
    /// Creates a new TrackRecordRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the track record for (user, category, track).
    ///
    /// # Returns
    /// - `Ok(Some(TrackRecord))` - Record found
    /// - `Ok(None)` - User has not touched this track in this category yet
    /// - `Err(AppError)` - Database error or corrupt stored row
    pub async fn find(
        &self,
        user_id: u64,
        category: Category,
        track: Track,
    ) -> Result<Option<TrackRecord>, AppError> {
        let entity = entity::prelude::TrackRecord::find_by_id((
            user_id.to_string(),
            category.as_str().to_string(),
            track.as_str().to_string(),
        ))
        .one(self.db)
        .await?;

        entity.map(TrackRecord::from_entity).transpose()
    }

    /// Finds all track records for (user, category).
    ///
    /// Returns at most four rows, one per track the user has touched. Used by
    /// promotion evaluation and status reporting to sum category totals.
    ///
    /// # Returns
    /// - `Ok(Vec<TrackRecord>)` - Records found (empty if none)
    /// - `Err(AppError)` - Database error or corrupt stored row
    pub async fn find_all_for_category(
        &self,
        user_id: u64,
        category: Category,
    ) -> Result<Vec<TrackRecord>, AppError> {
        let entities = entity::prelude::TrackRecord::find()
            .filter(entity::track_record::Column::UserId.eq(user_id.to_string()))
            .filter(entity::track_record::Column::Category.eq(category.as_str()))
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(TrackRecord::from_entity)
            .collect()
    }

    /// Upserts a track record from parameter model.
    ///
    /// Insert-or-replace keyed by (user, category, track): last writer wins,
    /// no concurrency token. The display name is refreshed and `updated_at`
    /// stamped on every write. The persisted row is read back so callers see
    /// exactly what was stored.
    ///
    /// # Returns
    /// - `Ok(TrackRecord)` - The persisted record
    /// - `Err(AppError)` - Database error, serialization failure, or the row
    ///   vanishing between write and read-back
    pub async fn upsert(&self, param: UpsertTrackRecordParam) -> Result<TrackRecord, AppError> {
        let completed_tiers = serde_json::to_value(&param.completed_tiers)?;

        entity::prelude::TrackRecord::insert(entity::track_record::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            track: ActiveValue::Set(param.track.as_str().to_string()),
            user_name: ActiveValue::Set(param.user_name),
            total_value: ActiveValue::Set(param.total_value),
            completed_tiers: ActiveValue::Set(completed_tiers),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::track_record::Column::UserId,
                entity::track_record::Column::Category,
                entity::track_record::Column::Track,
            ])
            .update_columns([
                entity::track_record::Column::UserName,
                entity::track_record::Column::TotalValue,
                entity::track_record::Column::CompletedTiers,
                entity::track_record::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        self.find(param.user_id, param.category, param.track)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterUpsert {
                    table: "track_record",
                }
                .into()
            })
    }

    /// Deletes the track record for (user, category, track).
    ///
    /// Deleting an absent row is a no-op, not an error.
    ///
    /// # Returns
    /// - `Ok(())` - Row removed or was never there
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(
        &self,
        user_id: u64,
        category: Category,
        track: Track,
    ) -> Result<(), AppError> {
        entity::prelude::TrackRecord::delete_by_id((
            user_id.to_string(),
            category.as_str().to_string(),
            track.as_str().to_string(),
        ))
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes every track record for (user, category).
    ///
    /// Used by promotion resets and the administrative reset command. Other
    /// categories' records are untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0..=4)
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_all_for_category(
        &self,
        user_id: u64,
        category: Category,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::TrackRecord::delete_many()
            .filter(entity::track_record::Column::UserId.eq(user_id.to_string()))
            .filter(entity::track_record::Column::Category.eq(category.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
