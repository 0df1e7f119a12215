//! User status repository for database operations.
//!
//! This module provides the `UserStatusRepository` for managing each user's
//! position on the promotion ladder. Rows are created lazily with defaults on
//! first access, matching the legacy bot's insert-if-missing behavior.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, EntityTrait, QuerySelect,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        category::Category,
        user_status::{UpsertUserStatusParam, UserStatus},
    },
};

/// Repository providing database operations for user ladder positions.
///
/// Generic over the connection so the same repository runs against the pool
/// or inside an open transaction.
pub struct UserStatusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserStatusRepository<'a, C> {
    /// Creates a new UserStatusRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user's ladder position by Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserStatus))` - Status row found
    /// - `Ok(None)` - User has never touched the progression system
    /// - `Err(AppError)` - Database error or corrupt stored row
    pub async fn find(&self, user_id: u64) -> Result<Option<UserStatus>, AppError> {
        let entity = entity::prelude::UserStatus::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(UserStatus::from_entity).transpose()
    }

    /// Finds a user's ladder position and takes an exclusive row lock on it.
    ///
    /// Must run inside an open transaction; the lock is held until commit or
    /// rollback. The progression engine locks the status row before reading
    /// track totals so overlapping completions for the same user serialize
    /// instead of both reading the same prior total. On SQLite the lock
    /// clause is a no-op, which is fine - its single writer already
    /// serializes.
    ///
    /// # Returns
    /// - `Ok(Some(UserStatus))` - Status row found and locked
    /// - `Ok(None)` - User has never touched the progression system
    /// - `Err(AppError)` - Database error or corrupt stored row
    pub async fn find_for_update(&self, user_id: u64) -> Result<Option<UserStatus>, AppError> {
        let entity = entity::prelude::UserStatus::find_by_id(user_id.to_string())
            .lock_exclusive()
            .one(self.db)
            .await?;

        entity.map(UserStatus::from_entity).transpose()
    }

    /// Gets a user's ladder position, creating the default row if absent.
    ///
    /// First access places the user at (CloneTrooper, stage 1). The display
    /// name is only recorded on creation; regular reads never rewrite it.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `user_name` - Display name to record if the row is created
    ///
    /// # Returns
    /// - `Ok(UserStatus)` - Existing or freshly created status
    /// - `Err(AppError)` - Database error during read or create
    pub async fn get_or_create(
        &self,
        user_id: u64,
        user_name: &str,
    ) -> Result<UserStatus, AppError> {
        if let Some(status) = self.find(user_id).await? {
            return Ok(status);
        }

        self.upsert(UpsertUserStatusParam {
            user_id,
            user_name: user_name.to_string(),
            category: Category::CloneTrooper,
            stage: 1,
            max_rank: false,
        })
        .await
    }

    /// Upserts a user's ladder position from parameter model.
    ///
    /// Insert-or-replace keyed by user ID: last writer wins. Used by
    /// promotion advancement and the admin override command. The persisted
    /// row is read back so callers see exactly what was stored.
    ///
    /// # Returns
    /// - `Ok(UserStatus)` - The persisted status
    /// - `Err(AppError)` - Database error or the row vanishing between write
    ///   and read-back
    pub async fn upsert(&self, param: UpsertUserStatusParam) -> Result<UserStatus, AppError> {
        entity::prelude::UserStatus::insert(entity::user_status::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            user_name: ActiveValue::Set(param.user_name),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            stage: ActiveValue::Set(param.stage),
            max_rank: ActiveValue::Set(param.max_rank),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .on_conflict(
            OnConflict::column(entity::user_status::Column::UserId)
                .update_columns([
                    entity::user_status::Column::UserName,
                    entity::user_status::Column::Category,
                    entity::user_status::Column::Stage,
                    entity::user_status::Column::MaxRank,
                    entity::user_status::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        self.find(param.user_id).await?.ok_or_else(|| {
            InternalError::MissingAfterUpsert {
                table: "user_status",
            }
            .into()
        })
    }
}
