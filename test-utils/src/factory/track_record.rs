//! Track record factory for creating test ledger rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating track record rows with customizable fields.
///
/// The `completed_tiers` payload defaults to an empty array, matching the
/// quest track shape; use `completed_tiers()` with an object value for medal
/// and event victory records.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::track_record::TrackRecordFactory;
/// use serde_json::json;
///
/// let record = TrackRecordFactory::new(&db)
///     .user_id(123456789)
///     .category("arc")
///     .track("medals")
///     .total_value(40)
///     .completed_tiers(json!({"arc": [1, 2]}))
///     .build()
///     .await?;
/// ```
pub struct TrackRecordFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    user_name: String,
    category: String,
    track: String,
    total_value: i32,
    completed_tiers: serde_json::Value,
}

impl<'a> TrackRecordFactory<'a> {
    /// Creates a new TrackRecordFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented numeric ID
    /// - user_name: `"User {id}"`
    /// - category: `"clone_trooper"`
    /// - track: `"main_quest"`
    /// - total_value: `0`
    /// - completed_tiers: `[]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            user_name: format!("User {}", id),
            category: "clone_trooper".to_string(),
            track: "main_quest".to_string(),
            total_value: 0,
            completed_tiers: json!([]),
        }
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id.to_string();
        self
    }

    pub fn user_name(mut self, user_name: &str) -> Self {
        self.user_name = user_name.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn track(mut self, track: &str) -> Self {
        self.track = track.to_string();
        self
    }

    pub fn total_value(mut self, total_value: i32) -> Self {
        self.total_value = total_value;
        self
    }

    pub fn completed_tiers(mut self, completed_tiers: serde_json::Value) -> Self {
        self.completed_tiers = completed_tiers;
        self
    }

    /// Inserts the track record row and returns the created entity.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::track_record::Model, DbErr> {
        entity::track_record::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            category: ActiveValue::Set(self.category),
            track: ActiveValue::Set(self.track),
            user_name: ActiveValue::Set(self.user_name),
            total_value: ActiveValue::Set(self.total_value),
            completed_tiers: ActiveValue::Set(self.completed_tiers),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}
