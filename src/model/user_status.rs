//! User status domain model and parameters.
//!
//! Tracks where each user sits on the promotion ladder. Rows are created
//! lazily with defaults the first time any progression command touches a
//! user.

use chrono::NaiveDateTime;

use crate::{
    error::AppError,
    model::category::Category,
    util::parse::parse_u64_from_string,
};

/// A user's current (category, stage) rung plus reporting metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStatus {
    /// Discord ID of the user.
    pub user_id: u64,
    /// Last observed display name of the user.
    pub user_name: String,
    /// Current rank class.
    pub category: Category,
    /// Current promotion stage within the category ladder (1..=4).
    pub stage: i32,
    /// Whether the user has finished the entire ladder.
    pub max_rank: bool,
    /// Last time the status was written.
    pub updated_at: NaiveDateTime,
}

impl UserStatus {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(UserStatus)` - The converted status
    /// - `Err(AppError::InternalErr)` - Stored user ID failed to parse as u64
    /// - `Err(AppError::ProgressionErr)` - Stored category string is unknown
    pub fn from_entity(entity: entity::user_status::Model) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;
        let category: Category = entity.category.parse()?;

        Ok(Self {
            user_id,
            user_name: entity.user_name,
            category,
            stage: entity.stage,
            max_rank: entity.max_rank,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for writing a user's ladder position.
#[derive(Debug, Clone)]
pub struct UpsertUserStatusParam {
    /// Discord ID of the user.
    pub user_id: u64,
    /// Display name to denormalize onto the row.
    pub user_name: String,
    /// Rank class to set.
    pub category: Category,
    /// Promotion stage to set (1..=4).
    pub stage: i32,
    /// Whether the user has finished the entire ladder.
    pub max_rank: bool,
}
