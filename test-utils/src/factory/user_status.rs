//! User status factory for creating test ladder positions.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating user status rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_status::UserStatusFactory;
///
/// let status = UserStatusFactory::new(&db)
///     .user_id(123456789)
///     .category("arc")
///     .stage(3)
///     .build()
///     .await?;
/// ```
pub struct UserStatusFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    user_name: String,
    category: String,
    stage: i32,
    max_rank: bool,
}

impl<'a> UserStatusFactory<'a> {
    /// Creates a new UserStatusFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented numeric ID
    /// - user_name: `"User {id}"`
    /// - category: `"clone_trooper"`
    /// - stage: `1`
    /// - max_rank: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            user_name: format!("User {}", id),
            category: "clone_trooper".to_string(),
            stage: 1,
            max_rank: false,
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

    pub fn stage(mut self, stage: i32) -> Self {
        self.stage = stage;
        self
    }

    pub fn max_rank(mut self, max_rank: bool) -> Self {
        self.max_rank = max_rank;
        self
    }

    /// Inserts the user status row and returns the created entity.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_status::Model, DbErr> {
        entity::user_status::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            user_name: ActiveValue::Set(self.user_name),
            category: ActiveValue::Set(self.category),
            stage: ActiveValue::Set(self.stage),
            max_rank: ActiveValue::Set(self.max_rank),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}
