use sea_orm::entity::prelude::*;

/// A user's current position on the promotion ladder.
///
/// One row per Discord user. `category` and `stage` together identify the
/// rung the user currently occupies; both are created lazily with defaults
/// on first access.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_status")]
pub struct Model {
    /// Discord user ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// Last observed display name, denormalized for reporting.
    pub user_name: String,
    /// Current rank class (`clone_trooper`, `arf`, `arc`, `republic_commando`).
    pub category: String,
    /// Current promotion stage within the category ladder (1..=4).
    pub stage: i32,
    /// Set when the user has finished the entire ladder.
    pub max_rank: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
