use sea_orm::entity::prelude::*;

/// Per-track completion ledger row.
///
/// One row per (user, category, track). The legacy deployment spread these
/// across sixteen `<category>_<track>` tables; here they are collapsed into
/// a single table with the category and track as key columns.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "track_record")]
pub struct Model {
    /// Discord user ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// Rank class this record accumulates toward.
    #[sea_orm(primary_key, auto_increment = false)]
    pub category: String,
    /// Progression track (`main_quest`, `side_quest`, `medals`, `event_victories`).
    #[sea_orm(primary_key, auto_increment = false)]
    pub track: String,
    /// Last observed display name, denormalized for reporting.
    pub user_name: String,
    /// Points accumulated on this track since the last reset.
    pub total_value: i32,
    /// Completed tier numbers. A plain array for quest tracks, a map of
    /// category label to tier array for medals and event victories.
    pub completed_tiers: Json,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
