//! Result structs returned by the progression engine.
//!
//! The engine never renders text; command handlers turn these into replies,
//! embeds, and webhook notifications.

use std::collections::BTreeMap;

use crate::model::{
    category::{Category, Track},
    track_record::TrackRecord,
    user_status::UserStatus,
};

/// Parameters for recording a tier completion.
#[derive(Debug, Clone)]
pub struct CompleteTierParam {
    /// Discord ID of the completing user.
    pub user_id: u64,
    /// Display name observed on the interaction.
    pub user_name: String,
    /// Track the completion lands on.
    pub track: Track,
    /// Completed tier number (1..=4).
    pub tier: i32,
}

/// What happened when the promotion quota was evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Promotion {
    /// Quota met; the user advanced to a new (category, stage) rung and the
    /// old category's track records were reset.
    Advanced {
        /// New rank class.
        category: Category,
        /// New promotion stage.
        stage: i32,
    },
    /// Quota met on the final rung; there is nothing left to advance to. The
    /// final category's track records were cleared and the status flagged
    /// max-rank, which short-circuits all future evaluations.
    MaxRank,
}

/// Outcome of a single tier completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// Category the completion was credited to.
    pub category: Category,
    /// Track the completion landed on.
    pub track: Track,
    /// The completed tier number.
    pub tier: i32,
    /// Point value credited for this completion.
    pub value: i32,
    /// Track total after crediting (pre-reset if a promotion followed).
    pub new_total: i32,
    /// Set when this completion pushed the category total over quota.
    pub promotion: Option<Promotion>,
}

/// Snapshot of a user's progression for status reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionStatus {
    /// The user's ladder position.
    pub status: UserStatus,
    /// Track records for the current category, keyed by track. Tracks the
    /// user has not touched yet are absent.
    pub records: BTreeMap<Track, TrackRecord>,
    /// Sum of `total_value` across all four tracks.
    pub total: i32,
    /// Quota required to promote off the current rung.
    pub quota: i32,
}

impl ProgressionStatus {
    /// Points still needed to promote; zero once the quota is reached.
    pub fn remaining(&self) -> i32 {
        (self.quota - self.total).max(0)
    }
}

/// Parameters for the admin category/stage override.
#[derive(Debug, Clone)]
pub struct OverrideStatusParam {
    /// Discord ID of the target user.
    pub user_id: u64,
    /// Display name of the target user.
    pub user_name: String,
    /// Category to place the user in.
    pub category: Category,
    /// Stage to place the user at (1..=4).
    pub stage: i32,
}
