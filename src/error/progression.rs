use thiserror::Error;

use crate::model::category::{Category, Track};

/// Errors raised by the progression ledger itself.
///
/// `UnknownPointValue` and `UnknownQuota` indicate a configuration bug (a
/// tier or stage outside the tabulated range) and are not recoverable at
/// runtime. `DuplicateCompletion` is user-facing and rendered by the command
/// layer as "already completed".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    /// No point value is tabulated for this (category, track, tier).
    #[error("No point value defined for {track} tier {tier}")]
    UnknownPointValue {
        /// Track the completion was recorded against
        track: Track,
        /// Tier number outside the tabulated 1..=4 range
        tier: i32,
    },

    /// No promotion quota is tabulated for this (category, stage).
    #[error("No promotion quota defined for {category} stage {stage}")]
    UnknownQuota {
        /// Category the quota lookup was for
        category: Category,
        /// Stage number outside the tabulated 1..=4 range
        stage: i32,
    },

    /// The tier was already recorded on a track that rejects repeats.
    #[error("{track} tier {tier} has already been completed")]
    DuplicateCompletion {
        /// Track the duplicate was detected on
        track: Track,
        /// The repeated tier number
        tier: i32,
    },

    /// A stored category string did not match any known rank class.
    #[error("Unknown category '{0}' in stored record")]
    UnknownCategory(String),

    /// A stored track string did not match any known track.
    #[error("Unknown track '{0}' in stored record")]
    UnknownTrack(String),
}
