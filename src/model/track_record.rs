//! Track record domain model and parameters.
//!
//! A track record is the per-(user, category, track) slice of the ledger:
//! the accumulated point total and the JSON payload of completed tiers.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::category::{Category, Track},
    util::parse::parse_u64_from_string,
};

/// Completed tier numbers for one track record.
///
/// Quest tracks store a flat sequence of tier numbers. Medal and event
/// victory tracks bucket the sequence under the category label the user held
/// when the completion was recorded, matching the legacy JSON blobs
/// (`[1, 3]` vs `{"arc": [1, 1, 2]}`). Duplicates are meaningful on accruing
/// tracks, so both shapes are ordered multisets, not sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletedTiers {
    /// Flat tier sequence (MainQuest, SideQuest).
    Tiers(Vec<i32>),
    /// Category label to tier sequence (Medals, EventVictories).
    Buckets(BTreeMap<String, Vec<i32>>),
}

impl CompletedTiers {
    /// Empty payload of the right shape for the given track.
    pub fn empty_for(track: Track) -> Self {
        if track.uses_buckets() {
            CompletedTiers::Buckets(BTreeMap::new())
        } else {
            CompletedTiers::Tiers(Vec::new())
        }
    }

    /// Whether the tier has already been recorded anywhere in the payload.
    pub fn contains(&self, tier: i32) -> bool {
        match self {
            CompletedTiers::Tiers(tiers) => tiers.contains(&tier),
            CompletedTiers::Buckets(buckets) => {
                buckets.values().any(|tiers| tiers.contains(&tier))
            }
        }
    }

    /// Records a completion, bucketing by category on map-shaped payloads.
    pub fn record(&mut self, category: Category, tier: i32) {
        match self {
            CompletedTiers::Tiers(tiers) => tiers.push(tier),
            CompletedTiers::Buckets(buckets) => buckets
                .entry(category.as_str().to_string())
                .or_default()
                .push(tier),
        }
    }

    /// Total number of recorded completions.
    pub fn len(&self) -> usize {
        match self {
            CompletedTiers::Tiers(tiers) => tiers.len(),
            CompletedTiers::Buckets(buckets) => buckets.values().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-track ledger slice for one user and category.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    /// Discord ID of the user.
    pub user_id: u64,
    /// Last observed display name of the user.
    pub user_name: String,
    /// Category the record accumulates toward.
    pub category: Category,
    /// Track the record belongs to.
    pub track: Track,
    /// Points accumulated since the last reset.
    pub total_value: i32,
    /// Completed tier payload.
    pub completed_tiers: CompletedTiers,
    /// Last time the record was written.
    pub updated_at: NaiveDateTime,
}

impl TrackRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(TrackRecord)` - The converted record
    /// - `Err(AppError::InternalErr)` - Stored user ID failed to parse as u64
    /// - `Err(AppError::ProgressionErr)` - Stored category or track string is unknown
    /// - `Err(AppError::JsonErr)` - Stored payload does not match either shape
    pub fn from_entity(entity: entity::track_record::Model) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;
        let category: Category = entity.category.parse()?;
        let track: Track = entity.track.parse()?;
        let completed_tiers: CompletedTiers = serde_json::from_value(entity.completed_tiers)?;

        Ok(Self {
            user_id,
            user_name: entity.user_name,
            category,
            track,
            total_value: entity.total_value,
            completed_tiers,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for writing a track record.
///
/// Writes are last-writer-wins replacements keyed by (user, category, track);
/// the repository stamps `updated_at` itself.
#[derive(Debug, Clone)]
pub struct UpsertTrackRecordParam {
    /// Discord ID of the user.
    pub user_id: u64,
    /// Display name to denormalize onto the row.
    pub user_name: String,
    /// Category the record accumulates toward.
    pub category: Category,
    /// Track the record belongs to.
    pub track: Track,
    /// New accumulated point total.
    pub total_value: i32,
    /// New completed tier payload.
    pub completed_tiers: CompletedTiers,
}
