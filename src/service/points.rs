//! Static point and quota tables.
//!
//! These constants were lifted verbatim from the legacy command set, which
//! spread them across a dozen near-duplicate files. Quest tracks are worth
//! the same per tier in every category; medal and event victory values scale
//! with the category. All lookups are pure and fail fast on anything outside
//! the tabulated 1..=4 range.

use crate::{
    error::progression::ProgressionError,
    model::category::{Category, Track, MAX_STAGE},
};

/// Point value for completing `tier` of `track` while ranked in `category`.
///
/// # Returns
/// - `Ok(i32)` - The tabulated value
/// - `Err(ProgressionError::UnknownPointValue)` - Tier outside 1..=4
pub fn point_value(category: Category, track: Track, tier: i32) -> Result<i32, ProgressionError> {
    if !(1..=4).contains(&tier) {
        return Err(ProgressionError::UnknownPointValue { track, tier });
    }
    let idx = (tier - 1) as usize;

    let value = match track {
        Track::MainQuest => [10, 10, 20, 25][idx],
        Track::SideQuest => [4, 5, 10, 20][idx],
        Track::Medals => match category {
            Category::CloneTrooper => [6, 18, 30, 50][idx],
            Category::Arf => [20, 20, 38, 75][idx],
            Category::Arc => [12, 25, 40, 100][idx],
            Category::RepublicCommando => [15, 25, 45, 125][idx],
        },
        Track::EventVictories => match category {
            Category::CloneTrooper => [6, 9, 20, 35][idx],
            Category::Arf => [20, 10, 25, 50][idx],
            Category::Arc => [6, 15, 27, 67][idx],
            Category::RepublicCommando => [8, 25, 30, 85][idx],
        },
    };

    Ok(value)
}

/// Cumulative point total required to promote off (category, stage).
///
/// The stage-1 bases come from the legacy quota table; each later stage on
/// the same category asks for 50 more points.
///
/// # Returns
/// - `Ok(i32)` - The required total
/// - `Err(ProgressionError::UnknownQuota)` - Stage outside 1..=4
pub fn promotion_quota(category: Category, stage: i32) -> Result<i32, ProgressionError> {
    if !(1..=MAX_STAGE).contains(&stage) {
        return Err(ProgressionError::UnknownQuota { category, stage });
    }

    let base = match category {
        Category::CloneTrooper => 250,
        Category::Arf => 400,
        Category::Arc => 500,
        Category::RepublicCommando => 550,
    };

    Ok(base + 50 * (stage - 1))
}
