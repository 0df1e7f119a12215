//! Rank categories, progression tracks, and the promotion ladder.
//!
//! The legacy deployment encoded categories and tracks as free-form table name
//! fragments (`clone_trooper_main_tiers` and friends). Here both are closed
//! enums; the stored string forms are kept for schema compatibility but an
//! unknown string coming back from the database is an error, not a new table.

use std::fmt;
use std::str::FromStr;

use crate::error::progression::ProgressionError;

/// Number of promotion stages per category.
pub const MAX_STAGE: i32 = 4;

/// A user's rank class.
///
/// Declaration order is promotion order: finishing the quota in one category
/// moves the user to the next, and completing the RepublicCommando leg
/// advances the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    CloneTrooper,
    Arf,
    Arc,
    RepublicCommando,
}

impl Category {
    /// All categories in promotion order.
    pub const ALL: [Category; 4] = [
        Category::CloneTrooper,
        Category::Arf,
        Category::Arc,
        Category::RepublicCommando,
    ];

    /// Stored string form, also used as the bucket key in medal/victory JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CloneTrooper => "clone_trooper",
            Category::Arf => "arf",
            Category::Arc => "arc",
            Category::RepublicCommando => "republic_commando",
        }
    }

    /// Human-readable name for command replies and embeds.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::CloneTrooper => "Clone Trooper",
            Category::Arf => "ARF",
            Category::Arc => "ARC",
            Category::RepublicCommando => "Republic Commando",
        }
    }

    /// The category after this one in promotion order, None after the last.
    pub fn next(&self) -> Option<Category> {
        match self {
            Category::CloneTrooper => Some(Category::Arf),
            Category::Arf => Some(Category::Arc),
            Category::Arc => Some(Category::RepublicCommando),
            Category::RepublicCommando => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clone_trooper" => Ok(Category::CloneTrooper),
            "arf" => Ok(Category::Arf),
            "arc" => Ok(Category::Arc),
            "republic_commando" => Ok(Category::RepublicCommando),
            other => Err(ProgressionError::UnknownCategory(other.to_string())),
        }
    }
}

/// One of the four progression tracks a completion can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Track {
    MainQuest,
    SideQuest,
    Medals,
    EventVictories,
}

impl Track {
    /// All tracks, in reporting order.
    pub const ALL: [Track; 4] = [
        Track::MainQuest,
        Track::SideQuest,
        Track::Medals,
        Track::EventVictories,
    ];

    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::MainQuest => "main_quest",
            Track::SideQuest => "side_quest",
            Track::Medals => "medals",
            Track::EventVictories => "event_victories",
        }
    }

    /// Human-readable name for command replies and embeds.
    pub fn display_name(&self) -> &'static str {
        match self {
            Track::MainQuest => "Main Quest",
            Track::SideQuest => "Side Quest",
            Track::Medals => "Medals",
            Track::EventVictories => "Event Victories",
        }
    }

    /// Whether completing the same tier twice is an error on this track.
    ///
    /// Quest tracks are one-shot per tier; medals and event victories can be
    /// earned repeatedly and re-accrue points each time. The legacy command
    /// set was inconsistent about this, so the policy lives in one place.
    pub fn rejects_duplicates(&self) -> bool {
        matches!(self, Track::MainQuest | Track::SideQuest)
    }

    /// Whether this track buckets completions by category label in its JSON
    /// payload instead of keeping a flat tier list.
    pub fn uses_buckets(&self) -> bool {
        matches!(self, Track::Medals | Track::EventVictories)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Track {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main_quest" => Ok(Track::MainQuest),
            "side_quest" => Ok(Track::SideQuest),
            "medals" => Ok(Track::Medals),
            "event_victories" => Ok(Track::EventVictories),
            other => Err(ProgressionError::UnknownTrack(other.to_string())),
        }
    }
}

/// Computes the rung after (category, stage) on the promotion ladder.
///
/// Categories rotate in `Category::ALL` order within a stage; finishing the
/// RepublicCommando leg bumps the stage and restarts at CloneTrooper. Returns
/// None past (RepublicCommando, MAX_STAGE): the ladder is finite and the
/// caller marks the user max-rank instead of advancing.
pub fn next_rung(category: Category, stage: i32) -> Option<(Category, i32)> {
    match category.next() {
        Some(next) => Some((next, stage)),
        None if stage < MAX_STAGE => Some((Category::CloneTrooper, stage + 1)),
        None => None,
    }
}
