//! Pool depletion tracking with a per-lake undo stack.
//!
//! Every mutating operation reports whether it changed anything. A call whose
//! precondition does not hold (catching an empty category, refilling a pool
//! that still has fish, undoing with an empty history) is a silent no-op: the
//! UI disables those affordances, so the tracker never treats them as errors.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::{BASELINE_LEGENDARY_ODDS, CATCH_ALL_TAG};
use crate::fish::{FishCategory, FishCounts, Lake, PerLake};
use crate::threads::BrokenLines;

/// One reversible entry on a lake's undo stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CatchAction {
    /// A single fish of this category was caught.
    Fish(FishCategory),
    /// The untouched pool was caught in one go.
    WholePool,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown catch action tag `{0}`")]
pub struct UnknownActionTag(pub String);

impl From<CatchAction> for String {
    fn from(value: CatchAction) -> Self {
        match value {
            CatchAction::Fish(category) => category.tag().to_string(),
            CatchAction::WholePool => CATCH_ALL_TAG.to_string(),
        }
    }
}

impl TryFrom<String> for CatchAction {
    type Error = UnknownActionTag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == CATCH_ALL_TAG {
            return Ok(Self::WholePool);
        }
        value
            .parse::<FishCategory>()
            .map(Self::Fish)
            .map_err(|()| UnknownActionTag(value))
    }
}

/// Remaining fish in one lake plus the actions that removed the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LakePool {
    pub(crate) fish_counts: FishCounts,
    pub(crate) action_stack: Vec<CatchAction>,
}

impl LakePool {
    /// A freshly stocked pool for `lake`.
    #[must_use]
    pub fn stocked(lake: Lake) -> Self {
        Self {
            fish_counts: lake.initial_counts(),
            action_stack: Vec::new(),
        }
    }

    #[must_use]
    pub const fn counts(&self) -> &FishCounts {
        &self.fish_counts
    }

    /// Undo history, most recent last.
    #[must_use]
    pub fn actions(&self) -> &[CatchAction] {
        &self.action_stack
    }

    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.fish_counts.total()
    }

    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.action_stack.is_empty()
    }
}

/// Cumulative catches for one lake. Undo subtracts from it again.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LakeTotals {
    pub(crate) fish_counts: FishCounts,
}

impl LakeTotals {
    #[must_use]
    pub const fn counts(&self) -> &FishCounts {
        &self.fish_counts
    }
}

/// How the current legendary chance compares to a fresh pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OddsTrend {
    Favorable,
    Neutral,
    Unfavorable,
}

impl OddsTrend {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Favorable => " ↑",
            Self::Neutral => "",
            Self::Unfavorable => " ↓",
        }
    }
}

/// Chance that the next fish caught is legendary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendaryOdds {
    pub chance: f64,
    pub trend: OddsTrend,
}

impl LegendaryOdds {
    #[must_use]
    pub fn from_counts(counts: &FishCounts) -> Self {
        let remaining = counts.total();
        let chance = if remaining > 0.0 {
            counts.get(FishCategory::Legendary) / remaining
        } else {
            0.0
        };
        let trend = if chance > BASELINE_LEGENDARY_ODDS {
            OddsTrend::Favorable
        } else if chance < BASELINE_LEGENDARY_ODDS {
            OddsTrend::Unfavorable
        } else {
            OddsTrend::Neutral
        };
        Self { chance, trend }
    }
}

impl fmt::Display for LegendaryOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%{}", self.chance * 100.0, self.trend.symbol())
    }
}

/// Catches recorded for one lake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LakeCatch {
    pub lake: Lake,
    pub caught: f64,
    pub legendary: f64,
}

/// Lifetime catches across every lake.
#[derive(Debug, Clone, PartialEq)]
pub struct CaughtSummary {
    pub lakes: Vec<LakeCatch>,
}

impl CaughtSummary {
    #[must_use]
    pub fn total_caught(&self) -> f64 {
        self.lakes.iter().map(|entry| entry.caught).sum()
    }

    #[must_use]
    pub fn total_legendary(&self) -> f64 {
        self.lakes.iter().map(|entry| entry.legendary).sum()
    }
}

/// Pools, lifetime totals, the selected lake and the broken-line counter.
///
/// Serializes directly into the persisted snapshot shape; loading goes through
/// [`crate::snapshot`] so partial snapshots merge over defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolTracker {
    #[serde(rename = "currentLake")]
    pub(crate) current_lake: Lake,
    #[serde(rename = "numThreads")]
    pub(crate) broken_lines: BrokenLines,
    #[serde(rename = "lakesData")]
    pub(crate) lakes: PerLake<LakePool>,
    #[serde(rename = "totalData")]
    pub(crate) totals: PerLake<LakeTotals>,
}

impl Default for PoolTracker {
    fn default() -> Self {
        Self {
            current_lake: Lake::default(),
            broken_lines: BrokenLines::default(),
            lakes: PerLake::from_fn(LakePool::stocked),
            totals: PerLake::default(),
        }
    }
}

impl PoolTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current_lake(&self) -> Lake {
        self.current_lake
    }

    pub fn select_lake(&mut self, lake: Lake) -> bool {
        if self.current_lake == lake {
            return false;
        }
        log::debug!("selected lake {lake}");
        self.current_lake = lake;
        true
    }

    #[must_use]
    pub const fn pool(&self, lake: Lake) -> &LakePool {
        self.lakes.get(lake)
    }

    #[must_use]
    pub const fn totals(&self, lake: Lake) -> &LakeTotals {
        self.totals.get(lake)
    }

    #[must_use]
    pub fn remaining(&self, lake: Lake) -> f64 {
        self.pool(lake).remaining()
    }

    #[must_use]
    pub fn odds(&self, lake: Lake) -> LegendaryOdds {
        LegendaryOdds::from_counts(self.pool(lake).counts())
    }

    #[must_use]
    pub fn can_catch(&self, lake: Lake, category: FishCategory) -> bool {
        self.pool(lake).counts().get(category) > 0.0
    }

    #[must_use]
    pub fn can_catch_whole_pool(&self, lake: Lake) -> bool {
        self.pool(lake).is_untouched()
    }

    #[must_use]
    pub fn can_refill(&self, lake: Lake) -> bool {
        FishCategory::ALL
            .into_iter()
            .all(|category| !self.can_catch(lake, category))
    }

    #[must_use]
    pub fn can_undo(&self, lake: Lake) -> bool {
        !self.pool(lake).is_untouched()
    }

    /// Record a single catch of `category` in `lake`.
    pub fn catch(&mut self, lake: Lake, category: FishCategory) -> bool {
        if !self.can_catch(lake, category) {
            return false;
        }
        let pool = self.lakes.get_mut(lake);
        *pool.fish_counts.get_mut(category) -= 1.0;
        pool.action_stack.push(CatchAction::Fish(category));
        *self.totals.get_mut(lake).fish_counts.get_mut(category) += 1.0;
        log::debug!("caught {category} in {lake}");
        true
    }

    /// Catch every fish of an untouched pool at once.
    pub fn catch_whole_pool(&mut self, lake: Lake) -> bool {
        if !self.can_catch_whole_pool(lake) {
            return false;
        }
        let pool = self.lakes.get_mut(lake);
        pool.fish_counts = FishCounts::default();
        pool.action_stack.push(CatchAction::WholePool);
        self.totals
            .get_mut(lake)
            .fish_counts
            .add_scaled(&lake.initial_counts(), 1.0);
        log::debug!("caught whole pool in {lake}");
        true
    }

    /// Restock an emptied pool. Totals are left alone.
    pub fn refill(&mut self, lake: Lake) -> bool {
        if !self.can_refill(lake) {
            return false;
        }
        *self.lakes.get_mut(lake) = LakePool::stocked(lake);
        log::debug!("refilled {lake}");
        true
    }

    /// Reverse the most recent catch action in `lake`.
    pub fn undo(&mut self, lake: Lake) -> bool {
        let Some(action) = self.lakes.get_mut(lake).action_stack.pop() else {
            return false;
        };
        match action {
            CatchAction::WholePool => {
                *self.lakes.get_mut(lake) = LakePool::stocked(lake);
                self.totals
                    .get_mut(lake)
                    .fish_counts
                    .add_scaled(&lake.initial_counts(), -1.0);
            }
            CatchAction::Fish(category) => {
                *self.lakes.get_mut(lake).fish_counts.get_mut(category) += 1.0;
                *self.totals.get_mut(lake).fish_counts.get_mut(category) -= 1.0;
            }
        }
        log::debug!("undid {} in {lake}", String::from(action));
        true
    }

    #[must_use]
    pub const fn broken_lines(&self) -> BrokenLines {
        self.broken_lines
    }

    pub const fn add_broken_line(&mut self) -> bool {
        self.broken_lines.add()
    }

    pub const fn reset_broken_lines(&mut self) -> bool {
        self.broken_lines.reset()
    }

    fn restocked(&self) -> Self {
        Self {
            current_lake: self.current_lake,
            ..Self::default()
        }
    }

    /// Whether [`PoolTracker::reset_all`] would change anything.
    #[must_use]
    pub fn can_reset_all(&self) -> bool {
        *self != self.restocked()
    }

    /// Restock every lake, zero every total and the broken-line counter.
    /// The selected lake is kept.
    pub fn reset_all(&mut self) -> bool {
        let fresh = self.restocked();
        if *self == fresh {
            return false;
        }
        *self = fresh;
        log::debug!("reset all pools and totals");
        true
    }

    #[must_use]
    pub fn caught_summary(&self) -> CaughtSummary {
        let lakes = self
            .totals
            .iter()
            .map(|(lake, totals)| LakeCatch {
                lake,
                caught: totals.counts().total(),
                legendary: totals.counts().get(FishCategory::Legendary),
            })
            .collect();
        CaughtSummary { lakes }
    }
}
