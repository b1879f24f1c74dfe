//! Quest catalog and breakpoint progress.
//!
//! Each quest has strictly ascending thresholds with a reward per threshold.
//! Progress is a single user-entered number; an unset (or NaN) value meets no
//! breakpoints at all, so every reward counts as remaining.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestName {
    #[serde(rename = "Silver Tickets")]
    SilverTickets,
    #[serde(rename = "Daily Login")]
    DailyLogin,
    #[serde(rename = "Seal Battles")]
    SealBattles,
    #[serde(rename = "Claim AFK Rewards")]
    ClaimAfkRewards,
    #[serde(rename = "Use Gems")]
    UseGems,
    Keys,
    Shovels,
    #[serde(rename = "Gold Cave")]
    GoldCave,
    #[serde(rename = "Kill Minions")]
    KillMinions,
    #[serde(rename = "Kill Bosses")]
    KillBosses,
    Arena,
    Pack,
}

impl QuestName {
    pub const ALL: [Self; 12] = [
        Self::SilverTickets,
        Self::DailyLogin,
        Self::SealBattles,
        Self::ClaimAfkRewards,
        Self::UseGems,
        Self::Keys,
        Self::Shovels,
        Self::GoldCave,
        Self::KillMinions,
        Self::KillBosses,
        Self::Arena,
        Self::Pack,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SilverTickets => "Silver Tickets",
            Self::DailyLogin => "Daily Login",
            Self::SealBattles => "Seal Battles",
            Self::ClaimAfkRewards => "Claim AFK Rewards",
            Self::UseGems => "Use Gems",
            Self::Keys => "Keys",
            Self::Shovels => "Shovels",
            Self::GoldCave => "Gold Cave",
            Self::KillMinions => "Kill Minions",
            Self::KillBosses => "Kill Bosses",
            Self::Arena => "Arena",
            Self::Pack => "Pack",
        }
    }
}

impl fmt::Display for QuestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or(())
    }
}

/// Errors raised when a catalog violates its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{quest}: threshold {index} is not above the previous one")]
    NotAscending { quest: QuestName, index: usize },
    #[error("{quest}: {thresholds} thresholds but {rewards} rewards")]
    RewardCountMismatch {
        quest: QuestName,
        thresholds: usize,
        rewards: usize,
    },
    #[error("{0} appears more than once")]
    DuplicateQuest(QuestName),
}

/// Earned vs. still-available reward units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardSplit {
    pub earned: u32,
    pub remaining: u32,
}

impl Add for RewardSplit {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            earned: self.earned + rhs.earned,
            remaining: self.remaining + rhs.remaining,
        }
    }
}

/// A single breakpoint as rendered in the quest card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub threshold: u32,
    pub reward: u32,
    pub reached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    pub name: QuestName,
    pub thresholds: Vec<u32>,
    pub rewards: Vec<u32>,
    pub placeholder: String,
}

impl Quest {
    #[must_use]
    pub fn new(name: QuestName, thresholds: Vec<u32>, rewards: Vec<u32>, placeholder: &str) -> Self {
        Self {
            name,
            thresholds,
            rewards,
            placeholder: placeholder.to_string(),
        }
    }

    fn uniform(name: QuestName, thresholds: Vec<u32>, reward: u32, placeholder: &str) -> Self {
        let rewards = vec![reward; thresholds.len()];
        Self::new(name, thresholds, rewards, placeholder)
    }

    /// # Errors
    ///
    /// Returns `CatalogError` when thresholds are not strictly ascending or the
    /// reward list does not line up with them.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.thresholds.len() != self.rewards.len() {
            return Err(CatalogError::RewardCountMismatch {
                quest: self.name,
                thresholds: self.thresholds.len(),
                rewards: self.rewards.len(),
            });
        }
        if let Some(index) = self
            .thresholds
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
        {
            return Err(CatalogError::NotAscending {
                quest: self.name,
                index: index + 1,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn breakpoint_count(&self) -> usize {
        self.thresholds.len()
    }

    /// Number of thresholds reached by `progress`. Unset or NaN meets none.
    #[must_use]
    pub fn breakpoints_met(&self, progress: Option<f64>) -> usize {
        let Some(progress) = progress.filter(|p| !p.is_nan()) else {
            return 0;
        };
        self.thresholds
            .iter()
            .position(|bp| f64::from(*bp) > progress)
            .unwrap_or(self.thresholds.len())
    }

    #[must_use]
    pub fn completion_percent(&self, progress: Option<f64>) -> f64 {
        let total = self.breakpoint_count();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.breakpoints_met(progress) as f64 / total as f64;
        ratio * 100.0
    }

    #[must_use]
    pub fn reward_split(&self, progress: Option<f64>) -> RewardSplit {
        let met = self.breakpoints_met(progress);
        RewardSplit {
            earned: self.rewards.iter().take(met).sum(),
            remaining: self.rewards.iter().skip(met).sum(),
        }
    }

    pub fn milestones(&self, progress: Option<f64>) -> impl Iterator<Item = Milestone> + '_ {
        let met = self.breakpoints_met(progress);
        self.thresholds
            .iter()
            .zip(&self.rewards)
            .enumerate()
            .map(move |(index, (threshold, reward))| Milestone {
                threshold: *threshold,
                reward: *reward,
                reached: index < met,
            })
    }
}

/// Immutable, validated list of quests in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCatalog {
    quests: Vec<Quest>,
}

impl QuestCatalog {
    /// # Errors
    ///
    /// Returns the first `CatalogError` found among `quests`.
    pub fn new(quests: Vec<Quest>) -> Result<Self, CatalogError> {
        validate_quests(&quests)?;
        Ok(Self { quests })
    }

    /// The in-game daily quest list.
    #[must_use]
    pub fn standard() -> Self {
        let quests = standard_quests();
        debug_assert!(validate_quests(&quests).is_ok());
        Self { quests }
    }

    #[must_use]
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    #[must_use]
    pub fn get(&self, name: QuestName) -> Option<&Quest> {
        self.quests.iter().find(|quest| quest.name == name)
    }
}

impl Default for QuestCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_quests(quests: &[Quest]) -> Result<(), CatalogError> {
    for (index, quest) in quests.iter().enumerate() {
        quest.validate()?;
        if quests[..index].iter().any(|prior| prior.name == quest.name) {
            return Err(CatalogError::DuplicateQuest(quest.name));
        }
    }
    Ok(())
}

fn standard_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            QuestName::SilverTickets,
            vec![20, 40, 60, 80],
            vec![20, 40, 60, 80],
            "# Bought",
        ),
        Quest::uniform(QuestName::Pack, (1..=7).collect(), 2, "# Bought"),
        Quest::uniform(QuestName::DailyLogin, (1..=5).collect(), 5, "# Days"),
        Quest::uniform(QuestName::GoldCave, (1..=4).map(|i| i * 2).collect(), 5, "# Done"),
        Quest::uniform(
            QuestName::KillMinions,
            vec![500, 1000, 1500, 2000, 3000],
            3,
            "# Killed",
        ),
        Quest::uniform(QuestName::SealBattles, (1..=5).map(|i| i * 2).collect(), 5, "# Done"),
        Quest::uniform(QuestName::KillBosses, vec![5, 10, 20, 30], 3, "# Killed"),
        Quest::uniform(
            QuestName::ClaimAfkRewards,
            vec![3, 5, 10, 15, 20],
            3,
            "# Collected",
        ),
        Quest::uniform(QuestName::Arena, (1..=4).map(|i| i * 5).collect(), 5, "# Done"),
        Quest::uniform(QuestName::Keys, (1..=5).map(|i| i * 10).collect(), 5, "# Used"),
        Quest::uniform(
            QuestName::UseGems,
            vec![200, 500, 1000, 2000, 3000],
            5,
            "# Used",
        ),
        Quest::uniform(
            QuestName::Shovels,
            vec![5, 10, 15, 20, 30, 40, 50, 60, 70, 80],
            5,
            "# Used",
        ),
    ]
}

/// User-entered progress per quest. Unset quests have no entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestProgress {
    values: BTreeMap<QuestName, f64>,
}

impl QuestProgress {
    #[must_use]
    pub fn get(&self, name: QuestName) -> Option<f64> {
        self.values.get(&name).copied()
    }

    /// Store `value`, treating NaN as unset. Returns whether anything changed.
    pub fn set(&mut self, name: QuestName, value: Option<f64>) -> bool {
        let value = value.filter(|v| !v.is_nan());
        if self.get(name) == value {
            return false;
        }
        match value {
            Some(v) => self.values.insert(name, v),
            None => self.values.remove(&name),
        };
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.values.is_empty();
        self.values.clear();
        changed
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestName, f64)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }
}

/// Aggregate reward split across every quest in `catalog`.
#[must_use]
pub fn totals(catalog: &QuestCatalog, progress: &QuestProgress) -> RewardSplit {
    catalog
        .quests()
        .iter()
        .map(|quest| quest.reward_split(progress.get(quest.name)))
        .fold(RewardSplit::default(), Add::add)
}

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("leading integer pattern compiles"));

/// Read the integer prefix of a text input, the way number inputs report
/// partially typed values. Anything without leading digits is unset.
#[must_use]
pub fn parse_progress_input(text: &str) -> Option<f64> {
    LEADING_INTEGER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<f64>().ok())
}

/// Catalog plus progress: the state persisted by the quest tracker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestTracker {
    pub(crate) catalog: QuestCatalog,
    pub(crate) progress: QuestProgress,
}

impl QuestTracker {
    #[must_use]
    pub fn new(catalog: QuestCatalog) -> Self {
        Self {
            catalog,
            progress: QuestProgress::default(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &QuestCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn progress(&self) -> &QuestProgress {
        &self.progress
    }

    #[must_use]
    pub fn progress_of(&self, name: QuestName) -> Option<f64> {
        self.progress.get(name)
    }

    /// Overwrite a quest's progress. NaN clears it.
    pub fn set_progress(&mut self, name: QuestName, value: f64) -> bool {
        self.progress.set(name, Some(value))
    }

    /// Apply raw text from a progress input.
    pub fn set_progress_input(&mut self, name: QuestName, text: &str) -> bool {
        self.progress.set(name, parse_progress_input(text))
    }

    pub fn clear_all(&mut self) -> bool {
        let changed = self.progress.clear();
        if changed {
            log::debug!("cleared quest progress");
        }
        changed
    }

    #[must_use]
    pub fn totals(&self) -> RewardSplit {
        totals(&self.catalog, &self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silver_tickets() -> Quest {
        Quest::new(
            QuestName::SilverTickets,
            vec![20, 40, 60, 80],
            vec![20, 20, 20, 20],
            "# Bought",
        )
    }

    #[test]
    fn progress_between_breakpoints() {
        let quest = silver_tickets();
        assert_eq!(quest.breakpoints_met(Some(45.0)), 2);
        assert_eq!(
            quest.reward_split(Some(45.0)),
            RewardSplit {
                earned: 40,
                remaining: 40
            }
        );
        assert!((quest.completion_percent(Some(45.0)) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unset_or_nan_progress_meets_nothing() {
        let quest = silver_tickets();
        for progress in [None, Some(f64::NAN)] {
            assert_eq!(quest.breakpoints_met(progress), 0);
            assert_eq!(
                quest.reward_split(progress),
                RewardSplit {
                    earned: 0,
                    remaining: 80
                }
            );
        }
    }

    #[test]
    fn threshold_equal_to_progress_is_met() {
        let quest = silver_tickets();
        assert_eq!(quest.breakpoints_met(Some(40.0)), 2);
        assert_eq!(quest.breakpoints_met(Some(19.0)), 0);
        assert_eq!(quest.breakpoints_met(Some(500.0)), 4);
        assert!((quest.completion_percent(Some(500.0)) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_quest_reports_zero_percent() {
        let quest = Quest::new(QuestName::Arena, Vec::new(), Vec::new(), "# Done");
        assert!(quest.completion_percent(Some(10.0)).abs() < f64::EPSILON);
        assert_eq!(quest.reward_split(Some(10.0)), RewardSplit::default());
    }

    #[test]
    fn milestones_flag_reached_breakpoints() {
        let quest = silver_tickets();
        let reached: Vec<bool> = quest.milestones(Some(60.0)).map(|m| m.reached).collect();
        assert_eq!(reached, vec![true, true, true, false]);
        let first = quest.milestones(None).next().unwrap();
        assert_eq!(
            first,
            Milestone {
                threshold: 20,
                reward: 20,
                reached: false
            }
        );
    }

    #[test]
    fn catalog_rejects_broken_quests() {
        let descending = Quest::new(QuestName::Keys, vec![10, 5], vec![1, 1], "# Used");
        assert_eq!(
            QuestCatalog::new(vec![descending]),
            Err(CatalogError::NotAscending {
                quest: QuestName::Keys,
                index: 1
            })
        );
        let repeated = Quest::new(QuestName::Keys, vec![10, 10], vec![1, 1], "# Used");
        assert!(QuestCatalog::new(vec![repeated]).is_err());
        let short = Quest::new(QuestName::Keys, vec![10, 20], vec![1], "# Used");
        assert!(matches!(
            QuestCatalog::new(vec![short]),
            Err(CatalogError::RewardCountMismatch { rewards: 1, .. })
        ));
        assert_eq!(
            QuestCatalog::new(vec![silver_tickets(), silver_tickets()]),
            Err(CatalogError::DuplicateQuest(QuestName::SilverTickets))
        );
    }

    #[test]
    fn standard_catalog_is_valid_and_complete() {
        let catalog = QuestCatalog::standard();
        assert!(QuestCatalog::new(catalog.quests().to_vec()).is_ok());
        assert_eq!(catalog.quests().len(), QuestName::ALL.len());
        for name in QuestName::ALL {
            assert!(catalog.get(name).is_some(), "{name} missing");
        }
        assert_eq!(catalog.quests()[1].name, QuestName::Pack);
        let silver = catalog
            .get(QuestName::SilverTickets)
            .expect("silver tickets listed");
        assert_eq!(silver.rewards, vec![20, 40, 60, 80]);
        let totals = totals(&catalog, &QuestProgress::default());
        assert_eq!(totals.earned, 0);
        assert_eq!(totals.remaining, 200 + 14 + 25 + 20 + 15 + 25 + 12 + 15 + 20 + 25 + 25 + 50);
    }

    #[test]
    fn tracker_totals_follow_progress() {
        let mut tracker = QuestTracker::default();
        assert!(tracker.set_progress(QuestName::SilverTickets, 45.0));
        assert!(!tracker.set_progress(QuestName::SilverTickets, 45.0));
        assert!(tracker.set_progress(QuestName::Shovels, 80.0));
        let split = tracker.totals();
        assert_eq!(split.earned, 20 + 40 + 50);

        assert!(tracker.set_progress(QuestName::Shovels, f64::NAN));
        assert_eq!(tracker.progress_of(QuestName::Shovels), None);
        assert!(tracker.clear_all());
        assert!(!tracker.clear_all());
        assert_eq!(tracker.totals().earned, 0);
    }

    #[test]
    fn progress_input_reads_integer_prefix() {
        assert_eq!(parse_progress_input("45"), Some(45.0));
        assert_eq!(parse_progress_input("  12abc"), Some(12.0));
        assert_eq!(parse_progress_input("-3"), Some(-3.0));
        assert_eq!(parse_progress_input("7.9"), Some(7.0));
        assert_eq!(parse_progress_input(""), None);
        assert_eq!(parse_progress_input("abc"), None);

        let mut tracker = QuestTracker::default();
        tracker.set_progress_input(QuestName::Keys, "30");
        assert_eq!(tracker.progress_of(QuestName::Keys), Some(30.0));
        assert!(tracker.set_progress_input(QuestName::Keys, ""));
        assert_eq!(tracker.progress_of(QuestName::Keys), None);
    }

    #[test]
    fn quest_names_parse_from_display_form() {
        for name in QuestName::ALL {
            assert_eq!(name.to_string().parse::<QuestName>(), Ok(name));
        }
        assert_eq!(
            serde_json::to_string(&QuestName::ClaimAfkRewards).unwrap(),
            r#""Claim AFK Rewards""#
        );
    }
}
