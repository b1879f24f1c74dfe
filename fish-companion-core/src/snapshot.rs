//! JSON snapshot codec for the persisted trackers.
//!
//! Loading merges whatever the stored snapshot carries over the current
//! (default) state: missing lakes, fields and quests keep their defaults and
//! unknown keys are ignored. Unset quest progress is omitted on save, and
//! `null` reads back as unset.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::config::PersistenceConfig;
use crate::fish::{FishCounts, Lake};
use crate::pool::{CatchAction, PoolTracker};
use crate::quest::{QuestName, QuestTracker};
use crate::threads::BrokenLines;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot does not match the expected shape: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("snapshot could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// State that can be written to and merged back from a stored snapshot.
pub trait Snapshot: Default {
    /// Key this state is stored under.
    fn storage_key(config: &PersistenceConfig) -> &str;

    /// # Errors
    ///
    /// Returns `SnapshotError::Encode` if serialization fails.
    fn to_json(&self) -> Result<String, SnapshotError>;

    /// Merge a stored snapshot over `self`. On error `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Decode` if `json` is malformed or mis-shaped.
    fn merge_json(&mut self, json: &str) -> Result<(), SnapshotError>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredPool {
    current_lake: Option<String>,
    num_threads: Option<BrokenLines>,
    lakes_data: Option<BTreeMap<String, StoredLakePool>>,
    total_data: Option<BTreeMap<String, StoredLakeTotals>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredLakePool {
    fish_counts: Option<FishCounts>,
    action_stack: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredLakeTotals {
    fish_counts: Option<FishCounts>,
}

/// Stored entries keyed by a recognised lake name.
fn known_lakes<T>(entries: Option<BTreeMap<String, T>>) -> impl Iterator<Item = (Lake, T)> {
    entries.into_iter().flatten().filter_map(|(key, value)| {
        let lake = key.parse::<Lake>().ok();
        if lake.is_none() {
            log::debug!("ignoring stored data for unknown lake {key}");
        }
        lake.map(|lake| (lake, value))
    })
}

/// Stored undo entries with recognised tags, in order.
fn known_actions(tags: Vec<String>) -> Vec<CatchAction> {
    tags.into_iter()
        .filter_map(|tag| {
            CatchAction::try_from(tag)
                .map_err(|err| log::debug!("ignoring stored undo entry: {err}"))
                .ok()
        })
        .collect()
}

impl Snapshot for PoolTracker {
    fn storage_key(config: &PersistenceConfig) -> &str {
        &config.pool_key
    }

    fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Encode)
    }

    fn merge_json(&mut self, json: &str) -> Result<(), SnapshotError> {
        let stored: StoredPool = serde_json::from_str(json).map_err(SnapshotError::Decode)?;

        if let Some(lake) = stored.current_lake.and_then(|name| name.parse::<Lake>().ok()) {
            self.current_lake = lake;
        }
        if let Some(lines) = stored.num_threads {
            self.broken_lines = lines;
        }
        for (lake, entry) in known_lakes(stored.lakes_data) {
            let pool = self.lakes.get_mut(lake);
            if let Some(counts) = entry.fish_counts {
                pool.fish_counts = counts;
            }
            if let Some(tags) = entry.action_stack {
                pool.action_stack = known_actions(tags);
            }
        }
        for (lake, entry) in known_lakes(stored.total_data) {
            if let Some(counts) = entry.fish_counts {
                self.totals.get_mut(lake).fish_counts = counts;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestSnapshotOut {
    quest_progress: BTreeMap<&'static str, f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredQuests {
    #[serde(default)]
    quest_progress: Option<BTreeMap<String, Option<f64>>>,
}

impl Snapshot for QuestTracker {
    fn storage_key(config: &PersistenceConfig) -> &str {
        &config.quest_key
    }

    fn to_json(&self) -> Result<String, SnapshotError> {
        let out = QuestSnapshotOut {
            quest_progress: self
                .progress
                .iter()
                .map(|(name, value)| (name.as_str(), value))
                .collect(),
        };
        serde_json::to_string(&out).map_err(SnapshotError::Encode)
    }

    fn merge_json(&mut self, json: &str) -> Result<(), SnapshotError> {
        let stored: StoredQuests = serde_json::from_str(json).map_err(SnapshotError::Decode)?;
        for (key, value) in stored.quest_progress.into_iter().flatten() {
            match key.parse::<QuestName>() {
                Ok(name) => {
                    self.progress.set(name, value);
                }
                Err(()) => log::debug!("ignoring stored progress for unknown quest {key}"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fish::FishCategory;

    #[test]
    fn pool_snapshot_uses_browser_shape() {
        let mut tracker = PoolTracker::new();
        tracker.select_lake(Lake::Polar);
        tracker.catch(Lake::Polar, FishCategory::Legendary);
        tracker.add_broken_line();
        let value: serde_json::Value = serde_json::from_str(&tracker.to_json().unwrap()).unwrap();
        assert_eq!(value["currentLake"], "Polar");
        assert_eq!(value["numThreads"], 1);
        assert_eq!(value["lakesData"]["Polar"]["actionStack"][0], "LEG");
        assert_eq!(value["lakesData"]["Polar"]["fishCounts"]["LEG"], 1.0);
        assert_eq!(value["totalData"]["Polar"]["fishCounts"]["LEG"], 1.0);
    }

    #[test]
    fn pool_snapshot_round_trips() {
        let mut tracker = PoolTracker::new();
        tracker.catch_whole_pool(Lake::Sunset);
        tracker.catch(Lake::Oceanic, FishCategory::SmallEpic);
        tracker.select_lake(Lake::Oceanic);
        let json = tracker.to_json().unwrap();
        let mut restored = PoolTracker::new();
        restored.merge_json(&json).unwrap();
        assert_eq!(restored, tracker);
    }

    #[test]
    fn partial_pool_snapshot_merges_over_defaults() {
        let json = r#"{
            "currentLake": "Atlantis",
            "numThreads": 400,
            "lakesData": {
                "Sunset": {"actionStack": ["SR"]},
                "Swamp": {"actionStack": ["LEG"]}
            },
            "totalData": {"Sunset": {"fishCounts": {"SR": 3}}}
        }"#;
        let mut tracker = PoolTracker::new();
        tracker.merge_json(json).unwrap();
        assert_eq!(tracker.current_lake(), Lake::Lakehouse);
        assert_eq!(tracker.broken_lines().count(), 120);
        let sunset = tracker.pool(Lake::Sunset);
        assert_eq!(sunset.counts(), &Lake::Sunset.initial_counts());
        assert_eq!(sunset.actions(), &[CatchAction::Fish(FishCategory::SmallRare)]);
        assert!((tracker.totals(Lake::Sunset).counts().get(FishCategory::SmallRare) - 3.0).abs() < f64::EPSILON);
        assert_eq!(tracker.pool(Lake::Polar), &crate::pool::LakePool::stocked(Lake::Polar));
    }

    #[test]
    fn malformed_pool_snapshot_leaves_state_untouched() {
        let mut tracker = PoolTracker::new();
        tracker.catch(Lake::Lakehouse, FishCategory::LargeEpic);
        let before = tracker.clone();
        for bad in ["{not json", "null", r#"{"lakesData": {"Sunset": {"actionStack": "SR"}}}"#] {
            assert!(matches!(tracker.merge_json(bad), Err(SnapshotError::Decode(_))), "{bad}");
            assert_eq!(tracker, before);
        }
    }

    #[test]
    fn unknown_undo_tags_are_skipped() {
        let json = r#"{
            "currentLake": "Polar",
            "numThreads": 9,
            "lakesData": {
                "Sunset": {
                    "fishCounts": {"SR": 14, "MR": 10, "LR": 5, "SE": 6, "LE": 3, "LEG": 1},
                    "actionStack": ["SR", "XL"]
                }
            },
            "totalData": {"Sunset": {"fishCounts": {"SR": 1}}}
        }"#;
        let mut tracker = PoolTracker::new();
        tracker.merge_json(json).unwrap();
        assert_eq!(tracker.current_lake(), Lake::Polar);
        assert_eq!(tracker.broken_lines().count(), 9);
        let sunset = tracker.pool(Lake::Sunset);
        assert!((sunset.counts().get(FishCategory::SmallRare) - 14.0).abs() < f64::EPSILON);
        assert_eq!(sunset.actions(), &[CatchAction::Fish(FishCategory::SmallRare)]);

        assert!(tracker.undo(Lake::Sunset));
        assert_eq!(tracker.pool(Lake::Sunset), &crate::pool::LakePool::stocked(Lake::Sunset));
        assert_eq!(tracker.totals(Lake::Sunset), &crate::pool::LakeTotals::default());
    }

    #[test]
    fn unset_quest_progress_is_omitted() {
        let mut quests = QuestTracker::default();
        quests.set_progress(QuestName::SilverTickets, 45.0);
        quests.set_progress(QuestName::Keys, f64::NAN);
        assert_eq!(
            quests.to_json().unwrap(),
            r#"{"questProgress":{"Silver Tickets":45.0}}"#
        );
    }

    #[test]
    fn quest_snapshot_reads_nulls_and_skips_unknown_names() {
        let json = r#"{"questProgress": {"Keys": 30, "Arena": null, "Fishing Derby": 3}}"#;
        let mut quests = QuestTracker::default();
        quests.set_progress(QuestName::Arena, 5.0);
        quests.merge_json(json).unwrap();
        assert_eq!(quests.progress_of(QuestName::Keys), Some(30.0));
        assert_eq!(quests.progress_of(QuestName::Arena), None);
        assert_eq!(quests.progress().iter().count(), 1);

        let mut empty = QuestTracker::default();
        empty.merge_json("{}").unwrap();
        assert_eq!(empty, QuestTracker::default());
    }
}
