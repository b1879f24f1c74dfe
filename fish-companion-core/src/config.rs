//! Persistence configuration
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{PERSIST_DEBOUNCE_MS, POOL_STORAGE_KEY, QUEST_STORAGE_KEY};

/// Storage keys and write debounce shared by both trackers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    pub pool_key: String,
    pub quest_key: String,
    /// Quiet period after the last mutation before a snapshot is written.
    pub debounce_ms: u32,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            pool_key: POOL_STORAGE_KEY.to_string(),
            quest_key: QUEST_STORAGE_KEY.to_string(),
            debounce_ms: PERSIST_DEBOUNCE_MS,
        }
    }
}

impl PersistenceConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_keys() {
        let cfg = PersistenceConfig::default_config();
        assert_eq!(cfg.pool_key, "fishingTracker");
        assert_eq!(cfg.quest_key, "questProgress");
        assert_eq!(cfg.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: PersistenceConfig = serde_json::from_str(r#"{"debounce_ms": 50}"#).unwrap();
        assert_eq!(cfg.debounce_ms, 50);
        assert_eq!(cfg.pool_key, "fishingTracker");
    }
}
