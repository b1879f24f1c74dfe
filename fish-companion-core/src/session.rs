//! A tracker bound to its store and write scheduler.
use std::rc::Rc;
use std::time::Duration;

use crate::config::PersistenceConfig;
use crate::persist::{SnapshotStore, WriteScheduler};
use crate::pool::PoolTracker;
use crate::quest::QuestTracker;
use crate::snapshot::Snapshot;

/// Owns one tracker and persists it after every change, debounced.
pub struct Session<T, S, W>
where
    T: Snapshot,
    S: SnapshotStore + 'static,
    W: WriteScheduler,
{
    state: T,
    store: Rc<S>,
    scheduler: W,
    key: String,
    debounce: Duration,
}

pub type PoolSession<S, W> = Session<PoolTracker, S, W>;
pub type QuestSession<S, W> = Session<QuestTracker, S, W>;

impl<T, S, W> Session<T, S, W>
where
    T: Snapshot,
    S: SnapshotStore + 'static,
    W: WriteScheduler,
{
    /// Open a session over `initial`, merging any stored snapshot on top.
    /// A missing, unreadable or malformed snapshot leaves `initial` as is.
    pub fn open(initial: T, store: S, scheduler: W, config: &PersistenceConfig) -> Self {
        let key = T::storage_key(config).to_string();
        let mut state = initial;
        match store.read(&key) {
            Ok(Some(json)) => {
                if let Err(err) = state.merge_json(&json) {
                    log::warn!("Failed to load saved state `{key}`: {err}");
                }
            }
            Ok(None) => log::debug!("no saved state under `{key}`"),
            Err(err) => log::warn!("Failed to read saved state `{key}`: {err}"),
        }
        Self {
            state,
            store: Rc::new(store),
            scheduler,
            key,
            debounce: config.debounce(),
        }
    }

    /// Open a session starting from `T::default()`.
    pub fn open_default(store: S, scheduler: W, config: &PersistenceConfig) -> Self {
        Self::open(T::default(), store, scheduler, config)
    }

    #[must_use]
    pub const fn state(&self) -> &T {
        &self.state
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Run `op` against the tracker and schedule a save if it reports a change.
    pub fn apply(&mut self, op: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = op(&mut self.state);
        if changed {
            self.schedule_save();
        }
        changed
    }

    /// Write any pending snapshot now.
    pub fn flush(&mut self) {
        self.scheduler.flush();
    }

    #[must_use]
    pub fn into_state(self) -> T {
        self.state
    }

    fn schedule_save(&mut self) {
        let json = match self.state.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Failed to encode state `{}`: {err}", self.key);
                return;
            }
        };
        let store = Rc::clone(&self.store);
        let key = self.key.clone();
        self.scheduler.schedule(
            &self.key,
            self.debounce,
            Box::new(move || {
                if let Err(err) = store.write(&key, &json) {
                    log::warn!("Failed to save state `{key}`: {err}");
                }
            }),
        );
    }
}
