//! Fishing companion core
//!
//! Platform-agnostic tracker logic: per-lake fish pools with undo, the
//! broken-line counter, quest breakpoint progress, and the snapshot codec and
//! ports used to persist them. No UI or browser dependencies live here.

pub mod config;
pub mod constants;
pub mod fish;
pub mod persist;
pub mod pool;
pub mod quest;
pub mod session;
pub mod snapshot;
pub mod threads;

// Re-export commonly used types
pub use config::PersistenceConfig;
pub use constants::{BASELINE_LEGENDARY_ODDS, MAX_BROKEN_LINES};
pub use fish::{FishCategory, FishCounts, Lake, PerLake, Rarity};
pub use persist::{
    ImmediateScheduler, ManualScheduler, MemoryStore, PendingWrite, SnapshotStore, WriteScheduler,
};
pub use pool::{
    CatchAction, CaughtSummary, LakeCatch, LakePool, LakeTotals, LegendaryOdds, OddsTrend,
    PoolTracker,
};
pub use quest::{
    CatalogError, Milestone, Quest, QuestCatalog, QuestName, QuestProgress, QuestTracker,
    RewardSplit, parse_progress_input, totals,
};
pub use session::{PoolSession, QuestSession, Session};
pub use snapshot::{Snapshot, SnapshotError};
pub use threads::BrokenLines;

/// Both trackers opened against one store and scheduler.
pub struct Companion<S, W>
where
    S: SnapshotStore + Clone + 'static,
    W: WriteScheduler + Clone,
{
    pub pool: PoolSession<S, W>,
    pub quests: QuestSession<S, W>,
}

impl<S, W> Companion<S, W>
where
    S: SnapshotStore + Clone + 'static,
    W: WriteScheduler + Clone,
{
    /// Load both trackers, falling back to defaults for anything unreadable.
    pub fn open(store: S, scheduler: W, config: &PersistenceConfig) -> Self {
        Self::with_catalog(store, scheduler, config, QuestCatalog::standard())
    }

    /// Like [`Companion::open`] with a custom quest catalog.
    pub fn with_catalog(
        store: S,
        scheduler: W,
        config: &PersistenceConfig,
        catalog: QuestCatalog,
    ) -> Self {
        Self {
            pool: Session::open_default(store.clone(), scheduler.clone(), config),
            quests: Session::open(QuestTracker::new(catalog), store, scheduler, config),
        }
    }

    /// Write any pending snapshots for both trackers.
    pub fn flush(&mut self) {
        self.pool.flush();
        self.quests.flush();
    }
}
