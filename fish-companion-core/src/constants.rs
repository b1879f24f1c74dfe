//! Fixed tables and tuning constants for the trackers.
//!
//! Lake sizes, category fractions and persistence defaults live here so the
//! numbers the UI derives from can only change through a reviewed edit.

// Lake sizes ---------------------------------------------------------------
pub(crate) const LAKE_FISH_TOTAL: f64 = 40.0;
pub(crate) const POLAR_FISH_TOTAL: f64 = 80.0;

// Category fractions (sum to 1.0) -----------------------------------------
pub(crate) const SMALL_RARE_FRACTION: f64 = 0.375;
pub(crate) const MEDIUM_RARE_FRACTION: f64 = 0.25;
pub(crate) const LARGE_RARE_FRACTION: f64 = 0.125;
pub(crate) const SMALL_EPIC_FRACTION: f64 = 0.15;
pub(crate) const LARGE_EPIC_FRACTION: f64 = 0.075;
pub(crate) const LEGENDARY_FRACTION: f64 = BASELINE_LEGENDARY_ODDS;

/// Legendary share of an untouched pool; odds above it are favorable.
pub const BASELINE_LEGENDARY_ODDS: f64 = 0.025;

/// Upper bound of the broken-line counter.
pub const MAX_BROKEN_LINES: u8 = 120;

// Persistence --------------------------------------------------------------
pub(crate) const POOL_STORAGE_KEY: &str = "fishingTracker";
pub(crate) const QUEST_STORAGE_KEY: &str = "questProgress";
pub(crate) const PERSIST_DEBOUNCE_MS: u32 = 300;

/// Persisted tag of the "caught the whole pool" undo entry.
pub(crate) const CATCH_ALL_TAG: &str = "ALL";
