//! `localStorage` adapter for the snapshot store port.
use anyhow::Context;
use fish_companion_core::SnapshotStore;

use crate::dom::{js_error_message, local_storage};

/// Snapshot store backed by the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[derive(Debug, thiserror::Error)]
pub enum LocalStoreError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

fn storage() -> Result<web_sys::Storage, LocalStoreError> {
    local_storage().map_err(|err| LocalStoreError::Unavailable(js_error_message(&err)))
}

impl SnapshotStore for LocalStore {
    type Error = LocalStoreError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        storage()?
            .get_item(key)
            .map_err(|err| LocalStoreError::Storage(js_error_message(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        storage()?
            .set_item(key, value)
            .map_err(|err| LocalStoreError::Storage(js_error_message(&err)))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        storage()?
            .remove_item(key)
            .map_err(|err| LocalStoreError::Storage(js_error_message(&err)))
    }
}

const PROBE_KEY: &str = "fishCompanionProbe";

/// Check that `localStorage` accepts writes.
///
/// # Errors
/// Fails when storage is missing or rejects the probe write (quota, privacy
/// mode).
pub fn probe() -> anyhow::Result<()> {
    let store = LocalStore;
    store.write(PROBE_KEY, "1").context("writing storage probe")?;
    store.remove(PROBE_KEY).context("removing storage probe")?;
    Ok(())
}
