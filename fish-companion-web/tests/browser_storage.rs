#![cfg(target_arch = "wasm32")]

use fish_companion_core::{
    Companion, FishCategory, Lake, PersistenceConfig, SnapshotStore, WriteScheduler,
};
use fish_companion_web::scheduler::TimeoutScheduler;
use fish_companion_web::storage::{self, LocalStore};
use gloo::timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn test_config(prefix: &str) -> PersistenceConfig {
    PersistenceConfig {
        pool_key: format!("{prefix}:pool"),
        quest_key: format!("{prefix}:quests"),
        ..PersistenceConfig::default()
    }
}

#[wasm_bindgen_test]
fn local_store_reads_back_writes() {
    let store = LocalStore;
    store.write("test:roundtrip", "{\"a\":1}").expect("write");
    assert_eq!(
        store.read("test:roundtrip").expect("read").as_deref(),
        Some("{\"a\":1}")
    );
    store.remove("test:roundtrip").expect("remove");
    assert_eq!(store.read("test:roundtrip").expect("read"), None);
}

#[wasm_bindgen_test]
fn storage_probe_succeeds_in_browser() {
    storage::probe().expect("localStorage usable");
}

#[wasm_bindgen_test]
fn flush_writes_before_the_debounce_fires() {
    let config = test_config("test:flush");
    let mut companion = Companion::open(LocalStore, TimeoutScheduler::new(), &config);
    companion
        .pool
        .apply(|pool| pool.catch(Lake::Oceanic, FishCategory::Legendary));
    assert_eq!(LocalStore.read(&config.pool_key).expect("read"), None);

    companion.flush();
    let reopened = Companion::open(LocalStore, TimeoutScheduler::new(), &config);
    assert_eq!(reopened.pool.state(), companion.pool.state());
    LocalStore.remove(&config.pool_key).expect("cleanup");
}

#[wasm_bindgen_test]
async fn rescheduling_a_key_replaces_the_pending_write() {
    let mut scheduler = TimeoutScheduler::new();
    let fired = Rc::new(Cell::new(0));
    for value in 1..=3 {
        let fired = Rc::clone(&fired);
        scheduler.schedule(
            "test:debounce",
            Duration::from_millis(20),
            Box::new(move || fired.set(fired.get() + value)),
        );
    }
    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 3);

    let cancelled = Rc::new(Cell::new(false));
    {
        let cancelled = Rc::clone(&cancelled);
        scheduler.schedule(
            "test:cancel",
            Duration::from_millis(20),
            Box::new(move || cancelled.set(true)),
        );
    }
    scheduler.cancel("test:cancel");
    TimeoutFuture::new(60).await;
    assert!(!cancelled.get());
}
