//! Persistence ports: a key-value snapshot store and a debounced write
//! scheduler, with in-memory implementations for tests and headless use.
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;
use std::time::Duration;

/// Key-value store holding serialized snapshots.
/// Platform-specific implementations should provide this.
pub trait SnapshotStore {
    type Error: std::error::Error + 'static;

    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key` from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Shared in-memory store. Clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry without going through a tracker.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SnapshotStore for MemoryStore {
    type Error = Infallible;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: SnapshotStore> SnapshotStore for Rc<S> {
    type Error = S::Error;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

/// A write waiting for its debounce window to pass.
pub type PendingWrite = Box<dyn FnOnce()>;

/// Runs writes after a quiet period. Scheduling under a key that already has
/// a pending write cancels the older one first, so only the newest survives.
pub trait WriteScheduler {
    fn schedule(&mut self, key: &str, delay: Duration, write: PendingWrite);

    /// Drop the pending write for `key` without running it.
    fn cancel(&mut self, key: &str);

    /// Run every pending write now.
    fn flush(&mut self);
}

struct Armed {
    due: Duration,
    write: PendingWrite,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    pending: HashMap<String, Armed>,
}

/// Scheduler driven by a virtual clock that only moves when told to.
/// Clones share the clock, so a test can keep a handle while a session owns
/// another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, key: &str) -> bool {
        self.clock.borrow().pending.contains_key(key)
    }

    /// Move the clock forward and run every write that came due.
    pub fn advance(&self, by: Duration) {
        let due = {
            let mut clock = self.clock.borrow_mut();
            clock.now += by;
            let now = clock.now;
            let keys: Vec<String> = clock
                .pending
                .iter()
                .filter(|(_, armed)| armed.due <= now)
                .map(|(key, _)| key.clone())
                .collect();
            keys.into_iter()
                .filter_map(|key| clock.pending.remove(&key))
                .collect::<Vec<_>>()
        };
        for armed in due {
            (armed.write)();
        }
    }

    fn drain(&self) -> Vec<Armed> {
        self.clock
            .borrow_mut()
            .pending
            .drain()
            .map(|(_, armed)| armed)
            .collect()
    }
}

impl WriteScheduler for ManualScheduler {
    fn schedule(&mut self, key: &str, delay: Duration, write: PendingWrite) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.pending.insert(key.to_string(), Armed { due, write });
    }

    fn cancel(&mut self, key: &str) {
        self.clock.borrow_mut().pending.remove(key);
    }

    fn flush(&mut self) {
        for armed in self.drain() {
            (armed.write)();
        }
    }
}

/// Scheduler that writes immediately, for callers that want no debounce.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

impl WriteScheduler for ImmediateScheduler {
    fn schedule(&mut self, _key: &str, _delay: Duration, write: PendingWrite) {
        write();
    }

    fn cancel(&mut self, _key: &str) {}

    fn flush(&mut self) {}
}
