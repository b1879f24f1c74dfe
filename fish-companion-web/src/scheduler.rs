//! Browser write scheduler built on `setTimeout`.
use fish_companion_core::{PendingWrite, WriteScheduler};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

type WriteSlot = Rc<RefCell<Option<PendingWrite>>>;

struct Armed {
    // Dropping the timeout clears it.
    _timer: Timeout,
    write: WriteSlot,
}

/// Debounces writes per key with `gloo` timeouts. Clones share the pending
/// set, so the pool and quest sessions can each hold one.
#[derive(Clone, Default)]
pub struct TimeoutScheduler {
    pending: Rc<RefCell<HashMap<String, Armed>>>,
}

impl TimeoutScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn run(slot: &WriteSlot) {
    let write = slot.borrow_mut().take();
    if let Some(write) = write {
        write();
    }
}

impl WriteScheduler for TimeoutScheduler {
    fn schedule(&mut self, key: &str, delay: Duration, write: PendingWrite) {
        let slot: WriteSlot = Rc::new(RefCell::new(Some(write)));
        let fire = Rc::clone(&slot);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // A fired entry stays in the map with an empty slot until the key is
        // rescheduled, cancelled or flushed; the timer must not drop itself.
        let timer = Timeout::new(millis, move || run(&fire));
        let replaced = self.pending.borrow_mut().insert(
            key.to_string(),
            Armed {
                _timer: timer,
                write: slot,
            },
        );
        drop(replaced);
    }

    fn cancel(&mut self, key: &str) {
        let removed = self.pending.borrow_mut().remove(key);
        drop(removed);
    }

    fn flush(&mut self) {
        let armed: Vec<Armed> = self
            .pending
            .borrow_mut()
            .drain()
            .map(|(_, armed)| armed)
            .collect();
        for entry in armed {
            run(&entry.write);
        }
    }
}
