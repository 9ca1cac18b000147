//! Shared fixtures for the integration tests.

use core::sync::atomic::{AtomicUsize, Ordering};

use slotcall::Id;

/// A fake peripheral whose interrupt handler is a bound member function.
pub struct Peripheral {
    serviced: AtomicUsize,
    last_vector: AtomicUsize,
}

impl Peripheral {
    pub fn new() -> Self {
        Self {
            serviced: AtomicUsize::new(0),
            last_vector: AtomicUsize::new(0),
        }
    }

    pub fn on_interrupt(&self, id: Id) {
        self.serviced.fetch_add(1, Ordering::SeqCst);
        self.last_vector.store(id, Ordering::SeqCst);
    }

    pub fn serviced(&self) -> usize {
        self.serviced.load(Ordering::SeqCst)
    }

    pub fn last_vector(&self) -> Id {
        self.last_vector.load(Ordering::SeqCst)
    }
}
