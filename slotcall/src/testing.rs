//! Test-support handlers.
//!
//! Probes that hand out a bound [`Handler`] view of themselves and record
//! what the table did with it. They rely only on `core` atomics, so they work
//! in `no_std` test environments and double as small examples of the
//! receiver + member-function binding form.

use core::sync::atomic::{AtomicUsize, Ordering};

use slotcall_core::{Handler, Id};

/// Counts how many times its handler was invoked.
///
/// ```
/// use slotcall::testing::CountingHandler;
/// use slotcall::OwnedTable;
///
/// let counter = CountingHandler::new();
/// let mut table: OwnedTable<4> = OwnedTable::new();
/// table.register(2, counter.handler());
/// table.call(2);
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingHandler {
    count: AtomicUsize,
}

impl CountingHandler {
    /// Creates a counter at zero.
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    /// A handler bound to this counter.
    pub fn handler(&self) -> Handler<'_> {
        Handler::bound(self, Self::record)
    }

    fn record(&self, _id: Id) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of invocations observed.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Resets the count to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Records the invocation count and the most recent identifier.
pub struct RecordingHandler {
    count: AtomicUsize,
    last: AtomicUsize,
}

impl RecordingHandler {
    /// Creates a recorder that has seen nothing.
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
            last: AtomicUsize::new(0),
        }
    }

    /// A handler bound to this recorder.
    pub fn handler(&self) -> Handler<'_> {
        Handler::bound(self, Self::record)
    }

    fn record(&self, id: Id) {
        self.last.store(id, Ordering::SeqCst);
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of invocations observed.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// The identifier of the most recent invocation, or `None` before the
    /// first one.
    pub fn last_id(&self) -> Option<Id> {
        if self.count() == 0 {
            None
        } else {
            Some(self.last.load(Ordering::SeqCst))
        }
    }

    /// Forgets everything observed so far.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
        self.last.store(0, Ordering::SeqCst);
    }
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::new()
    }
}
