//! Dispatch over table-owned, runtime-mutable handler slots.

use slotcall_core::{Handler, Id, RangeError};

use crate::bounds::IdInRange;

/// A dispatch table that owns its handler slots and accepts registrations at
/// runtime.
///
/// The table holds `RANGE` slots covering identifiers
/// `[OFFSET, OFFSET + RANGE)` plus a separate, explicitly-settable fallback
/// handler. Every slot starts unbound; dispatching an unbound slot routes to
/// the fallback exactly like an out-of-range identifier does, so an
/// identifier nobody registered for and an identifier the table cannot hold
/// are indistinguishable to the caller. An unbound fallback silently drops.
///
/// Registration is last-write-wins and never chains handlers. Nothing here is
/// internally synchronized: registering from one execution context while
/// another dispatches is a data race, and serializing the two (masking the
/// interrupt, registering before dispatch starts) is the caller's job.
///
/// ```
/// use slotcall::{Handler, OwnedTable};
///
/// fn on_rx(_id: usize) { /* drain the FIFO */ }
///
/// let mut table: OwnedTable<8, 16> = OwnedTable::new();
/// table.register(17, Handler::function(on_rx));
/// table.call(17); // on_rx, with id 17
/// table.call(99); // out of range: silently dropped, no fallback registered
/// ```
#[derive(Clone, Debug)]
pub struct OwnedTable<'a, const RANGE: usize, const OFFSET: usize = 0> {
    slots: [Handler<'a>; RANGE],
    fallback: Handler<'a>,
}

impl<'a, const RANGE: usize, const OFFSET: usize> OwnedTable<'a, RANGE, OFFSET> {
    const SHAPE: () = assert!(RANGE >= 1, "a dispatch table needs at least one slot");

    /// Creates a table with every slot unbound and no fallback.
    ///
    /// `const`, so tables can be built before any dispatch context exists. A
    /// zero-slot table refuses to build.
    pub const fn new() -> Self {
        () = Self::SHAPE;
        Self {
            slots: [Handler::unbound(); RANGE],
            fallback: Handler::unbound(),
        }
    }

    /// Number of dispatch slots.
    pub const fn range(&self) -> usize {
        RANGE
    }

    /// First identifier the table covers.
    pub const fn offset(&self) -> usize {
        OFFSET
    }

    /// Whether `id` falls within the dispatch window.
    pub const fn contains(&self, id: Id) -> bool {
        id >= OFFSET && id - OFFSET < RANGE
    }

    /// The slot for `id`, or `None` outside the window.
    ///
    /// The returned handler may be unbound if nothing was registered.
    pub fn get(&self, id: Id) -> Option<&Handler<'a>> {
        if self.contains(id) {
            Some(&self.slots[id - OFFSET])
        } else {
            None
        }
    }

    /// The current fallback handler.
    pub fn fallback(&self) -> &Handler<'a> {
        &self.fallback
    }

    /// Registers a handler under a compile-time identifier.
    ///
    /// Overwrites whatever the slot held. An identifier outside the window
    /// refuses to build:
    ///
    /// ```compile_fail
    /// use slotcall::{Handler, OwnedTable};
    ///
    /// fn beep(_id: usize) {}
    ///
    /// let mut table: OwnedTable<4, 10> = OwnedTable::new();
    /// table.register_checked::<5>(Handler::function(beep));
    /// ```
    pub fn register_checked<const ID: usize>(&mut self, handler: Handler<'a>) {
        () = IdInRange::<ID, RANGE, OFFSET>::CHECK;
        self.slots[ID - OFFSET] = handler;
    }

    /// Registers a handler under a runtime identifier.
    ///
    /// Overwrites whatever the slot held. An out-of-window identifier is a
    /// silent no-op and leaves the fallback untouched; use [`try_register`]
    /// to surface that condition instead.
    ///
    /// [`try_register`]: OwnedTable::try_register
    pub fn register(&mut self, id: Id, handler: Handler<'a>) {
        if !self.contains(id) {
            #[cfg(feature = "tracing")]
            tracing::trace!(id, "ignoring registration outside the dispatch window");
            return;
        }
        self.slots[id - OFFSET] = handler;
    }

    /// Fallible twin of [`register`](OwnedTable::register).
    pub fn try_register(&mut self, id: Id, handler: Handler<'a>) -> Result<(), RangeError> {
        if self.contains(id) {
            self.slots[id - OFFSET] = handler;
            Ok(())
        } else {
            Err(RangeError {
                id,
                offset: OFFSET,
                range: RANGE,
            })
        }
    }

    /// Sets the fallback handler invoked for unregistered and out-of-range
    /// identifiers.
    ///
    /// Passing [`Handler::unbound`] resets the table to silent dropping.
    pub fn register_fallback(&mut self, handler: Handler<'a>) {
        self.fallback = handler;
    }

    /// Dispatches a compile-time identifier.
    ///
    /// The range check happens at build time; the slot is then dispatched
    /// directly. An identifier outside the window refuses to build:
    ///
    /// ```compile_fail
    /// use slotcall::OwnedTable;
    ///
    /// let table: OwnedTable<4, 10> = OwnedTable::new();
    /// table.call_checked::<14>();
    /// ```
    pub fn call_checked<const ID: usize>(&self) {
        () = IdInRange::<ID, RANGE, OFFSET>::CHECK;
        let slot = &self.slots[ID - OFFSET];
        if slot.is_valid() {
            slot.invoke(ID);
        } else {
            self.unhandled(ID);
        }
    }

    /// Dispatches a runtime identifier.
    ///
    /// An in-window identifier goes to its slot if one was registered.
    /// Everything else, unregistered slot and out-of-range identifier alike,
    /// goes to the fallback, or nowhere if the fallback is unbound.
    pub fn call(&self, id: Id) {
        if self.contains(id) {
            let slot = &self.slots[id - OFFSET];
            if slot.is_valid() {
                slot.invoke(id);
                return;
            }
        }
        self.unhandled(id);
    }

    /// The default route for identifiers with no registration.
    fn unhandled(&self, id: Id) {
        if !self.fallback.is_valid() {
            #[cfg(feature = "tracing")]
            tracing::trace!(id, "dropping unhandled id, no fallback registered");
            return;
        }
        self.fallback.invoke(id);
    }
}

impl<const RANGE: usize, const OFFSET: usize> Default for OwnedTable<'_, RANGE, OFFSET> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_predicate() {
        let table: OwnedTable<4, 10> = OwnedTable::new();
        assert_eq!(table.range(), 4);
        assert_eq!(table.offset(), 10);
        assert!(table.contains(10));
        assert!(table.contains(13));
        assert!(!table.contains(9));
        assert!(!table.contains(14));
    }

    #[test]
    fn test_fresh_table_has_unbound_slots_and_fallback() {
        let table: OwnedTable<4, 10> = OwnedTable::new();
        assert!(!table.fallback().is_valid());
        assert!(table.get(12).is_some_and(|slot| !slot.is_valid()));
        assert!(table.get(14).is_none());
        assert!(table.get(9).is_none());
    }

    #[test]
    fn test_get_reflects_registration() {
        let mut table: OwnedTable<4, 10> = OwnedTable::new();
        table.register(12, Handler::function(|_| {}));
        assert!(table.get(12).is_some_and(Handler::is_valid));
        assert!(table.get(11).is_some_and(|slot| !slot.is_valid()));
    }
}
