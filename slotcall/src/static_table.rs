//! Dispatch over an externally-owned, immutable handler array.

use slotcall_core::{Handler, Id};

use crate::bounds::IdInTable;

/// A read-only dispatch table backed by a caller-owned handler array.
///
/// The table is a thin view: it stores nothing but the array reference, and
/// the caller is responsible for keeping the array alive and every entry
/// meaningful. `LEN` is the full array length; the dispatchable window covers
/// `[OFFSET, OFFSET + LEN - 1)` and the trailing entry (`LEN - 1`) is the
/// designated out-of-range slot, invoked unconditionally for any identifier
/// outside the window. No validity checks happen anywhere on this variant;
/// an unbound entry simply does nothing when hit.
///
/// For a table that owns its slots and accepts registrations at runtime, use
/// [`OwnedTable`](crate::OwnedTable).
///
/// ```
/// use slotcall::{handler_table, StaticTable};
///
/// fn on_reset(_id: usize) {}
/// fn on_tick(_id: usize) {}
/// fn on_stray(_id: usize) { /* log the stray vector */ }
///
/// let handlers = handler_table![on_reset, on_tick, on_stray];
/// let table = StaticTable::<3>::new(&handlers);
/// table.call(0); // on_reset
/// table.call(1); // on_tick
/// table.call(5); // out of range: on_stray, with id 5
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StaticTable<'a, const LEN: usize, const OFFSET: usize = 0> {
    handlers: &'a [Handler<'a>; LEN],
}

impl<'a, const LEN: usize, const OFFSET: usize> StaticTable<'a, LEN, OFFSET> {
    /// Number of dispatchable slots (`LEN - 1`; the trailing entry is the
    /// out-of-range slot).
    pub const RANGE: usize = LEN - 1;

    const SHAPE: () = assert!(
        LEN >= 2,
        "a static table needs at least one dispatch slot plus the trailing out-of-range slot"
    );

    /// Wraps a handler array.
    ///
    /// The array length carries the table's shape: `LEN - 1` dispatch slots
    /// plus the out-of-range slot, so an array missing the trailing entry is
    /// unrepresentable. A table with no dispatch slots refuses to build.
    pub const fn new(handlers: &'a [Handler<'a>; LEN]) -> Self {
        () = Self::SHAPE;
        Self { handlers }
    }

    /// Number of dispatchable slots.
    pub const fn range(&self) -> usize {
        Self::RANGE
    }

    /// First identifier the table covers.
    pub const fn offset(&self) -> usize {
        OFFSET
    }

    /// Whether `id` falls within the dispatch window.
    pub const fn contains(&self, id: Id) -> bool {
        id >= OFFSET && id - OFFSET < Self::RANGE
    }

    /// Dispatches a compile-time identifier, with no runtime range branch.
    ///
    /// An identifier outside the window refuses to build:
    ///
    /// ```compile_fail
    /// use slotcall::{handler_table, StaticTable};
    ///
    /// fn beep(_id: usize) {}
    ///
    /// let handlers = handler_table![beep, beep, beep];
    /// let table = StaticTable::<3>::new(&handlers);
    /// table.call_checked::<7>();
    /// ```
    pub fn call_checked<const ID: usize>(&self) {
        () = IdInTable::<ID, LEN, OFFSET>::CHECK;
        self.handlers[ID - OFFSET].invoke(ID);
    }

    /// Dispatches a runtime identifier.
    ///
    /// In-window identifiers go to their slot; anything else goes to the
    /// trailing out-of-range slot, unconditionally and regardless of how far
    /// out it is. That slot must guard itself if the caller wants silent
    /// handling (an unbound entry already is silent).
    pub fn call(&self, id: Id) {
        if self.contains(id) {
            self.handlers[id - OFFSET].invoke(id);
        } else {
            self.handlers[Self::RANGE].invoke(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_predicate() {
        let handlers = [Handler::unbound(); 5];
        let table = StaticTable::<5, 32>::new(&handlers);
        assert_eq!(table.range(), 4);
        assert_eq!(table.offset(), 32);
        assert!(table.contains(32));
        assert!(table.contains(35));
        assert!(!table.contains(31));
        assert!(!table.contains(36));
    }

    #[test]
    fn test_unbound_out_of_range_slot_is_silent() {
        let handlers = [Handler::unbound(); 3];
        let table = StaticTable::<3>::new(&handlers);
        table.call(usize::MAX);
    }
}
