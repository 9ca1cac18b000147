//! Link-time collected handler registrations.
//!
//! Lets handler modules announce themselves without a central registration
//! site: each module submits a [`HandlerRegistration`] with
//! [`inventory::submit!`], and whoever owns the table folds every collected
//! entry in with [`OwnedTable::register_collected`].

use slotcall_core::{Handler, Id};

use crate::owned::OwnedTable;

/// A dispatch registration submitted via [`inventory::submit!`].
///
/// ```rust,ignore
/// use slotcall::{inventory, HandlerRegistration};
///
/// fn on_timer(_id: usize) { /* acknowledge the timer */ }
///
/// inventory::submit! {
///     HandlerRegistration::new(3, on_timer)
/// }
/// ```
pub struct HandlerRegistration {
    /// Identifier the handler is registered under.
    pub id: Id,
    /// The free function bound into the slot.
    pub handler: fn(Id),
}

impl HandlerRegistration {
    /// Creates a registration entry; `const` so it can live in a `submit!`
    /// block.
    pub const fn new(id: Id, handler: fn(Id)) -> Self {
        Self { id, handler }
    }
}

inventory::collect!(HandlerRegistration);

impl<'a, const RANGE: usize, const OFFSET: usize> OwnedTable<'a, RANGE, OFFSET> {
    /// Registers every collected [`HandlerRegistration`].
    ///
    /// Entries go through the normal [`register`](OwnedTable::register) path:
    /// last write wins in link order, and entries outside this table's window
    /// are silently ignored, so the same collection can feed tables with
    /// different windows.
    pub fn register_collected(&mut self) {
        for registration in inventory::iter::<HandlerRegistration> {
            self.register(registration.id, Handler::function(registration.handler));
        }
    }
}
