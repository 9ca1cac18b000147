//! # slotcall: fixed-capacity callback dispatch
//!
//! `slotcall` maps small integer identifiers (interrupt vector numbers,
//! message ids) to invokable [`Handler`]s through fixed-size tables with no
//! dynamic allocation, built for embedded and interrupt-style environments.
//! A table covers the window `[OFFSET, OFFSET + RANGE)`; identifiers with no
//! specific registration are routed to a well-defined fallback path, never an
//! error.
//!
//! # Two table forms
//!
//! - [`StaticTable`]: a thin, immutable view over a caller-owned handler
//!   array whose trailing entry catches out-of-range identifiers. Nothing to
//!   mutate, nothing to check at dispatch time.
//! - [`OwnedTable`]: owns its slots, accepts registrations at runtime
//!   (last write wins), and keeps a separate, resettable fallback handler for
//!   unregistered and out-of-range identifiers.
//!
//! # Checked and unchecked dispatch
//!
//! Both forms expose the same dual API over the same storage: `call(id)`
//! takes a runtime identifier and branches on the window, while
//! `call_checked::<ID>()` takes a compile-time identifier and moves the range
//! check into the build. An out-of-window `ID` refuses to compile, and the
//! dispatch itself is a bare indexed invoke. Hot paths with statically known
//! vectors pay no branch; parsed or computed identifiers stay safely bounded.
//!
//! # Quick start
//!
//! ```
//! use slotcall::{Handler, OwnedTable};
//!
//! fn on_rx(_id: usize) { /* drain the FIFO */ }
//!
//! let mut table: OwnedTable<8, 16> = OwnedTable::new();
//! table.register(17, Handler::function(on_rx));
//! table.call(17); // dispatches on_rx with id 17
//! table.call(3);  // out of range: silently dropped until a fallback is set
//! ```
//!
//! # Features
//!
//! - `tracing`: emits `trace!` events on the owned table's silent paths
//!   (ignored out-of-range registration, dropped unhandled id)
//! - `inventory`: link-time collected registrations via
//!   [`HandlerRegistration`]

#![cfg_attr(not(test), no_std)]
#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core primitives
pub use slotcall_core;

mod bounds;
mod macros;
mod owned;
mod static_table;

pub mod testing;

#[cfg(feature = "inventory")]
mod collect;

pub use owned::OwnedTable;
pub use slotcall_core::{Handler, Id, RangeError};
pub use static_table::StaticTable;

#[cfg(feature = "inventory")]
pub use collect::HandlerRegistration;
#[cfg(feature = "inventory")]
pub use inventory;

/// Common imports.
///
/// ```rust,ignore
/// use slotcall::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Handler, Id, OwnedTable, RangeError, StaticTable};

    #[cfg(feature = "inventory")]
    pub use crate::HandlerRegistration;
}
