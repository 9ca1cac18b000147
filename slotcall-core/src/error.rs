//! Error types for slotcall.
//!
//! Dispatch itself never fails: a runtime identifier with no registration is
//! routed to the table's fallback path or silently dropped, by contract. The
//! only error condition in the system is an out-of-window identifier handed
//! to one of the opt-in fallible registration APIs.

use crate::handler::Id;
use thiserror::Error;

/// An identifier fell outside a table's dispatch window.
///
/// The window covers `[offset, offset + range)`. Returned by fallible APIs
/// such as `OwnedTable::try_register`; the primary `register`/`call` paths
/// swallow the condition instead, as the dispatch contract requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("id {id} outside the {range}-slot dispatch window starting at {offset}")]
pub struct RangeError {
    /// The rejected identifier.
    pub id: Id,
    /// First identifier the table covers.
    pub offset: Id,
    /// Number of dispatch slots.
    pub range: usize,
}
