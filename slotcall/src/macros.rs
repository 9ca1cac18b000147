//! Convenience macros for building handler arrays.

/// Builds a fixed-length handler array from a list of free functions.
///
/// Each entry becomes `Handler::function(f)`. Mix in other binding forms by
/// writing the array literal out with [`Handler`](crate::Handler)
/// constructors instead.
///
/// ```
/// use slotcall::{handler_table, StaticTable};
///
/// fn on_reset(_id: usize) {}
/// fn on_tick(_id: usize) {}
/// fn on_stray(_id: usize) {}
///
/// let handlers = handler_table![on_reset, on_tick, on_stray];
/// let table = StaticTable::<3>::new(&handlers);
/// table.call(1);
/// ```
#[macro_export]
macro_rules! handler_table {
    [$($f:expr),* $(,)?] => {
        [$($crate::Handler::function($f)),*]
    };
}
