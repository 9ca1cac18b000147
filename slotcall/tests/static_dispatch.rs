use core::sync::atomic::{AtomicUsize, Ordering};

use slotcall::testing::RecordingHandler;
use slotcall::{handler_table, Handler, StaticTable};

#[test]
fn test_three_slot_table_routes_by_id() {
    let a = RecordingHandler::new();
    let b = RecordingHandler::new();
    let stray = RecordingHandler::new();
    let handlers = [a.handler(), b.handler(), stray.handler()];
    let table = StaticTable::<3>::new(&handlers);

    table.call(0);
    table.call(1);
    table.call(5);

    assert_eq!(a.last_id(), Some(0));
    assert_eq!(b.last_id(), Some(1));
    assert_eq!(stray.last_id(), Some(5));
    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 1);
    assert_eq!(stray.count(), 1);
}

#[test]
fn test_out_of_range_slot_catches_any_distance() {
    let slot = RecordingHandler::new();
    let stray = RecordingHandler::new();
    let handlers = [slot.handler(), stray.handler()];
    let table = StaticTable::<2, 8>::new(&handlers);

    table.call(7);
    assert_eq!(stray.last_id(), Some(7));
    table.call(9);
    assert_eq!(stray.last_id(), Some(9));
    table.call(usize::MAX);
    assert_eq!(stray.last_id(), Some(usize::MAX));

    assert_eq!(slot.count(), 0);
    assert_eq!(stray.count(), 3);
}

#[test]
fn test_offset_window_shifts_slot_resolution() {
    let low = RecordingHandler::new();
    let high = RecordingHandler::new();
    let stray = RecordingHandler::new();
    let handlers = [low.handler(), high.handler(), stray.handler()];
    let table = StaticTable::<3, 32>::new(&handlers);

    table.call(32);
    table.call(33);
    table.call(31);

    assert_eq!(low.last_id(), Some(32));
    assert_eq!(high.last_id(), Some(33));
    assert_eq!(stray.last_id(), Some(31));
}

#[test]
fn test_checked_call_dispatches_without_fallback_involvement() {
    let slot = RecordingHandler::new();
    let stray = RecordingHandler::new();
    let handlers = [slot.handler(), stray.handler()];
    let table = StaticTable::<2, 8>::new(&handlers);

    table.call_checked::<8>();

    assert_eq!(slot.last_id(), Some(8));
    assert_eq!(stray.count(), 0);
}

#[test]
fn test_handler_table_macro_builds_function_entries() {
    static RESETS: AtomicUsize = AtomicUsize::new(0);
    static STRAYS: AtomicUsize = AtomicUsize::new(0);

    fn on_reset(_id: usize) {
        RESETS.fetch_add(1, Ordering::SeqCst);
    }

    fn on_stray(_id: usize) {
        STRAYS.fetch_add(1, Ordering::SeqCst);
    }

    let handlers = handler_table![on_reset, on_stray];
    let table = StaticTable::<2>::new(&handlers);

    table.call(0);
    table.call(1); // out of range for a single-slot window
    table.call_checked::<0>();

    assert_eq!(RESETS.load(Ordering::SeqCst), 2);
    assert_eq!(STRAYS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_const_table_over_const_handlers() {
    static HITS: AtomicUsize = AtomicUsize::new(0);

    fn on_vector(_id: usize) {
        HITS.fetch_add(1, Ordering::SeqCst);
    }

    const HANDLERS: [Handler<'static>; 2] = [Handler::function(on_vector), Handler::unbound()];
    const TABLE: StaticTable<'static, 2> = StaticTable::new(&HANDLERS);

    TABLE.call(0);
    TABLE.call(77); // unbound out-of-range slot: silent

    assert_eq!(HITS.load(Ordering::SeqCst), 1);
}
