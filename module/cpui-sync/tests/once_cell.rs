use cpui_sync::SyncOnceCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[test]
fn empty_cell_reads_none() {
    let cell = SyncOnceCell::<u32>::new();
    assert!(cell.get().is_none());
}

#[test]
fn get_or_init_stores_and_returns() {
    let cell = SyncOnceCell::new();
    let v = cell.get_or_init(|| 42_u32);
    assert_eq!(*v, 42);
    assert_eq!(cell.get().copied(), Some(42));
}

#[test]
fn second_init_keeps_the_first_value() {
    let cell = SyncOnceCell::new();
    cell.get_or_init(|| 1_u32);
    let v = cell.get_or_init(|| 2_u32);
    assert_eq!(*v, 1);
}

#[test]
fn racing_initializers_run_exactly_once() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    static CELL: SyncOnceCell<usize> = SyncOnceCell::new();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                *CELL.get_or_init(|| {
                    CALLS.fetch_add(1, Ordering::SeqCst);
                    7
                })
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 7);
    }
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}
