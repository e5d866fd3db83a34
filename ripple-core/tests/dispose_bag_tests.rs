use ripple_core::{Disposable, Disposal, DisposeBag};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counting_disposal(count: &Arc<AtomicUsize>) -> Disposal {
    let count = Arc::clone(count);
    Disposal::new(move || {
        count.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn dispose_releases_every_member_exactly_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let bag = DisposeBag::new();
    bag.insert(counting_disposal(&count));
    bag.insert(counting_disposal(&count));
    bag.insert(counting_disposal(&count));
    assert_eq!(bag.len(), 3);

    bag.dispose();
    bag.dispose();
    assert_eq!(count.load(Ordering::SeqCst), 3);
    assert!(bag.is_disposed());
    assert!(bag.is_empty());
}

#[test]
fn drop_disposes_members() {
    let count = Arc::new(AtomicUsize::new(0));
    {
        let bag = DisposeBag::new();
        bag.insert(counting_disposal(&count));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn insertion_after_disposal_disposes_immediately() {
    let count = Arc::new(AtomicUsize::new(0));
    let bag = DisposeBag::new();
    bag.dispose();

    bag.insert(counting_disposal(&count));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(bag.is_empty());
}

#[test]
fn already_disposed_member_is_not_disposed_twice() {
    let count = Arc::new(AtomicUsize::new(0));
    let bag = DisposeBag::new();
    let disposal = counting_disposal(&count);
    disposal.dispose();
    bag.insert(disposal);

    bag.dispose();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
