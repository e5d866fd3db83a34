use ripple_core::Observable;
use ripple_stream::TapExt;
use ripple_test_utils::recording_observer::RecordingObserver;
use ripple_test_utils::values_then_error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_tap_observes_values_without_modifying_them() {
    // Arrange
    let source = Observable::from_iter(vec![1, 2, 3]);
    let sum = Arc::new(AtomicUsize::new(0));
    let tally = Arc::clone(&sum);
    let (observer, log) = RecordingObserver::new();

    // Act
    let _subscription = source
        .tap(move |v: &i32| {
            tally.fetch_add(*v as usize, Ordering::SeqCst);
        })
        .subscribe(observer);

    // Assert
    assert_eq!(log.values(), vec![1, 2, 3]);
    assert_eq!(sum.load(Ordering::SeqCst), 6);
}

#[test]
fn test_tap_is_not_called_for_terminal_events() {
    // Arrange
    let source = values_then_error(vec![1], "boom");
    let calls = Arc::new(AtomicUsize::new(0));
    let count = Arc::clone(&calls);
    let (observer, log) = RecordingObserver::new();

    // Act
    let _subscription = source
        .tap(move |_: &i32| {
            count.fetch_add(1, Ordering::SeqCst);
        })
        .subscribe(observer);

    // Assert: one call for the value, none for the error
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(log.has_error());
}
