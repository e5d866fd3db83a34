use ripple_core::{Disposable, Observable};
use ripple_stream::ShareExt;
use ripple_test_utils::instrumented_source::InstrumentedSource;
use ripple_test_utils::recording_observer::RecordingObserver;

#[test]
fn test_share_subscribes_upstream_once_for_many_consumers() {
    // Arrange
    let source = InstrumentedSource::<i32>::new();
    let shared = source.observable().share();

    // Act
    let (first_observer, first) = RecordingObserver::new();
    let _first_sub = shared.subscribe(first_observer);
    let (second_observer, second) = RecordingObserver::new();
    let _second_sub = shared.subscribe(second_observer);
    source.next(42);

    // Assert: one upstream run, both consumers served
    assert_eq!(source.subscribe_count(), 1);
    assert_eq!(first.values(), vec![42]);
    assert_eq!(second.values(), vec![42]);
}

#[test]
fn test_share_replay_late_joiner_sees_only_the_latest_value() {
    // Arrange
    let source = InstrumentedSource::<i32>::new();
    let shared = source.observable().share_replay(1);
    let (first_observer, _first) = RecordingObserver::new();
    let _first_sub = shared.subscribe(first_observer);

    // Act: upstream emits before the second subscriber joins
    source.next(1);
    source.next(2);
    source.next(3);
    let (second_observer, second) = RecordingObserver::new();
    let _second_sub = shared.subscribe(second_observer);

    // Assert: the late joiner's first value is 3; it never sees 1 or 2
    assert_eq!(second.values(), vec![3]);

    // Live events resume after the replay
    source.next(4);
    assert_eq!(second.values(), vec![3, 4]);
}

#[test]
fn test_share_replay_buffer_is_delivered_oldest_first() {
    // Arrange
    let source = InstrumentedSource::<i32>::new();
    let shared = source.observable().share_replay(2);
    let (first_observer, _first) = RecordingObserver::new();
    let _first_sub = shared.subscribe(first_observer);

    // Act
    source.next(1);
    source.next(2);
    source.next(3);
    let (second_observer, second) = RecordingObserver::new();
    let _second_sub = shared.subscribe(second_observer);

    // Assert: capacity 2 keeps the two most recent, oldest first
    assert_eq!(second.values(), vec![2, 3]);
}

#[test]
fn test_share_disconnects_upstream_when_the_last_subscriber_leaves() {
    // Arrange
    let source = InstrumentedSource::<i32>::new();
    let shared = source.observable().share();
    let (first_observer, _first) = RecordingObserver::new();
    let first_sub = shared.subscribe(first_observer);
    let (second_observer, _second) = RecordingObserver::new();
    let second_sub = shared.subscribe(second_observer);
    assert_eq!(source.dispose_count(), 0);

    // Act
    first_sub.dispose();
    assert_eq!(source.dispose_count(), 0); // one subscriber still attached
    second_sub.dispose();

    // Assert: refcount hit zero, upstream disconnected
    assert_eq!(source.dispose_count(), 1);
}

#[test]
fn test_share_resets_after_disconnect_and_reconnects_fresh() {
    // Arrange
    let source = InstrumentedSource::<i32>::new();
    let shared = source.observable().share_replay(1);

    let (first_observer, _first) = RecordingObserver::new();
    let first_sub = shared.subscribe(first_observer);
    source.next(1);
    first_sub.dispose();

    // Act: a new subscriber triggers a fresh upstream run
    let (second_observer, second) = RecordingObserver::new();
    let _second_sub = shared.subscribe(second_observer);

    // Assert: the replay buffer was cleared on reset
    assert_eq!(source.subscribe_count(), 2);
    assert!(second.values().is_empty());
}

#[test]
fn test_share_broadcasts_terminal_events_to_all_subscribers() {
    // Arrange
    let source = InstrumentedSource::<i32>::new();
    let shared = source.observable().share();
    let (first_observer, first) = RecordingObserver::new();
    let first_sub = shared.subscribe(first_observer);
    let (second_observer, second) = RecordingObserver::new();
    let _second_sub = shared.subscribe(second_observer);

    // Act
    source.next(1);
    source.completed();

    // Assert
    assert!(first.has_completed());
    assert!(second.has_completed());
    first.assert_terminal_once();
    second.assert_terminal_once();
    assert!(first_sub.is_disposed());
}

#[test]
fn test_share_replay_of_a_cold_source_replays_without_rerunning_it() {
    // Arrange: a cold synchronous source that terminates during connect
    let shared = Observable::from_iter(vec![1, 2, 3]).share_replay(1);

    // Act
    let (first_observer, first) = RecordingObserver::new();
    let _first_sub = shared.subscribe(first_observer);

    // Assert: the first subscriber consumed the whole cold run
    assert_eq!(first.values(), vec![1, 2, 3]);
    assert!(first.has_completed());

    // A terminal event resets the node, so a new subscriber re-runs the
    // source from scratch.
    let (second_observer, second) = RecordingObserver::new();
    let _second_sub = shared.subscribe(second_observer);
    assert_eq!(second.values(), vec![1, 2, 3]);
}

#[test]
fn test_share_in_callback_unsubscribe_is_safe_mid_broadcast() {
    // Arrange: the first subscriber disposes itself on the first value
    let source = InstrumentedSource::<i32>::new();
    let shared = source.observable().share();

    let slot = std::sync::Arc::new(parking_lot::Mutex::new(
        None::<ripple_core::Subscription>,
    ));
    let held = std::sync::Arc::clone(&slot);
    let first_sub = shared.subscribe(ripple_core::EventObserver::new(
        move |event: ripple_core::Event<i32>| {
            if event.is_value() {
                if let Some(subscription) = held.lock().as_ref() {
                    subscription.dispose();
                }
            }
        },
    ));
    *slot.lock() = Some(first_sub);

    let (second_observer, second) = RecordingObserver::new();
    let _second_sub = shared.subscribe(second_observer);

    // Act
    source.next(1);
    source.next(2);

    // Assert: the sibling keeps receiving, the list was not corrupted
    assert_eq!(second.values(), vec![1, 2]);
}
