use ripple_core::{Observable, Subject};
use ripple_stream::MapExt;
use ripple_test_utils::recording_observer::RecordingObserver;

#[test]
fn test_map_transforms_each_value_in_order() {
    // Arrange
    let source = Observable::from_iter(vec![1, 2, 3]);
    let (observer, log) = RecordingObserver::new();

    // Act
    let _subscription = source.map(|v| v * 10).subscribe(observer);

    // Assert
    assert_eq!(log.values(), vec![10, 20, 30]);
    assert!(log.has_completed());
    log.assert_terminal_once();
}

#[test]
fn test_map_changes_the_value_type() {
    // Arrange
    let source = Observable::from_iter(vec![1, 22, 333]);
    let (observer, log) = RecordingObserver::new();

    // Act
    let _subscription = source.map(|v: i32| v.to_string().len()).subscribe(observer);

    // Assert
    assert_eq!(log.values(), vec![1, 2, 3]);
}

#[test]
fn test_map_propagates_completion_unchanged() {
    // Arrange
    let source = Observable::<i32>::empty();
    let (observer, log) = RecordingObserver::new();

    // Act
    let _subscription = source.map(|v| v).subscribe(observer);

    // Assert
    assert!(log.values().is_empty());
    assert!(log.has_completed());
}

#[test]
fn test_map_stateful_transform_does_not_leak_across_subscriptions() {
    // Arrange: a transform with per-subscription state
    let source = Observable::from_iter(vec![10, 20]);
    let numbered = source.map({
        let mut counter = 0usize;
        move |v| {
            counter += 1;
            (counter, v)
        }
    });

    // Act: two independent subscriptions
    let (first_observer, first) = RecordingObserver::new();
    let _first_sub = numbered.subscribe(first_observer);
    let (second_observer, second) = RecordingObserver::new();
    let _second_sub = numbered.subscribe(second_observer);

    // Assert: the second subscription starts counting from scratch
    assert_eq!(first.values(), vec![(1, 10), (2, 20)]);
    assert_eq!(second.values(), vec![(1, 10), (2, 20)]);
}

#[test]
fn test_map_relays_hot_sources_live() {
    // Arrange
    let subject = Subject::<i32>::new();
    let (observer, log) = RecordingObserver::new();
    let subscription = subject.observable().map(|v| v + 1).subscribe(observer);

    // Act
    subject.next(1);
    subject.next(2);
    ripple_core::Disposable::dispose(&subscription);
    subject.next(3);

    // Assert
    assert_eq!(log.values(), vec![2, 3]);
}
