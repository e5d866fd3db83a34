use ripple_core::RippleError;
use ripple_stream::{combine_latest_all, CombineLatestExt};
use ripple_test_utils::instrumented_source::InstrumentedSource;
use ripple_test_utils::recording_observer::RecordingObserver;

#[test]
fn test_combine_latest_propagates_a_source_error_exactly_once() {
    // Arrange
    let a = InstrumentedSource::<i32>::new();
    let b = InstrumentedSource::<i32>::new();
    let (observer, log) = RecordingObserver::new();
    let _subscription = a
        .observable()
        .combine_latest(&b.observable())
        .subscribe(observer);

    // Act
    a.next(1);
    b.error(RippleError::producer("b went away"));
    a.next(2);

    // Assert
    assert!(log.values().is_empty());
    assert_eq!(log.errors().len(), 1);
    log.assert_terminal_once();
}

#[test]
fn test_combine_latest_error_disposes_the_sibling_subscription() {
    // Arrange
    let a = InstrumentedSource::<i32>::new();
    let b = InstrumentedSource::<i32>::new();
    let (observer, _log) = RecordingObserver::new();
    let _subscription = a
        .observable()
        .combine_latest(&b.observable())
        .subscribe(observer);
    assert_eq!(a.dispose_count(), 0);

    // Act
    b.error(RippleError::producer("b went away"));

    // Assert: the healthy sibling was torn down with the combination
    assert_eq!(a.dispose_count(), 1);
    assert_eq!(b.dispose_count(), 1);
}

#[test]
fn test_combine_latest_all_error_disposes_every_sibling() {
    // Arrange
    let sources: Vec<InstrumentedSource<i32>> =
        (0..3).map(|_| InstrumentedSource::new()).collect();
    let (observer, log) = RecordingObserver::new();
    let _subscription = combine_latest_all(
        sources.iter().map(InstrumentedSource::observable).collect(),
    )
    .subscribe(observer);

    // Act
    sources[0].next(1);
    sources[1].error(RippleError::producer("middle source failed"));

    // Assert
    assert_eq!(log.errors().len(), 1);
    for source in &sources {
        assert_eq!(source.dispose_count(), 1);
    }
}
