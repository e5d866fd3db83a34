use ripple_core::{Observable, Subject};
use ripple_stream::SwitchMapExt;
use ripple_test_utils::recording_observer::RecordingObserver;
use std::collections::HashMap;
use std::sync::Arc;

/// A family of inner subjects addressable by outer value, so tests can
/// drive each inner stream independently.
fn keyed_inners() -> (
    Arc<HashMap<char, Subject<String>>>,
    impl FnMut(char) -> Observable<String> + Clone + Send + Sync + 'static,
) {
    let inners: Arc<HashMap<char, Subject<String>>> = Arc::new(
        ['a', 'b', 'c']
            .into_iter()
            .map(|key| (key, Subject::new()))
            .collect(),
    );
    let lookup = Arc::clone(&inners);
    (inners, move |key: char| lookup[&key].observable())
}

#[test]
fn test_switch_map_relays_values_of_the_current_inner_stream() {
    // Arrange
    let outer = Subject::<char>::new();
    let (inners, project) = keyed_inners();
    let (observer, log) = RecordingObserver::new();
    let _subscription = outer.observable().switch_map(project).subscribe(observer);

    // Act
    outer.next('a');
    inners[&'a'].next("a1".to_string());
    inners[&'a'].next("a2".to_string());

    // Assert
    assert_eq!(log.values(), vec!["a1".to_string(), "a2".to_string()]);
}

#[test]
fn test_switch_map_switches_to_the_latest_inner_stream() {
    // Arrange
    let outer = Subject::<char>::new();
    let (inners, project) = keyed_inners();
    let (observer, log) = RecordingObserver::new();
    let _subscription = outer.observable().switch_map(project).subscribe(observer);

    // Act: inner(a) emits before and after the switch to inner(b)
    outer.next('a');
    inners[&'a'].next("a1".to_string());
    outer.next('b');
    inners[&'a'].next("a2".to_string()); // superseded, must not be observed
    inners[&'b'].next("b1".to_string());

    // Assert
    assert_eq!(log.values(), vec!["a1".to_string(), "b1".to_string()]);
}

#[test]
fn test_switch_map_inner_completion_is_absorbed() {
    // Arrange
    let outer = Subject::<char>::new();
    let (inners, project) = keyed_inners();
    let (observer, log) = RecordingObserver::new();
    let _subscription = outer.observable().switch_map(project).subscribe(observer);

    // Act
    outer.next('a');
    inners[&'a'].next("a1".to_string());
    inners[&'a'].completed();
    outer.next('b');
    inners[&'b'].next("b1".to_string());

    // Assert: inner completion did not complete the output
    assert_eq!(log.values(), vec!["a1".to_string(), "b1".to_string()]);
    assert!(!log.has_completed());
}

#[test]
fn test_switch_map_completes_after_outer_and_current_inner_complete() {
    // Arrange
    let outer = Subject::<char>::new();
    let (inners, project) = keyed_inners();
    let (observer, log) = RecordingObserver::new();
    let _subscription = outer.observable().switch_map(project).subscribe(observer);

    // Act
    outer.next('a');
    outer.completed();
    assert!(!log.has_completed()); // inner(a) still pending
    inners[&'a'].next("a1".to_string());
    inners[&'a'].completed();

    // Assert
    assert_eq!(log.values(), vec!["a1".to_string()]);
    assert!(log.has_completed());
    log.assert_terminal_once();
}

#[test]
fn test_switch_map_outer_completion_with_no_pending_inner_completes_immediately() {
    // Arrange
    let outer = Subject::<char>::new();
    let (inners, project) = keyed_inners();
    let (observer, log) = RecordingObserver::new();
    let _subscription = outer.observable().switch_map(project).subscribe(observer);

    // Act
    outer.next('a');
    inners[&'a'].completed();
    outer.completed();

    // Assert
    assert!(log.has_completed());
}

#[test]
fn test_switch_map_with_synchronous_inners_chains_requests() {
    // Arrange: every query immediately yields one response
    let queries = Subject::<i32>::new();
    let (observer, log) = RecordingObserver::new();
    let _subscription = queries
        .observable()
        .switch_map(|q| Observable::just(q * 100))
        .subscribe(observer);

    // Act
    queries.next(1);
    queries.next(2);
    queries.next(3);

    // Assert
    assert_eq!(log.values(), vec![100, 200, 300]);
}

#[test]
fn test_switch_map_disposal_reaches_the_active_inner_stream() {
    // Arrange
    let outer = Subject::<char>::new();
    let (inners, project) = keyed_inners();
    let (observer, log) = RecordingObserver::new();
    let subscription = outer.observable().switch_map(project).subscribe(observer);

    // Act
    outer.next('a');
    ripple_core::Disposable::dispose(&subscription);
    inners[&'a'].next("a1".to_string());

    // Assert: nothing leaks past the disposed subscription
    assert!(log.values().is_empty());
}
