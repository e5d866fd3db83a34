// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources that inject errors at chosen positions, for testing error
//! propagation through operators.

use ripple_core::{Event, EventObserver, Observable, RippleError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A cold source that emits `values` in order, then fails with a producer
/// error instead of completing.
pub fn values_then_error<T>(values: Vec<T>, context: &str) -> Observable<T>
where
    T: Clone + Send + Sync + 'static,
{
    let context = context.to_string();
    Observable::new(move |sink| {
        for value in values.clone() {
            sink.value(value);
        }
        sink.error(RippleError::producer(context.clone()));
    })
}

/// Wraps `source`, replacing its value at `position` (0-indexed, counting
/// values only) with an injected producer error.
///
/// Each subscription counts positions independently, so the wrapper behaves
/// like any other cold operator.
pub fn inject_error_at<T>(source: &Observable<T>, position: usize) -> Observable<T>
where
    T: Send + 'static,
{
    let source = source.clone();
    Observable::new(move |sink| {
        let seen = Arc::new(AtomicUsize::new(0));
        let relay = sink.clone();
        let upstream = source.subscribe(EventObserver::new(move |event: Event<T>| {
            match event {
                Event::Value(value) => {
                    let index = seen.fetch_add(1, Ordering::SeqCst);
                    if index == position {
                        relay.error(RippleError::producer("injected test error"));
                    } else {
                        relay.value(value);
                    }
                }
                other => relay.event(other),
            }
        }));
        sink.subscription().add(upstream);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording_observer::RecordingObserver;

    #[test]
    fn injects_the_error_at_the_requested_position() {
        let source = Observable::from_iter(vec![1, 2, 3]);
        let wrapped = inject_error_at(&source, 1);

        let (observer, log) = RecordingObserver::new();
        let _subscription = wrapped.subscribe(observer);

        assert_eq!(log.values(), vec![1]);
        assert!(log.has_error());
        log.assert_terminal_once();
    }

    #[test]
    fn values_then_error_never_completes() {
        let source = values_then_error(vec![1, 2], "boom");
        let (observer, log) = RecordingObserver::new();
        let _subscription = source.subscribe(observer);

        assert_eq!(log.values(), vec![1, 2]);
        assert!(log.has_error());
        assert!(!log.has_completed());
    }
}
