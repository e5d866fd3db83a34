// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-based value filtering.

use ripple_core::{Event, EventObserver, Observable};

/// Extension trait providing the `filter` operator.
pub trait FilterExt<T> {
    /// Relays only the values for which `predicate` holds.
    ///
    /// A filtered-out value produces no event at all; terminal events pass
    /// through unchanged. Like `map`, this is a synchronous relay with no
    /// buffering.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::Observable;
    /// use ripple_stream::FilterExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let evens = Observable::from_iter(vec![1, 2, 3, 4]).filter(|v| v % 2 == 0);
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let log = Arc::clone(&seen);
    /// evens.subscribe_next(move |v| log.lock().unwrap().push(v));
    /// assert_eq!(*seen.lock().unwrap(), vec![2, 4]);
    /// ```
    fn filter<F>(&self, predicate: F) -> Observable<T>
    where
        F: FnMut(&T) -> bool + Clone + Send + Sync + 'static;
}

impl<T: Send + 'static> FilterExt<T> for Observable<T> {
    fn filter<F>(&self, predicate: F) -> Observable<T>
    where
        F: FnMut(&T) -> bool + Clone + Send + Sync + 'static,
    {
        let source = self.clone();
        Observable::new(move |sink| {
            let mut predicate = predicate.clone();
            let relay = sink.clone();
            let upstream = source.subscribe(EventObserver::new(move |event: Event<T>| {
                match event {
                    Event::Value(value) => {
                        if predicate(&value) {
                            relay.value(value);
                        }
                    }
                    Event::Error(error) => relay.error(error),
                    Event::Completed => relay.completed(),
                }
            }));
            sink.subscription().add(upstream);
        })
    }
}
