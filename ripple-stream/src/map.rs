// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value transformation operators.

use ripple_core::{Event, EventObserver, Observable, Result};

/// Extension trait providing the `map` and `try_map` operators.
pub trait MapExt<T> {
    /// Transforms each value with `f`; terminal events pass through
    /// unchanged.
    ///
    /// `map` is a purely synchronous relay: it buffers nothing and
    /// introduces no concurrency. The transform is cloned once per
    /// subscription, so stateful closures never share state across
    /// independent subscriptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::Observable;
    /// use ripple_stream::MapExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let doubled = Observable::from_iter(vec![1, 2, 3]).map(|v| v * 2);
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let log = Arc::clone(&seen);
    /// doubled.subscribe_next(move |v| log.lock().unwrap().push(v));
    /// assert_eq!(*seen.lock().unwrap(), vec![2, 4, 6]);
    /// ```
    fn map<U, F>(&self, f: F) -> Observable<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Clone + Send + Sync + 'static;

    /// Transforms each value with a fallible `f`.
    ///
    /// When `f` returns an error, the failure becomes the sequence's
    /// terminal `Error` event and the upstream subscription is disposed —
    /// a failing transform never propagates as an uncontrolled fault.
    /// Use [`RippleError::operator_fault`](ripple_core::RippleError::operator_fault)
    /// to describe ad-hoc transform failures.
    fn try_map<U, F>(&self, f: F) -> Observable<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> Result<U> + Clone + Send + Sync + 'static;
}

impl<T: Send + 'static> MapExt<T> for Observable<T> {
    fn map<U, F>(&self, f: F) -> Observable<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Clone + Send + Sync + 'static,
    {
        let source = self.clone();
        Observable::new(move |sink| {
            let mut f = f.clone();
            let relay = sink.clone();
            let upstream = source.subscribe(EventObserver::new(move |event: Event<T>| {
                match event {
                    Event::Value(value) => relay.value(f(value)),
                    Event::Error(error) => relay.error(error),
                    Event::Completed => relay.completed(),
                }
            }));
            sink.subscription().add(upstream);
        })
    }

    fn try_map<U, F>(&self, f: F) -> Observable<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> Result<U> + Clone + Send + Sync + 'static,
    {
        let source = self.clone();
        Observable::new(move |sink| {
            let mut f = f.clone();
            let relay = sink.clone();
            let upstream = source.subscribe(EventObserver::new(move |event: Event<T>| {
                match event {
                    Event::Value(value) => match f(value) {
                        Ok(mapped) => relay.value(mapped),
                        Err(error) => {
                            debug!("transform failed, terminating sequence: {error}");
                            relay.error(error);
                        }
                    },
                    Event::Error(error) => relay.error(error),
                    Event::Completed => relay.completed(),
                }
            }));
            sink.subscription().add(upstream);
        })
    }
}
