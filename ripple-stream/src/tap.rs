// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tap operator for side-effect observation without modifying the sequence.

use ripple_core::{Event, EventObserver, Observable};

/// Extension trait providing the `tap` operator.
pub trait TapExt<T> {
    /// Invokes a side-effect function for each value without modifying the
    /// sequence.
    ///
    /// Useful for debugging, logging, or metrics collection without
    /// affecting the data flow.
    ///
    /// # Behavior
    ///
    /// - **Values**: `f` is called with a reference to the value, then the
    ///   value passes through unchanged
    /// - **Terminal events**: pass through without calling `f`
    fn tap<F>(&self, f: F) -> Observable<T>
    where
        F: FnMut(&T) + Clone + Send + Sync + 'static;
}

impl<T: Send + 'static> TapExt<T> for Observable<T> {
    fn tap<F>(&self, f: F) -> Observable<T>
    where
        F: FnMut(&T) + Clone + Send + Sync + 'static,
    {
        let source = self.clone();
        Observable::new(move |sink| {
            let mut f = f.clone();
            let relay = sink.clone();
            let upstream = source.subscribe(EventObserver::new(move |event: Event<T>| {
                if let Event::Value(value) = &event {
                    f(value);
                }
                relay.event(event);
            }));
            sink.subscription().add(upstream);
        })
    }
}
