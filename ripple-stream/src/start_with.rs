// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Start-with operator that prepends initial values to a sequence.

use ripple_core::Observable;

/// Extension trait providing the `start_with` operator.
pub trait StartWithExt<T> {
    /// Emits `initial_values` (in order) to every subscriber before
    /// relaying the source sequence.
    ///
    /// Handy for pipelines that must produce a defined state before the
    /// first real value arrives, such as seeding a form-validity stream
    /// with its initial "empty input" state.
    fn start_with(&self, initial_values: Vec<T>) -> Observable<T>;
}

impl<T: Clone + Send + Sync + 'static> StartWithExt<T> for Observable<T> {
    fn start_with(&self, initial_values: Vec<T>) -> Observable<T> {
        let source = self.clone();
        Observable::new(move |sink| {
            for value in initial_values.clone() {
                sink.value(value);
            }
            // The sink is itself an observer, so the source relays into it
            // directly; the inner subscription is chained for cancellation.
            let upstream = source.subscribe(sink.clone());
            sink.subscription().add(upstream);
        })
    }
}
