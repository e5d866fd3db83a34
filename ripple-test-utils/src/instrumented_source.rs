// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A hot source that counts subscriptions and disposals.

use ripple_core::{Observable, Subject};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A [`Subject`]-backed source whose observable face counts how many times
/// it was subscribed and how many of those subscriptions were disposed.
///
/// This is the double for verifying multicast refcounting (a shared source
/// must be subscribed once, no matter how many consumers attach) and error
/// teardown (siblings of a failing source must be disposed).
pub struct InstrumentedSource<T> {
    subject: Subject<T>,
    subscribes: Arc<AtomicUsize>,
    disposals: Arc<AtomicUsize>,
}

impl<T: Clone + Send + Sync + 'static> InstrumentedSource<T> {
    /// Creates a source with both counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subject: Subject::new(),
            subscribes: Arc::new(AtomicUsize::new(0)),
            disposals: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The counting observable face of this source.
    pub fn observable(&self) -> Observable<T> {
        let subject = self.subject.clone();
        let subscribes = Arc::clone(&self.subscribes);
        let disposals = Arc::clone(&self.disposals);
        Observable::new(move |sink| {
            subscribes.fetch_add(1, Ordering::SeqCst);
            let upstream = subject.observable().subscribe(sink.clone());
            sink.subscription().add(upstream);

            let disposals = Arc::clone(&disposals);
            sink.subscription().add_teardown(move || {
                disposals.fetch_add(1, Ordering::SeqCst);
            });
        })
    }

    /// Pushes a value to every active subscription.
    pub fn next(&self, value: T) {
        self.subject.next(value);
    }

    /// Fails every active subscription.
    pub fn error(&self, error: ripple_core::RippleError) {
        self.subject.error(error);
    }

    /// Completes every active subscription.
    pub fn completed(&self) {
        self.subject.completed();
    }

    /// Number of times the observable face has been subscribed.
    #[must_use]
    pub fn subscribe_count(&self) -> usize {
        self.subscribes.load(Ordering::SeqCst)
    }

    /// Number of those subscriptions that have been disposed (explicitly or
    /// through a terminal event).
    #[must_use]
    pub fn dispose_count(&self) -> usize {
        self.disposals.load(Ordering::SeqCst)
    }
}

impl<T: Clone + Send + Sync + 'static> Default for InstrumentedSource<T> {
    fn default() -> Self {
        Self::new()
    }
}
