// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy, re-playable event sequences.

use crate::error::RippleError;
use crate::event::Event;
use crate::observer::{EventObserver, Observer};
use crate::sink::Sink;
use crate::subscription::Subscription;
use std::sync::Arc;

/// A lazy recipe for producing a sequence of values to any observer that
/// subscribes.
///
/// An observable owns no running state: state lives in the subscription
/// created per `subscribe` call. Cold by default — every subscription
/// re-runs the production recipe from scratch, and independent
/// subscriptions share nothing unless explicitly multicast (see the
/// `share_replay` operator in `ripple-stream`).
///
/// Observables are cheap to clone; clones share the (immutable) recipe.
///
/// # Examples
///
/// ```
/// use ripple_core::Observable;
/// use std::sync::{Arc, Mutex};
///
/// let numbers = Observable::from_iter(vec![1, 2, 3]);
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let log = Arc::clone(&seen);
/// let _subscription = numbers.subscribe_next(move |v| log.lock().unwrap().push(v));
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
/// ```
pub struct Observable<T> {
    on_subscribe: Arc<dyn Fn(Sink<T>) + Send + Sync>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            on_subscribe: Arc::clone(&self.on_subscribe),
        }
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Creates an observable from a production recipe.
    ///
    /// The recipe runs once per subscription. It receives the [`Sink`] to
    /// emit through and should register any teardown work on the sink's
    /// subscription so cancellation reaches the producer:
    ///
    /// ```
    /// use ripple_core::{Disposal, Observable};
    ///
    /// let source = Observable::new(|sink| {
    ///     sink.value(42);
    ///     sink.subscription().add(Disposal::new(|| {
    ///         // stop the underlying producer here
    ///     }));
    /// });
    /// ```
    pub fn new(on_subscribe: impl Fn(Sink<T>) + Send + Sync + 'static) -> Self {
        Self {
            on_subscribe: Arc::new(on_subscribe),
        }
    }

    /// Materializes the pipeline for `observer`.
    ///
    /// The observer receives zero or more values followed by at most one
    /// terminal event, in producer order; nothing is delivered after the
    /// returned [`Subscription`] is disposed.
    pub fn subscribe(&self, observer: impl Observer<T> + Send + 'static) -> Subscription {
        let subscription = Subscription::new();
        let sink = Sink::new(observer, subscription.clone());
        (self.on_subscribe)(sink);
        subscription
    }

    /// Subscribes with separate closures for each event kind.
    pub fn subscribe_with<V, E, C>(
        &self,
        mut on_value: V,
        mut on_error: E,
        mut on_completed: C,
    ) -> Subscription
    where
        V: FnMut(T) + Send + 'static,
        E: FnMut(RippleError) + Send + 'static,
        C: FnMut() + Send + 'static,
    {
        self.subscribe(EventObserver::new(move |event: Event<T>| match event {
            Event::Value(value) => on_value(value),
            Event::Error(error) => on_error(error),
            Event::Completed => on_completed(),
        }))
    }

    /// Subscribes for values only.
    ///
    /// Errors are not delivered anywhere; they are logged when the
    /// `tracing` feature is enabled. Prefer [`Observable::subscribe_with`]
    /// for sequences that can fail.
    pub fn subscribe_next<V>(&self, mut on_value: V) -> Subscription
    where
        V: FnMut(T) + Send + 'static,
    {
        self.subscribe(EventObserver::new(move |event: Event<T>| match event {
            Event::Value(value) => on_value(value),
            Event::Error(error) => {
                warn!("unhandled error on value-only subscription: {error}");
                let _ = error;
            }
            Event::Completed => {}
        }))
    }
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    /// An observable that emits `value` once, then completes.
    pub fn just(value: T) -> Self {
        Self::new(move |sink| {
            sink.value(value.clone());
            sink.completed();
        })
    }

    /// An observable that emits every item of `items`, then completes.
    pub fn from_iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
    {
        Self::new(move |sink| {
            for item in items.clone() {
                sink.value(item);
            }
            sink.completed();
        })
    }
}

impl<T: Send + 'static> Observable<T> {
    /// An observable that completes immediately without emitting.
    pub fn empty() -> Self {
        Self::new(|sink| sink.completed())
    }

    /// An observable that never emits and never terminates.
    ///
    /// Subscriptions to it are released only by explicit disposal.
    pub fn never() -> Self {
        Self::new(|_sink| {})
    }

    /// An observable that fails immediately with `error`.
    pub fn throw(error: RippleError) -> Self {
        Self::new(move |sink| sink.error(error.clone()))
    }
}
