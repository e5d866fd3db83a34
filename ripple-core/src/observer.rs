// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The consumer side of a subscription.

use crate::error::RippleError;
use crate::event::Event;

/// A three-event sink: value, error, completion.
///
/// Observers are driven synchronously on whatever context the producer is
/// running on. After `on_error` or `on_completed` has been invoked, no
/// further method is invoked for the same subscription.
pub trait Observer<T> {
    /// Called for every value the sequence produces.
    fn on_value(&mut self, value: T);

    /// Called at most once, when the sequence fails. Terminal.
    fn on_error(&mut self, error: RippleError);

    /// Called at most once, when the sequence ends successfully. Terminal.
    fn on_completed(&mut self);

    /// Dispatches a single [`Event`] to the matching handler.
    fn on_event(&mut self, event: Event<T>) {
        match event {
            Event::Value(value) => self.on_value(value),
            Event::Error(error) => self.on_error(error),
            Event::Completed => self.on_completed(),
        }
    }
}

/// An [`Observer`] backed by a single closure receiving [`Event`]s.
///
/// This is the building block operators use to relay events: the closure is
/// an owned capability, moved into the subscription that drives it.
///
/// # Examples
///
/// ```
/// use ripple_core::{Event, EventObserver, Observable};
///
/// let source = Observable::just(3);
/// let _subscription = source.subscribe(EventObserver::new(|event: Event<i32>| {
///     if let Event::Value(v) = event {
///         assert_eq!(v, 3);
///     }
/// }));
/// ```
pub struct EventObserver<F> {
    callback: F,
}

impl<F> EventObserver<F> {
    /// Wraps `callback` as an observer.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<T, F> Observer<T> for EventObserver<F>
where
    F: FnMut(Event<T>),
{
    fn on_value(&mut self, value: T) {
        (self.callback)(Event::Value(value));
    }

    fn on_error(&mut self, error: RippleError) {
        (self.callback)(Event::Error(error));
    }

    fn on_completed(&mut self) {
        (self.callback)(Event::Completed);
    }
}
