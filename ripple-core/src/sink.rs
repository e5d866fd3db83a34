// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-subscription delivery gate.

use crate::disposable::Disposable;
use crate::error::RippleError;
use crate::event::Event;
use crate::mutex::Mutex;
use crate::observer::Observer;
use crate::subscription::Subscription;
use std::sync::Arc;

/// The delivery end of a subscription: pairs the observer with its
/// [`Subscription`] and enforces the sequence grammar.
///
/// Producers and operators emit through a sink rather than calling the
/// observer directly. The sink guarantees:
///
/// - **Terminal-once**: after an error or completion has been handed to the
///   observer, every further emission is dropped.
/// - **No delivery after disposal**: once the subscription is disposed,
///   values are dropped silently.
/// - **Dispose-before-terminal**: the subscription's teardowns (upstream
///   resources) run *before* the terminal event reaches the observer, so no
///   resource outlives the sequence even if the consumer's handler fails.
///
/// Sinks are cheap to clone; all clones share the same gate.
pub struct Sink<T> {
    observer: Arc<Mutex<Option<Box<dyn Observer<T> + Send>>>>,
    subscription: Subscription,
}

impl<T> Clone for Sink<T> {
    fn clone(&self) -> Self {
        Self {
            observer: Arc::clone(&self.observer),
            subscription: self.subscription.clone(),
        }
    }
}

impl<T> Sink<T> {
    /// Pairs `observer` with `subscription`.
    pub fn new(observer: impl Observer<T> + Send + 'static, subscription: Subscription) -> Self {
        Self {
            observer: Arc::new(Mutex::new(Some(Box::new(observer)))),
            subscription,
        }
    }

    /// The subscription this sink delivers for.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    /// Delivers a value, unless the sequence has terminated or the
    /// subscription has been disposed.
    pub fn value(&self, value: T) {
        if self.subscription.is_disposed() {
            return;
        }
        let mut slot = self.observer.lock();
        if self.subscription.is_disposed() {
            return;
        }
        if let Some(observer) = slot.as_mut() {
            observer.on_value(value);
        }
    }

    /// Terminates the sequence with an error.
    ///
    /// Upstream resources are released before the observer sees the error;
    /// afterwards the subscription reports itself disposed and any explicit
    /// `dispose` call is a no-op.
    pub fn error(&self, error: RippleError) {
        let observer = self.observer.lock().take();
        let deliver = !self.subscription.is_disposed();
        self.subscription.dispose();
        if let Some(mut observer) = observer {
            if deliver {
                debug!("sequence terminated with error: {error}");
                observer.on_error(error);
            }
        }
    }

    /// Terminates the sequence successfully.
    ///
    /// Same disposal ordering as [`Sink::error`].
    pub fn completed(&self) {
        let observer = self.observer.lock().take();
        let deliver = !self.subscription.is_disposed();
        self.subscription.dispose();
        if let Some(mut observer) = observer {
            if deliver {
                observer.on_completed();
            }
        }
    }

    /// Dispatches a single [`Event`].
    pub fn event(&self, event: Event<T>) {
        match event {
            Event::Value(value) => self.value(value),
            Event::Error(error) => self.error(error),
            Event::Completed => self.completed(),
        }
    }
}

impl<T> Observer<T> for Sink<T> {
    fn on_value(&mut self, value: T) {
        self.value(value);
    }

    fn on_error(&mut self, error: RippleError) {
        self.error(error);
    }

    fn on_completed(&mut self) {
        self.completed();
    }
}
