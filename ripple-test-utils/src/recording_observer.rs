// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observer double that records every delivered event.

use parking_lot::Mutex;
use ripple_core::{Event, Observer, RippleError};
use std::sync::Arc;

/// An [`Observer`] that appends every event to a shared log.
///
/// Create one with [`RecordingObserver::new`], move the observer into
/// `subscribe`, and keep the [`EventLog`] handle for assertions.
pub struct RecordingObserver<T> {
    events: Arc<Mutex<Vec<Event<T>>>>,
}

/// Assertion handle over the events a [`RecordingObserver`] received.
pub struct EventLog<T> {
    events: Arc<Mutex<Vec<Event<T>>>>,
}

impl<T> RecordingObserver<T> {
    /// Creates an observer and the log handle reading it.
    pub fn new() -> (Self, EventLog<T>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: Arc::clone(&events),
            },
            EventLog { events },
        )
    }
}

impl<T> Observer<T> for RecordingObserver<T> {
    fn on_value(&mut self, value: T) {
        self.events.lock().push(Event::Value(value));
    }

    fn on_error(&mut self, error: RippleError) {
        self.events.lock().push(Event::Error(error));
    }

    fn on_completed(&mut self) {
        self.events.lock().push(Event::Completed);
    }
}

impl<T: Clone> EventLog<T> {
    /// Every event received so far, in delivery order.
    pub fn events(&self) -> Vec<Event<T>> {
        self.events.lock().clone()
    }

    /// The values received so far, in delivery order.
    pub fn values(&self) -> Vec<T> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Value(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// The errors received so far.
    pub fn errors(&self) -> Vec<RippleError> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Error(error) => Some(error.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T> EventLog<T> {
    /// Number of events received so far.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns `true` if nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Returns `true` if a `Completed` event has been received.
    pub fn has_completed(&self) -> bool {
        self.events.lock().iter().any(Event::is_completed)
    }

    /// Returns `true` if an `Error` event has been received.
    pub fn has_error(&self) -> bool {
        self.events.lock().iter().any(Event::is_error)
    }

    /// Returns `true` if the last received event is terminal.
    pub fn is_terminated(&self) -> bool {
        self.events
            .lock()
            .last()
            .is_some_and(Event::is_terminal)
    }

    /// Asserts the sequence grammar: no event may follow a terminal one.
    pub fn assert_terminal_once(&self) {
        let events = self.events.lock();
        if let Some(position) = events.iter().position(Event::is_terminal) {
            assert_eq!(
                position,
                events.len() - 1,
                "events were delivered after a terminal event"
            );
        }
    }
}

impl<T> Clone for EventLog<T> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}
