// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber entry point for pushing values into a pipeline.
//!
//! A [`Subject`] is the producer-adapter shape: UI and network adapters call
//! [`next`](Subject::next) / [`error`](Subject::error) /
//! [`completed`](Subject::completed) on it, and every currently-subscribed
//! observer receives the event.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers do not receive past values, only values sent
//!   after subscribing. A terminated subject replays its terminal event to
//!   late subscribers.
//! - **Thread-safe**: cheap to clone; all clones share the same state.
//! - **Snapshot broadcast**: delivery iterates over a snapshot of the
//!   subscriber list, so a subscriber may dispose itself (or a sibling)
//!   from inside its own callback.
//!
//! ## Example
//!
//! ```
//! use ripple_core::Subject;
//! use std::sync::{Arc, Mutex};
//!
//! let subject = Subject::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let log = Arc::clone(&seen);
//!
//! let subscription = subject
//!     .observable()
//!     .subscribe_next(move |v| log.lock().unwrap().push(v));
//!
//! subject.next(1);
//! subject.next(2);
//! drop(subscription);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

use crate::disposable::Disposable;
use crate::error::RippleError;
use crate::event::Event;
use crate::mutex::Mutex;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::sink::Sink;
use std::sync::Arc;

enum Terminal {
    Error(RippleError),
    Completed,
}

struct SubjectState<T> {
    terminal: Option<Terminal>,
    sinks: Vec<Sink<T>>,
}

/// A hot source that broadcasts each event to all current subscribers.
pub struct Subject<T> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Creates a new subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                terminal: None,
                sinks: Vec::new(),
            })),
        }
    }

    /// The observable face of this subject.
    ///
    /// Each subscription attaches to the shared subscriber list. If the
    /// subject has already terminated, the subscriber immediately receives
    /// the stored terminal event.
    pub fn observable(&self) -> Observable<T> {
        let state = Arc::clone(&self.state);
        Observable::new(move |sink| {
            let mut guard = state.lock();
            match &guard.terminal {
                Some(Terminal::Error(error)) => {
                    let error = error.clone();
                    drop(guard);
                    sink.error(error);
                }
                Some(Terminal::Completed) => {
                    drop(guard);
                    sink.completed();
                }
                None => guard.sinks.push(sink),
            }
        })
    }

    /// Broadcasts a value to all active subscribers.
    ///
    /// Dropped after termination. Disposed subscribers are pruned lazily,
    /// on the next broadcast.
    pub fn next(&self, value: T) {
        let snapshot = {
            let mut state = self.state.lock();
            if state.terminal.is_some() {
                return;
            }
            state
                .sinks
                .retain(|sink| !sink.subscription().is_disposed());
            state.sinks.clone()
        };
        trace!("subject broadcasting value to {} subscribers", snapshot.len());
        for sink in &snapshot {
            sink.value(value.clone());
        }
    }

    /// Terminates every subscriber with `error` and closes the subject.
    pub fn error(&self, error: RippleError) {
        let snapshot = {
            let mut state = self.state.lock();
            if state.terminal.is_some() {
                return;
            }
            state.terminal = Some(Terminal::Error(error.clone()));
            std::mem::take(&mut state.sinks)
        };
        for sink in snapshot {
            sink.error(error.clone());
        }
    }

    /// Completes every subscriber and closes the subject.
    pub fn completed(&self) {
        let snapshot = {
            let mut state = self.state.lock();
            if state.terminal.is_some() {
                return;
            }
            state.terminal = Some(Terminal::Completed);
            std::mem::take(&mut state.sinks)
        };
        for sink in snapshot {
            sink.completed();
        }
    }

    /// Dispatches a single [`Event`].
    pub fn send(&self, event: Event<T>) {
        match event {
            Event::Value(value) => self.next(value),
            Event::Error(error) => self.error(error),
            Event::Completed => self.completed(),
        }
    }

    /// Returns `true` once the subject has terminated.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state.lock().terminal.is_some()
    }

    /// Number of currently attached subscribers.
    ///
    /// Disposed subscribers are removed lazily on the next broadcast, not
    /// immediately when disposed.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().sinks.len()
    }
}

impl<T: Clone + Send + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

// A subject can terminate a pipeline: binding it as an observer forwards
// every event into the subject's own subscribers.
impl<T: Clone + Send + 'static> Observer<T> for Subject<T> {
    fn on_value(&mut self, value: T) {
        self.next(value);
    }

    fn on_error(&mut self, error: RippleError) {
        self.error(error);
    }

    fn on_completed(&mut self) {
        self.completed();
    }
}
