// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RippleError;

/// A single notification delivered to an [`Observer`](crate::Observer).
///
/// Every subscription observes a sequence obeying the grammar
/// `Value* (Error | Completed)?` — zero or more values followed by at most
/// one terminal event. Once a terminal event has been delivered, nothing
/// further is delivered on that subscription.
#[derive(Debug, Clone)]
pub enum Event<T> {
    /// A successful value
    Value(T),
    /// An error that terminates the sequence
    Error(RippleError),
    /// Successful end of the sequence
    Completed,
}

impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Event::Value(a), Event::Value(b)) => a == b,
            (Event::Completed, Event::Completed) => true,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> Event<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Event::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Event::Error(_))
    }

    /// Returns `true` if this is `Completed`.
    pub const fn is_completed(&self) -> bool {
        matches!(self, Event::Completed)
    }

    /// Returns `true` if this event terminates the sequence.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Event::Error(_) | Event::Completed)
    }

    /// Converts from `Event<T>` to `Option<T>`, discarding terminal events.
    pub fn value(self) -> Option<T> {
        match self {
            Event::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts from `Event<T>` to `Option<RippleError>`, discarding values.
    pub fn error(self) -> Option<RippleError> {
        match self {
            Event::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Maps an `Event<T>` to `Event<U>` by applying a function to a
    /// contained value.
    ///
    /// Terminal events are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> Event<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Event::Value(v) => Event::Value(f(v)),
            Event::Error(e) => Event::Error(e),
            Event::Completed => Event::Completed,
        }
    }
}

impl<T> From<Result<T, RippleError>> for Event<T> {
    fn from(result: Result<T, RippleError>) -> Self {
        match result {
            Ok(v) => Event::Value(v),
            Err(e) => Event::Error(e),
        }
    }
}
