// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Ripple reactive streaming library.
//!
//! Every failure travelling through a pipeline is represented by the single
//! root [`RippleError`] type, delivered to consumers as a terminal
//! [`Event::Error`](crate::Event::Error). Producer-specific error types are
//! converted at the adapter boundary via [`IntoRippleError`].
//!
//! # Examples
//!
//! ```
//! use ripple_core::{Result, RippleError};
//!
//! fn fetch_token() -> Result<String> {
//!     Err(RippleError::producer("connection refused"))
//! }
//! ```

/// Root error type for all Ripple pipelines.
///
/// The taxonomy distinguishes failures raised by an original source
/// (`Producer`) from failures of a user-supplied transform function
/// (`OperatorFault`). Both propagate downstream identically, as a single
/// terminal `Error` event.
#[derive(Debug, thiserror::Error)]
pub enum RippleError {
    /// An original source failed (network error, closed device, ...).
    #[error("Producer error: {context}")]
    Producer {
        /// Description of what went wrong at the source
        context: String,
    },

    /// A user-supplied transform function failed.
    ///
    /// Emitted by fallible operators such as `try_map` when the supplied
    /// closure returns an error.
    #[error("Operator fault: {context}")]
    OperatorFault {
        /// Description of the failing transform
        context: String,
    },

    /// Custom error from user code.
    ///
    /// Wraps arbitrary errors produced at the adapter boundary so they can
    /// be propagated through a pipeline without losing their source.
    #[error("User error: {0}")]
    User(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RippleError {
    /// Create a producer error with the given context.
    pub fn producer(context: impl Into<String>) -> Self {
        Self::Producer {
            context: context.into(),
        }
    }

    /// Create an operator fault with the given context.
    pub fn operator_fault(context: impl Into<String>) -> Self {
        Self::OperatorFault {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::User(Box::new(error))
    }

    /// Returns `true` if this error was raised by an original source.
    #[must_use]
    pub const fn is_producer(&self) -> bool {
        matches!(self, Self::Producer { .. })
    }

    /// Returns `true` if this error was raised by a transform function.
    #[must_use]
    pub const fn is_operator_fault(&self) -> bool {
        matches!(self, Self::OperatorFault { .. })
    }
}

/// Specialized `Result` type for Ripple operations.
pub type Result<T> = std::result::Result<T, RippleError>;

/// Extension trait for converting errors into [`RippleError`].
///
/// Automatically implemented for all types implementing
/// `std::error::Error + Send + Sync + 'static`, so producer adapters can
/// standardize on the pipeline's single error type at the boundary.
pub trait IntoRippleError {
    /// Convert this error into a [`RippleError`].
    fn into_ripple(self) -> RippleError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRippleError for E {
    fn into_ripple(self) -> RippleError {
        RippleError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s in a fluent style.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    /// Returns `Err(RippleError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation).
    ///
    /// # Errors
    /// Returns `Err(RippleError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RippleError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let context = context.into();
            match e.into() {
                RippleError::User(inner) => RippleError::Producer {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let context = f();
            match e.into() {
                RippleError::User(inner) => RippleError::Producer {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }
}

impl Clone for RippleError {
    fn clone(&self) -> Self {
        match self {
            Self::Producer { context } => Self::Producer {
                context: context.clone(),
            },
            Self::OperatorFault { context } => Self::OperatorFault {
                context: context.clone(),
            },
            // The boxed error cannot be cloned; preserve its message instead
            Self::User(e) => Self::Producer {
                context: format!("User error: {e}"),
            },
        }
    }
}
