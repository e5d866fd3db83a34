// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Releasable resources.

use crate::mutex::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A capability representing work that must be released exactly once.
///
/// Disposal is cooperative: it guarantees that no further event delivery is
/// observed downstream, not that an in-flight producer is preempted. All
/// implementations are idempotent.
pub trait Disposable {
    /// Release the underlying resource. Idempotent.
    fn dispose(&self);

    /// Returns `true` once `dispose` has been called.
    fn is_disposed(&self) -> bool;
}

/// A [`Disposable`] that runs a teardown callback exactly once.
///
/// # Examples
///
/// ```
/// use ripple_core::{Disposable, Disposal};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let disposal = Disposal::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// disposal.dispose();
/// disposal.dispose();
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct Disposal {
    inner: Arc<DisposalInner>,
}

struct DisposalInner {
    disposed: AtomicBool,
    callback: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Disposal {
    /// Creates a disposal that runs `callback` on the first `dispose` call.
    pub fn new(callback: impl FnOnce() + Send + 'static) -> Self {
        Self {
            inner: Arc::new(DisposalInner {
                disposed: AtomicBool::new(false),
                callback: Mutex::new(Some(Box::new(callback))),
            }),
        }
    }

    /// Creates an already-released disposal with no teardown work.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(DisposalInner {
                disposed: AtomicBool::new(true),
                callback: Mutex::new(None),
            }),
        }
    }
}

impl Disposable for Disposal {
    fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        let callback = self.inner.callback.lock().take();
        if let Some(callback) = callback {
            callback();
        }
    }

    fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for Disposal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposal")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
