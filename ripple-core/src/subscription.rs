// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The live link between an observable and an observer.

use crate::disposable::Disposable;
use crate::mutex::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Teardown = Box<dyn FnOnce() + Send>;

/// The live, disposable link created by every `subscribe` call.
///
/// A subscription owns the chain of upstream resources its pipeline created:
/// each operator registers the upstream subscriptions and producer teardowns
/// it holds, and disposing the subscription releases them all. Cancellation
/// therefore flows downstream-to-upstream through a single `dispose` call.
///
/// Disposal is idempotent, and a teardown registered after disposal runs
/// immediately instead of being silently dropped.
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<SubscriptionInner>,
}

struct SubscriptionInner {
    disposed: AtomicBool,
    teardowns: Mutex<Vec<Teardown>>,
}

impl Subscription {
    /// Creates a new, active subscription with no registered teardowns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SubscriptionInner {
                disposed: AtomicBool::new(false),
                teardowns: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Registers a teardown callback to run when this subscription is
    /// disposed.
    ///
    /// If the subscription is already disposed, `teardown` runs right away.
    pub fn add_teardown(&self, teardown: impl FnOnce() + Send + 'static) {
        if self.is_disposed() {
            teardown();
            return;
        }
        {
            let mut teardowns = self.inner.teardowns.lock();
            // Disposal may have raced us between the check and the lock
            if !self.inner.disposed.load(Ordering::Acquire) {
                teardowns.push(Box::new(teardown));
                return;
            }
        }
        teardown();
    }

    /// Ties the lifetime of `disposable` to this subscription.
    ///
    /// Operators use this to chain upstream subscriptions into the one
    /// handed to the consumer.
    pub fn add(&self, disposable: impl Disposable + Send + 'static) {
        self.add_teardown(move || disposable.dispose());
    }
}

impl Disposable for Subscription {
    fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        trace!("subscription disposed, running teardowns");
        let teardowns = std::mem::take(&mut *self.inner.teardowns.lock());
        for teardown in teardowns {
            teardown();
        }
    }

    fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
