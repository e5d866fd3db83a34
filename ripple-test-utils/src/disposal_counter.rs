// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Disposal-counting test double.

use ripple_core::Disposal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many of the disposables it hands out have been disposed.
///
/// Used to verify teardown behavior, e.g. that an error in one
/// `combine_latest` source disposes every sibling subscription.
#[derive(Clone, Default)]
pub struct DisposalCounter {
    count: Arc<AtomicUsize>,
}

impl DisposalCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a disposable that bumps this counter exactly once when
    /// disposed.
    pub fn disposable(&self) -> Disposal {
        let count = Arc::clone(&self.count);
        Disposal::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    /// Number of handed-out disposables that have been disposed so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
