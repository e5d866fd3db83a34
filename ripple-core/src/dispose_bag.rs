// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Batch release of disposables.

use crate::disposable::Disposable;
use crate::mutex::Mutex;

/// A container that aggregates [`Disposable`]s and releases them together.
///
/// A bag is typically owned by the consumer (a screen, a session) and
/// dropped with it, transitively disposing everything it holds. Inserting
/// into an already-disposed bag disposes the new item immediately rather
/// than silently retaining it.
///
/// # Examples
///
/// ```
/// use ripple_core::{DisposeBag, Observable};
///
/// let bag = DisposeBag::new();
/// let source = Observable::just(1);
/// bag.insert(source.subscribe_next(|v| println!("{v}")));
/// drop(bag); // everything inside is released
/// ```
pub struct DisposeBag {
    state: Mutex<BagState>,
}

struct BagState {
    disposed: bool,
    items: Vec<Box<dyn Disposable + Send>>,
}

impl DisposeBag {
    /// Creates an empty, active bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BagState {
                disposed: false,
                items: Vec::new(),
            }),
        }
    }

    /// Hands `disposable` to the bag.
    ///
    /// If the bag has already been disposed, `disposable` is disposed
    /// immediately.
    pub fn insert(&self, disposable: impl Disposable + Send + 'static) {
        {
            let mut state = self.state.lock();
            if !state.disposed {
                state.items.push(Box::new(disposable));
                return;
            }
        }
        disposable.dispose();
    }

    /// Number of disposables currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    /// Returns `true` if the bag holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }
}

impl Disposable for DisposeBag {
    fn dispose(&self) {
        let items = {
            let mut state = self.state.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            std::mem::take(&mut state.items)
        };
        trace!("dispose bag releasing {} items", items.len());
        for item in items {
            item.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }
}

impl Default for DisposeBag {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.dispose();
    }
}
