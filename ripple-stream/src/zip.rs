// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip operators: strict index-aligned pairing across sources.

use ripple_core::mutex::Mutex;
use ripple_core::{Disposable, Event, EventObserver, Observable};
use std::collections::VecDeque;
use std::sync::Arc;

/// Extension trait providing the `zip` operator.
pub trait ZipExt<T> {
    /// Pairs this source with `other` positionally: the n-th emitted pair
    /// always combines the n-th value of each source, never the most
    /// recent.
    ///
    /// # Behavior
    ///
    /// - Each source's values are buffered in a FIFO queue; a pair is
    ///   emitted exactly when both queues are non-empty, popping one value
    ///   from each.
    /// - The output completes as soon as any source has completed with an
    ///   empty queue — no further pair can ever be formed.
    /// - An error from either source terminates the output immediately,
    ///   discarding buffered values and disposing the other source.
    ///
    /// # Buffering
    ///
    /// A fast source blocks against a slow one, and its queue grows without
    /// bound if the peer never produces. The engine imposes no cap; bound
    /// the producers if mismatched rates are possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::Subject;
    /// use ripple_stream::ZipExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let numbers = Subject::<i32>::new();
    /// let labels = Subject::<&'static str>::new();
    /// let zipped = numbers.observable().zip(&labels.observable());
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let log = Arc::clone(&seen);
    /// let _subscription = zipped.subscribe_next(move |pair| log.lock().unwrap().push(pair));
    ///
    /// numbers.next(1);
    /// numbers.next(2);
    /// labels.next("x"); // pairs with 1, not 2
    /// assert_eq!(*seen.lock().unwrap(), vec![(1, "x")]);
    /// ```
    fn zip<U>(&self, other: &Observable<U>) -> Observable<(T, U)>
    where
        U: Send + Sync + 'static;
}

impl<T: Send + Sync + 'static> ZipExt<T> for Observable<T> {
    fn zip<U>(&self, other: &Observable<U>) -> Observable<(T, U)>
    where
        U: Send + Sync + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        Observable::new(move |sink| {
            let state = Arc::new(Mutex::new(ZipPairState::<T, U>::new()));

            let left_observer = {
                let state = Arc::clone(&state);
                let sink = sink.clone();
                EventObserver::new(move |event: Event<T>| match event {
                    Event::Value(value) => {
                        let (pair, done) = {
                            let mut state = state.lock();
                            state.left.push_back(value);
                            let pair = state.pop_pair();
                            (pair, state.exhausted())
                        };
                        if let Some(pair) = pair {
                            sink.value(pair);
                        }
                        if done {
                            sink.completed();
                        }
                    }
                    Event::Error(error) => sink.error(error),
                    Event::Completed => {
                        let done = {
                            let mut state = state.lock();
                            state.left_done = true;
                            state.exhausted()
                        };
                        if done {
                            sink.completed();
                        }
                    }
                })
            };
            let left_subscription = left.subscribe(left_observer);
            sink.subscription().add(left_subscription);

            if sink.subscription().is_disposed() {
                return;
            }

            let right_observer = {
                let state = Arc::clone(&state);
                let sink = sink.clone();
                EventObserver::new(move |event: Event<U>| match event {
                    Event::Value(value) => {
                        let (pair, done) = {
                            let mut state = state.lock();
                            state.right.push_back(value);
                            let pair = state.pop_pair();
                            (pair, state.exhausted())
                        };
                        if let Some(pair) = pair {
                            sink.value(pair);
                        }
                        if done {
                            sink.completed();
                        }
                    }
                    Event::Error(error) => sink.error(error),
                    Event::Completed => {
                        let done = {
                            let mut state = state.lock();
                            state.right_done = true;
                            state.exhausted()
                        };
                        if done {
                            sink.completed();
                        }
                    }
                })
            };
            let right_subscription = right.subscribe(right_observer);
            sink.subscription().add(right_subscription);
        })
    }
}

struct ZipPairState<A, B> {
    left: VecDeque<A>,
    right: VecDeque<B>,
    left_done: bool,
    right_done: bool,
}

impl<A, B> ZipPairState<A, B> {
    fn new() -> Self {
        Self {
            left: VecDeque::new(),
            right: VecDeque::new(),
            left_done: false,
            right_done: false,
        }
    }

    fn pop_pair(&mut self) -> Option<(A, B)> {
        if self.left.is_empty() || self.right.is_empty() {
            return None;
        }
        match (self.left.pop_front(), self.right.pop_front()) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    /// No further pair can ever be formed once a completed source's queue
    /// is empty.
    fn exhausted(&self) -> bool {
        (self.left_done && self.left.is_empty()) || (self.right_done && self.right.is_empty())
    }
}

/// Zips every source in `sources` positionally, emitting the vector of the
/// n-th values once every queue holds one.
///
/// The k-ary, homogeneous form of [`zip`](ZipExt::zip): output values keep
/// the order of `sources`. An empty source list completes immediately.
/// Buffering is unbounded, as for the binary form.
pub fn zip_all<T>(sources: Vec<Observable<T>>) -> Observable<Vec<T>>
where
    T: Send + Sync + 'static,
{
    Observable::new(move |sink| {
        if sources.is_empty() {
            sink.completed();
            return;
        }

        let state = Arc::new(Mutex::new(ZipIndexedState::<T>::new(sources.len())));
        for (index, source) in sources.iter().enumerate() {
            if sink.subscription().is_disposed() {
                return;
            }
            let observer = {
                let state = Arc::clone(&state);
                let sink = sink.clone();
                EventObserver::new(move |event: Event<T>| match event {
                    Event::Value(value) => {
                        let (tuple, done) = {
                            let mut state = state.lock();
                            state.queues[index].push_back(value);
                            let tuple = state.pop_tuple();
                            (tuple, state.exhausted())
                        };
                        if let Some(tuple) = tuple {
                            sink.value(tuple);
                        }
                        if done {
                            sink.completed();
                        }
                    }
                    Event::Error(error) => sink.error(error),
                    Event::Completed => {
                        let done = {
                            let mut state = state.lock();
                            state.done[index] = true;
                            state.exhausted()
                        };
                        if done {
                            sink.completed();
                        }
                    }
                })
            };
            let subscription = source.subscribe(observer);
            sink.subscription().add(subscription);
        }
    })
}

struct ZipIndexedState<T> {
    queues: Vec<VecDeque<T>>,
    done: Vec<bool>,
}

impl<T> ZipIndexedState<T> {
    fn new(sources: usize) -> Self {
        Self {
            queues: (0..sources).map(|_| VecDeque::new()).collect(),
            done: vec![false; sources],
        }
    }

    fn pop_tuple(&mut self) -> Option<Vec<T>> {
        if self.queues.iter().any(VecDeque::is_empty) {
            return None;
        }
        self.queues.iter_mut().map(VecDeque::pop_front).collect()
    }

    fn exhausted(&self) -> bool {
        self.queues
            .iter()
            .zip(&self.done)
            .any(|(queue, done)| *done && queue.is_empty())
    }
}
