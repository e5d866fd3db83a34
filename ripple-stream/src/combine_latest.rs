// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combine-latest operators: emit whenever any source emits, pairing the
//! freshest value from every source.

use crate::map::MapExt;
use ripple_core::mutex::Mutex;
use ripple_core::{Disposable, Event, EventObserver, Observable};
use std::sync::Arc;

/// Extension trait providing the `combine_latest` operators.
pub trait CombineLatestExt<T> {
    /// Combines this source with `other`, emitting a pair every time either
    /// source emits, once both have emitted at least once.
    ///
    /// # Behavior
    ///
    /// - No output until every source has produced a value; from then on,
    ///   every source value re-emits the pair with only the changed
    ///   component replaced.
    /// - An error from either source terminates the output immediately and
    ///   disposes the other source's subscription.
    /// - A source completing before its first value makes the combined
    ///   output complete immediately — it can never emit.
    /// - Once both sources complete (each having emitted), the output
    ///   completes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::Subject;
    /// use ripple_stream::CombineLatestExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let a = Subject::<i32>::new();
    /// let b = Subject::<i32>::new();
    /// let pairs = a.observable().combine_latest(&b.observable());
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let log = Arc::clone(&seen);
    /// let _subscription = pairs.subscribe_next(move |pair| log.lock().unwrap().push(pair));
    ///
    /// a.next(1); // nothing yet: b has not emitted
    /// b.next(10);
    /// a.next(2);
    /// assert_eq!(*seen.lock().unwrap(), vec![(1, 10), (2, 10)]);
    /// ```
    fn combine_latest<U>(&self, other: &Observable<U>) -> Observable<(T, U)>
    where
        U: Clone + Send + Sync + 'static;

    /// Combines this source with `other` through `f`.
    ///
    /// Shorthand for `combine_latest` followed by `map`.
    fn combine_latest_with<U, R, F>(&self, other: &Observable<U>, f: F) -> Observable<R>
    where
        U: Clone + Send + Sync + 'static,
        R: Send + 'static,
        F: FnMut(T, U) -> R + Clone + Send + Sync + 'static;
}

impl<T: Clone + Send + Sync + 'static> CombineLatestExt<T> for Observable<T> {
    fn combine_latest<U>(&self, other: &Observable<U>) -> Observable<(T, U)>
    where
        U: Clone + Send + Sync + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        Observable::new(move |sink| {
            let state = Arc::new(Mutex::new(PairState::<T, U>::new()));

            let left_observer = {
                let state = Arc::clone(&state);
                let sink = sink.clone();
                EventObserver::new(move |event: Event<T>| match event {
                    Event::Value(value) => {
                        let pair = {
                            let mut state = state.lock();
                            state.left = Some(value);
                            state.current_pair()
                        };
                        if let Some(pair) = pair {
                            sink.value(pair);
                        }
                    }
                    Event::Error(error) => sink.error(error),
                    Event::Completed => {
                        let done = {
                            let mut state = state.lock();
                            state.left_done = true;
                            state.output_complete()
                        };
                        if done {
                            sink.completed();
                        }
                    }
                })
            };
            let left_subscription = left.subscribe(left_observer);
            sink.subscription().add(left_subscription);

            // The left source may have terminated the output synchronously.
            if sink.subscription().is_disposed() {
                return;
            }

            let right_observer = {
                let state = Arc::clone(&state);
                let sink = sink.clone();
                EventObserver::new(move |event: Event<U>| match event {
                    Event::Value(value) => {
                        let pair = {
                            let mut state = state.lock();
                            state.right = Some(value);
                            state.current_pair()
                        };
                        if let Some(pair) = pair {
                            sink.value(pair);
                        }
                    }
                    Event::Error(error) => sink.error(error),
                    Event::Completed => {
                        let done = {
                            let mut state = state.lock();
                            state.right_done = true;
                            state.output_complete()
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

    fn combine_latest_with<U, R, F>(&self, other: &Observable<U>, mut f: F) -> Observable<R>
    where
        U: Clone + Send + Sync + 'static,
        R: Send + 'static,
        F: FnMut(T, U) -> R + Clone + Send + Sync + 'static,
    {
        self.combine_latest(other).map(move |(a, b)| f(a, b))
    }
}

struct PairState<A, B> {
    left: Option<A>,
    right: Option<B>,
    left_done: bool,
    right_done: bool,
}

impl<A: Clone, B: Clone> PairState<A, B> {
    fn new() -> Self {
        Self {
            left: None,
            right: None,
            left_done: false,
            right_done: false,
        }
    }

    fn current_pair(&self) -> Option<(A, B)> {
        match (&self.left, &self.right) {
            (Some(a), Some(b)) => Some((a.clone(), b.clone())),
            _ => None,
        }
    }

    /// The output completes when no further pair can ever be emitted, or
    /// when every source has finished.
    fn output_complete(&self) -> bool {
        let never_emits = (self.left_done && self.left.is_none())
            || (self.right_done && self.right.is_none());
        let all_done = self.left_done && self.right_done;
        never_emits || all_done
    }
}

/// Combines every source in `sources`, emitting the vector of latest values
/// whenever any source emits, once each has emitted at least once.
///
/// The k-ary, homogeneous form of
/// [`combine_latest`](CombineLatestExt::combine_latest): output values keep
/// the order of `sources`. An empty source list completes immediately.
pub fn combine_latest_all<T>(sources: Vec<Observable<T>>) -> Observable<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    Observable::new(move |sink| {
        if sources.is_empty() {
            sink.completed();
            return;
        }

        let state = Arc::new(Mutex::new(IndexedState::<T>::new(sources.len())));
        for (index, source) in sources.iter().enumerate() {
            if sink.subscription().is_disposed() {
                return;
            }
            let observer = {
                let state = Arc::clone(&state);
                let sink = sink.clone();
                EventObserver::new(move |event: Event<T>| match event {
                    Event::Value(value) => {
                        let snapshot = {
                            let mut state = state.lock();
                            state.insert(index, value);
                            state.snapshot()
                        };
                        if let Some(values) = snapshot {
                            sink.value(values);
                        }
                    }
                    Event::Error(error) => sink.error(error),
                    Event::Completed => {
                        let done = {
                            let mut state = state.lock();
                            state.complete(index)
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

struct IndexedState<T> {
    values: Vec<Option<T>>,
    done: Vec<bool>,
    ready: usize,
}

impl<T: Clone> IndexedState<T> {
    fn new(sources: usize) -> Self {
        Self {
            values: vec![None; sources],
            done: vec![false; sources],
            ready: 0,
        }
    }

    fn insert(&mut self, index: usize, value: T) {
        if self.values[index].is_none() {
            self.ready += 1;
        }
        self.values[index] = Some(value);
    }

    fn snapshot(&self) -> Option<Vec<T>> {
        if self.ready < self.values.len() {
            return None;
        }
        self.values.iter().cloned().collect()
    }

    fn complete(&mut self, index: usize) -> bool {
        self.done[index] = true;
        let never_emits = self.values[index].is_none();
        let all_done = self.done.iter().all(|done| *done);
        never_emits || all_done
    }
}
