// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Switch-latest projection: map each value to an inner observable,
//! cancelling the previous inner stream whenever a new one starts.

use ripple_core::mutex::Mutex;
use ripple_core::{Disposable, Event, EventObserver, Observable, Subscription};
use std::sync::Arc;

/// Extension trait providing the `switch_map` operator.
pub trait SwitchMapExt<T> {
    /// Projects each source value through `f` into an inner observable and
    /// relays the inner values, keeping at most one inner stream live.
    ///
    /// # Behavior
    ///
    /// - Every source value disposes the currently active inner
    ///   subscription (if any) before subscribing to the new inner
    ///   observable — values from a superseded inner stream never reach
    ///   the consumer.
    /// - An inner completion is absorbed: it only means that inner stream
    ///   is exhausted. The output completes once the source has completed
    ///   and no inner stream is pending.
    /// - An error from the source or from the live inner stream terminates
    ///   the output immediately and disposes whatever is still running.
    ///
    /// Because no two inner streams are ever live at once, `switch_map` is
    /// the right tool for cancel-and-restart request chains: re-issue a
    /// dependent request whenever its trigger value changes, and stale
    /// responses are dropped automatically.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::{Observable, Subject};
    /// use ripple_stream::SwitchMapExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let queries = Subject::<i32>::new();
    /// let results = queries
    ///     .observable()
    ///     .switch_map(|q| Observable::just(q * 10));
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let log = Arc::clone(&seen);
    /// let _subscription = results.subscribe_next(move |v| log.lock().unwrap().push(v));
    ///
    /// queries.next(1);
    /// queries.next(2);
    /// assert_eq!(*seen.lock().unwrap(), vec![10, 20]);
    /// ```
    fn switch_map<U, F>(&self, f: F) -> Observable<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> Observable<U> + Clone + Send + Sync + 'static;
}

impl<T: Send + 'static> SwitchMapExt<T> for Observable<T> {
    fn switch_map<U, F>(&self, f: F) -> Observable<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> Observable<U> + Clone + Send + Sync + 'static,
    {
        let source = self.clone();
        Observable::new(move |sink| {
            let state = Arc::new(Mutex::new(SwitchState::new()));

            // Whatever inner stream is live when the consumer cancels must
            // be released with it.
            {
                let state = Arc::clone(&state);
                sink.subscription().add_teardown(move || {
                    let inner = state.lock().inner.take();
                    if let Some(inner) = inner {
                        inner.dispose();
                    }
                });
            }

            let mut f = f.clone();
            let outer_observer = {
                let state = Arc::clone(&state);
                let sink = sink.clone();
                EventObserver::new(move |event: Event<T>| match event {
                    Event::Value(value) => {
                        let inner_source = f(value);

                        let (previous, generation) = {
                            let mut state = state.lock();
                            state.generation += 1;
                            state.inner_active = true;
                            (state.inner.take(), state.generation)
                        };
                        if let Some(previous) = previous {
                            previous.dispose();
                        }
                        trace!("switching to inner stream, generation {generation}");

                        let inner_observer = {
                            let state = Arc::clone(&state);
                            let sink = sink.clone();
                            EventObserver::new(move |event: Event<U>| match event {
                                Event::Value(value) => {
                                    let live = state.lock().generation == generation;
                                    if live {
                                        sink.value(value);
                                    }
                                }
                                Event::Error(error) => {
                                    let live = state.lock().generation == generation;
                                    if live {
                                        sink.error(error);
                                    }
                                }
                                Event::Completed => {
                                    let complete = {
                                        let mut state = state.lock();
                                        if state.generation == generation {
                                            state.inner_active = false;
                                            state.inner = None;
                                            state.outer_done
                                        } else {
                                            false
                                        }
                                    };
                                    if complete {
                                        sink.completed();
                                    }
                                }
                            })
                        };
                        let inner_subscription = inner_source.subscribe(inner_observer);

                        let superseded = {
                            let mut state = state.lock();
                            if state.generation == generation && state.inner_active {
                                state.inner = Some(inner_subscription.clone());
                                false
                            } else {
                                true
                            }
                        };
                        if superseded {
                            inner_subscription.dispose();
                        }
                    }
                    Event::Error(error) => sink.error(error),
                    Event::Completed => {
                        let complete = {
                            let mut state = state.lock();
                            state.outer_done = true;
                            !state.inner_active
                        };
                        if complete {
                            sink.completed();
                        }
                    }
                })
            };
            let outer_subscription = source.subscribe(outer_observer);
            sink.subscription().add(outer_subscription);
        })
    }
}

struct SwitchState {
    inner: Option<Subscription>,
    generation: u64,
    inner_active: bool,
    outer_done: bool,
}

impl SwitchState {
    fn new() -> Self {
        Self {
            inner: None,
            generation: 0,
            inner_active: false,
            outer_done: false,
        }
    }
}
