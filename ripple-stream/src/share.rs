// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Refcounted multicast with bounded replay.
//!
//! `share_replay` converts a cold observable into a multicast node shared
//! by all subscribers. The first subscriber triggers the single upstream
//! subscription; later subscribers attach to the same node without
//! re-running the producer. When the last subscriber leaves (or the
//! upstream terminates), the node disconnects and resets, so the next
//! subscriber triggers a fresh upstream run.

use ripple_core::mutex::Mutex;
use ripple_core::{Disposable, Event, EventObserver, Observable, Sink, Subscription};
use std::collections::VecDeque;
use std::sync::Arc;

/// Extension trait providing the `share` and `share_replay` operators.
pub trait ShareExt<T> {
    /// Multicasts the source through a refcounted node without replay.
    ///
    /// Equivalent to `share_replay(0)`.
    fn share(&self) -> Observable<T>;

    /// Multicasts the source through a refcounted node that replays the
    /// most recent `capacity` values to every new subscriber.
    ///
    /// # Behavior
    ///
    /// - The first subscriber connects the node to the source; subsequent
    ///   subscribers attach without re-running the producer.
    /// - Every upstream value is appended to a bounded replay buffer
    ///   (evicting the oldest on overflow) and broadcast to all attached
    ///   subscribers in subscription order.
    /// - A new subscriber first receives the replay buffer contents,
    ///   oldest-first, before any live events.
    /// - When the last subscriber disposes, the upstream subscription is
    ///   disposed and the node resets. A terminal event likewise resets the
    ///   node after reaching every subscriber.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::Subject;
    /// use ripple_stream::ShareExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let input = Subject::<i32>::new();
    /// let shared = input.observable().share_replay(1);
    ///
    /// let _first = shared.subscribe_next(|_| {});
    /// input.next(1);
    /// input.next(2);
    /// input.next(3);
    ///
    /// // The late joiner sees only the latest value before live events.
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let log = Arc::clone(&seen);
    /// let _second = shared.subscribe_next(move |v| log.lock().unwrap().push(v));
    /// assert_eq!(*seen.lock().unwrap(), vec![3]);
    /// ```
    fn share_replay(&self, capacity: usize) -> Observable<T>;
}

impl<T: Clone + Send + Sync + 'static> ShareExt<T> for Observable<T> {
    fn share(&self) -> Observable<T> {
        self.share_replay(0)
    }

    fn share_replay(&self, capacity: usize) -> Observable<T> {
        let node = Arc::new(Multicast {
            source: self.clone(),
            capacity,
            state: Mutex::new(MulticastState {
                entries: Vec::new(),
                replay: VecDeque::new(),
                upstream: None,
                connecting: false,
                next_id: 0,
            }),
        });
        Observable::new(move |sink| Multicast::attach(&node, sink))
    }
}

/// Fans a single upstream subscription out to many downstream observers.
struct Multicast<T> {
    source: Observable<T>,
    capacity: usize,
    state: Mutex<MulticastState<T>>,
}

struct MulticastState<T> {
    entries: Vec<Entry<T>>,
    replay: VecDeque<T>,
    upstream: Option<Subscription>,
    connecting: bool,
    next_id: u64,
}

/// One attached subscriber.
///
/// While a subscriber is still draining its replay, live events are parked
/// in `pending` instead of being delivered directly, so replay always
/// precedes live delivery without holding the node lock across user code.
struct Entry<T> {
    id: u64,
    sink: Sink<T>,
    replaying: bool,
    pending: VecDeque<Event<T>>,
}

impl<T: Clone + Send + Sync + 'static> Multicast<T> {
    fn attach(node: &Arc<Self>, sink: Sink<T>) {
        let (id, replay) = {
            let mut state = node.state.lock();
            let id = state.next_id;
            state.next_id += 1;
            let replay: Vec<T> = state.replay.iter().cloned().collect();
            state.entries.push(Entry {
                id,
                sink: sink.clone(),
                replaying: true,
                pending: VecDeque::new(),
            });
            (id, replay)
        };

        {
            let node = Arc::clone(node);
            sink.subscription()
                .add_teardown(move || Multicast::detach(&node, id));
        }

        for value in replay {
            sink.value(value);
        }
        Self::drain_pending(node, id, &sink);
        Self::connect_if_needed(node);
    }

    /// Delivers events that were broadcast while this subscriber was still
    /// replaying, then marks it live.
    fn drain_pending(node: &Arc<Self>, id: u64, sink: &Sink<T>) {
        loop {
            let next = {
                let mut state = node.state.lock();
                match state.entries.iter_mut().find(|entry| entry.id == id) {
                    None => None, // detached (disposed or terminated) meanwhile
                    Some(entry) => match entry.pending.pop_front() {
                        Some(event) => Some(event),
                        None => {
                            entry.replaying = false;
                            None
                        }
                    },
                }
            };
            match next {
                Some(event) => sink.event(event),
                None => break,
            }
        }
    }

    fn connect_if_needed(node: &Arc<Self>) {
        let should_connect = {
            let mut state = node.state.lock();
            if state.upstream.is_some() || state.connecting || state.entries.is_empty() {
                false
            } else {
                state.connecting = true;
                true
            }
        };
        if !should_connect {
            return;
        }

        trace!("multicast connecting to upstream");
        let forwarder = {
            let node = Arc::clone(node);
            EventObserver::new(move |event| Multicast::broadcast(&node, event))
        };
        let upstream = node.source.subscribe(forwarder);

        let keep = {
            let mut state = node.state.lock();
            state.connecting = false;
            // The source may have terminated synchronously during subscribe,
            // or every subscriber may have left meanwhile.
            if upstream.is_disposed() || state.entries.is_empty() {
                false
            } else {
                state.upstream = Some(upstream.clone());
                true
            }
        };
        if !keep {
            upstream.dispose();
        }
    }

    /// Downstream disposal: drop the entry and, at refcount zero, tear the
    /// upstream down and reset the node.
    fn detach(node: &Arc<Self>, id: u64) {
        let upstream = {
            let mut state = node.state.lock();
            state.entries.retain(|entry| entry.id != id);
            if state.entries.is_empty() {
                state.replay.clear();
                state.upstream.take()
            } else {
                None
            }
        };
        if let Some(upstream) = upstream {
            trace!("multicast last subscriber left, disconnecting upstream");
            upstream.dispose();
        }
    }

    fn broadcast(node: &Arc<Self>, event: Event<T>) {
        match event {
            Event::Value(value) => {
                let live: Vec<Sink<T>> = {
                    let mut state = node.state.lock();
                    if node.capacity > 0 {
                        if state.replay.len() == node.capacity {
                            state.replay.pop_front();
                        }
                        state.replay.push_back(value.clone());
                    }
                    state
                        .entries
                        .iter_mut()
                        .filter_map(|entry| {
                            if entry.replaying {
                                entry.pending.push_back(Event::Value(value.clone()));
                                None
                            } else {
                                Some(entry.sink.clone())
                            }
                        })
                        .collect()
                };
                // Snapshot iteration: a subscriber disposing itself (or a
                // sibling) from its callback cannot corrupt the list.
                for sink in live {
                    sink.value(value.clone());
                }
            }
            terminal => {
                let (live, upstream) = {
                    let mut state = node.state.lock();
                    state.replay.clear();
                    let entries = std::mem::take(&mut state.entries);
                    let mut live = Vec::new();
                    let mut still_replaying = Vec::new();
                    for mut entry in entries {
                        if entry.replaying {
                            entry.pending.push_back(terminal.clone());
                            still_replaying.push(entry);
                        } else {
                            live.push(entry.sink.clone());
                        }
                    }
                    state.entries = still_replaying;
                    (live, state.upstream.take())
                };
                if let Some(upstream) = upstream {
                    upstream.dispose();
                }
                for sink in live {
                    sink.event(terminal.clone());
                }
            }
        }
    }
}
