// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators for push-based reactive streams.
//!
//! Every operator is an extension trait over
//! [`Observable`](ripple_core::Observable), so pipelines are built by
//! chaining method calls; nothing runs until `subscribe` materializes the
//! chain. Events flow upstream-to-downstream, cancellation flows
//! downstream-to-upstream through the [`Subscription`](ripple_core::Subscription)
//! handed to the consumer.
//!
//! # Operator Selection Guide
//!
//! | Operator | Use when | Triggers on |
//! |----------|----------|-------------|
//! | [`map`](MapExt::map) / [`try_map`](MapExt::try_map) | Transform each value | Every source value |
//! | [`filter`](FilterExt::filter) | Drop values by predicate | Matching source values |
//! | [`tap`](TapExt::tap) | Observe without modifying | Every source value |
//! | [`start_with`](StartWithExt::start_with) | Seed an initial state | Subscription |
//! | [`share_replay`](ShareExt::share_replay) | One upstream, many consumers | Any upstream event |
//! | [`combine_latest`](CombineLatestExt::combine_latest) | Freshest value from all sources | Any source emits |
//! | [`zip`](ZipExt::zip) | Strict positional pairing | All sources have the n-th value |
//! | [`switch_map`](SwitchMapExt::switch_map) | Cancel-and-restart request chains | Every source value |
//!
//! # Example
//!
//! The classic form-validation pipeline: two inputs, derived validity,
//! combined button enablement, one shared upstream per input.
//!
//! ```
//! use ripple_core::Subject;
//! use ripple_stream::{CombineLatestExt, MapExt, ShareExt};
//! use std::sync::{Arc, Mutex};
//!
//! let username = Subject::<String>::new();
//! let password = Subject::<String>::new();
//!
//! let username_valid = username.observable().map(|u| u.len() >= 5).share_replay(1);
//! let password_valid = password.observable().map(|p| p.len() >= 5).share_replay(1);
//!
//! let both_valid = username_valid
//!     .combine_latest_with(&password_valid, |u, p| u && p)
//!     .share_replay(1);
//!
//! let enabled = Arc::new(Mutex::new(Vec::new()));
//! let log = Arc::clone(&enabled);
//! let _subscription = both_valid.subscribe_next(move |v| log.lock().unwrap().push(v));
//!
//! username.next("rippler".to_string());
//! password.next("hunter".to_string());
//! password.next("hi".to_string());
//! assert_eq!(*enabled.lock().unwrap(), vec![true, false]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod combine_latest;
pub mod filter;
pub mod map;
pub mod share;
pub mod start_with;
pub mod switch_map;
pub mod tap;
pub mod zip;

// Re-export commonly used types
pub use combine_latest::{combine_latest_all, CombineLatestExt};
pub use filter::FilterExt;
pub use map::MapExt;
pub use share::ShareExt;
pub use start_with::StartWithExt;
pub use switch_map::SwitchMapExt;
pub use tap::TapExt;
pub use zip::{zip_all, ZipExt};
