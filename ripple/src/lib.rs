// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Ripple
//!
//! A push-based reactive stream engine: independent asynchronous producers
//! combined, transformed and consumed with deterministic ordering and
//! leak-free cancellation.
//!
//! ## Overview
//!
//! A pipeline is a chain of [`Observable`] transformations; building it
//! does no work. Calling `subscribe` materializes the chain down to the
//! original producer, events then flow upstream-to-downstream on the
//! producer's own context, and disposing the returned [`Subscription`]
//! (directly or through a [`DisposeBag`]) tears the whole chain down.
//!
//! ## Quick Start
//!
//! ```
//! use ripple_rx::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! // A hot input, as a UI adapter would drive it.
//! let queries = Subject::<String>::new();
//!
//! let bag = DisposeBag::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let log = Arc::clone(&seen);
//!
//! bag.insert(
//!     queries
//!         .observable()
//!         .filter(|q: &String| !q.is_empty())
//!         .map(|q| q.to_uppercase())
//!         .subscribe_next(move |q| log.lock().unwrap().push(q)),
//! );
//!
//! queries.next("".to_string());
//! queries.next("ripple".to_string());
//! assert_eq!(*seen.lock().unwrap(), vec!["RIPPLE".to_string()]);
//! ```

// Re-export core types
pub use ripple_core::{
    Disposable, Disposal, DisposeBag, Event, EventObserver, IntoRippleError, Observable, Observer,
    Result, ResultExt, RippleError, Sink, Subject, Subscription,
};

// Re-export the operator extension traits
pub use ripple_stream::{
    combine_latest_all, zip_all, CombineLatestExt, FilterExt, MapExt, ShareExt, StartWithExt,
    SwitchMapExt, TapExt, ZipExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use ripple_core::{
        Disposable, DisposeBag, Event, Observable, Observer, RippleError, Subject, Subscription,
    };
    pub use ripple_stream::{
        combine_latest_all, zip_all, CombineLatestExt, FilterExt, MapExt, ShareExt, StartWithExt,
        SwitchMapExt, TapExt, ZipExt,
    };
}
