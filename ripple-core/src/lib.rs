// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for push-based reactive streams.
//!
//! This crate holds the engine's building blocks: [`Event`], [`Observer`],
//! [`Observable`], [`Subscription`], [`Sink`], the disposal types
//! ([`Disposable`], [`Disposal`], [`DisposeBag`]) and the hot [`Subject`]
//! entry point. Operators live in `ripple-stream`.
//!
//! # Delivery model
//!
//! Event delivery is synchronous and push-based: a producer calls straight
//! into the observer on whatever context the producer runs on. The engine
//! spawns no threads and runs no event loop; waiting for asynchronous
//! sources happens entirely inside external producers. For a single
//! subscription, events arrive strictly in the order the upstream produced
//! them, and nothing arrives after a terminal event or after disposal.
//!
//! # Cancellation
//!
//! Cancellation is cooperative and flows downstream-to-upstream: disposing
//! a [`Subscription`] runs every teardown registered along the pipeline.
//! Disposal guarantees no further delivery, not preemption of an in-flight
//! producer.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod disposable;
pub mod dispose_bag;
pub mod error;
pub mod event;
pub mod mutex;
pub mod observable;
pub mod observer;
pub mod sink;
pub mod subject;
pub mod subscription;

pub use self::disposable::{Disposable, Disposal};
pub use self::dispose_bag::DisposeBag;
pub use self::error::{IntoRippleError, Result, ResultExt, RippleError};
pub use self::event::Event;
pub use self::observable::Observable;
pub use self::observer::{EventObserver, Observer};
pub use self::sink::Sink;
pub use self::subject::Subject;
pub use self::subscription::Subscription;
