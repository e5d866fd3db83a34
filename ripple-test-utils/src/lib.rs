// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and infrastructure for the ripple workspace.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod disposal_counter;
pub mod error_injection;
pub mod instrumented_source;
pub mod recording_observer;
pub mod test_data;

pub use self::disposal_counter::DisposalCounter;
pub use self::error_injection::{inject_error_at, values_then_error};
pub use self::instrumented_source::InstrumentedSource;
pub use self::recording_observer::{EventLog, RecordingObserver};
