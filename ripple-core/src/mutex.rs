// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronization primitive used by the engine's shared nodes.
//!
//! All mutable state that more than one call site can reach (subject and
//! multicast subscriber lists, operator state) sits behind this mutex.
//! User callbacks are never invoked while one of these locks is held.

pub use parking_lot::{Mutex, MutexGuard};
