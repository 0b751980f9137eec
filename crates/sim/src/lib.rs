// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Rhode Hold'em simulations.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod observer;
pub mod session;
pub mod stats;

pub use observer::LogObserver;
pub use session::{SessionSummary, SimConfig, play, replay};
pub use stats::{Stats, run_stats};
