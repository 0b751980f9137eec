// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Rhode Hold'em hand history.
//!
//! A [HistoryLogger] observes a game and builds a tree of table snapshots
//! with one branch per hand, a [HistoryStore] appends trees to a file and
//! loads them back.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod logger;
mod node;
mod store;

pub use logger::HistoryLogger;
pub use node::{HistoryNode, Iter};
pub use store::HistoryStore;
