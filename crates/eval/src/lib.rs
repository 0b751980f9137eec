// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Rhode Hold'em hand ranker.
//!
//! A showdown hand in this variant is made of one hole card and two board
//! cards, so the ranker uses a reduced set of categories, from the strongest:
//! straight flush, three of a kind, straight, flush, pair and high card.
//!
//! To rank hands use [HandValue::eval], values compare so that a stronger
//! hand is greater:
//!
//! ```
//! # use rhode_eval::*;
//! let cards = |s: &str| s.split(' ').map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
//! let trips = HandValue::eval(&cards("7C 7D 7H"));
//! let straight = HandValue::eval(&cards("AC 2D 3H"));
//! assert_eq!(trips.rank(), HandRank::ThreeOfAKind);
//! assert_eq!(straight.rank(), HandRank::Straight);
//! assert!(trips > straight);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use rhode_cards::{Card, Deck, Rank, Suit};
