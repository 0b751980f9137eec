// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Rhode Hold'em cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use rhode_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! and a [Deck] type that deals cards from a shuffled sequence keeping track
//! of how many cards have been used:
//!
//! ```
//! # use rhode_cards::Deck;
//! # use rand::{rngs::StdRng, SeedableRng};
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//! let hand = deck.deal(3).unwrap();
//! assert_eq!(hand.len(), 3);
//! assert_eq!(deck.cards_left(), 49);
//!
//! // Dealing more cards than are left fails and leaves the deck untouched.
//! assert!(deck.deal(50).is_err());
//! assert_eq!(deck.cards_left(), 49);
//! ```
//!
//! To count all 3-cards hands:
//!
//! ```
//! # use rhode_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(3, |hand| {
//!     assert_eq!(hand.len(), 3);
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, DeckExhausted, ParseCardError, Rank, Suit};
