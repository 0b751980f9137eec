// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Rhode Island Hold'em game core.
//!
//! Each player gets one hole card, two board cards are revealed one per
//! street and the best three card hand wins. There are three fixed limit
//! betting streets with an ante and up to three raises per street.
//!
//! The core doesn't log or store anything, a [Game] reports every change to
//! an [Observer] and asks a [Strategy] for the players actions:
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use rhode_core::{Chips, Game, GameConfig, HandLimits, PassiveStrategy};
//!
//! let mut game = Game::new(&GameConfig::default(), StdRng::seed_from_u64(1)).unwrap();
//! let result = game
//!     .play_hand(&HandLimits::default(), &mut PassiveStrategy, &mut ())
//!     .unwrap();
//!
//! assert!(result.showdown);
//! assert_eq!(result.pot, Chips::new(2));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod betting;
pub mod dealer;
pub mod error;
pub mod event;
pub mod game;
pub mod game_state;
pub mod player;
pub mod poker;
pub mod pot;
pub mod strategy;
pub mod table;

pub use betting::{ActionRecord, BettingRound, RoundStatus, Street, StreetEnd};
pub use dealer::{Dealer, Winners};
pub use error::GameError;
pub use event::{GameEvent, Observer};
pub use game::{Game, GameConfig, HandLimits, HandResult};
pub use game_state::{GameState, PlayerState, Stage};
pub use player::Player;
pub use poker::{Card, Chips, Deck, HandRank, HandValue, PlayerAction, PlayerId, Rank, Suit};
pub use pot::{Payoff, Pot};
pub use strategy::{ActionRequest, PassiveStrategy, RandomStrategy, Strategy};
pub use table::Table;
