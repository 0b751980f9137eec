// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use thiserror::Error;

use crate::poker::{DeckExhausted, PlayerAction, PlayerId};

/// Errors raised by the game core.
///
/// All errors are local to a hand, a hand that fails is rolled back and the
/// next hand starts from a clean state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A chips amount is negative.
    #[error("invalid chips amount {0}")]
    InvalidAmount(i64),

    /// A seat index outside the table.
    #[error("seat {seat} is out of range for a table with {seats} seats")]
    InvalidSeat {
        /// The requested seat.
        seat: usize,
        /// The number of seats at the table.
        seats: usize,
    },

    /// The seat has already a player.
    #[error("seat {0} is already taken")]
    SeatTaken(usize),

    /// The player is already sitting at the table.
    #[error("player {0} is already seated")]
    DuplicatePlayer(PlayerId),

    /// There are no players at the table.
    #[error("no players at the table")]
    EmptyTable,

    /// A hand needs at least two players with chips.
    #[error("not enough players to play a hand")]
    NotEnoughPlayers,

    /// The deck ran out of cards.
    #[error(transparent)]
    Deck(#[from] DeckExhausted),

    /// An action that is not in the legal set for the seat.
    #[error("action {action} is not legal for seat {seat}")]
    IllegalAction {
        /// The seat that tried to act.
        seat: usize,
        /// The illegal action.
        action: PlayerAction,
    },

    /// An action from a seat that is not the next to act.
    #[error("seat {0} is not the seat to act")]
    NotPlayersTurn(usize),

    /// Nobody is left in the hand to award the pot to.
    #[error("no active players left to award the pot")]
    NoActivePlayers,

    /// A configuration value is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
