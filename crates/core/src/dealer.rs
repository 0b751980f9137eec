// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! The dealer runs the deck, the board, the pot and the button.
use rand::rngs::StdRng;

use crate::{
    error::GameError,
    poker::{Card, Chips, Deck, HandValue},
    pot::Pot,
    table::Table,
};

/// The winners of a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winners {
    /// The winning seats, starting from the seat after the button.
    pub seats: Vec<usize>,
    /// The winning hand value, `None` if nobody was left in the hand.
    pub value: Option<HandValue>,
}

/// The table dealer.
#[derive(Debug)]
pub struct Dealer {
    deck: Deck,
    pot: Pot,
    button: usize,
    current_bet: Chips,
    board: Vec<Card>,
    rng: StdRng,
}

impl Dealer {
    /// Creates a dealer that shuffles with the given rng.
    pub fn new(mut rng: StdRng) -> Self {
        Self {
            deck: Deck::new_and_shuffled(&mut rng),
            pot: Pot::default(),
            button: 0,
            current_bet: Chips::ZERO,
            board: Vec::with_capacity(2),
            rng,
        }
    }

    /// Shuffles the deck and clears the board, the pot and the bet.
    pub fn reset_for_new_hand(&mut self) {
        self.deck.shuffle(&mut self.rng);
        self.board.clear();
        self.pot.reset();
        self.current_bet = Chips::ZERO;
    }

    /// Deals one card to each seated player.
    ///
    /// Fails without dealing any card if the deck doesn't have enough cards
    /// for all players.
    pub fn deal_hand(&mut self, table: &mut Table) -> Result<(), GameError> {
        let cards = self.deck.deal(table.count_players())?;
        for ((_, player), card) in table.players_mut().zip(cards) {
            player.hand.push(card);
        }

        Ok(())
    }

    /// Moves the button to the next occupied seat and returns it.
    pub fn move_button(&mut self, table: &Table) -> Result<usize, GameError> {
        self.button = table.next_occupied(self.button).ok_or(GameError::EmptyTable)?;
        Ok(self.button)
    }

    /// Deals the flop card to the board.
    pub fn deal_flop(&mut self) -> Result<Card, GameError> {
        self.deal_board_card()
    }

    /// Deals the turn card to the board.
    pub fn deal_turn(&mut self) -> Result<Card, GameError> {
        self.deal_board_card()
    }

    fn deal_board_card(&mut self) -> Result<Card, GameError> {
        let card = self.deck.deal(1)?[0];
        self.board.push(card);
        Ok(card)
    }

    /// Finds the active players with the best hand.
    ///
    /// Players are checked starting from the seat after the button so ties
    /// are listed in the order the odd chips are assigned.
    pub fn determine_winner(&self, table: &Table) -> Winners {
        let mut winners = Winners {
            seats: Vec::default(),
            value: None,
        };

        let len = table.len();
        let order = (1..=len).map(|offset| (self.button + offset) % len);
        for seat in order {
            let Some(player) = table.player(seat).filter(|p| p.is_active) else {
                continue;
            };

            let mut cards = player.hand.clone();
            cards.extend_from_slice(&self.board);
            if cards.is_empty() {
                continue;
            }

            let value = HandValue::eval(&cards);
            match &winners.value {
                Some(best) if value < *best => {}
                Some(best) if value == *best => winners.seats.push(seat),
                _ => {
                    winners.seats = vec![seat];
                    winners.value = Some(value);
                }
            }
        }

        winners
    }

    /// The button seat.
    pub fn button(&self) -> usize {
        self.button
    }

    /// The bet to match in the current street.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// Sets the bet to match in the current street.
    pub fn set_current_bet(&mut self, bet: Chips) {
        self.current_bet = bet;
    }

    /// The pot.
    pub fn pot(&self) -> &Pot {
        &self.pot
    }

    /// The pot.
    pub fn pot_mut(&mut self) -> &mut Pot {
        &mut self.pot
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}
