// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use crate::{
    poker::{Card, Chips, PlayerId},
    pot::Pot,
};

/// A table player state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player id.
    pub id: PlayerId,
    /// This player chips.
    pub stack: Chips,
    /// This player hole cards.
    pub hand: Vec<Card>,
    /// This player is active in the hand, false after a fold.
    pub is_active: bool,
    /// The chips this player committed in the current hand.
    pub chips_in_play: Chips,
}

impl Player {
    /// Creates a new player.
    pub fn new(id: PlayerId, stack: Chips) -> Self {
        Self {
            id,
            stack,
            hand: Vec::default(),
            is_active: true,
            chips_in_play: Chips::ZERO,
        }
    }

    /// Checks if the player has enough chips for the given amount.
    pub fn can_bet(&self, amount: Chips) -> bool {
        amount <= self.stack
    }

    /// Moves chips from the player stack to the pot.
    ///
    /// A bet larger than the stack puts the player all in. Returns the chips
    /// that have been committed.
    pub fn bet(&mut self, amount: Chips, pot: &mut Pot) -> Chips {
        let amount = amount.min(self.stack);
        self.stack -= amount;
        self.chips_in_play += amount;
        pot.add(amount);
        amount
    }

    /// Posts the ante.
    pub fn post_ante(&mut self, ante: Chips, pot: &mut Pot) -> Chips {
        self.bet(ante, pot)
    }

    /// Calls the outstanding amount.
    pub fn call(&mut self, amount: Chips, pot: &mut Pot) -> Chips {
        self.bet(amount, pot)
    }

    /// Checks, the player state doesn't change.
    pub fn check(&self) {}

    /// Folds the hand, the player won't act again in this hand.
    pub fn fold(&mut self) {
        self.is_active = false;
    }

    /// Checks if the player has no chips left.
    pub fn is_busted(&self) -> bool {
        self.stack.is_zero()
    }

    /// Checks if the player is in the hand with no chips behind.
    pub fn is_all_in(&self) -> bool {
        self.is_active && self.stack.is_zero()
    }

    /// Reset state for a new hand.
    pub fn reset_for_new_hand(&mut self) {
        self.hand.clear();
        self.is_active = true;
        self.chips_in_play = Chips::ZERO;
    }
}
