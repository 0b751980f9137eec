// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! The pot.
use serde::{Deserialize, Serialize};

use crate::{
    player::Player,
    poker::{Chips, PlayerId},
};

/// The chips won by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payoff {
    /// The winning player.
    pub player_id: PlayerId,
    /// The chips won.
    pub chips: Chips,
}

/// A pot that collects the players bets for a hand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pot {
    total: Chips,
}

impl Pot {
    /// The chips in the pot.
    pub fn total(&self) -> Chips {
        self.total
    }

    /// Adds chips to the pot.
    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Empties the pot.
    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
    }

    /// Awards the pot to the winners and empties it.
    ///
    /// The pot is split evenly, the chips left by the division go one each to
    /// the winners in the given order, callers pass the winners starting from
    /// the seat closest to the button. With no winners the pot is left as it
    /// is.
    pub fn award<'a, I>(&mut self, winners: I) -> Vec<Payoff>
    where
        I: IntoIterator<Item = &'a mut Player>,
    {
        let mut winners = winners.into_iter().collect::<Vec<_>>();
        if winners.is_empty() {
            return Vec::default();
        }

        let count = winners.len() as u32;
        let share = self.total / count;
        let odd_chips = (self.total % count).amount() as usize;

        let payoffs = winners
            .iter_mut()
            .enumerate()
            .map(|(idx, player)| {
                let chips = if idx < odd_chips {
                    share + Chips::new(1)
                } else {
                    share
                };

                player.stack += chips;
                Payoff {
                    player_id: player.id,
                    chips,
                }
            })
            .collect();

        self.total = Chips::ZERO;
        payoffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_player(id: u32, stack: u32) -> Player {
        Player::new(PlayerId::new(id), Chips::new(stack))
    }

    #[test]
    fn add_and_reset() {
        let mut pot = Pot::default();
        pot.add(Chips::new(100));
        pot.add(Chips::new(20));
        assert_eq!(pot.total(), Chips::new(120));

        pot.reset();
        assert_eq!(pot.total(), Chips::ZERO);
    }

    #[test]
    fn award_single_winner() {
        let mut pot = Pot::default();
        pot.add(Chips::new(37));

        let mut p = new_player(0, 100);
        let payoffs = pot.award([&mut p]);

        assert_eq!(p.stack, Chips::new(137));
        assert_eq!(pot.total(), Chips::ZERO);
        assert_eq!(
            payoffs,
            vec![Payoff {
                player_id: PlayerId::new(0),
                chips: Chips::new(37)
            }]
        );
    }

    #[test]
    fn award_split() {
        let mut pot = Pot::default();
        pot.add(Chips::new(40));

        let mut p1 = new_player(1, 100);
        let mut p2 = new_player(2, 100);
        pot.award([&mut p1, &mut p2]);

        assert_eq!(p1.stack, Chips::new(120));
        assert_eq!(p2.stack, Chips::new(120));
        assert_eq!(pot.total(), Chips::ZERO);
    }

    #[test]
    fn award_split_odd_chips() {
        let mut pot = Pot::default();
        pot.add(Chips::new(11));

        let mut p1 = new_player(1, 0);
        let mut p2 = new_player(2, 0);
        let mut p3 = new_player(3, 0);
        pot.award([&mut p1, &mut p2, &mut p3]);

        // No chip is lost and the first winners get the odd chips.
        assert_eq!(p1.stack, Chips::new(4));
        assert_eq!(p2.stack, Chips::new(4));
        assert_eq!(p3.stack, Chips::new(3));
        assert_eq!(pot.total(), Chips::ZERO);
    }

    #[test]
    fn award_no_winners() {
        let mut pot = Pot::default();
        pot.add(Chips::new(10));

        let payoffs = pot.award(std::iter::empty());
        assert!(payoffs.is_empty());
        assert_eq!(pot.total(), Chips::new(10));
    }
}
