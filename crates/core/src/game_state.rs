// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Game state snapshots.
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

use crate::{
    betting::Street,
    dealer::Dealer,
    poker::{Card, Chips, PlayerId},
    table::Table,
};

/// The point of a hand a snapshot was taken at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// After the antes.
    Ante,
    /// After the hole cards.
    Deal,
    /// After the preflop betting.
    Preflop,
    /// After the flop betting.
    Flop,
    /// After the turn betting.
    Turn,
    /// After the pot has been awarded.
    Settled,
}

impl From<Street> for Stage {
    fn from(street: Street) -> Self {
        match street {
            Street::Preflop => Stage::Preflop,
            Street::Flop => Stage::Flop,
            Street::Turn => Stage::Turn,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Ante => "Ante",
            Stage::Deal => "Deal",
            Stage::Preflop => "Preflop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::Settled => "Settled",
        };

        write!(f, "{name}")
    }
}

/// A player in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// The player seat.
    pub seat: usize,
    /// The player chips.
    pub stack: Chips,
    /// The player hole cards.
    pub hand: Vec<Card>,
    /// The player is still in the hand.
    pub is_active: bool,
    /// The chips committed in this hand.
    pub chips_in_play: Chips,
}

/// A snapshot of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// When the snapshot was taken.
    pub stage: Stage,
    /// The bet to match in the street.
    pub current_bet: Chips,
    /// The pot.
    pub pot: Chips,
    /// The board cards.
    pub board: Vec<Card>,
    /// The seated players by id.
    pub players: BTreeMap<PlayerId, PlayerState>,
}

impl GameState {
    /// Takes a snapshot of the table and the dealer.
    pub fn capture(stage: Stage, table: &Table, dealer: &Dealer) -> Self {
        let players = table
            .players()
            .map(|(seat, p)| {
                let state = PlayerState {
                    seat,
                    stack: p.stack,
                    hand: p.hand.clone(),
                    is_active: p.is_active,
                    chips_in_play: p.chips_in_play,
                };
                (p.id, state)
            })
            .collect();

        Self {
            stage,
            current_bet: dealer.current_bet(),
            pot: dealer.pot().total(),
            board: dealer.board().to_vec(),
            players,
        }
    }

    /// The chips on the table, stacks plus pot.
    pub fn total_chips(&self) -> Chips {
        self.players.values().map(|p| p.stack).sum::<Chips>() + self.pot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn capture() {
        let mut table = Table::new(3);
        table
            .seat_player(Player::new(PlayerId::new(7), Chips::new(100)), 2)
            .unwrap();
        table
            .seat_player(Player::new(PlayerId::new(3), Chips::new(50)), 0)
            .unwrap();

        let mut dealer = Dealer::new(StdRng::seed_from_u64(1));
        let player = table.player_mut(0).unwrap();
        player.post_ante(Chips::new(5), dealer.pot_mut());
        dealer.deal_hand(&mut table).unwrap();
        dealer.deal_flop().unwrap();

        let state = GameState::capture(Stage::Flop, &table, &dealer);
        assert_eq!(state.stage, Stage::Flop);
        assert_eq!(state.pot, Chips::new(5));
        assert_eq!(state.board.len(), 1);
        assert_eq!(state.total_chips(), Chips::new(150));

        let ids = state.players.keys().copied().collect::<Vec<_>>();
        assert_eq!(ids, vec![PlayerId::new(3), PlayerId::new(7)]);

        let p3 = &state.players[&PlayerId::new(3)];
        assert_eq!(p3.seat, 0);
        assert_eq!(p3.stack, Chips::new(45));
        assert_eq!(p3.chips_in_play, Chips::new(5));
        assert_eq!(p3.hand.len(), 1);
    }

    #[test]
    fn stage_from_street() {
        let stages = Street::streets().map(Stage::from).collect::<Vec<_>>();
        assert_eq!(stages, vec![Stage::Preflop, Stage::Flop, Stage::Turn]);
        assert_eq!(Stage::Settled.to_string(), "Settled");
    }
}
