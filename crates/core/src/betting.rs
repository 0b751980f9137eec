// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Betting round state machine.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    dealer::Dealer,
    error::GameError,
    event::{GameEvent, Observer},
    poker::{Chips, PlayerAction, PlayerId},
    strategy::{ActionRequest, Strategy},
    table::Table,
};

/// A betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Betting after the hole cards are dealt.
    Preflop,
    /// Betting after the first board card.
    Flop,
    /// Betting after the second board card.
    Turn,
}

impl Street {
    /// All the streets in the order they are played.
    pub fn streets() -> impl DoubleEndedIterator<Item = Street> {
        [Street::Preflop, Street::Flop, Street::Turn].into_iter()
    }

    /// The number of seats after the button of the first seat to act.
    pub fn start_offset(&self) -> usize {
        match self {
            Street::Preflop => 3,
            Street::Flop | Street::Turn => 1,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
        };

        write!(f, "{name}")
    }
}

/// The state of a betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Waiting for the player at the given seat.
    AwaitingAction(usize),
    /// Every player who can act has acted since the last raise.
    Stable,
    /// All but one player folded.
    SingleSurvivor,
}

/// How a street ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreetEnd {
    /// The bets are settled, the hand goes on.
    Stable,
    /// All but one player folded, the hand is over.
    SingleSurvivor,
}

/// An applied player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The street the action was taken in.
    pub street: Street,
    /// The seat of the player.
    pub seat: usize,
    /// The player id.
    pub player_id: PlayerId,
    /// The action.
    pub action: PlayerAction,
    /// The chips the action moved to the pot.
    pub chips: Chips,
    /// The bet to match after the action.
    pub current_bet: Chips,
    /// The pot after the action.
    pub pot: Chips,
}

/// Drives the betting for one street.
///
/// Seats are visited in turn starting from `street.start_offset()` seats after
/// the button, empty seats and players who folded or have no chips are
/// skipped. A call bets the full current bet and a raise bets the current bet
/// plus the street limit, whatever the player already put in this street.
/// After a raise everybody else must act again.
#[derive(Debug, Clone)]
pub struct BettingRound {
    street: Street,
    limit: Chips,
    seats: usize,
    cursor: usize,
    current_bet: Chips,
    raises: usize,
    last_raiser: Option<usize>,
    acted: AHashSet<usize>,
    street_bets: Vec<Chips>,
}

impl BettingRound {
    /// The maximum number of raises in a street.
    pub const MAX_RAISES: usize = 3;

    /// Creates a betting round for a table with `seats` seats.
    pub fn new(street: Street, button: usize, seats: usize, limit: Chips) -> Self {
        let cursor = (button + street.start_offset())
            .checked_rem(seats)
            .unwrap_or_default();

        Self {
            street,
            limit,
            seats,
            cursor,
            current_bet: Chips::ZERO,
            raises: 0,
            last_raiser: None,
            acted: AHashSet::default(),
            street_bets: vec![Chips::ZERO; seats],
        }
    }

    /// The street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The bet to match.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// The number of raises so far.
    pub fn raises(&self) -> usize {
        self.raises
    }

    /// The seat of the last player who raised.
    pub fn last_raiser(&self) -> Option<usize> {
        self.last_raiser
    }

    /// The chips a seat has bet in this street.
    pub fn street_bet(&self, seat: usize) -> Chips {
        self.street_bets.get(seat).copied().unwrap_or_default()
    }

    /// The chips a call moves to the pot.
    pub fn to_call(&self) -> Chips {
        self.current_bet
    }

    /// The chips a seat is short of the current bet.
    fn owed(&self, seat: usize) -> Chips {
        self.current_bet - self.street_bet(seat)
    }

    /// Returns the state of the round.
    pub fn status(&self, table: &Table) -> RoundStatus {
        if table.count_active() <= 1 {
            return RoundStatus::SingleSurvivor;
        }

        let can_act = table
            .players()
            .filter(|(_, p)| p.is_active && !p.stack.is_zero())
            .map(|(seat, _)| seat)
            .collect::<Vec<_>>();

        // Nobody left to bet against.
        if can_act.len() <= 1 && can_act.iter().all(|&seat| self.owed(seat).is_zero()) {
            return RoundStatus::Stable;
        }

        (0..self.seats)
            .map(|offset| (self.cursor + offset) % self.seats)
            .find(|seat| can_act.contains(seat) && !self.acted.contains(seat))
            .map_or(RoundStatus::Stable, RoundStatus::AwaitingAction)
    }

    /// Returns the actions a seat can take given the bet in this street.
    pub fn legal_actions(&self, seat: usize, table: &Table) -> Vec<PlayerAction> {
        let can_act = table
            .player(seat)
            .is_some_and(|p| p.is_active && !p.stack.is_zero());
        if !can_act {
            return Vec::default();
        }

        if self.current_bet.is_zero() {
            return vec![PlayerAction::Check, PlayerAction::Raise];
        }

        // The last raiser waits for someone else to act.
        if self.last_raiser == Some(seat) {
            return Vec::default();
        }

        let mut actions = vec![PlayerAction::Fold, PlayerAction::Call];
        if self.raises < Self::MAX_RAISES {
            actions.push(PlayerAction::Raise);
        }

        actions
    }

    /// Applies the action of the seat to act.
    pub fn apply(
        &mut self,
        seat: usize,
        action: PlayerAction,
        table: &mut Table,
        dealer: &mut Dealer,
    ) -> Result<ActionRecord, GameError> {
        if self.status(table) != RoundStatus::AwaitingAction(seat) {
            return Err(GameError::NotPlayersTurn(seat));
        }

        if !self.legal_actions(seat, table).contains(&action) {
            return Err(GameError::IllegalAction { seat, action });
        }

        let seats = self.seats;
        let player = table
            .player_mut(seat)
            .ok_or(GameError::InvalidSeat { seat, seats })?;

        let chips = match action {
            PlayerAction::Fold => {
                player.fold();
                Chips::ZERO
            }
            PlayerAction::Check => {
                player.check();
                Chips::ZERO
            }
            PlayerAction::Call => player.call(self.to_call(), dealer.pot_mut()),
            PlayerAction::Raise => {
                let target = self.current_bet + self.limit;
                let chips = player.bet(target, dealer.pot_mut());

                self.current_bet = target;
                self.raises += 1;
                self.last_raiser = Some(seat);
                self.acted.clear();
                chips
            }
        };

        let player_id = player.id;
        self.street_bets[seat] += chips;
        self.acted.insert(seat);
        self.cursor = (seat + 1) % seats;
        dealer.set_current_bet(self.current_bet);

        Ok(ActionRecord {
            street: self.street,
            seat,
            player_id,
            action,
            chips,
            current_bet: self.current_bet,
            pot: dealer.pot().total(),
        })
    }

    /// Runs the round until it ends, asking the strategy for each action.
    pub fn run<S, O>(
        &mut self,
        table: &mut Table,
        dealer: &mut Dealer,
        strategy: &mut S,
        observer: &mut O,
    ) -> Result<StreetEnd, GameError>
    where
        S: Strategy + ?Sized,
        O: Observer + ?Sized,
    {
        loop {
            let seat = match self.status(table) {
                RoundStatus::AwaitingAction(seat) => seat,
                RoundStatus::Stable => return Ok(StreetEnd::Stable),
                RoundStatus::SingleSurvivor => return Ok(StreetEnd::SingleSurvivor),
            };

            let action = {
                let req = self.request(seat, table, dealer)?;
                strategy.execute(&req)
            };

            let record = self.apply(seat, action, table, dealer)?;
            observer.on_event(&GameEvent::Action(record));
        }
    }

    fn request<'a>(
        &self,
        seat: usize,
        table: &'a Table,
        dealer: &'a Dealer,
    ) -> Result<ActionRequest<'a>, GameError> {
        let seats = self.seats;
        let player = table
            .player(seat)
            .ok_or(GameError::InvalidSeat { seat, seats })?;

        Ok(ActionRequest {
            seat,
            player_id: player.id,
            street: self.street,
            actions: self.legal_actions(seat, table),
            current_bet: self.current_bet,
            to_call: self.to_call(),
            hand: &player.hand,
            board: dealer.board(),
            stack: player.stack,
            pot: dealer.pot().total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{player::Player, strategy::tests::Scripted};
    use rand::{SeedableRng, rngs::StdRng};

    use crate::poker::PlayerAction::*;

    fn setup(stacks: &[u32]) -> (Table, Dealer) {
        let mut table = Table::new(stacks.len());
        for (seat, &stack) in stacks.iter().enumerate() {
            let player = Player::new(PlayerId::new(seat as u32), Chips::new(stack));
            table.seat_player(player, seat).unwrap();
        }

        (table, Dealer::new(StdRng::seed_from_u64(7)))
    }

    #[test]
    fn start_seat() {
        let (table, _) = setup(&[200, 200]);

        // Two seats, button 0: preflop starts at (0 + 3) % 2.
        let round = BettingRound::new(Street::Preflop, 0, 2, Chips::new(10));
        assert_eq!(round.status(&table), RoundStatus::AwaitingAction(1));

        let round = BettingRound::new(Street::Flop, 0, 2, Chips::new(10));
        assert_eq!(round.status(&table), RoundStatus::AwaitingAction(1));

        let (table, _) = setup(&[200, 200, 200]);
        let round = BettingRound::new(Street::Preflop, 1, 3, Chips::new(10));
        assert_eq!(round.status(&table), RoundStatus::AwaitingAction(1));
        let round = BettingRound::new(Street::Turn, 1, 3, Chips::new(10));
        assert_eq!(round.status(&table), RoundStatus::AwaitingAction(2));
    }

    #[test]
    fn both_check() {
        let (mut table, mut dealer) = setup(&[200, 200]);
        let mut round = BettingRound::new(Street::Preflop, 0, 2, Chips::new(10));
        let mut strategy = Scripted::new([Check, Check]);

        let end = round
            .run(&mut table, &mut dealer, &mut strategy, &mut ())
            .unwrap();

        assert_eq!(end, StreetEnd::Stable);
        assert_eq!(dealer.pot().total(), Chips::ZERO);
        assert!(table.players().all(|(_, p)| p.chips_in_play.is_zero()));
        assert!(strategy.is_done());
    }

    #[test]
    fn raise_and_call() {
        let (mut table, mut dealer) = setup(&[200, 200]);
        let mut round = BettingRound::new(Street::Preflop, 0, 2, Chips::new(10));
        assert_eq!(round.street(), Street::Preflop);

        // Seat 1 acts first and raises, seat 0 calls.
        let mut strategy = Scripted::new([Raise, Call]);
        let end = round
            .run(&mut table, &mut dealer, &mut strategy, &mut ())
            .unwrap();

        assert_eq!(end, StreetEnd::Stable);
        assert_eq!(dealer.pot().total(), Chips::new(20));
        assert_eq!(dealer.current_bet(), Chips::new(10));
        assert_eq!(round.last_raiser(), Some(1));
        assert_eq!(table.player(0).unwrap().stack, Chips::new(190));
        assert_eq!(table.player(1).unwrap().stack, Chips::new(190));
        assert!(strategy.is_done());
    }

    #[test]
    fn legal_actions() {
        let (mut table, mut dealer) = setup(&[200, 200]);
        let mut round = BettingRound::new(Street::Flop, 0, 2, Chips::new(4));

        assert_eq!(round.legal_actions(1, &table), vec![Check, Raise]);
        round.apply(1, Raise, &mut table, &mut dealer).unwrap();

        // The raiser doesn't act against its own raise.
        assert!(round.legal_actions(1, &table).is_empty());
        assert_eq!(round.legal_actions(0, &table), vec![Fold, Call, Raise]);
        assert_eq!(round.to_call(), Chips::new(4));
    }

    #[test]
    fn reraise_and_call_bet_full_amounts() {
        let (mut table, mut dealer) = setup(&[200, 200]);
        let mut round = BettingRound::new(Street::Preflop, 0, 2, Chips::new(10));

        let raise = round.apply(1, Raise, &mut table, &mut dealer).unwrap();
        assert_eq!(raise.chips, Chips::new(10));

        let reraise = round.apply(0, Raise, &mut table, &mut dealer).unwrap();
        assert_eq!(reraise.chips, Chips::new(20));
        assert_eq!(reraise.current_bet, Chips::new(20));

        let call = round.apply(1, Call, &mut table, &mut dealer).unwrap();
        assert_eq!(call.chips, Chips::new(20));
        assert_eq!(call.pot, Chips::new(50));

        assert_eq!(round.status(&table), RoundStatus::Stable);
        assert_eq!(dealer.current_bet(), Chips::new(20));
        assert_eq!(table.player(0).unwrap().stack, Chips::new(180));
        assert_eq!(table.player(1).unwrap().stack, Chips::new(170));
    }

    #[test]
    fn raise_cap() {
        let (mut table, mut dealer) = setup(&[200, 200]);
        let mut round = BettingRound::new(Street::Preflop, 0, 2, Chips::new(2));

        round.apply(1, Raise, &mut table, &mut dealer).unwrap();
        round.apply(0, Raise, &mut table, &mut dealer).unwrap();
        round.apply(1, Raise, &mut table, &mut dealer).unwrap();
        assert_eq!(round.raises(), BettingRound::MAX_RAISES);
        assert_eq!(round.legal_actions(0, &table), vec![Fold, Call]);

        let err = round.apply(0, Raise, &mut table, &mut dealer).unwrap_err();
        assert_eq!(err, GameError::IllegalAction { seat: 0, action: Raise });

        // A call bets the whole 6 on top of the 4 already in.
        assert_eq!(round.to_call(), Chips::new(6));
        round.apply(0, Call, &mut table, &mut dealer).unwrap();
        assert_eq!(round.status(&table), RoundStatus::Stable);
        assert_eq!(dealer.pot().total(), Chips::new(2 + 4 + 6 + 6));
        assert_eq!(table.player(0).unwrap().chips_in_play, Chips::new(10));
        assert_eq!(table.player(1).unwrap().chips_in_play, Chips::new(8));
    }

    #[test]
    fn fold_ends_with_single_survivor() {
        let (mut table, mut dealer) = setup(&[200, 200]);
        let mut round = BettingRound::new(Street::Preflop, 0, 2, Chips::new(2));
        let mut strategy = Scripted::new([Raise, Fold]);

        let end = round
            .run(&mut table, &mut dealer, &mut strategy, &mut ())
            .unwrap();

        assert_eq!(end, StreetEnd::SingleSurvivor);
        assert_eq!(table.count_active(), 1);
        assert!(!table.player(0).unwrap().is_active);
    }

    #[test]
    fn out_of_turn_and_illegal_actions() {
        let (mut table, mut dealer) = setup(&[200, 200]);
        let mut round = BettingRound::new(Street::Preflop, 0, 2, Chips::new(2));

        assert_eq!(
            round.apply(0, Check, &mut table, &mut dealer),
            Err(GameError::NotPlayersTurn(0))
        );
        assert_eq!(
            round.apply(1, Call, &mut table, &mut dealer),
            Err(GameError::IllegalAction { seat: 1, action: Call })
        );
        assert_eq!(dealer.pot().total(), Chips::ZERO);
    }

    #[test]
    fn skips_empty_and_folded_seats() {
        let mut table = Table::new(4);
        for seat in [0, 2, 3] {
            let player = Player::new(PlayerId::new(seat as u32), Chips::new(100));
            table.seat_player(player, seat).unwrap();
        }
        table.player_mut(2).unwrap().fold();
        let mut dealer = Dealer::new(StdRng::seed_from_u64(1));

        // Flop after button 0 starts at seat 1, which is empty, then the folded seat 2.
        let mut round = BettingRound::new(Street::Flop, 0, 4, Chips::new(4));
        assert_eq!(round.status(&table), RoundStatus::AwaitingAction(3));

        round.apply(3, Check, &mut table, &mut dealer).unwrap();
        assert_eq!(round.status(&table), RoundStatus::AwaitingAction(0));
        round.apply(0, Check, &mut table, &mut dealer).unwrap();
        assert_eq!(round.status(&table), RoundStatus::Stable);
    }

    #[test]
    fn all_in_player_stops_betting() {
        let (mut table, mut dealer) = setup(&[200, 3]);
        let mut round = BettingRound::new(Street::Preflop, 0, 2, Chips::new(4));

        // Seat 1 goes all in with a short raise, seat 0 calls the full raise.
        round.apply(1, Raise, &mut table, &mut dealer).unwrap();
        assert!(table.player(1).unwrap().is_all_in());
        round.apply(0, Call, &mut table, &mut dealer).unwrap();

        assert_eq!(round.status(&table), RoundStatus::Stable);
        assert_eq!(dealer.pot().total(), Chips::new(7));

        // Nothing to bet in a later street either.
        let round = BettingRound::new(Street::Flop, 0, 2, Chips::new(4));
        assert_eq!(round.status(&table), RoundStatus::Stable);
    }

    #[test]
    fn observer_sees_actions() {
        let (mut table, mut dealer) = setup(&[200, 200]);
        let mut round = BettingRound::new(Street::Turn, 1, 2, Chips::new(4));
        let mut strategy = Scripted::new([Check, Raise, Call]);
        let mut events = Vec::new();

        round
            .run(&mut table, &mut dealer, &mut strategy, &mut events)
            .unwrap();

        let actions = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Action(record) => Some((record.seat, record.action, record.chips)),
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(
            actions,
            vec![
                (0, Check, Chips::ZERO),
                (1, Raise, Chips::new(4)),
                (0, Call, Chips::new(4)),
            ]
        );
    }
}
