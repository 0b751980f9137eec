// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Hand sequencing.
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::{
    betting::{BettingRound, Street, StreetEnd},
    dealer::Dealer,
    error::GameError,
    event::{GameEvent, Observer},
    game_state::{GameState, Stage},
    player::Player,
    poker::{Card, Chips, Deck, HandValue, PlayerId},
    pot::Payoff,
    strategy::Strategy,
    table::Table,
};

/// The table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// The number of players, seated from seat 0.
    pub players: usize,
    /// The number of seats.
    pub seats: usize,
    /// The chips each player starts with.
    pub start_stack: Chips,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: 2,
            seats: 2,
            start_stack: Chips::new(200),
        }
    }
}

impl GameConfig {
    /// Checks the configuration can be played.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.players < 2 {
            return Err(GameError::InvalidConfig(format!(
                "need at least 2 players, got {}",
                self.players
            )));
        }

        if self.players > self.seats {
            return Err(GameError::InvalidConfig(format!(
                "{} players don't fit in {} seats",
                self.players, self.seats
            )));
        }

        // One hole card each plus the two board cards.
        if self.players + 2 > Deck::SIZE {
            return Err(GameError::InvalidConfig(format!(
                "a deck can't deal to {} players",
                self.players
            )));
        }

        if self.start_stack.is_zero() {
            return Err(GameError::InvalidConfig("start stack is zero".to_string()));
        }

        Ok(())
    }
}

/// The ante and the raise amount of each street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandLimits {
    /// The ante every player posts.
    pub ante: Chips,
    /// The preflop raise amount.
    pub preflop: Chips,
    /// The flop raise amount.
    pub flop: Chips,
    /// The turn raise amount.
    pub turn: Chips,
}

impl Default for HandLimits {
    fn default() -> Self {
        Self {
            ante: Chips::new(1),
            preflop: Chips::new(2),
            flop: Chips::new(4),
            turn: Chips::new(4),
        }
    }
}

impl HandLimits {
    /// The raise amount for a street.
    pub fn limit(&self, street: Street) -> Chips {
        match street {
            Street::Preflop => self.preflop,
            Street::Flop => self.flop,
            Street::Turn => self.turn,
        }
    }
}

/// The outcome of a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    /// The hand number.
    pub hand: u64,
    /// The button seat.
    pub button: usize,
    /// The players who won the pot.
    pub winners: Vec<PlayerId>,
    /// The chips each winner received.
    pub payoffs: Vec<Payoff>,
    /// The pot before it was awarded.
    pub pot: Chips,
    /// The board cards.
    pub board: Vec<Card>,
    /// The hand went to a showdown.
    pub showdown: bool,
    /// The winning hand at a showdown.
    pub value: Option<HandValue>,
    /// The last street that was played.
    pub last_street: Street,
}

/// A game at one table.
#[derive(Debug)]
pub struct Game {
    table: Table,
    dealer: Dealer,
    hands: u64,
}

impl Game {
    /// Creates a game seating the configured players.
    pub fn new(config: &GameConfig, rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;

        let mut table = Table::new(config.seats);
        for seat in 0..config.players {
            let player = Player::new(PlayerId::new(seat as u32), config.start_stack);
            table.seat_player(player, seat)?;
        }

        Ok(Self::with_table(table, rng))
    }

    /// Creates a game with an already seated table.
    pub fn with_table(table: Table, rng: StdRng) -> Self {
        Self {
            table,
            dealer: Dealer::new(rng),
            hands: 0,
        }
    }

    /// The table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The dealer.
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// The number of hands started.
    pub fn hands_played(&self) -> u64 {
        self.hands
    }

    /// Moves the button to the next occupied seat without playing a hand.
    pub fn move_button(&mut self) -> Result<usize, GameError> {
        self.dealer.move_button(&self.table)
    }

    /// Checks if fewer than two players have chips.
    pub fn is_over(&self) -> bool {
        self.table.players().filter(|(_, p)| !p.is_busted()).count() < 2
    }

    /// Plays a hand to the end.
    ///
    /// If the hand fails all the bets are returned to the players and the
    /// game can go on with the next hand.
    pub fn play_hand<S, O>(
        &mut self,
        limits: &HandLimits,
        strategy: &mut S,
        observer: &mut O,
    ) -> Result<HandResult, GameError>
    where
        S: Strategy + ?Sized,
        O: Observer + ?Sized,
    {
        self.remove_busted(observer);
        if self.is_over() {
            return Err(GameError::NotEnoughPlayers);
        }

        self.hands += 1;
        let hand = self.hands;

        match self.run_hand(hand, limits, strategy, observer) {
            Ok(result) => {
                observer.on_event(&GameEvent::HandResolved(result.clone()));
                self.remove_busted(observer);
                Ok(result)
            }
            Err(error) => {
                self.abort_hand();
                observer.on_event(&GameEvent::HandAborted {
                    hand,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    fn run_hand<S, O>(
        &mut self,
        hand: u64,
        limits: &HandLimits,
        strategy: &mut S,
        observer: &mut O,
    ) -> Result<HandResult, GameError>
    where
        S: Strategy + ?Sized,
        O: Observer + ?Sized,
    {
        self.dealer.reset_for_new_hand();
        self.table
            .players_mut()
            .for_each(|(_, p)| p.reset_for_new_hand());

        let button = self.dealer.move_button(&self.table)?;
        observer.on_event(&GameEvent::HandStarted { hand, button });

        for (seat, player) in self.table.players_mut() {
            let chips = player.post_ante(limits.ante, self.dealer.pot_mut());
            observer.on_event(&GameEvent::AntePosted {
                seat,
                player_id: player.id,
                chips,
            });
        }
        self.snapshot(Stage::Ante, observer);

        self.dealer.deal_hand(&mut self.table)?;
        for (seat, player) in self.table.players() {
            for &card in &player.hand {
                observer.on_event(&GameEvent::HoleCardDealt {
                    seat,
                    player_id: player.id,
                    card,
                });
            }
        }
        self.snapshot(Stage::Deal, observer);

        let mut last_street = Street::Preflop;
        for street in Street::streets() {
            last_street = street;

            let card = match street {
                Street::Preflop => None,
                Street::Flop => Some(self.dealer.deal_flop()?),
                Street::Turn => Some(self.dealer.deal_turn()?),
            };

            if let Some(card) = card {
                observer.on_event(&GameEvent::BoardCard { street, card });
            }

            self.dealer.set_current_bet(Chips::ZERO);
            let mut round =
                BettingRound::new(street, button, self.table.len(), limits.limit(street));
            let end = round.run(&mut self.table, &mut self.dealer, strategy, observer)?;

            observer.on_event(&GameEvent::StreetEnded {
                street,
                end,
                pot: self.dealer.pot().total(),
            });
            self.snapshot(street.into(), observer);

            if end == StreetEnd::SingleSurvivor {
                break;
            }
        }

        self.settle(hand, button, last_street, observer)
    }

    fn settle<O>(
        &mut self,
        hand: u64,
        button: usize,
        last_street: Street,
        observer: &mut O,
    ) -> Result<HandResult, GameError>
    where
        O: Observer + ?Sized,
    {
        let pot = self.dealer.pot().total();
        let showdown = self.table.count_active() > 1;

        let (mut seats, value) = if showdown {
            let winners = self.dealer.determine_winner(&self.table);
            (winners.seats, winners.value)
        } else {
            (Vec::default(), None)
        };

        // Without a showdown winner the pot goes to whoever is left.
        if seats.is_empty() {
            seats = self
                .table
                .players()
                .filter(|(_, p)| p.is_active)
                .map(|(seat, _)| seat)
                .collect();
        }

        if seats.is_empty() {
            return Err(GameError::NoActivePlayers);
        }

        let winners = self.table.players_at_mut(&seats);
        let payoffs = self.dealer.pot_mut().award(winners);
        self.snapshot(Stage::Settled, observer);

        Ok(HandResult {
            hand,
            button,
            winners: payoffs.iter().map(|p| p.player_id).collect(),
            payoffs,
            pot,
            board: self.dealer.board().to_vec(),
            showdown,
            value,
            last_street,
        })
    }

    /// Returns the chips committed in the hand to the players.
    fn abort_hand(&mut self) {
        for (_, player) in self.table.players_mut() {
            player.stack += player.chips_in_play;
            player.chips_in_play = Chips::ZERO;
        }

        self.dealer.pot_mut().reset();
        self.dealer.set_current_bet(Chips::ZERO);
    }

    fn remove_busted<O>(&mut self, observer: &mut O)
    where
        O: Observer + ?Sized,
    {
        for (seat, player) in self.table.remove_busted() {
            observer.on_event(&GameEvent::PlayerBusted {
                seat,
                player_id: player.id,
            });
        }
    }

    fn snapshot<O>(&self, stage: Stage, observer: &mut O)
    where
        O: Observer + ?Sized,
    {
        let state = GameState::capture(stage, &self.table, &self.dealer);
        observer.on_event(&GameEvent::Snapshot(state));
    }
}
