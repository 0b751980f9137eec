// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Game events and observers.
//!
//! The game doesn't log, it reports what happens to an [Observer] that can
//! log, record history or collect statistics.
use crate::{
    betting::{ActionRecord, Street, StreetEnd},
    error::GameError,
    game::HandResult,
    game_state::GameState,
    poker::{Card, Chips, PlayerId},
};

/// An event in a hand.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A hand started.
    HandStarted {
        /// The hand number, starting from 1.
        hand: u64,
        /// The button seat.
        button: usize,
    },
    /// A player posted the ante.
    AntePosted {
        /// The player seat.
        seat: usize,
        /// The player id.
        player_id: PlayerId,
        /// The chips posted.
        chips: Chips,
    },
    /// A player received the hole card.
    HoleCardDealt {
        /// The player seat.
        seat: usize,
        /// The player id.
        player_id: PlayerId,
        /// The card.
        card: Card,
    },
    /// A board card has been revealed.
    BoardCard {
        /// The street the card opens.
        street: Street,
        /// The card.
        card: Card,
    },
    /// A player action has been applied.
    Action(ActionRecord),
    /// A betting street ended.
    StreetEnded {
        /// The street.
        street: Street,
        /// How it ended.
        end: StreetEnd,
        /// The pot at the end of the street.
        pot: Chips,
    },
    /// A table snapshot.
    Snapshot(GameState),
    /// The pot has been awarded.
    HandResolved(HandResult),
    /// The hand failed and the bets have been returned.
    HandAborted {
        /// The hand number.
        hand: u64,
        /// The error that stopped the hand.
        error: GameError,
    },
    /// A player with no chips left the table.
    PlayerBusted {
        /// The seat the player left.
        seat: usize,
        /// The player id.
        player_id: PlayerId,
    },
}

/// Receives game events.
pub trait Observer {
    /// Called for each event in order.
    fn on_event(&mut self, event: &GameEvent);
}

/// Ignores all events.
impl Observer for () {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Forwards events to both observers.
impl<A: Observer, B: Observer> Observer for (A, B) {
    fn on_event(&mut self, event: &GameEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}

impl<O: Observer> Observer for Option<O> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Some(observer) = self {
            observer.on_event(event);
        }
    }
}

/// Collects the events.
impl Observer for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter(usize);

    impl Observer for Counter {
        fn on_event(&mut self, _event: &GameEvent) {
            self.0 += 1;
        }
    }

    #[test]
    fn combined_observers() {
        let event = GameEvent::HandStarted { hand: 1, button: 0 };

        let mut counter = Counter::default();
        let mut events = Vec::new();
        {
            let mut both = (&mut counter, &mut events);
            both.on_event(&event);
            both.on_event(&event);
            ().on_event(&event);
        }

        assert_eq!(counter.0, 2);
        assert_eq!(events, vec![event.clone(), event]);
    }
}
