// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Player decision strategies.
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    betting::Street,
    poker::{Card, Chips, PlayerAction, PlayerId},
};

/// A request for an action with the state visible to the player.
#[derive(Debug, Clone)]
pub struct ActionRequest<'a> {
    /// The seat to act.
    pub seat: usize,
    /// The player to act.
    pub player_id: PlayerId,
    /// The betting street.
    pub street: Street,
    /// The legal actions.
    pub actions: Vec<PlayerAction>,
    /// The bet to match.
    pub current_bet: Chips,
    /// The chips needed to call.
    pub to_call: Chips,
    /// The player hole cards.
    pub hand: &'a [Card],
    /// The board cards.
    pub board: &'a [Card],
    /// The player chips.
    pub stack: Chips,
    /// The pot.
    pub pot: Chips,
}

impl ActionRequest<'_> {
    /// Check if a call action is in the request.
    pub fn can_call(&self) -> bool {
        self.check_action(PlayerAction::Call)
    }

    /// Check if a check action is in the request.
    pub fn can_check(&self) -> bool {
        self.check_action(PlayerAction::Check)
    }

    /// Check if a raise action is in the request.
    pub fn can_raise(&self) -> bool {
        self.check_action(PlayerAction::Raise)
    }

    fn check_action(&self, action: PlayerAction) -> bool {
        self.actions.iter().any(|a| a == &action)
    }
}

/// Picks an action for a player.
pub trait Strategy {
    /// Returns one of the actions in the request.
    fn execute(&mut self, req: &ActionRequest<'_>) -> PlayerAction;
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn execute(&mut self, req: &ActionRequest<'_>) -> PlayerAction {
        (**self).execute(req)
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn execute(&mut self, req: &ActionRequest<'_>) -> PlayerAction {
        (**self).execute(req)
    }
}

/// Draws an action uniformly from the legal ones.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl RandomStrategy<StdRng> {
    /// Creates a strategy with a deterministic seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a strategy that draws from the given rng.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn execute(&mut self, req: &ActionRequest<'_>) -> PlayerAction {
        req.actions
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PlayerAction::Fold)
    }
}

/// Never raises, checks when possible or else calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveStrategy;

impl Strategy for PassiveStrategy {
    fn execute(&mut self, req: &ActionRequest<'_>) -> PlayerAction {
        if req.can_check() {
            PlayerAction::Check
        } else if req.can_call() {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ahash::AHashSet;
    use std::collections::VecDeque;

    /// Plays a fixed list of actions, then folds.
    #[derive(Debug, Default)]
    pub struct Scripted {
        actions: VecDeque<PlayerAction>,
    }

    impl Scripted {
        pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
            Self {
                actions: actions.into_iter().collect(),
            }
        }

        pub fn is_done(&self) -> bool {
            self.actions.is_empty()
        }
    }

    impl Strategy for Scripted {
        fn execute(&mut self, _req: &ActionRequest<'_>) -> PlayerAction {
            self.actions.pop_front().unwrap_or(PlayerAction::Fold)
        }
    }

    fn request(actions: Vec<PlayerAction>) -> ActionRequest<'static> {
        ActionRequest {
            seat: 0,
            player_id: PlayerId::new(0),
            street: Street::Preflop,
            actions,
            current_bet: Chips::ZERO,
            to_call: Chips::ZERO,
            hand: &[],
            board: &[],
            stack: Chips::new(100),
            pot: Chips::ZERO,
        }
    }

    #[test]
    fn request_helpers() {
        let req = request(vec![PlayerAction::Check, PlayerAction::Raise]);
        assert!(req.can_check());
        assert!(req.can_raise());
        assert!(!req.can_call());
    }

    #[test]
    fn random_picks_legal_actions() {
        use crate::poker::PlayerAction::*;

        let mut strategy = RandomStrategy::seed_from_u64(42);
        let req = request(vec![Fold, Call, Raise]);

        let picked = (0..200)
            .map(|_| strategy.execute(&req))
            .collect::<AHashSet<_>>();
        assert_eq!(picked, [Fold, Call, Raise].into_iter().collect());

        // Nothing to choose from.
        assert_eq!(strategy.execute(&request(vec![])), Fold);
    }

    #[test]
    fn random_is_reproducible() {
        use crate::poker::PlayerAction::*;

        let req = request(vec![Fold, Call, Raise]);
        let mut s1 = RandomStrategy::seed_from_u64(3);
        let mut s2 = RandomStrategy::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(s1.execute(&req), s2.execute(&req));
        }
    }

    #[test]
    fn passive() {
        use crate::poker::PlayerAction::*;

        let mut strategy = PassiveStrategy;
        assert_eq!(strategy.execute(&request(vec![Check, Raise])), Check);
        assert_eq!(strategy.execute(&request(vec![Fold, Call, Raise])), Call);
        assert_eq!(strategy.execute(&request(vec![])), Fold);
    }

    #[test]
    fn boxed_strategy() {
        let mut strategy: Box<dyn Strategy> = Box::new(PassiveStrategy);
        let req = request(vec![PlayerAction::Check]);
        assert_eq!(strategy.execute(&req), PlayerAction::Check);
    }
}
