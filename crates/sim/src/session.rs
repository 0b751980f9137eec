// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Session play and history replay.
use anyhow::Result;
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::{fmt, path::Path};

use rhode_core::{Chips, Game, GameConfig, GameError, HandLimits, PlayerId, RandomStrategy};
use rhode_history::{HistoryLogger, HistoryNode, HistoryStore};

use crate::LogObserver;

/// Simulation config.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// The table config.
    pub game: GameConfig,
    /// The ante and raise amounts.
    pub limits: HandLimits,
    /// The number of hands to play.
    pub hands: u64,
    /// The random seed, a random one if not set.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            limits: HandLimits::default(),
            hands: 1000,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Returns the configured seed or a random one.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// The outcome of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// The seed the session was played with.
    pub seed: u64,
    /// The number of hands played.
    pub hands: u64,
    /// The number of hands that failed.
    pub aborted: u64,
    /// The players still at the table and their chips.
    pub stacks: Vec<(PlayerId, Chips)>,
}

impl SessionSummary {
    /// The last player with chips, if the session ended with a winner.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.stacks.as_slice() {
            [(id, _)] => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seed:    {}", self.seed)?;
        writeln!(f, "Hands:   {}", self.hands)?;
        writeln!(f, "Aborted: {}", self.aborted)?;
        for (id, chips) in &self.stacks {
            writeln!(f, "Player {id}: {chips}")?;
        }

        if let Some(id) = self.winner() {
            writeln!(f, "Player {id} wins")?;
        }

        Ok(())
    }
}

/// Plays hands at one table until a player has all the chips or the hands
/// limit is reached.
///
/// If `history` is set the session tree is appended to that file.
pub fn play(config: &SimConfig, history: Option<&Path>) -> Result<SessionSummary> {
    let seed = config.seed();
    info!("Starting session with seed {seed}");

    let mut game = Game::new(&config.game, StdRng::seed_from_u64(seed))?;
    let mut strategy = RandomStrategy::seed_from_u64(seed.wrapping_add(1));
    let logger = history.map(|_| HistoryLogger::new(format!("Session {seed}")));
    let mut observer = (LogObserver, logger);

    let mut aborted = 0;
    while game.hands_played() < config.hands && !game.is_over() {
        match game.play_hand(&config.limits, &mut strategy, &mut observer) {
            Ok(_) => {}
            Err(GameError::NotEnoughPlayers) => break,
            Err(e) => {
                aborted += 1;
                warn!("Hand {} failed: {e}", game.hands_played());
            }
        }
    }

    if let (Some(path), Some(logger)) = (history, observer.1.as_mut()) {
        let store = HistoryStore::new(path);
        store.append(&logger.take_tree())?;
        info!("Session history appended to {}", store.path().display());
    }

    let stacks = game
        .table()
        .players()
        .map(|(_, p)| (p.id, p.stack))
        .collect();

    Ok(SessionSummary {
        seed,
        hands: game.hands_played(),
        aborted,
        stacks,
    })
}

/// Loads the history trees stored in a file.
pub fn replay(path: &Path) -> Result<Vec<HistoryNode>> {
    let store = HistoryStore::new(path);
    let trees = store.load_all()?;
    info!("Loaded {} trees from {}", trees.len(), store.path().display());
    Ok(trees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(hands: u64) -> SimConfig {
        SimConfig {
            game: GameConfig {
                players: 3,
                seats: 3,
                start_stack: Chips::new(40),
            },
            hands,
            seed: Some(17),
            ..SimConfig::default()
        }
    }

    #[test]
    fn session_conserves_chips() {
        let summary = play(&config(200), None).unwrap();

        assert!(summary.hands <= 200);
        assert_eq!(summary.aborted, 0);
        let total = summary.stacks.iter().map(|(_, c)| *c).sum::<Chips>();
        assert_eq!(total, Chips::new(120));

        if summary.hands < 200 {
            assert!(summary.winner().is_some());
        }
    }

    #[test]
    fn session_is_reproducible() {
        let s1 = play(&config(50), None).unwrap();
        let s2 = play(&config(50), None).unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn session_history() {
        let path = std::env::temp_dir().join(format!(
            "rhode-sim-{}-session.bin",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let summary = play(&config(5), Some(&path)).unwrap();
        play(&config(5), Some(&path)).unwrap();

        let trees = replay(&path).unwrap();
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0], trees[1]);
        assert_eq!(trees[0].label, "Session 17");
        assert_eq!(trees[0].children.len() as u64, summary.hands);

        std::fs::remove_file(&path).unwrap();
    }
}
