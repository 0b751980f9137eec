// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand statistics.
use ahash::AHashMap;
use anyhow::{Result, anyhow, ensure};
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::{collections::BTreeMap, fmt, thread};

use rhode_core::{Game, GameError, HandRank, HandResult, PlayerId, RandomStrategy};

use crate::SimConfig;

/// Aggregated results of many hands.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    /// Hands played to the end.
    pub hands: u64,
    /// Hands that failed.
    pub aborted: u64,
    /// Hands decided at a showdown.
    pub showdowns: u64,
    /// Hands won by the last player left.
    pub early_finishes: u64,
    /// Hands with more than one winner.
    pub split_pots: u64,
    /// The sum of all the pots.
    pub total_pot: u64,
    /// Hands won by each player, a split pot counts for each winner.
    pub wins: BTreeMap<PlayerId, u64>,
    /// Hands played with the button at each seat.
    pub buttons: BTreeMap<usize, u64>,
    /// Showdown winning hands by category.
    pub categories: AHashMap<HandRank, u64>,
}

impl Stats {
    /// Adds a hand result.
    pub fn record(&mut self, result: &HandResult) {
        self.hands += 1;
        self.total_pot += u64::from(result.pot.amount());

        if result.showdown {
            self.showdowns += 1;
            if let Some(value) = &result.value {
                *self.categories.entry(value.rank()).or_default() += 1;
            }
        } else {
            self.early_finishes += 1;
        }

        *self.buttons.entry(result.button).or_default() += 1;

        if result.winners.len() > 1 {
            self.split_pots += 1;
        }

        for id in &result.winners {
            *self.wins.entry(*id).or_default() += 1;
        }
    }

    /// Adds the counts of another stats.
    pub fn merge(&mut self, other: Stats) {
        self.hands += other.hands;
        self.aborted += other.aborted;
        self.showdowns += other.showdowns;
        self.early_finishes += other.early_finishes;
        self.split_pots += other.split_pots;
        self.total_pot += other.total_pot;

        for (id, wins) in other.wins {
            *self.wins.entry(id).or_default() += wins;
        }

        for (seat, count) in other.buttons {
            *self.buttons.entry(seat).or_default() += count;
        }

        for (rank, count) in other.categories {
            *self.categories.entry(rank).or_default() += count;
        }
    }

    /// The fraction of hands decided at a showdown.
    pub fn showdown_rate(&self) -> f64 {
        ratio(self.showdowns, self.hands)
    }

    /// The fraction of hands won by the last player left.
    pub fn early_finish_rate(&self) -> f64 {
        ratio(self.early_finishes, self.hands)
    }

    /// The average pot.
    pub fn average_pot(&self) -> f64 {
        ratio(self.total_pot, self.hands)
    }

    /// The showdown wins for a category.
    pub fn category(&self, rank: HandRank) -> u64 {
        self.categories.get(&rank).copied().unwrap_or_default()
    }
}

fn ratio(n: u64, d: u64) -> f64 {
    if d == 0 { 0.0 } else { n as f64 / d as f64 }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hands:           {}", self.hands)?;
        writeln!(f, "Aborted:         {}", self.aborted)?;
        writeln!(f, "Showdowns:       {:.2}%", self.showdown_rate() * 100.0)?;
        writeln!(f, "Early finishes:  {:.2}%", self.early_finish_rate() * 100.0)?;
        writeln!(f, "Split pots:      {}", self.split_pots)?;
        writeln!(f, "Average pot:     {:.2}", self.average_pot())?;

        writeln!(f, "\nWins")?;
        for (id, wins) in &self.wins {
            let label = format!("Player {id}:");
            writeln!(f, "{label:<17}{wins} ({:.2}%)", ratio(*wins, self.hands) * 100.0)?;
        }

        writeln!(f, "\nButtons")?;
        for (seat, count) in &self.buttons {
            let label = format!("Seat {seat}:");
            writeln!(f, "{label:<17}{count}")?;
        }

        writeln!(f, "\nShowdown hands")?;
        for rank in HandRank::ranks() {
            let count = self.category(rank);
            let label = format!("{rank}:");
            writeln!(
                f,
                "{label:<17}{count} ({:.2}%)",
                ratio(count, self.showdowns) * 100.0
            )?;
        }

        Ok(())
    }
}

/// Plays `config.hands` independent hands split across `tasks` threads.
///
/// Each hand runs on its own table with a seed derived from the session seed
/// and the hand number, so the stats don't depend on the number of tasks. The
/// starting button rotates with the hand number so every seat gets the same
/// share of positions.
pub fn run_stats(config: &SimConfig, tasks: usize) -> Result<Stats> {
    ensure!(tasks > 0, "need at least one task");
    config.game.validate()?;

    let seed = config.seed();
    info!(
        "Running {} hands with {tasks} tasks and seed {seed}",
        config.hands
    );

    let results = thread::scope(|s| {
        let handles = (0..tasks)
            .map(|task_id| s.spawn(move || run_task(config, seed, task_id, tasks)))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    });

    let mut stats = Stats::default();
    for res in results {
        let task_stats = res.map_err(|_| anyhow!("stats task panicked"))?;
        stats.merge(task_stats);
    }

    info!("Completed {} hands", stats.hands + stats.aborted);
    Ok(stats)
}

fn run_task(config: &SimConfig, seed: u64, task_id: usize, tasks: usize) -> Stats {
    let mut stats = Stats::default();
    let progress = (config.hands / 10).max(1);

    for hand in (0..config.hands).skip(task_id).step_by(tasks) {
        match play_one(config, hand, hand_seed(seed, hand)) {
            Ok(result) => stats.record(&result),
            Err(e) => {
                stats.aborted += 1;
                warn!("Hand {hand} failed: {e}");
            }
        }

        if (hand + 1) % progress == 0 {
            info!("Task {task_id} reached hand {}", hand + 1);
        }
    }

    stats
}

fn play_one(config: &SimConfig, hand: u64, seed: u64) -> Result<HandResult, GameError> {
    let mut game = Game::new(&config.game, StdRng::seed_from_u64(seed))?;
    for _ in 0..hand % config.game.players as u64 {
        game.move_button()?;
    }

    let mut strategy = RandomStrategy::seed_from_u64(!seed);
    game.play_hand(&config.limits, &mut strategy, &mut ())
}

fn hand_seed(seed: u64, hand: u64) -> u64 {
    seed ^ hand.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15)
}
