// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::error;
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use rhode_core::{Chips, GameConfig, HandLimits};
use rhode_sim::SimConfig;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Write the log to this file instead of stderr.
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plays hands at one table until a player has all the chips.
    Play {
        #[command(flatten)]
        game: GameArgs,
        /// The maximum number of hands.
        #[clap(long, default_value_t = 1000)]
        hands: u64,
        /// Append the session history tree to this file.
        #[clap(long)]
        history: Option<PathBuf>,
    },
    /// Plays independent hands in parallel and prints statistics.
    Stats {
        #[command(flatten)]
        game: GameArgs,
        /// The number of hands.
        #[clap(long, default_value_t = 100_000)]
        hands: u64,
        /// The number of parallel tasks.
        #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
    /// Prints the history trees stored in a file.
    Replay {
        /// The history file.
        path: PathBuf,
    },
}

#[derive(Debug, Args)]
struct GameArgs {
    /// Number of players.
    #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Number of seats, the number of players if not set.
    #[clap(long)]
    seats: Option<u8>,
    /// The players starting chips.
    #[clap(long, default_value_t = 200)]
    stack: u32,
    /// The ante.
    #[clap(long, default_value_t = 1)]
    ante: u32,
    /// The preflop raise amount.
    #[clap(long, default_value_t = 2)]
    preflop_limit: u32,
    /// The flop raise amount.
    #[clap(long, default_value_t = 4)]
    flop_limit: u32,
    /// The turn raise amount.
    #[clap(long, default_value_t = 4)]
    turn_limit: u32,
    /// The random seed.
    #[clap(long)]
    seed: Option<u64>,
}

impl GameArgs {
    fn into_config(self, hands: u64) -> SimConfig {
        SimConfig {
            game: GameConfig {
                players: self.players as usize,
                seats: self.seats.unwrap_or(self.players) as usize,
                start_stack: Chips::new(self.stack),
            },
            limits: HandLimits {
                ante: Chips::new(self.ante),
                preflop: Chips::new(self.preflop_limit),
                flop: Chips::new(self.flop_limit),
                turn: Chips::new(self.turn_limit),
            },
            hands,
            seed: self.seed,
        }
    }
}

fn init_logger(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::builder();
    builder
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env();

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Play {
            game,
            hands,
            history,
        } => {
            let config = game.into_config(hands);
            let summary = rhode_sim::play(&config, history.as_deref())?;
            print!("{summary}");
        }
        Command::Stats { game, hands, tasks } => {
            let config = game.into_config(hands);
            let stats = rhode_sim::run_stats(&config, tasks as usize)?;
            print!("{stats}");
        }
        Command::Replay { path } => {
            for (idx, tree) in rhode_sim::replay(&path)?.iter().enumerate() {
                println!("Tree {}:", idx + 1);
                print!("{tree}");
                println!("\n{}\n", "-".repeat(50));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.log_file.as_deref()) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
