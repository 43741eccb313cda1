// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pineapple OFC Poker simulator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;

use pineapple_bot::{Config, MonteCarlo, PlayerKind};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of rounds to play.
    #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,
    /// Seed for a reproducible game.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Monte Carlo playouts for each candidate placement.
    #[clap(long, default_value_t = MonteCarlo::DEFAULT_SAMPLES as u64, value_parser = clap::value_parser!(u64).range(1..))]
    samples: u64,
    /// Parallel simulation tasks, all cores if not set.
    #[clap(long, short, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: Option<u16>,
    /// The players strategies, one for each seat.
    #[clap(long, short, value_enum, num_args = 1..=3, default_values_t = [PlayerKind::Heuristic, PlayerKind::Random, PlayerKind::Random])]
    players: Vec<PlayerKind>,
    /// Log each turn.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let tasks = cli.tasks.map(usize::from).unwrap_or_else(|| {
        std::thread::available_parallelism().map_or(1, |n| n.get())
    });

    let config = Config {
        rounds: cli.rounds as usize,
        seed: cli.seed,
        samples: cli.samples as usize,
        tasks,
        players: cli.players,
    };

    if let Err(e) = pineapple_bot::run(&config) {
        error!("{e}");
    }
}
