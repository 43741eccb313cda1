// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pineapple OFC Poker bots.
//!
//! Strategies that play a [Round](pineapple_core::round::Round) on their own:
//! [RandomStrategy] places cards at random, [MonteCarlo] simulates the rest of
//! the round for every legal placement and optionally plays the first turn
//! with the [heuristic] rules. [run] plays a game between bots.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::ValueEnum;
use log::info;
use rand::{SeedableRng, rngs::SmallRng};

pub mod heuristic;
mod montecarlo;
mod random;

pub use montecarlo::MonteCarlo;
pub use random::RandomStrategy;

// Reexport core crate.
pub use pineapple_core as core;

use pineapple_core::{
    game::{Game, Player},
    round::MAX_SEATS,
};

/// The strategy of a simulated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Random placements.
    Random,
    /// Monte Carlo search on every turn.
    MonteCarlo,
    /// Heuristic first turn then Monte Carlo search.
    Heuristic,
}

/// Simulation configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of rounds to play.
    pub rounds: usize,
    /// Seed for a reproducible game, a random seed if none.
    pub seed: Option<u64>,
    /// Monte Carlo playouts for each candidate placement.
    pub samples: usize,
    /// Parallel simulation tasks for each Monte Carlo player.
    pub tasks: usize,
    /// A strategy for each seat.
    pub players: Vec<PlayerKind>,
}

static NICKNAMES: &[&str] = &["Alice", "Bob", "Carol"];

/// Plays a game between bots and returns it with the final scores.
pub fn run(config: &Config) -> Result<Game> {
    if config.players.is_empty() || config.players.len() > MAX_SEATS {
        bail!(
            "Invalid number of players {}, a game needs 1 to {MAX_SEATS} players",
            config.players.len()
        );
    }

    if config.samples == 0 {
        bail!("Monte Carlo players need at least one sample");
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("Playing {} rounds with seed {seed}", config.rounds);

    let players = config
        .players
        .iter()
        .enumerate()
        .map(|(idx, kind)| {
            let name = format!("{} ({kind:?})", NICKNAMES[idx % NICKNAMES.len()]);
            let monte_carlo = MonteCarlo::new(config.samples).with_tasks(config.tasks);
            match kind {
                PlayerKind::Random => Player::new(name, RandomStrategy),
                PlayerKind::MonteCarlo => Player::new(name, monte_carlo),
                PlayerKind::Heuristic => {
                    Player::new(name, monte_carlo.with_heuristic_opening(true))
                }
            }
        })
        .collect();

    let mut game = Game::new(players)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..config.rounds {
        game.play_round(&mut rng)?;
    }

    for player in game.players() {
        info!("{}: {} points", player.name, player.score);
    }

    Ok(game)
}
