// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo placement search.
use log::debug;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::thread;

use pineapple_core::{
    eval::Card,
    placements::Placements,
    round::Round,
    rules::Placement,
    strategy::Strategy,
};

use crate::{heuristic, random::RandomStrategy};

/// A strategy that scores every legal placement by simulating the rest of the
/// round with random players.
///
/// For each candidate placement the visible state of the round is copied with
/// a new shuffled deck, the candidate is applied, and the round is played to
/// the end by random players. A playout is worth the share of the points of
/// the deciding seat after shifting all scores so that the lowest is zero, and
/// the candidate with the best average wins.
#[derive(Debug, Clone)]
pub struct MonteCarlo {
    samples: usize,
    tasks: usize,
    heuristic_opening: bool,
}

impl Default for MonteCarlo {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SAMPLES)
    }
}

impl MonteCarlo {
    /// Default number of playouts for each candidate.
    pub const DEFAULT_SAMPLES: usize = 10_000;

    /// Creates a search with `samples` playouts for each candidate placement.
    ///
    /// The search runs on all available cores.
    pub fn new(samples: usize) -> Self {
        let tasks = thread::available_parallelism().map_or(1, |n| n.get());
        Self {
            samples: samples.max(1),
            tasks,
            heuristic_opening: false,
        }
    }

    /// Sets the number of parallel simulation tasks.
    pub fn with_tasks(mut self, tasks: usize) -> Self {
        self.tasks = tasks.max(1);
        self
    }

    /// Places the first turn cards with heuristics instead of simulations.
    pub fn with_heuristic_opening(mut self, enabled: bool) -> Self {
        self.heuristic_opening = enabled;
        self
    }

    /// Scores every legal placement of the dealt cards in enumeration order.
    ///
    /// Each candidate gets its own generator seeded from `rng` before any
    /// task starts, so the scores don't depend on the number of tasks.
    pub fn evaluate(
        &self,
        dealt: &[Card],
        seat: usize,
        round: &Round,
        rng: &mut SmallRng,
    ) -> Vec<(Placement, f64)> {
        let candidates = Placements::new(dealt.len(), round.limits(seat)).collect::<Vec<_>>();
        let seeds = candidates.iter().map(|_| rng.random()).collect::<Vec<u64>>();
        let mut scores = vec![0.0; candidates.len()];

        let per_task = candidates.len().div_ceil(self.tasks).max(1);
        thread::scope(|s| {
            for ((candidates, seeds), scores) in candidates
                .chunks(per_task)
                .zip(seeds.chunks(per_task))
                .zip(scores.chunks_mut(per_task))
            {
                s.spawn(move || {
                    for ((candidate, seed), score) in candidates.iter().zip(seeds).zip(scores) {
                        *score = self.playouts(candidate, *seed, dealt, seat, round);
                    }
                });
            }
        });

        candidates.into_iter().zip(scores).collect()
    }

    fn playouts(
        &self,
        candidate: &Placement,
        seed: u64,
        dealt: &[Card],
        seat: usize,
        round: &Round,
    ) -> f64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut players = vec![RandomStrategy; round.seats()];

        let mut total = 0.0;
        for _ in 0..self.samples {
            let mut playout = round.visible_clone(&mut rng);
            playout.apply(seat, dealt, candidate);
            playout.finish_turn(seat + 1, &mut players, &mut rng);
            playout.play(&mut players, &mut rng);

            total += share(&playout.end_round().deltas, seat);
        }

        total / self.samples as f64
    }
}

/// The seat share of the points after shifting the lowest score to zero.
fn share(deltas: &[i32], seat: usize) -> f64 {
    let min = deltas.iter().copied().min().unwrap_or_default();
    let total = deltas.iter().map(|d| d - min).sum::<i32>();
    if total == 0 {
        0.0
    } else {
        (deltas[seat] - min) as f64 / total as f64
    }
}

impl Strategy for MonteCarlo {
    /// Panics if the round is finished.
    fn place(
        &mut self,
        dealt: &[Card],
        seat: usize,
        round: &Round,
        rng: &mut SmallRng,
    ) -> Placement {
        if self.heuristic_opening && round.turn() == 0 {
            let placement = heuristic::opening(dealt, seat, round);
            debug!("Seat {seat} heuristic placement [{placement}]");
            return placement;
        }

        let scores = self.evaluate(dealt, seat, round, rng);
        let candidates = scores.len();

        // Strictly greater keeps the first best candidate.
        let best = scores.into_iter().fold(None, |best, (placement, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((placement, score)),
        });

        match best {
            Some((placement, score)) => {
                debug!(
                    "Seat {seat} placement [{placement}] score {score:.4} from {candidates} candidates"
                );
                placement
            }
            None => RandomStrategy::placement(dealt.len(), round.limits(seat), rng),
        }
    }
}
