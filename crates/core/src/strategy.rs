// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players decision seam.
use rand::rngs::SmallRng;
use std::collections::VecDeque;

use pineapple_eval::Card;

use crate::{round::Round, rules::Placement};

/// A placement strategy.
pub trait Strategy {
    /// Returns a slot for each one of the `dealt` cards of player at `seat`.
    ///
    /// The round is the state visible when the cards are dealt, a strategy
    /// that returns an illegal placement is asked again.
    fn place(
        &mut self,
        dealt: &[Card],
        seat: usize,
        round: &Round,
        rng: &mut SmallRng,
    ) -> Placement;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn place(
        &mut self,
        dealt: &[Card],
        seat: usize,
        round: &Round,
        rng: &mut SmallRng,
    ) -> Placement {
        (**self).place(dealt, seat, round, rng)
    }
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn place(
        &mut self,
        dealt: &[Card],
        seat: usize,
        round: &Round,
        rng: &mut SmallRng,
    ) -> Placement {
        (**self).place(dealt, seat, round, rng)
    }
}

/// A strategy that replays prerecorded placements.
///
/// Each placement is in the text form accepted by [Placement], for example
/// `"0 1 2 2 1"` or `"t b d"`.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    placements: VecDeque<Placement>,
}

impl Scripted {
    /// Creates a strategy that plays the given lines in order.
    pub fn new<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let placements = lines
            .into_iter()
            .map(|line| {
                let Ok(placement) = line.parse::<Placement>();
                placement
            })
            .collect();

        Self { placements }
    }

    /// Number of placements left to play.
    pub fn remaining(&self) -> usize {
        self.placements.len()
    }
}

impl Strategy for Scripted {
    fn place(&mut self, dealt: &[Card], seat: usize, _: &Round, _: &mut SmallRng) -> Placement {
        match self.placements.pop_front() {
            Some(placement) => placement,
            None => panic!("No scripted placement left for seat {seat} dealt {dealt:?}"),
        }
    }
}
