// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random placements.
use rand::{Rng, rngs::SmallRng, seq::index};

use pineapple_core::{
    eval::Card,
    placements::Limits,
    round::Round,
    rules::{Placement, Row, Slot},
    strategy::Strategy,
};

/// A strategy that places cards at random.
///
/// When the turn requires discards the discarded cards are chosen uniformly,
/// then each other card goes to a uniformly chosen row among the rows with
/// free slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// Returns a random placement for `cards` dealt cards.
    ///
    /// The placement is legal if the limits admit any legal placement.
    pub fn placement<R: Rng + ?Sized>(cards: usize, limits: Limits, rng: &mut R) -> Placement {
        let mut slots = vec![Slot::Top; cards];
        for idx in index::sample(rng, cards, limits.discards.min(cards)).iter() {
            slots[idx] = Slot::Discard;
        }

        let mut open = limits.open;
        let mut choices = [Row::Top; 3];
        for slot in slots.iter_mut().filter(|s| **s != Slot::Discard) {
            let mut count = 0;
            for row in Row::ALL {
                if open[row.index()] > 0 {
                    choices[count] = row;
                    count += 1;
                }
            }

            if count == 0 {
                // No space left, the round will reject the placement.
                break;
            }

            let row = choices[rng.random_range(0..count)];
            open[row.index()] -= 1;
            *slot = Slot::from(row);
        }

        Placement::from(slots)
    }
}

impl Strategy for RandomStrategy {
    fn place(
        &mut self,
        dealt: &[Card],
        seat: usize,
        round: &Round,
        rng: &mut SmallRng,
    ) -> Placement {
        Self::placement(dealt.len(), round.limits(seat), rng)
    }
}
