// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Legal placements enumeration.
use crate::rules::{Placement, Row, Slot};

/// The constraints a placement must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Free slots in the top, middle and bottom rows.
    pub open: [usize; 3],
    /// The exact number of cards to discard.
    pub discards: usize,
}

impl Limits {
    /// Checks if a placement for `cards` dealt cards satisfies these limits.
    pub fn allows(&self, cards: usize, placement: &Placement) -> bool {
        placement.len() == cards
            && placement.count(Slot::Discard) == self.discards
            && Row::ALL
                .iter()
                .all(|row| placement.count(Slot::from(*row)) <= self.open[row.index()])
    }
}

/// Iterator over all the legal placements of the dealt cards.
///
/// Placements are enumerated as an odometer where each dealt card is a digit
/// that cycles through the slots, the last card changes fastest and the first
/// placement is all cards to the top row. The discard slot is a digit value
/// only when the limits require discards.
#[derive(Debug, Clone)]
pub struct Placements {
    slots: Vec<Slot>,
    counts: [usize; 4],
    limits: Limits,
    radix: usize,
    done: bool,
}

impl Placements {
    /// Creates the enumeration for `cards` dealt cards.
    pub fn new(cards: usize, limits: Limits) -> Self {
        let mut counts = [0; 4];
        counts[Slot::Top.index()] = cards;

        Self {
            slots: vec![Slot::Top; cards],
            counts,
            limits,
            radix: if limits.discards > 0 { 4 } else { 3 },
            done: false,
        }
    }

    fn is_legal(&self) -> bool {
        self.counts[Slot::Discard.index()] == self.limits.discards
            && Row::ALL
                .iter()
                .all(|row| self.counts[row.index()] <= self.limits.open[row.index()])
    }

    /// Moves to the next digits combination, false when it wraps around.
    fn advance(&mut self) -> bool {
        for slot in self.slots.iter_mut().rev() {
            let digit = slot.index();
            self.counts[digit] -= 1;

            if digit + 1 < self.radix {
                *slot = Slot::ALL[digit + 1];
                self.counts[digit + 1] += 1;
                return true;
            }

            // Carry to the previous card.
            *slot = Slot::Top;
            self.counts[Slot::Top.index()] += 1;
        }

        false
    }
}

impl Iterator for Placements {
    type Item = Placement;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let placement = self
                .is_legal()
                .then(|| Placement::from(self.slots.clone()));

            self.done = !self.advance();

            if placement.is_some() {
                return placement;
            }
        }

        None
    }
}
