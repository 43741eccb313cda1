// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player board with the top, middle and bottom hands.
use std::{cmp::Ordering, fmt};

use pineapple_eval::{Card, Hand};

use crate::rules::{self, Row};

/// The three rows of a player.
#[derive(Debug, Clone, Copy, Default)]
pub struct Board {
    rows: [Hand; 3],
}

impl Board {
    /// The number of cards of a complete board.
    pub const CARDS: usize = 13;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hand in the given row.
    pub fn row(&self, row: Row) -> &Hand {
        &self.rows[row.index()]
    }

    /// The top hand.
    pub fn top(&self) -> &Hand {
        self.row(Row::Top)
    }

    /// The middle hand.
    pub fn middle(&self) -> &Hand {
        self.row(Row::Middle)
    }

    /// The bottom hand.
    pub fn bottom(&self) -> &Hand {
        self.row(Row::Bottom)
    }

    /// Free slots left in a row.
    pub fn open(&self, row: Row) -> usize {
        row.capacity() - self.row(row).len()
    }

    /// Places a card in a row.
    ///
    /// Panics if the row is full.
    pub fn place(&mut self, card: Card, row: Row) {
        assert!(self.open(row) > 0, "The {row} row is full");
        self.rows[row.index()].insert(card);
    }

    /// Number of cards on the board.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Hand::len).sum()
    }

    /// Checks if the board has no cards.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Hand::is_empty)
    }

    /// Checks if all rows are complete.
    pub fn is_complete(&self) -> bool {
        self.len() == Self::CARDS
    }

    /// Checks if the rows are out of order.
    pub fn is_fouled(&self) -> bool {
        rules::is_fouled(self.top(), self.middle(), self.bottom())
    }

    /// The bonus of each row, all zeros for a fouled board.
    pub fn bonuses(&self) -> [i32; 3] {
        if self.is_fouled() {
            [0; 3]
        } else {
            Row::ALL.map(|row| rules::bonus(self.row(row), row))
        }
    }

    /// Head to head score of this board against another board.
    ///
    /// Each row scores one point to the winner plus the bonus differential, a
    /// fouled board loses all its rows and two fouled boards tie. Winning all
    /// three rows by comparison scores 3 more points. The score of `other`
    /// against this board is the negation.
    ///
    /// Both boards must be complete.
    pub fn score(&self, other: &Board) -> i32 {
        debug_assert!(
            self.is_complete() && other.is_complete(),
            "Scoring incomplete boards"
        );

        let (fouled, other_fouled) = (self.is_fouled(), other.is_fouled());
        let (bonuses, other_bonuses) = (self.bonuses(), other.bonuses());

        let mut score = 0;
        let mut wins = [0; 2];
        for row in Row::ALL {
            let outcome = match (fouled, other_fouled) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => {
                    let o = self.row(row).compare(other.row(row));
                    match o {
                        Ordering::Greater => wins[0] += 1,
                        Ordering::Less => wins[1] += 1,
                        Ordering::Equal => {}
                    }
                    o
                }
            };

            score += outcome as i32;
            score += bonuses[row.index()] - other_bonuses[row.index()];
        }

        if wins[0] == Row::ALL.len() {
            score += 3;
        } else if wins[1] == Row::ALL.len() {
            score -= 3;
        }

        score
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top: {} middle: {} bottom: {}",
            self.top(),
            self.middle(),
            self.bottom()
        )
    }
}
