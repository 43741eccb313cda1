// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pineapple rows, placements and bonus rules.
use log::warn;
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};
use thiserror::Error;

use pineapple_eval::{ComboType, Hand};

/// One of the three hands of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    /// The 3 cards top hand.
    Top,
    /// The 5 cards middle hand.
    Middle,
    /// The 5 cards bottom hand.
    Bottom,
}

impl Row {
    /// All rows from top to bottom.
    pub const ALL: [Row; 3] = [Row::Top, Row::Middle, Row::Bottom];

    /// The number of cards the row holds when complete.
    pub const fn capacity(self) -> usize {
        match self {
            Row::Top => 3,
            Row::Middle | Row::Bottom => 5,
        }
    }

    /// The row position from the top.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Row::Top => "top",
            Row::Middle => "middle",
            Row::Bottom => "bottom",
        };

        write!(f, "{name}")
    }
}

/// Where a dealt card goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Place the card in the top row.
    Top,
    /// Place the card in the middle row.
    Middle,
    /// Place the card in the bottom row.
    Bottom,
    /// Discard the card face down.
    Discard,
}

impl Slot {
    /// All slots in enumeration order.
    pub const ALL: [Slot; 4] = [Slot::Top, Slot::Middle, Slot::Bottom, Slot::Discard];

    /// The slot digit, 0 for top up to 3 for discard.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The row this slot places a card into, `None` for a discard.
    pub const fn row(self) -> Option<Row> {
        match self {
            Slot::Top => Some(Row::Top),
            Slot::Middle => Some(Row::Middle),
            Slot::Bottom => Some(Row::Bottom),
            Slot::Discard => None,
        }
    }

    const fn token(self) -> char {
        match self {
            Slot::Top => 't',
            Slot::Middle => 'm',
            Slot::Bottom => 'b',
            Slot::Discard => 'd',
        }
    }
}

impl From<Row> for Slot {
    fn from(row: Row) -> Self {
        match row {
            Row::Top => Slot::Top,
            Row::Middle => Slot::Middle,
            Row::Bottom => Slot::Bottom,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row() {
            Some(row) => write!(f, "{row}"),
            None => write!(f, "discard"),
        }
    }
}

/// Error returned when parsing an unknown slot token.
#[derive(Debug, Error)]
#[error("unknown slot {0:?}")]
pub struct ParseSlotError(String);

impl FromStr for Slot {
    type Err = ParseSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "t" | "top" => Ok(Slot::Top),
            "1" | "m" | "middle" => Ok(Slot::Middle),
            "2" | "b" | "bottom" => Ok(Slot::Bottom),
            "3" | "d" | "discard" => Ok(Slot::Discard),
            _ => Err(ParseSlotError(s.to_string())),
        }
    }
}

/// A slot for each dealt card, in dealing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Placement(Vec<Slot>);

impl Placement {
    /// The placement slots.
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cards sent to the given slot.
    pub fn count(&self, slot: Slot) -> usize {
        self.0.iter().filter(|s| **s == slot).count()
    }
}

impl From<Vec<Slot>> for Placement {
    fn from(slots: Vec<Slot>) -> Self {
        Self(slots)
    }
}

impl FromIterator<Slot> for Placement {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses whitespace separated slot tokens.
///
/// Unknown tokens are logged and skipped, the resulting placement is then
/// shorter than the deal and the round rejects it.
impl FromStr for Placement {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split_whitespace()
            .filter_map(|token| match token.parse::<Slot>() {
                Ok(slot) => Some(slot),
                Err(err) => {
                    warn!("Skipping placement token: {err}");
                    None
                }
            })
            .collect())
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, slot) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", slot.token())?;
        }
        Ok(())
    }
}

/// Minimum top bonus to enter Fantasy Land (a pair of queens).
pub const ENTER_FANTASY_TOP: i32 = 7;

/// Minimum top bonus to stay in Fantasy Land (trips).
pub const STAY_FANTASY_TOP: i32 = 10;

/// Minimum middle bonus to stay in Fantasy Land (a full house).
pub const STAY_FANTASY_MIDDLE: i32 = 12;

/// Minimum bottom bonus to stay in Fantasy Land (four of a kind).
pub const STAY_FANTASY_BOTTOM: i32 = 10;

/// Returns the royalties for a hand played in a row.
///
/// The top row pays pairs from sixes (1) up to aces (9) and trips from
/// deuces (10) up to aces (22), the middle and bottom rows pay by category.
pub fn bonus(hand: &Hand, row: Row) -> i32 {
    match row {
        Row::Top => {
            let value = hand.combo_cards().first().map(|c| c.value() as i32);
            match (hand.combo_type(), value) {
                (ComboType::Pair, Some(v)) if v >= 6 => v - 5,
                (ComboType::ThreeOfAKind, Some(v)) => v + 8,
                _ => 0,
            }
        }
        Row::Middle => match hand.combo_type() {
            ComboType::RoyalFlush => 50,
            ComboType::StraightFlush => 30,
            ComboType::FourOfAKind => 20,
            ComboType::FullHouse => 12,
            ComboType::Flush => 8,
            ComboType::Straight => 4,
            ComboType::ThreeOfAKind => 2,
            _ => 0,
        },
        Row::Bottom => match hand.combo_type() {
            ComboType::RoyalFlush => 25,
            ComboType::StraightFlush => 15,
            ComboType::FourOfAKind => 10,
            ComboType::FullHouse => 6,
            ComboType::Flush => 4,
            ComboType::Straight => 2,
            _ => 0,
        },
    }
}

/// Checks if the rows are out of order, rows with no cards are not compared.
///
/// Round scoring only checks complete boards.
pub fn is_fouled(top: &Hand, middle: &Hand, bottom: &Hand) -> bool {
    let beats = |a: &Hand, b: &Hand| !a.is_empty() && !b.is_empty() && a > b;
    beats(top, middle) || beats(middle, bottom)
}

/// Checks if a regular board qualifies for Fantasy Land.
pub fn enters_fantasy(bonuses: &[i32; 3]) -> bool {
    bonuses[Row::Top.index()] >= ENTER_FANTASY_TOP
}

/// Checks if a Fantasy Land board plays another Fantasy Land round.
pub fn stays_in_fantasy(bonuses: &[i32; 3]) -> bool {
    bonuses[Row::Top.index()] >= STAY_FANTASY_TOP
        || bonuses[Row::Middle.index()] >= STAY_FANTASY_MIDDLE
        || bonuses[Row::Bottom.index()] >= STAY_FANTASY_BOTTOM
}
