// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// The category of a hand.
///
/// The ranking between categories is given by [ComboType::strength] and not by
/// the variants declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComboType {
    /// Royal flush.
    RoyalFlush,
    /// Straight flush.
    StraightFlush,
    /// Four of a kind.
    FourOfAKind,
    /// Full house.
    FullHouse,
    /// Flush.
    Flush,
    /// Straight.
    Straight,
    /// Three of a kind.
    ThreeOfAKind,
    /// Two pair.
    TwoPair,
    /// Pair.
    Pair,
    /// High card.
    HighCard,
}

impl ComboType {
    /// Returns all categories from the strongest to the weakest.
    pub fn all() -> impl DoubleEndedIterator<Item = ComboType> {
        use ComboType::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            Pair,
            HighCard,
        ]
        .into_iter()
    }

    /// The category strength, a higher value is a stronger category.
    pub const fn strength(self) -> u8 {
        match self {
            ComboType::HighCard => 0,
            ComboType::Pair => 1,
            ComboType::TwoPair => 2,
            ComboType::ThreeOfAKind => 3,
            ComboType::Straight => 4,
            ComboType::Flush => 5,
            ComboType::FullHouse => 6,
            ComboType::FourOfAKind => 7,
            ComboType::StraightFlush => 8,
            ComboType::RoyalFlush => 9,
        }
    }

    /// Categories where every card is part of the combo.
    pub const fn is_whole_hand(self) -> bool {
        matches!(
            self,
            ComboType::RoyalFlush
                | ComboType::StraightFlush
                | ComboType::Flush
                | ComboType::Straight
                | ComboType::HighCard
        )
    }
}

impl Ord for ComboType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl PartialOrd for ComboType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ComboType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComboType::RoyalFlush => "Royal Flush",
            ComboType::StraightFlush => "Straight Flush",
            ComboType::FourOfAKind => "Four of a Kind",
            ComboType::FullHouse => "Full House",
            ComboType::Flush => "Flush",
            ComboType::Straight => "Straight",
            ComboType::ThreeOfAKind => "Three of a Kind",
            ComboType::TwoPair => "Two Pair",
            ComboType::Pair => "Pair",
            ComboType::HighCard => "High Card",
        };

        write!(f, "{name}")
    }
}
