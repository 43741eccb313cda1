// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Incremental hand classifier.
//!
//! A [Hand] holds up to 5 cards sorted from the strongest to the weakest, each
//! insertion recomputes the hand category, the cards that make the combo and
//! the kickers. With at most 5 cards a full recomputation is cheaper than
//! tracking deltas, and it keeps the hand a small `Copy` value that can be
//! cloned millions of times by simulations.
use pineapple_cards::{Card, Rank, Suit};
use std::{cmp::Ordering, fmt};

use crate::ComboType;

/// A fixed capacity list of cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Cards {
    cards: [Card; Hand::MAX_CARDS],
    len: u8,
}

impl Cards {
    const FILLER: Card = Card::new(Rank::Deuce, Suit::Diamonds);

    const fn new() -> Self {
        Self {
            cards: [Self::FILLER; Hand::MAX_CARDS],
            len: 0,
        }
    }

    #[inline]
    fn as_slice(&self) -> &[Card] {
        &self.cards[..self.len as usize]
    }

    #[inline]
    fn push(&mut self, card: Card) {
        self.cards[self.len as usize] = card;
        self.len += 1;
    }

    #[inline]
    fn clear(&mut self) {
        self.len = 0;
    }
}

/// A Poker hand with at most 5 cards.
#[derive(Clone, Copy)]
pub struct Hand {
    cards: Cards,
    combo_type: ComboType,
    combo: Cards,
    kickers: Cards,
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Hand {
    /// The maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 5;

    /// Creates an empty hand.
    pub const fn new() -> Self {
        Self {
            cards: Cards::new(),
            combo_type: ComboType::HighCard,
            combo: Cards::new(),
            kickers: Cards::new(),
        }
    }

    /// Creates a hand with the given cards.
    ///
    /// Panics if there are more than 5 cards.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.insert(*card);
        }
        hand
    }

    /// Inserts a card keeping the cards sorted and classifies the hand.
    ///
    /// Panics if the hand is full.
    pub fn insert(&mut self, card: Card) {
        let len = self.cards.len as usize;
        assert!(len < Self::MAX_CARDS, "Hand is full");

        // Shift right from the first weaker card.
        let pos = self.cards.as_slice().iter().position(|c| *c < card);
        let pos = pos.unwrap_or(len);
        self.cards.cards.copy_within(pos..len, pos + 1);
        self.cards.cards[pos] = card;
        self.cards.len += 1;

        self.classify();
    }

    /// The hand cards from the strongest to the weakest.
    ///
    /// For a wheel straight (A 5 4 3 2) the Ace is the last card.
    pub fn cards(&self) -> &[Card] {
        self.cards.as_slice()
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len as usize
    }

    /// Checks if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.len == 0
    }

    /// The hand category.
    pub fn combo_type(&self) -> ComboType {
        self.combo_type
    }

    /// The cards that make the hand category.
    pub fn combo_cards(&self) -> &[Card] {
        self.combo.as_slice()
    }

    /// The cards that are not part of the combo.
    pub fn kickers(&self) -> &[Card] {
        self.kickers.as_slice()
    }

    /// Compares this hand strength with another hand.
    ///
    /// Compares categories first, then the combo cards values position by
    /// position and last the kickers values. Suits never break a tie.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.combo_type
            .cmp(&other.combo_type)
            .then_with(|| compare_values(self.combo_cards(), other.combo_cards()))
            .then_with(|| compare_values(self.kickers(), other.kickers()))
    }

    fn classify(&mut self) {
        let len = self.len();

        let has_flush = len == 5 && {
            let suit = self.cards.cards[0].suit_id();
            self.cards().iter().all(|c| c.suit_id() == suit)
        };

        let has_straight = len == 5 && {
            let values = self.cards().iter().map(Card::value);
            if values.eq([14, 5, 4, 3, 2]) {
                // The wheel, the Ace plays as the lowest card.
                self.cards.cards.rotate_left(1);
                true
            } else {
                self.cards()
                    .windows(2)
                    .all(|w| w[0].value() == w[1].value() + 1)
            }
        };

        let mut counts = [0u8; 15];
        for card in self.cards() {
            counts[card.value() as usize] += 1;
        }

        let count_of = |n: u8| counts.iter().filter(|&&c| c == n).count();
        let (pairs, triples, quads) = (count_of(2), count_of(3), count_of(4));

        self.combo_type = if len >= 5 && has_flush && has_straight {
            if self.cards.cards[0].rank() == Rank::Ace {
                ComboType::RoyalFlush
            } else {
                ComboType::StraightFlush
            }
        } else if len >= 4 && quads == 1 {
            ComboType::FourOfAKind
        } else if len >= 5 && triples == 1 && pairs == 1 {
            ComboType::FullHouse
        } else if len >= 5 && has_flush {
            ComboType::Flush
        } else if len >= 5 && has_straight {
            ComboType::Straight
        } else if len >= 3 && triples == 1 {
            ComboType::ThreeOfAKind
        } else if len >= 4 && pairs == 2 {
            ComboType::TwoPair
        } else if len >= 2 && pairs == 1 {
            ComboType::Pair
        } else {
            ComboType::HighCard
        };

        self.combo.clear();
        self.kickers.clear();

        let count = |card: &Card| counts[card.value() as usize];
        match self.combo_type {
            ComboType::FullHouse => {
                // Triple first, then the pair.
                for n in [3, 2] {
                    for card in self.cards.as_slice().iter().filter(|c| count(*c) == n) {
                        self.combo.push(*card);
                    }
                }
            }
            ComboType::FourOfAKind => self.split(|c| count(c) == 4),
            ComboType::ThreeOfAKind => self.split(|c| count(c) == 3),
            ComboType::TwoPair | ComboType::Pair => self.split(|c| count(c) == 2),
            _ => self.combo = self.cards,
        }
    }

    /// Splits the cards into combo cards and kickers keeping the hand order.
    fn split<F>(&mut self, in_combo: F)
    where
        F: Fn(&Card) -> bool,
    {
        for card in self.cards.as_slice() {
            if in_combo(card) {
                self.combo.push(*card);
            } else {
                self.kickers.push(*card);
            }
        }
    }
}

fn compare_values(a: &[Card], b: &[Card]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(a, b)| a.value().cmp(&b.value()))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Hands are equal when they have the same strength.
impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}

impl Eq for Hand {}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct CardsList<'a>(&'a [Card]);

impl fmt::Display for CardsList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.combo_type, CardsList(self.combo_cards()))?;
        if !self.kickers().is_empty() {
            write!(f, " kickers {}", CardsList(self.kickers()))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}
