// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shuffled dealing and visible cards tracking.
use rand::Rng;
use std::fmt;

use super::{Card, Deck};

/// A set of cards backed by a 52 bits mask keyed by the card index.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    /// Adds a card to the set, returns false if the card was already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Checks if the set contains a card.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.index()) != 0
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the set cards in canonical deck order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        Deck::CARDS.into_iter().filter(|card| self.contains(*card))
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::default();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A permutation of the canonical deck indices consumed through a cursor.
///
/// The order is generated once when a round starts and the deck itself is
/// never touched, each draw returns the card at the cursor and advances it.
#[derive(Clone)]
pub struct DrawOrder {
    order: [u8; Deck::SIZE],
    cursor: usize,
}

impl DrawOrder {
    /// Creates an unshuffled order that deals cards in canonical order.
    pub fn sorted() -> Self {
        let mut order = [0u8; Deck::SIZE];
        for (idx, pos) in order.iter_mut().enumerate() {
            *pos = idx as u8;
        }

        Self { order, cursor: 0 }
    }

    /// Creates a new shuffled order.
    ///
    /// Uses the Fisher-Yates shuffle: going from the last position down to the
    /// second, each position is swapped with a uniformly chosen position at or
    /// before it.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut draw = Self::sorted();
        for i in (1..Deck::SIZE).rev() {
            draw.order.swap(i, rng.random_range(0..=i));
        }

        draw
    }

    /// Deals the next card that is not in the `visible` set.
    ///
    /// Panics if the order runs out of cards.
    pub fn draw(&mut self, visible: &CardSet) -> Card {
        loop {
            assert!(self.cursor < Deck::SIZE, "Draw order exhausted");

            let card = Card::from_index(self.order[self.cursor] as usize);
            self.cursor += 1;

            if !visible.contains(card) {
                return card;
            }
        }
    }

    /// Number of positions consumed so far, including skipped ones.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Iterates the permutation from the first position.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.order.iter().map(|&idx| Card::from_index(idx as usize))
    }
}

impl fmt::Debug for DrawOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawOrder")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(101);
        let order = DrawOrder::shuffled(&mut rng);

        let cards = order.iter().collect::<AHashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);

        // Not the identity.
        assert!(order.iter().zip(Deck::CARDS).any(|(a, b)| a != b));
    }

    #[test]
    fn shuffle_is_reproducible() {
        let a = DrawOrder::shuffled(&mut SmallRng::seed_from_u64(3));
        let b = DrawOrder::shuffled(&mut SmallRng::seed_from_u64(3));
        let c = DrawOrder::shuffled(&mut SmallRng::seed_from_u64(4));

        assert!(a.iter().eq(b.iter()));
        assert!(!a.iter().eq(c.iter()));
    }

    #[test]
    fn shuffle_is_unbiased() {
        // Each card should land in the first position about 1/52 of the time.
        let mut rng = SmallRng::seed_from_u64(11);
        let mut counts = [0usize; Deck::SIZE];
        let samples = 52_000;
        for _ in 0..samples {
            let card = DrawOrder::shuffled(&mut rng).iter().next().unwrap();
            counts[card.index()] += 1;
        }

        assert!(counts.iter().all(|&c| (700..1300).contains(&c)));
    }

    #[test]
    fn draw_skips_visible() {
        let mut order = DrawOrder::sorted();
        let mut visible = CardSet::default();
        visible.insert(Deck::CARDS[0]);
        visible.insert(Deck::CARDS[2]);

        assert_eq!(order.draw(&visible), Deck::CARDS[1]);
        assert_eq!(order.draw(&visible), Deck::CARDS[3]);
        assert_eq!(order.cursor(), 4);

        let mut drawn = 2;
        while order.cursor() < Deck::SIZE {
            order.draw(&visible);
            drawn += 1;
        }
        assert_eq!(drawn, Deck::SIZE - visible.len());
    }

    #[test]
    #[should_panic(expected = "Draw order exhausted")]
    fn draw_past_end() {
        let mut order = DrawOrder::sorted();
        let visible = CardSet::default();
        for _ in 0..=Deck::SIZE {
            order.draw(&visible);
        }
    }

    #[test]
    fn card_set() {
        let mut set = CardSet::default();
        assert!(set.is_empty());

        let ks: Card = "Ks".parse().unwrap();
        let td: Card = "Td".parse().unwrap();
        assert!(set.insert(td));
        assert!(set.insert(ks));
        assert!(!set.insert(ks));

        assert_eq!(set.len(), 2);
        assert!(set.contains(ks));
        assert!(!set.contains("2d".parse().unwrap()));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![ks, td]);

        let other = [td, ks].into_iter().collect::<CardSet>();
        assert_eq!(set, other);
    }
}
