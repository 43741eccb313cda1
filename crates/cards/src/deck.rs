// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

mod draw;
pub use draw::{CardSet, DrawOrder};

/// A Poker card.
///
/// A card is stored as its position in the canonical deck, that has the cards
/// sorted from the strongest to the weakest:
///
/// ```text
///   index = (14 - value) * 4 + (3 - suit)
///
///   As=0, Ah=1, Ac=2, Ad=3, Ks=4, ..., 2c=50, 2d=51
/// ```
///
/// so that the index is both the card identity and the key used in a [CardSet].
/// Cards order by value first and suit second, a higher index is a weaker card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self((14 - rank as u8) * 4 + (3 - suit as u8))
    }

    /// Creates a card from its index in the canonical deck.
    ///
    /// Panics if the index is not less than [Deck::SIZE].
    pub const fn from_index(index: usize) -> Card {
        assert!(index < Deck::SIZE, "card index out of range");
        Self(index as u8)
    }

    /// The card position in the canonical deck.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The card value from 2 to 14 where 14 is the Ace.
    #[inline]
    pub const fn value(&self) -> u8 {
        14 - self.0 / 4
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.value() {
            2 => Rank::Deuce,
            3 => Rank::Trey,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => panic!("Invalid card 0x{:x}", self.0),
        }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match 3 - self.0 % 4 {
            0 => Suit::Diamonds,
            1 => Suit::Clubs,
            2 => Suit::Hearts,
            3 => Suit::Spades,
            _ => unreachable!(),
        }
    }

    /// The suit id from 0 (diamonds) to 3 (spades).
    #[inline]
    pub const fn suit_id(&self) -> u8 {
        3 - self.0 % 4
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower index is the stronger card.
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error returned when parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card {0:?}, expected a rank in 23456789TJQKA and a suit in dchs")]
pub struct ParseCardError(String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());

        let mut chars = s.trim().chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };

        let rank = Rank::ranks()
            .find(|rank| rank.to_char() == r.to_ascii_uppercase())
            .ok_or_else(err)?;
        let suit = Suit::suits()
            .find(|suit| suit.to_char() == c.to_ascii_lowercase())
            .ok_or_else(err)?;

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value from 2 to 14.
    #[inline]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    fn to_char(self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 0,
    /// Clubs suit.
    Clubs = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }

    fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The canonical cards deck.
///
/// The deck is read only, cards are dealt from it through a shuffled
/// [DrawOrder].
#[derive(Debug)]
pub struct Deck;

const fn make_cards() -> [Card; Deck::SIZE] {
    let mut cards = [Card(0); Deck::SIZE];
    let mut idx = 0;
    while idx < Deck::SIZE {
        cards[idx] = Card(idx as u8);
        idx += 1;
    }

    cards
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// The deck cards from the strongest (As) to the weakest (2d).
    pub const CARDS: [Card; Deck::SIZE] = make_cards();

    /// Returns the canonical deck.
    pub fn canonical() -> &'static [Card; Deck::SIZE] {
        &Self::CARDS
    }

    /// The position of a card in the canonical deck.
    pub fn index_of(card: Card) -> usize {
        card.index()
    }

    /// Calls the `f` closure for each k-cards hand drawn from the deck.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        // Algorithm L from TAOCP 4a, c[1..=k] holds the current k-subset.
        let n = Self::SIZE;
        let mut c = vec![0usize; k + 3];
        for j in 1..=k {
            c[j] = j - 1;
        }
        c[k + 1] = n;

        let mut h = [Card(0); 5];
        loop {
            for (pos, &idx) in c[1..=k].iter().enumerate() {
                h[pos] = Self::CARDS[idx];
            }
            f(&h[..k]);

            let mut j = 1;
            while c[j] + 1 == c[j + 1] {
                c[j] = j - 1;
                j += 1;
            }

            if j > k {
                break;
            }

            c[j] += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    #[test]
    fn card_encoding() {
        let mut cards = AHashSet::default();

        for rank in Rank::ranks() {
            for suit in Suit::suits() {
                let card = Card::new(rank, suit);
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                assert_eq!(card.value(), rank.value());
                assert_eq!(card.suit_id(), suit as u8);
                assert_eq!(
                    card.index(),
                    (14 - rank.value() as usize) * 4 + (3 - suit as usize)
                );
                cards.insert(card.index());
            }
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).index(), 0);
        assert_eq!(Card::new(Rank::Deuce, Suit::Diamonds).index(), 51);
    }

    #[test]
    fn canonical_order() {
        let deck = Deck::canonical();
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(deck[1], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck[2], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deck[3], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(deck[4], Card::new(Rank::King, Suit::Spades));
        assert_eq!(deck[51], Card::new(Rank::Deuce, Suit::Diamonds));

        // Strictly descending.
        assert!(deck.windows(2).all(|w| w[0] > w[1]));

        for (idx, card) in deck.iter().enumerate() {
            assert_eq!(Deck::index_of(*card), idx);
            assert_eq!(Card::from_index(idx), *card);
        }
    }

    #[test]
    fn card_order() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let ks = Card::new(Rank::King, Suit::Spades);

        assert!(ah > ad);
        assert!(ad > ks);
        assert!(ah > ks);
        assert_eq!(ah.cmp(&ah), Ordering::Equal);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(Ah)");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::canonical() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), *card);
        }

        assert_eq!(
            "qS".parse::<Card>().unwrap(),
            Card::new(Rank::Queen, Suit::Spades)
        );
        assert!("".parse::<Card>().is_err());
        assert!("1s".parse::<Card>().is_err());
        assert!("Ax".parse::<Card>().is_err());
        assert!("Ahh".parse::<Card>().is_err());
    }

    #[test]
    fn deck_for_each() {
        let mut hands = AHashSet::default();
        Deck::for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        Deck::for_each(1, |_| count += 1);
        assert_eq!(count, Deck::SIZE);
    }

    #[test]
    fn deck_for_each_5cards() {
        let mut count = 0;
        Deck::for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }
}
