// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pineapple Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pineapple_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "Td".parse().unwrap();
//! assert!(ah > td);
//! ```
//!
//! the canonical [Deck] where each card has a fixed index, a [DrawOrder] used
//! to deal cards from a shuffled deck, and a [CardSet] to track which cards have
//! been seen on the table.
//!
//! To shuffle the deck and deal cards skipping the ones already visible:
//!
//! ```
//! # use pineapple_cards::{CardSet, DrawOrder};
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut order = DrawOrder::shuffled(&mut rng);
//! let mut visible = CardSet::default();
//!
//! let card = order.draw(&visible);
//! visible.insert(card);
//! assert_eq!(visible.len(), 1);
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use pineapple_cards::Deck;
//! let mut counter = 0;
//! Deck::for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardSet, Deck, DrawOrder, ParseCardError, Rank, Suit};
