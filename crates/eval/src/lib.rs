// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pineapple Poker hand classifier.
//!
//! Classifies hands of up to 5 cards as they are built one card at a time, as
//! it happens to the rows of an Open-Face Chinese Poker board. After each
//! insertion a [Hand] knows its [ComboType], the cards that make the combo and
//! the kickers, and hands of any size can be compared:
//!
//! ```
//! # use pineapple_eval::*;
//! let mut top = Hand::new();
//! top.insert("Qs".parse().unwrap());
//! top.insert("Qh".parse().unwrap());
//! top.insert("9c".parse().unwrap());
//! assert_eq!(top.combo_type(), ComboType::Pair);
//!
//! let cards = Deck::CARDS.iter().step_by(4).take(5).copied().collect::<Vec<_>>();
//! let middle = Hand::from_cards(&cards);
//! assert_eq!(middle.combo_type(), ComboType::RoyalFlush);
//! assert!(middle > top);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod combo;
mod hand;

pub use combo::ComboType;
pub use hand::Hand;

// Reexport cards types.
pub use pineapple_cards::{Card, CardSet, Deck, DrawOrder, Rank, Suit};
