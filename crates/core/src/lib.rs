// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pineapple Open-Face Chinese Poker rules and game loop.
//!
//! A [Round](round::Round) deals the cards, validates and applies the players
//! placements and scores the boards, a [Game](game::Game) plays rounds moving
//! the button and keeps the players scores. Players decide through the
//! [Strategy](strategy::Strategy) trait:
//!
//! ```
//! # use pineapple_core::{placements::Placements, round::Round, rules::Placement};
//! # use pineapple_core::strategy::Strategy;
//! # use pineapple_eval::Card;
//! # use rand::{SeedableRng, rngs::SmallRng};
//! struct FirstLegal;
//!
//! impl Strategy for FirstLegal {
//!     fn place(&mut self, dealt: &[Card], seat: usize, round: &Round, _: &mut SmallRng) -> Placement {
//!         Placements::new(dealt.len(), round.limits(seat)).next().unwrap()
//!     }
//! }
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut round = Round::new(&[false, false], &mut rng).unwrap();
//! round.play(&mut [FirstLegal, FirstLegal], &mut rng);
//!
//! let outcome = round.end_round();
//! assert_eq!(outcome.deltas.iter().sum::<i32>(), 0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod board;
pub mod game;
pub mod placements;
pub mod round;
pub mod rules;
pub mod strategy;

// Reexport the cards and hands crates.
pub use pineapple_cards as cards;
pub use pineapple_eval as eval;
