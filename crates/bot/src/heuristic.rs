// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! First turn heuristics.
//!
//! Monte Carlo search plays the first five cards poorly even with many
//! playouts, these rules place them from their category, suits and runs. A
//! Fantasy Land deal instead is placed by enumerating every legal placement
//! and keeping the one with the highest bonus.
use pineapple_core::{
    board::Board,
    eval::{Card, ComboType, Hand},
    placements::{Limits, Placements},
    round::Round,
    rules::{Placement, Slot},
};

/// Cards below this value are weak.
pub const WEAK_VALUE: u8 = 6;

/// Cards below this value are medium, the rest are strong.
pub const MEDIUM_VALUE: u8 = 10;

/// Returns the first turn placement for a seat.
pub fn opening(dealt: &[Card], seat: usize, round: &Round) -> Placement {
    if round.is_fantasy(seat) {
        best_bonus(dealt, round.board(seat), round.limits(seat))
    } else {
        first_five(dealt)
    }
}

/// Returns the legal placement with the highest total bonus.
///
/// A fouled board scores below any other board, the first placement in
/// enumeration order wins ties.
pub fn best_bonus(dealt: &[Card], board: &Board, limits: Limits) -> Placement {
    let mut best = None;
    let mut best_score = i32::MIN;

    for placement in Placements::new(dealt.len(), limits) {
        let mut candidate = *board;
        for (card, slot) in dealt.iter().zip(placement.slots()) {
            if let Some(row) = slot.row() {
                candidate.place(*card, row);
            }
        }

        let score = if candidate.is_fouled() {
            -1
        } else {
            candidate.bonuses().iter().sum()
        };

        if score > best_score {
            best_score = score;
            best = Some(placement);
        }
    }

    best.unwrap_or_default()
}

/// Places the first five cards of a regular seat, no card is discarded.
///
/// The rules are checked in order:
/// - straights, flushes and better go to the bottom;
/// - quads go to the bottom, the kicker to the bottom if weak, to the top
///   if medium, else to the middle;
/// - trips and two pair go to the bottom, the other cards to the top if
///   below medium, else to the middle;
/// - four suited cards, four cards in a row, three suited cards and three
///   cards in a row go to the bottom, the others as above;
/// - a pair goes to the bottom with weak cards while the bottom has less
///   than three cards, medium cards go to the top up to two cards, the rest
///   to the middle;
/// - two suited cards go to the bottom, medium cards to the top up to two
///   cards and the rest to the middle;
/// - with two suited pairs the pair with the highest card goes to the
///   bottom, the other pair to the middle and the last card to the top.
pub fn first_five(dealt: &[Card]) -> Placement {
    let hand = Hand::from_cards(dealt);

    let mut suits = [0usize; 4];
    for card in dealt {
        suits[card.suit_id() as usize] += 1;
    }

    // The first suit with most cards.
    let (max_suit, max_suited) = suits
        .iter()
        .enumerate()
        .fold((0, 0), |best, (suit, &n)| if n > best.1 { (suit, n) } else { best });

    let run = longest_run(&hand);

    let top_or_middle = |card: &Card| {
        if card.value() < MEDIUM_VALUE {
            Slot::Top
        } else {
            Slot::Middle
        }
    };

    let split = |to_bottom: &dyn Fn(&Card) -> bool| -> Placement {
        dealt
            .iter()
            .map(|c| if to_bottom(c) { Slot::Bottom } else { top_or_middle(c) })
            .collect()
    };

    let is_suited = |c: &Card| c.suit_id() as usize == max_suit;
    let in_combo = |c: &Card| hand.combo_cards().contains(c);
    let in_run = |c: &Card| run.contains(c);

    match hand.combo_type() {
        ComboType::RoyalFlush
        | ComboType::StraightFlush
        | ComboType::FullHouse
        | ComboType::Flush
        | ComboType::Straight => dealt.iter().map(|_| Slot::Bottom).collect(),
        ComboType::FourOfAKind => dealt
            .iter()
            .map(|c| {
                if in_combo(c) || c.value() < WEAK_VALUE {
                    Slot::Bottom
                } else {
                    top_or_middle(c)
                }
            })
            .collect(),
        ComboType::ThreeOfAKind | ComboType::TwoPair => split(&in_combo),
        _ if max_suited == 4 => split(&is_suited),
        _ if run.len() == 4 => split(&in_run),
        _ if max_suited == 3 => split(&is_suited),
        _ if run.len() == 3 => split(&in_run),
        ComboType::Pair => {
            let (mut bottom, mut top) = (0, 0);
            dealt
                .iter()
                .map(|c| {
                    if in_combo(c) {
                        bottom += 1;
                        Slot::Bottom
                    } else if c.value() < WEAK_VALUE && bottom < 3 {
                        bottom += 1;
                        Slot::Bottom
                    } else if c.value() < MEDIUM_VALUE && top < 2 {
                        top += 1;
                        Slot::Top
                    } else {
                        Slot::Middle
                    }
                })
                .collect()
        }
        _ => {
            let pairs = suits.iter().filter(|&&n| n >= 2).count();
            if pairs == 2 {
                two_suited_pairs(dealt, &suits)
            } else {
                let mut top = 0;
                dealt
                    .iter()
                    .map(|c| {
                        if is_suited(c) {
                            Slot::Bottom
                        } else if c.value() < MEDIUM_VALUE && top < 2 {
                            top += 1;
                            Slot::Top
                        } else {
                            Slot::Middle
                        }
                    })
                    .collect()
            }
        }
    }
}

/// The pair with the highest card to the bottom, the other to the middle.
fn two_suited_pairs(dealt: &[Card], suits: &[usize; 4]) -> Placement {
    let paired = |c: &&Card| suits[c.suit_id() as usize] == 2;

    let high_suit = dealt
        .iter()
        .filter(paired)
        .fold(None::<&Card>, |best, c| match best {
            Some(b) if b.value() >= c.value() => Some(b),
            _ => Some(c),
        })
        .map(|c| c.suit_id());

    dealt
        .iter()
        .map(|c| {
            if Some(c.suit_id()) == high_suit {
                Slot::Bottom
            } else if paired(&c) {
                Slot::Middle
            } else {
                Slot::Top
            }
        })
        .collect()
}

/// The first longest sequence of cards with consecutive values.
fn longest_run(hand: &Hand) -> &[Card] {
    let cards = hand.cards();
    let (mut start, mut len) = (0, cards.len().min(1));

    let mut run_start = 0;
    for idx in 1..=cards.len() {
        let extends = idx < cards.len() && cards[idx - 1].value() == cards[idx].value() + 1;
        if !extends {
            if idx - run_start > len {
                start = run_start;
                len = idx - run_start;
            }
            run_start = idx;
        }
    }

    &cards[start..start + len]
}
