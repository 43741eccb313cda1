// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round state machine.
//!
//! A round deals a shuffled deck to up to three seats, five cards on the first
//! turn and three cards on the following turns, asks each seat strategy where
//! to place the cards and, when all boards are complete, scores every pair of
//! boards. Seats in Fantasy Land get fourteen cards on the first turn, place
//! thirteen of them and sit out the other turns.
use anyhow::{Result, bail};
use log::{debug, warn};
use rand::{Rng, rngs::SmallRng};
use thiserror::Error;

use pineapple_eval::{Card, CardSet, Deck, DrawOrder};

use crate::{
    board::Board,
    placements::Limits,
    rules::{self, Placement, Row, Slot},
    strategy::Strategy,
};

/// The maximum number of seats at a table.
pub const MAX_SEATS: usize = 3;

/// Cards dealt to a regular seat on the first turn.
pub const FIRST_TURN_CARDS: usize = 5;

/// Cards dealt to a regular seat after the first turn.
pub const TURN_CARDS: usize = 3;

/// Cards dealt to a Fantasy Land seat.
pub const FANTASY_CARDS: usize = 14;

/// A placement that breaks the round rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IllegalPlacement {
    /// The placement doesn't have a slot for each dealt card.
    #[error("expected {expected} slots got {got}")]
    Length {
        /// Number of dealt cards.
        expected: usize,
        /// Number of slots in the placement.
        got: usize,
    },
    /// Too many cards for a row.
    #[error("{placed} cards placed in the {row} row with {open} open slots")]
    RowOverflow {
        /// The overflowing row.
        row: Row,
        /// Cards placed in the row.
        placed: usize,
        /// Free slots in the row.
        open: usize,
    },
    /// Wrong number of discarded cards.
    #[error("expected {expected} discards got {got}")]
    Discards {
        /// Cards to discard this turn.
        expected: usize,
        /// Discards in the placement.
        got: usize,
    },
}

/// The round progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No cards have been dealt.
    NotStarted,
    /// Turns are being dealt.
    Dealing,
    /// All boards are complete.
    Finished,
}

/// The result of a finished round, each field has a value per seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Points won or lost, they sum to zero.
    pub deltas: Vec<i32>,
    /// Seats with rows out of order.
    pub fouled: Vec<bool>,
    /// Seats that play the next round in Fantasy Land.
    pub fantasy: Vec<bool>,
    /// Top, middle and bottom bonuses.
    pub bonuses: Vec<[i32; 3]>,
}

/// A Pineapple round.
#[derive(Debug, Clone)]
pub struct Round {
    boards: Vec<Board>,
    fantasy: Vec<bool>,
    draw: DrawOrder,
    visible: CardSet,
    cards_drawn: usize,
    turn: usize,
    state: RoundState,
    logging: bool,
}

impl Round {
    /// Creates a round with a shuffled deck, a seat for each Fantasy Land flag.
    pub fn new<R: Rng + ?Sized>(fantasy: &[bool], rng: &mut R) -> Result<Self> {
        Self::with_order(fantasy, DrawOrder::shuffled(rng))
    }

    /// Creates a round that deals cards in the given order.
    pub fn with_order(fantasy: &[bool], draw: DrawOrder) -> Result<Self> {
        if fantasy.is_empty() || fantasy.len() > MAX_SEATS {
            bail!(
                "Invalid number of seats {}, a round needs 1 to {MAX_SEATS} seats",
                fantasy.len()
            );
        }

        Ok(Self {
            boards: vec![Board::new(); fantasy.len()],
            fantasy: fantasy.to_vec(),
            draw,
            visible: CardSet::default(),
            cards_drawn: 0,
            turn: 0,
            state: RoundState::NotStarted,
            logging: true,
        })
    }

    /// Copies the state visible to the players with a new shuffled deck.
    ///
    /// The copy doesn't log its turns.
    pub fn visible_clone<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            boards: self.boards.clone(),
            fantasy: self.fantasy.clone(),
            draw: DrawOrder::shuffled(rng),
            visible: self.visible,
            cards_drawn: self.cards_drawn,
            turn: self.turn,
            state: self.state,
            logging: false,
        }
    }

    /// Number of seats.
    pub fn seats(&self) -> usize {
        self.boards.len()
    }

    /// The board of a seat.
    pub fn board(&self, seat: usize) -> &Board {
        &self.boards[seat]
    }

    /// All the boards in seat order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Checks if a seat plays this round in Fantasy Land.
    pub fn is_fantasy(&self, seat: usize) -> bool {
        self.fantasy[seat]
    }

    /// The current turn, 0 for the first deal.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The round progress.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Checks if all turns have been played.
    pub fn is_finished(&self) -> bool {
        self.state == RoundState::Finished
    }

    /// The cards placed on the boards.
    pub fn visible(&self) -> &CardSet {
        &self.visible
    }

    /// Total number of cards dealt.
    pub fn cards_drawn(&self) -> usize {
        self.cards_drawn
    }

    /// Deals the first turn.
    pub fn start_round<S: Strategy>(&mut self, players: &mut [S], rng: &mut SmallRng) {
        assert_eq!(self.state, RoundState::NotStarted, "Round already started");
        self.state = RoundState::Dealing;
        self.play_turn(0, players, rng);
    }

    /// Deals the next turn to all seats.
    pub fn next_turn<S: Strategy>(&mut self, players: &mut [S], rng: &mut SmallRng) {
        assert_eq!(self.state, RoundState::Dealing, "Round is not dealing");
        self.play_turn(0, players, rng);
    }

    /// Deals the current turn to the seats from `from_seat` and closes it.
    ///
    /// Used to complete a turn after some seats have been dealt and have
    /// applied their placements, a round that has not started completes its
    /// first turn. Panics if the round is finished.
    pub fn finish_turn<S: Strategy>(
        &mut self,
        from_seat: usize,
        players: &mut [S],
        rng: &mut SmallRng,
    ) {
        assert!(!self.is_finished(), "Round is finished");
        self.state = RoundState::Dealing;
        self.play_turn(from_seat, players, rng);
    }

    /// Plays all the remaining turns.
    pub fn play<S: Strategy>(&mut self, players: &mut [S], rng: &mut SmallRng) {
        if self.state == RoundState::NotStarted {
            self.start_round(players, rng);
        }

        while self.state == RoundState::Dealing {
            self.next_turn(players, rng);
        }
    }

    /// Deals the cards for a seat in the current turn.
    ///
    /// Panics if a Fantasy Land seat is dealt after the first turn or the deck
    /// runs out of cards.
    pub fn deal(&mut self, seat: usize) -> Vec<Card> {
        let count = match (self.turn, self.fantasy[seat]) {
            (0, true) => FANTASY_CARDS,
            (0, false) => FIRST_TURN_CARDS,
            (_, true) => panic!("Fantasy Land seat {seat} dealt after the first turn"),
            (_, false) => TURN_CARDS,
        };

        self.cards_drawn += count;
        (0..count).map(|_| self.draw.draw(&self.visible)).collect()
    }

    /// The free slots and the discards required for a seat in this turn.
    pub fn limits(&self, seat: usize) -> Limits {
        let board = &self.boards[seat];
        Limits {
            open: Row::ALL.map(|row| board.open(row)),
            discards: if self.turn == 0 && !self.fantasy[seat] {
                0
            } else {
                1
            },
        }
    }

    /// Checks if a placement of the dealt cards is legal for a seat.
    pub fn check(
        &self,
        seat: usize,
        dealt: &[Card],
        placement: &Placement,
    ) -> Result<(), IllegalPlacement> {
        if placement.len() != dealt.len() {
            return Err(IllegalPlacement::Length {
                expected: dealt.len(),
                got: placement.len(),
            });
        }

        let limits = self.limits(seat);
        for row in Row::ALL {
            let placed = placement.count(Slot::from(row));
            let open = limits.open[row.index()];
            if placed > open {
                return Err(IllegalPlacement::RowOverflow { row, placed, open });
            }
        }

        let discards = placement.count(Slot::Discard);
        if discards != limits.discards {
            return Err(IllegalPlacement::Discards {
                expected: limits.discards,
                got: discards,
            });
        }

        Ok(())
    }

    /// Places the dealt cards on a seat board.
    ///
    /// Panics if the placement length doesn't match or a row overflows.
    pub fn apply(&mut self, seat: usize, dealt: &[Card], placement: &Placement) {
        assert_eq!(dealt.len(), placement.len(), "Placement length mismatch");

        for (card, slot) in dealt.iter().zip(placement.slots()) {
            if let Some(row) = slot.row() {
                self.boards[seat].place(*card, row);
                self.visible.insert(*card);
            }
        }
    }

    /// Scores the boards of a finished round.
    ///
    /// Panics if the round is not finished.
    pub fn end_round(&self) -> Outcome {
        assert!(self.is_finished(), "Round is not finished");

        let seats = self.seats();
        let fouled = self.boards.iter().map(Board::is_fouled).collect::<Vec<_>>();
        let bonuses = self.boards.iter().map(Board::bonuses).collect::<Vec<_>>();

        let fantasy = (0..seats)
            .map(|seat| {
                !fouled[seat]
                    && if self.fantasy[seat] {
                        rules::stays_in_fantasy(&bonuses[seat])
                    } else {
                        rules::enters_fantasy(&bonuses[seat])
                    }
            })
            .collect();

        let mut deltas = vec![0; seats];
        for i in 0..seats {
            for j in i + 1..seats {
                let score = self.boards[i].score(&self.boards[j]);
                deltas[i] += score;
                deltas[j] -= score;
            }
        }

        Outcome {
            deltas,
            fouled,
            fantasy,
            bonuses,
        }
    }

    fn play_turn<S: Strategy>(
        &mut self,
        from_seat: usize,
        players: &mut [S],
        rng: &mut SmallRng,
    ) {
        assert_eq!(
            players.len(),
            self.seats(),
            "A strategy is needed for each seat"
        );

        for seat in from_seat..self.seats() {
            if self.turn > 0 && self.fantasy[seat] {
                continue;
            }

            let dealt = self.deal(seat);
            let placement = loop {
                let placement = players[seat].place(&dealt, seat, self, rng);
                match self.check(seat, &dealt, &placement) {
                    Ok(()) => break placement,
                    Err(err) => warn!("Seat {seat} illegal placement [{placement}]: {err}"),
                }
            };

            self.apply(seat, &dealt, &placement);

            if self.logging {
                debug!(
                    "Turn {} seat {seat} dealt {} placed [{placement}] {}",
                    self.turn,
                    CardsList(&dealt),
                    self.boards[seat]
                );
            }
        }

        self.close_turn();
    }

    fn close_turn(&mut self) {
        let regular_complete = self
            .boards
            .iter()
            .zip(&self.fantasy)
            .filter(|(_, fantasy)| !**fantasy)
            .all(|(board, _)| board.is_complete());

        if regular_complete || self.cards_drawn + self.seats() * TURN_CARDS >= Deck::SIZE {
            self.state = RoundState::Finished;
        }

        self.turn += 1;
    }
}

struct CardsList<'a>(&'a [Card]);

impl std::fmt::Display for CardsList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{placements::Placements, strategy::Scripted};
    use rand::{SeedableRng, seq::IndexedRandom};

    /// Plays the first legal placement.
    struct FirstLegal;

    impl Strategy for FirstLegal {
        fn place(
            &mut self,
            dealt: &[Card],
            seat: usize,
            round: &Round,
            _: &mut SmallRng,
        ) -> Placement {
            Placements::new(dealt.len(), round.limits(seat))
                .next()
                .unwrap()
        }
    }

    /// Plays a uniformly chosen legal placement, the first legal one for
    /// Fantasy Land deals.
    struct AnyLegal;

    impl Strategy for AnyLegal {
        fn place(
            &mut self,
            dealt: &[Card],
            seat: usize,
            round: &Round,
            rng: &mut SmallRng,
        ) -> Placement {
            let mut placements = Placements::new(dealt.len(), round.limits(seat));
            if round.is_fantasy(seat) {
                placements.next().unwrap()
            } else {
                placements.collect::<Vec<_>>().choose(rng).unwrap().clone()
            }
        }
    }

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn seats_count() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(Round::new(&[], &mut rng).is_err());
        assert!(Round::new(&[false; 4], &mut rng).is_err());

        for seats in 1..=MAX_SEATS {
            let round = Round::new(&vec![false; seats], &mut rng).unwrap();
            assert_eq!(round.seats(), seats);
            assert_eq!(round.state(), RoundState::NotStarted);
        }
    }

    #[test]
    fn full_round() {
        let mut rng = SmallRng::seed_from_u64(7);
        for seats in 1..=MAX_SEATS {
            let mut round = Round::new(&vec![false; seats], &mut rng).unwrap();
            let mut players = (0..seats).map(|_| AnyLegal).collect::<Vec<_>>();

            round.start_round(&mut players, &mut rng);
            assert_eq!(round.turn(), 1);
            assert!(round.boards().iter().all(|b| b.len() == FIRST_TURN_CARDS));
            assert_eq!(round.cards_drawn(), seats * FIRST_TURN_CARDS);

            round.play(&mut players, &mut rng);
            assert!(round.is_finished());
            assert_eq!(round.turn(), 5);
            assert!(round.boards().iter().all(Board::is_complete));
            assert_eq!(round.cards_drawn(), seats * (FIRST_TURN_CARDS + 4 * TURN_CARDS));
            assert_eq!(round.visible().len(), seats * Board::CARDS);
        }
    }

    #[test]
    fn fantasy_seats() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut round = Round::new(&[true, false, false], &mut rng).unwrap();
        let mut players = [AnyLegal, AnyLegal, AnyLegal];

        round.start_round(&mut players, &mut rng);
        assert!(round.board(0).is_complete());
        assert_eq!(round.cards_drawn(), FANTASY_CARDS + 2 * FIRST_TURN_CARDS);

        round.play(&mut players, &mut rng);
        assert!(round.is_finished());
        assert!(round.boards().iter().all(Board::is_complete));
        assert_eq!(round.turn(), 5);

        // All seats in Fantasy Land finish after the first turn.
        let mut round = Round::new(&[true, true], &mut rng).unwrap();
        round.play(&mut [FirstLegal, FirstLegal], &mut rng);
        assert!(round.is_finished());
        assert_eq!(round.turn(), 1);
        assert_eq!(round.cards_drawn(), 2 * FANTASY_CARDS);
    }

    #[test]
    #[should_panic(expected = "Fantasy Land seat 0 dealt after the first turn")]
    fn fantasy_seat_after_first_turn() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut round = Round::new(&[true, false], &mut rng).unwrap();
        round.start_round(&mut [FirstLegal, FirstLegal], &mut rng);
        round.deal(0);
    }

    #[test]
    fn check_placements() {
        let mut round = Round::with_order(&[false], DrawOrder::sorted()).unwrap();
        let dealt = round.deal(0);
        assert_eq!(dealt, cards("As Ah Ac Ad Ks"));

        let check = |s: &str| round.check(0, &dealt, &s.parse().unwrap());
        assert_eq!(check("0 1 2 1 2"), Ok(()));
        assert_eq!(
            check("0 1 2"),
            Err(IllegalPlacement::Length {
                expected: 5,
                got: 3
            })
        );
        assert_eq!(
            check("0 0 0 0 1"),
            Err(IllegalPlacement::RowOverflow {
                row: Row::Top,
                placed: 4,
                open: 3
            })
        );
        assert_eq!(
            check("0 1 2 1 d"),
            Err(IllegalPlacement::Discards {
                expected: 0,
                got: 1
            })
        );
    }

    #[test]
    fn retry_illegal_placements() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut round = Round::with_order(&[false], DrawOrder::sorted()).unwrap();
        let mut players = [Scripted::new([
            "0 0 0 0 1", // 4 cards on top
            "0 1 2 1 2",
            "0 1 d",
            "x 1 d", // unknown token
            "0 1 d",
            "1 2 d",
            "2 2 2", // bottom overflow
            "2 2 d",
        ])];

        round.play(&mut players, &mut rng);
        assert!(round.is_finished());
        assert_eq!(players[0].remaining(), 0);

        let board = round.board(0);
        assert_eq!(board.top().cards(), cards("As Kh Qs"));
        assert_eq!(board.middle().cards(), cards("Ah Ad Kc Qh Qd"));
        assert_eq!(board.bottom().cards(), cards("Ac Ks Js Jc Jd"));
    }

    #[test]
    fn enter_fantasy() {
        // Sorted deal: As Ah Ac Ad Ks, Kh Kc Kd, Qs Qh Qc, Qd Js Jh, Jc Jd Ts.
        let mut rng = SmallRng::seed_from_u64(1);
        let mut round = Round::with_order(&[false], DrawOrder::sorted()).unwrap();
        let mut players = [Scripted::new([
            "2 2 2 2 1",
            "1 1 d",
            "0 0 d",
            "d 1 1",
            "0 2 d",
        ])];

        round.play(&mut players, &mut rng);
        let outcome = round.end_round();
        assert_eq!(outcome.deltas, vec![0]);
        assert_eq!(outcome.fouled, vec![false]);
        assert_eq!(outcome.bonuses, vec![[7, 12, 10]]);
        assert_eq!(outcome.fantasy, vec![true]);
    }

    #[test]
    fn stay_in_fantasy() {
        // Sorted deal: As Ah Ac Ad Ks Kh Kc Kd Qs Qh Qc Qd Js Jh.
        let mut rng = SmallRng::seed_from_u64(1);
        let mut round = Round::with_order(&[true], DrawOrder::sorted()).unwrap();
        let mut players = [Scripted::new(["2 2 2 2 1 1 1 1 0 0 0 d 1 2"])];
        round.play(&mut players, &mut rng);

        let outcome = round.end_round();
        assert_eq!(outcome.fouled, vec![false]);
        assert_eq!(outcome.bonuses, vec![[20, 20, 10]]);
        assert_eq!(outcome.fantasy, vec![true]);

        // A fouled board exits Fantasy Land.
        let mut round = Round::with_order(&[true], DrawOrder::sorted()).unwrap();
        let mut players = [Scripted::new(["0 0 0 1 1 1 1 1 2 2 2 2 2 d"])];
        round.play(&mut players, &mut rng);

        let outcome = round.end_round();
        assert_eq!(outcome.fouled, vec![true]);
        assert_eq!(outcome.bonuses, vec![[0, 0, 0]]);
        assert_eq!(outcome.fantasy, vec![false]);
    }

    #[test]
    fn zero_sum() {
        let mut rng = SmallRng::seed_from_u64(101);
        for n in 0..50 {
            let fantasy = [n % 7 == 0, false, n % 5 == 0];
            let mut round = Round::new(&fantasy, &mut rng).unwrap();
            round.play(&mut [AnyLegal, AnyLegal, AnyLegal], &mut rng);

            let outcome = round.end_round();
            assert_eq!(outcome.deltas.iter().sum::<i32>(), 0);

            for seat in 0..3 {
                let board = round.board(seat);
                assert_eq!(outcome.fouled[seat], board.is_fouled());
                assert_eq!(outcome.bonuses[seat], board.bonuses());
                if outcome.fouled[seat] {
                    assert!(!outcome.fantasy[seat]);
                }
            }

            let pairs = board_pairs(&round);
            assert_eq!(outcome.deltas[0], pairs[0] + pairs[1]);
        }
    }

    fn board_pairs(round: &Round) -> [i32; 2] {
        [
            round.board(0).score(round.board(1)),
            round.board(0).score(round.board(2)),
        ]
    }

    #[test]
    fn finish_partial_turn() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut round = Round::new(&[false, false], &mut rng).unwrap();
        let mut players = [FirstLegal, FirstLegal];
        round.start_round(&mut players, &mut rng);

        // Seat 0 plays outside the round loop, then the turn is completed.
        let dealt = round.deal(0);
        let placement = Placements::new(dealt.len(), round.limits(0)).next().unwrap();
        round.apply(0, &dealt, &placement);
        assert_eq!(round.turn(), 1);

        round.finish_turn(1, &mut players, &mut rng);
        assert_eq!(round.turn(), 2);
        assert_eq!(round.board(0).len(), 7);
        assert_eq!(round.board(1).len(), 7);
        assert_eq!(round.cards_drawn(), 2 * (FIRST_TURN_CARDS + TURN_CARDS));
    }

    #[test]
    fn finish_first_turn() {
        let mut rng = SmallRng::seed_from_u64(13);
        let mut round = Round::new(&[false, false], &mut rng).unwrap();
        let mut players = [FirstLegal, FirstLegal];

        let dealt = round.deal(0);
        let placement = Placements::new(dealt.len(), round.limits(0)).next().unwrap();
        round.apply(0, &dealt, &placement);
        assert_eq!(round.state(), RoundState::NotStarted);

        round.finish_turn(1, &mut players, &mut rng);
        assert_eq!(round.state(), RoundState::Dealing);
        assert_eq!(round.turn(), 1);
        assert!(round.boards().iter().all(|b| b.len() == FIRST_TURN_CARDS));

        round.play(&mut players, &mut rng);
        assert!(round.is_finished());
        assert!(round.boards().iter().all(Board::is_complete));
    }

    #[test]
    fn fantasy_table_cards_drawn() {
        let mut rng = SmallRng::seed_from_u64(21);
        let mut round = Round::new(&[true, true, false], &mut rng).unwrap();
        let mut players = [AnyLegal, AnyLegal, AnyLegal];

        round.start_round(&mut players, &mut rng);
        assert!(round.board(0).is_complete() && round.board(1).is_complete());

        // Fantasy Land seats draw once, the regular seat 5 + 3k cards.
        while !round.is_finished() {
            let turn = round.turn();
            assert_eq!(
                round.cards_drawn(),
                2 * FANTASY_CARDS + FIRST_TURN_CARDS + (turn - 1) * TURN_CARDS
            );
            assert_eq!(round.board(2).len(), FIRST_TURN_CARDS + (turn - 1) * 2);
            round.next_turn(&mut players, &mut rng);
        }

        // The regular board completes before the deck runs out.
        assert_eq!(round.turn(), 5);
        assert_eq!(round.cards_drawn(), 2 * FANTASY_CARDS + FIRST_TURN_CARDS + 4 * TURN_CARDS);
        assert!(round.boards().iter().all(Board::is_complete));
        assert_eq!(round.end_round().deltas.iter().sum::<i32>(), 0);
    }

    #[test]
    fn deck_exhaustion() {
        let mut rng = SmallRng::seed_from_u64(23);
        let mut round = Round::new(&[false, false, false], &mut rng).unwrap();
        let mut players = [AnyLegal, AnyLegal, AnyLegal];
        round.start_round(&mut players, &mut rng);

        // Burn cards until another turn for three seats no longer fits.
        while round.cards_drawn() + 3 * TURN_CARDS < Deck::SIZE {
            round.deal(0);
        }
        assert_eq!(round.cards_drawn(), 45);

        // Nothing left to deal closes the round with incomplete boards.
        round.finish_turn(3, &mut players, &mut rng);
        assert!(round.is_finished());
        assert!(round.boards().iter().all(|b| b.len() == FIRST_TURN_CARDS));
    }

    #[test]
    fn visible_clone() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut round = Round::new(&[false, false, false], &mut rng).unwrap();
        let mut players = [AnyLegal, AnyLegal, AnyLegal];
        round.start_round(&mut players, &mut rng);
        round.next_turn(&mut players, &mut rng);

        let mut copy = round.visible_clone(&mut rng);
        assert_eq!(copy.turn(), round.turn());
        assert_eq!(copy.cards_drawn(), round.cards_drawn());
        assert_eq!(copy.visible(), round.visible());
        for seat in 0..3 {
            assert_eq!(copy.board(seat).top().cards(), round.board(seat).top().cards());
            assert_eq!(copy.board(seat).bottom().cards(), round.board(seat).bottom().cards());
        }

        // The copy plays to the end without touching the original.
        copy.play(&mut players, &mut rng);
        assert!(copy.is_finished());
        assert!(copy.boards().iter().all(Board::is_complete));
        assert!(!round.is_finished());
        assert!(round.boards().iter().all(|b| b.len() == 7));

        // Placed cards are never dealt again.
        let placed = copy
            .boards()
            .iter()
            .flat_map(|b| Row::ALL.map(|row| b.row(row).cards().to_vec()))
            .flatten()
            .collect::<CardSet>();
        assert_eq!(placed.len(), 3 * Board::CARDS);
    }
}
