// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multi rounds game with a rotating button.
use anyhow::{Result, bail};
use log::info;
use rand::rngs::SmallRng;

use crate::{
    round::{MAX_SEATS, Outcome, Round},
    strategy::Strategy,
};

/// A player at the table.
pub struct Player {
    /// The player name.
    pub name: String,
    /// How this player places cards.
    pub strategy: Box<dyn Strategy>,
    /// Points accumulated over all rounds.
    pub score: i32,
    /// The player plays the next round in Fantasy Land.
    pub fantasy: bool,
}

impl Player {
    /// Creates a new player.
    pub fn new<S>(name: impl Into<String>, strategy: S) -> Self
    where
        S: Strategy + 'static,
    {
        Self {
            name: name.into(),
            strategy: Box::new(strategy),
            score: 0,
            fantasy: false,
        }
    }
}

/// A game between up to three players.
pub struct Game {
    players: Vec<Player>,
    button: usize,
    rounds: usize,
}

impl Game {
    /// Creates a game, the first round starts from the first player.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        if players.is_empty() || players.len() > MAX_SEATS {
            bail!(
                "Invalid number of players {}, a game needs 1 to {MAX_SEATS} players",
                players.len()
            );
        }

        Ok(Self {
            button: players.len() - 1,
            players,
            rounds: 0,
        })
    }

    /// The players in joining order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The index of the player with the button.
    pub fn button(&self) -> usize {
        self.button
    }

    /// Number of rounds played.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Plays a round and moves the button to the next player.
    ///
    /// Seat 0 is the player after the button, the returned outcome is in seat
    /// order while the players scores and Fantasy Land flags are updated in
    /// place.
    pub fn play_round(&mut self, rng: &mut SmallRng) -> Result<Outcome> {
        let count = self.players.len();
        let first = (self.button + 1) % count;
        let seat_player = move |seat: usize| (first + seat) % count;

        let fantasy = (0..count)
            .map(|seat| self.players[seat_player(seat)].fantasy)
            .collect::<Vec<_>>();
        let mut round = Round::new(&fantasy, rng)?;

        let (before, after) = self.players.split_at_mut(first);
        let mut strategies = after
            .iter_mut()
            .chain(before.iter_mut())
            .map(|p| &mut p.strategy)
            .collect::<Vec<_>>();
        round.play(&mut strategies, rng);

        let outcome = round.end_round();
        for (seat, board) in round.boards().iter().enumerate() {
            let player = &mut self.players[seat_player(seat)];
            player.score += outcome.deltas[seat];
            player.fantasy = outcome.fantasy[seat];

            let fouled = if outcome.fouled[seat] { " fouled" } else { "" };
            let fantasy = if player.fantasy { " fantasy" } else { "" };
            info!(
                "Round {} {}: {:+} ({}){fouled}{fantasy} {board}",
                self.rounds + 1,
                player.name,
                outcome.deltas[seat],
                player.score,
            );
        }

        self.button = first;
        self.rounds += 1;

        Ok(outcome)
    }
}
