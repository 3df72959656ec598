//! Round state and the phase sequencer
//!
//! A [`Round`] is the transient state of one play-through: the secret word,
//! the players with their impostor flags, and the current position in the
//! reveal sequence. It is created fresh from [`Settings`] for every round
//! and discarded afterwards. All transitions are synchronous reactions to a
//! single user action; actions that do not apply to the current phase are
//! no-ops, matching buttons that are not on screen.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    constants,
    settings::{Error, Settings},
};

/// The phases of one round, in the order they are visited
///
/// `Loading` is the entry state while the settings hand-off is read; a
/// constructed round has already left it. The only cycle is
/// `Results → TurnTransition` via re-initialization ("new round").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Settings are being retrieved; no round exists yet
    Loading,
    /// The device is being passed to the current player
    TurnTransition,
    /// The current player privately views their card
    Reveal,
    /// Everyone has seen their card; the group discusses
    Discuss,
    /// The word and the impostors are shown
    Results,
}

/// One player in the current round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, as entered in the collector
    pub name: String,
    /// Whether this player is an impostor this round
    pub is_impostor: bool,
}

/// Transient state of a single round
///
/// Owned exclusively by the running [`Game`](crate::game::Game); rebuilding
/// it ("new round") re-randomizes the word and the impostor assignment.
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    word: String,
    players: Vec<Player>,
    current_player_index: usize,
    revealed: bool,
    phase: Phase,
}

impl Round {
    /// Initializes a round from validated settings
    ///
    /// Picks the secret word uniformly at random from the word list, decides
    /// how many impostors to assign (two only when requested, allowed by the
    /// player count, and won by the probability roll, re-rolled every
    /// round), and selects the impostors with a Fisher-Yates shuffle so
    /// every assignment is equally likely.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the settings are inconsistent (empty word
    /// list, name count mismatch, out-of-range fields).
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        settings.validate()?;

        let word = fastrand::choice(&settings.word_list)
            .cloned()
            .ok_or(Error::EmptyWordList)?;

        let impostor_count = if settings.num_impostors == 2
            && settings.num_players >= constants::game::MIN_PLAYERS_FOR_TWO_IMPOSTORS
            && fastrand::f64() < f64::from(settings.impostor_probability) / 100.0
        {
            2
        } else {
            1
        };

        let mut indices: Vec<usize> = (0..settings.num_players).collect();
        fastrand::shuffle(&mut indices);
        let impostor_indices: HashSet<usize> = indices.into_iter().take(impostor_count).collect();

        let players = settings
            .player_names
            .iter()
            .enumerate()
            .map(|(index, name)| Player {
                name: name.clone(),
                is_impostor: impostor_indices.contains(&index),
            })
            .collect();

        tracing::debug!(
            players = settings.num_players,
            impostors = impostor_count,
            "round initialized"
        );

        Ok(Self {
            word,
            players,
            current_player_index: 0,
            revealed: false,
            phase: Phase::TurnTransition,
        })
    }

    /// Returns the secret word of this round
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns all players in their original seating order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player the sequencer is currently pointing at
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Returns the index of the current player
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Returns whether the current player has revealed their card
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Returns the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns every impostor, in seating order
    pub fn impostors(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_impostor).collect()
    }

    /// Advances the reveal sequence
    ///
    /// In `TurnTransition` this moves to `Reveal` for the same player. In
    /// `Reveal` it only applies once the card has been revealed: the
    /// sequencer then moves to the next player's `TurnTransition`, or to
    /// `Discuss` after the last player. Anywhere else it is a no-op.
    pub fn advance(&mut self) {
        match self.phase {
            Phase::TurnTransition => {
                self.phase = Phase::Reveal;
            }
            Phase::Reveal if self.revealed => {
                if self.current_player_index + 1 < self.players.len() {
                    self.current_player_index += 1;
                    self.enter_turn_transition();
                } else {
                    self.phase = Phase::Discuss;
                }
                tracing::debug!(phase = ?self.phase, "advanced");
            }
            _ => {}
        }
    }

    /// Reveals the current player's card
    ///
    /// One-way: the flag only resets when the next `TurnTransition` is
    /// entered. A no-op outside `Reveal`.
    pub fn reveal(&mut self) {
        if self.phase == Phase::Reveal {
            self.revealed = true;
        }
    }

    /// Moves from `Discuss` to `Results`, firing the celebration callback
    ///
    /// The callback is a cosmetic side effect (confetti and the like) with
    /// no semantic state change; it runs exactly once per transition. A
    /// no-op outside `Discuss`.
    pub fn show_results<C: FnOnce()>(&mut self, celebrate: C) {
        if self.phase == Phase::Discuss {
            self.phase = Phase::Results;
            celebrate();
        }
    }

    fn enter_turn_transition(&mut self) {
        self.revealed = false;
        self.phase = Phase::TurnTransition;
    }
}
