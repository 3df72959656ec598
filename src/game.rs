//! The round engine
//!
//! [`Game`] owns the settings for the current session and exactly one live
//! [`Round`]. It is entered through the session hand-off written by the
//! collector, exposes the sequencer actions as synchronous methods, and
//! produces typed, language-neutral state messages an embedding shell can
//! render. "New round" rebuilds the round from the same settings; "new
//! game" deletes the hand-off and returns control to the collector.

use serde::Serialize;
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::{
    constants,
    round::{Phase, Round},
    settings::{self, Settings},
    storage::Storage,
};

/// Errors raised when entering or re-running the engine
#[derive(Error, Debug)]
pub enum Error {
    /// No settings hand-off exists; the caller should return to the
    /// collector without surfacing an error to the user
    #[error("no stored settings to resume from")]
    MissingSettings,
    /// The stored hand-off is not valid JSON
    #[error("stored settings are not valid JSON: {0}")]
    MalformedSettings(#[from] serde_json::Error),
    /// The stored settings are inconsistent
    #[error(transparent)]
    InvalidSettings(#[from] settings::Error),
}

/// The contents of the current player's card once revealed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RevealCard {
    /// This player is an impostor and gets no word
    Impostor,
    /// This player is a regular player and sees the secret word
    Word(String),
}

/// Language-neutral view of the current phase
///
/// Contains everything a shell needs to render the screen for the current
/// phase; localized captions come from [`i18n`](crate::i18n) separately.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub enum StateMessage {
    /// Pass the device to the named player
    TurnTransition {
        /// Name of the player about to look at their card
        player_name: String,
        /// One-based position of the player in the order
        position: usize,
        /// Total number of players
        count: usize,
    },
    /// The named player is viewing (or about to view) their card
    Reveal {
        /// Name of the player at the device
        player_name: String,
        /// Whether the card has been flipped
        revealed: bool,
        /// The card contents, present only once revealed
        card: Option<RevealCard>,
    },
    /// The group is discussing; no player-indexed content
    Discuss,
    /// The round is over
    Results {
        /// The secret word of the round
        word: String,
        /// All impostors, in seating order
        impostors: Vec<String>,
    },
}

impl StateMessage {
    /// Converts the state message to a JSON string for an embedding shell
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// A running game session: immutable settings plus one live round
#[derive(Debug)]
pub struct Game {
    settings: Settings,
    round: Round,
}

impl Game {
    /// Enters the engine by reading the session hand-off
    ///
    /// This is the single blocking read performed at initialization; the
    /// `Loading` phase resolves here, synchronously.
    ///
    /// # Errors
    ///
    /// [`Error::MissingSettings`] when no hand-off exists (the caller
    /// silently redirects to the collector), [`Error::MalformedSettings`]
    /// or [`Error::InvalidSettings`] when the blob cannot be used.
    pub fn resume<S: Storage>(session: &S) -> Result<Self, Error> {
        let raw = session
            .get(constants::storage::SETTINGS_KEY)
            .ok_or(Error::MissingSettings)?;
        let settings: Settings = serde_json::from_str(&raw)?;
        Self::from_settings(settings)
    }

    /// Starts the engine directly from an in-memory settings record
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSettings`] when the record is inconsistent.
    pub fn from_settings(settings: Settings) -> Result<Self, Error> {
        let round = Round::new(&settings)?;
        Ok(Self { settings, round })
    }

    /// Returns the settings this session was started with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the current round
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Advances the reveal sequence (see [`Round::advance`])
    pub fn advance(&mut self) {
        self.round.advance();
    }

    /// Reveals the current player's card (see [`Round::reveal`])
    pub fn reveal(&mut self) {
        self.round.reveal();
    }

    /// Moves from discussion to results (see [`Round::show_results`])
    pub fn show_results<C: FnOnce()>(&mut self, celebrate: C) {
        self.round.show_results(celebrate);
    }

    /// Discards the current round and deals a fresh one
    ///
    /// Uses the same settings; the word and the impostor assignment are
    /// re-randomized and the sequence restarts at the first player.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSettings`] is unreachable for a session that was
    /// constructed successfully, but propagated rather than swallowed.
    pub fn new_round(&mut self) -> Result<(), Error> {
        self.round = Round::new(&self.settings)?;
        tracing::debug!("new round dealt");
        Ok(())
    }

    /// Ends the session and deletes the hand-off
    ///
    /// Consumes the game; the caller returns to the collector.
    pub fn new_game<S: Storage>(self, session: &mut S) {
        session.remove(constants::storage::SETTINGS_KEY);
    }

    /// Returns the round progress as (current, total), for display
    ///
    /// Current is the one-based player position, clamped to the total once
    /// the reveal sequence is over.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.settings.num_players;
        let current = (self.round.current_player_index() + 1).min(total);
        (current, total)
    }

    /// Returns the typed view of the current phase
    pub fn state_message(&self) -> StateMessage {
        let player_name = self
            .round
            .current_player()
            .map(|player| player.name.clone())
            .unwrap_or_default();

        match self.round.phase() {
            // A constructed round has already left Loading
            Phase::Loading | Phase::TurnTransition => StateMessage::TurnTransition {
                player_name,
                position: self.round.current_player_index() + 1,
                count: self.settings.num_players,
            },
            Phase::Reveal => {
                let card = self.round.revealed().then(|| {
                    match self.round.current_player() {
                        Some(player) if player.is_impostor => RevealCard::Impostor,
                        _ => RevealCard::Word(self.round.word().to_owned()),
                    }
                });
                StateMessage::Reveal {
                    player_name,
                    revealed: self.round.revealed(),
                    card,
                }
            }
            Phase::Discuss => StateMessage::Discuss,
            Phase::Results => StateMessage::Results {
                word: self.round.word().to_owned(),
                impostors: self
                    .round
                    .impostors()
                    .into_iter()
                    .map(|player| player.name.clone())
                    .collect(),
            },
        }
    }
}
