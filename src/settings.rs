//! Immutable game settings and their validation
//!
//! A [`Settings`] record is assembled by the collector, serialized into the
//! session hand-off, and consumed read-only by the round engine. The JSON
//! field names are camelCase to match the hand-off format.

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a settings record is inconsistent
#[derive(Error, Debug)]
pub enum Error {
    /// One or more fields are outside their allowed ranges
    #[error("settings failed validation: {0}")]
    Invalid(#[from] garde::Report),
    /// The number of player names does not match the player count
    #[error("expected {expected} player names, got {actual}")]
    NameCountMismatch {
        /// The configured player count
        expected: usize,
        /// The number of names supplied
        actual: usize,
    },
    /// The word list has no entries
    #[error("word list cannot be empty")]
    EmptyWordList,
}

/// Configuration for one game, immutable once constructed
///
/// Created by the settings collector and handed to the round engine through
/// transient session storage; rounds only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Number of players in the game
    #[garde(range(
        min = crate::constants::game::MIN_PLAYER_COUNT,
        max = crate::constants::game::MAX_PLAYER_COUNT,
    ))]
    pub num_players: usize,
    /// Player names in seating order, one per player
    #[garde(length(
        min = crate::constants::game::MIN_PLAYER_COUNT,
        max = crate::constants::game::MAX_PLAYER_COUNT,
    ))]
    pub player_names: Vec<String>,
    /// Requested impostor count: exactly one, or one-or-two
    #[garde(range(min = 1, max = 2))]
    pub num_impostors: usize,
    /// Probability (percent) of assigning two impostors when allowed
    #[garde(range(max = 100))]
    pub impostor_probability: u8,
    /// Candidate secret words for this game
    #[garde(length(min = 1))]
    pub word_list: Vec<String>,
    /// Label of the word source (topic key or "Custom List")
    #[garde(skip)]
    pub topic: String,
}

impl Settings {
    /// Validates field ranges and cross-field consistency
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when a field is out of range, the name count
    /// does not match the player count, or the word list is empty.
    pub fn validate(&self) -> Result<(), Error> {
        Validate::validate(self)?;
        if self.player_names.len() != self.num_players {
            return Err(Error::NameCountMismatch {
                expected: self.num_players,
                actual: self.player_names.len(),
            });
        }
        if self.word_list.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            num_players: 3,
            player_names: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
            num_impostors: 1,
            impostor_probability: 30,
            word_list: vec!["Pizza".to_owned()],
            topic: "food".to_owned(),
        }
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_player_count_out_of_range() {
        let mut settings = valid_settings();
        settings.num_players = 2;
        settings.player_names = vec!["A".to_owned(), "B".to_owned()];
        assert!(matches!(settings.validate(), Err(Error::Invalid(_))));

        let mut settings = valid_settings();
        settings.num_players = 16;
        settings.player_names = vec![String::from("x"); 16];
        assert!(matches!(settings.validate(), Err(Error::Invalid(_))));
    }

    #[test]
    fn test_impostor_count_out_of_range() {
        let mut settings = valid_settings();
        settings.num_impostors = 3;
        assert!(matches!(settings.validate(), Err(Error::Invalid(_))));

        let mut settings = valid_settings();
        settings.num_impostors = 0;
        assert!(matches!(settings.validate(), Err(Error::Invalid(_))));
    }

    #[test]
    fn test_probability_out_of_range() {
        let mut settings = valid_settings();
        settings.impostor_probability = 101;
        assert!(matches!(settings.validate(), Err(Error::Invalid(_))));
    }

    #[test]
    fn test_name_count_mismatch() {
        let mut settings = valid_settings();
        settings.num_players = 4;
        assert!(matches!(
            settings.validate(),
            Err(Error::NameCountMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_empty_word_list() {
        let mut settings = valid_settings();
        settings.word_list.clear();
        // garde catches the empty list before the explicit check does
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_string(&valid_settings()).unwrap();
        assert!(json.contains("\"numPlayers\""));
        assert!(json.contains("\"playerNames\""));
        assert!(json.contains("\"numImpostors\""));
        assert!(json.contains("\"impostorProbability\""));
        assert!(json.contains("\"wordList\""));
        assert!(json.contains("\"topic\""));
    }

    #[test]
    fn test_deserializes_hand_off_blob() {
        let json = r#"{
            "numPlayers": 3,
            "playerNames": ["A", "B", "C"],
            "numImpostors": 1,
            "impostorProbability": 30,
            "wordList": ["Pizza"],
            "topic": "food"
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings, valid_settings());
    }
}
