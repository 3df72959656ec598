//! Settings collection and the hand-off to the round engine
//!
//! [`Setup`] is the mutable form state behind the start screen: player
//! count and names, the impostor configuration, and the word source. On
//! submission it resolves the word list, assembles a validated immutable
//! [`Settings`] record, and serializes it into the session store for the
//! engine to pick up.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants,
    i18n::{self, Language, Localizer, Phrase},
    settings::{self, Settings},
    storage::Storage,
    topics,
    words::CustomWords,
};

/// Topic label used for games played from the custom word list
const CUSTOM_LIST_LABEL: &str = "Custom List";

/// Errors surfaced to the user when starting a game
#[derive(Error, Debug)]
pub enum Error {
    /// The resolved word list has no entries
    #[error("the selected word list has no words")]
    EmptyWordList,
    /// The referenced topic key no longer exists in the catalog
    #[error("selected topic not found")]
    TopicNotFound,
    /// The assembled settings failed validation
    #[error(transparent)]
    InvalidSettings(#[from] settings::Error),
}

/// The impostor configuration offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpostorOption {
    /// Always exactly one impostor
    One,
    /// One or two impostors, decided by a probability roll each round
    OneOrTwo,
}

impl ImpostorOption {
    /// Returns the requested impostor count for the settings record
    pub fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::OneOrTwo => 2,
        }
    }
}

/// Where the word list comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordSource {
    /// A predefined topic from the shipped catalog, referenced by key
    Predefined {
        /// The topic key
        topic: String,
    },
    /// The user's custom word list
    Custom,
}

/// Mutable form state for assembling game settings
///
/// Keeps the full set of name slots regardless of the current player count
/// so lowering and raising the slider does not lose names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    num_players: usize,
    player_names: Vec<String>,
    impostor_option: ImpostorOption,
    impostor_probability: u8,
    source: WordSource,
}

impl Setup {
    /// Creates form state with defaults and localized placeholder names
    pub fn new(localizer: &Localizer) -> Self {
        let player_names = (1..=constants::game::NAME_SLOTS)
            .map(|number| placeholder_name(localizer, number))
            .collect_vec();

        Self {
            num_players: constants::setup::DEFAULT_PLAYER_COUNT,
            player_names,
            impostor_option: ImpostorOption::One,
            impostor_probability: constants::setup::DEFAULT_IMPOSTOR_PROBABILITY,
            source: WordSource::Predefined {
                topic: topics::all()[0].key().to_owned(),
            },
        }
    }

    /// Returns the configured player count
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Sets the player count, clamped to the allowed range
    ///
    /// Dropping below the two-impostor threshold forces the impostor
    /// option back to exactly one.
    pub fn set_num_players(&mut self, count: usize) {
        self.num_players = count.clamp(
            constants::game::MIN_PLAYER_COUNT,
            constants::game::MAX_PLAYER_COUNT,
        );
        if self.num_players < constants::game::MIN_PLAYERS_FOR_TWO_IMPOSTORS {
            self.impostor_option = ImpostorOption::One;
        }
    }

    /// Returns all name slots, including those beyond the player count
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    /// Sets the name in one slot; out-of-range indices are ignored
    pub fn set_player_name(&mut self, index: usize, name: String) {
        if let Some(slot) = self.player_names.get_mut(index) {
            *slot = name;
        }
    }

    /// Returns the impostor option
    pub fn impostor_option(&self) -> ImpostorOption {
        self.impostor_option
    }

    /// Sets the impostor option
    ///
    /// Selecting one-or-two is ignored while the player count is below the
    /// threshold, mirroring the disabled control.
    pub fn set_impostor_option(&mut self, option: ImpostorOption) {
        if option == ImpostorOption::OneOrTwo
            && self.num_players < constants::game::MIN_PLAYERS_FOR_TWO_IMPOSTORS
        {
            return;
        }
        self.impostor_option = option;
    }

    /// Returns the probability (percent) of two impostors
    pub fn impostor_probability(&self) -> u8 {
        self.impostor_probability
    }

    /// Sets the probability of two impostors, capped at 100
    pub fn set_impostor_probability(&mut self, percent: u8) {
        self.impostor_probability = percent.min(100);
    }

    /// Returns the selected word source
    pub fn word_source(&self) -> &WordSource {
        &self.source
    }

    /// Selects the word source
    pub fn set_word_source(&mut self, source: WordSource) {
        self.source = source;
    }

    /// Refreshes placeholder names after a language change
    ///
    /// Empty slots and placeholders from any supported language are
    /// replaced with the current language's placeholder; names the user
    /// actually typed are kept.
    pub fn relocalize(&mut self, localizer: &Localizer) {
        for (index, name) in self.player_names.iter_mut().enumerate() {
            if name.is_empty() || is_placeholder(name) {
                *name = placeholder_name(localizer, index + 1);
            }
        }
    }

    /// Resolves the word list, validates, and writes the session hand-off
    ///
    /// For a predefined source the topic's list for the current language is
    /// used, falling back to English. The custom source uses the durable
    /// custom list. On success the settings are serialized into the session
    /// store under the hand-off key and returned.
    ///
    /// # Errors
    ///
    /// [`Error::TopicNotFound`] for a stale topic key,
    /// [`Error::EmptyWordList`] when the resolved list has no entries, and
    /// [`Error::InvalidSettings`] when the assembled record is inconsistent.
    pub fn start_game<S: Storage>(
        &self,
        language: Language,
        custom_words: &CustomWords,
        session: &mut S,
    ) -> Result<Settings, Error> {
        let (word_list, topic) = match &self.source {
            WordSource::Predefined { topic } => {
                let found = topics::find(topic).ok_or(Error::TopicNotFound)?;
                let words = found
                    .words(language)
                    .iter()
                    .map(|word| (*word).to_owned())
                    .collect_vec();
                (words, topic.clone())
            }
            WordSource::Custom => (custom_words.words().to_vec(), CUSTOM_LIST_LABEL.to_owned()),
        };

        if word_list.is_empty() {
            return Err(Error::EmptyWordList);
        }

        let settings = Settings {
            num_players: self.num_players,
            player_names: self.player_names[..self.num_players].to_vec(),
            num_impostors: self.impostor_option.count(),
            impostor_probability: self.impostor_probability,
            word_list,
            topic,
        };
        settings.validate()?;

        session.set(
            constants::storage::SETTINGS_KEY,
            serde_json::to_string(&settings).expect("default serializer cannot fail"),
        );
        tracing::debug!(topic = %settings.topic, players = settings.num_players, "settings handed off");

        Ok(settings)
    }
}

fn placeholder_name(localizer: &Localizer, number: usize) -> String {
    localizer.text_with(Phrase::PlayerX, &[("number", &number.to_string())])
}

/// Returns whether a name is a placeholder from any supported language
fn is_placeholder(name: &str) -> bool {
    Language::ALL.into_iter().any(|language| {
        let template = i18n::lookup(language, Phrase::PlayerX);
        let Some(prefix) = template.strip_suffix("{number}") else {
            return false;
        };
        name.strip_prefix(prefix)
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn english_setup() -> Setup {
        Setup::new(&Localizer::new(Language::En))
    }

    #[test]
    fn test_defaults() {
        let setup = english_setup();
        assert_eq!(setup.num_players(), 3);
        assert_eq!(setup.impostor_option(), ImpostorOption::One);
        assert_eq!(setup.impostor_probability(), 30);
        assert_eq!(setup.player_names().len(), 15);
        assert_eq!(setup.player_names()[0], "Player 1");
        assert_eq!(setup.player_names()[14], "Player 15");
        assert!(matches!(setup.word_source(), WordSource::Predefined { .. }));
    }

    #[test]
    fn test_set_num_players_clamps() {
        let mut setup = english_setup();
        setup.set_num_players(1);
        assert_eq!(setup.num_players(), 3);
        setup.set_num_players(40);
        assert_eq!(setup.num_players(), 15);
        setup.set_num_players(7);
        assert_eq!(setup.num_players(), 7);
    }

    #[test]
    fn test_two_impostors_require_five_players() {
        let mut setup = english_setup();

        // Rejected at four players
        setup.set_num_players(4);
        setup.set_impostor_option(ImpostorOption::OneOrTwo);
        assert_eq!(setup.impostor_option(), ImpostorOption::One);

        // Allowed at five, then forced back when the count drops
        setup.set_num_players(5);
        setup.set_impostor_option(ImpostorOption::OneOrTwo);
        assert_eq!(setup.impostor_option(), ImpostorOption::OneOrTwo);
        setup.set_num_players(4);
        assert_eq!(setup.impostor_option(), ImpostorOption::One);
    }

    #[test]
    fn test_relocalize_replaces_placeholders_only() {
        let mut setup = english_setup();
        setup.set_player_name(1, "Ada".to_owned());
        setup.set_player_name(2, String::new());

        setup.relocalize(&Localizer::new(Language::Es));
        assert_eq!(setup.player_names()[0], "Jugador 1");
        assert_eq!(setup.player_names()[1], "Ada");
        assert_eq!(setup.player_names()[2], "Jugador 3");

        // And back again, including foreign placeholders
        setup.relocalize(&Localizer::new(Language::It));
        assert_eq!(setup.player_names()[0], "Giocatore 1");
        assert_eq!(setup.player_names()[1], "Ada");
    }

    #[test]
    fn test_start_game_predefined_writes_hand_off() {
        let setup = english_setup();
        let mut session = MemoryStore::new();
        let custom = CustomWords::default();

        let settings = setup
            .start_game(Language::En, &custom, &mut session)
            .unwrap();

        assert_eq!(settings.num_players, 3);
        assert_eq!(settings.num_impostors, 1);
        assert_eq!(settings.topic, "animals");
        assert!(!settings.word_list.is_empty());
        assert_eq!(settings.player_names.len(), 3);

        let raw = session
            .get(constants::storage::SETTINGS_KEY)
            .expect("hand-off should be written");
        let parsed: Settings = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_start_game_uses_language_word_list() {
        let mut setup = english_setup();
        setup.set_word_source(WordSource::Predefined {
            topic: "food".to_owned(),
        });
        let mut session = MemoryStore::new();
        let custom = CustomWords::default();

        let settings = setup
            .start_game(Language::Es, &custom, &mut session)
            .unwrap();
        assert!(settings.word_list.contains(&"Helado".to_owned()));
    }

    #[test]
    fn test_start_game_stale_topic() {
        let mut setup = english_setup();
        setup.set_word_source(WordSource::Predefined {
            topic: "retired-topic".to_owned(),
        });
        let mut session = MemoryStore::new();
        let custom = CustomWords::default();

        let result = setup.start_game(Language::En, &custom, &mut session);
        assert!(matches!(result, Err(Error::TopicNotFound)));
        assert_eq!(session.get(constants::storage::SETTINGS_KEY), None);
    }

    #[test]
    fn test_start_game_empty_custom_list() {
        let mut setup = english_setup();
        setup.set_word_source(WordSource::Custom);
        let mut session = MemoryStore::new();
        let custom = CustomWords::default();

        let result = setup.start_game(Language::En, &custom, &mut session);
        assert!(matches!(result, Err(Error::EmptyWordList)));
        assert_eq!(session.get(constants::storage::SETTINGS_KEY), None);
    }

    #[test]
    fn test_start_game_custom_list() {
        let mut setup = english_setup();
        setup.set_word_source(WordSource::Custom);
        let mut session = MemoryStore::new();
        let mut durable = MemoryStore::new();
        let mut custom = CustomWords::load(&durable);
        custom.add("Lighthouse", &mut durable);
        custom.add("Anchor", &mut durable);

        let settings = setup
            .start_game(Language::En, &custom, &mut session)
            .unwrap();
        assert_eq!(settings.topic, "Custom List");
        assert_eq!(
            settings.word_list,
            vec!["Anchor".to_owned(), "Lighthouse".to_owned()]
        );
    }

    #[test]
    fn test_start_game_takes_first_n_names() {
        let mut setup = english_setup();
        setup.set_num_players(4);
        setup.set_player_name(0, "Ada".to_owned());
        setup.set_player_name(3, "Grace".to_owned());
        let mut session = MemoryStore::new();
        let custom = CustomWords::default();

        let settings = setup
            .start_game(Language::En, &custom, &mut session)
            .unwrap();
        assert_eq!(
            settings.player_names,
            vec!["Ada", "Player 2", "Player 3", "Grace"]
        );
    }
}
