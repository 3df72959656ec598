//! Display languages and localized message lookup
//!
//! The game ships four display-string tables (English, Spanish, French,
//! Italian) keyed by the same set of message identifiers. Lookups resolve
//! against the current language first and fall back to English for entries a
//! translation does not cover yet. The current language is an explicit
//! capability ([`Localizer`]) injected into whatever needs localized text,
//! initialized from the durable store and persisted on change.

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::{constants, storage::Storage};

mod tables;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Enum, Serialize, Deserialize)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// Italian
    It,
}

impl Language {
    /// All supported languages in declaration order
    pub const ALL: [Self; 4] = [Self::En, Self::Es, Self::Fr, Self::It];

    /// Returns the two-letter code for this language
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
        }
    }

    /// Parses a two-letter code into a language
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }
}

/// Identifiers for every localizable message in the game flow
///
/// Parameterized phrases carry `{placeholder}` markers in their templates;
/// see [`Localizer::text_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[allow(missing_docs)]
pub enum Phrase {
    PassDeviceTo,
    AreYouReady,
    ItsMyTurn,
    YourTurnX,
    TapToReveal,
    YourRoleIsHidden,
    YouAreImpostor,
    BlendIn,
    TheWordIs,
    YouAreNotImpostor,
    Continue,
    DiscussionTime,
    FindTheImpostor,
    RevealImpostors,
    GameOver,
    TheWordWas,
    TheImpostorWas,
    TheImpostorsWere,
    NewRound,
    NewGame,
    Back,
    Topic,
    Round,
    PlayerX,
    EmptyWordListAlert,
    StartGame,
    HomeDescription,
    PlayerSetup,
    NumPlayers,
    ImpostorSettings,
    NumImpostors,
    OneImpostor,
    OneOrTwoImpostors,
    TwoImpostorsProbability,
    WordList,
    Predefined,
    Custom,
    SelectTopic,
    CustomListCount,
    CustomListEmpty,
    ManageCustomWords,
    AddRemoveWords,
    EnterNewWord,
    AddWord,
    Delete,
    BackToSetup,
}

/// Resolves a phrase in the given language, falling back to English
pub fn lookup(language: Language, phrase: Phrase) -> &'static str {
    let localized = match language {
        Language::En => Some(tables::english(phrase)),
        Language::Es => tables::spanish(phrase),
        Language::Fr => tables::french(phrase),
        Language::It => tables::italian(phrase),
    };
    localized.unwrap_or_else(|| tables::english(phrase))
}

/// Replaces `{key}` markers in a template with the supplied values
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut text = template.to_owned();
    for (key, value) in args {
        text = text.replace(&format!("{{{key}}}"), value);
    }
    text
}

/// Language-resolution capability handed to components that render text
///
/// Wraps the current language selection together with its persistence,
/// replacing any ambient process-wide language state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    /// Creates a localizer for a fixed language
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Loads the persisted language preference, defaulting to English
    ///
    /// Unknown or missing codes fall back to the default rather than
    /// failing: a stale preference should never block startup.
    pub fn load<S: Storage>(store: &S) -> Self {
        let language = store
            .get(constants::storage::LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self { language }
    }

    /// Returns the current language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the current language and persists the preference
    pub fn set_language<S: Storage>(&mut self, language: Language, store: &mut S) {
        self.language = language;
        store.set(
            constants::storage::LANGUAGE_KEY,
            language.code().to_owned(),
        );
    }

    /// Resolves a phrase in the current language
    pub fn text(&self, phrase: Phrase) -> &'static str {
        lookup(self.language, phrase)
    }

    /// Resolves a parameterized phrase, interpolating `{key}` markers
    pub fn text_with(&self, phrase: Phrase, args: &[(&str, &str)]) -> String {
        interpolate(self.text(phrase), args)
    }
}
