//! Configuration constants for the impostor game
//!
//! This module contains the limits and well-known storage keys used
//! throughout the crate so that different components agree on the same
//! boundaries and blob locations.

/// Core game configuration constants
pub mod game {
    /// Minimum number of players in a round
    pub const MIN_PLAYER_COUNT: usize = 3;
    /// Maximum number of players in a round
    pub const MAX_PLAYER_COUNT: usize = 15;
    /// Minimum number of players required before two impostors are allowed
    pub const MIN_PLAYERS_FOR_TWO_IMPOSTORS: usize = 5;
    /// Number of name slots kept by the settings collector
    pub const NAME_SLOTS: usize = MAX_PLAYER_COUNT;
}

/// Default values used by the settings collector
pub mod setup {
    /// Default number of players when the form is first shown
    pub const DEFAULT_PLAYER_COUNT: usize = 3;
    /// Default probability (percent) of assigning two impostors
    pub const DEFAULT_IMPOSTOR_PROBABILITY: u8 = 30;
}

/// Well-known keys in the injected key-value stores
pub mod storage {
    /// Session-scoped settings hand-off from the collector to the engine
    pub const SETTINGS_KEY: &str = "gameSettings";
    /// Durable user-managed custom word list
    pub const CUSTOM_WORDS_KEY: &str = "custom-words";
    /// Durable display language preference
    pub const LANGUAGE_KEY: &str = "language";
}
