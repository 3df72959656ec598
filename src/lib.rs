//! # Impostor Game Library
//!
//! This library provides the core logic for a local "find the impostor"
//! party game played on a single shared device. A secret word is revealed
//! to every player except the impostor(s); the group then discusses to
//! unmask them.
//!
//! The crate is headless. It covers settings collection and validation,
//! round initialization (word and impostor assignment), the turn-by-turn
//! reveal sequencer, the user-managed custom word list, and localized
//! display strings, all behind an injected key-value storage seam. An
//! embedding shell renders the state and forwards button presses.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_panics_doc)]

pub mod collector;
pub mod constants;
pub mod game;
pub mod i18n;
pub mod round;
pub mod settings;
pub mod storage;
pub mod topics;
pub mod words;

pub use game::Game;
pub use round::{Phase, Player, Round};
pub use settings::Settings;
