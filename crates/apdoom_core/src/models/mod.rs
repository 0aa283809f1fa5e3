//! Data models for the APDoom launcher.
//!
//! This module contains the enumerated choices shown by the launcher:
//! - The selected game
//! - Difficulty and randomizer modes passed to the engine

mod enums;

// Re-export all public types
pub use enums::{
    parse_choice, Choice, Difficulty, FlipLevels, Game, ItemRando, MonsterRando, MusicRando,
    ParseChoiceError,
};
