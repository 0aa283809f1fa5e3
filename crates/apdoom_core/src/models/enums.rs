//! Enumerated choices presented by the launcher.
//!
//! Every choice maps to a 0-based index in declaration order. The engine's
//! argument parser reads those indices, so variant order must never change.

use serde::{Deserialize, Serialize};

/// A closed set of options shown in a combo box.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// All variants, in index order.
    const ALL: &'static [Self];

    /// Persisted key (snake_case).
    fn key(&self) -> &'static str;

    /// Human readable label.
    fn label(&self) -> &'static str;

    /// 0-based index as understood by the engine.
    fn index(&self) -> u32 {
        Self::ALL
            .iter()
            .position(|v| v == self)
            .map(|i| i as u32)
            .unwrap_or(0)
    }

    /// Look up a variant by its 0-based index.
    fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Parse a choice from its key, its label (case-insensitive) or its index.
pub fn parse_choice<T: Choice>(input: &str) -> Option<T> {
    let input = input.trim();
    if let Ok(index) = input.parse::<u32>() {
        return T::from_index(index);
    }

    T::ALL.iter().copied().find(|v| {
        v.key().eq_ignore_ascii_case(input) || v.label().eq_ignore_ascii_case(input)
    })
}

/// Error returned when a choice cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! impl_choice_traits {
    ($ty:ty, $kind:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_choice(s).ok_or_else(|| ParseChoiceError {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

/// Game selected in the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Game {
    #[default]
    UltimateDoom,
    Doom2,
    Heretic,
}

impl Game {
    /// Value passed to the engine's `-game` parameter.
    pub fn engine_name(&self) -> &'static str {
        match self {
            Game::UltimateDoom => "doom",
            Game::Doom2 => "doom2",
            Game::Heretic => "heretic",
        }
    }

    /// Whether the game supports flipping levels.
    pub fn supports_flip_levels(&self) -> bool {
        !matches!(self, Game::Heretic)
    }
}

impl Choice for Game {
    const ALL: &'static [Self] = &[Game::UltimateDoom, Game::Doom2, Game::Heretic];

    fn key(&self) -> &'static str {
        match self {
            Game::UltimateDoom => "ultimate_doom",
            Game::Doom2 => "doom2",
            Game::Heretic => "heretic",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Game::UltimateDoom => "The Ultimate DOOM",
            Game::Doom2 => "DOOM II: Hell on Earth",
            Game::Heretic => "Heretic: Shadow of the Serpent Riders",
        }
    }
}

impl_choice_traits!(Game, "game");

/// Skill level. The engine's `-skill` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Baby,
    Easy,
    #[default]
    Medium,
    Hard,
    Nightmare,
}

impl Difficulty {
    /// Value for the engine's `-skill` parameter.
    pub fn skill(&self) -> u32 {
        self.index() + 1
    }
}

impl Choice for Difficulty {
    const ALL: &'static [Self] = &[
        Difficulty::Baby,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Nightmare,
    ];

    fn key(&self) -> &'static str {
        match self {
            Difficulty::Baby => "baby",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Nightmare => "nightmare",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Difficulty::Baby => "Baby",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Nightmare => "Nightmare",
        }
    }
}

impl_choice_traits!(Difficulty, "difficulty");

/// Monster randomization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterRando {
    Vanilla,
    #[default]
    Shuffle,
    RandomBalanced,
    RandomChaotic,
}

impl Choice for MonsterRando {
    const ALL: &'static [Self] = &[
        MonsterRando::Vanilla,
        MonsterRando::Shuffle,
        MonsterRando::RandomBalanced,
        MonsterRando::RandomChaotic,
    ];

    fn key(&self) -> &'static str {
        match self {
            MonsterRando::Vanilla => "vanilla",
            MonsterRando::Shuffle => "shuffle",
            MonsterRando::RandomBalanced => "random_balanced",
            MonsterRando::RandomChaotic => "random_chaotic",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MonsterRando::Vanilla => "Vanilla",
            MonsterRando::Shuffle => "Shuffle",
            MonsterRando::RandomBalanced => "Random balanced",
            MonsterRando::RandomChaotic => "Random chaotic",
        }
    }
}

impl_choice_traits!(MonsterRando, "monster randomization");

/// Pickup randomization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRando {
    Vanilla,
    #[default]
    Shuffle,
    RandomBalanced,
}

impl Choice for ItemRando {
    const ALL: &'static [Self] = &[
        ItemRando::Vanilla,
        ItemRando::Shuffle,
        ItemRando::RandomBalanced,
    ];

    fn key(&self) -> &'static str {
        match self {
            ItemRando::Vanilla => "vanilla",
            ItemRando::Shuffle => "shuffle",
            ItemRando::RandomBalanced => "random_balanced",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ItemRando::Vanilla => "Vanilla",
            ItemRando::Shuffle => "Shuffle",
            ItemRando::RandomBalanced => "Random balanced",
        }
    }
}

impl_choice_traits!(ItemRando, "item randomization");

/// Music randomization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicRando {
    #[default]
    Vanilla,
    ShuffleSelected,
    ShuffleGame,
}

impl Choice for MusicRando {
    const ALL: &'static [Self] = &[
        MusicRando::Vanilla,
        MusicRando::ShuffleSelected,
        MusicRando::ShuffleGame,
    ];

    fn key(&self) -> &'static str {
        match self {
            MusicRando::Vanilla => "vanilla",
            MusicRando::ShuffleSelected => "shuffle_selected",
            MusicRando::ShuffleGame => "shuffle_game",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MusicRando::Vanilla => "Vanilla",
            MusicRando::ShuffleSelected => "Shuffle Selected",
            MusicRando::ShuffleGame => "Shuffle Game",
        }
    }
}

impl_choice_traits!(MusicRando, "music randomization");

/// Level flipping mode (not available for Heretic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipLevels {
    #[default]
    Vanilla,
    Flipped,
    RandomlyFlipped,
}

impl Choice for FlipLevels {
    const ALL: &'static [Self] = &[
        FlipLevels::Vanilla,
        FlipLevels::Flipped,
        FlipLevels::RandomlyFlipped,
    ];

    fn key(&self) -> &'static str {
        match self {
            FlipLevels::Vanilla => "vanilla",
            FlipLevels::Flipped => "flipped",
            FlipLevels::RandomlyFlipped => "randomly_flipped",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FlipLevels::Vanilla => "Vanilla",
            FlipLevels::Flipped => "Flipped",
            FlipLevels::RandomlyFlipped => "Randomly flipped",
        }
    }
}

impl_choice_traits!(FlipLevels, "level flipping mode");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        assert_eq!(Game::Heretic.index(), 2);
        assert_eq!(Difficulty::Baby.index(), 0);
        assert_eq!(MonsterRando::RandomChaotic.index(), 3);
        assert_eq!(ItemRando::RandomBalanced.index(), 2);
        assert_eq!(MusicRando::ShuffleGame.index(), 2);
        assert_eq!(FlipLevels::Flipped.index(), 1);
    }

    #[test]
    fn skill_is_one_based() {
        assert_eq!(Difficulty::Baby.skill(), 1);
        assert_eq!(Difficulty::Hard.skill(), 4);
        assert_eq!(Difficulty::Nightmare.skill(), 5);
    }

    #[test]
    fn parses_key_label_and_index() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(
            "Random balanced".parse::<MonsterRando>().unwrap(),
            MonsterRando::RandomBalanced
        );
        assert_eq!("1".parse::<Game>().unwrap(), Game::Doom2);
        assert!("7".parse::<FlipLevels>().is_err());
        assert!("hexen".parse::<Game>().is_err());
    }

    #[test]
    fn parse_error_names_the_kind() {
        let err = "bogus".parse::<MusicRando>().unwrap_err();
        assert_eq!(err.to_string(), "'bogus' is not a valid music randomization");
    }

    #[test]
    fn engine_names_match_game_parameter() {
        assert_eq!(Game::UltimateDoom.engine_name(), "doom");
        assert_eq!(Game::Doom2.engine_name(), "doom2");
        assert_eq!(Game::Heretic.engine_name(), "heretic");
        assert!(!Game::Heretic.supports_flip_levels());
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&MusicRando::ShuffleSelected).unwrap();
        assert_eq!(json, "\"shuffle_selected\"");
        let game: Game = serde_json::from_str("\"ultimate_doom\"").unwrap();
        assert_eq!(game, Game::UltimateDoom);
    }
}
