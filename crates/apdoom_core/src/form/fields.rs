//! Editable settings fields addressed by their persisted key.

use std::str::FromStr;

use crate::config::{ConfigSection, Settings};
use crate::models::{Choice, Difficulty, FlipLevels, Game, ItemRando, MonsterRando, MusicRando};

use super::FormError;

/// Every field the launcher form can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    // === Main form ===
    Game,
    Fullscreen,
    Width,
    Height,
    CommandLine,
    Server,
    SlotName,
    Password,

    // === Advanced settings ===
    OverrideDifficulty,
    Difficulty,
    OverrideMonsterRando,
    MonsterRando,
    OverrideItemRando,
    ItemRando,
    OverrideMusicRando,
    MusicRando,
    OverrideFlipLevels,
    FlipLevels,
    OverrideResetLevel,
    ResetLevelOnDeath,
    ForceDeathLinkOff,
    FastMonsters,

    // === Paths ===
    GameDir,
    LogsFolder,
}

/// What kind of input a field takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Toggle,
    Choice,
}

impl SettingField {
    /// All fields, in form order.
    pub const ALL: [SettingField; 24] = [
        SettingField::Game,
        SettingField::Fullscreen,
        SettingField::Width,
        SettingField::Height,
        SettingField::CommandLine,
        SettingField::Server,
        SettingField::SlotName,
        SettingField::Password,
        SettingField::OverrideDifficulty,
        SettingField::Difficulty,
        SettingField::OverrideMonsterRando,
        SettingField::MonsterRando,
        SettingField::OverrideItemRando,
        SettingField::ItemRando,
        SettingField::OverrideMusicRando,
        SettingField::MusicRando,
        SettingField::OverrideFlipLevels,
        SettingField::FlipLevels,
        SettingField::OverrideResetLevel,
        SettingField::ResetLevelOnDeath,
        SettingField::ForceDeathLinkOff,
        SettingField::FastMonsters,
        SettingField::GameDir,
        SettingField::LogsFolder,
    ];

    /// Persisted key, as written in the TOML file.
    pub fn key(&self) -> &'static str {
        match self {
            SettingField::Game => "game",
            SettingField::Fullscreen => "fullscreen",
            SettingField::Width => "width",
            SettingField::Height => "height",
            SettingField::CommandLine => "command_line",
            SettingField::Server => "server",
            SettingField::SlotName => "slot_name",
            SettingField::Password => "password",
            SettingField::OverrideDifficulty => "override_difficulty",
            SettingField::Difficulty => "difficulty",
            SettingField::OverrideMonsterRando => "override_monster_rando",
            SettingField::MonsterRando => "monster_rando",
            SettingField::OverrideItemRando => "override_item_rando",
            SettingField::ItemRando => "item_rando",
            SettingField::OverrideMusicRando => "override_music_rando",
            SettingField::MusicRando => "music_rando",
            SettingField::OverrideFlipLevels => "override_flip_levels",
            SettingField::FlipLevels => "flip_levels",
            SettingField::OverrideResetLevel => "override_reset_level",
            SettingField::ResetLevelOnDeath => "reset_level_on_death",
            SettingField::ForceDeathLinkOff => "force_death_link_off",
            SettingField::FastMonsters => "fast_monsters",
            SettingField::GameDir => "game_dir",
            SettingField::LogsFolder => "logs_folder",
        }
    }

    /// Label shown next to the control.
    pub fn label(&self) -> &'static str {
        match self {
            SettingField::Game => "Game",
            SettingField::Fullscreen => "Fullscreen",
            SettingField::Width => "Width",
            SettingField::Height => "Height",
            SettingField::CommandLine => "Command line",
            SettingField::Server => "Server",
            SettingField::SlotName => "Slot name",
            SettingField::Password => "Password",
            SettingField::OverrideDifficulty => "Difficulty: override server",
            SettingField::Difficulty => "Difficulty",
            SettingField::OverrideMonsterRando => "Random monsters: override server",
            SettingField::MonsterRando => "Random monsters",
            SettingField::OverrideItemRando => "Random pickups: override server",
            SettingField::ItemRando => "Random pickups",
            SettingField::OverrideMusicRando => "Random music: override server",
            SettingField::MusicRando => "Random music",
            SettingField::OverrideFlipLevels => "Flip levels: override server",
            SettingField::FlipLevels => "Flip levels",
            SettingField::OverrideResetLevel => "Reset level on death: override server",
            SettingField::ResetLevelOnDeath => "Reset level on death",
            SettingField::ForceDeathLinkOff => "Death link: force off",
            SettingField::FastMonsters => "Fast monsters",
            SettingField::GameDir => "Game folder",
            SettingField::LogsFolder => "Logs folder",
        }
    }

    /// Config section the field is stored in.
    pub fn section(&self) -> ConfigSection {
        match self {
            SettingField::Game | SettingField::CommandLine => ConfigSection::Launcher,
            SettingField::Fullscreen | SettingField::Width | SettingField::Height => {
                ConfigSection::Display
            }
            SettingField::Server | SettingField::SlotName | SettingField::Password => {
                ConfigSection::Connection
            }
            SettingField::GameDir | SettingField::LogsFolder => ConfigSection::Paths,
            _ => ConfigSection::Advanced,
        }
    }

    /// Input kind for this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            SettingField::Game
            | SettingField::Difficulty
            | SettingField::MonsterRando
            | SettingField::ItemRando
            | SettingField::MusicRando
            | SettingField::FlipLevels => FieldKind::Choice,
            SettingField::Fullscreen
            | SettingField::OverrideDifficulty
            | SettingField::OverrideMonsterRando
            | SettingField::OverrideItemRando
            | SettingField::OverrideMusicRando
            | SettingField::OverrideFlipLevels
            | SettingField::OverrideResetLevel
            | SettingField::ResetLevelOnDeath
            | SettingField::ForceDeathLinkOff
            | SettingField::FastMonsters => FieldKind::Toggle,
            _ => FieldKind::Text,
        }
    }

    /// Combo box entries `(key, label)` for choice fields, in index order.
    pub fn choices(&self) -> Option<Vec<(&'static str, &'static str)>> {
        match self {
            SettingField::Game => Some(choice_list::<Game>()),
            SettingField::Difficulty => Some(choice_list::<Difficulty>()),
            SettingField::MonsterRando => Some(choice_list::<MonsterRando>()),
            SettingField::ItemRando => Some(choice_list::<ItemRando>()),
            SettingField::MusicRando => Some(choice_list::<MusicRando>()),
            SettingField::FlipLevels => Some(choice_list::<FlipLevels>()),
            _ => None,
        }
    }

    /// Current value of a toggle field.
    pub fn toggle_value(&self, settings: &Settings) -> Option<bool> {
        let advanced = &settings.advanced;
        let value = match self {
            SettingField::Fullscreen => settings.display.fullscreen,
            SettingField::OverrideDifficulty => advanced.override_difficulty,
            SettingField::OverrideMonsterRando => advanced.override_monster_rando,
            SettingField::OverrideItemRando => advanced.override_item_rando,
            SettingField::OverrideMusicRando => advanced.override_music_rando,
            SettingField::OverrideFlipLevels => advanced.override_flip_levels,
            SettingField::OverrideResetLevel => advanced.override_reset_level,
            SettingField::ResetLevelOnDeath => advanced.reset_level_on_death,
            SettingField::ForceDeathLinkOff => advanced.force_death_link_off,
            SettingField::FastMonsters => advanced.fast_monsters,
            _ => return None,
        };
        Some(value)
    }

    /// Current value rendered as text (choice fields by key).
    pub fn get(&self, settings: &Settings) -> String {
        if let Some(value) = self.toggle_value(settings) {
            return value.to_string();
        }

        let advanced = &settings.advanced;
        match self {
            SettingField::Game => settings.launcher.game.key().to_string(),
            SettingField::Width => settings.display.width.clone(),
            SettingField::Height => settings.display.height.clone(),
            SettingField::CommandLine => settings.launcher.command_line.clone(),
            SettingField::Server => settings.connection.server.clone(),
            SettingField::SlotName => settings.connection.slot_name.clone(),
            SettingField::Password => settings.connection.password.clone(),
            SettingField::Difficulty => advanced.difficulty.key().to_string(),
            SettingField::MonsterRando => advanced.monster_rando.key().to_string(),
            SettingField::ItemRando => advanced.item_rando.key().to_string(),
            SettingField::MusicRando => advanced.music_rando.key().to_string(),
            SettingField::FlipLevels => advanced.flip_levels.key().to_string(),
            SettingField::GameDir => settings.paths.game_dir.clone(),
            SettingField::LogsFolder => settings.paths.logs_folder.clone(),
            // Toggles returned above
            _ => String::new(),
        }
    }

    /// Parse `value` and store it in `settings`.
    ///
    /// Text fields take the value verbatim; width and height are not checked
    /// here (see `Settings::validate`).
    pub fn set(&self, settings: &mut Settings, value: &str) -> Result<(), FormError> {
        let advanced = &mut settings.advanced;
        match self {
            SettingField::Game => settings.launcher.game = self.parse_choice(value)?,
            SettingField::Fullscreen => settings.display.fullscreen = self.parse_toggle(value)?,
            SettingField::Width => settings.display.width = value.to_string(),
            SettingField::Height => settings.display.height = value.to_string(),
            SettingField::CommandLine => settings.launcher.command_line = value.to_string(),
            SettingField::Server => settings.connection.server = value.to_string(),
            SettingField::SlotName => settings.connection.slot_name = value.to_string(),
            SettingField::Password => settings.connection.password = value.to_string(),
            SettingField::OverrideDifficulty => {
                advanced.override_difficulty = self.parse_toggle(value)?
            }
            SettingField::Difficulty => advanced.difficulty = self.parse_choice(value)?,
            SettingField::OverrideMonsterRando => {
                advanced.override_monster_rando = self.parse_toggle(value)?
            }
            SettingField::MonsterRando => advanced.monster_rando = self.parse_choice(value)?,
            SettingField::OverrideItemRando => {
                advanced.override_item_rando = self.parse_toggle(value)?
            }
            SettingField::ItemRando => advanced.item_rando = self.parse_choice(value)?,
            SettingField::OverrideMusicRando => {
                advanced.override_music_rando = self.parse_toggle(value)?
            }
            SettingField::MusicRando => advanced.music_rando = self.parse_choice(value)?,
            SettingField::OverrideFlipLevels => {
                advanced.override_flip_levels = self.parse_toggle(value)?
            }
            SettingField::FlipLevels => advanced.flip_levels = self.parse_choice(value)?,
            SettingField::OverrideResetLevel => {
                advanced.override_reset_level = self.parse_toggle(value)?
            }
            SettingField::ResetLevelOnDeath => {
                advanced.reset_level_on_death = self.parse_toggle(value)?
            }
            SettingField::ForceDeathLinkOff => {
                advanced.force_death_link_off = self.parse_toggle(value)?
            }
            SettingField::FastMonsters => advanced.fast_monsters = self.parse_toggle(value)?,
            SettingField::GameDir => settings.paths.game_dir = value.to_string(),
            SettingField::LogsFolder => settings.paths.logs_folder = value.to_string(),
        }
        Ok(())
    }

    fn parse_toggle(&self, value: &str) -> Result<bool, FormError> {
        parse_toggle(value).ok_or_else(|| FormError::InvalidValue {
            field: self.key(),
            value: value.to_string(),
            expected: "on/off, true/false, yes/no or 1/0".to_string(),
        })
    }

    fn parse_choice<T>(&self, value: &str) -> Result<T, FormError>
    where
        T: Choice + FromStr,
    {
        value.parse::<T>().map_err(|_| FormError::InvalidValue {
            field: self.key(),
            value: value.to_string(),
            expected: T::ALL.iter().map(|v| v.key()).collect::<Vec<_>>().join(", "),
        })
    }
}

impl std::fmt::Display for SettingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingField {
    type Err = FormError;

    /// Accepts the persisted key; dashes work in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        SettingField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

fn choice_list<T: Choice>() -> Vec<(&'static str, &'static str)> {
    T::ALL.iter().map(|v| (v.key(), v.label())).collect()
}

fn parse_toggle(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
