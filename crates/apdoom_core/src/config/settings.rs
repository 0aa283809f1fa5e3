//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, FlipLevels, Game, ItemRando, MonsterRando, MusicRando};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Game selection and extra command line.
    #[serde(default)]
    pub launcher: LauncherSettings,

    /// Window mode and resolution.
    #[serde(default)]
    pub display: DisplaySettings,

    /// Multiplayer server connection.
    #[serde(default)]
    pub connection: ConnectionSettings,

    /// Per-feature overrides of the server's game settings.
    #[serde(default)]
    pub advanced: AdvancedSettings,

    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,
}

/// Game selection and free-form extra arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// Game to launch.
    #[serde(default)]
    pub game: Game,

    /// Extra arguments appended verbatim to the command line.
    #[serde(default)]
    pub command_line: String,
}

/// Display configuration.
///
/// Width and height are kept as the text the user typed. They are
/// only checked by `Settings::validate`, never by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Run fullscreen at desktop resolution.
    #[serde(default)]
    pub fullscreen: bool,

    /// Window width.
    #[serde(default = "default_width")]
    pub width: String,

    /// Window height.
    #[serde(default = "default_height")]
    pub height: String,
}

fn default_width() -> String {
    "1280".to_string()
}

fn default_height() -> String {
    "720".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fullscreen: false,
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Multiplayer server connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Server address as `host:port`.
    #[serde(default = "default_server")]
    pub server: String,

    /// Slot (player) name.
    #[serde(default)]
    pub slot_name: String,

    /// Room password, empty for none.
    #[serde(default)]
    pub password: String,
}

fn default_server() -> String {
    "archipelago.gg:38281".to_string()
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            server: default_server(),
            slot_name: String::new(),
            password: String::new(),
        }
    }
}

/// Overrides for settings the server would otherwise decide.
///
/// Each `override_*` flag gates whether its paired value reaches the
/// command line at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSettings {
    #[serde(default)]
    pub override_difficulty: bool,
    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub override_monster_rando: bool,
    #[serde(default)]
    pub monster_rando: MonsterRando,

    #[serde(default)]
    pub override_item_rando: bool,
    #[serde(default)]
    pub item_rando: ItemRando,

    #[serde(default)]
    pub override_music_rando: bool,
    #[serde(default)]
    pub music_rando: MusicRando,

    #[serde(default)]
    pub override_flip_levels: bool,
    #[serde(default)]
    pub flip_levels: FlipLevels,

    #[serde(default)]
    pub override_reset_level: bool,
    #[serde(default = "default_true")]
    pub reset_level_on_death: bool,

    /// Turn death link off regardless of the server setting.
    #[serde(default)]
    pub force_death_link_off: bool,

    /// Fast monsters (`-fast`).
    #[serde(default)]
    pub fast_monsters: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            override_difficulty: false,
            difficulty: Difficulty::Medium,
            override_monster_rando: false,
            monster_rando: MonsterRando::Shuffle,
            override_item_rando: false,
            item_rando: ItemRando::Shuffle,
            override_music_rando: false,
            music_rando: MusicRando::Vanilla,
            override_flip_levels: false,
            flip_levels: FlipLevels::Vanilla,
            override_reset_level: false,
            reset_level_on_death: true,
            force_death_link_off: false,
            fast_monsters: false,
        }
    }
}

/// Path configuration for executables and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder holding the game executables. Empty means the working directory.
    #[serde(default)]
    pub game_dir: String,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            game_dir: String::new(),
            logs_folder: default_logs_folder(),
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Launcher,
    Display,
    Connection,
    Advanced,
    Paths,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 5] = [
        ConfigSection::Launcher,
        ConfigSection::Display,
        ConfigSection::Connection,
        ConfigSection::Advanced,
        ConfigSection::Paths,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Launcher => "launcher",
            ConfigSection::Display => "display",
            ConfigSection::Connection => "connection",
            ConfigSection::Advanced => "advanced",
            ConfigSection::Paths => "paths",
        }
    }

    /// Comment written above the table in a freshly generated file.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Launcher => "# Game selection and extra command line",
            ConfigSection::Display => "# Window mode and resolution",
            ConfigSection::Connection => "# Archipelago server connection",
            ConfigSection::Advanced => "# Overrides of the server's game settings",
            ConfigSection::Paths => "# Game executables and log directories",
        }
    }
}
