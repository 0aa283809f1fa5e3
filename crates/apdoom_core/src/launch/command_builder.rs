//! Engine command-line builder.
//!
//! Compiles `Settings` into the argument list understood by the
//! crispy-apdoom / crispy-apheretic argument parser. Arguments are emitted
//! in a fixed order:
//!
//! 1. `-apserver <server> -applayerhex <hex slot name>`
//! 2. `-password <password>` when a password is set
//! 3. `-game doom|doom2|heretic`
//! 4. `-fullscreen`, or `-nofullscreen -width <w> -height <h>`
//! 5. extra command line, verbatim
//! 6. advanced overrides, each only when its override flag is on
//!
//! Nothing is validated here. Width, height and the extra command line go
//! out exactly as typed.

use std::path::PathBuf;

use crate::config::Settings;
use crate::models::{Choice, Game};

use super::slot::encode_slot_hex;
use super::types::{LaunchArg, LaunchCommand};

/// Executable for the Doom engine build (Ultimate DOOM and DOOM II).
pub const DOOM_EXECUTABLE: &str = "crispy-apdoom";

/// Executable for the Heretic engine build.
pub const HERETIC_EXECUTABLE: &str = "crispy-apheretic";

/// Flags the engine reads together with the argument after them.
const VALUE_FLAGS: &[&str] = &[
    "-apserver",
    "-applayerhex",
    "-password",
    "-game",
    "-width",
    "-height",
    "-skill",
    "-apmonsterrando",
    "-apitemrando",
    "-apmusicrando",
    "-apfliplevels",
    "-apresetlevelondeath",
];

/// File name of the executable that runs `game`, with the platform suffix.
pub fn executable_name(game: Game) -> String {
    let stem = match game {
        Game::UltimateDoom | Game::Doom2 => DOOM_EXECUTABLE,
        Game::Heretic => HERETIC_EXECUTABLE,
    };
    format!("{}{}", stem, std::env::consts::EXE_SUFFIX)
}

/// Builder for the game's command line.
pub struct LaunchCommandBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> LaunchCommandBuilder<'a> {
    /// Create a new builder over a settings snapshot.
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Build the complete launch command.
    pub fn build(&self) -> LaunchCommand {
        let mut args = Vec::new();

        self.add_connection(&mut args);
        self.add_game(&mut args);
        self.add_display(&mut args);

        let extra = &self.settings.launcher.command_line;
        if !extra.is_empty() {
            args.push(LaunchArg::Passthrough(extra.clone()));
        }

        self.add_advanced(&mut args);

        let (executable, working_dir) = self.resolve_executable();

        LaunchCommand {
            executable,
            working_dir,
            args,
        }
    }

    /// Server, slot and password.
    fn add_connection(&self, args: &mut Vec<LaunchArg>) {
        let connection = &self.settings.connection;

        push_pair(args, "-apserver", &connection.server);
        push_pair(args, "-applayerhex", encode_slot_hex(&connection.slot_name));

        if !connection.password.is_empty() {
            push_pair(args, "-password", &connection.password);
        }
    }

    fn add_game(&self, args: &mut Vec<LaunchArg>) {
        push_pair(args, "-game", self.settings.launcher.game.engine_name());
    }

    /// Window mode and resolution.
    fn add_display(&self, args: &mut Vec<LaunchArg>) {
        let display = &self.settings.display;

        if display.fullscreen {
            push_flag(args, "-fullscreen");
        } else {
            push_flag(args, "-nofullscreen");
            push_pair(args, "-width", &display.width);
            push_pair(args, "-height", &display.height);
        }
    }

    /// Overrides of the server's game settings.
    fn add_advanced(&self, args: &mut Vec<LaunchArg>) {
        let advanced = &self.settings.advanced;

        if advanced.override_difficulty {
            push_pair(args, "-skill", advanced.difficulty.skill().to_string());
        }
        if advanced.override_monster_rando {
            push_pair(args, "-apmonsterrando", advanced.monster_rando.index().to_string());
        }
        if advanced.override_item_rando {
            push_pair(args, "-apitemrando", advanced.item_rando.index().to_string());
        }
        if advanced.override_music_rando {
            push_pair(args, "-apmusicrando", advanced.music_rando.index().to_string());
        }
        if advanced.override_flip_levels {
            push_pair(args, "-apfliplevels", advanced.flip_levels.index().to_string());
        }
        if advanced.override_reset_level {
            let value = if advanced.reset_level_on_death { "1" } else { "0" };
            push_pair(args, "-apresetlevelondeath", value);
        }
        if advanced.force_death_link_off {
            push_flag(args, "-apdeathlinkoff");
        }
        if advanced.fast_monsters {
            push_flag(args, "-fast");
        }

        tracing::trace!("advanced overrides compiled: {:?}", advanced);
    }

    /// Executable path and working directory.
    ///
    /// With no game folder configured the bare file name is used and the
    /// game starts in the launcher's working directory.
    fn resolve_executable(&self) -> (PathBuf, Option<PathBuf>) {
        let name = executable_name(self.settings.launcher.game);
        let game_dir = self.settings.paths.game_dir.trim();

        if game_dir.is_empty() {
            (PathBuf::from(name), None)
        } else {
            let dir = PathBuf::from(game_dir);
            (dir.join(name), Some(dir))
        }
    }
}

fn push_flag(args: &mut Vec<LaunchArg>, flag: &str) {
    args.push(LaunchArg::Token(flag.to_string()));
}

fn push_pair(args: &mut Vec<LaunchArg>, flag: &str, value: impl Into<String>) {
    args.push(LaunchArg::Token(flag.to_string()));
    args.push(LaunchArg::Token(value.into()));
}

/// Format a command for pretty display (one option per line).
pub fn format_command_pretty(command: &LaunchCommand) -> String {
    let mut result = format!("{} \\\n", command.executable.display());
    let args = &command.args;
    let mut i = 0;

    while i < args.len() {
        match (&args[i], args.get(i + 1)) {
            (LaunchArg::Token(flag), Some(LaunchArg::Token(value)))
                if VALUE_FLAGS.contains(&flag.as_str()) =>
            {
                // Option with value
                result.push_str(&format!("  {} {}", flag, value));
                i += 2;
            }
            (arg, _) => {
                result.push_str(&format!("  {}", arg.as_str()));
                i += 1;
            }
        }
        if i < args.len() {
            result.push_str(" \\");
        }
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, FlipLevels, ItemRando, MonsterRando, MusicRando};

    fn base_settings() -> Settings {
        let mut settings = Settings::default();
        settings.connection.server = "archipelago.gg:38281".to_string();
        settings.connection.slot_name = "Player1".to_string();
        settings.display.width = "1280".to_string();
        settings.display.height = "720".to_string();
        settings
    }

    fn build(settings: &Settings) -> LaunchCommand {
        LaunchCommandBuilder::new(settings).build()
    }

    #[test]
    fn builds_reference_command_line() {
        let mut settings = base_settings();
        settings.launcher.game = Game::Doom2;
        settings.advanced.override_difficulty = true;
        settings.advanced.difficulty = Difficulty::Hard;

        let command = build(&settings);

        assert_eq!(
            command.command_line(),
            "-apserver archipelago.gg:38281 -applayerhex 506C6179657231 -game doom2 \
             -nofullscreen -width 1280 -height 720 -skill 4"
        );
        assert_eq!(
            command.executable,
            PathBuf::from(format!("crispy-apdoom{}", std::env::consts::EXE_SUFFIX))
        );
        assert_eq!(command.working_dir, None);
    }

    #[test]
    fn windowed_emits_literal_dimensions() {
        let mut settings = base_settings();
        settings.display.width = "800x".to_string();
        settings.display.height = "600".to_string();

        let line = build(&settings).command_line();
        assert!(line.contains("-nofullscreen -width 800x -height 600"));
    }

    #[test]
    fn fullscreen_omits_dimensions() {
        let mut settings = base_settings();
        settings.display.fullscreen = true;

        let command = build(&settings);
        assert!(command.has_token("-fullscreen"));
        assert!(!command.has_token("-nofullscreen"));
        assert!(!command.has_token("-width"));
        assert!(!command.has_token("-height"));
    }

    #[test]
    fn password_sits_between_player_and_game() {
        let mut settings = base_settings();
        settings.connection.password = "secret".to_string();

        let line = build(&settings).command_line();
        assert!(line.starts_with(
            "-apserver archipelago.gg:38281 -applayerhex 506C6179657231 \
             -password secret -game doom "
        ));
    }

    #[test]
    fn empty_password_is_omitted() {
        let command = build(&base_settings());
        assert!(!command.has_token("-password"));
    }

    #[test]
    fn game_selects_parameter_and_executable() {
        let mut settings = base_settings();
        for (game, name, exe) in [
            (Game::UltimateDoom, "doom", DOOM_EXECUTABLE),
            (Game::Doom2, "doom2", DOOM_EXECUTABLE),
            (Game::Heretic, "heretic", HERETIC_EXECUTABLE),
        ] {
            settings.launcher.game = game;
            let command = build(&settings);
            assert_eq!(command.value_of("-game"), Some(name));
            assert_eq!(
                command.executable,
                PathBuf::from(format!("{}{}", exe, std::env::consts::EXE_SUFFIX))
            );
        }
    }

    #[test]
    fn extra_command_line_follows_display_verbatim() {
        let mut settings = base_settings();
        settings.launcher.command_line = "-warp 1 1  -nomonsters".to_string();
        settings.advanced.fast_monsters = true;

        let line = build(&settings).command_line();
        assert!(line.ends_with("-height 720 -warp 1 1  -nomonsters -fast"));
    }

    #[test]
    fn overrides_off_emit_nothing() {
        let mut settings = base_settings();
        // Values set, but every override flag left off
        settings.advanced.difficulty = Difficulty::Nightmare;
        settings.advanced.monster_rando = MonsterRando::RandomChaotic;
        settings.advanced.reset_level_on_death = false;

        let command = build(&settings);
        for flag in [
            "-skill",
            "-apmonsterrando",
            "-apitemrando",
            "-apmusicrando",
            "-apfliplevels",
            "-apresetlevelondeath",
            "-apdeathlinkoff",
            "-fast",
        ] {
            assert!(!command.has_token(flag), "{} should be absent", flag);
        }
    }

    #[test]
    fn overrides_on_emit_indices_in_order() {
        let mut settings = base_settings();
        let advanced = &mut settings.advanced;
        advanced.override_difficulty = true;
        advanced.difficulty = Difficulty::Baby;
        advanced.override_monster_rando = true;
        advanced.monster_rando = MonsterRando::RandomChaotic;
        advanced.override_item_rando = true;
        advanced.item_rando = ItemRando::RandomBalanced;
        advanced.override_music_rando = true;
        advanced.music_rando = MusicRando::ShuffleSelected;
        advanced.override_flip_levels = true;
        advanced.flip_levels = FlipLevels::Flipped;
        advanced.override_reset_level = true;
        advanced.reset_level_on_death = false;
        advanced.force_death_link_off = true;
        advanced.fast_monsters = true;

        let line = build(&settings).command_line();
        assert!(line.ends_with(
            "-height 720 -skill 1 -apmonsterrando 3 -apitemrando 2 -apmusicrando 1 \
             -apfliplevels 1 -apresetlevelondeath 0 -apdeathlinkoff -fast"
        ));
    }

    #[test]
    fn reset_level_on_is_one() {
        let mut settings = base_settings();
        settings.advanced.override_reset_level = true;
        settings.advanced.reset_level_on_death = true;

        assert_eq!(build(&settings).value_of("-apresetlevelondeath"), Some("1"));
    }

    #[test]
    fn game_dir_prefixes_executable() {
        let mut settings = base_settings();
        settings.paths.game_dir = "games/apdoom".to_string();
        settings.launcher.game = Game::Heretic;

        let command = build(&settings);
        assert_eq!(
            command.executable,
            PathBuf::from("games/apdoom").join(executable_name(Game::Heretic))
        );
        assert_eq!(command.working_dir, Some(PathBuf::from("games/apdoom")));
    }

    #[test]
    fn pretty_format_pairs_flags_with_values() {
        let mut settings = base_settings();
        settings.display.fullscreen = true;
        settings.advanced.force_death_link_off = true;

        let pretty = format_command_pretty(&build(&settings));
        assert!(pretty.contains("  -apserver archipelago.gg:38281 \\\n"));
        assert!(pretty.contains("  -fullscreen \\\n"));
        assert!(pretty.ends_with("  -apdeathlinkoff\n"));
    }

    #[test]
    fn pretty_format_keeps_dash_values_with_their_flag() {
        let mut settings = base_settings();
        settings.connection.password = "-x".to_string();
        settings.display.width = "-1".to_string();

        let pretty = format_command_pretty(&build(&settings));
        assert!(pretty.contains("  -password -x \\\n"));
        assert!(pretty.contains("  -width -1 \\\n"));
        assert!(pretty.contains("  -nofullscreen \\\n"));
    }

    #[test]
    fn every_emitted_pair_is_a_known_value_flag() {
        let mut settings = base_settings();
        settings.connection.password = "pw".to_string();
        settings.advanced.override_difficulty = true;
        settings.advanced.override_monster_rando = true;
        settings.advanced.override_item_rando = true;
        settings.advanced.override_music_rando = true;
        settings.advanced.override_flip_levels = true;
        settings.advanced.override_reset_level = true;

        let command = build(&settings);
        for flag in VALUE_FLAGS {
            assert!(command.value_of(flag).is_some(), "{} missing", flag);
        }
    }
}
