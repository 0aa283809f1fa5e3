//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use apdoom_core::form::SettingField;
use apdoom_core::logging::LogLevel;
use apdoom_core::models::{Choice, Game};

/// Default config path: .config/launcher.toml (relative to current working directory)
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("launcher.toml")
}

/// APDoom launcher
///
/// Edits the launcher settings and starts crispy-apdoom / crispy-apheretic
/// connected to an Archipelago server.
#[derive(Parser, Debug)]
#[command(name = "apdoom-launcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, short = 'l', global = true, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Settings file to use.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save settings, start the game and exit (default)
    Launch(LaunchArgs),

    /// Print the command line that `launch` would run
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one setting, or all of them
    Get {
        field: Option<SettingField>,
    },

    /// Change one setting and save it
    Set {
        field: SettingField,
        value: String,
    },

    /// List the values accepted by a choice setting
    Choices {
        field: SettingField,
    },

    /// Advanced settings (server overrides)
    #[command(subcommand)]
    Advanced(AdvancedCommand),
}

#[derive(Subcommand, Debug)]
pub enum AdvancedCommand {
    /// Show override settings and whether each control is active
    Show,
    /// Restore defaults: every setting follows the server
    Reset,
}

/// Form fields that can be changed for a launch.
///
/// Values given here are saved along with the launch, like editing the
/// form before pressing the launch button.
#[derive(Args, Debug, Default)]
pub struct LaunchArgs {
    /// Game to start (ultimate_doom, doom2, heretic)
    #[arg(long, short = 'g')]
    pub game: Option<Game>,

    /// Archipelago server, host:port
    #[arg(long, short = 's')]
    pub server: Option<String>,

    /// Slot (player) name
    #[arg(long)]
    pub slot: Option<String>,

    /// Room password
    #[arg(long)]
    pub password: Option<String>,

    /// Run fullscreen
    #[arg(long, conflicts_with = "windowed")]
    pub fullscreen: bool,

    /// Run in a window
    #[arg(long)]
    pub windowed: bool,

    /// Window width
    #[arg(long)]
    pub width: Option<String>,

    /// Window height
    #[arg(long)]
    pub height: Option<String>,

    /// Extra arguments appended verbatim
    #[arg(long, allow_hyphen_values = true)]
    pub extra: Option<String>,

    /// Launch even if the settings look wrong
    #[arg(long)]
    pub skip_validation: bool,

    /// Save and print the command without starting the game
    #[arg(long)]
    pub dry_run: bool,
}

impl LaunchArgs {
    /// Field edits requested on the command line, in form order.
    pub fn edits(&self) -> Vec<(SettingField, String)> {
        let mut edits = Vec::new();

        if let Some(game) = self.game {
            edits.push((SettingField::Game, game.key().to_string()));
        }
        if self.fullscreen {
            edits.push((SettingField::Fullscreen, "true".to_string()));
        }
        if self.windowed {
            edits.push((SettingField::Fullscreen, "false".to_string()));
        }

        let text_edits = [
            (SettingField::Width, &self.width),
            (SettingField::Height, &self.height),
            (SettingField::CommandLine, &self.extra),
            (SettingField::Server, &self.server),
            (SettingField::SlotName, &self.slot),
            (SettingField::Password, &self.password),
        ];
        for (field, value) in text_edits {
            if let Some(value) = value {
                edits.push((field, value.clone()));
            }
        }

        edits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_launch() {
        let cli = Cli::try_parse_from(["apdoom-launcher"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config_path(), default_config_path());
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn launch_overrides_become_edits() {
        let cli = Cli::try_parse_from([
            "apdoom-launcher",
            "launch",
            "--game",
            "doom2",
            "--slot",
            "Player1",
            "--windowed",
            "--width",
            "1280",
            "--extra",
            "-warp 1",
        ])
        .unwrap();

        let Some(Command::Launch(args)) = cli.command else {
            panic!("expected launch");
        };
        assert_eq!(
            args.edits(),
            vec![
                (SettingField::Game, "doom2".to_string()),
                (SettingField::Fullscreen, "false".to_string()),
                (SettingField::Width, "1280".to_string()),
                (SettingField::CommandLine, "-warp 1".to_string()),
                (SettingField::SlotName, "Player1".to_string()),
            ]
        );
    }

    #[test]
    fn fullscreen_and_windowed_conflict() {
        let result =
            Cli::try_parse_from(["apdoom-launcher", "launch", "--fullscreen", "--windowed"]);
        assert!(result.is_err());
    }

    #[test]
    fn set_parses_field_key() {
        let cli = Cli::try_parse_from([
            "apdoom-launcher",
            "--config",
            "alt.toml",
            "set",
            "override-difficulty",
            "on",
        ])
        .unwrap();

        assert_eq!(cli.config_path(), PathBuf::from("alt.toml"));
        match cli.command {
            Some(Command::Set { field, value }) => {
                assert_eq!(field, SettingField::OverrideDifficulty);
                assert_eq!(value, "on");
            }
            other => panic!("expected set, got {:?}", other),
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(Cli::try_parse_from(["apdoom-launcher", "get", "player"]).is_err());
    }
}
