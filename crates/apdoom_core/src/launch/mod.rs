//! Launch module: settings to command line to game process.
//!
//! # Architecture
//!
//! - **command_builder**: Compiles `Settings` into a `LaunchCommand`
//! - **slot**: Hex encoding of the slot name
//! - **process**: Spawns the game from a `LaunchCommand`
//!
//! # Example
//!
//! ```no_run
//! use apdoom_core::config::Settings;
//! use apdoom_core::launch;
//!
//! let settings = Settings::default();
//! let command = launch::compile(&settings);
//! println!("{}", command.command_line());
//! launch::spawn(&command).unwrap();
//! ```

mod command_builder;
mod process;
mod slot;
mod types;

pub use command_builder::{
    executable_name, format_command_pretty, LaunchCommandBuilder, DOOM_EXECUTABLE,
    HERETIC_EXECUTABLE,
};
pub use process::spawn;
pub use slot::encode_slot_hex;
pub use types::{LaunchArg, LaunchCommand, LaunchError, LaunchResult};

use crate::config::Settings;

/// Compile settings into a launch command.
pub fn compile(settings: &Settings) -> LaunchCommand {
    LaunchCommandBuilder::new(settings).build()
}

/// Render a command as JSON (executable, working dir and tagged arguments).
pub fn format_command_json(command: &LaunchCommand) -> serde_json::Result<String> {
    serde_json::to_string_pretty(command)
}
