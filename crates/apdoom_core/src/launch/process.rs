//! Spawning the game process.
//!
//! The game runs detached: the launcher starts it and exits without
//! waiting, so nothing here reads the child's output or status.

use std::io;
use std::process::Command;

use super::types::{LaunchCommand, LaunchError, LaunchResult};

/// Start the game described by `command`.
///
/// Returns the OS process id of the game.
pub fn spawn(command: &LaunchCommand) -> LaunchResult<u32> {
    let executable = command.executable();

    // Only a configured game folder gives a path we can check up front;
    // a bare name is left to the OS search.
    if command.working_dir.is_some() && !executable.exists() {
        return Err(LaunchError::ExecutableNotFound(executable.to_path_buf()));
    }

    let mut cmd = Command::new(executable);
    push_args(&mut cmd, command);
    if let Some(dir) = &command.working_dir {
        cmd.current_dir(dir);
    }

    tracing::debug!(
        "Running: {} {}",
        executable.display(),
        command.command_line()
    );

    let child = cmd.spawn().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LaunchError::ExecutableNotFound(executable.to_path_buf())
        } else {
            LaunchError::SpawnFailed {
                executable: executable.to_path_buf(),
                source: e,
            }
        }
    })?;

    let pid = child.id();
    tracing::info!("Started {} (pid {})", executable.display(), pid);

    Ok(pid)
}

/// Windows takes one command-line string, so passthrough text is handed
/// over untouched and the game's own parser sees the quotes as typed.
#[cfg(windows)]
fn push_args(cmd: &mut Command, command: &LaunchCommand) {
    use std::os::windows::process::CommandExt;

    use super::types::LaunchArg;

    for arg in &command.args {
        match arg {
            LaunchArg::Token(token) => {
                cmd.arg(token);
            }
            LaunchArg::Passthrough(raw) => {
                cmd.raw_arg(raw);
            }
        }
    }
}

#[cfg(not(windows))]
fn push_args(cmd: &mut Command, command: &LaunchCommand) {
    cmd.args(command.spawn_args());
}
