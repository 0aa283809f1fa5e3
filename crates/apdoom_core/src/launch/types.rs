//! Types shared by the command-line compiler and the process launcher.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while launching the game.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Game executable not found: {0}")]
    ExecutableNotFound(PathBuf),

    #[error("Failed to start {executable}: {source}")]
    SpawnFailed {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for launch operations.
pub type LaunchResult<T> = Result<T, LaunchError>;

/// One segment of the compiled command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LaunchArg {
    /// A single argument.
    Token(String),
    /// User-supplied text appended as-is, possibly holding several arguments.
    Passthrough(String),
}

impl LaunchArg {
    /// The text of this segment as it appears in the command line.
    pub fn as_str(&self) -> &str {
        match self {
            LaunchArg::Token(s) | LaunchArg::Passthrough(s) => s,
        }
    }
}

/// A compiled launch: which executable to run and with what arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchCommand {
    /// Executable to spawn.
    pub executable: PathBuf,
    /// Directory to start the game in, if not the launcher's own.
    pub working_dir: Option<PathBuf>,
    /// Ordered command-line segments.
    pub args: Vec<LaunchArg>,
}

impl LaunchCommand {
    /// Executable path.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// The full argument string, segments joined by single spaces.
    pub fn command_line(&self) -> String {
        self.args
            .iter()
            .map(LaunchArg::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Arguments as a list of separate words.
    ///
    /// Tokens are passed as-is. Passthrough text is split into words the way
    /// a POSIX shell would, so quoted paths stay whole. Text with an
    /// unterminated quote falls back to a plain whitespace split.
    pub fn spawn_args(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            match arg {
                LaunchArg::Token(token) => out.push(token.clone()),
                LaunchArg::Passthrough(raw) => out.extend(split_passthrough(raw)),
            }
        }
        out
    }

    /// Whether a bare token (flag or value) is present.
    #[cfg(test)]
    pub(crate) fn has_token(&self, token: &str) -> bool {
        self.args
            .iter()
            .any(|arg| matches!(arg, LaunchArg::Token(t) if t == token))
    }

    /// Value following a flag, if the flag is present.
    #[cfg(test)]
    pub(crate) fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|arg| matches!(arg, LaunchArg::Token(t) if t == flag))
            .and_then(|i| self.args.get(i + 1))
            .map(LaunchArg::as_str)
    }
}

fn split_passthrough(raw: &str) -> Vec<String> {
    match shlex::split(raw) {
        Some(words) => words,
        None => {
            tracing::warn!(
                "Unbalanced quotes in extra arguments, splitting on spaces: {}",
                raw
            );
            raw.split_whitespace().map(str::to_string).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LaunchCommand {
        LaunchCommand {
            executable: PathBuf::from("crispy-apdoom"),
            working_dir: None,
            args: vec![
                LaunchArg::Token("-apserver".to_string()),
                LaunchArg::Token("localhost:38281".to_string()),
                LaunchArg::Passthrough("-warp 1  -nomusic".to_string()),
                LaunchArg::Token("-fast".to_string()),
            ],
        }
    }

    #[test]
    fn command_line_keeps_passthrough_verbatim() {
        assert_eq!(
            sample().command_line(),
            "-apserver localhost:38281 -warp 1  -nomusic -fast"
        );
    }

    #[test]
    fn spawn_args_split_passthrough_only() {
        assert_eq!(
            sample().spawn_args(),
            vec!["-apserver", "localhost:38281", "-warp", "1", "-nomusic", "-fast"]
        );
    }

    #[test]
    fn quoted_passthrough_path_stays_one_argument() {
        let cmd = LaunchCommand {
            executable: PathBuf::from("crispy-apdoom"),
            working_dir: None,
            args: vec![
                LaunchArg::Token("-skill".to_string()),
                LaunchArg::Token("4".to_string()),
                LaunchArg::Passthrough(r#"-file "My WADs/sigil.wad""#.to_string()),
            ],
        };

        assert_eq!(
            cmd.spawn_args(),
            vec!["-skill", "4", "-file", "My WADs/sigil.wad"]
        );
        assert_eq!(cmd.command_line(), r#"-skill 4 -file "My WADs/sigil.wad""#);
    }

    #[test]
    fn unterminated_quote_falls_back_to_spaces() {
        assert_eq!(
            split_passthrough(r#"-file "My WADs"#),
            vec!["-file", "\"My", "WADs"]
        );
    }

    #[test]
    fn passthrough_is_not_a_token() {
        let cmd = sample();
        assert!(cmd.has_token("-fast"));
        assert!(!cmd.has_token("-warp"));
        assert_eq!(cmd.value_of("-apserver"), Some("localhost:38281"));
        assert_eq!(cmd.value_of("-fast"), None);
    }

    #[test]
    fn serializes_args_with_kind() {
        let json = serde_json::to_string(&LaunchArg::Passthrough("-x".to_string())).unwrap();
        assert_eq!(json, r#"{"kind":"passthrough","value":"-x"}"#);
    }
}
