//! Pre-launch validation of settings.
//!
//! The command-line compiler passes values through untouched; this is the
//! only place that looks at whether they make sense.

use super::settings::Settings;

/// A problem found in the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Width or height is not an integer >= 1.
    InvalidDimension { field: &'static str, value: String },
    /// Server address is empty.
    MissingServer,
    /// Server address has no `:port` part.
    MissingPort(String),
    /// Slot name is empty.
    MissingSlotName,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::InvalidDimension { field, value } => {
                write!(f, "{} must be a whole number of at least 1 (got '{}')", field, value)
            }
            ValidationIssue::MissingServer => write!(f, "server address is empty"),
            ValidationIssue::MissingPort(server) => {
                write!(f, "server address '{}' has no port (expected host:port)", server)
            }
            ValidationIssue::MissingSlotName => write!(f, "slot name is empty"),
        }
    }
}

impl Settings {
    /// Check settings before launching.
    ///
    /// Returns every issue found; an empty list means the settings are good.
    /// Width and height are ignored in fullscreen mode since they are not sent.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if !self.display.fullscreen {
            for (field, value) in [
                ("width", &self.display.width),
                ("height", &self.display.height),
            ] {
                if !is_positive_integer(value) {
                    issues.push(ValidationIssue::InvalidDimension {
                        field,
                        value: value.clone(),
                    });
                }
            }
        }

        let server = self.connection.server.trim();
        if server.is_empty() {
            issues.push(ValidationIssue::MissingServer);
        } else if !has_port(server) {
            issues.push(ValidationIssue::MissingPort(server.to_string()));
        }

        if self.connection.slot_name.is_empty() {
            issues.push(ValidationIssue::MissingSlotName);
        }

        issues
    }
}

fn is_positive_integer(value: &str) -> bool {
    // u32 parsing alone would accept a leading '+'
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && matches!(value.parse::<u32>(), Ok(n) if n >= 1)
}

fn has_port(server: &str) -> bool {
    match server.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}
