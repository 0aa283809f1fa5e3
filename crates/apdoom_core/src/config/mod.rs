//! Configuration management for the APDoom launcher.
//!
//! This module provides:
//! - TOML-based settings with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Pre-launch validation
//!
//! # Example
//!
//! ```no_run
//! use apdoom_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/launcher.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Server: {}", config.settings().connection.server);
//!
//! // Modify a setting
//! config.settings_mut().advanced.fast_monsters = true;
//!
//! // Save just the advanced section atomically
//! config.update_section(ConfigSection::Advanced).unwrap();
//! ```

mod manager;
mod settings;
mod validation;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    AdvancedSettings, ConfigSection, ConnectionSettings, DisplaySettings, LauncherSettings,
    PathSettings, Settings,
};
pub use validation::ValidationIssue;
