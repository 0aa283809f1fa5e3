//! APDoom Core - settings and launch logic for the APDoom launcher
//!
//! This crate contains all launcher logic with zero UI dependencies.
//! It is used by the command-line front end and can back a GUI form.

pub mod config;
pub mod form;
pub mod launch;
pub mod logging;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
