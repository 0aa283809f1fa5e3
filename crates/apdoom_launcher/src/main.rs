//! APDoom Launcher - Main entry point
//!
//! Handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - Dispatching the requested subcommand

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use apdoom_core::config::ConfigManager;
use apdoom_core::logging::init_tracing_with_file;

mod cli;
mod commands;

use cli::Cli;
use commands::Outcome;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration first (needed for logs directory path)
    let config_path = cli.config_path();
    let mut config = ConfigManager::new(&config_path);
    let load_result = config.load_or_create().map(|_| ());

    let logs_dir = PathBuf::from(&config.settings().paths.logs_folder);
    let _log_guard = init_tracing_with_file(cli.log_level, &logs_dir);

    tracing::debug!("APDoom launcher starting");
    tracing::debug!("Config: {}", config_path.display());
    tracing::debug!("Core version: {}", apdoom_core::version());

    if let Err(e) = load_result {
        tracing::error!("Failed to load config {}: {}", config_path.display(), e);
        eprintln!("Error: failed to load {}: {}", config_path.display(), e);
        return ExitCode::FAILURE;
    }

    let mut stdout = io::stdout().lock();
    match commands::run(&mut config, cli.command, &mut stdout) {
        Ok(Outcome::Launched { pid }) => {
            tracing::info!("Game started (pid {}), launcher exiting", pid);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
