//! Subcommand handlers.
//!
//! Each handler works on an already loaded `ConfigManager` and writes its
//! user-facing output to `out`. Diagnostics go through `tracing`.

use std::io::Write;

use anyhow::{bail, Context, Result};

use apdoom_core::config::ConfigManager;
use apdoom_core::form::{FieldKind, FormModel, SettingField, ADVANCED_FIELDS};
use apdoom_core::launch::{self, format_command_pretty, LaunchCommand};

use crate::cli::{AdvancedCommand, Command, LaunchArgs};

/// What `main` should do after a command finished.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing left to do.
    Done,
    /// The game was started; the launcher should exit.
    Launched { pid: u32 },
}

/// Run a subcommand. No subcommand means `launch` with no overrides.
pub fn run(
    config: &mut ConfigManager,
    command: Option<Command>,
    out: &mut impl Write,
) -> Result<Outcome> {
    match command.unwrap_or_else(|| Command::Launch(LaunchArgs::default())) {
        Command::Launch(args) => launch_game(config, &args, out),
        Command::Show { json } => {
            show(config, json, out)?;
            Ok(Outcome::Done)
        }
        Command::Get { field } => {
            get(config, field, out)?;
            Ok(Outcome::Done)
        }
        Command::Set { field, value } => {
            set(config, field, &value, out)?;
            Ok(Outcome::Done)
        }
        Command::Choices { field } => {
            choices(field, out)?;
            Ok(Outcome::Done)
        }
        Command::Advanced(AdvancedCommand::Show) => {
            advanced_show(config, out)?;
            Ok(Outcome::Done)
        }
        Command::Advanced(AdvancedCommand::Reset) => {
            advanced_reset(config, out)?;
            Ok(Outcome::Done)
        }
    }
}

/// Apply form edits, validate, save, compile and start the game.
fn launch_game(
    config: &mut ConfigManager,
    args: &LaunchArgs,
    out: &mut impl Write,
) -> Result<Outcome> {
    let mut form = FormModel::from_settings(config.settings().clone());
    for (field, value) in args.edits() {
        form.set(field, &value)?;
    }

    let settings = form.into_settings();

    let issues = settings.validate();
    if !issues.is_empty() {
        for issue in &issues {
            tracing::warn!("Invalid setting: {}", issue);
        }
        if !args.skip_validation {
            let list: Vec<String> = issues.iter().map(|i| format!("  - {}", i)).collect();
            bail!(
                "settings are not valid (use --skip-validation to launch anyway):\n{}",
                list.join("\n")
            );
        }
    }

    // Settings are saved on every launch, even a dry run
    config.set_settings(settings);
    config
        .save()
        .with_context(|| format!("saving settings to {}", config.path().display()))?;

    let command = launch::compile(config.settings());
    log_command(&command);

    if args.dry_run {
        writeln!(out, "{}", render_command(&command))?;
        return Ok(Outcome::Done);
    }

    let pid = launch::spawn(&command)?;
    Ok(Outcome::Launched { pid })
}

/// Print the compiled command without launching.
fn show(config: &ConfigManager, json: bool, out: &mut impl Write) -> Result<()> {
    let command = launch::compile(config.settings());

    if json {
        writeln!(out, "{}", launch::format_command_json(&command)?)?;
    } else {
        write!(out, "{}", format_command_pretty(&command))?;
    }
    Ok(())
}

fn get(config: &ConfigManager, field: Option<SettingField>, out: &mut impl Write) -> Result<()> {
    let form = FormModel::from_settings(config.settings().clone());

    match field {
        Some(field) => writeln!(out, "{}", form.get(field))?,
        None => {
            for field in SettingField::ALL {
                writeln!(out, "{} = {}", field.key(), display_value(&form, field))?;
            }
        }
    }
    Ok(())
}

/// Edit one field and persist only its section.
fn set(
    config: &mut ConfigManager,
    field: SettingField,
    value: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut form = FormModel::from_settings(config.settings().clone());
    let affected = form.set(field, value)?;
    save_form(config, form)?;

    tracing::info!("Set {} in [{}]", field, field.section().table_name());
    writeln!(out, "{} = {}", field.key(), field.get(config.settings()))?;
    for control in affected {
        let state = if control.enabled { "enabled" } else { "disabled" };
        writeln!(out, "  {}: {}", control.field.label(), state)?;
    }
    Ok(())
}

fn choices(field: SettingField, out: &mut impl Write) -> Result<()> {
    let Some(choices) = field.choices() else {
        bail!("{} is not a choice setting", field);
    };

    for (index, (key, label)) in choices.iter().enumerate() {
        writeln!(out, "{}  {:<18} {}", index, key, label)?;
    }
    Ok(())
}

fn advanced_show(config: &ConfigManager, out: &mut impl Write) -> Result<()> {
    let form = FormModel::from_settings(config.settings().clone());

    for control in form.controls(&ADVANCED_FIELDS) {
        let state = if control.enabled { "" } else { "  (disabled)" };
        writeln!(
            out,
            "{:<40} {}{}",
            control.field.label(),
            display_value(&form, control.field),
            state
        )?;
    }
    Ok(())
}

fn advanced_reset(config: &mut ConfigManager, out: &mut impl Write) -> Result<()> {
    let mut form = FormModel::from_settings(config.settings().clone());
    form.reset_advanced();
    save_form(config, form)?;

    tracing::info!("Advanced settings reset to defaults");
    writeln!(out, "Advanced settings reset: all values follow the server.")?;
    Ok(())
}

/// Persist only the sections the form edited.
fn save_form(config: &mut ConfigManager, form: FormModel) -> Result<()> {
    if !form.is_modified() {
        return Ok(());
    }

    let sections = form.dirty_sections().to_vec();
    config.set_settings(form.into_settings());
    for section in sections {
        config
            .update_section(section)
            .with_context(|| format!("saving settings to {}", config.path().display()))?;
        tracing::debug!("Saved [{}]", section.table_name());
    }
    Ok(())
}

/// Value for listings: labels for choices, masked password.
fn display_value(form: &FormModel, field: SettingField) -> String {
    let value = form.get(field);
    match field.kind() {
        FieldKind::Choice => field
            .choices()
            .and_then(|list| list.into_iter().find(|(key, _)| *key == value))
            .map(|(_, label)| label.to_string())
            .unwrap_or(value),
        _ if field == SettingField::Password && !value.is_empty() => "********".to_string(),
        _ => value,
    }
}

fn render_command(command: &LaunchCommand) -> String {
    format!("{} {}", command.executable().display(), command.command_line())
}

fn log_command(command: &LaunchCommand) {
    tracing::info!("$ {}", render_command(command));
    tracing::debug!("Arguments: {:?}", command.spawn_args());
}
