//! Configuration management CLI commands.

use crate::cli::common::{print_json, resolve_version, CliError, CliResult};
use crate::config::{validate_notation, Config, ThemeMode};
use crate::constants::APP_NAME;
use crate::history::PickHistory;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Palette version (v1, v2, or v3)
    #[arg(long, value_name = "VERSION")]
    version: Option<String>,

    /// Notation tag, e.g. "hex" or "rgb" (see `notations`)
    #[arg(long, value_name = "NOTATION")]
    notation: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    selection: SelectionOutput,
    ui: UiOutput,
    paths: PathsOutput,
}

#[derive(Serialize, Debug)]
struct SelectionOutput {
    version: String,
    notation: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    config_file: String,
    history_file: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load_or_default();
        let paths = paths_output()?;

        if self.json {
            print_json(&ConfigOutput {
                selection: SelectionOutput {
                    version: config.selection.version.to_string(),
                    notation: config.selection.notation.clone(),
                },
                ui: UiOutput {
                    theme: config.ui.theme_mode.as_str().to_string(),
                },
                paths,
            })
        } else {
            output_human_readable(&config, &paths);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.version.is_none() && self.notation.is_none() && self.theme.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --version, --notation, or --theme",
            ));
        }

        let mut config = Config::load_or_default();

        if let Some(version) = self.version.as_deref() {
            config.selection.version = resolve_version(Some(version), &config)?;
        }

        if let Some(notation) = &self.notation {
            validate_notation(notation).map_err(|e| CliError::validation(e.to_string()))?;
            config.selection.notation.clone_from(notation);
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn paths_output() -> CliResult<PathsOutput> {
    let config_file = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate config file: {e}")))?;
    let history_file = PickHistory::file_path()
        .map_err(|e| CliError::io(format!("Failed to locate history file: {e}")))?;

    Ok(PathsOutput {
        config_file: config_file.to_string_lossy().to_string(),
        history_file: history_file.to_string_lossy().to_string(),
    })
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, paths: &PathsOutput) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Selection:");
    println!("  Palette Version: {}", config.selection.version);
    println!("  Notation: {}", config.selection.notation);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!();

    println!("Paths:");
    println!("  Config File: {}", paths.config_file);
    println!("  History File: {}", paths.history_file);
}
