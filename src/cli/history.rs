//! Pick history commands.

use crate::cli::common::{output_theme, print_json, resolve_notation, CliError, CliResult};
use crate::cli::pick::{clipboard, report};
use crate::clipboard::MemoryClipboard;
use crate::config::{Config, Selection};
use crate::history::PickHistory;
use crate::notation::format_color;
use crate::picker::Picker;
use crate::render::{color_enabled, render_history};
use crate::theme::Theme;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Show, clear or re-copy recent picks
#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommand,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List recent picks, newest first
    Show(HistoryShowArgs),
    /// Remove every recorded pick
    Clear,
    /// Copy a recorded pick again (0 = newest)
    Copy(HistoryCopyArgs),
}

/// List recent picks
#[derive(Args, Debug)]
pub struct HistoryShowArgs {
    /// Notation for the listed values; defaults to the saved selection
    #[arg(short, long, value_name = "NOTATION")]
    notation: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors and swatches
    #[arg(long)]
    plain: bool,
}

/// Copy a recorded pick again
#[derive(Args, Debug)]
pub struct HistoryCopyArgs {
    /// Position in the history (0 = newest)
    #[arg(value_name = "INDEX")]
    index: usize,

    /// Notation of the copied value; defaults to the saved selection
    #[arg(short, long, value_name = "NOTATION")]
    notation: Option<String>,

    /// Print the value without touching the clipboard
    #[arg(long)]
    no_copy: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct HistoryEntryOutput {
    index: usize,
    version: String,
    name: String,
    shade: String,
    value: String,
    formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    picked_at: Option<String>,
}

#[derive(Debug, Serialize)]
struct HistoryOutput {
    notation: String,
    count: usize,
    picks: Vec<HistoryEntryOutput>,
}

impl HistoryArgs {
    /// Execute history subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            HistoryCommand::Show(args) => args.execute(),
            HistoryCommand::Clear => clear(),
            HistoryCommand::Copy(args) => args.execute(),
        }
    }
}

impl HistoryShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load_or_default();
        let notation = resolve_notation(self.notation.as_deref(), &config);
        let history = PickHistory::load()
            .map_err(|e| CliError::io(format!("Failed to locate history file: {e}")))?;

        if self.json {
            let picks = history
                .picks()
                .iter()
                .enumerate()
                .map(|(index, pick)| HistoryEntryOutput {
                    index,
                    version: pick.version.to_string(),
                    name: pick.name.clone(),
                    shade: pick.shade.clone(),
                    value: pick.value.clone(),
                    formatted: format_color(&pick.value, &notation, &pick.name, &pick.shade),
                    picked_at: pick.picked_at.map(|at| at.to_rfc3339()),
                })
                .collect();

            return print_json(&HistoryOutput {
                notation,
                count: history.len(),
                picks,
            });
        }

        let theme = output_theme(&config, color_enabled(self.plain));
        let color = theme.is_some();
        let theme = theme.unwrap_or_else(Theme::dark);
        print!("{}", render_history(&history, &notation, &theme, color));

        Ok(())
    }
}

impl HistoryCopyArgs {
    /// Execute copy command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load_or_default();
        let selection = Selection::new(
            config.selection.version,
            resolve_notation(self.notation.as_deref(), &config),
        );

        let mut picker = Picker::with_default_history(clipboard(self.no_copy))
            .map_err(|e| CliError::io(format!("Failed to locate history file: {e}")))?;
        let outcome = picker
            .repick(&selection, self.index)
            .map_err(|e| CliError::validation(e.to_string()))?;

        report(&config, &outcome, &selection.notation, self.no_copy, self.json)
    }
}

fn clear() -> CliResult<()> {
    let picker = Picker::with_default_history(MemoryClipboard::new())
        .map_err(|e| CliError::io(format!("Failed to locate history file: {e}")))?;
    picker
        .clear_history()
        .map_err(|e| CliError::io(format!("Failed to clear history: {e:#}")))?;

    println!("History cleared.");
    Ok(())
}
