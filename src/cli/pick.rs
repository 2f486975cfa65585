//! Color pick command.

use crate::cli::common::{
    output_theme, print_json, resolve_notation, resolve_version, CliError, CliResult,
};
use crate::clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
use crate::config::{Config, Selection};
use crate::picker::{resolve_color, PickOutcome, Picker};
use crate::render::{color_enabled, render_toast};
use crate::theme::Theme;
use clap::Args;
use serde::Serialize;

/// Copy a palette color and record it in the history
#[derive(Debug, Clone, Args)]
pub struct PickArgs {
    /// Family name, e.g. "blue"
    #[arg(value_name = "FAMILY")]
    pub family: String,

    /// Shade label, e.g. "500"
    #[arg(value_name = "SHADE")]
    pub shade: String,

    /// Palette version (v1, v2, v3); defaults to the saved selection
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Notation of the copied value; defaults to the saved selection
    #[arg(short, long, value_name = "NOTATION")]
    pub notation: Option<String>,

    /// Record the pick and print the value without touching the clipboard
    #[arg(long)]
    pub no_copy: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape shared by `pick` and `history copy`.
#[derive(Debug, Serialize)]
pub(crate) struct PickOutput {
    version: String,
    name: String,
    shade: String,
    value: String,
    notation: String,
    formatted: String,
    copied: bool,
}

impl PickOutput {
    pub(crate) fn new(outcome: &PickOutcome, notation: &str, copied: bool) -> Self {
        Self {
            version: outcome.record.version.to_string(),
            name: outcome.record.name.clone(),
            shade: outcome.record.shade.clone(),
            value: outcome.record.value.clone(),
            notation: notation.to_string(),
            formatted: outcome.formatted.clone(),
            copied,
        }
    }
}

impl PickArgs {
    /// Execute the pick command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load_or_default();
        let selection = Selection::new(
            resolve_version(self.version.as_deref(), &config)?,
            resolve_notation(self.notation.as_deref(), &config),
        );

        resolve_color(&selection, &self.family, &self.shade)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let mut picker = Picker::with_default_history(clipboard(self.no_copy))
            .map_err(|e| CliError::io(format!("Failed to locate history file: {e}")))?;
        let outcome = picker
            .pick(&selection, &self.family, &self.shade)
            .map_err(|e| CliError::io(format!("Failed to record pick: {e:#}")))?;

        report(&config, &outcome, &selection.notation, self.no_copy, self.json)
    }
}

/// The clipboard a command writes to.
pub(crate) fn clipboard(no_copy: bool) -> Box<dyn ClipboardSink> {
    if no_copy {
        Box::new(MemoryClipboard::new())
    } else {
        Box::new(SystemClipboard::new())
    }
}

/// Prints the result of a pick or re-pick.
///
/// With `--no-copy` only the formatted value is printed.
pub(crate) fn report(
    config: &Config,
    outcome: &PickOutcome,
    notation: &str,
    no_copy: bool,
    json: bool,
) -> CliResult<()> {
    let copied = outcome.copied && !no_copy;

    if json {
        return print_json(&PickOutput::new(outcome, notation, copied));
    }

    if copied {
        let theme = output_theme(config, color_enabled(false));
        let color = theme.is_some();
        let theme = theme.unwrap_or_else(Theme::dark);
        println!(
            "{}",
            render_toast(&outcome.record, &outcome.formatted, &theme, color)
        );
    } else {
        println!("{}", outcome.formatted);
    }

    Ok(())
}
