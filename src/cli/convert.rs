//! Single-value conversion command.

use crate::cli::common::{print_json, resolve_notation, CliResult};
use crate::config::Config;
use crate::notation::format_color;
use clap::Args;
use serde::Serialize;

/// Convert a hex color to a notation
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Hex color, e.g. "#3b82f6"
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Target notation; defaults to the saved selection
    #[arg(short, long, value_name = "NOTATION")]
    pub notation: Option<String>,

    /// Family name used by the "tailwind name" notation
    #[arg(short, long, value_name = "FAMILY", default_value = "")]
    pub family: String,

    /// Shade label used by the "tailwind name" notation
    #[arg(short, long, value_name = "SHADE", default_value = "")]
    pub shade: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConvertOutput<'a> {
    input: &'a str,
    notation: &'a str,
    value: &'a str,
}

impl ConvertArgs {
    /// Execute the convert command
    ///
    /// Never fails on bad input: unknown notations and malformed hex values
    /// print the fallback message.
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load_or_default();
        let notation = resolve_notation(self.notation.as_deref(), &config);
        let value = format_color(&self.hex, &notation, &self.family, &self.shade);

        if self.json {
            print_json(&ConvertOutput {
                input: &self.hex,
                notation: &notation,
                value: &value,
            })
        } else {
            println!("{value}");
            Ok(())
        }
    }
}
