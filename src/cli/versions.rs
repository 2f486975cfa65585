//! Palette version listing command.

use crate::catalog::Catalog;
use crate::cli::common::{print_json, CliResult};
use crate::config::Config;
use crate::models::PaletteVersion;
use clap::Args;
use serde::Serialize;

/// List the palette versions and their sizes
#[derive(Debug, Clone, Args)]
pub struct VersionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct VersionOutput {
    version: String,
    families: usize,
    colors: usize,
    selected: bool,
}

impl VersionsArgs {
    /// Execute the versions command
    pub fn execute(&self) -> CliResult<()> {
        let selected = Config::load_or_default().selection.version;
        let versions: Vec<VersionOutput> = PaletteVersion::all()
            .iter()
            .map(|&version| {
                let catalog = Catalog::load(version);
                VersionOutput {
                    version: version.to_string(),
                    families: catalog.family_count(),
                    colors: catalog.shade_count(),
                    selected: version == selected,
                }
            })
            .collect();

        if self.json {
            return print_json(&versions);
        }

        for v in &versions {
            let marker = if v.selected { "*" } else { " " };
            println!(
                "{marker} {}  {:>2} families  {:>3} colors",
                v.version, v.families, v.colors
            );
        }
        Ok(())
    }
}
