//! Palette listing command.

use crate::catalog::{Catalog, Family};
use crate::cli::common::{
    output_theme, print_json, resolve_notation, resolve_version, CliError, CliResult,
};
use crate::config::Config;
use crate::notation::format_color;
use crate::render::{color_enabled, render_family, render_palette};
use crate::theme::Theme;
use clap::Args;
use serde::Serialize;

/// List the families and shades of a palette version
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Palette version (v1, v2, v3); defaults to the saved selection
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Notation for the listed values; defaults to the saved selection
    #[arg(short, long, value_name = "NOTATION")]
    pub notation: Option<String>,

    /// Only list this family
    #[arg(short, long, value_name = "FAMILY")]
    pub family: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colors and swatches
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Serialize)]
struct PaletteOutput {
    version: String,
    notation: String,
    families: Vec<FamilyOutput>,
}

#[derive(Debug, Serialize)]
struct FamilyOutput {
    name: String,
    shades: Vec<ShadeOutput>,
}

#[derive(Debug, Serialize)]
struct ShadeOutput {
    shade: String,
    hex: String,
    value: String,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load_or_default();
        let version = resolve_version(self.version.as_deref(), &config)?;
        let notation = resolve_notation(self.notation.as_deref(), &config);
        let catalog = Catalog::load(version);

        let families: Vec<&Family> = match &self.family {
            Some(name) => vec![catalog.family(name).ok_or_else(|| {
                CliError::validation(format!("Unknown family '{name}' in the {version} palette"))
            })?],
            None => catalog.families().iter().collect(),
        };

        if self.json {
            let output = PaletteOutput {
                version: version.to_string(),
                notation: notation.clone(),
                families: families
                    .iter()
                    .map(|family| family_output(family, &notation))
                    .collect(),
            };
            return print_json(&output);
        }

        let theme = output_theme(&config, color_enabled(self.plain));
        let color = theme.is_some();
        let theme = theme.unwrap_or_else(Theme::dark);

        if self.family.is_some() {
            for family in families {
                print!("{}", render_family(family, &notation, &theme, color));
            }
        } else {
            print!("{}", render_palette(catalog, &notation, &theme, color));
        }

        Ok(())
    }
}

fn family_output(family: &Family, notation: &str) -> FamilyOutput {
    FamilyOutput {
        name: family.name.clone(),
        shades: family
            .shades
            .iter()
            .map(|shade| ShadeOutput {
                shade: shade.label.clone(),
                hex: shade.hex.clone(),
                value: format_color(&shade.hex, notation, &family.name, &shade.label),
            })
            .collect(),
    }
}
