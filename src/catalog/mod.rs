//! Tailwind CSS color catalog.
//!
//! The upstream palette tables of the three supported Tailwind generations are
//! embedded in the binary at compile time. Each table is filtered once against
//! its version's omission set (aliases such as `current` or `transparent`, the
//! plain `black`/`white` entries, and deprecated family names) and then cached
//! for the rest of the process.
//!
//! Family order and shade order follow the upstream declaration order exactly.

use crate::models::PaletteVersion;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Families dropped from the v1 table.
const OMIT_V1: &[&str] = &["current", "transparent", "black", "white"];

/// Families dropped from the v2 table.
const OMIT_V2: &[&str] = &["inherit", "current", "transparent", "black", "white"];

/// Families dropped from the v3 table, including the deprecated aliases.
const OMIT_V3: &[&str] = &[
    "inherit",
    "current",
    "transparent",
    "black",
    "white",
    "lightBlue",
    "warmGray",
    "trueGray",
    "coolGray",
    "blueGray",
];

/// A single shade of a color family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shade {
    /// Shade label as declared upstream (e.g. "50", "500", "950").
    pub label: String,
    /// Hex color code (e.g. "#3b82f6").
    pub hex: String,
}

/// A named color family with its shades in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Family {
    /// Family name (e.g. "blue", "slate").
    pub name: String,
    /// Shades from lightest to darkest.
    pub shades: Vec<Shade>,
}

impl Family {
    /// Looks up a shade by its label.
    #[must_use]
    pub fn shade(&self, label: &str) -> Option<&Shade> {
        self.shades.iter().find(|shade| shade.label == label)
    }

    /// Get the number of shades.
    #[must_use]
    pub fn shade_count(&self) -> usize {
        self.shades.len()
    }
}

/// The color catalog of one palette version, omissions already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    version: PaletteVersion,
    families: Vec<Family>,
}

impl Catalog {
    /// Returns the catalog for a palette version.
    ///
    /// The catalog is built on first access and shared afterwards; repeated
    /// calls return the same immutable value.
    pub fn load(version: PaletteVersion) -> &'static Self {
        static V1: OnceLock<Catalog> = OnceLock::new();
        static V2: OnceLock<Catalog> = OnceLock::new();
        static V3: OnceLock<Catalog> = OnceLock::new();

        let cell = match version {
            PaletteVersion::V1 => &V1,
            PaletteVersion::V2 => &V2,
            PaletteVersion::V3 => &V3,
        };

        cell.get_or_init(|| Self::build(version))
    }

    /// Builds a catalog from the embedded upstream table.
    fn build(version: PaletteVersion) -> Self {
        match Self::from_table(version, upstream_table(version)) {
            Ok(catalog) => {
                tracing::debug!(
                    "Loaded {} catalog: {} families",
                    version,
                    catalog.families.len()
                );
                catalog
            }
            Err(e) => {
                tracing::error!("Embedded {version} palette table is invalid: {e:#}");
                Self {
                    version,
                    families: Vec::new(),
                }
            }
        }
    }

    /// Parses an upstream palette table and drops the version's omitted families.
    ///
    /// The table is a JSON object of family name to either a shade object
    /// (`{"50": "#f8fafc", ...}`) or a plain string for single-value entries
    /// such as `black`. Every family that survives the omission filter must be
    /// a shade object.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a kept family is not a
    /// table of string shades.
    pub fn from_table(version: PaletteVersion, json: &str) -> Result<Self> {
        let table: Map<String, Value> = serde_json::from_str(json)
            .context(format!("Failed to parse {version} palette table"))?;

        let omitted = Self::omitted(version);
        let mut families = Vec::with_capacity(table.len());

        for (name, entry) in table {
            if omitted.contains(&name.as_str()) {
                continue;
            }

            let Value::Object(shade_table) = entry else {
                anyhow::bail!("Family '{name}' in {version} palette table is not a shade table");
            };

            let shades = shade_table
                .into_iter()
                .map(|(label, hex)| match hex {
                    Value::String(hex) => Ok(Shade { label, hex }),
                    other => anyhow::bail!(
                        "Shade '{name}-{label}' in {version} palette table is not a string: {other}"
                    ),
                })
                .collect::<Result<Vec<_>>>()?;

            families.push(Family { name, shades });
        }

        Ok(Self { version, families })
    }

    /// The family names removed from a version's upstream table.
    #[must_use]
    pub const fn omitted(version: PaletteVersion) -> &'static [&'static str] {
        match version {
            PaletteVersion::V1 => OMIT_V1,
            PaletteVersion::V2 => OMIT_V2,
            PaletteVersion::V3 => OMIT_V3,
        }
    }

    /// The palette version this catalog belongs to.
    #[must_use]
    pub const fn version(&self) -> PaletteVersion {
        self.version
    }

    /// All families in upstream order.
    #[must_use]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Looks up a family by name.
    #[must_use]
    pub fn family(&self, name: &str) -> Option<&Family> {
        self.families.iter().find(|family| family.name == name)
    }

    /// Looks up the hex value of `family`-`shade`.
    #[must_use]
    pub fn hex(&self, family: &str, shade: &str) -> Option<&str> {
        self.family(family)
            .and_then(|family| family.shade(shade))
            .map(|shade| shade.hex.as_str())
    }

    /// Get the number of families.
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Total number of shades across all families.
    #[must_use]
    pub fn shade_count(&self) -> usize {
        self.families.iter().map(Family::shade_count).sum()
    }

    /// Nested `{family: {shade: hex}}` object in catalog order.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let families = self
            .families
            .iter()
            .map(|family| {
                let shades = family
                    .shades
                    .iter()
                    .map(|shade| (shade.label.clone(), Value::String(shade.hex.clone())))
                    .collect::<Map<_, _>>();
                (family.name.clone(), Value::Object(shades))
            })
            .collect::<Map<_, _>>();

        Value::Object(families)
    }
}

/// The embedded upstream table for a version.
const fn upstream_table(version: PaletteVersion) -> &'static str {
    match version {
        PaletteVersion::V1 => include_str!("tailwind_v1.json"),
        PaletteVersion::V2 => include_str!("tailwind_v2.json"),
        PaletteVersion::V3 => include_str!("tailwind_v3.json"),
    }
}
