//! Palette version tag (the generation of the Tailwind color catalog).

use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which generation of the upstream Tailwind palette to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteVersion {
    /// Tailwind CSS 1.x default palette (shades 100-900)
    V1,
    /// Tailwind CSS 2.x `colors` module (shades 50-900)
    V2,
    /// Tailwind CSS 3.x `colors` module (shades 50-950)
    #[default]
    V3,
}

impl PaletteVersion {
    /// Returns all versions, oldest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::V1, Self::V2, Self::V3]
    }

    /// The storage/display tag ("v1", "v2" or "v3").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }

    /// Deserializes a stored version, falling back to the default for
    /// missing or unrecognized values instead of failing the whole file.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .and_then(|tag| tag.parse().ok())
            .unwrap_or_else(|| {
                if let Some(tag) = &raw {
                    tracing::warn!("Unknown palette version '{tag}' in storage, using default");
                }
                Self::default()
            }))
    }
}

impl fmt::Display for PaletteVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            _ => anyhow::bail!("Unknown palette version '{s}'. Expected one of: v1, v2, v3"),
        }
    }
}
