//! Pick record captured whenever a color is copied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PaletteVersion;

/// A single color pick.
///
/// Field names match the stored history format (`version`, `name`, `shade`,
/// `value`). The timestamp is optional so older history files still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRecord {
    /// Palette version the color was picked from
    pub version: PaletteVersion,
    /// Color family name (e.g. "blue")
    pub name: String,
    /// Shade label within the family (e.g. "500")
    pub shade: String,
    /// Hex value at the time of the pick (e.g. "#3b82f6")
    pub value: String,
    /// When the pick happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_at: Option<DateTime<Utc>>,
}

impl PickRecord {
    /// Creates a pick record stamped with the current time.
    pub fn new(
        version: PaletteVersion,
        name: impl Into<String>,
        shade: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            version,
            name: name.into(),
            shade: shade.into(),
            value: value.into(),
            picked_at: Some(Utc::now()),
        }
    }

    /// The Tailwind utility-style name, e.g. "blue-500".
    #[must_use]
    pub fn tailwind_name(&self) -> String {
        format!("{}-{}", self.name, self.shade)
    }
}
