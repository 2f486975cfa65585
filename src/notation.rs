//! Color notations and the hex-to-notation converter.
//!
//! [`format_color`] is the single entry point used for both the displayed
//! value and the clipboard text. Notation tags are matched exactly (case
//! included); anything unrecognized produces [`FALLBACK_MESSAGE`] instead of
//! an error.

use crate::constants::FALLBACK_MESSAGE;
use crate::models::RgbColor;
use anyhow::Result;
use std::fmt;
use std::str::FromStr;

/// Target textual format for a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// `#rrggbb`, unchanged
    #[default]
    Hex,
    /// `#rrggbbff` (fixed full opacity)
    HexAlpha,
    /// `rrggbb`
    HexNoHash,
    /// `rgb(R G B)`
    Rgb,
    /// `rgb(R, G, B)`
    RgbLegacy,
    /// `rgba(R G B/1)`
    Rgba,
    /// `rgba(R, G, B, 1)`
    RgbaLegacy,
    /// `lab(L% A B)`
    Lab,
    /// `hsl(H, S% L%)`
    Hsl,
    /// `hsla(H, S%, L%, 1)`
    Hsla,
    /// `hwb(Hdeg W% B%)`
    Hwb,
    /// `cmyk(C% M% Y% K%)`
    Cmyk,
    /// `{family}-{shade}`
    TailwindName,
}

impl Notation {
    /// All notations in display order.
    pub const ALL: [Self; 13] = [
        Self::Hex,
        Self::HexAlpha,
        Self::HexNoHash,
        Self::Rgb,
        Self::RgbLegacy,
        Self::Rgba,
        Self::RgbaLegacy,
        Self::Lab,
        Self::Hsl,
        Self::Hsla,
        Self::Hwb,
        Self::Cmyk,
        Self::TailwindName,
    ];

    /// The tag users select and storage keeps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::HexAlpha => "hex (alpha)",
            Self::HexNoHash => "hex (no '#')",
            Self::Rgb => "rgb",
            Self::RgbLegacy => "rgb (legacy)",
            Self::Rgba => "rgba",
            Self::RgbaLegacy => "rgba (legacy)",
            Self::Lab => "lab",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hwb => "hwb",
            Self::Cmyk => "cmyk",
            Self::TailwindName => "tailwind name",
        }
    }

    /// Formats `hex` (the `family`-`shade` catalog entry) in this notation.
    ///
    /// Notations derived from the RGB channels fall back to
    /// [`FALLBACK_MESSAGE`] when `hex` does not decode.
    #[must_use]
    pub fn format(self, hex: &str, family: &str, shade: &str) -> String {
        match self {
            Self::Hex => hex.to_string(),
            Self::HexAlpha => format!("{hex}ff"),
            Self::HexNoHash => hex.replacen('#', "", 1),
            Self::TailwindName => format!("{family}-{shade}"),
            _ => match RgbColor::from_hex(hex) {
                Ok(color) => self.format_rgb(color),
                Err(e) => {
                    tracing::debug!("Cannot convert '{hex}' to {self}: {e}");
                    FALLBACK_MESSAGE.to_string()
                }
            },
        }
    }

    /// Formats a decoded color for the channel-derived notations.
    fn format_rgb(self, color: RgbColor) -> String {
        let RgbColor { r, g, b } = color;

        match self {
            Self::Rgb => format!("rgb({r} {g} {b})"),
            Self::RgbLegacy => format!("rgb({r}, {g}, {b})"),
            Self::Rgba => format!("rgba({r} {g} {b}/1)"),
            Self::RgbaLegacy => format!("rgba({r}, {g}, {b}, 1)"),
            Self::Lab => {
                let (l, a, b) = color.to_lab();
                format!("lab({}% {} {})", round(l), round(a), round(b))
            }
            Self::Hsl => {
                let (h, s, l) = color.to_hsl();
                format!("hsl({}, {}% {}%)", round(h), round(s), round(l))
            }
            Self::Hsla => {
                let (h, s, l) = color.to_hsl();
                format!("hsla({}, {}%, {}%, 1)", round(h), round(s), round(l))
            }
            Self::Hwb => {
                let (h, w, b) = color.to_hwb();
                format!("hwb({}deg {}% {}%)", round(h), round(w), round(b))
            }
            Self::Cmyk => {
                let (c, m, y, k) = color.to_cmyk();
                format!(
                    "cmyk({}% {}% {}% {}%)",
                    round(c),
                    round(m),
                    round(y),
                    round(k)
                )
            }
            Self::Hex | Self::HexAlpha | Self::HexNoHash | Self::TailwindName => {
                unreachable!("{self} is formatted without decoding the hex value")
            }
        }
    }
}

/// Rounds half up (toward positive infinity) to an integer.
///
/// Negative zero collapses to `0` so it never prints as "-0".
fn round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|notation| notation.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown notation '{s}'"))
    }
}

/// Formats a catalog color in the notation named by `notation`.
///
/// Unrecognized notation tags yield [`FALLBACK_MESSAGE`].
///
/// # Examples
///
/// ```
/// use twcolors::notation::format_color;
///
/// assert_eq!(format_color("#ff0000", "rgb (legacy)", "red", "500"), "rgb(255, 0, 0)");
/// assert_eq!(format_color("#3b82f6", "tailwind name", "blue", "500"), "blue-500");
/// assert_eq!(format_color("#ff0000", "RGB", "red", "500"), "Sorry, something went wrong.");
/// ```
#[must_use]
pub fn format_color(hex: &str, notation: &str, family: &str, shade: &str) -> String {
    match notation.parse::<Notation>() {
        Ok(notation) => notation.format(hex, family, shade),
        Err(_) => FALLBACK_MESSAGE.to_string(),
    }
}
