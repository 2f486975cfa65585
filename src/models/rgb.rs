//! RGB color handling with hex parsing and color-space conversions.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// sRGB to CIE XYZ matrix rows (scaled to Y = 100 for white).
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// D65 reference white in XYZ.
const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#rrggbb) and the usual textbook
/// conversions into HSL, HWB, CMYK and CIE Lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use twcolors::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#3b82f6").unwrap();
    /// assert_eq!(color, RgbColor::new(59, 130, 246));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase,
    /// the same casing the palette tables use).
    ///
    /// # Examples
    ///
    /// ```
    /// use twcolors::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#ff0000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a crossterm true-color value for swatches.
    #[must_use]
    pub const fn to_terminal_color(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Relative brightness (0.0-1.0) using the Rec. 601 luma weights.
    ///
    /// Used to pick a readable foreground for text drawn on a swatch.
    #[must_use]
    pub fn luma(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Converts the color to HSL.
    ///
    /// # Returns
    ///
    /// A tuple `(h, s, l)` where:
    /// - `h` (Hue): 0.0-360.0 degrees (0.0 for grayscale)
    /// - `s` (Saturation): 0.0-100.0
    /// - `l` (Lightness): 0.0-100.0
    ///
    /// Values are unrounded; formatting decides the precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use twcolors::models::RgbColor;
    ///
    /// let (h, s, l) = RgbColor::new(255, 0, 0).to_hsl();
    /// assert!((h - 0.0).abs() < 0.01);
    /// assert!((s - 100.0).abs() < 0.01);
    /// assert!((l - 50.0).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;

        let h = if max == min {
            0.0
        } else if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        let h = (h * 60.0).min(360.0);
        let h = if h < 0.0 { h + 360.0 } else { h };

        let l = (min + max) / 2.0;

        let s = if max == min {
            0.0
        } else if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        (h, s * 100.0, l * 100.0)
    }

    /// Converts the color to HWB (hue, whiteness, blackness).
    ///
    /// Hue matches [`RgbColor::to_hsl`]; whiteness and blackness are 0.0-100.0.
    #[must_use]
    pub fn to_hwb(&self) -> (f64, f64, f64) {
        let (h, _, _) = self.to_hsl();
        let min = f64::from(self.r.min(self.g).min(self.b));
        let max = f64::from(self.r.max(self.g).max(self.b));

        let w = 1.0 / 255.0 * min;
        let b = 1.0 - 1.0 / 255.0 * max;

        (h, w * 100.0, b * 100.0)
    }

    /// Converts the color to CMYK, each component 0.0-100.0.
    ///
    /// Pure black has no defined chroma; its C, M and Y are reported as 0.
    #[must_use]
    pub fn to_cmyk(&self) -> (f64, f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let k = (1.0 - r).min(1.0 - g).min(1.0 - b);
        let chroma = |channel: f64| {
            let value = (1.0 - channel - k) / (1.0 - k);
            if value.is_nan() {
                0.0
            } else {
                value
            }
        };

        (
            chroma(r) * 100.0,
            chroma(g) * 100.0,
            chroma(b) * 100.0,
            k * 100.0,
        )
    }

    /// Converts the color to CIE XYZ (D65, Y scaled to 0-100).
    #[must_use]
    pub fn to_xyz(&self) -> (f64, f64, f64) {
        let linearize = |channel: u8| {
            let c = f64::from(channel) / 255.0;
            if c > 0.04045 {
                ((c + 0.055) / 1.055).powf(2.4)
            } else {
                c / 12.92
            }
        };

        let rgb = [linearize(self.r), linearize(self.g), linearize(self.b)];
        let row = |m: [f64; 3]| (rgb[0] * m[0] + rgb[1] * m[1] + rgb[2] * m[2]) * 100.0;

        (row(SRGB_TO_XYZ[0]), row(SRGB_TO_XYZ[1]), row(SRGB_TO_XYZ[2]))
    }

    /// Converts the color to CIE Lab against the D65 reference white.
    ///
    /// # Returns
    ///
    /// A tuple `(l, a, b)` with `l` in 0.0-100.0 and unbounded `a`/`b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twcolors::models::RgbColor;
    ///
    /// let (l, a, b) = RgbColor::new(255, 0, 0).to_lab();
    /// assert!((l - 53.24).abs() < 0.1);
    /// assert!((a - 80.1).abs() < 0.2);
    /// assert!((b - 67.2).abs() < 0.2);
    /// ```
    #[must_use]
    pub fn to_lab(&self) -> (f64, f64, f64) {
        let (x, y, z) = self.to_xyz();

        let f = |t: f64| {
            if t > 0.008856 {
                t.cbrt()
            } else {
                7.787 * t + 16.0 / 116.0
            }
        };

        let x = f(x / D65_WHITE[0]);
        let y = f(y / D65_WHITE[1]);
        let z = f(z / D65_WHITE[2]);

        (116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 0.05
    }

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #ffffff  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("#ééé").is_err());
        assert!(RgbColor::from_hex("currentColor").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_hsl_primary_colors() {
        let (h, s, l) = RgbColor::new(0, 255, 0).to_hsl();
        assert!(close(h, 120.0));
        assert!(close(s, 100.0));
        assert!(close(l, 50.0));

        let (h, s, l) = RgbColor::new(0, 0, 255).to_hsl();
        assert!(close(h, 240.0));
        assert!(close(s, 100.0));
        assert!(close(l, 50.0));
    }

    #[test]
    fn test_hsl_grayscale() {
        let (h, s, l) = RgbColor::new(0, 0, 0).to_hsl();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(l, 0.0);

        let (h, s, l) = RgbColor::new(255, 255, 255).to_hsl();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!(close(l, 100.0));
    }

    #[test]
    fn test_hsl_tailwind_blue() {
        // blue-500 in the v3 palette
        let (h, s, l) = RgbColor::new(59, 130, 246).to_hsl();
        assert!((h - 217.2).abs() < 0.1);
        assert!((s - 91.2).abs() < 0.1);
        assert!((l - 59.8).abs() < 0.1);
    }

    #[test]
    fn test_hsl_negative_hue_wraps() {
        // Magenta-ish: red is max, blue > green gives a negative raw hue
        let (h, _, _) = RgbColor::new(255, 0, 128).to_hsl();
        assert!(h > 300.0 && h < 360.0, "hue should wrap into range, got {h}");
    }

    #[test]
    fn test_hwb() {
        let (h, w, b) = RgbColor::new(59, 130, 246).to_hwb();
        assert!((h - 217.2).abs() < 0.1);
        assert!((w - 23.1).abs() < 0.1);
        assert!((b - 3.5).abs() < 0.1);

        let (_, w, b) = RgbColor::new(255, 255, 255).to_hwb();
        assert!(close(w, 100.0));
        assert!(close(b, 0.0));
    }

    #[test]
    fn test_cmyk() {
        let (c, m, y, k) = RgbColor::new(255, 0, 0).to_cmyk();
        assert!(close(c, 0.0));
        assert!(close(m, 100.0));
        assert!(close(y, 100.0));
        assert!(close(k, 0.0));
    }

    #[test]
    fn test_cmyk_black_has_no_chroma() {
        let (c, m, y, k) = RgbColor::new(0, 0, 0).to_cmyk();
        assert_eq!(c, 0.0);
        assert_eq!(m, 0.0);
        assert_eq!(y, 0.0);
        assert!(close(k, 100.0));
    }

    #[test]
    fn test_lab_white_and_black() {
        let (l, a, b) = RgbColor::new(255, 255, 255).to_lab();
        assert!(close(l, 100.0));
        assert!(a.abs() < 0.05);
        assert!(b.abs() < 0.05);

        let (l, a, b) = RgbColor::new(0, 0, 0).to_lab();
        assert!(l.abs() < 1e-9);
        assert!(a.abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }

    #[test]
    fn test_lab_red() {
        let (l, a, b) = RgbColor::new(255, 0, 0).to_lab();
        assert!((l - 53.24).abs() < 0.1);
        assert!((a - 80.1).abs() < 0.2);
        assert!((b - 67.2).abs() < 0.2);
    }

    #[test]
    fn test_luma_orders_light_and_dark() {
        assert!(RgbColor::new(248, 250, 252).luma() > 0.9);
        assert!(RgbColor::new(15, 23, 42).luma() < 0.2);
    }
}
