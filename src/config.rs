//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the persisted selection
//! (palette version and notation) and UI preferences in TOML format with
//! platform-specific directory resolution.

use crate::constants::{APP_BINARY_NAME, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::models::PaletteVersion;
use crate::notation::Notation;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Lowercase name used on the command line and in JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => anyhow::bail!("Invalid theme mode. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

/// The palette version and notation every formatting call site receives.
///
/// Passed explicitly instead of being looked up from shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected palette version (missing or unknown values load as v3)
    #[serde(default, deserialize_with = "PaletteVersion::deserialize_lenient")]
    pub version: PaletteVersion,
    /// Selected notation tag, kept verbatim
    #[serde(default = "default_notation")]
    pub notation: String,
}

/// Default notation tag ("hex").
fn default_notation() -> String {
    Notation::default().as_str().to_string()
}

impl Selection {
    /// Creates a selection from a version and notation.
    pub fn new(version: PaletteVersion, notation: impl Into<String>) -> Self {
        Self {
            version,
            notation: notation.into(),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            version: PaletteVersion::default(),
            notation: default_notation(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/TailwindColors/config.toml`
/// - macOS: `~/Library/Application Support/TailwindColors/config.toml`
/// - Windows: `%APPDATA%\TailwindColors\config.toml`
///
/// `$TWCOLORS_CONFIG_DIR` replaces the directory when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Selected palette version and notation
    #[serde(default)]
    pub selection: Selection,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - `$TWCOLORS_CONFIG_DIR` if set and non-empty
    /// - Linux: `~/.config/TailwindColors/`
    /// - macOS: `~/Library/Application Support/TailwindColors/`
    /// - Windows: `%APPDATA%\TailwindColors\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is unreadable.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e:#}");
            Self::default()
        })
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes. Values are written
    /// as they are: an unrecognized stored notation is preserved, callers
    /// validate what they change.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        write_atomic(config_path, &content)?;

        tracing::debug!("Saved config to {}", config_path.display());
        Ok(())
    }
}

/// Checks that `notation` is one of the recognized tags.
pub fn validate_notation(notation: &str) -> Result<()> {
    if notation.parse::<Notation>().is_err() {
        anyhow::bail!(
            "Unknown notation '{}'. Run `{} notations` to list the recognized tags",
            notation,
            APP_BINARY_NAME
        );
    }

    Ok(())
}

/// Writes `content` to a temp file next to `path`, then renames it into place.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, content).context(format!(
        "Failed to write temp file: {}",
        temp_path.display()
    ))?;

    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp file to: {}",
        path.display()
    ))?;

    Ok(())
}
