//! Shared CLI error type and exit codes.

use crate::config::Config;
use crate::models::PaletteVersion;
use crate::theme::Theme;
use std::fmt;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input (unknown color, invalid flag value, ...)
    ValidationError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with
    pub code: ExitCode,
    /// Message printed after `Error: `
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// The exit code for this error.
    pub const fn exit_code(&self) -> ExitCode {
        self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a `--version` flag value, falling back to the persisted selection.
pub fn resolve_version(flag: Option<&str>, config: &Config) -> CliResult<PaletteVersion> {
    match flag {
        Some(value) => value.parse().map_err(|_| {
            CliError::validation(format!(
                "Invalid palette version '{value}'. Must be 'v1', 'v2', or 'v3'"
            ))
        }),
        None => Ok(config.selection.version),
    }
}

/// Returns the `--notation` flag value or the persisted notation.
///
/// Unrecognized notations are passed through; they format as the fallback
/// message rather than failing.
pub fn resolve_notation(flag: Option<&str>, config: &Config) -> String {
    flag.map_or_else(|| config.selection.notation.clone(), str::to_string)
}

/// Theme for colored output, or `None` when color is off.
pub fn output_theme(config: &Config, color: bool) -> Option<Theme> {
    color.then(|| Theme::from_mode(config.ui.theme_mode))
}

/// Prints a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CliError::validation("x").exit_code(), ExitCode::ValidationError);
        assert_eq!(CliError::io("x").exit_code(), ExitCode::IoError);
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }

    #[test]
    fn test_resolve_version() {
        let config = Config::default();
        assert_eq!(resolve_version(None, &config).unwrap(), PaletteVersion::V3);
        assert_eq!(resolve_version(Some("v1"), &config).unwrap(), PaletteVersion::V1);
        assert_eq!(
            resolve_version(Some("v4"), &config).unwrap_err().exit_code(),
            ExitCode::ValidationError
        );
    }

    #[test]
    fn test_resolve_notation_passes_through() {
        let config = Config::default();
        assert_eq!(resolve_notation(None, &config), "hex");
        assert_eq!(resolve_notation(Some("oklch"), &config), "oklch");
    }
}
