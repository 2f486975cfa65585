//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and storage locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Tailwind Colors";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "twcolors";

/// Name of the per-user directory holding the config file and pick history.
pub const CONFIG_DIR_NAME: &str = "TailwindColors";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "TWCOLORS_CONFIG_DIR";

/// File name of the persisted selection and UI preferences.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the persisted pick history.
pub const HISTORY_FILE_NAME: &str = "latest_picks.json";

/// Maximum number of entries kept in the pick history.
pub const HISTORY_LIMIT: usize = 11;

/// Text produced for a notation that is not recognized.
pub const FALLBACK_MESSAGE: &str = "Sorry, something went wrong.";
