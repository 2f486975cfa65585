//! Pick history persistence.
//!
//! The history is a JSON array of [`PickRecord`]s, newest first, capped at
//! [`HISTORY_LIMIT`] entries. It is stored next to the config file.
//!
//! There is no coordination between writers: two processes that record a
//! pick at the same time both read, prepend and rewrite the file, and the
//! last write wins.

use crate::config::{write_atomic, Config};
use crate::constants::{HISTORY_FILE_NAME, HISTORY_LIMIT};
use crate::models::PickRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Newest-first list of recent picks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickHistory {
    picks: Vec<PickRecord>,
}

impl PickHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { picks: Vec::new() }
    }

    /// Builds a history from existing records, keeping the newest
    /// [`HISTORY_LIMIT`] entries.
    #[must_use]
    pub fn from_picks(mut picks: Vec<PickRecord>) -> Self {
        picks.truncate(HISTORY_LIMIT);
        Self { picks }
    }

    /// Gets the full path to the history file.
    pub fn file_path() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join(HISTORY_FILE_NAME))
    }

    /// Loads the history from the default location.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::file_path()?))
    }

    /// Loads the history from a specific file.
    ///
    /// A missing file is an empty history. A file that can't be read or
    /// parsed is treated the same way (with a warning), so a corrupted
    /// history never blocks picking.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }

        let parsed = fs::read_to_string(path)
            .context(format!("Failed to read history file: {}", path.display()))
            .and_then(|content| {
                serde_json::from_str::<Vec<PickRecord>>(&content)
                    .context(format!("Failed to parse history file: {}", path.display()))
            });

        match parsed {
            Ok(picks) => Self::from_picks(picks),
            Err(e) => {
                tracing::warn!("Discarding unreadable pick history: {e:#}");
                Self::new()
            }
        }
    }

    /// Saves the history to a specific file (temp file + rename).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create directory: {}", dir.display()))?;
        }

        let content =
            serde_json::to_string_pretty(&self.picks).context("Failed to serialize history")?;
        write_atomic(path, &content)
    }

    /// Prepends a pick and drops anything beyond [`HISTORY_LIMIT`].
    pub fn record(&mut self, pick: PickRecord) {
        self.picks.insert(0, pick);
        self.picks.truncate(HISTORY_LIMIT);
    }

    /// Removes every pick.
    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Picks, newest first.
    #[must_use]
    pub fn picks(&self) -> &[PickRecord] {
        &self.picks
    }

    /// Gets a pick by position (0 = newest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PickRecord> {
        self.picks.get(index)
    }

    /// Get the number of picks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Returns true if there are no picks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
