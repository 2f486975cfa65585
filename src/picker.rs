//! The "copy a color" action.
//!
//! A pick resolves the color in the selected palette, formats it in the
//! selected notation, writes it to the clipboard, and prepends it to the
//! persisted history. The selection is always passed in by the caller.

use crate::catalog::Catalog;
use crate::clipboard::ClipboardSink;
use crate::config::Selection;
use crate::history::PickHistory;
use crate::models::PickRecord;
use crate::notation::format_color;
use anyhow::Result;
use std::path::PathBuf;

/// Result of a pick or re-pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome {
    /// The picked color
    pub record: PickRecord,
    /// The value in the selected notation (what was copied)
    pub formatted: String,
    /// Whether the clipboard accepted the value
    pub copied: bool,
    /// User-facing notification text
    pub toast: String,
}

/// Performs picks against a clipboard sink and a history file.
pub struct Picker<C: ClipboardSink> {
    clipboard: C,
    history_path: PathBuf,
}

impl<C: ClipboardSink> Picker<C> {
    /// Creates a picker that stores its history at `history_path`.
    pub fn new(clipboard: C, history_path: impl Into<PathBuf>) -> Self {
        Self {
            clipboard,
            history_path: history_path.into(),
        }
    }

    /// Creates a picker using the default history location.
    pub fn with_default_history(clipboard: C) -> Result<Self> {
        Ok(Self::new(clipboard, PickHistory::file_path()?))
    }

    /// Picks `family`-`shade`: copy, record in history, persist.
    ///
    /// A clipboard failure is logged and reported in [`PickOutcome::copied`];
    /// the pick is still recorded.
    pub fn pick(
        &mut self,
        selection: &Selection,
        family: &str,
        shade: &str,
    ) -> Result<PickOutcome> {
        let hex = resolve_color(selection, family, shade)?;
        let record = PickRecord::new(selection.version, family, shade, hex);
        let formatted = format_color(hex, &selection.notation, family, shade);
        let copied = self.copy(&formatted);

        let mut history = self.history();
        history.record(record.clone());
        history.save_to(&self.history_path)?;

        tracing::info!(
            "Picked {}-{} ({}) as \"{}\"",
            family,
            shade,
            selection.version,
            formatted
        );

        Ok(PickOutcome {
            toast: toast_message(&record, &formatted),
            record,
            formatted,
            copied,
        })
    }

    /// Copies history entry `index` again in the selected notation.
    ///
    /// The history itself is left unchanged.
    pub fn repick(&mut self, selection: &Selection, index: usize) -> Result<PickOutcome> {
        let history = self.history();
        let record = history
            .get(index)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No pick at index {index} (history has {} entries)",
                    history.len()
                )
            })?;

        let formatted = format_color(
            &record.value,
            &selection.notation,
            &record.name,
            &record.shade,
        );
        let copied = self.copy(&formatted);

        Ok(PickOutcome {
            toast: toast_message(&record, &formatted),
            record,
            formatted,
            copied,
        })
    }

    /// Loads the current history (missing or corrupt files load as empty).
    pub fn history(&self) -> PickHistory {
        PickHistory::load_from(&self.history_path)
    }

    /// Empties and persists the history.
    pub fn clear_history(&self) -> Result<()> {
        let mut history = self.history();
        history.clear();
        history.save_to(&self.history_path)?;
        tracing::info!("Cleared pick history");
        Ok(())
    }

    /// The clipboard sink.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    fn copy(&mut self, text: &str) -> bool {
        match self.clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{e:#}");
                false
            }
        }
    }
}

/// Looks up the hex value of `family`-`shade` in the selected palette.
pub fn resolve_color(selection: &Selection, family: &str, shade: &str) -> Result<&'static str> {
    Catalog::load(selection.version)
        .hex(family, shade)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown color '{family}-{shade}' in the {} palette",
                selection.version
            )
        })
}

/// Notification shown after a copy.
#[must_use]
pub fn toast_message(record: &PickRecord, formatted: &str) -> String {
    format!(
        "Color {}-{} ({}) was copied to clipboard as \"{}\"",
        record.name, record.shade, record.version, formatted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::constants::{FALLBACK_MESSAGE, HISTORY_FILE_NAME, HISTORY_LIMIT};
    use crate::models::PaletteVersion;
    use tempfile::TempDir;

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<()> {
            anyhow::bail!("no display")
        }
    }

    fn picker(temp_dir: &TempDir) -> Picker<MemoryClipboard> {
        Picker::new(MemoryClipboard::new(), temp_dir.path().join(HISTORY_FILE_NAME))
    }

    #[test]
    fn test_pick_copies_and_records() {
        let temp_dir = TempDir::new().unwrap();
        let mut picker = picker(&temp_dir);
        let selection = Selection::new(PaletteVersion::V3, "rgb");

        let outcome = picker.pick(&selection, "blue", "500").unwrap();
        assert_eq!(outcome.formatted, "rgb(59 130 246)");
        assert!(outcome.copied);
        assert_eq!(picker.clipboard().contents(), Some("rgb(59 130 246)"));
        assert_eq!(
            outcome.toast,
            "Color blue-500 (v3) was copied to clipboard as \"rgb(59 130 246)\""
        );

        let history = picker.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap().value, "#3b82f6");
    }

    #[test]
    fn test_pick_unknown_color_fails_without_recording() {
        let temp_dir = TempDir::new().unwrap();
        let mut picker = picker(&temp_dir);
        let selection = Selection::new(PaletteVersion::V1, "hex");

        // slate doesn't exist in v1
        assert!(picker.pick(&selection, "slate", "500").is_err());
        assert!(picker.history().is_empty());
        assert_eq!(picker.clipboard().contents(), None);
    }

    #[test]
    fn test_many_picks_keep_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let mut picker = picker(&temp_dir);
        let selection = Selection::default();
        let shades = Catalog::load(PaletteVersion::V3).family("red").unwrap().shades.clone();

        for shade in &shades {
            picker.pick(&selection, "red", &shade.label).unwrap();
        }
        picker.pick(&selection, "sky", "300").unwrap();

        let history = picker.history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.get(0).unwrap().tailwind_name(), "sky-300");
        assert_eq!(history.get(1).unwrap().tailwind_name(), "red-950");
    }

    #[test]
    fn test_unknown_notation_copies_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let mut picker = picker(&temp_dir);
        let selection = Selection::new(PaletteVersion::V3, "oklch");

        let outcome = picker.pick(&selection, "blue", "500").unwrap();
        assert_eq!(outcome.formatted, FALLBACK_MESSAGE);
        assert_eq!(picker.history().len(), 1);
    }

    #[test]
    fn test_clipboard_failure_still_records() {
        let temp_dir = TempDir::new().unwrap();
        let mut picker = Picker::new(BrokenClipboard, temp_dir.path().join(HISTORY_FILE_NAME));

        let outcome = picker.pick(&Selection::default(), "blue", "500").unwrap();
        assert!(!outcome.copied);
        assert_eq!(picker.history().len(), 1);
    }

    #[test]
    fn test_repick_uses_current_notation_and_keeps_history() {
        let temp_dir = TempDir::new().unwrap();
        let mut picker = picker(&temp_dir);

        picker
            .pick(&Selection::new(PaletteVersion::V2, "hex"), "lightBlue", "500")
            .unwrap();
        let before = picker.history();

        let outcome = picker
            .repick(&Selection::new(PaletteVersion::V3, "tailwind name"), 0)
            .unwrap();
        assert_eq!(outcome.formatted, "lightBlue-500");
        assert_eq!(outcome.record.version, PaletteVersion::V2);
        assert_eq!(picker.history(), before);

        assert!(picker.repick(&Selection::default(), 5).is_err());
    }

    #[test]
    fn test_clear_history() {
        let temp_dir = TempDir::new().unwrap();
        let mut picker = picker(&temp_dir);
        picker.pick(&Selection::default(), "blue", "500").unwrap();
        picker.pick(&Selection::default(), "blue", "600").unwrap();

        picker.clear_history().unwrap();
        assert!(picker.history().is_empty());

        // Clearing an already empty history is fine
        picker.clear_history().unwrap();
        assert!(picker.history().is_empty());
    }
}
