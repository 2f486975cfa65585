//! Clipboard sinks for copied color values.
//!
//! Copying is fire-and-forget from the picker's point of view: a failing
//! clipboard is reported back but never undoes a pick.

use anyhow::{Context, Result};

/// Destination for copied text.
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

impl<T: ClipboardSink + ?Sized> ClipboardSink for Box<T> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        (**self).set_text(text)
    }
}

/// The operating system clipboard, via `arboard`.
///
/// The handle is opened lazily on first copy so commands that never copy
/// don't need a display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Creates a clipboard sink; no connection is made yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("Failed to open clipboard")?,
        };
        let clipboard = self.inner.insert(clipboard);

        clipboard
            .set_text(text.to_string())
            .context("Failed to copy to clipboard")
    }
}

/// In-memory clipboard (used for `--no-copy` and in tests).
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Create a new empty clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { contents: None }
    }

    /// The last copied text, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
