//! Clipboard support for the copy-to-clipboard widget.
//!
//! Contact rows and links on the page can be copied with one key. The
//! system clipboard (arboard) is used when the `system-clipboard` feature
//! is enabled; an internal buffer always keeps the last copied value so
//! the status bar can confirm what was copied.

use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Clipboard errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Failed to acquire the internal buffer lock.
    #[error("Failed to acquire clipboard lock")]
    LockFailed,
}

/// Clipboard manager.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    /// Last copied value (fallback when no system clipboard is available).
    internal: Arc<Mutex<String>>,
}

impl Clipboard {
    /// Creates a new clipboard manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies text to the clipboard.
    ///
    /// The internal buffer is always updated; system clipboard failures
    /// are ignored because the internal copy still succeeded.
    ///
    /// # Errors
    /// Returns error if the internal buffer lock cannot be acquired.
    pub fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        {
            let mut internal = self.internal.lock().map_err(|_| ClipboardError::LockFailed)?;
            *internal = text.to_string();
        }

        #[cfg(feature = "system-clipboard")]
        {
            if let Ok(mut clipboard) = arboard::Clipboard::new() {
                let _ = clipboard.set_text(text);
            }
        }

        Ok(())
    }

    /// Returns the last copied value, empty when nothing was copied yet.
    #[must_use]
    pub fn last_copied(&self) -> String {
        self.internal
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Checks whether anything has been copied this session.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.internal.lock().is_ok_and(|s| !s.is_empty())
    }
}
