//! Copying calculator results to the system clipboard.
//!
//! On X11 and Wayland the owning process serves the clipboard contents, so
//! the text is only available while a [`Clipboard`] lives or after a
//! clipboard manager has taken it over.

use arboard::Clipboard;

use crate::error::ClipboardError;

/// A clipboard kept open for the length of a keypad session.
pub struct ResultClipboard {
    clipboard: Clipboard,
}

impl ResultClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            Clipboard::new().map_err(|e| ClipboardError::AccessFailed(e.to_string()))?;
        Ok(Self { clipboard })
    }

    /// Replace the clipboard text. It stays available while `self` lives.
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }
}

/// Copy text to the system clipboard from a process about to exit.
///
/// On Linux this blocks until another program takes ownership of the
/// clipboard, so the text outlives this process.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::AccessFailed(e.to_string()))?;

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    {
        use arboard::SetExtLinux;

        tracing::info!("Serving result on the clipboard until another program takes it");
        clipboard
            .set()
            .wait()
            .text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    {
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }
}
