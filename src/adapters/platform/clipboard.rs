//! System clipboard via arboard. Implements ClipboardPort.

use crate::domain::DomainError;
use crate::ports::ClipboardPort;
use arboard::Clipboard;
use std::sync::Mutex;

/// Clipboard handle, opened lazily on first write (headless sessions have none).
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Mutex<Option<Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardPort for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), DomainError> {
        let mut guard = self
            .clipboard
            .lock()
            .map_err(|_| DomainError::Clipboard("clipboard lock poisoned".into()))?;
        if guard.is_none() {
            let clipboard = Clipboard::new()
                .map_err(|e| DomainError::Clipboard(format!("open clipboard: {}", e)))?;
            *guard = Some(clipboard);
        }
        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| DomainError::Clipboard(format!("Failed to set clipboard text: {}", e))),
            None => Err(DomainError::Clipboard("clipboard unavailable".into())),
        }
    }
}
