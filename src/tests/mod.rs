use std::cell::RefCell;

use crate::{clipboard::ClipboardWriter, errors::ClipboardError};

mod view;

/// Keeps everything written to it.
#[derive(Default)]
pub struct RecordingClipboard {
    pub written: RefCell<Vec<String>>,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Rejects every write.
pub struct FailingClipboard;

impl ClipboardWriter for FailingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NoBackend)
    }
}
