use std::sync::{Arc, Mutex};

use crate::error::ClipboardError;

/// Destination for copied CSS.
///
/// Writes may be slow (X11 and Wayland round trips), so hosts should call
/// this off the UI thread.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// In-memory clipboard that records every write.
///
/// Clones share the same history, so a test can keep one handle and give
/// the other to the editor.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.writes().pop()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: String) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("rejected".to_string()));
        }
        let mut writes = self
            .writes
            .lock()
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        writes.push(text);
        Ok(())
    }
}
