use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use copypasta_ext::prelude::ClipboardProvider;
use ombre::clipboard::ClipboardWriter;
use ombre::error::ClipboardError;

/// The OS clipboard.
///
/// A provider is opened per write so the handle never has to cross threads.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: String) -> Result<(), ClipboardError> {
        let mut ctx = copypasta_ext::try_context().ok_or(ClipboardError::Unavailable)?;
        ctx.set_contents(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Clipboard used by the copy button. Tests swap in a memory clipboard.
#[derive(Resource, Clone)]
pub struct EditorClipboard(Arc<Mutex<Box<dyn ClipboardWriter>>>);

impl Default for EditorClipboard {
    fn default() -> Self {
        Self::new(SystemClipboard)
    }
}

impl EditorClipboard {
    pub fn new(writer: impl ClipboardWriter + 'static) -> Self {
        Self(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Writes `text` on the IO task pool.
    pub fn write_async(&self, text: String) -> Task<Result<(), ClipboardError>> {
        let writer = self.0.clone();
        IoTaskPool::get().spawn(async move {
            let mut writer = writer
                .lock()
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
            writer.write_text(text)
        })
    }
}
