use thiserror::Error;

/// Errors that can occur when loading an [`EditorConfig`](crate::config::EditorConfig).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file contained invalid RON syntax.
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    /// New stops need at least one color to pick from.
    #[error("Palette must contain at least one color")]
    EmptyPalette,
    /// A zero duration would clear the status message before it is drawn.
    #[error("Status duration must be greater than zero")]
    InvalidStatusDuration,
}

/// Errors reported by a [`ClipboardWriter`](crate::clipboard::ClipboardWriter).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard provider is available on this platform or session.
    #[error("Clipboard is unavailable")]
    Unavailable,
    /// The provider refused the write.
    #[error("Could not write to clipboard: {0}")]
    Write(String),
}
