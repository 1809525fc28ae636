pub mod clipboard;
pub mod config;
pub mod drag;
pub mod editor;
pub mod error;
pub mod gradient;
pub mod palette;
pub mod prelude;
pub mod status;
pub mod track;

pub use clipboard::{ClipboardWriter, MemoryClipboard};
pub use config::EditorConfig;
pub use drag::{DragAnchor, DragState, PanelDrag, PressOrigin};
pub use editor::{GradientEditor, Marker, PointerTarget};
pub use error::{ClipboardError, ConfigError};
pub use gradient::{ColorStop, GradientState};
pub use palette::Palette;
pub use status::StatusMessage;
pub use track::TrackRect;
