pub use crate::clipboard::{ClipboardWriter, MemoryClipboard};
pub use crate::config::EditorConfig;
pub use crate::drag::{DragAnchor, DragState, PanelDrag, PressOrigin};
pub use crate::editor::{GradientEditor, Marker, PointerTarget};
pub use crate::error::{ClipboardError, ConfigError};
pub use crate::gradient::{ColorStop, GradientState};
pub use crate::palette::{DEFAULT_PALETTE, Palette};
pub use crate::status::{DEFAULT_COPIED_MESSAGE, DEFAULT_STATUS_DURATION, StatusMessage};
pub use crate::track::TrackRect;
