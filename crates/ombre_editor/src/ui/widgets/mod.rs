pub mod button;
pub mod cursor;
pub mod floating_panel;
pub mod gradient_track;
