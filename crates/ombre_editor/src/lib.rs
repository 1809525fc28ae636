pub mod clipboard;
pub mod plugin;
pub mod ui;
