pub mod angle_controls;
pub mod css_output;
