use crate::gradient::{MAX_POSITION, MIN_POSITION, clamp_position};

/// Horizontal extent of the track in the same coordinate space as the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRect {
    pub left: f32,
    pub width: f32,
}

impl TrackRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Builds a track from its center and full width, the way UI layout
    /// reports node geometry.
    pub fn from_center(center_x: f32, width: f32) -> Self {
        Self {
            left: center_x - width / 2.0,
            width,
        }
    }

    /// Percentage along the track for a pointer x coordinate, clamped to `[0, 100]`.
    pub fn percent_at(&self, pointer_x: f32) -> f32 {
        if self.width <= 0.0 {
            return MIN_POSITION;
        }
        clamp_position((pointer_x - self.left) / self.width * MAX_POSITION)
    }
}
