use std::fmt::Write;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Lowest position a stop can occupy along the track.
pub const MIN_POSITION: f32 = 0.0;
/// Highest position a stop can occupy along the track.
pub const MAX_POSITION: f32 = 100.0;
/// Angle used when nothing else is configured.
pub const DEFAULT_ANGLE: f32 = 45.0;

/// Clamps a position to the track range.
///
/// Also folds `-0.0` into `0.0` so the formatted CSS never reads `-0%`.
pub fn clamp_position(position: f32) -> f32 {
    if position.is_nan() {
        return MIN_POSITION;
    }
    position.clamp(MIN_POSITION, MAX_POSITION) + 0.0
}

/// Wraps an angle into `[0, 360)` degrees.
pub fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(360.0) + 0.0
}

/// A single anchor of a gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
pub struct ColorStop {
    /// Percentage along the track, in `[0, 100]`.
    pub position: f32,
    /// Color as written by the user, usually `#rrggbb`. Never validated.
    pub color: String,
}

impl ColorStop {
    pub fn new(position: f32, color: impl Into<String>) -> Self {
        Self {
            position: clamp_position(position),
            color: color.into(),
        }
    }

    fn write_css(&self, out: &mut String) {
        let _ = write!(out, "{} {}%", self.color, self.position);
    }
}

/// The stops of a gradient plus its direction.
///
/// Stops are kept in insertion order. Display order is always derived by
/// sorting on `position`, so the collection itself is never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
pub struct GradientState {
    pub stops: Vec<ColorStop>,
    /// Direction in degrees, CSS convention (0 points up, clockwise).
    pub angle: f32,
}

impl Default for GradientState {
    fn default() -> Self {
        Self {
            stops: default_stops(),
            angle: DEFAULT_ANGLE,
        }
    }
}

/// The four stops every new editor starts with.
pub fn default_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(20.0, "#4a154b"),
        ColorStop::new(40.0, "#2d1b69"),
        ColorStop::new(60.0, "#3282b8"),
        ColorStop::new(80.0, "#bbe1fa"),
    ]
}

impl GradientState {
    pub fn new(stops: Vec<ColorStop>, angle: f32) -> Self {
        let stops = stops
            .into_iter()
            .map(|stop| ColorStop::new(stop.position, stop.color))
            .collect();
        Self {
            stops,
            angle: normalize_angle(angle),
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Writes a clamped position into the stop at `index`.
    ///
    /// Returns the stored position, or `None` when the index is out of range.
    pub fn set_position(&mut self, index: usize, position: f32) -> Option<f32> {
        let stop = self.stops.get_mut(index)?;
        stop.position = clamp_position(position);
        Some(stop.position)
    }

    pub fn push(&mut self, stop: ColorStop) -> usize {
        self.stops.push(ColorStop::new(stop.position, stop.color));
        self.stops.len() - 1
    }

    /// Stops in display order.
    ///
    /// `sort_by` is stable, so equal positions keep their insertion order.
    pub fn sorted_stops(&self) -> Vec<&ColorStop> {
        let mut sorted: Vec<&ColorStop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        sorted
    }

    /// Formats the gradient as a CSS `linear-gradient(...)` value.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let _ = write!(css, "linear-gradient({}deg", self.angle);
        for stop in self.sorted_stops() {
            css.push_str(", ");
            stop.write_css(&mut css);
        }
        css.push(')');
        css
    }

    /// A full `background` declaration, ready to paste into a stylesheet.
    pub fn to_css_declaration(&self) -> String {
        format!("background: {};", self.to_css())
    }
}
