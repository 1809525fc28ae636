use bevy::prelude::*;
use rand::Rng;

use crate::config::EditorConfig;
use crate::drag::DragState;
use crate::error::ConfigError;
use crate::gradient::{ColorStop, GradientState, normalize_angle};
use crate::palette::Palette;
use crate::track::TrackRect;

/// What a pointer press landed on inside the editor surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty track area.
    Track,
    /// An existing stop marker, by index.
    Marker(usize),
    /// A floating panel or anything inside one.
    Panel,
}

/// Projection of one stop onto the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Index of the stop in insertion order. Only valid until the next render.
    pub index: usize,
    pub left_percent: f32,
    pub color: String,
    pub dragging: bool,
}

/// The gradient being edited plus everything derived from it.
///
/// Hosts forward pointer input and read back [`markers`](Self::markers) and
/// [`css`](Self::css). A full render bumps
/// [`render_generation`](Self::render_generation); hosts rebuild their
/// marker visuals only when it changes.
#[derive(Component, Debug, Clone)]
pub struct GradientEditor {
    state: GradientState,
    palette: Palette,
    drag: DragState<usize>,
    markers: Vec<Marker>,
    css: String,
    generation: u64,
}

impl Default for GradientEditor {
    fn default() -> Self {
        Self::new(GradientState::default(), Palette::default())
    }
}

impl GradientEditor {
    pub fn new(state: GradientState, palette: Palette) -> Self {
        let mut editor = Self {
            state,
            palette,
            drag: DragState::Idle,
            markers: Vec::new(),
            css: String::new(),
            generation: 0,
        };
        editor.render();
        editor
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.gradient(), config.palette()?))
    }

    pub fn state(&self) -> &GradientState {
        &self.state
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.state.stops
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn css_declaration(&self) -> String {
        self.state.to_css_declaration()
    }

    pub fn angle(&self) -> f32 {
        self.state.angle
    }

    pub fn drag_state(&self) -> DragState<usize> {
        self.drag
    }

    pub fn render_generation(&self) -> u64 {
        self.generation
    }

    /// Rebuilds every marker and recomputes the CSS string.
    pub fn render(&mut self) {
        let active = self.drag.target();
        self.markers = self
            .state
            .stops
            .iter()
            .enumerate()
            .map(|(index, stop)| Marker {
                index,
                left_percent: stop.position,
                color: stop.color.clone(),
                dragging: active == Some(index),
            })
            .collect();
        self.generation = self.generation.wrapping_add(1);
        self.css = self.compute_gradient_css();
    }

    pub fn compute_gradient_css(&self) -> String {
        self.state.to_css()
    }

    /// Pointer went down on the marker at `index`.
    pub fn start_drag(&mut self, index: usize) -> bool {
        if index >= self.state.len() {
            return false;
        }
        if let Some(previous) = self.drag.target() {
            self.set_marker_dragging(previous, false);
        }
        self.drag.begin(index);
        self.set_marker_dragging(index, true);
        debug!("drag started on stop {index}");
        true
    }

    /// Pointer moved while a marker is held.
    ///
    /// Only the held marker and the CSS string are updated; the marker list is
    /// left in place so the element under the pointer survives the move.
    pub fn continue_drag(&mut self, pointer_x: f32, track: TrackRect) -> Option<f32> {
        let index = self.drag.target()?;
        let position = self.state.set_position(index, track.percent_at(pointer_x))?;
        if let Some(marker) = self.markers.get_mut(index) {
            marker.left_percent = position;
        }
        self.css = self.compute_gradient_css();
        Some(position)
    }

    /// Pointer released anywhere. Returns the index that was being dragged.
    pub fn end_drag(&mut self) -> Option<usize> {
        let index = self.drag.finish()?;
        self.set_marker_dragging(index, false);
        debug!("drag ended on stop {index}");
        Some(index)
    }

    /// Appends a stop under the pointer with a color drawn from the palette.
    ///
    /// Presses on markers or panels are ignored. Returns the new stop's index.
    pub fn add_stop_at<R: Rng + ?Sized>(
        &mut self,
        pointer_x: f32,
        target: PointerTarget,
        track: TrackRect,
        rng: &mut R,
    ) -> Option<usize> {
        if target != PointerTarget::Track {
            return None;
        }
        let position = track.percent_at(pointer_x);
        let color = self.palette.pick(rng).to_string();
        let index = self.state.push(ColorStop::new(position, color));
        debug!("added stop {index} at {position}%");
        self.render();
        Some(index)
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.state.angle = normalize_angle(angle);
        self.css = self.compute_gradient_css();
    }

    pub fn rotate(&mut self, delta: f32) {
        self.set_angle(self.state.angle + delta);
    }

    fn set_marker_dragging(&mut self, index: usize, dragging: bool) {
        if let Some(marker) = self.markers.get_mut(index) {
            marker.dragging = dragging;
        }
    }
}
