use bevy::prelude::*;

/// Drag lifecycle of a single draggable entity: `Idle -> Dragging -> Idle`.
///
/// Every draggable owns its own `DragState`, so a marker drag and a panel
/// drag can never observe each other's flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState<T> {
    Idle,
    Dragging { target: T },
}

impl<T> Default for DragState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T: Copy> DragState<T> {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn target(&self) -> Option<T> {
        match self {
            Self::Idle => None,
            Self::Dragging { target } => Some(*target),
        }
    }

    pub fn begin(&mut self, target: T) {
        *self = Self::Dragging { target };
    }

    /// Returns to idle and hands back the target that was being dragged.
    pub fn finish(&mut self) -> Option<T> {
        let target = self.target();
        *self = Self::Idle;
        target
    }
}

/// Where a pointer press on a floating panel landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOrigin {
    /// The panel body or a passive child such as a label.
    Chrome,
    /// A control that must stay clickable, such as a button.
    Interactive,
}

/// Pointer and panel positions captured when a panel drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub pointer: Vec2,
    pub position: Vec2,
}

/// Moves an absolutely positioned panel by the cumulative pointer delta
/// since the drag began.
#[derive(Component, Debug, Clone, Default)]
pub struct PanelDrag {
    state: DragState<DragAnchor>,
    position: Vec2,
}

impl PanelDrag {
    pub fn at(position: Vec2) -> Self {
        Self {
            state: DragState::Idle,
            position,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn state(&self) -> DragState<DragAnchor> {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Starts a drag unless the press landed on an interactive control.
    pub fn press(&mut self, pointer: Vec2, origin: PressOrigin) -> bool {
        if origin == PressOrigin::Interactive {
            return false;
        }
        self.state.begin(DragAnchor {
            pointer,
            position: self.position,
        });
        true
    }

    /// Follows the pointer while dragging. Returns the new panel position.
    pub fn move_to(&mut self, pointer: Vec2) -> Option<Vec2> {
        let anchor = self.state.target()?;
        self.position = anchor.position + (pointer - anchor.pointer);
        Some(self.position)
    }

    pub fn release(&mut self) -> bool {
        self.state.finish().is_some()
    }
}
