use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use ombre::drag::{PanelDrag, PressOrigin};

use crate::ui::tokens::{
    BACKGROUND_COLOR, BORDER_COLOR, CORNER_RADIUS_LG, TEXT_MUTED_COLOR, TEXT_SIZE_SM,
};
use crate::ui::widgets::button::EditorButton;
use crate::ui::widgets::cursor::{ActiveCursor, HoverCursor};

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (setup_floating_panel, handle_panel_drag, sync_panel_position).chain(),
    );
}

/// A panel the user can move anywhere by dragging its body.
#[derive(Component)]
pub struct EditorFloatingPanel;

#[derive(Component)]
struct FloatingPanelTitle(String);

pub struct FloatingPanelProps {
    pub title: String,
    pub position: Vec2,
    pub width: f32,
}

impl FloatingPanelProps {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            position: Vec2::ZERO,
            width: 320.0,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

pub fn floating_panel(props: FloatingPanelProps) -> impl Bundle {
    let FloatingPanelProps {
        title,
        position,
        width,
    } = props;

    (
        EditorFloatingPanel,
        FloatingPanelTitle(title),
        PanelDrag::at(position),
        Hovered::default(),
        HoverCursor(SystemCursorIcon::Move),
        Node {
            position_type: PositionType::Absolute,
            left: px(position.x),
            top: px(position.y),
            width: px(width),
            flex_direction: FlexDirection::Column,
            row_gap: px(8.0),
            padding: UiRect::all(px(12.0)),
            border: UiRect::all(px(1.0)),
            border_radius: BorderRadius::all(CORNER_RADIUS_LG),
            ..default()
        },
        BackgroundColor(BACKGROUND_COLOR.into()),
        BorderColor::all(BORDER_COLOR),
        ZIndex(10),
    )
}

fn setup_floating_panel(
    mut commands: Commands,
    panels: Query<(Entity, &FloatingPanelTitle), Added<FloatingPanelTitle>>,
) {
    for (entity, title) in &panels {
        let header = commands
            .spawn((
                Text::new(&title.0),
                TextFont {
                    font_size: TEXT_SIZE_SM,
                    ..default()
                },
                TextColor(TEXT_MUTED_COLOR.into()),
            ))
            .id();
        commands.entity(entity).insert_children(0, &[header]);
    }
}

/// Where a press on `panel` landed: a hovered button below it keeps the
/// press for itself.
pub fn press_origin(
    panel: Entity,
    children: &Query<&Children>,
    buttons: &Query<&Hovered, With<EditorButton>>,
) -> PressOrigin {
    let on_button = children
        .iter_descendants(panel)
        .any(|child| buttons.get(child).is_ok_and(|hovered| hovered.get()));
    if on_button {
        PressOrigin::Interactive
    } else {
        PressOrigin::Chrome
    }
}

/// Drives panel drags from the mouse or the first active touch.
pub fn handle_panel_drag(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut panels: Query<(Entity, &mut PanelDrag, &Hovered), With<EditorFloatingPanel>>,
    children: Query<&Children>,
    buttons: Query<&Hovered, With<EditorButton>>,
) {
    let cursor = windows.single().ok().and_then(Window::cursor_position);
    // an active touch takes over from the cursor
    let pointer = touches.iter().next().map(|touch| touch.position()).or(cursor);

    if mouse.just_pressed(MouseButton::Left) || touches.any_just_pressed() {
        if let Some(pointer) = pointer {
            // only the first hovered panel takes the press
            if let Some((entity, mut drag, _)) =
                panels.iter_mut().find(|(_, _, hovered)| hovered.get())
            {
                let origin = press_origin(entity, &children, &buttons);
                if drag.press(pointer, origin) {
                    commands
                        .entity(entity)
                        .insert(ActiveCursor(SystemCursorIcon::Move));
                }
            }
        }
    }

    if mouse.just_released(MouseButton::Left) || touches.any_just_released() {
        for (entity, mut drag, _) in &mut panels {
            if drag.release() {
                commands.entity(entity).remove::<ActiveCursor>();
            }
        }
        return;
    }

    let Some(pointer) = pointer else {
        return;
    };
    for (_, mut drag, _) in &mut panels {
        if drag.is_dragging() {
            drag.move_to(pointer);
        }
    }
}

pub fn sync_panel_position(mut panels: Query<(&PanelDrag, &mut Node), Changed<PanelDrag>>) {
    for (drag, mut node) in &mut panels {
        let position = drag.position();
        node.left = px(position.x);
        node.top = px(position.y);
    }
}
