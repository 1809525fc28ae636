use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};

pub fn plugin(app: &mut App) {
    app.add_systems(PostUpdate, update_cursor_icon);
}

/// Cursor shown while the pointer is over this entity.
#[derive(Component, Clone, Copy)]
pub struct HoverCursor(pub SystemCursorIcon);

/// Cursor forced while an interaction on this entity is in progress.
#[derive(Component, Clone, Copy)]
pub struct ActiveCursor(pub SystemCursorIcon);

fn update_cursor_icon(
    mut commands: Commands,
    windows: Query<Entity, With<PrimaryWindow>>,
    active: Query<&ActiveCursor>,
    hovered: Query<(&HoverCursor, &Hovered)>,
    mut current: Local<Option<SystemCursorIcon>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    // active cursors win over hover so a fast drag keeps its icon off-target
    let icon = active
        .iter()
        .next()
        .map(|cursor| cursor.0)
        .or_else(|| {
            hovered
                .iter()
                .find(|(_, hovered)| hovered.get())
                .map(|(cursor, _)| cursor.0)
        })
        .unwrap_or(SystemCursorIcon::Default);

    if *current == Some(icon) {
        return;
    }
    *current = Some(icon);
    commands.entity(window).insert(CursorIcon::from(icon));
}
