use std::time::Duration;

use bevy::prelude::*;
use bevy::tasks::{Task, block_on, futures_lite::future};
use ombre::config::EditorConfig;
use ombre::editor::GradientEditor;
use ombre::error::ClipboardError;
use ombre::status::StatusMessage;

use crate::clipboard::EditorClipboard;
use crate::ui::tokens::{SUCCESS_COLOR, TEXT_BODY_COLOR, TEXT_SIZE, TEXT_SIZE_SM};
use crate::ui::widgets::button::{ButtonClickEvent, ButtonProps, ButtonVariant, button};
use crate::ui::widgets::floating_panel::{FloatingPanelProps, floating_panel};

pub fn plugin(app: &mut App) {
    app.add_observer(handle_copy_click).add_systems(
        Update,
        (
            sync_css_text,
            poll_pending_copies,
            tick_copy_status,
            sync_copy_status_text,
        )
            .chain(),
    );
}

/// Text node mirroring an editor's CSS string.
#[derive(Component)]
pub struct CssText(pub Entity);

#[derive(Component)]
pub struct CopyCssButton {
    pub editor: Entity,
    pub status: Entity,
}

/// Transient confirmation shown next to the copy button.
#[derive(Component)]
pub struct CopyStatus {
    pub message: StatusMessage,
    pub copied_text: String,
}

impl CopyStatus {
    pub fn new(duration: Duration, copied_text: impl Into<String>) -> Self {
        Self {
            message: StatusMessage::new(duration),
            copied_text: copied_text.into(),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.status_duration(), config.copied_message.clone())
    }
}

/// A clipboard write still in flight.
#[derive(Component)]
pub struct PendingCopy {
    status: Entity,
    task: Task<Result<(), ClipboardError>>,
}

/// Spawns the floating panel holding the CSS string and the copy button.
pub fn spawn_css_output(
    commands: &mut Commands,
    editor: Entity,
    config: &EditorConfig,
    position: Vec2,
) -> Entity {
    let status = commands
        .spawn((
            CopyStatus::from_config(config),
            Text::default(),
            TextFont {
                font_size: TEXT_SIZE_SM,
                ..default()
            },
            TextColor(SUCCESS_COLOR.into()),
        ))
        .id();

    let copy_button = commands
        .spawn((
            CopyCssButton { editor, status },
            button(ButtonProps::new("Copy CSS").with_variant(ButtonVariant::Primary)),
        ))
        .id();

    let actions = commands
        .spawn(Node {
            column_gap: px(8.0),
            align_items: AlignItems::Center,
            ..default()
        })
        .add_children(&[copy_button, status])
        .id();

    let css_text = commands
        .spawn((
            CssText(editor),
            Text::default(),
            TextFont {
                font_size: TEXT_SIZE,
                ..default()
            },
            TextColor(TEXT_BODY_COLOR.into()),
        ))
        .id();

    commands
        .spawn(floating_panel(
            FloatingPanelProps::new("CSS").at(position).with_width(420.0),
        ))
        .add_children(&[css_text, actions])
        .id()
}

fn handle_copy_click(
    trigger: On<ButtonClickEvent>,
    mut commands: Commands,
    buttons: Query<&CopyCssButton>,
    editors: Query<&GradientEditor>,
    clipboard: Res<EditorClipboard>,
) {
    let Ok(copy) = buttons.get(trigger.entity) else {
        return;
    };
    let Ok(editor) = editors.get(copy.editor) else {
        return;
    };

    let task = clipboard.write_async(editor.css_declaration());
    commands.spawn(PendingCopy {
        status: copy.status,
        task,
    });
}

pub fn poll_pending_copies(
    mut commands: Commands,
    mut pending: Query<(Entity, &mut PendingCopy)>,
    mut statuses: Query<&mut CopyStatus>,
) {
    for (entity, mut copy) in &mut pending {
        let Some(result) = block_on(future::poll_once(&mut copy.task)) else {
            continue;
        };
        commands.entity(entity).despawn();

        match result {
            Ok(()) => {
                if let Ok(mut status) = statuses.get_mut(copy.status) {
                    let text = status.copied_text.clone();
                    status.message.show(text);
                }
            }
            Err(err) => warn!("{err}"),
        }
    }
}

pub fn tick_copy_status(time: Res<Time>, mut statuses: Query<&mut CopyStatus>) {
    for mut status in &mut statuses {
        if status.message.is_visible() {
            status.message.tick(time.delta());
        }
    }
}

pub fn sync_copy_status_text(mut statuses: Query<(&CopyStatus, &mut Text)>) {
    for (status, mut text) in &mut statuses {
        if text.0 != status.message.text() {
            text.0 = status.message.text().to_string();
        }
    }
}

pub fn sync_css_text(editors: Query<&GradientEditor>, mut texts: Query<(&CssText, &mut Text)>) {
    for (css, mut text) in &mut texts {
        let Ok(editor) = editors.get(css.0) else {
            continue;
        };
        if text.0 != editor.css() {
            text.0 = editor.css().to_string();
        }
    }
}
