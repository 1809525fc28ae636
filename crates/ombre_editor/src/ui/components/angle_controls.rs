use bevy::prelude::*;
use ombre::editor::GradientEditor;

use crate::ui::tokens::{TEXT_BODY_COLOR, TEXT_SIZE};
use crate::ui::widgets::button::{ButtonClickEvent, ButtonProps, button};
use crate::ui::widgets::floating_panel::{FloatingPanelProps, floating_panel};

const ANGLE_STEP: f32 = 15.0;

pub fn plugin(app: &mut App) {
    app.add_observer(handle_rotate_click)
        .add_systems(Update, sync_angle_label);
}

#[derive(Component)]
pub struct RotateButton {
    pub editor: Entity,
    pub delta: f32,
}

#[derive(Component)]
pub struct AngleLabel(pub Entity);

fn format_angle(angle: f32) -> String {
    format!("{angle}°")
}

pub fn spawn_angle_controls(commands: &mut Commands, editor: Entity, position: Vec2) -> Entity {
    let decrease = commands
        .spawn((
            RotateButton {
                editor,
                delta: -ANGLE_STEP,
            },
            button(ButtonProps::new(format!("-{ANGLE_STEP}°"))),
        ))
        .id();

    let label = commands
        .spawn((
            AngleLabel(editor),
            Text::default(),
            TextFont {
                font_size: TEXT_SIZE,
                ..default()
            },
            TextColor(TEXT_BODY_COLOR.into()),
            Node {
                min_width: px(48.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .id();

    let increase = commands
        .spawn((
            RotateButton {
                editor,
                delta: ANGLE_STEP,
            },
            button(ButtonProps::new(format!("+{ANGLE_STEP}°"))),
        ))
        .id();

    let row = commands
        .spawn(Node {
            column_gap: px(8.0),
            align_items: AlignItems::Center,
            ..default()
        })
        .add_children(&[decrease, label, increase])
        .id();

    commands
        .spawn(floating_panel(
            FloatingPanelProps::new("Angle").at(position).with_width(200.0),
        ))
        .add_child(row)
        .id()
}

fn handle_rotate_click(
    trigger: On<ButtonClickEvent>,
    buttons: Query<&RotateButton>,
    mut editors: Query<&mut GradientEditor>,
) {
    let Ok(rotate) = buttons.get(trigger.entity) else {
        return;
    };
    let Ok(mut editor) = editors.get_mut(rotate.editor) else {
        return;
    };
    editor.rotate(rotate.delta);
}

fn sync_angle_label(editors: Query<&GradientEditor>, mut labels: Query<(&AngleLabel, &mut Text)>) {
    for (label, mut text) in &mut labels {
        let Ok(editor) = editors.get(label.0) else {
            continue;
        };
        let formatted = format_angle(editor.angle());
        if text.0 != formatted {
            text.0 = formatted;
        }
    }
}
