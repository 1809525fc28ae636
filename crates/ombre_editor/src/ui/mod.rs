pub mod components;
pub mod tokens;
pub mod widgets;

use bevy::prelude::*;
use ombre::config::EditorConfig;
use ombre::editor::GradientEditor;

use components::angle_controls::spawn_angle_controls;
use components::css_output::spawn_css_output;
use widgets::gradient_track::gradient_track;

pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(widgets::button::plugin)
            .add_plugins(widgets::cursor::plugin)
            .add_plugins(widgets::floating_panel::plugin)
            .add_plugins(widgets::gradient_track::plugin)
            .add_plugins(components::angle_controls::plugin)
            .add_plugins(components::css_output::plugin)
            .add_systems(Startup, setup_ui);
    }
}

fn setup_ui(mut commands: Commands, config: Res<EditorConfig>) {
    let editor = GradientEditor::from_config(&config).unwrap_or_else(|err| {
        warn!("{err}; starting with the default gradient");
        GradientEditor::default()
    });

    let track = commands.spawn(gradient_track(editor)).id();
    let css_panel = spawn_css_output(&mut commands, track, &config, Vec2::new(32.0, 360.0));
    let angle_panel = spawn_angle_controls(&mut commands, track, Vec2::new(480.0, 360.0));

    commands
        .spawn(Node {
            width: percent(100),
            height: percent(100),
            padding: UiRect::all(px(32.0)),
            flex_direction: FlexDirection::Column,
            ..default()
        })
        .add_children(&[track, css_panel, angle_panel]);
}
