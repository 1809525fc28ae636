use bevy::prelude::*;
use bevy::window::WindowResolution;

use ombre_editor::plugin::OmbreEditorPlugin;
use ombre_editor::ui::EditorUiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ombre".into(),
                resolution: WindowResolution::new(1024, 640),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(OmbreEditorPlugin)
        .add_plugins(EditorUiPlugin)
        .run();
}
