use bevy::color::palettes::tailwind::ZINC_950;
use bevy::prelude::*;
use ombre::config::EditorConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clipboard::EditorClipboard;

struct CliArgs {
    config_path: Option<String>,
}

impl CliArgs {
    fn from_env() -> Self {
        Self {
            config_path: std::env::args().nth(1),
        }
    }
}

/// Random source for picking the color of clicked-in stops.
#[derive(Resource)]
pub struct PaletteRng(pub StdRng);

impl PaletteRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

pub struct OmbreEditorPlugin;

impl Plugin for OmbreEditorPlugin {
    fn build(&self, app: &mut App) {
        let args = CliArgs::from_env();
        let config = args
            .config_path
            .as_deref()
            .map(EditorConfig::load_or_default)
            .unwrap_or_default();

        app.insert_resource(PaletteRng::from_seed(config.seed))
            .insert_resource(config)
            .init_resource::<EditorClipboard>()
            .insert_resource(ClearColor(ZINC_950.into()))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
