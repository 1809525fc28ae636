use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gradient::{ColorStop, DEFAULT_ANGLE, GradientState, default_stops};
use crate::palette::{DEFAULT_PALETTE, Palette};
use crate::status::{DEFAULT_COPIED_MESSAGE, DEFAULT_STATUS_DURATION};

/// Startup settings for the editor, usually read from a RON file.
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Gradient direction in degrees, wrapped into `[0, 360)` on load.
    pub angle: f32,
    /// Stops the editor starts with.
    pub stops: Vec<ColorStop>,
    /// Colors a clicked-in stop is drawn from.
    pub palette: Vec<String>,
    /// How long the "copied" message stays visible.
    pub status_duration_ms: u64,
    /// Text shown after a successful copy.
    pub copied_message: String,
    /// Fixed seed for palette selection. Random when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            stops: default_stops(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            status_duration_ms: DEFAULT_STATUS_DURATION.as_millis() as u64,
            copied_message: DEFAULT_COPIED_MESSAGE.to_string(),
            seed: None,
        }
    }
}

impl EditorConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Loads `path`, falling back to defaults and logging why.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("loaded editor config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("{err}; using default editor config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.status_duration_ms == 0 {
            return Err(ConfigError::InvalidStatusDuration);
        }
        Ok(())
    }

    pub fn gradient(&self) -> GradientState {
        GradientState::new(self.stops.clone(), self.angle)
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Palette::new(self.palette.clone())
    }

    pub fn status_duration(&self) -> Duration {
        Duration::from_millis(self.status_duration_ms)
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}
