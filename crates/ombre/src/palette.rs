use rand::Rng;

use crate::error::ConfigError;

/// Colors a freshly added stop can receive.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#ff6a00", "#ee0979", "#4a154b", "#2d1b69", "#3282b8", "#bbe1fa", "#0f4c75", "#f9d423",
    "#00b09b", "#96c93d",
];

/// A non-empty list of colors to draw new stops from.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Uniformly picks a color with the caller's random source.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.colors.len());
        &self.colors[index]
    }
}
