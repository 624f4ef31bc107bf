use radiant_color::Color;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

/// Scene lighting configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SceneConfig {
    /// Scalar applied to every shaded surface
    #[serde(default = "default_exposure")]
    pub exposure: f64,

    /// Color behind all surfaces
    #[serde(default)]
    pub background: Color,

    /// Light sources, summed into one irradiance
    #[serde(default)]
    pub lights: Vec<LightConfig>,

    /// Surface name to albedo
    #[serde(default)]
    pub surfaces: BTreeMap<String, Color>,
}

fn default_exposure() -> f64 {
    1.0
}

/// A single light source
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LightConfig {
    pub color: Color,

    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

fn default_intensity() -> f64 {
    1.0
}

impl SceneConfig {
    /// Parse a scene from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a scene from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            lights = config.lights.len(),
            surfaces = config.surfaces.len(),
            "Loaded scene"
        );
        Ok(config)
    }

    /// Sum of all light contributions. Black when there are no lights.
    pub fn irradiance(&self) -> Color {
        self.lights
            .iter()
            .map(|light| light.color * light.intensity)
            .sum()
    }

    /// Shaded color of a surface: albedo, filtered by the irradiance and
    /// scaled by the exposure. The result is not clamped.
    pub fn shade(&self, surface: &str) -> Result<Color, ConfigError> {
        let albedo = self
            .surfaces
            .get(surface)
            .ok_or_else(|| ConfigError::UnknownSurface(surface.to_string()))?;
        Ok(self.lit(*albedo, self.irradiance()))
    }

    /// Shaded colors of all surfaces, ordered by name
    pub fn shade_all(&self) -> Vec<(String, Color)> {
        let irradiance = self.irradiance();
        self.surfaces
            .iter()
            .map(|(name, albedo)| (name.clone(), self.lit(*albedo, irradiance)))
            .collect()
    }

    fn lit(&self, albedo: Color, irradiance: Color) -> Color {
        albedo * irradiance * self.exposure
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            exposure: default_exposure(),
            background: Color::BLACK,
            lights: Vec::new(),
            surfaces: BTreeMap::new(),
        }
    }
}
