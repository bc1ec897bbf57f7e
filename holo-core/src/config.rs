//! Run configuration, fixed for the lifetime of the animation
use std::fmt;
use std::path::Path;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geometry::GlyphDimensions;
use crate::projection::Shading;
use crate::raster::SegmentProfile;

pub const DEFAULT_PITCH_SPEED: f32 = 0.04;
pub const DEFAULT_YAW_SPEED: f32 = 0.02;
pub const DEFAULT_WIDTH: f32 = 8.0;
pub const DEFAULT_HEIGHT: f32 = 12.0;
pub const DEFAULT_TILT: f32 = 0.3;
pub const DEFAULT_SPACING_FACTOR: f32 = 1.5;
pub const DEFAULT_SEGMENT_WIDTH: f32 = 1.75;
pub const DEFAULT_SEGMENT_THICKNESS: f32 = 1.75;
pub const DEFAULT_POINT_LENGTH: f32 = 0.85;
pub const DEFAULT_LIGHT_X: f32 = 0.3;
pub const DEFAULT_LIGHT_Y: f32 = 0.7;
pub const DEFAULT_CONTRAST: f32 = 20.0;
pub const DEFAULT_PALETTE: &str = ".,-~:;=!*#$@";
pub const DEFAULT_DENSITY: f32 = 0.1;
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Errors detected before the render loop starts
#[derive(Debug)]
pub enum ConfigError {
    NonPositiveDensity(f32),
    EmptyPalette,
    InvalidNumber { flag: char, value: String },
    InvalidLightVector(String),
    MissingValue(char),
    UnknownFlag(String),
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDensity(d) => write!(f, "Density must be > 0 (got {d})"),
            ConfigError::EmptyPalette => write!(f, "Palette must contain at least one character"),
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "Invalid number '{value}' for -{flag}")
            }
            ConfigError::InvalidLightVector(value) => {
                write!(f, "Invalid light vector '{value}'. Use x,y")
            }
            ConfigError::MissingValue(flag) => write!(f, "Option -{flag} requires a value"),
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{flag}'"),
            ConfigError::Io(e) => write!(f, "Failed to read config file: {e}"),
            ConfigError::Toml(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
            _ => None,
        }
    }
}

/// Where each frame's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Literal(String),
    /// Local date/time rendered with a strftime format
    Clock { format: String },
}

/// Animation, geometry and appearance settings.
///
/// Missing keys in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pitch_speed: f32,
    pub yaw_speed: f32,
    pub width: f32,
    pub height: f32,
    pub spacing_factor: f32,
    pub tilt: f32,
    /// Fixed zoom; `None` or a non-positive value fits the text to the screen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f32>,
    pub segment_width: f32,
    pub segment_thickness: f32,
    pub point_length: f32,
    /// Sampling step; smaller is denser and slower
    pub density: f32,
    pub light_x: f32,
    pub light_y: f32,
    pub contrast: f32,
    pub palette: String,
    pub time_format: String,
    /// Literal text; `None` shows the clock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pitch_speed: DEFAULT_PITCH_SPEED,
            yaw_speed: DEFAULT_YAW_SPEED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            spacing_factor: DEFAULT_SPACING_FACTOR,
            tilt: DEFAULT_TILT,
            zoom: None,
            segment_width: DEFAULT_SEGMENT_WIDTH,
            segment_thickness: DEFAULT_SEGMENT_THICKNESS,
            point_length: DEFAULT_POINT_LENGTH,
            density: DEFAULT_DENSITY,
            light_x: DEFAULT_LIGHT_X,
            light_y: DEFAULT_LIGHT_Y,
            contrast: DEFAULT_CONTRAST,
            palette: DEFAULT_PALETTE.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            text: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(ConfigError::Toml)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.density > 0.0) {
            return Err(ConfigError::NonPositiveDensity(self.density));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Set pitch to `speed` and yaw to half of it
    pub fn set_speed(&mut self, speed: f32) {
        self.pitch_speed = speed;
        self.yaw_speed = speed / 2.0;
    }

    /// Manual zoom, if one was configured
    pub fn zoom_override(&self) -> Option<f32> {
        self.zoom.filter(|&z| z > 0.0)
    }

    pub fn text_source(&self) -> TextSource {
        match &self.text {
            Some(text) => TextSource::Literal(text.clone()),
            None => TextSource::Clock {
                format: self.time_format.clone(),
            },
        }
    }

    pub fn glyph_dimensions(&self) -> GlyphDimensions {
        GlyphDimensions {
            width: self.width,
            height: self.height,
            segment_width: self.segment_width,
            spacing_factor: self.spacing_factor,
        }
    }

    pub fn segment_profile(&self) -> SegmentProfile {
        SegmentProfile {
            width: self.segment_width,
            thickness: self.segment_thickness,
            point_length: self.point_length,
        }
    }

    pub fn shading(&self) -> Shading {
        Shading::new(
            Vector2::new(self.light_x, self.light_y),
            self.contrast,
            &self.palette,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.text_source(), TextSource::Clock { format: "%H:%M".into() });
    }

    #[test]
    fn test_validate_density() {
        for density in [0.0, -1.0, f32::NAN] {
            let config = Config {
                density,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NonPositiveDensity(_))
            ));
        }
    }

    #[test]
    fn test_validate_palette() {
        let config = Config {
            palette: String::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn test_set_speed() {
        let mut config = Config::default();
        config.set_speed(0.1);
        assert_eq!(config.pitch_speed, 0.1);
        assert_eq!(config.yaw_speed, 0.05);
    }

    #[test]
    fn test_zoom_override() {
        let mut config = Config::default();
        assert_eq!(config.zoom_override(), None);
        config.zoom = Some(-1.0);
        assert_eq!(config.zoom_override(), None);
        config.zoom = Some(12.5);
        assert_eq!(config.zoom_override(), Some(12.5));
    }

    #[test]
    fn test_literal_text_source() {
        let config = Config {
            text: Some(String::new()),
            ..Config::default()
        };
        assert_eq!(config.text_source(), TextSource::Literal(String::new()));
    }

    #[test]
    fn test_default_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed = Config::from_toml_str(&toml_str).expect("deserialize");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = Config::from_toml_str(
            r#"
density = 0.05
palette = " .:#"
text = "HOLO"
"#,
        )
        .expect("deserialize");
        assert_eq!(parsed.density, 0.05);
        assert_eq!(parsed.palette, " .:#");
        assert_eq!(parsed.text.as_deref(), Some("HOLO"));
        assert_eq!(parsed.width, DEFAULT_WIDTH);
        assert_eq!(parsed.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            Config::from_toml_str("density = \"dense\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/holo.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
