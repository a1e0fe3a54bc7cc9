//! Tunables for the camera controls.
//!
//! Every section deserializes with defaults so a JSON document only needs to
//! name the values it changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::path::Path;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub min: f32,
    pub max: f32,
    /// Multiplicative factor per wheel step.
    pub speed: f32,
    pub smooth: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 2000.0,
            speed: 1.5,
            smooth: 0.2,
        }
    }
}

impl ZoomSettings {
    pub fn clamp(&self, distance: f32) -> f32 {
        distance.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanSettings {
    pub speed: f32,
    /// Smoothing for the horizontal focus axes.
    pub smooth: f32,
    /// Smoothing for the focus height, slower so terrain following is damped.
    pub smooth_y: f32,
    /// Screen-space pixels per frame contributed by a held direction key.
    pub key_step: f32,
}

impl Default for PanSettings {
    fn default() -> Self {
        Self {
            speed: 1.75,
            smooth: 0.3,
            smooth_y: 0.075,
            key_step: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltSettings {
    /// Largest pitch in radians, reached at the maximum zoom distance.
    pub max: f32,
    /// Gain applied to keyboard tilt.
    pub speed: f32,
    pub smooth: f32,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            max: PI / 2.1,
            speed: 1.5,
            smooth: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotateSettings {
    /// Gain applied to keyboard rotation.
    pub speed: f32,
    pub smooth: f32,
}

impl Default for RotateSettings {
    fn default() -> Self {
        Self {
            speed: 1.5,
            smooth: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Ground height assumed until the first successful sample.
    pub initial_height: f32,
    /// Horizontal tile extent (x, z). Sampling is skipped until this is known.
    pub tile_size: Option<Vec2>,
    /// World height the downward sampling rays start from.
    pub ray_origin_height: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            initial_height: 70.0,
            tile_size: None,
            ray_origin_height: 300.0,
            near: 1.0,
            far: 300.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapSettings {
    /// Maximum net pointer travel, in pixels, for a tap to count as a click.
    pub threshold: f32,
}

impl Default for TapSettings {
    fn default() -> Self {
        Self { threshold: 2.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub zoom: ZoomSettings,
    pub pan: PanSettings,
    pub tilt: TiltSettings,
    pub rotate: RotateSettings,
    pub terrain: TerrainSettings,
    pub tap: TapSettings,
}

impl Config {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded camera config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("zoom.min", self.zoom.min)?;
        ordered("zoom.min", self.zoom.min, "zoom.max", self.zoom.max)?;
        positive("zoom.speed", self.zoom.speed)?;
        smoothing("zoom.smooth", self.zoom.smooth)?;

        positive("pan.speed", self.pan.speed)?;
        smoothing("pan.smooth", self.pan.smooth)?;
        smoothing("pan.smooth_y", self.pan.smooth_y)?;
        non_negative("pan.key_step", self.pan.key_step)?;

        if !(self.tilt.max > 0.0 && self.tilt.max <= PI / 2.0) {
            return Err(ConfigError::OutOfRange {
                field: "tilt.max",
                value: self.tilt.max,
                expected: "0 < max <= pi/2",
            });
        }
        non_negative("tilt.speed", self.tilt.speed)?;
        smoothing("tilt.smooth", self.tilt.smooth)?;

        non_negative("rotate.speed", self.rotate.speed)?;
        smoothing("rotate.smooth", self.rotate.smooth)?;

        if let Some(size) = self.terrain.tile_size {
            positive("terrain.tile_size.x", size.x)?;
            positive("terrain.tile_size.z", size.y)?;
        }
        non_negative("terrain.near", self.terrain.near)?;
        ordered("terrain.near", self.terrain.near, "terrain.far", self.terrain.far)?;

        non_negative("tap.threshold", self.tap.threshold)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected: "finite and > 0",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected: "finite and >= 0",
        })
    }
}

fn smoothing(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected: "0 < smooth <= 1",
        })
    }
}

fn ordered(
    lower: &'static str,
    lower_value: f32,
    upper: &'static str,
    upper_value: f32,
) -> Result<(), ConfigError> {
    if lower_value < upper_value {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange {
            lower,
            lower_value,
            upper,
            upper_value,
        })
    }
}
