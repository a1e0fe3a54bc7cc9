//! Error types for map-camera.
//!
//! Nothing in the per-frame motion model fails; these cover configuration
//! loading and the scene query surface.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`crate::config::Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting is outside its allowed range.
    #[error("{field} = {value} is out of range ({expected})")]
    OutOfRange {
        /// Dotted path of the setting, e.g. `zoom.min`.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Human readable description of the valid range.
        expected: &'static str,
    },

    /// A lower bound is not below its upper bound.
    #[error("{lower} ({lower_value}) must be less than {upper} ({upper_value})")]
    InvertedRange {
        lower: &'static str,
        lower_value: f32,
        upper: &'static str,
        upper_value: f32,
    },

    /// The document is not valid JSON for a config.
    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config file could not be read.
    #[error("failed to read config from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of a scene ray query. The terrain sampler swallows these and
/// keeps its previous height.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// No height geometry has been loaded yet.
    #[error("no height geometry loaded")]
    NotReady,

    /// The ray itself is unusable (zero or non-finite direction).
    #[error("degenerate ray direction {0:?}")]
    DegenerateRay([f32; 3]),
}
