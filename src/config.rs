//! Render configuration.
//!
//! Capacity constants (store sizes, maximum canvas dimensions) are fixed at
//! compile time and deliberately not configurable here; only the cosmetic
//! and normalization parameters of the rasterizer are.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canvas::{Rgba, DEFAULT_SIZE, MAX_HEIGHT, MAX_WIDTH};

/// Rasterizer configuration.
///
/// The defaults reproduce the host wire contract exactly: 5% bounds padding,
/// 256x256 fallback dimensions, black background, red points, white pose
/// markers. Hosts that only need the stock rendering never touch this type.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Bounding-box padding as a fraction of the span, applied per side.
    /// Default: 0.05 (5%)
    pub padding: f32,

    /// Active width used when a draw call passes a non-positive width.
    pub default_width: usize,

    /// Active height used when a draw call passes a non-positive height.
    pub default_height: usize,

    /// Cleared-canvas background color.
    pub background: Rgba,

    /// Color for point samples (single pixels).
    pub point_color: Rgba,

    /// Color for pose markers (3x3 blocks, drawn over points).
    pub pose_color: Rgba,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: 0.05,
            default_width: DEFAULT_SIZE,
            default_height: DEFAULT_SIZE,
            background: Rgba::BLACK,
            point_color: Rgba::RED,
            pose_color: Rgba::WHITE,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::Validation(format!(
                "padding must be finite and non-negative, got {}",
                self.padding
            )));
        }
        if self.default_width == 0 || self.default_width > MAX_WIDTH {
            return Err(ConfigError::Validation(format!(
                "default_width must be in 1..={}, got {}",
                MAX_WIDTH, self.default_width
            )));
        }
        if self.default_height == 0 || self.default_height > MAX_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "default_height must be in 1..={}, got {}",
                MAX_HEIGHT, self.default_height
            )));
        }
        Ok(())
    }
}

/// Configuration load/validation error.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(String),
    /// YAML parsing error.
    #[error("parse error: {0}")]
    Parse(String),
    /// A parameter was out of range.
    #[error("invalid config: {0}")]
    Validation(String),
}
