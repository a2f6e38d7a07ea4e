//! Draw style configuration
//!
//! This module provides the styling used by the primitive emitters. Every
//! section has defaults matching the host plugin's look and can be loaded
//! from RON text; missing sections fall back to their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration loading
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// RON text did not describe a valid config
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// Config could not be written as RON
    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}

/// Arrow styling shared by all visualizers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArrowStyle {
    /// Width of the arrow shaft
    pub line_width: f32,
    /// Cone height for arrows without their own cone settings
    pub cone_height: f32,
    /// Cone radius for arrows without their own cone settings
    pub cone_radius: f32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            cone_height: 0.1,
            cone_radius: 0.05,
        }
    }
}

/// Angle visualizer styling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AngleStyle {
    /// First vector color (RGB)
    pub first_color: [f32; 3],
    /// Second vector color (RGB)
    pub second_color: [f32; 3],
    /// Arc and right-angle tick color (RGB)
    pub arc_color: [f32; 3],
    /// Width of the arc and tick lines
    pub line_width: f32,
    /// Arc radius as a fraction of the shorter vector
    pub arc_radius_factor: f32,
    /// Right-angle tick leg length as a fraction of the shorter vector
    pub tick_size_factor: f32,
    /// Maximum distance from 90 degrees that still draws the tick
    pub right_angle_tolerance_deg: f32,
}

impl Default for AngleStyle {
    fn default() -> Self {
        Self {
            first_color: [1.0, 0.0, 0.0],
            second_color: [0.0, 1.0, 0.0],
            arc_color: [1.0, 1.0, 1.0],
            line_width: 2.0,
            arc_radius_factor: 0.3,
            tick_size_factor: 0.1,
            right_angle_tolerance_deg: 0.5,
        }
    }
}

/// Axis triad colors for the matrix visualizer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AxisStyle {
    /// X-axis color (RGB)
    pub x_color: [f32; 3],
    /// Y-axis color (RGB)
    pub y_color: [f32; 3],
    /// Z-axis color (RGB)
    pub z_color: [f32; 3],
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            x_color: [1.0, 0.0, 0.0],
            y_color: [0.0, 1.0, 0.0],
            z_color: [0.0, 0.0, 1.0],
        }
    }
}

/// Label formatting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelStyle {
    /// Decimal places for coordinates, lengths and angles
    pub precision: usize,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// Complete draw configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DrawConfig {
    /// Arrow settings
    #[serde(default)]
    pub arrow: ArrowStyle,
    /// Angle settings
    #[serde(default)]
    pub angle: AngleStyle,
    /// Axis triad settings
    #[serde(default)]
    pub axis: AxisStyle,
    /// Label settings
    #[serde(default)]
    pub label: LabelStyle,
}

impl DrawConfig {
    /// Create a new draw configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from RON text
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to pretty RON text
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
