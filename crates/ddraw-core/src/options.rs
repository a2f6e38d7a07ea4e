//! Style presets per visualizer kind
//!
//! A preset holds only the styling attributes of a node (colors, cone
//! size, label flags), never its inputs. Presets are read from a node,
//! written back onto another node and stored as RON so a session can start
//! from the user's saved look.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attribute::{AttributeMap, AttributeResult, AttributeSource, AttributeValue};
use crate::constants::{DEFAULT_CONE_HEIGHT, DEFAULT_CONE_RADIUS, DEFAULT_TEXT_COLOR};
use crate::visualizer::{angle, matrix, vector};

/// Error type for preset loading and saving
#[derive(Debug, Clone, Error)]
pub enum OptionsError {
    /// RON text did not describe valid presets
    #[error("Failed to parse options: {0}")]
    Parse(String),

    /// Presets could not be written as RON
    #[error("Failed to serialize options: {0}")]
    Serialize(String),
}

/// Styling of a vector node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorOptions {
    pub vector_color: [f32; 3],
    pub cone_radius: f32,
    pub cone_height: f32,
    pub display_text: bool,
    pub text_color: [f32; 3],
}

impl Default for VectorOptions {
    fn default() -> Self {
        Self {
            vector_color: [0.0, 0.0, 1.0],
            cone_radius: DEFAULT_CONE_RADIUS,
            cone_height: DEFAULT_CONE_HEIGHT,
            display_text: false,
            text_color: DEFAULT_TEXT_COLOR,
        }
    }
}

impl VectorOptions {
    /// Read the styling attributes of a vector node
    pub fn from_source(source: &dyn AttributeSource) -> AttributeResult<Self> {
        Ok(Self {
            vector_color: source.read_color(vector::names::VECTOR_COLOR)?,
            cone_radius: source.read_f32(vector::names::CONE_RADIUS)?,
            cone_height: source.read_f32(vector::names::CONE_HEIGHT)?,
            display_text: source.read_bool(vector::names::DISPLAY_TEXT)?,
            text_color: source.read_color(vector::names::TEXT_COLOR)?,
        })
    }

    /// Write the styling onto a node, leaving its inputs untouched
    pub fn apply_to(&self, attrs: &mut AttributeMap) {
        attrs.set_color(vector::names::VECTOR_COLOR, self.vector_color);
        attrs.set(vector::names::CONE_RADIUS, AttributeValue::Float(self.cone_radius));
        attrs.set(vector::names::CONE_HEIGHT, AttributeValue::Float(self.cone_height));
        attrs.set(vector::names::DISPLAY_TEXT, AttributeValue::Bool(self.display_text));
        attrs.set_color(vector::names::TEXT_COLOR, self.text_color);
    }
}

/// Styling of an angle node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleOptions {
    pub normalize: bool,
    pub text_color: [f32; 3],
}

impl Default for AngleOptions {
    fn default() -> Self {
        Self {
            normalize: false,
            text_color: DEFAULT_TEXT_COLOR,
        }
    }
}

impl AngleOptions {
    /// Read the styling attributes of an angle node
    pub fn from_source(source: &dyn AttributeSource) -> AttributeResult<Self> {
        Ok(Self {
            normalize: source.read_bool(angle::names::NORMALIZE)?,
            text_color: source.read_color(angle::names::TEXT_COLOR)?,
        })
    }

    /// Write the styling onto a node, leaving its inputs untouched
    pub fn apply_to(&self, attrs: &mut AttributeMap) {
        attrs.set(angle::names::NORMALIZE, AttributeValue::Bool(self.normalize));
        attrs.set_color(angle::names::TEXT_COLOR, self.text_color);
    }
}

/// Styling of a matrix node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixOptions {
    pub display_text: bool,
    pub text_color: [f32; 3],
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            display_text: false,
            text_color: DEFAULT_TEXT_COLOR,
        }
    }
}

impl MatrixOptions {
    /// Read the styling attributes of a matrix node
    pub fn from_source(source: &dyn AttributeSource) -> AttributeResult<Self> {
        Ok(Self {
            display_text: source.read_bool(matrix::names::DISPLAY_TEXT)?,
            text_color: source.read_color(matrix::names::TEXT_COLOR)?,
        })
    }

    /// Write the styling onto a node, leaving its inputs untouched
    pub fn apply_to(&self, attrs: &mut AttributeMap) {
        attrs.set(matrix::names::DISPLAY_TEXT, AttributeValue::Bool(self.display_text));
        attrs.set_color(matrix::names::TEXT_COLOR, self.text_color);
    }
}

/// Saved presets for every kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerOptions {
    pub vector: VectorOptions,
    pub angle: AngleOptions,
    pub matrix: MatrixOptions,
}

impl VisualizerOptions {
    /// Parse presets from RON text; missing kinds use their defaults
    pub fn from_ron(text: &str) -> Result<Self, OptionsError> {
        ron::from_str(text).map_err(|e| OptionsError::Parse(e.to_string()))
    }

    /// Serialize the presets to pretty RON text
    pub fn to_ron(&self) -> Result<String, OptionsError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| OptionsError::Serialize(e.to_string()))
    }
}
