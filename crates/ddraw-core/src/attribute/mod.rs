//! Host attribute model
//!
//! Visualizer nodes expose named, typed attributes. The host owns them;
//! this module only describes the values the draw-data builders read:
//!
//! - [`AttributeValue`] - a single attribute (scalar, flag, 3-tuple, matrix)
//! - [`AttributeSource`] - lookup by stable name, with typed readers
//! - [`AttributeMap`] - in-memory source for tests and headless hosts
//! - [`extract_vec3`] - the 3-tuple ordering contract

mod extract;
mod source;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use extract::{channel_index, extract_color, extract_vec3};
pub use source::{AttributeMap, AttributeSource};

/// One child of a compound attribute (e.g. `originX`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildValue {
    /// Child attribute name as declared by the host
    pub name: String,
    /// Scalar value
    pub value: f32,
}

impl ChildValue {
    /// Create a new child value
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Value of a single host attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Scalar float
    Float(f32),
    /// Boolean flag
    Bool(bool),
    /// Compound attribute, children in host declaration order
    Compound(Vec<ChildValue>),
    /// 4x4 transform as the host stores it: row-major, rows 0-2 are the
    /// basis vectors and row 3 is the translation
    Matrix([[f32; 4]; 4]),
}

impl AttributeValue {
    /// Kind of this value, for error reporting
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Float(_) => AttributeKind::Float,
            AttributeValue::Bool(_) => AttributeKind::Bool,
            AttributeValue::Compound(_) => AttributeKind::Compound,
            AttributeValue::Matrix(_) => AttributeKind::Matrix,
        }
    }
}

/// Attribute kinds, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeKind {
    Float,
    Bool,
    Compound,
    Matrix,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeKind::Float => "float",
            AttributeKind::Bool => "bool",
            AttributeKind::Compound => "compound",
            AttributeKind::Matrix => "matrix",
        };
        f.write_str(name)
    }
}

/// Error type for attribute reads
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    #[error("Attribute '{0}' not found")]
    Missing(String),

    #[error("Attribute '{name}' is a {found}, expected {expected}")]
    WrongKind {
        name: String,
        expected: AttributeKind,
        found: AttributeKind,
    },
}

/// Result type for attribute reads
pub type AttributeResult<T> = Result<T, AttributeError>;
