//! Draw-data builders for the three visualizer kinds
//!
//! Each visualizer reads an attribute snapshot and derives an immutable
//! draw-data record from it. Records are rebuilt from scratch on every
//! refresh and never patched in place.

pub mod angle;
pub mod matrix;
pub mod vector;

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeResult, AttributeSource};
use crate::registry::VisualizerKind;

pub use angle::{AngleAttributes, AngleDrawData};
pub use matrix::{MatrixAttributes, MatrixDrawData};
pub use vector::{VectorAttributes, VectorDrawData};

/// Viewport selection state of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionStatus {
    /// Part of the active selection
    Active,
    /// The lead (most recently selected) node
    Lead,
    /// Not selected
    #[default]
    Normal,
}

impl SelectionStatus {
    /// Color that replaces the node's own colors, if any
    pub fn override_color(self) -> Option<[f32; 3]> {
        use crate::constants::{ACTIVE_COLOR, LEAD_COLOR};
        match self {
            SelectionStatus::Active => Some(ACTIVE_COLOR),
            SelectionStatus::Lead => Some(LEAD_COLOR),
            SelectionStatus::Normal => None,
        }
    }
}

/// Draw data for any visualizer kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawData {
    /// Arrow with optional coordinate and length labels
    Vector(VectorDrawData),
    /// Two arrows with the arc and label between them
    Angle(AngleDrawData),
    /// Basis axes at the matrix translation
    Matrix(MatrixDrawData),
}

impl DrawData {
    /// Read the attributes for `kind` and build a fresh record
    pub fn build(
        kind: VisualizerKind,
        source: &dyn AttributeSource,
        status: SelectionStatus,
    ) -> AttributeResult<Self> {
        let data = match kind {
            VisualizerKind::Vector => {
                let attrs = VectorAttributes::from_source(source)?;
                DrawData::Vector(VectorDrawData::build(&attrs, status))
            }
            VisualizerKind::Angle => {
                let attrs = AngleAttributes::from_source(source)?;
                DrawData::Angle(AngleDrawData::build(&attrs))
            }
            VisualizerKind::Matrix => {
                let attrs = MatrixAttributes::from_source(source)?;
                DrawData::Matrix(MatrixDrawData::build(&attrs))
            }
        };
        Ok(data)
    }

    /// Kind of visualizer this record belongs to
    pub fn kind(&self) -> VisualizerKind {
        match self {
            DrawData::Vector(_) => VisualizerKind::Vector,
            DrawData::Angle(_) => VisualizerKind::Angle,
            DrawData::Matrix(_) => VisualizerKind::Matrix,
        }
    }
}
