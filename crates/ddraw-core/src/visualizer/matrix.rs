//! Matrix visualizer: an axis triad at the transform's position
//!
//! No orthogonality or handedness checks are made; sheared or mirrored
//! transforms are drawn exactly as given.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeResult, AttributeSource};
use crate::constants::DEFAULT_TEXT_COLOR;

/// Stable attribute names of a matrix node
pub mod names {
    pub const IN_MATRIX: &str = "inMatrix";
    pub const TEXT_COLOR: &str = "textColor";
    pub const DISPLAY_TEXT: &str = "displayText";
}

/// Attribute snapshot of a matrix node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixAttributes {
    pub matrix: Mat4,
    pub text_color: [f32; 3],
    pub display_text: bool,
}

impl Default for MatrixAttributes {
    fn default() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            text_color: DEFAULT_TEXT_COLOR,
            display_text: false,
        }
    }
}

impl MatrixAttributes {
    /// Read the snapshot from a node's attributes
    pub fn from_source(source: &dyn AttributeSource) -> AttributeResult<Self> {
        Ok(Self {
            matrix: source.read_matrix(names::IN_MATRIX)?,
            text_color: source.read_color(names::TEXT_COLOR)?,
            display_text: source.read_bool(names::DISPLAY_TEXT)?,
        })
    }
}

/// Derived draw data of a matrix node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixDrawData {
    pub position: Vec3,
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
    pub text_color: [f32; 3],
    pub display_text: bool,
}

impl MatrixDrawData {
    /// Split the transform into its position and basis vectors.
    ///
    /// The homogeneous component of each row is ignored.
    pub fn build(attrs: &MatrixAttributes) -> Self {
        let m = attrs.matrix;
        Self {
            position: m.w_axis.truncate(),
            x_axis: m.x_axis.truncate(),
            y_axis: m.y_axis.truncate(),
            z_axis: m.z_axis.truncate(),
            text_color: attrs.text_color,
            display_text: attrs.display_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{AttributeMap, AttributeValue};

    #[test]
    fn test_identity_with_translation() {
        let attrs = MatrixAttributes {
            matrix: Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)),
            ..Default::default()
        };
        let data = MatrixDrawData::build(&attrs);
        assert_eq!(data.position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(data.x_axis, Vec3::X);
        assert_eq!(data.y_axis, Vec3::Y);
        assert_eq!(data.z_axis, Vec3::Z);
    }

    #[test]
    fn test_host_rows_become_axes() {
        // Row-major host layout with a scaled, sheared basis
        let rows = [
            [2.0, 0.0, 0.0, 0.0],
            [0.5, 1.0, 0.0, 0.0],
            [0.0, 0.0, -1.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ];
        let mut source = AttributeMap::new()
            .with_color(names::TEXT_COLOR, [1.0, 1.0, 0.0])
            .with_bool(names::DISPLAY_TEXT, true);
        source.set(names::IN_MATRIX, AttributeValue::Matrix(rows));

        let attrs = MatrixAttributes::from_source(&source).unwrap();
        let data = MatrixDrawData::build(&attrs);
        assert_eq!(data.x_axis, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(data.y_axis, Vec3::new(0.5, 1.0, 0.0));
        assert_eq!(data.z_axis, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(data.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(data.text_color, [1.0, 1.0, 0.0]);
        assert!(data.display_text);
    }

    #[test]
    fn test_homogeneous_column_ignored() {
        let rows = [
            [1.0, 0.0, 0.0, 7.0],
            [0.0, 1.0, 0.0, 7.0],
            [0.0, 0.0, 1.0, 7.0],
            [4.0, 5.0, 6.0, 9.0],
        ];
        let attrs = MatrixAttributes {
            matrix: Mat4::from_cols_array_2d(&rows),
            ..Default::default()
        };
        let data = MatrixDrawData::build(&attrs);
        assert_eq!(data.x_axis, Vec3::X);
        assert_eq!(data.position, Vec3::new(4.0, 5.0, 6.0));
    }
}
