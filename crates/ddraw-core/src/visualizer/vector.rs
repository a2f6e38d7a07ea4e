//! Vector visualizer: an arrow from an origin along a direction offset

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::SelectionStatus;
use crate::attribute::{AttributeResult, AttributeSource};
use crate::constants::{
    DEFAULT_CONE_HEIGHT, DEFAULT_CONE_RADIUS, DEFAULT_TEXT_COLOR, DEFAULT_VECTOR_COLOR,
};
use crate::geometry::normalize;

/// Stable attribute names of a vector node
pub mod names {
    pub const ORIGIN: &str = "origin";
    pub const END_POINT: &str = "endPoint";
    pub const VECTOR_COLOR: &str = "vectorColor";
    pub const TEXT_COLOR: &str = "textColor";
    pub const CONE_RADIUS: &str = "coneRadius";
    pub const CONE_HEIGHT: &str = "coneHeight";
    pub const DISPLAY_TEXT: &str = "displayText";
}

/// Attribute snapshot of a vector node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorAttributes {
    /// Start of the arrow
    pub origin: Vec3,
    /// Direction offset from the origin (not an absolute point)
    pub end_point: Vec3,
    /// Arrow color (RGB)
    pub vector_color: [f32; 3],
    /// Label color (RGB)
    pub text_color: [f32; 3],
    /// Cone base radius, never negative
    pub cone_radius: f32,
    /// Cone height, never negative
    pub cone_height: f32,
    /// Whether the coordinate and length labels are drawn
    pub display_text: bool,
}

impl Default for VectorAttributes {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            end_point: Vec3::Y,
            vector_color: DEFAULT_VECTOR_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
            cone_radius: DEFAULT_CONE_RADIUS,
            cone_height: DEFAULT_CONE_HEIGHT,
            display_text: true,
        }
    }
}

impl VectorAttributes {
    /// Read the snapshot from a node's attributes.
    ///
    /// Cone dimensions are clamped to zero, as the host's attribute minimum
    /// would.
    pub fn from_source(source: &dyn AttributeSource) -> AttributeResult<Self> {
        Ok(Self {
            origin: source.read_vec3(names::ORIGIN)?,
            end_point: source.read_vec3(names::END_POINT)?,
            vector_color: source.read_color(names::VECTOR_COLOR)?,
            text_color: source.read_color(names::TEXT_COLOR)?,
            cone_radius: source.read_f32(names::CONE_RADIUS)?.max(0.0),
            cone_height: source.read_f32(names::CONE_HEIGHT)?.max(0.0),
            display_text: source.read_bool(names::DISPLAY_TEXT)?,
        })
    }
}

/// Derived draw data of a vector node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorDrawData {
    pub origin: Vec3,
    /// The direction offset as read (not normalized)
    pub vector_direction: Vec3,
    /// `origin + vector_direction`
    pub world_end_point: Vec3,
    /// Length of `vector_direction`
    pub magnitude: f32,
    /// Midpoint of the arrow, where the length label goes
    pub magnitude_label_pos: Vec3,
    /// Arrow color after the selection override
    pub vector_color: [f32; 3],
    /// Label color after the selection override
    pub text_color: [f32; 3],
    pub cone_radius: f32,
    pub cone_height: f32,
    pub display_text: bool,
    pub selection_status: SelectionStatus,
}

impl VectorDrawData {
    /// Derive draw data from a snapshot and the node's selection state
    pub fn build(attrs: &VectorAttributes, status: SelectionStatus) -> Self {
        let world_end_point = attrs.origin + attrs.end_point;
        let magnitude = attrs.end_point.length();
        let direction = normalize(attrs.end_point);
        let magnitude_label_pos = attrs.origin + direction * (magnitude / 2.0);

        let (vector_color, text_color) = match status.override_color() {
            Some(color) => (color, color),
            None => (attrs.vector_color, attrs.text_color),
        };

        tracing::trace!(
            "Vector draw data: end {:?}, magnitude {:.3}, status {:?}",
            world_end_point,
            magnitude,
            status
        );

        Self {
            origin: attrs.origin,
            vector_direction: attrs.end_point,
            world_end_point,
            magnitude,
            magnitude_label_pos,
            vector_color,
            text_color,
            cone_radius: attrs.cone_radius,
            cone_height: attrs.cone_height,
            display_text: attrs.display_text,
            selection_status: status,
        }
    }

    /// Unit direction of the arrow, zero if the vector has no length
    pub fn direction(&self) -> Vec3 {
        normalize(self.vector_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeMap;
    use approx::assert_relative_eq;

    fn snapshot(origin: Vec3, end_point: Vec3) -> VectorAttributes {
        VectorAttributes {
            origin,
            end_point,
            ..Default::default()
        }
    }

    #[test]
    fn test_vector_along_y() {
        let data = VectorDrawData::build(
            &snapshot(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0)),
            SelectionStatus::Normal,
        );
        assert_relative_eq!(data.magnitude, 3.0);
        assert_eq!(data.world_end_point, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(data.magnitude_label_pos, Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(data.direction(), Vec3::Y);
    }

    #[test]
    fn test_end_point_is_offset_from_origin() {
        let data = VectorDrawData::build(
            &snapshot(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 0.0, 0.0)),
            SelectionStatus::Normal,
        );
        assert_eq!(data.world_end_point, Vec3::new(3.0, 1.0, 1.0));
        assert_eq!(data.magnitude_label_pos, Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(data.magnitude, data.vector_direction.length());
    }

    #[test]
    fn test_zero_length_vector() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let data = VectorDrawData::build(&snapshot(origin, Vec3::ZERO), SelectionStatus::Normal);
        assert_eq!(data.magnitude, 0.0);
        assert_eq!(data.direction(), Vec3::ZERO);
        assert_eq!(data.magnitude_label_pos, origin);
        assert_eq!(data.world_end_point, origin);
    }

    #[test]
    fn test_selection_overrides_colors() {
        let attrs = VectorAttributes::default();

        let normal = VectorDrawData::build(&attrs, SelectionStatus::Normal);
        assert_eq!(normal.vector_color, [0.0, 0.4, 1.0]);
        assert_eq!(normal.text_color, [1.0, 1.0, 1.0]);

        let active = VectorDrawData::build(&attrs, SelectionStatus::Active);
        assert_eq!(active.vector_color, [1.0, 1.0, 1.0]);
        assert_eq!(active.text_color, [1.0, 1.0, 1.0]);

        let lead = VectorDrawData::build(&attrs, SelectionStatus::Lead);
        assert_eq!(lead.vector_color, [0.26, 1.0, 0.64]);
        assert_eq!(lead.text_color, [0.26, 1.0, 0.64]);
        assert_eq!(lead.selection_status, SelectionStatus::Lead);
    }

    #[test]
    fn test_from_source_clamps_cone() {
        let source = AttributeMap::new()
            .with_vec3(names::ORIGIN, Vec3::ZERO)
            .with_vec3(names::END_POINT, Vec3::X)
            .with_color(names::VECTOR_COLOR, [1.0, 0.0, 0.0])
            .with_color(names::TEXT_COLOR, [1.0, 1.0, 1.0])
            .with_f32(names::CONE_RADIUS, -0.5)
            .with_f32(names::CONE_HEIGHT, 0.25)
            .with_bool(names::DISPLAY_TEXT, false);

        let attrs = VectorAttributes::from_source(&source).unwrap();
        assert_eq!(attrs.cone_radius, 0.0);
        assert_eq!(attrs.cone_height, 0.25);
        assert_eq!(attrs.vector_color, [1.0, 0.0, 0.0]);
        assert!(!attrs.display_text);
    }
}
