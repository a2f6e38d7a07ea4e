//! Angle visualizer: two vectors, the arc between them and the angle label

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeResult, AttributeSource};
use crate::constants::DEFAULT_TEXT_COLOR;
use crate::geometry::{angle_between, normalize, plane_normal, to_degrees};

/// Stable attribute names of an angle node
pub mod names {
    pub const VECTOR1: &str = "vector1";
    pub const VECTOR2: &str = "vector2";
    pub const ORIGIN: &str = "origin";
    pub const TEXT_COLOR: &str = "textColor";
    pub const NORMALIZE: &str = "normalize";
}

/// Attribute snapshot of an angle node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleAttributes {
    pub v1: Vec3,
    pub v2: Vec3,
    pub origin: Vec3,
    pub text_color: [f32; 3],
    /// Unit-normalize both vectors before measuring
    pub normalize: bool,
}

impl Default for AngleAttributes {
    fn default() -> Self {
        Self {
            v1: Vec3::X,
            v2: Vec3::Y,
            origin: Vec3::ZERO,
            text_color: DEFAULT_TEXT_COLOR,
            normalize: true,
        }
    }
}

impl AngleAttributes {
    /// Read the snapshot from a node's attributes
    pub fn from_source(source: &dyn AttributeSource) -> AttributeResult<Self> {
        Ok(Self {
            v1: source.read_vec3(names::VECTOR1)?,
            v2: source.read_vec3(names::VECTOR2)?,
            origin: source.read_vec3(names::ORIGIN)?,
            text_color: source.read_color(names::TEXT_COLOR)?,
            normalize: source.read_bool(names::NORMALIZE)?,
        })
    }
}

/// Derived draw data of an angle node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleDrawData {
    /// First vector, normalized if requested
    pub v1: Vec3,
    /// Second vector, normalized if requested
    pub v2: Vec3,
    pub origin: Vec3,
    /// `v1 x v2`; zero when the vectors are parallel
    pub plane_normal: Vec3,
    /// Angle in `[0, PI]`
    pub radians: f32,
    pub degrees: f32,
    pub text_color: [f32; 3],
}

impl AngleDrawData {
    /// Derive draw data from a snapshot
    pub fn build(attrs: &AngleAttributes) -> Self {
        let (v1, v2) = if attrs.normalize {
            (normalize(attrs.v1), normalize(attrs.v2))
        } else {
            (attrs.v1, attrs.v2)
        };

        let radians = angle_between(v1, v2);
        let degrees = to_degrees(radians);

        tracing::trace!("Angle draw data: {:.2} deg between {:?} and {:?}", degrees, v1, v2);

        Self {
            v1,
            v2,
            origin: attrs.origin,
            plane_normal: plane_normal(v1, v2),
            radians,
            degrees,
            text_color: attrs.text_color,
        }
    }

    /// Whether the angle is within `tolerance_deg` of 90 degrees
    pub fn is_right_angle(&self, tolerance_deg: f32) -> bool {
        (self.degrees - 90.0).abs() <= tolerance_deg
    }

    /// Shorter of the two vector lengths; scales the arc and tick
    pub fn arc_scale(&self) -> f32 {
        self.v1.length().min(self.v2.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEGREES_PER_RADIAN;
    use approx::assert_relative_eq;

    fn snapshot(v1: Vec3, v2: Vec3, normalize: bool) -> AngleAttributes {
        AngleAttributes {
            v1,
            v2,
            normalize,
            ..Default::default()
        }
    }

    #[test]
    fn test_right_angle() {
        let data = AngleDrawData::build(&snapshot(Vec3::X, Vec3::Y, true));
        assert_relative_eq!(data.radians, 1.5708, epsilon = 1e-4);
        assert_relative_eq!(data.degrees, 90.0, epsilon = 1e-3);
        assert_eq!(data.plane_normal, Vec3::Z);
        assert!(data.is_right_angle(0.5));
    }

    #[test]
    fn test_parallel_vectors() {
        let data = AngleDrawData::build(&snapshot(Vec3::X, Vec3::X, false));
        assert_eq!(data.radians, 0.0);
        assert_eq!(data.degrees, 0.0);
        assert_eq!(data.plane_normal, Vec3::ZERO);
        assert!(!data.is_right_angle(0.5));
    }

    #[test]
    fn test_normalize_happens_before_plane() {
        let v1 = Vec3::new(3.0, 0.0, 0.0);
        let v2 = Vec3::new(0.0, 4.0, 0.0);

        let raw = AngleDrawData::build(&snapshot(v1, v2, false));
        assert_eq!(raw.plane_normal, Vec3::new(0.0, 0.0, 12.0));
        assert_relative_eq!(raw.arc_scale(), 3.0);

        let unit = AngleDrawData::build(&snapshot(v1, v2, true));
        assert_eq!(unit.v1, Vec3::X);
        assert_eq!(unit.v2, Vec3::Y);
        assert_eq!(unit.plane_normal, Vec3::Z);
        assert_relative_eq!(unit.arc_scale(), 1.0);
        assert_relative_eq!(unit.radians, raw.radians);
    }

    #[test]
    fn test_degrees_match_radians() {
        let data = AngleDrawData::build(&snapshot(
            Vec3::new(1.0, 2.0, 0.5),
            Vec3::new(-0.3, 1.0, 2.0),
            false,
        ));
        assert_relative_eq!(data.degrees, data.radians * DEGREES_PER_RADIAN);
        assert_relative_eq!(data.degrees, data.radians.to_degrees(), epsilon = 1e-3);
    }

    #[test]
    fn test_right_angle_tolerance() {
        let tilted = Vec3::new((89.7f32).to_radians().cos(), (89.7f32).to_radians().sin(), 0.0);
        let data = AngleDrawData::build(&snapshot(Vec3::X, tilted, true));
        assert!(data.is_right_angle(0.5));
        assert!(!data.is_right_angle(0.1));
    }
}
