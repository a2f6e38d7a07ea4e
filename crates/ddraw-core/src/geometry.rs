//! Shared vector math for draw-data derivation
//!
//! Every helper here is total: degenerate inputs (zero-length or parallel
//! vectors) produce zero vectors or zero angles instead of NaNs, so callers
//! can treat "zero" as "nothing to draw".

use glam::Vec3;

use crate::constants::DEGREES_PER_RADIAN;

/// Unit vector in the direction of `v`, or zero for a zero-length input.
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// Angle between two vectors in radians, in `[0, PI]`.
///
/// Computed as `atan2(|a x b|, a . b)`, which stays exact for identical and
/// opposite inputs where `acos` of the dot product loses precision.
/// Returns `0.0` if either vector is zero.
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let a = normalize(a);
    let b = normalize(b);
    if a == Vec3::ZERO || b == Vec3::ZERO {
        return 0.0;
    }
    a.cross(b).length().atan2(a.dot(b))
}

/// Convert radians to degrees using [`DEGREES_PER_RADIAN`].
pub fn to_degrees(radians: f32) -> f32 {
    radians * DEGREES_PER_RADIAN
}

/// Normal of the plane spanned by `a` and `b` (their cross product).
///
/// Parallel or zero inputs yield [`Vec3::ZERO`].
pub fn plane_normal(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Returns true if the vector has no usable direction.
pub fn is_degenerate(v: Vec3) -> bool {
    v.length_squared() <= f32::EPSILON * f32::EPSILON
}
