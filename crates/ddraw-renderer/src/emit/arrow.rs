//! Arrow primitive: a shaft line capped by a cone

use ddraw_core::geometry::{is_degenerate, normalize};
use glam::Vec3;

use crate::config::ArrowStyle;
use crate::draw::{DrawTarget, draw_scope};

/// Draw `vector` as an arrow starting at `origin`.
///
/// The shaft runs to `magnitude - cone_height` along the vector and the cone
/// covers the rest, so the tip lands on `origin + vector`. A zero-length
/// vector draws nothing.
pub fn draw_arrow(
    target: &mut dyn DrawTarget,
    origin: Vec3,
    vector: Vec3,
    color: [f32; 3],
    style: &ArrowStyle,
) {
    let direction = normalize(vector);
    if is_degenerate(direction) {
        tracing::trace!("Skipping zero-length arrow at {:?}", origin);
        return;
    }

    let cone_base = origin + direction * (vector.length() - style.cone_height);

    draw_scope(target, |t| {
        t.set_color(color);
        t.set_line_width(style.line_width);
        t.line(origin, cone_base);
        t.cone(cone_base, direction, style.cone_radius, style.cone_height, true);
    });
}
