//! Draw list flattening
//!
//! Converts recorded draw commands into line-list vertices so a plain
//! line pipeline can display them. Arcs are tessellated in their plane and
//! cones are drawn as wireframes (base ring plus slant edges). Text and
//! line width have no line representation and are dropped.

use std::f32::consts::PI;

use ddraw_core::geometry::{angle_between, is_degenerate, normalize};
use glam::{Quat, Vec3};

use crate::constants::DEFAULT_COLOR;
use crate::draw_list::{DrawCommand, DrawList};
use crate::vertex::LineVertex;

impl DrawList {
    /// Flatten every drawable into line-list vertices.
    ///
    /// `segments` controls tessellation of arcs and cone rings (clamped to
    /// at least 3). Each drawable starts from [`DEFAULT_COLOR`].
    pub fn to_line_vertices(&self, segments: u32) -> Vec<LineVertex> {
        let segments = segments.max(3);
        let mut out = Vec::new();

        for drawable in self.drawables() {
            let mut color = DEFAULT_COLOR;
            for command in &drawable.commands {
                match command {
                    DrawCommand::SetColor(c) => color = *c,
                    DrawCommand::Line { start, end } => push_segment(&mut out, *start, *end, color),
                    DrawCommand::LineList { points } => {
                        for pair in points.chunks_exact(2) {
                            push_segment(&mut out, pair[0], pair[1], color);
                        }
                    }
                    DrawCommand::Arc {
                        center,
                        start,
                        end,
                        normal,
                        radius,
                    } => {
                        let points = arc_points(*center, *start, *end, *normal, *radius, segments);
                        push_strip(&mut out, &points, color);
                    }
                    DrawCommand::Cone {
                        base,
                        direction,
                        radius,
                        height,
                        ..
                    } => push_cone(&mut out, *base, *direction, *radius, *height, segments, color),
                    DrawCommand::SetLineWidth(_) | DrawCommand::Text { .. } => {}
                }
            }
        }

        out
    }
}

/// Points along an arc around `center`, from the direction of `start` to
/// the direction of `end`, rotating about `normal`.
///
/// Returns `segments + 1` points, or none if the arc is degenerate.
pub fn arc_points(
    center: Vec3,
    start: Vec3,
    end: Vec3,
    normal: Vec3,
    radius: f32,
    segments: u32,
) -> Vec<Vec3> {
    let axis = normalize(normal);
    if is_degenerate(axis) || radius <= 0.0 {
        return Vec::new();
    }

    // Project the start direction into the arc plane
    let from = normalize(start - axis * start.dot(axis));
    if is_degenerate(from) {
        return Vec::new();
    }

    // Sweep is negative when the normal points against start x end
    let mut sweep = angle_between(start, end);
    if start.cross(end).dot(axis) < 0.0 {
        sweep = -sweep;
    }

    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            center + Quat::from_axis_angle(axis, sweep * t) * from * radius
        })
        .collect()
}

fn push_segment(out: &mut Vec<LineVertex>, a: Vec3, b: Vec3, color: [f32; 3]) {
    out.push(LineVertex::new(a, color));
    out.push(LineVertex::new(b, color));
}

fn push_strip(out: &mut Vec<LineVertex>, points: &[Vec3], color: [f32; 3]) {
    for pair in points.windows(2) {
        push_segment(out, pair[0], pair[1], color);
    }
}

fn push_cone(
    out: &mut Vec<LineVertex>,
    base: Vec3,
    direction: Vec3,
    radius: f32,
    height: f32,
    segments: u32,
    color: [f32; 3],
) {
    let axis = normalize(direction);
    if is_degenerate(axis) {
        return;
    }
    let apex = base + axis * height;
    let (u, v) = axis.any_orthonormal_pair();

    let ring: Vec<Vec3> = (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            base + (u * theta.cos() + v * theta.sin()) * radius
        })
        .collect();

    push_strip(out, &ring, color);
    for point in &ring[..segments as usize] {
        push_segment(out, *point, apex, color);
    }
}
