//! Draw-manager abstraction
//!
//! Emitters talk to the host's retained-mode draw manager only through
//! [`DrawTarget`]. Calls are grouped into drawables; styling set inside one
//! drawable does not leak into the next.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a text label relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlignment {
    /// Text starts at the anchor
    #[default]
    Left,
    /// Text is centered on the anchor
    Center,
    /// Text ends at the anchor
    Right,
}

/// Retained-mode draw manager
pub trait DrawTarget {
    /// Open a drawable; subsequent calls belong to it
    fn begin_drawable(&mut self);

    /// Close the current drawable
    fn end_drawable(&mut self);

    /// Set the color for following primitives (RGB)
    fn set_color(&mut self, color: [f32; 3]);

    /// Set the line width for following line primitives
    fn set_line_width(&mut self, width: f32);

    /// Draw a single line segment
    fn line(&mut self, start: Vec3, end: Vec3);

    /// Draw a cone with its base centered at `base`, pointing along
    /// `direction`
    fn cone(&mut self, base: Vec3, direction: Vec3, radius: f32, height: f32, filled: bool);

    /// Draw an arc around `center` from `start` to `end` (both directions
    /// relative to the center) in the plane with the given normal
    fn arc(&mut self, center: Vec3, start: Vec3, end: Vec3, normal: Vec3, radius: f32);

    /// Draw independent segments; `points` holds endpoint pairs
    fn line_list(&mut self, points: &[Vec3]);

    /// Draw a text label anchored at `position`
    fn text(&mut self, position: Vec3, text: &str, alignment: TextAlignment);
}

/// Run `f` inside a single drawable on `target`.
pub fn draw_scope(target: &mut dyn DrawTarget, f: impl FnOnce(&mut dyn DrawTarget)) {
    target.begin_drawable();
    f(target);
    target.end_drawable();
}
