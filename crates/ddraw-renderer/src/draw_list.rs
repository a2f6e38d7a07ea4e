//! Recording draw target
//!
//! [`DrawList`] keeps every call it receives as a [`DrawCommand`], grouped
//! into [`Drawable`]s. Hosts without a native draw manager can replay it,
//! or flatten it into line vertices with [`DrawList::to_line_vertices`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::draw::{DrawTarget, TextAlignment};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Color for following primitives
    SetColor([f32; 3]),
    /// Line width for following primitives
    SetLineWidth(f32),
    /// Line segment
    Line {
        /// Segment start
        start: Vec3,
        /// Segment end
        end: Vec3,
    },
    /// Cone standing on `base`
    Cone {
        /// Center of the cone base
        base: Vec3,
        /// Unit direction from base to apex
        direction: Vec3,
        /// Base radius
        radius: f32,
        /// Distance from base to apex
        height: f32,
        /// Whether the base is capped
        filled: bool,
    },
    /// Circular arc
    Arc {
        /// Arc center
        center: Vec3,
        /// Direction of the first arc end, relative to the center
        start: Vec3,
        /// Direction of the second arc end, relative to the center
        end: Vec3,
        /// Normal of the arc plane
        normal: Vec3,
        /// Arc radius
        radius: f32,
    },
    /// Independent segments as endpoint pairs
    LineList {
        /// Segment endpoints, two per segment
        points: Vec<Vec3>,
    },
    /// Text label
    Text {
        /// Anchor position
        position: Vec3,
        /// Label contents
        text: String,
        /// Alignment relative to the anchor
        alignment: TextAlignment,
    },
}

/// A group of commands that share styling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    /// Commands in submission order
    pub commands: Vec<DrawCommand>,
}

impl Drawable {
    /// Text labels in this drawable
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Last color set in this drawable
    pub fn color(&self) -> Option<[f32; 3]> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::SetColor(color) => Some(*color),
            _ => None,
        })
    }
}

/// Retained list of recorded drawables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    drawables: Vec<Drawable>,
    #[serde(skip)]
    open: bool,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded drawables in submission order
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    /// All recorded commands, across drawables
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.drawables.iter().flat_map(|d| d.commands.iter())
    }

    /// All text labels, across drawables
    pub fn texts(&self) -> Vec<&str> {
        self.drawables.iter().flat_map(|d| d.texts()).collect()
    }

    /// Number of recorded drawables
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.drawables.clear();
        self.open = false;
    }

    fn push(&mut self, command: DrawCommand) {
        if !self.open {
            tracing::trace!("Draw call outside a drawable; opening an implicit one");
            self.drawables.push(Drawable::default());
            self.open = true;
        }
        if let Some(current) = self.drawables.last_mut() {
            current.commands.push(command);
        }
    }
}

impl DrawTarget for DrawList {
    fn begin_drawable(&mut self) {
        if self.open {
            tracing::warn!("begin_drawable called while a drawable is open; closing it");
        }
        self.drawables.push(Drawable::default());
        self.open = true;
    }

    fn end_drawable(&mut self) {
        if !self.open {
            tracing::warn!("end_drawable called without an open drawable");
        }
        self.open = false;
    }

    fn set_color(&mut self, color: [f32; 3]) {
        self.push(DrawCommand::SetColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.push(DrawCommand::SetLineWidth(width));
    }

    fn line(&mut self, start: Vec3, end: Vec3) {
        self.push(DrawCommand::Line { start, end });
    }

    fn cone(&mut self, base: Vec3, direction: Vec3, radius: f32, height: f32, filled: bool) {
        self.push(DrawCommand::Cone {
            base,
            direction,
            radius,
            height,
            filled,
        });
    }

    fn arc(&mut self, center: Vec3, start: Vec3, end: Vec3, normal: Vec3, radius: f32) {
        self.push(DrawCommand::Arc {
            center,
            start,
            end,
            normal,
            radius,
        });
    }

    fn line_list(&mut self, points: &[Vec3]) {
        self.push(DrawCommand::LineList {
            points: points.to_vec(),
        });
    }

    fn text(&mut self, position: Vec3, text: &str, alignment: TextAlignment) {
        self.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            alignment,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::draw_scope;

    #[test]
    fn test_scopes_group_commands() {
        let mut list = DrawList::new();
        draw_scope(&mut list, |t| {
            t.set_color([1.0, 0.0, 0.0]);
            t.line(Vec3::ZERO, Vec3::X);
        });
        draw_scope(&mut list, |t| {
            t.set_color([0.0, 1.0, 0.0]);
            t.text(Vec3::Y, "label", TextAlignment::Center);
        });

        assert_eq!(list.len(), 2);
        assert_eq!(list.drawables()[0].color(), Some([1.0, 0.0, 0.0]));
        assert_eq!(list.drawables()[1].color(), Some([0.0, 1.0, 0.0]));
        assert_eq!(list.texts(), vec!["label"]);
        assert_eq!(list.commands().count(), 4);
    }

    #[test]
    fn test_call_outside_scope_opens_implicit_drawable() {
        let mut list = DrawList::new();
        list.line(Vec3::ZERO, Vec3::X);
        list.line(Vec3::ZERO, Vec3::Y);
        list.end_drawable();
        list.line(Vec3::ZERO, Vec3::Z);

        assert_eq!(list.len(), 2);
        assert_eq!(list.drawables()[0].commands.len(), 2);
        assert_eq!(list.drawables()[1].commands.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut list = DrawList::new();
        draw_scope(&mut list, |t| t.line(Vec3::ZERO, Vec3::X));
        assert!(!list.is_empty());
        list.clear();
        assert!(list.is_empty());
    }
}
