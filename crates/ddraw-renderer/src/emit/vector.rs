//! Vector visualizer emission

use ddraw_core::VectorDrawData;

use super::EmitPrimitives;
use super::arrow::draw_arrow;
use super::labels::{format_magnitude, format_point};
use crate::config::{ArrowStyle, DrawConfig};
use crate::draw::{DrawTarget, TextAlignment, draw_scope};

impl EmitPrimitives for VectorDrawData {
    fn emit(&self, config: &DrawConfig, target: &mut dyn DrawTarget) {
        let style = ArrowStyle {
            cone_height: self.cone_height,
            cone_radius: self.cone_radius,
            ..config.arrow.clone()
        };
        draw_arrow(
            target,
            self.origin,
            self.vector_direction,
            self.vector_color,
            &style,
        );

        if !self.display_text {
            return;
        }

        let precision = config.label.precision;
        draw_scope(target, |t| {
            t.set_color(self.text_color);
            t.text(
                self.world_end_point,
                &format_point(self.world_end_point, precision),
                TextAlignment::Center,
            );
            t.text(
                self.magnitude_label_pos,
                &format_magnitude(self.magnitude, precision),
                TextAlignment::Left,
            );
        });
    }
}
