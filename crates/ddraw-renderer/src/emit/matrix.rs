//! Matrix visualizer emission

use ddraw_core::MatrixDrawData;

use super::EmitPrimitives;
use super::arrow::draw_arrow;
use super::labels::format_point;
use crate::config::DrawConfig;
use crate::draw::{DrawTarget, TextAlignment, draw_scope};

impl EmitPrimitives for MatrixDrawData {
    fn emit(&self, config: &DrawConfig, target: &mut dyn DrawTarget) {
        let axis = &config.axis;
        draw_arrow(target, self.position, self.y_axis, axis.y_color, &config.arrow);
        draw_arrow(target, self.position, self.x_axis, axis.x_color, &config.arrow);
        draw_arrow(target, self.position, self.z_axis, axis.z_color, &config.arrow);

        if self.display_text {
            draw_scope(target, |t| {
                t.set_color(self.text_color);
                t.text(
                    self.position,
                    &format_point(self.position, config.label.precision),
                    TextAlignment::Left,
                );
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::{DrawCommand, DrawList};
    use ddraw_core::MatrixAttributes;
    use glam::{Mat4, Vec3};

    fn emit(matrix: Mat4, display_text: bool) -> DrawList {
        let data = MatrixDrawData::build(&MatrixAttributes {
            matrix,
            display_text,
            ..Default::default()
        });
        let mut list = DrawList::new();
        data.emit(&DrawConfig::default(), &mut list);
        list
    }

    #[test]
    fn test_axis_triad() {
        let list = emit(Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)), true);
        assert_eq!(list.len(), 4);

        let colors: Vec<_> = list.drawables().iter().map(|d| d.color()).collect();
        assert_eq!(
            colors,
            vec![
                Some([0.0, 1.0, 0.0]),
                Some([1.0, 0.0, 0.0]),
                Some([0.0, 0.0, 1.0]),
                Some([1.0, 1.0, 1.0]),
            ]
        );

        let first_line = list.drawables()[0].commands.iter().find_map(|cmd| match cmd {
            DrawCommand::Line { start, .. } => Some(*start),
            _ => None,
        });
        assert_eq!(first_line, Some(Vec3::new(5.0, 0.0, 0.0)));
        assert_eq!(list.texts(), vec!["{5.00, 0.00, 0.00}\n"]);
    }

    #[test]
    fn test_text_hidden_by_default() {
        let list = emit(Mat4::IDENTITY, false);
        assert_eq!(list.len(), 3);
        assert!(list.texts().is_empty());
    }

    #[test]
    fn test_collapsed_axis_skipped() {
        let list = emit(Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)), false);
        assert_eq!(list.len(), 2);
    }
}
