//! Angle visualizer emission
//!
//! Draws both vectors as arrows, an arc between them, a right-angle tick
//! when the angle is close to 90 degrees, and the angle label.

use ddraw_core::AngleDrawData;
use ddraw_core::geometry::{is_degenerate, normalize};

use super::EmitPrimitives;
use super::arrow::draw_arrow;
use super::labels::format_angle;
use crate::config::DrawConfig;
use crate::draw::{DrawTarget, TextAlignment, draw_scope};

impl EmitPrimitives for AngleDrawData {
    fn emit(&self, config: &DrawConfig, target: &mut dyn DrawTarget) {
        let style = &config.angle;

        draw_arrow(target, self.origin, self.v1, style.first_color, &config.arrow);
        draw_arrow(target, self.origin, self.v2, style.second_color, &config.arrow);

        let mult = self.arc_scale();
        let has_plane = mult > 0.0 && !is_degenerate(self.plane_normal);

        draw_scope(target, |t| {
            t.set_color(style.arc_color);
            t.set_line_width(style.line_width);

            if has_plane {
                t.arc(
                    self.origin,
                    self.v1,
                    self.v2,
                    self.plane_normal,
                    mult * style.arc_radius_factor,
                );
            }

            if has_plane && self.is_right_angle(style.right_angle_tolerance_deg) {
                let leg1 = normalize(self.v1) * mult * style.tick_size_factor;
                let leg2 = normalize(self.v2) * mult * style.tick_size_factor;
                let corner = self.origin + leg1 + leg2;
                t.line_list(&[self.origin + leg1, corner, corner, self.origin + leg2]);
            }

            t.set_color(self.text_color);
            t.text(
                self.origin,
                &format_angle(self.degrees, self.radians, config.label.precision),
                TextAlignment::Left,
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::{DrawCommand, DrawList};
    use approx::assert_relative_eq;
    use ddraw_core::AngleAttributes;
    use glam::Vec3;

    fn emit(v1: Vec3, v2: Vec3, normalize: bool) -> DrawList {
        let data = AngleDrawData::build(&AngleAttributes {
            v1,
            v2,
            origin: Vec3::new(1.0, 0.0, 0.0),
            normalize,
            ..Default::default()
        });
        let mut list = DrawList::new();
        data.emit(&DrawConfig::default(), &mut list);
        list
    }

    fn line_lists(list: &DrawList) -> Vec<&Vec<Vec3>> {
        list.commands()
            .filter_map(|cmd| match cmd {
                DrawCommand::LineList { points } => Some(points),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_right_angle_draws_tick() {
        let list = emit(Vec3::X, Vec3::Y, true);

        // two arrows plus the arc/label drawable
        assert_eq!(list.len(), 3);
        assert_eq!(list.drawables()[0].color(), Some([1.0, 0.0, 0.0]));
        assert_eq!(list.drawables()[1].color(), Some([0.0, 1.0, 0.0]));

        let arc = list
            .commands()
            .find_map(|cmd| match cmd {
                DrawCommand::Arc { radius, normal, .. } => Some((*radius, *normal)),
                _ => None,
            })
            .expect("arc should be drawn");
        assert_relative_eq!(arc.0, 0.3);
        assert_eq!(arc.1, Vec3::Z);

        let ticks = line_lists(&list);
        assert_eq!(ticks.len(), 1);
        let origin = Vec3::new(1.0, 0.0, 0.0);
        let expected = [
            origin + Vec3::new(0.1, 0.0, 0.0),
            origin + Vec3::new(0.1, 0.1, 0.0),
            origin + Vec3::new(0.1, 0.1, 0.0),
            origin + Vec3::new(0.0, 0.1, 0.0),
        ];
        for (point, want) in ticks[0].iter().zip(expected) {
            assert!(point.abs_diff_eq(want, 1e-6), "{point:?} != {want:?}");
        }

        assert_eq!(list.texts(), vec!["90.00deg|1.57rad"]);
    }

    #[test]
    fn test_parallel_vectors_skip_arc_and_tick() {
        let list = emit(Vec3::X, Vec3::X, false);
        assert!(
            !list
                .commands()
                .any(|cmd| matches!(cmd, DrawCommand::Arc { .. }))
        );
        assert!(line_lists(&list).is_empty());
        assert_eq!(list.texts(), vec!["0.00deg|0.00rad"]);
    }

    #[test]
    fn test_identical_oblique_vectors_label_zero() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(emit(v, v, false).texts(), vec!["0.00deg|0.00rad"]);
        assert_eq!(emit(v, v, true).texts(), vec!["0.00deg|0.00rad"]);
        assert_eq!(emit(v, -v, false).texts(), vec!["180.00deg|3.14rad"]);
    }

    #[test]
    fn test_oblique_angle_has_arc_but_no_tick() {
        let list = emit(Vec3::X, Vec3::new(1.0, 1.0, 0.0), false);
        assert!(
            list.commands()
                .any(|cmd| matches!(cmd, DrawCommand::Arc { .. }))
        );
        assert!(line_lists(&list).is_empty());
        assert_eq!(list.texts(), vec!["45.00deg|0.79rad"]);
    }

    #[test]
    fn test_zero_vector_draws_label_only() {
        let list = emit(Vec3::ZERO, Vec3::Y, false);
        // only the second arrow and the label drawable
        assert_eq!(list.len(), 2);
        assert!(
            !list
                .commands()
                .any(|cmd| matches!(cmd, DrawCommand::Arc { .. }))
        );
    }
}
