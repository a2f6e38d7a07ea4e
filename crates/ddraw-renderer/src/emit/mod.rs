//! Primitive emitters
//!
//! Each draw-data record knows how to turn itself into draw calls on a
//! [`DrawTarget`]. Emission is a pure function of the record and the
//! [`DrawConfig`]; degenerate geometry is skipped rather than drawn with
//! NaNs.

mod angle;
mod arrow;
mod labels;
mod matrix;
mod vector;

use ddraw_core::DrawData;

use crate::config::DrawConfig;
use crate::draw::DrawTarget;

pub use arrow::draw_arrow;
pub use labels::{format_angle, format_magnitude, format_point};

/// Emits the draw calls for a draw-data record
pub trait EmitPrimitives {
    /// Enqueue this record's primitives on `target`
    fn emit(&self, config: &DrawConfig, target: &mut dyn DrawTarget);
}

impl EmitPrimitives for DrawData {
    fn emit(&self, config: &DrawConfig, target: &mut dyn DrawTarget) {
        match self {
            DrawData::Vector(data) => data.emit(config, target),
            DrawData::Angle(data) => data.emit(config, target),
            DrawData::Matrix(data) => data.emit(config, target),
        }
    }
}
