//! Global constants for ddraw-core

/// Degrees per radian (180 / PI), matching the precision the host uses
pub const DEGREES_PER_RADIAN: f32 = 57.295_779_5;

/// Color override for nodes in the active selection (RGB)
pub const ACTIVE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Color override for the lead selected node (teal, RGB)
pub const LEAD_COLOR: [f32; 3] = [0.26, 1.0, 0.64];

/// Default text color for all visualizers (white, RGB)
pub const DEFAULT_TEXT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Default vector color (RGB)
pub const DEFAULT_VECTOR_COLOR: [f32; 3] = [0.0, 0.4, 1.0];

/// Default cone radius for vector nodes
pub const DEFAULT_CONE_RADIUS: f32 = 0.1;

/// Default cone height for vector nodes
pub const DEFAULT_CONE_HEIGHT: f32 = 0.2;
