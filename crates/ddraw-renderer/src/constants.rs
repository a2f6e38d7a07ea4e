//! Global constants for ddraw-renderer

/// Color of primitives drawn before any color is set in a drawable (RGB)
pub const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Default number of segments for arc and cone ring tessellation
pub const DEFAULT_SEGMENTS: u32 = 32;
