//! Line vertex format
//!
//! Flattened draw lists are uploaded as a line list of position + color
//! vertices, two per segment.

use glam::Vec3;

/// Position + color vertex for line-list pipelines.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// Vertex position in world space.
    pub position: [f32; 3],
    /// Vertex color (RGB).
    pub color: [f32; 3],
}

impl LineVertex {
    /// Size of one vertex in bytes, for buffer strides.
    pub const STRIDE: u64 = std::mem::size_of::<Self>() as u64;

    /// Create a vertex from a glam position.
    pub fn new(position: Vec3, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Reinterpret vertices as raw bytes for a vertex buffer upload.
pub fn as_bytes(vertices: &[LineVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
