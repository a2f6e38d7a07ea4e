//! Debug-draw core
//!
//! Turns the attribute state of visualizer nodes (points, vectors,
//! matrices, colors, flags) into immutable draw-data records:
//!
//! - [`geometry`] - total vector helpers (normalize, angle, plane normal)
//! - [`attribute`] - host attribute model and the 3-tuple ordering contract
//! - [`visualizer`] - snapshots and draw-data builders per visualizer kind
//! - [`registry`] - static registration metadata per kind
//! - [`options`] - per-kind style presets, saved as RON

pub mod attribute;
pub mod constants;
pub mod geometry;
pub mod options;
pub mod registry;
pub mod visualizer;

// Re-exports for convenience
pub use attribute::{
    AttributeError, AttributeKind, AttributeMap, AttributeResult, AttributeSource, AttributeValue,
    ChildValue,
};
pub use options::{AngleOptions, MatrixOptions, OptionsError, VectorOptions, VisualizerOptions};
pub use registry::{KindInfo, REGISTRY, VisualizerKind};
pub use visualizer::{
    AngleAttributes, AngleDrawData, DrawData, MatrixAttributes, MatrixDrawData, SelectionStatus,
    VectorAttributes, VectorDrawData,
};
