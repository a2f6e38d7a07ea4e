//! Static registration table for visualizer node kinds
//!
//! Hosts register one node type and one draw override per kind. The
//! identifiers below are what they register under; none of them affect the
//! geometry.

use serde::{Deserialize, Serialize};

/// Visualizer node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualizerKind {
    Vector,
    Angle,
    Matrix,
}

/// Registration metadata for one visualizer kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub kind: VisualizerKind,
    /// Node type name
    pub name: &'static str,
    /// Host type id (from the `0x0012e180` node id block)
    pub type_id: u32,
    /// Draw classification string the draw override is bound to
    pub draw_classification: &'static str,
    /// Registrant id used when (de)registering the draw override
    pub draw_registrant_id: &'static str,
    /// Naming pattern for new shape nodes (`#` is replaced by a counter)
    pub shape_name: &'static str,
    /// Naming pattern for the parent transform
    pub transform_name: &'static str,
}

/// All registered visualizer kinds
pub const REGISTRY: [KindInfo; 3] = [
    KindInfo {
        kind: VisualizerKind::Vector,
        name: "ddraw_vector",
        type_id: 0x0012_e180,
        draw_classification: "drawdb/geometry/ddraw_vector",
        draw_registrant_id: "ddrawNodePlugin",
        shape_name: "ddraw_vectorShape#",
        transform_name: "ddraw_vector#",
    },
    KindInfo {
        kind: VisualizerKind::Angle,
        name: "ddraw_angle",
        type_id: 0x0012_e181,
        draw_classification: "drawdb/geometry/angle_lib/ddraw_angle",
        draw_registrant_id: "angle_lib",
        shape_name: "ddraw_angleShape#",
        transform_name: "ddraw_angle#",
    },
    KindInfo {
        kind: VisualizerKind::Matrix,
        name: "ddraw_matrix",
        type_id: 0x0012_e182,
        draw_classification: "drawdb/geometry/ddraw_matrix",
        draw_registrant_id: "matrix_lib",
        shape_name: "ddraw_matrixShape#",
        transform_name: "ddraw_matrix#",
    },
];

impl VisualizerKind {
    /// All kinds, in registration order
    pub const ALL: [VisualizerKind; 3] = [
        VisualizerKind::Vector,
        VisualizerKind::Angle,
        VisualizerKind::Matrix,
    ];

    /// Registration metadata for this kind
    pub fn info(self) -> &'static KindInfo {
        match self {
            VisualizerKind::Vector => &REGISTRY[0],
            VisualizerKind::Angle => &REGISTRY[1],
            VisualizerKind::Matrix => &REGISTRY[2],
        }
    }

    /// Find a kind by node type name
    pub fn from_name(name: &str) -> Option<Self> {
        REGISTRY.iter().find(|info| info.name == name).map(|info| info.kind)
    }

    /// Find a kind by host type id
    pub fn from_type_id(type_id: u32) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|info| info.type_id == type_id)
            .map(|info| info.kind)
    }
}
