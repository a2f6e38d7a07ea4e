//! Per-node draw-data cache
//!
//! The host prepares data and submits primitives at different times. A
//! [`VisualizerNode`] holds the record between the two calls and replaces
//! it wholesale on every refresh.

use ddraw_core::{AttributeResult, AttributeSource, DrawData, SelectionStatus, VisualizerKind};

use crate::config::DrawConfig;
use crate::draw::DrawTarget;
use crate::emit::EmitPrimitives;

/// A visualizer node instance and its cached draw data
#[derive(Debug, Clone)]
pub struct VisualizerNode {
    kind: VisualizerKind,
    cached: Option<DrawData>,
}

impl VisualizerNode {
    /// Create a node with no draw data yet
    pub fn new(kind: VisualizerKind) -> Self {
        Self { kind, cached: None }
    }

    /// Kind of this node
    pub fn kind(&self) -> VisualizerKind {
        self.kind
    }

    /// Draw data from the last successful refresh
    pub fn draw_data(&self) -> Option<&DrawData> {
        self.cached.as_ref()
    }

    /// Rebuild the draw data from the node's current attributes.
    ///
    /// On failure the cache is cleared so nothing stale is drawn.
    pub fn prepare_for_draw(
        &mut self,
        source: &dyn AttributeSource,
        status: SelectionStatus,
    ) -> AttributeResult<&DrawData> {
        match DrawData::build(self.kind, source, status) {
            Ok(data) => {
                tracing::debug!("Refreshed {} draw data", self.kind.info().name);
                let data: &DrawData = self.cached.insert(data);
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to refresh {} draw data: {}",
                    self.kind.info().name,
                    e
                );
                self.cached = None;
                Err(e)
            }
        }
    }

    /// Emit the cached draw data, if any
    pub fn add_drawables(&self, config: &DrawConfig, target: &mut dyn DrawTarget) {
        if let Some(data) = &self.cached {
            data.emit(config, target);
        }
    }

    /// Drop the cached draw data
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
