//! Debug-draw renderer
//!
//! Turns draw-data records from `ddraw-core` into draw calls on a
//! retained-mode draw manager.
//!
//! # Architecture
//!
//! - [`draw::DrawTarget`] - Trait the host's draw manager implements
//! - [`draw_list::DrawList`] - Recording draw target, grouped into drawables
//! - [`emit::EmitPrimitives`] - Per-visualizer primitive emission
//! - [`node::VisualizerNode`] - Cached draw data between prepare and draw
//! - [`config::DrawConfig`] - Styling, loadable from RON
//! - [`vertex::LineVertex`] - Flattened line vertices and their upload bytes
//!
//! # Module Structure
//!
//! ```text
//! ddraw-renderer/
//! ├── draw.rs          # DrawTarget trait, drawable scopes
//! ├── draw_list.rs     # Recorded commands
//! ├── emit/            # Arrow primitive and per-kind emitters
//! ├── node.rs          # Draw-data cache per node
//! ├── flatten.rs       # Draw list -> line vertices
//! ├── vertex.rs        # Line vertex format
//! └── config.rs        # Style configuration
//! ```

pub mod config;
pub mod constants;
pub mod draw;
pub mod draw_list;
pub mod emit;
pub mod flatten;
pub mod node;
pub mod vertex;

// Re-exports for convenience
pub use config::{AngleStyle, ArrowStyle, AxisStyle, ConfigError, DrawConfig, LabelStyle};
pub use draw::{DrawTarget, TextAlignment, draw_scope};
pub use draw_list::{DrawCommand, DrawList, Drawable};
pub use emit::{EmitPrimitives, draw_arrow};
pub use flatten::arc_points;
pub use node::VisualizerNode;
pub use vertex::{LineVertex, as_bytes};
