//! Debug-draw module — wireframe sink for shadow visualization.
//!
//! Purely observational: the fitter emits wireframes and rays into a
//! [`DebugSink`], and nothing feeds back into the shadow math.

mod debug_sink;

pub use debug_sink::{DebugSink, DebugColor, DebugVertex, WireframeBuffer};
