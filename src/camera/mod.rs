//! Camera module — perspective camera and viewport rectangle.
//!
//! The camera is owned and driven by the host engine; the shadow fitter
//! only queries frustum corners and pins the far clip once per frame.

mod camera;

pub use camera::{Camera, ViewportRect};
