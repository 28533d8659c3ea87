/*!
# Umbra3D Shadow

Shadow-frustum fitting for directional-light shadow mapping.

Once per frame, a [`shadow::ShadowFrustumFitter`] computes a light-space
bounding box enclosing a camera's view frustum up to a configurable shadow
distance, then tests scene object bounds against that box to decide which
objects are shadow-casting relevant.

## Architecture

- **geometry**: plain primitives — `Aabb`, `Plane`, `Transform`
- **camera**: perspective camera with a frustum-corner query
- **light**: directional light supplying the light-space basis
- **scene**: flat registry of shadow casters the host fills in
- **shadow**: the fitter plus culling strategies over the registry
- **debug**: wireframe sink consuming the fitter's debug output

The crate renders nothing and traverses no scene graph. The host engine
owns cameras, lights, and object bounds, and drives the fitter from its
per-frame update hook.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod debug;
pub mod geometry;
pub mod light;
pub mod scene;
pub mod shadow;

// Main umbra3d namespace module
pub mod umbra3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::{Engine, QualitySettings};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Light sub-module
    pub mod light {
        pub use crate::light::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Shadow sub-module
    pub mod shadow {
        pub use crate::shadow::*;
    }

    // Debug-draw sub-module
    pub mod debug {
        pub use crate::debug::*;
    }
}

// Re-export math library at crate root
pub use glam;
