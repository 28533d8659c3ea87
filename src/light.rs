/// Directional light supplying the light-space basis.
///
/// Light space is the light's local frame: the light sits at the origin
/// and its facing direction is the local +Z axis, so depth clamping and
/// the inclusion test reduce to a single axis.

use glam::{Mat4, Vec3};
use crate::geometry::Transform;

/// A directional light. Only the orientation matters for shadow fitting;
/// the position merely anchors debug visualization.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    transform: Transform,
}

impl DirectionalLight {
    /// Create a light with the given world transform.
    pub fn new(transform: Transform) -> Self {
        Self { transform }
    }

    /// World transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Set the world transform.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// World-to-local matrix — the light-space basis read once per frame.
    pub fn world_to_local(&self) -> Mat4 {
        self.transform.world_to_local()
    }

    /// Local-to-world matrix, used to place debug wireframes in the world.
    pub fn local_to_world(&self) -> Mat4 {
        self.transform.local_to_world()
    }

    /// Facing direction in world space (the local +Z axis, the depth axis
    /// of light space).
    pub fn forward(&self) -> Vec3 {
        self.transform.forward()
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
