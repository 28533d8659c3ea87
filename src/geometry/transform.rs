/// Rigid transforms with position, rotation, and scale.
///
/// Owned by cameras and lights; the fitter only reads the derived
/// matrices. Forward is the local +Z axis.

use glam::{Mat4, Quat, Vec3};

/// Position, rotation, and scale of a camera or light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a new transform
    pub const fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { position, rotation, scale }
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    /// Create from position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation, scale: Vec3::ONE }
    }

    /// Set position (builder pattern)
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set rotation (builder pattern)
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set scale (builder pattern)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local-to-world matrix (scale, then rotation, then translation)
    pub fn local_to_world(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// World-to-local matrix (inverse of local-to-world)
    pub fn world_to_local(&self) -> Mat4 {
        self.local_to_world().inverse()
    }

    /// Map a local-space point into world space
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (self.scale * point) + self.position
    }

    /// Forward direction in world space (the local +Z axis)
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
