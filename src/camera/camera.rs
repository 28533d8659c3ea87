/// Camera — perspective camera owned by the host engine.
///
/// Supplies the shadow fitter with its frustum-corner query and receives
/// the per-frame far-clip pin. Forward is the local +Z axis; the far
/// rectangle at distance d lies in the local plane z = d.

use glam::{Mat4, Vec3};
use crate::geometry::Transform;

/// Normalized sub-rectangle of the viewport, in [0,1] x [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    /// The full viewport
    pub const FULL: Self = Self { x: 0.0, y: 0.0, width: 1.0, height: 1.0 };

    /// Create a normalized viewport rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Perspective camera.
///
/// The host engine computes and sets all fields; the shadow fitter reads
/// the transform and frustum corners and writes back the far clip.
#[derive(Debug, Clone)]
pub struct Camera {
    transform: Transform,
    fov_y_radians: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Create a new camera with the given parameters.
    pub fn new(transform: Transform, fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self { transform, fov_y_radians, aspect, near, far }
    }

    // ===== GETTERS =====

    /// World transform (position + rotation + scale).
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Vertical field of view in radians.
    pub fn fov_y_radians(&self) -> f32 {
        self.fov_y_radians
    }

    /// Viewport aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clip distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Camera position in world space.
    pub fn world_position(&self) -> Vec3 {
        self.transform.position
    }

    /// Local-to-world matrix.
    pub fn local_to_world(&self) -> Mat4 {
        self.transform.local_to_world()
    }

    /// World-to-local matrix.
    pub fn world_to_local(&self) -> Mat4 {
        self.transform.world_to_local()
    }

    // ===== SETTERS =====

    /// Set the world transform.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Set the viewport aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Set the far clip distance.
    ///
    /// Written every frame by the shadow fitter so the visual far clip and
    /// the shadow-relevant frustum never diverge.
    pub fn set_far_clip(&mut self, far: f32) {
        self.far = far;
    }

    // ===== FRUSTUM QUERY =====

    /// Corner points of the frustum rectangle at `distance`, in camera-local
    /// space, for a normalized sub-rectangle of the viewport.
    ///
    /// Symmetric perspective: the full-viewport rectangle at distance d spans
    /// `[-half_w, half_w] x [-half_h, half_h]` with `half_h = tan(fov_y / 2) * d`
    /// and `half_w = half_h * aspect`. Corners are returned in the order
    /// bottom-left, top-left, top-right, bottom-right.
    pub fn frustum_corners(&self, rect: ViewportRect, distance: f32) -> [Vec3; 4] {
        let half_h = (self.fov_y_radians * 0.5).tan() * distance;
        let half_w = half_h * self.aspect;

        let x0 = (rect.x * 2.0 - 1.0) * half_w;
        let x1 = ((rect.x + rect.width) * 2.0 - 1.0) * half_w;
        let y0 = (rect.y * 2.0 - 1.0) * half_h;
        let y1 = ((rect.y + rect.height) * 2.0 - 1.0) * half_h;

        [
            Vec3::new(x0, y0, distance),
            Vec3::new(x0, y1, distance),
            Vec3::new(x1, y1, distance),
            Vec3::new(x1, y0, distance),
        ]
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
