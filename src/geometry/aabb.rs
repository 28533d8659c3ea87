/// Axis-aligned bounding boxes.
///
/// The box is stored as component-wise `min`/`max` corners. Constructors
/// that fold over points guarantee `min <= max` on every axis; `set_min_max`
/// stores exactly what it is given, like the original engine's bounds type.

use glam::{Mat4, Vec3};

/// Axis-Aligned Bounding Box
///
/// Defined by component-wise minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Zero-size box at the origin
    pub const ZERO: Self = Self { min: Vec3::ZERO, max: Vec3::ZERO };

    /// Create from min and max corners
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from a center point and full size
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    /// Create the smallest box enclosing a set of points.
    ///
    /// Folds a component-wise min/max over the points. The result is
    /// independent of point order.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for point in points {
            min = min.min(point);
            max = max.max(point);
        }
        Self { min, max }
    }

    /// Replace both corners at once
    pub fn set_min_max(&mut self, min: Vec3, max: Vec3) {
        self.min = min;
        self.max = max;
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size (max - min)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half-extents (size / 2)
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// The 8 corner vertices of the box.
    ///
    /// Enumerated explicitly: min, max, then the six corners mixing one
    /// axis from one extreme with two from the other.
    pub fn corners(&self) -> [Vec3; 8] {
        [
            self.min,
            self.max,
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
        ]
    }

    /// Test if this AABB intersects (overlaps) another AABB.
    ///
    /// Returns `true` if the two AABBs overlap or touch.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Test if this AABB fully contains another AABB.
    ///
    /// Returns `true` if `other` is entirely within `self`.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Transform this AABB by a matrix, returning the enclosing AABB.
    ///
    /// Maps all 8 corners through the matrix and folds component-wise
    /// min/max over the results. The input box is not modified; with the
    /// identity matrix the output equals the input.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        AABB::from_points(self.corners().iter().map(|&c| matrix.transform_point3(c)))
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
