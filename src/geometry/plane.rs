/// Planes in normal/distance form.
///
/// A point P lies on the plane when dot(normal, P) + distance == 0.
/// Planes are derived from the fitter's light-space frustum points and
/// consumed only by debug visualization, never by the inclusion test.

use glam::Vec3;

/// A plane as (unit normal, signed distance from the origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed distance: dot(normal, p) + distance == 0 for points p on the plane
    pub distance: f32,
}

impl Plane {
    /// Create from a normal and signed distance
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Create the plane through three points.
    ///
    /// The normal is `normalize(cross(b - a, c - a))`: counter-clockwise
    /// winding as seen from the normal side.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self { normal, distance: -normal.dot(a) }
    }

    /// Signed distance from a point to the plane.
    ///
    /// Positive on the normal side, negative behind.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
