/// Debug-draw sink for shadow visualization.
///
/// The sink keeps a current transform, immediate-mode style: geometry is
/// passed in local coordinates and mapped through the current matrix when
/// it is recorded. The provided [`WireframeBuffer`] flattens everything
/// into a GPU-uploadable line list.

use glam::{Mat4, Vec3};
use crate::geometry::AABB;

/// Colors used by the shadow debug pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugColor {
    /// Frustum bounds wireframe
    Magenta,
    /// Relevant casters and plane normals
    Green,
    /// Rejected casters
    Black,
    /// General-purpose annotations
    White,
}

impl DebugColor {
    /// RGBA components in [0, 1]
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            DebugColor::Magenta => [1.0, 0.0, 1.0, 1.0],
            DebugColor::Green => [0.0, 1.0, 0.0, 1.0],
            DebugColor::Black => [0.0, 0.0, 0.0, 1.0],
            DebugColor::White => [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// One line-list vertex, ready for GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DebugVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Sink for debug wireframes.
///
/// Implementations receive geometry in the coordinate frame selected by
/// `set_transform` and decide how to record or render it.
pub trait DebugSink: Send + Sync {
    /// Set the current transform applied to subsequently drawn geometry.
    fn set_transform(&mut self, transform: Mat4);

    /// Draw a line segment between two points.
    fn draw_line(&mut self, from: Vec3, to: Vec3, color: DebugColor);

    /// Draw a ray from an origin along a direction vector.
    fn draw_ray(&mut self, origin: Vec3, direction: Vec3, color: DebugColor) {
        self.draw_line(origin, origin + direction, color);
    }

    /// Draw the 12 edges of an axis-aligned box.
    fn draw_wire_box(&mut self, bounds: &AABB, color: DebugColor) {
        let min = bounds.min;
        let max = bounds.max;
        let c = [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ];
        // Bottom face, top face, verticals
        const EDGES: [(usize, usize); 12] = [
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 7), (7, 4),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ];
        for (a, b) in EDGES {
            self.draw_line(c[a], c[b], color);
        }
    }
}

/// Buffering sink that flattens debug draws into a line list.
///
/// Applies the current transform on record, so the buffered vertices are
/// world-space and can be uploaded to a GPU vertex buffer as-is.
#[derive(Debug, Default)]
pub struct WireframeBuffer {
    transform: Mat4,
    vertices: Vec<DebugVertex>,
}

impl WireframeBuffer {
    /// Create an empty buffer with an identity transform.
    pub fn new() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            vertices: Vec::new(),
        }
    }

    /// Buffered line-list vertices (two per line).
    pub fn vertices(&self) -> &[DebugVertex] {
        &self.vertices
    }

    /// Number of buffered lines.
    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Raw bytes of the vertex buffer, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Discard all buffered lines and reset the transform to identity.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.transform = Mat4::IDENTITY;
    }

    fn push(&mut self, point: Vec3, color: [f32; 4]) {
        let world = self.transform.transform_point3(point);
        self.vertices.push(DebugVertex {
            position: world.to_array(),
            color,
        });
    }
}

impl DebugSink for WireframeBuffer {
    fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: DebugColor) {
        let rgba = color.rgba();
        self.push(from, rgba);
        self.push(to, rgba);
    }
}

#[cfg(test)]
#[path = "debug_sink_tests.rs"]
mod tests;
