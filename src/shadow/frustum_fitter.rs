/// ShadowFrustumFitter — light-space bounds around the camera frustum.
///
/// Once per frame the fitter maps five frustum reference points (the four
/// far-plane corners plus the apex) into the light's local frame and folds
/// them into an enclosing box. Object bounds mapped into the same frame
/// are then tested against that box to decide shadow-casting relevance.
///
/// All tests happen in light-local space, where the light's facing
/// direction is the +Z axis, so depth clamping reduces to one component.

use glam::{Mat4, Vec3};
use crate::camera::{Camera, ViewportRect};
use crate::debug::{DebugColor, DebugSink};
use crate::engine::Engine;
use crate::geometry::{AABB, Plane};
use crate::light::DirectionalLight;

/// Fits a light-space bounding box around a camera's view frustum and
/// tests object bounds against it.
///
/// State is recomputed every frame by [`update_frustum`]; when an update
/// is skipped the previous frame's values are retained. One instance per
/// concurrent caller — the fitter holds per-frame state and is not
/// internally synchronized.
///
/// [`update_frustum`]: ShadowFrustumFitter::update_frustum
#[derive(Debug, Clone)]
pub struct ShadowFrustumFitter {
    /// Light-space box enclosing the frustum; retained across skipped updates
    frustum_bounds: AABB,
    /// Light-space reference points: 4 far corners, then the apex
    frustum_points: [Vec3; 5],
    /// World-to-light basis cached by the last update
    world_to_light: Mat4,
}

impl ShadowFrustumFitter {
    /// Pushed onto a caster's far extent when it ends short of the frustum
    /// box, so depth-only mismatches never reject a caster. A tunable
    /// tolerance, not a principled bound.
    pub const FAR_EXTENT_EPSILON: f32 = 0.001;

    /// Create a fitter with a zero frustum box and an identity basis.
    pub fn new() -> Self {
        Self {
            frustum_bounds: AABB::ZERO,
            frustum_points: [Vec3::ZERO; 5],
            world_to_light: Mat4::IDENTITY,
        }
    }

    // ===== PER-FRAME UPDATE =====

    /// Recompute the light-space frustum box from the current camera and
    /// light state.
    ///
    /// Pins the camera's far clip and the global shadow distance to
    /// `shadow_distance` so the visual far clip and the shadow-relevant
    /// frustum never diverge, then:
    /// 1. queries the four far-plane corners at `shadow_distance`,
    /// 2. maps them to world space and appends the camera position (apex),
    /// 3. maps all five points into light-local space,
    /// 4. folds component-wise min/max into the frustum box.
    ///
    /// If either `camera` or `light` is `None` the previous frame's box is
    /// retained and nothing else happens — dependencies simply have not
    /// been wired up yet.
    pub fn update_frustum(
        &mut self,
        camera: Option<&mut Camera>,
        light: Option<&DirectionalLight>,
        shadow_distance: f32,
    ) -> &AABB {
        let (camera, light) = match (camera, light) {
            (Some(camera), Some(light)) => (camera, light),
            _ => {
                crate::engine_trace!(
                    "umbra3d::ShadowFrustumFitter",
                    "update skipped: camera or light not bound"
                );
                return &self.frustum_bounds;
            }
        };

        // Keep the renderer's far clip and the global quality setting on the
        // exact value the frustum box is computed with.
        camera.set_far_clip(shadow_distance);
        // The engine may not be initialized yet; the pin resumes next frame.
        let _ = Engine::set_shadow_distance(shadow_distance);

        let corners = camera.frustum_corners(ViewportRect::FULL, shadow_distance);
        let camera_to_world = camera.local_to_world();

        let world_points = [
            camera_to_world.transform_point3(corners[0]),
            camera_to_world.transform_point3(corners[1]),
            camera_to_world.transform_point3(corners[2]),
            camera_to_world.transform_point3(corners[3]),
            camera.world_position(),
        ];

        self.world_to_light = light.world_to_local();

        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for (slot, world) in self.frustum_points.iter_mut().zip(world_points) {
            let light_space = self.world_to_light.transform_point3(world);
            *slot = light_space;
            min = min.min(light_space);
            max = max.max(light_space);
        }
        self.frustum_bounds.set_min_max(min, max);

        &self.frustum_bounds
    }

    // ===== ACCESSORS =====

    /// Light-space box enclosing the frustum, from the last update.
    pub fn frustum_bounds(&self) -> &AABB {
        &self.frustum_bounds
    }

    /// Light-space frustum points from the last update: the 4 far corners
    /// (bottom-left, top-left, top-right, bottom-right), then the apex.
    pub fn frustum_points(&self) -> &[Vec3; 5] {
        &self.frustum_points
    }

    /// World-to-light basis from the last update.
    pub fn world_to_light(&self) -> &Mat4 {
        &self.world_to_light
    }

    // ===== BOUNDS TESTS =====

    /// Map a world-space box into light space, returning its enclosing box.
    ///
    /// Expands the box into its 8 corners, maps each through the cached
    /// world-to-light basis, and folds component-wise min/max. The input
    /// is not mutated.
    pub fn light_space_bounds(&self, world_bounds: &AABB) -> AABB {
        world_bounds.transformed(&self.world_to_light)
    }

    /// Copy of a light-space box whose far extent is pushed out to the
    /// frustum's far extent plus [`Self::FAR_EXTENT_EPSILON`] when it ends
    /// short of it.
    ///
    /// A caster that starts before the frustum's far boundary occludes it
    /// regardless of where the caster ends, so the far side is never
    /// truncated.
    pub fn far_extended(&self, bounds: &AABB) -> AABB {
        let mut extended = *bounds;
        if extended.max.z < self.frustum_bounds.max.z {
            extended.max.z = self.frustum_bounds.max.z + Self::FAR_EXTENT_EPSILON;
        }
        extended
    }

    /// Test whether a light-space box is shadow-casting relevant.
    ///
    /// True iff the box starts before the frustum's far extent along the
    /// depth axis AND its far-extended copy overlaps the frustum box on
    /// all three axes. The extension is local to the test; neither input
    /// nor frustum box is mutated.
    pub fn test_inclusion(&self, bounds: &AABB) -> bool {
        let extended = self.far_extended(bounds);
        extended.min.z < self.frustum_bounds.max.z && self.frustum_bounds.intersects(&extended)
    }

    // ===== DEBUG OUTPUT =====

    /// The five light-space bounding planes of the frustum: the four side
    /// planes through the apex and neighboring far corners, then the far
    /// plane. Debug-only; the inclusion test never uses planes.
    pub fn frustum_planes(&self) -> [Plane; 5] {
        let pts = &self.frustum_points;
        [
            Plane::from_points(pts[4], pts[0], pts[1]),
            Plane::from_points(pts[4], pts[1], pts[2]),
            Plane::from_points(pts[4], pts[2], pts[3]),
            Plane::from_points(pts[4], pts[3], pts[0]),
            Plane::from_points(pts[0], pts[2], pts[1]),
        ]
    }

    /// Emit the fitter's state as wireframes: the frustum box in magenta,
    /// the five plane normals as green rays from their face centroids, and
    /// each tested caster's far-extended light-space box in green when
    /// relevant, black when rejected.
    ///
    /// Everything is drawn in light-local coordinates under the light's
    /// local-to-world transform. Purely observational.
    pub fn render_debug<'a>(
        &self,
        light: &DirectionalLight,
        caster_bounds: impl IntoIterator<Item = &'a AABB>,
        sink: &mut dyn DebugSink,
    ) {
        sink.set_transform(light.local_to_world());
        sink.draw_wire_box(&self.frustum_bounds, DebugColor::Magenta);

        let pts = &self.frustum_points;
        let planes = self.frustum_planes();
        for i in 0..4 {
            let centroid = (pts[4] + pts[i] + pts[(i + 1) % 4]) / 3.0;
            sink.draw_ray(centroid, planes[i].normal, DebugColor::Green);
        }
        let far_centroid = (pts[0] + pts[1] + pts[2] + pts[3]) / 4.0;
        sink.draw_ray(far_centroid, planes[4].normal, DebugColor::Green);

        for bounds in caster_bounds {
            let light_space = self.light_space_bounds(bounds);
            let color = if self.test_inclusion(&light_space) {
                DebugColor::Green
            } else {
                DebugColor::Black
            };
            sink.draw_wire_box(&self.far_extended(&light_space), color);
        }
    }
}

impl Default for ShadowFrustumFitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frustum_fitter_tests.rs"]
mod tests;
