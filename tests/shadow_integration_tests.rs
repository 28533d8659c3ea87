//! Integration tests for the shadow fitting pipeline
//!
//! These tests drive the public API end to end: engine singleton, caster
//! scene, frustum fitter, cullers, and debug output.
//!
//! Run with: cargo test --test shadow_integration_tests

use glam::{Quat, Vec3};
use serial_test::serial;
use umbra_3d_shadow::umbra3d::Engine;
use umbra_3d_shadow::umbra3d::camera::Camera;
use umbra_3d_shadow::umbra3d::debug::WireframeBuffer;
use umbra_3d_shadow::umbra3d::geometry::{Transform, AABB};
use umbra_3d_shadow::umbra3d::light::DirectionalLight;
use umbra_3d_shadow::umbra3d::scene::{CasterScene, ShadowCaster};
use umbra_3d_shadow::umbra3d::shadow::{FittedShadowCuller, ShadowCuller, ShadowFrustumFitter};

// ============================================================================
// END-TO-END FRUSTUM FITTING
// ============================================================================

#[test]
#[serial]
fn test_integration_frustum_box_for_canonical_setup() {
    // Camera at the origin facing +Z, 90 degree FOV, aspect 1, distance 10,
    // light basis identity: the light-space box must span z in [0, 10] and
    // x/y in [-10, 10] (the far-plane half extents at distance 10).
    let mut camera = Camera::new(Transform::IDENTITY, std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    let light = DirectionalLight::new(Transform::IDENTITY);
    let mut fitter = ShadowFrustumFitter::new();

    let bounds = *fitter.update_frustum(Some(&mut camera), Some(&light), 10.0);

    assert!((bounds.min - Vec3::new(-10.0, -10.0, 0.0)).length() < 1e-4);
    assert!((bounds.max - Vec3::new(10.0, 10.0, 10.0)).length() < 1e-4);
}

#[test]
#[serial]
fn test_integration_far_clip_and_quality_pinned_together() {
    Engine::initialize().unwrap();

    let mut camera = Camera::new(Transform::IDENTITY, std::f32::consts::FRAC_PI_2, 1.0, 0.1, 1000.0);
    let light = DirectionalLight::new(Transform::IDENTITY);
    let mut fitter = ShadowFrustumFitter::new();

    fitter.update_frustum(Some(&mut camera), Some(&light), 42.0);

    // The camera far clip and the global shadow distance carry the same value
    assert_eq!(camera.far(), 42.0);
    assert_eq!(Engine::shadow_distance().unwrap(), 42.0);

    // Re-pinned every frame
    fitter.update_frustum(Some(&mut camera), Some(&light), 64.0);
    assert_eq!(camera.far(), 64.0);
    assert_eq!(Engine::shadow_distance().unwrap(), 64.0);

    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_skipped_update_changes_nothing() {
    Engine::initialize().unwrap();
    Engine::set_shadow_distance(10.0).unwrap();

    let light = DirectionalLight::new(Transform::IDENTITY);
    let mut camera = Camera::new(Transform::IDENTITY, std::f32::consts::FRAC_PI_2, 1.0, 0.1, 10.0);
    let mut fitter = ShadowFrustumFitter::new();
    fitter.update_frustum(Some(&mut camera), Some(&light), 10.0);
    let before = *fitter.frustum_bounds();

    // Missing light: the previous box is retained and no pin happens
    fitter.update_frustum(Some(&mut camera), None, 99.0);
    assert_eq!(*fitter.frustum_bounds(), before);
    assert_eq!(camera.far(), 10.0);
    assert_eq!(Engine::shadow_distance().unwrap(), 10.0);

    Engine::shutdown();
}

// ============================================================================
// CULLING PIPELINE
// ============================================================================

#[test]
#[serial]
fn test_integration_culling_pipeline() {
    // Camera slightly above the ground plane looking along +Z; sun light
    // overhead at y = 60 facing straight down (-Y), so light space maps
    // world (x, y, z) to (x, z, 60 - y).
    let camera_transform = Transform::from_position(Vec3::new(0.0, 5.0, -20.0));
    let mut camera = Camera::new(camera_transform, 1.0, 16.0 / 9.0, 0.1, 500.0);
    let light = DirectionalLight::new(Transform::from_position_rotation(
        Vec3::new(0.0, 60.0, 0.0),
        Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
    ));

    let mut fitter = ShadowFrustumFitter::new();
    fitter.update_frustum(Some(&mut camera), Some(&light), 80.0);

    let mut scene = CasterScene::new();
    // Props scattered through the view
    let near_prop = scene.add_caster(ShadowCaster::new(AABB::from_center_size(
        Vec3::new(0.0, 1.0, -10.0),
        Vec3::splat(2.0),
    )));
    let mid_prop = scene.add_caster(ShadowCaster::new(AABB::from_center_size(
        Vec3::new(5.0, 2.0, 20.0),
        Vec3::splat(4.0),
    )));
    // Far beyond the shadow distance in every direction
    let distant_prop = scene.add_caster(ShadowCaster::new(AABB::from_center_size(
        Vec3::new(2000.0, 0.0, 2000.0),
        Vec3::splat(2.0),
    )));

    let mut culler = FittedShadowCuller::new();
    let view = culler.cull(&mut scene, &fitter);

    assert!(view.contains(near_prop));
    assert!(view.contains(mid_prop));
    assert!(!view.contains(distant_prop));

    // Every relevant caster passes the standalone inclusion test too
    for key in view.relevant() {
        let caster = scene.caster(*key).unwrap();
        let light_space = fitter.light_space_bounds(caster.world_bounds());
        assert!(fitter.test_inclusion(&light_space));
    }
}

// ============================================================================
// DEBUG OUTPUT THROUGH THE ENGINE SINGLETON
// ============================================================================

#[test]
#[serial]
fn test_integration_debug_draw_line_budget() {
    let mut camera = Camera::new(Transform::IDENTITY, std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    let light = DirectionalLight::new(Transform::IDENTITY);
    let mut fitter = ShadowFrustumFitter::new();
    fitter.update_frustum(Some(&mut camera), Some(&light), 10.0);

    let caster_bounds = AABB::from_center_size(Vec3::new(0.0, 0.0, 5.0), Vec3::splat(2.0));

    let mut buffer = WireframeBuffer::new();
    fitter.render_debug(&light, [&caster_bounds], &mut buffer);

    // 12 frustum edges + 5 plane rays + 12 caster edges
    assert_eq!(buffer.line_count(), 29);
    // Uploadable as-is: position + color floats per vertex
    assert_eq!(buffer.as_bytes().len(), buffer.vertices().len() * 7 * 4);
}

#[test]
#[serial]
fn test_integration_debug_draw_through_engine_sink() {
    Engine::initialize().unwrap();
    let _ = Engine::destroy_debug_sink();
    Engine::create_debug_sink(WireframeBuffer::new()).unwrap();

    let mut camera = Camera::new(Transform::IDENTITY, std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    let light = DirectionalLight::new(Transform::IDENTITY);
    let mut fitter = ShadowFrustumFitter::new();
    fitter.update_frustum(Some(&mut camera), Some(&light), 10.0);

    let caster_bounds = AABB::from_center_size(Vec3::new(0.0, 0.0, 5.0), Vec3::splat(2.0));

    // The fitter and any host debug pass share the sink without plumbing
    let sink_arc = Engine::debug_sink().unwrap();
    {
        let mut sink = sink_arc.lock().unwrap();
        fitter.render_debug(&light, [&caster_bounds], &mut *sink);
    }

    Engine::destroy_debug_sink().unwrap();
    Engine::shutdown();
}
