use glam::Vec3;
use crate::geometry::AABB;
use super::*;

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_default_flags() {
    let flags = CasterFlags::default();
    assert!(flags.contains(CasterFlags::VISIBLE));
    assert!(flags.contains(CasterFlags::CAST_SHADOW));
    assert!(flags.contains(CasterFlags::RECEIVE_SHADOW));
}

#[test]
fn test_flag_bits_are_distinct() {
    assert_eq!(CasterFlags::VISIBLE.bits(), 1);
    assert_eq!(CasterFlags::CAST_SHADOW.bits(), 2);
    assert_eq!(CasterFlags::RECEIVE_SHADOW.bits(), 4);
}

// ============================================================================
// ShadowCaster
// ============================================================================

#[test]
fn test_new_uses_default_flags() {
    let bounds = AABB::new(Vec3::ZERO, Vec3::ONE);
    let caster = ShadowCaster::new(bounds);

    assert_eq!(*caster.world_bounds(), bounds);
    assert!(caster.casts_shadows());
}

#[test]
fn test_with_flags() {
    let bounds = AABB::new(Vec3::ZERO, Vec3::ONE);
    let caster = ShadowCaster::with_flags(bounds, CasterFlags::VISIBLE);

    assert!(!caster.casts_shadows());
    assert!(caster.flags().contains(CasterFlags::VISIBLE));
}

#[test]
fn test_set_flags() {
    let mut caster = ShadowCaster::new(AABB::ZERO);
    caster.set_flags(CasterFlags::VISIBLE);
    assert!(!caster.casts_shadows());

    caster.set_flags(CasterFlags::VISIBLE | CasterFlags::CAST_SHADOW);
    assert!(caster.casts_shadows());
}
