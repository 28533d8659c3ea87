/// Shadow-caster culling strategies.
///
/// A ShadowCuller determines which registered casters are relevant to the
/// current shadow frustum. Implementations range from brute-force (every
/// shadow-casting caster) to the fitted test with per-caster caching.

use rustc_hash::FxHashMap;
use glam::Mat4;
use crate::geometry::AABB;
use crate::scene::{CasterScene, CasterKey};
use super::frustum_fitter::ShadowFrustumFitter;
use super::shadow_view::ShadowView;

/// Strategy for determining shadow-relevant casters.
///
/// Called once per frame after `update_frustum`. The returned ShadowView
/// is ephemeral and consumed by the host's shadow pass.
///
/// `&mut self` allows stateful implementations (e.g. caching) to maintain
/// state across frames; `&mut scene` lets them drain the dirty-bounds set.
pub trait ShadowCuller: Send + Sync {
    /// Cull the scene against the fitter's frustum box and return the
    /// relevant casters.
    fn cull(&mut self, scene: &mut CasterScene, fitter: &ShadowFrustumFitter) -> ShadowView;
}

/// Brute-force culler — returns ALL shadow-casting casters (no geometric
/// test).
///
/// Suitable for small scenes or as a baseline for comparison.
pub struct BruteForceShadowCuller;

impl BruteForceShadowCuller {
    pub fn new() -> Self {
        Self
    }
}

impl ShadowCuller for BruteForceShadowCuller {
    fn cull(&mut self, scene: &mut CasterScene, fitter: &ShadowFrustumFitter) -> ShadowView {
        let relevant: Vec<CasterKey> = scene
            .casters()
            .filter(|(_, caster)| caster.casts_shadows())
            .map(|(key, _)| key)
            .collect();
        ShadowView::new(*fitter.frustum_bounds(), relevant)
    }
}

/// Fitted culler — maps each caster's bounds into light space and runs the
/// inclusion test.
///
/// Light-space boxes are cached per caster and recomputed only when the
/// caster's bounds were marked dirty or the world-to-light basis changed
/// since the previous cull.
pub struct FittedShadowCuller {
    /// Cached light-space bounds, keyed by caster
    light_space_cache: FxHashMap<CasterKey, AABB>,
    /// Basis the cache was computed with
    cached_basis: Mat4,
}

impl FittedShadowCuller {
    pub fn new() -> Self {
        Self {
            light_space_cache: FxHashMap::default(),
            cached_basis: Mat4::IDENTITY,
        }
    }

    /// Number of cached light-space boxes (for tests and diagnostics).
    pub fn cached_count(&self) -> usize {
        self.light_space_cache.len()
    }
}

impl ShadowCuller for FittedShadowCuller {
    fn cull(&mut self, scene: &mut CasterScene, fitter: &ShadowFrustumFitter) -> ShadowView {
        let dirty = scene.take_dirty_bounds();

        if *fitter.world_to_light() != self.cached_basis {
            // New basis invalidates every cached box
            self.light_space_cache.clear();
            self.cached_basis = *fitter.world_to_light();
        } else {
            for key in dirty {
                self.light_space_cache.remove(&key);
            }
        }

        // Drop entries for casters that were removed from the scene
        self.light_space_cache.retain(|key, _| scene.caster(*key).is_some());

        let mut relevant = Vec::new();
        for (key, caster) in scene.casters() {
            if !caster.casts_shadows() {
                continue;
            }
            let light_space = *self
                .light_space_cache
                .entry(key)
                .or_insert_with(|| fitter.light_space_bounds(caster.world_bounds()));
            if fitter.test_inclusion(&light_space) {
                relevant.push(key);
            }
        }

        ShadowView::new(*fitter.frustum_bounds(), relevant)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
