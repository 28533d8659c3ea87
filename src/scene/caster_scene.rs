/// CasterScene — a registry of ShadowCasters.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Bounds updates
/// are tracked in a dirty set so caching cullers only recompute what
/// actually moved since the last frame.

use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use crate::geometry::AABB;
use super::shadow_caster::{ShadowCaster, CasterKey, CasterFlags};

/// Registry of shadow casters with stable keys.
///
/// Keys remain valid even after other casters are removed.
#[derive(Debug, Default)]
pub struct CasterScene {
    /// Casters stored in a slot map for O(1) insert/remove
    casters: SlotMap<CasterKey, ShadowCaster>,
    /// Casters whose world bounds changed since last take_dirty_bounds()
    dirty_bounds: FxHashSet<CasterKey>,
}

impl CasterScene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            casters: SlotMap::with_key(),
            dirty_bounds: FxHashSet::default(),
        }
    }

    /// Register a caster and return its stable key.
    pub fn add_caster(&mut self, caster: ShadowCaster) -> CasterKey {
        self.casters.insert(caster)
    }

    /// Remove a caster. Returns the removed entry, or None for a stale key.
    pub fn remove_caster(&mut self, key: CasterKey) -> Option<ShadowCaster> {
        self.dirty_bounds.remove(&key);
        self.casters.remove(key)
    }

    /// Look up a caster by key.
    pub fn caster(&self, key: CasterKey) -> Option<&ShadowCaster> {
        self.casters.get(key)
    }

    /// Replace a caster's world bounds and mark it dirty.
    ///
    /// Returns false for a stale key.
    pub fn set_world_bounds(&mut self, key: CasterKey, world_bounds: AABB) -> bool {
        match self.casters.get_mut(key) {
            Some(caster) => {
                caster.set_world_bounds(world_bounds);
                self.dirty_bounds.insert(key);
                true
            }
            None => false,
        }
    }

    /// Replace a caster's flags. Returns false for a stale key.
    pub fn set_flags(&mut self, key: CasterKey, flags: CasterFlags) -> bool {
        match self.casters.get_mut(key) {
            Some(caster) => {
                caster.set_flags(flags);
                true
            }
            None => false,
        }
    }

    /// Iterate over all (key, caster) pairs.
    pub fn casters(&self) -> impl Iterator<Item = (CasterKey, &ShadowCaster)> {
        self.casters.iter()
    }

    /// Iterate over all caster keys.
    pub fn caster_keys(&self) -> impl Iterator<Item = CasterKey> + '_ {
        self.casters.keys()
    }

    /// Number of registered casters.
    pub fn len(&self) -> usize {
        self.casters.len()
    }

    /// True when no casters are registered.
    pub fn is_empty(&self) -> bool {
        self.casters.is_empty()
    }

    /// Drain the set of casters whose bounds changed since the last call.
    pub fn take_dirty_bounds(&mut self) -> Vec<CasterKey> {
        self.dirty_bounds.drain().collect()
    }

    /// Remove all casters.
    pub fn clear(&mut self) {
        self.casters.clear();
        self.dirty_bounds.clear();
    }
}

#[cfg(test)]
#[path = "caster_scene_tests.rs"]
mod tests;
