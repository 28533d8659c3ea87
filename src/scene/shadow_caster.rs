/// Shadow caster entries for the caster registry.
///
/// A ShadowCaster is the shadow system's view of one renderable object:
/// its current world-space bounds plus rendering flags. The host engine
/// owns the real renderable and mirrors its state here.

use bitflags::bitflags;
use slotmap::new_key_type;
use crate::geometry::AABB;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a ShadowCaster within a CasterScene.
    ///
    /// Keys remain valid even after other casters are removed.
    /// A key becomes invalid only when its own caster is removed.
    pub struct CasterKey;
}

// ===== FLAGS =====

bitflags! {
    /// Per-caster rendering flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CasterFlags: u64 {
        /// Caster is visible to the main camera
        const VISIBLE        = 1 << 0;
        /// Caster casts shadows
        const CAST_SHADOW    = 1 << 1;
        /// Caster receives shadows
        const RECEIVE_SHADOW = 1 << 2;
        // Bits 3-63 reserved for future extensions
    }
}

impl Default for CasterFlags {
    fn default() -> Self {
        CasterFlags::VISIBLE | CasterFlags::CAST_SHADOW | CasterFlags::RECEIVE_SHADOW
    }
}

// ===== SHADOW CASTER =====

/// One registered shadow caster: world-space bounds + flags.
#[derive(Debug, Clone, Copy)]
pub struct ShadowCaster {
    world_bounds: AABB,
    flags: CasterFlags,
}

impl ShadowCaster {
    /// Create a caster with default flags (visible, casts and receives shadows).
    pub fn new(world_bounds: AABB) -> Self {
        Self { world_bounds, flags: CasterFlags::default() }
    }

    /// Create a caster with explicit flags.
    pub fn with_flags(world_bounds: AABB, flags: CasterFlags) -> Self {
        Self { world_bounds, flags }
    }

    /// Current world-space bounds.
    pub fn world_bounds(&self) -> &AABB {
        &self.world_bounds
    }

    /// Rendering flags.
    pub fn flags(&self) -> CasterFlags {
        self.flags
    }

    /// True when the CAST_SHADOW flag is set.
    pub fn casts_shadows(&self) -> bool {
        self.flags.contains(CasterFlags::CAST_SHADOW)
    }

    pub(crate) fn set_world_bounds(&mut self, world_bounds: AABB) {
        self.world_bounds = world_bounds;
    }

    /// Replace the flags.
    pub fn set_flags(&mut self, flags: CasterFlags) {
        self.flags = flags;
    }
}

#[cfg(test)]
#[path = "shadow_caster_tests.rs"]
mod tests;
