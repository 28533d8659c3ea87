//! Scene module — flat registry of shadow casters.
//!
//! The crate does not traverse a host scene graph: the host registers one
//! world-space bounding box per renderable object and keeps it current.
//! Cullers consume the registry each frame.

mod shadow_caster;
mod caster_scene;

pub use shadow_caster::{ShadowCaster, CasterKey, CasterFlags};
pub use caster_scene::CasterScene;
