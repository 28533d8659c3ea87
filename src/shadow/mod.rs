//! Shadow module — the frustum fitter and caster-culling strategies.
//!
//! Once per frame the host calls [`ShadowFrustumFitter::update_frustum`],
//! then either tests individual bounds with
//! [`ShadowFrustumFitter::test_inclusion`] or runs a [`ShadowCuller`]
//! over a [`crate::scene::CasterScene`] to get a [`ShadowView`].

mod frustum_fitter;
mod culler;
mod shadow_view;

pub use frustum_fitter::ShadowFrustumFitter;
pub use culler::{ShadowCuller, BruteForceShadowCuller, FittedShadowCuller};
pub use shadow_view::ShadowView;
