//! Material interface.

use crate::bsdf::Bsdf;
use crate::geometry::Point2f;
use crate::interaction::Intersection;
use crate::spectrum::Spectrum;
use bumpalo::Bump;
use std::sync::Arc;

/// Interface for materials.
pub trait Material: Send + Sync {
    /// Allocates the BSDF describing how the surface scatters light at an
    /// intersection. Everything the BSDF references is allocated in the
    /// arena, so it stays valid only as long as the arena does.
    ///
    /// * `isect` - The surface intersection.
    /// * `arena` - The arena for allocations.
    fn allocate_bsdf<'arena>(
        &self,
        isect: &Intersection,
        arena: &'arena Bump,
    ) -> &'arena mut Bsdf<'arena>;

    /// Returns the radiance emitted from the surface.
    ///
    /// * `uv` - The surface parameterization.
    fn emission(&self, _uv: &Point2f) -> Spectrum {
        Spectrum::ZERO
    }

    /// Returns true if the material emits light.
    fn has_emission(&self) -> bool {
        false
    }
}

/// Atomic reference counted `Material`.
pub type ArcMaterial = Arc<dyn Material>;
