//! Metal material.

use bumpalo::Bump;
use core::base::*;
use core::bsdf::{Bsdf, FresnelConductor, MicrofacetReflection};
use core::interaction::Intersection;
use core::material::Material;
use core::microfacet::{MicrofacetDistribution, TrowbridgeReitzDistribution};
use core::spectrum::Spectrum;
use core::texture::ArcTexture;

/// A conductor with microfacet roughness.
pub struct Metal {
    /// Refractive index of the conductor.
    eta: ArcTexture<Spectrum>,

    /// Absorption coefficient of the conductor.
    k: ArcTexture<Spectrum>,

    /// Roughness in the x direction.
    u_roughness: ArcTexture<Float>,

    /// Roughness in the y direction.
    v_roughness: ArcTexture<Float>,

    /// Remap roughness values from [0, 1] to alpha values.
    remap_roughness: bool,
}

impl Metal {
    /// Creates a new metal material.
    ///
    /// * `eta`             - Refractive index of the conductor.
    /// * `k`               - Absorption coefficient of the conductor.
    /// * `u_roughness`     - Roughness in the x direction.
    /// * `v_roughness`     - Roughness in the y direction.
    /// * `remap_roughness` - Remap roughness values from [0, 1] to alpha
    ///                       values.
    pub fn new(
        eta: ArcTexture<Spectrum>,
        k: ArcTexture<Spectrum>,
        u_roughness: ArcTexture<Float>,
        v_roughness: ArcTexture<Float>,
        remap_roughness: bool,
    ) -> Self {
        Self {
            eta,
            k,
            u_roughness,
            v_roughness,
            remap_roughness,
        }
    }
}

impl Material for Metal {
    fn allocate_bsdf<'arena>(
        &self,
        isect: &Intersection,
        arena: &'arena Bump,
    ) -> &'arena mut Bsdf<'arena> {
        let mut u_rough = self.u_roughness.evaluate(&isect.uv);
        let mut v_rough = self.v_roughness.evaluate(&isect.uv);
        if self.remap_roughness {
            u_rough = TrowbridgeReitzDistribution::roughness_to_alpha(u_rough);
            v_rough = TrowbridgeReitzDistribution::roughness_to_alpha(v_rough);
        }

        let distribution: &dyn MicrofacetDistribution =
            arena.alloc(TrowbridgeReitzDistribution::new(u_rough, v_rough, true));
        let fresnel = FresnelConductor::alloc(
            arena,
            Spectrum::ONE,
            self.eta.evaluate(&isect.uv),
            self.k.evaluate(&isect.uv),
        );
        MicrofacetReflection::alloc(arena, Spectrum::ONE, distribution, fresnel)
    }
}
