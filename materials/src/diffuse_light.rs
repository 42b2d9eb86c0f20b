//! Diffuse area light material.

use bumpalo::Bump;
use core::bsdf::{Bsdf, LambertianReflection};
use core::geometry::Point2f;
use core::interaction::Intersection;
use core::material::Material;
use core::spectrum::Spectrum;
use core::texture::ArcTexture;

/// A surface that emits light uniformly over its area and does not scatter.
pub struct DiffuseLight {
    /// Emitted radiance.
    emit: ArcTexture<Spectrum>,
}

impl DiffuseLight {
    /// Creates a new light material.
    ///
    /// * `emit` - Emitted radiance.
    pub fn new(emit: ArcTexture<Spectrum>) -> Self {
        Self { emit }
    }
}

impl Material for DiffuseLight {
    fn allocate_bsdf<'arena>(
        &self,
        _isect: &Intersection,
        arena: &'arena Bump,
    ) -> &'arena mut Bsdf<'arena> {
        // Paths terminate on emitters, so the BSDF is never sampled.
        LambertianReflection::alloc(arena, Spectrum::ZERO)
    }

    fn emission(&self, uv: &Point2f) -> Spectrum {
        self.emit.evaluate(uv)
    }

    fn has_emission(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::texture::ConstantTexture;
    use std::sync::Arc;

    #[test]
    fn emission_matches_texture() {
        let light = DiffuseLight::new(Arc::new(ConstantTexture::new(Spectrum::new(4.0))));
        assert!(light.has_emission());
        assert_eq!(
            light.emission(&Point2f::new(0.5, 0.5)),
            Spectrum::new(4.0)
        );
    }
}
