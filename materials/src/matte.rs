//! Matte material.

use bumpalo::Bump;
use core::bsdf::{Bsdf, LambertianReflection};
use core::interaction::Intersection;
use core::material::Material;
use core::spectrum::Spectrum;
use core::texture::ArcTexture;

/// A purely diffuse surface.
pub struct Matte {
    /// Diffuse reflectance.
    kd: ArcTexture<Spectrum>,
}

impl Matte {
    /// Creates a new matte material.
    ///
    /// * `kd` - Diffuse reflectance.
    pub fn new(kd: ArcTexture<Spectrum>) -> Self {
        Self { kd }
    }
}

impl Material for Matte {
    fn allocate_bsdf<'arena>(
        &self,
        isect: &Intersection,
        arena: &'arena Bump,
    ) -> &'arena mut Bsdf<'arena> {
        let kd = self.kd.evaluate(&isect.uv).clamp(0.0, 1.0);
        LambertianReflection::alloc(arena, kd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::geometry::{Point3f, Ray, Vector3f};
    use core::scene::{Primitive, Scene};
    use core::texture::ConstantTexture;
    use shapes::Sphere;
    use std::sync::Arc;

    #[test]
    fn allocates_a_diffuse_bsdf() {
        let material = Arc::new(Matte::new(Arc::new(ConstantTexture::new(Spectrum::new(
            0.5,
        )))));
        let scene = Scene::new(vec![Primitive::new(
            Arc::new(Sphere::new(Point3f::new(0.0, 0.0, 0.0), 1.0)),
            material,
        )]);

        let ray = Ray::new(Point3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, -1.0));
        let isect = scene.is_intersect(&ray).expect("should hit");

        let arena = Bump::new();
        let bsdf = isect.material.allocate_bsdf(&isect, &arena);
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.3, 0.3, 0.9).normalize();
        let f = bsdf.f(&wo, &wi);
        assert!(!f.is_black());
        // The BSDF must conserve energy.
        assert!(f[0] * core::base::PI <= 1.0);
    }
}
