//! Lambertian reflection model.

use crate::base::*;
use crate::bsdf::common::*;
use crate::bsdf::{Bsdf, ScatterRecord};
use crate::geometry::{Point2f, Vector3f};
use crate::sampling::{cosine_hemisphere_pdf, cosine_sample_hemisphere};
use crate::spectrum::Spectrum;
use bumpalo::Bump;

/// Perfect diffuse reflection that scatters incident light equally in all
/// directions.
pub struct LambertianReflection {
    /// Reflectance.
    r: Spectrum,
}

impl LambertianReflection {
    /// Allocates a new `LambertianReflection` wrapped in a `Bsdf` in the
    /// arena.
    ///
    /// * `arena` - The arena for allocations.
    /// * `r`     - Reflectance.
    pub fn alloc<'arena>(arena: &'arena Bump, r: Spectrum) -> &'arena mut Bsdf<'arena> {
        let model = arena.alloc(Self { r });
        arena.alloc(Bsdf::LambertianReflection(model))
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> Spectrum {
        self.r * INV_PI
    }

    /// Samples an incident direction with a cosine-weighted distribution and
    /// fills in the record.
    ///
    /// * `record` - The scatter record to fill in.
    /// * `u`      - The 2D uniform random values.
    pub fn sample(&self, record: &mut ScatterRecord, u: &Point2f) -> Spectrum {
        let mut wi = cosine_sample_hemisphere(u);
        if record.wo.z < 0.0 {
            wi.z = -wi.z;
        }
        record.wi = wi;
        record.cos_theta = abs_cos_theta(&wi);
        record.pdf = self.pdf(&record.wo, &wi);
        record.value = self.f(&record.wo, &wi);
        record.value
    }

    /// Returns the PDF of `sample` for the given pair of directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        if same_hemisphere(wo, wi) {
            cosine_hemisphere_pdf(abs_cos_theta(wi))
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Rng;
    use float_cmp::approx_eq;

    #[test]
    fn f_is_reflectance_over_pi() {
        let arena = Bump::new();
        let bsdf = LambertianReflection::alloc(&arena, Spectrum::from_rgb(0.5, 0.6, 0.7));
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.5, 0.5, 0.5).normalize();
        let f = bsdf.f(&wo, &wi);
        assert!(approx_eq!(Float, f[0], 0.5 * INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn pdf_is_zero_below_surface() {
        let arena = Bump::new();
        let bsdf = LambertianReflection::alloc(&arena, Spectrum::new(0.5));
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.0, 0.0, -1.0);
        assert_eq!(bsdf.pdf(&wo, &wi), 0.0);
    }

    #[test]
    fn estimator_recovers_reflectance() {
        // The average of f * cos / pdf over samples equals the reflectance.
        let r = Spectrum::new(0.37);
        let model = LambertianReflection { r };
        let wo = Vector3f::new(0.2, -0.1, 0.8).normalize();
        let mut rng = Rng::new(21);
        let n = 100_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let wi = cosine_sample_hemisphere(&u);
            let pdf = model.pdf(&wo, &wi);
            if pdf > 0.0 {
                sum += model.f(&wo, &wi)[0] * abs_cos_theta(&wi) / pdf;
            }
        }
        let estimate = sum / n as Float;
        assert!(abs(estimate - 0.37) < 1e-3);
    }
}
