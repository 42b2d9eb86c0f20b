//! Torrance-Sparrow microfacet reflection model.

use crate::base::*;
use crate::bsdf::common::*;
use crate::bsdf::{Bsdf, Fresnel, ScatterRecord};
use crate::geometry::{Point2f, Vector3f};
use crate::microfacet::MicrofacetDistribution;
use crate::spectrum::Spectrum;
use bumpalo::Bump;

/// Implements the Torrance-Sparrow model for reflection from rough surfaces
/// described by a microfacet distribution.
pub struct MicrofacetReflection<'arena> {
    /// Reflectance.
    r: Spectrum,

    /// The microfacet distribution.
    distribution: &'arena dyn MicrofacetDistribution,

    /// Fresnel reflectance at the interface.
    fresnel: &'arena Fresnel<'arena>,
}

impl<'arena> MicrofacetReflection<'arena> {
    /// Allocates a new `MicrofacetReflection` wrapped in a `Bsdf` in the
    /// arena.
    ///
    /// * `arena`        - The arena for allocations.
    /// * `r`            - Reflectance.
    /// * `distribution` - The microfacet distribution.
    /// * `fresnel`      - Fresnel reflectance at the interface.
    pub fn alloc(
        arena: &'arena Bump,
        r: Spectrum,
        distribution: &'arena dyn MicrofacetDistribution,
        fresnel: &'arena Fresnel<'arena>,
    ) -> &'arena mut Bsdf<'arena> {
        let model = arena.alloc(Self {
            r,
            distribution,
            fresnel,
        });
        arena.alloc(Bsdf::MicrofacetReflection(model))
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let cos_theta_o = abs_cos_theta(wo);
        let cos_theta_i = abs_cos_theta(wi);
        let wh = *wi + *wo;

        // Handle degenerate cases for microfacet reflection.
        if cos_theta_i == 0.0 || cos_theta_o == 0.0 {
            return Spectrum::ZERO;
        }
        if wh.x == 0.0 && wh.y == 0.0 && wh.z == 0.0 {
            return Spectrum::ZERO;
        }

        // Evaluate the Fresnel term with the half-vector oriented to the
        // same side as the shading normal.
        let wh = wh.normalize();
        let f = self
            .fresnel
            .evaluate(wi.dot(&wh.face_forward(&Vector3f::new(0.0, 0.0, 1.0))));

        self.r * self.distribution.d(&wh) * self.distribution.g(wo, wi) * f
            / (4.0 * cos_theta_i * cos_theta_o)
    }

    /// Samples an incident direction by sampling a half-vector and fills in
    /// the record.
    ///
    /// * `record` - The scatter record to fill in.
    /// * `u`      - The 2D uniform random values.
    pub fn sample(&self, record: &mut ScatterRecord, u: &Point2f) -> Spectrum {
        let wo = record.wo;
        if wo.z == 0.0 {
            return Spectrum::ZERO;
        }

        let wh = self.distribution.sample_wh(&wo, u);
        if wo.dot(&wh) < 0.0 {
            return Spectrum::ZERO;
        }

        let wi = reflect(&wo, &wh);
        record.wi = wi;
        record.cos_theta = abs_cos_theta(&wi);
        if !same_hemisphere(&wo, &wi) {
            record.value = Spectrum::ZERO;
            record.pdf = 0.0;
            return Spectrum::ZERO;
        }

        // Change of variables from the half-vector to the incident direction.
        record.pdf = self.distribution.pdf(&wo, &wh) / (4.0 * wo.dot(&wh));
        record.value = self.f(&wo, &wi);
        record.value
    }

    /// Returns the PDF of `sample` for the given pair of directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        if !same_hemisphere(wo, wi) {
            return 0.0;
        }
        let wh = (*wo + *wi).normalize();
        self.distribution.pdf(wo, &wh) / (4.0 * wo.dot(&wh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsdf::FresnelConductor;
    use crate::microfacet::TrowbridgeReitzDistribution;
    use crate::rng::Rng;
    use crate::sampling::{uniform_hemisphere_pdf, uniform_sample_hemisphere};

    fn gold_brdf(arena: &Bump, alpha: Float) -> MicrofacetReflection<'_> {
        let distribution: &dyn MicrofacetDistribution =
            arena.alloc(TrowbridgeReitzDistribution::new(alpha, alpha, true));
        let fresnel = FresnelConductor::alloc(
            arena,
            Spectrum::ONE,
            Spectrum::from_rgb(0.14, 0.37, 1.44),
            Spectrum::from_rgb(3.98, 2.39, 1.6),
        );
        MicrofacetReflection {
            r: Spectrum::ONE,
            distribution,
            fresnel,
        }
    }

    #[test]
    fn f_is_finite_and_non_negative() {
        let arena = Bump::new();
        let brdf = gold_brdf(&arena, 0.3);
        let mut rng = Rng::new(31);
        for _ in 0..10000 {
            let wo = uniform_sample_hemisphere(&Point2f::new(
                rng.uniform_float(),
                rng.uniform_float(),
            ));
            let wi = uniform_sample_hemisphere(&Point2f::new(
                rng.uniform_float(),
                rng.uniform_float(),
            ));
            let f = brdf.f(&wo, &wi);
            for i in 0..3 {
                assert!(f[i].is_finite());
                assert!(f[i] >= 0.0);
            }
        }
    }

    #[test]
    fn f_handles_degenerate_directions() {
        let arena = Bump::new();
        let brdf = gold_brdf(&arena, 0.3);
        let grazing = Vector3f::new(1.0, 0.0, 0.0);
        let wi = Vector3f::new(0.0, 0.5, 0.5).normalize();
        assert!(brdf.f(&grazing, &wi).is_black());
        // Opposite directions give a zero half-vector.
        let wo = Vector3f::new(0.3, 0.2, 0.8).normalize();
        assert!(brdf.f(&wo, &-wo).is_black());
    }

    #[test]
    fn sample_agrees_with_pdf() {
        let arena = Bump::new();
        let brdf = gold_brdf(&arena, 0.4);
        let frame = crate::bsdf::ShadingFrame::new(Vector3f::new(0.0, 0.0, 1.0));
        let mut rng = Rng::new(33);
        for _ in 0..10000 {
            let wo = Vector3f::new(0.3, -0.2, 0.9).normalize();
            let mut record = ScatterRecord {
                frame,
                wo,
                wi: Vector3f::default(),
                value: Spectrum::ZERO,
                pdf: 0.0,
                cos_theta: 0.0,
            };
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let f = brdf.sample(&mut record, &u);
            if record.pdf > 0.0 {
                assert!(same_hemisphere(&record.wo, &record.wi));
                assert_eq!(f, record.value);
                let pdf = brdf.pdf(&record.wo, &record.wi);
                assert!(abs(pdf - record.pdf) < 1e-3 * max(1.0, record.pdf));
                assert!(abs(record.cos_theta - abs_cos_theta(&record.wi)) < 1e-6);
            }
        }
    }

    #[test]
    fn sampled_reflectance_matches_uniform_estimate() {
        // Hemispherical reflectance estimated with importance sampling must
        // agree with the same integral estimated with uniform directions.
        // This checks the absolute scale of the half-vector Jacobian, which
        // the other tests only exercise relative to itself.
        let arena = Bump::new();
        let brdf = gold_brdf(&arena, 0.4);
        let frame = crate::bsdf::ShadingFrame::new(Vector3f::new(0.0, 0.0, 1.0));
        let wo = Vector3f::new(0.2, 0.1, 0.95).normalize();
        let mut rng = Rng::new(37);
        let n = 200_000;

        let mut importance = Spectrum::ZERO;
        let mut uniform = Spectrum::ZERO;
        for _ in 0..n {
            let mut record = ScatterRecord {
                frame,
                wo,
                wi: Vector3f::default(),
                value: Spectrum::ZERO,
                pdf: 0.0,
                cos_theta: 0.0,
            };
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let f = brdf.sample(&mut record, &u);
            if record.pdf > 0.0 {
                importance += f * (record.cos_theta / record.pdf);
            }

            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let wi = uniform_sample_hemisphere(&u);
            uniform += brdf.f(&wo, &wi) * (abs_cos_theta(&wi) / uniform_hemisphere_pdf());
        }
        importance /= n as Float;
        uniform /= n as Float;

        for i in 0..3 {
            assert!(
                abs(importance[i] - uniform[i]) < 0.05 * max(uniform[i], 0.05),
                "reflectance estimates diverge: {} vs {}",
                importance[i],
                uniform[i]
            );
        }
    }

    #[test]
    fn below_surface_pdf_is_zero() {
        let arena = Bump::new();
        let brdf = gold_brdf(&arena, 0.3);
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = Vector3f::new(0.1, 0.1, -1.0).normalize();
        assert_eq!(brdf.pdf(&wo, &wi), 0.0);
    }
}
