//! Microfacet distributions.

mod beckmann;
mod trowbridge_reitz;

use crate::base::*;
use crate::bsdf::common::*;
use crate::geometry::{Point2f, Vector3f};

pub use beckmann::BeckmannDistribution;
pub use trowbridge_reitz::TrowbridgeReitzDistribution;

/// Interface for microfacet distributions.
pub trait MicrofacetDistribution: Send + Sync {
    /// Returns whether or not the visible area is sampled.
    fn get_sample_visible_area(&self) -> bool;

    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distribution of normal vectors.
    fn d(&self, wh: &Vector3f) -> Float;

    /// Returns the invisible masked microfacet area per visible microfacet
    /// area.
    ///
    /// * `w` - The direction from camera/viewer.
    fn lambda(&self, w: &Vector3f) -> Float;

    /// Returns the masking-shadowing function which gives the fraction of
    /// microfacets visible from a direction.
    ///
    /// * `w` - The direction from camera/viewer.
    fn g1(&self, w: &Vector3f) -> Float {
        1.0 / (1.0 + self.lambda(w))
    }

    /// Returns the fraction of microfacets visible from both directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    fn g(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        1.0 / (1.0 + self.lambda(wo) + self.lambda(wi))
    }

    /// Returns a sample from the distribution of normal vectors.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    fn sample_wh(&self, wo: &Vector3f, u: &Point2f) -> Vector3f;

    /// Returns the PDF of `sample_wh` for the given half-vector.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wh` - The half-vector.
    fn pdf(&self, wo: &Vector3f, wh: &Vector3f) -> Float {
        if self.get_sample_visible_area() {
            self.d(wh) * self.g1(wo) * wo.abs_dot(wh) / abs_cos_theta(wo)
        } else {
            self.d(wh) * abs_cos_theta(wh)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Rng;
    use crate::sampling::{uniform_hemisphere_pdf, uniform_sample_hemisphere};

    fn random_direction(rng: &mut Rng) -> Vector3f {
        loop {
            let w = uniform_sample_hemisphere(&Point2f::new(
                rng.uniform_float(),
                rng.uniform_float(),
            ));
            if w.z > 0.1 {
                return w;
            }
        }
    }

    /// The normal distribution integrates to one over projected solid angle.
    fn check_d_normalization(distribution: &dyn MicrofacetDistribution, seed: u64) {
        let mut rng = Rng::new(seed);
        let n = 200_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let wh = uniform_sample_hemisphere(&Point2f::new(
                rng.uniform_float(),
                rng.uniform_float(),
            ));
            sum += distribution.d(&wh) * abs_cos_theta(&wh) / uniform_hemisphere_pdf();
        }
        let estimate = sum / n as Float;
        assert!(
            abs(estimate - 1.0) < 0.05,
            "normalization estimate {} too far from 1",
            estimate
        );
    }

    /// `pdf` integrates to one over the directions produced by `sample_wh`.
    fn check_pdf_consistency(distribution: &dyn MicrofacetDistribution, seed: u64) {
        let mut rng = Rng::new(seed);
        let wo = random_direction(&mut rng);
        let n = 200_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let wh = uniform_sample_hemisphere(&Point2f::new(
                rng.uniform_float(),
                rng.uniform_float(),
            ));
            sum += distribution.pdf(&wo, &wh) / uniform_hemisphere_pdf();
        }
        let estimate = sum / n as Float;
        assert!(
            abs(estimate - 1.0) < 0.05,
            "pdf integral estimate {} too far from 1",
            estimate
        );
    }

    /// Sampled half-vectors have a positive PDF and unit length.
    fn check_samples(distribution: &dyn MicrofacetDistribution, seed: u64) {
        let mut rng = Rng::new(seed);
        let wo = random_direction(&mut rng);
        for _ in 0..10000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let wh = distribution.sample_wh(&wo, &u);
            assert!(abs(wh.length() - 1.0) < 1e-3);
            assert!(distribution.pdf(&wo, &wh) > 0.0);
        }
    }

    #[test]
    fn trowbridge_reitz_d_is_normalized() {
        check_d_normalization(&TrowbridgeReitzDistribution::new(0.3, 0.3, false), 1);
        check_d_normalization(&TrowbridgeReitzDistribution::new(0.2, 0.4, false), 2);
    }

    #[test]
    fn beckmann_d_is_normalized() {
        check_d_normalization(&BeckmannDistribution::new(0.3, 0.3, false), 3);
        check_d_normalization(&BeckmannDistribution::new(0.2, 0.4, false), 4);
    }

    #[test]
    fn trowbridge_reitz_pdf_is_consistent() {
        check_pdf_consistency(&TrowbridgeReitzDistribution::new(0.3, 0.3, false), 5);
        check_pdf_consistency(&TrowbridgeReitzDistribution::new(0.3, 0.3, true), 6);
    }

    #[test]
    fn beckmann_pdf_is_consistent() {
        check_pdf_consistency(&BeckmannDistribution::new(0.3, 0.3, false), 7);
        check_pdf_consistency(&BeckmannDistribution::new(0.3, 0.3, true), 8);
    }

    #[test]
    fn sampled_half_vectors_are_valid() {
        check_samples(&TrowbridgeReitzDistribution::new(0.25, 0.25, true), 9);
        check_samples(&TrowbridgeReitzDistribution::new(0.25, 0.25, false), 10);
        check_samples(&BeckmannDistribution::new(0.25, 0.25, true), 11);
        check_samples(&BeckmannDistribution::new(0.25, 0.25, false), 12);
    }

    #[test]
    fn beckmann_lambda_matches_reference_values() {
        // (exp(-a^2) / (a sqrt(pi)) - erfc(a)) / 2 for a = 1 / (alpha tan(theta)).
        let distribution = BeckmannDistribution::new(0.5, 0.5, true);
        let w = Vector3f::new(1.0, 0.0, 1.0).normalize(); // a = 2
        assert!(abs(distribution.lambda(&w) - 2.4437e-4) < 1e-5);

        let distribution = BeckmannDistribution::new(1.0, 1.0, true);
        let w = Vector3f::new(2.0, 0.0, 1.0).normalize(); // a = 0.5
        assert!(abs(distribution.lambda(&w) - 0.199641) < 1e-4);
    }

    #[test]
    fn masking_is_bounded() {
        let distribution = TrowbridgeReitzDistribution::new(0.3, 0.3, true);
        let mut rng = Rng::new(13);
        for _ in 0..10000 {
            let wo = random_direction(&mut rng);
            let wi = random_direction(&mut rng);
            let g = distribution.g(&wo, &wi);
            assert!((0.0..=1.0).contains(&g));
            assert!(distribution.g1(&wo) >= g);
        }
    }

    #[test]
    fn roughness_to_alpha_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=10 {
            let alpha = TrowbridgeReitzDistribution::roughness_to_alpha(i as Float / 10.0);
            assert!(alpha > last);
            last = alpha;
        }
    }
}
