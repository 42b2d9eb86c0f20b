//! Beckmann-Spizzichino distribution.

use super::MicrofacetDistribution;
use crate::base::*;
use crate::bsdf::common::*;
use crate::geometry::{Point2f, Vector3f};

/// Implements the anisotropic variant of the Beckmann-Spizzichino
/// distribution.
#[derive(Copy, Clone, Default)]
pub struct BeckmannDistribution {
    /// Indicates whether or not the visible area is sampled.
    sample_visible_area: bool,

    /// For microfacets oriented perpendicular to the x-axis and where
    /// α = sqrt(2) * σ and σ is the RMS slope of microfacets.
    alpha_x: Float,

    /// For microfacets oriented perpendicular to the y-axis and where
    /// α = sqrt(2) * σ and σ is the RMS slope of microfacets.
    alpha_y: Float,
}

impl BeckmannDistribution {
    /// Create a new `BeckmannDistribution`.
    ///
    /// * `alpha_x`             - Roughness in the x direction.
    /// * `alpha_y`             - Roughness in the y direction.
    /// * `sample_visible_area` - Sample the visible area of normals.
    pub fn new(alpha_x: Float, alpha_y: Float, sample_visible_area: bool) -> Self {
        Self {
            sample_visible_area,
            alpha_x: max(0.001, alpha_x),
            alpha_y: max(0.001, alpha_y),
        }
    }

    /// Maps a scalar roughness parameter in [0, 1] to alpha values where
    /// values close to 0 are near-perfect specular reflection.
    ///
    /// * `roughness` - Roughness parameter value.
    pub fn roughness_to_alpha(roughness: Float) -> Float {
        let roughness = max(roughness, 1e-3);
        let x = roughness.ln();
        1.62142
            + 0.819955 * x
            + 0.1734 * x * x
            + 0.0171201 * x * x * x
            + 0.000640711 * x * x * x * x
    }
}

impl MicrofacetDistribution for BeckmannDistribution {
    fn get_sample_visible_area(&self) -> bool {
        self.sample_visible_area
    }

    fn d(&self, wh: &Vector3f) -> Float {
        let tan2_theta = tan_2_theta(wh);
        if tan2_theta.is_infinite() {
            0.0
        } else {
            let cos4_theta = cos_2_theta(wh) * cos_2_theta(wh);
            (-tan2_theta
                * (cos_2_phi(wh) / (self.alpha_x * self.alpha_x)
                    + sin_2_phi(wh) / (self.alpha_y * self.alpha_y)))
                .exp()
                / (PI * self.alpha_x * self.alpha_y * cos4_theta)
        }
    }

    fn lambda(&self, w: &Vector3f) -> Float {
        let abs_tan_theta = abs(tan_theta(w));
        if abs_tan_theta.is_infinite() {
            return 0.0;
        }

        let alpha = (cos_2_phi(w) * self.alpha_x * self.alpha_x
            + sin_2_phi(w) * self.alpha_y * self.alpha_y)
            .sqrt();
        // Exact form of Lambda. The visible normal sampler draws from the
        // true visible distribution, so the pdf has to use the same Lambda
        // or it no longer integrates to one over the hemisphere.
        let a = 1.0 / (alpha * abs_tan_theta);
        0.5 * ((-a * a).exp() * INV_SQRT_PI / a - (1.0 - erf(a)))
    }

    fn sample_wh(&self, wo: &Vector3f, u: &Point2f) -> Vector3f {
        if !self.sample_visible_area {
            // Sample the full distribution of normals.
            let log_sample = (1.0 - u.x).ln();
            debug_assert!(!log_sample.is_infinite());
            let (tan2_theta, phi) = if self.alpha_x == self.alpha_y {
                (-self.alpha_x * self.alpha_x * log_sample, TWO_PI * u.y)
            } else {
                let mut phi =
                    (self.alpha_y / self.alpha_x * (TWO_PI * u.y + 0.5 * PI).tan()).atan();
                if u.y > 0.5 {
                    phi += PI;
                }
                let sin_phi = phi.sin();
                let cos_phi = phi.cos();
                let alpha_x2 = self.alpha_x * self.alpha_x;
                let alpha_y2 = self.alpha_y * self.alpha_y;
                (
                    -log_sample / (cos_phi * cos_phi / alpha_x2 + sin_phi * sin_phi / alpha_y2),
                    phi,
                )
            };
            let cos_theta = 1.0 / (1.0 + tan2_theta).sqrt();
            let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
            let wh = spherical_direction(sin_theta, cos_theta, phi);
            if !same_hemisphere(wo, &wh) {
                -wh
            } else {
                wh
            }
        } else {
            let flip = wo.z < 0.0;
            let wo = if flip { -(*wo) } else { *wo };
            let wh = beckmann_sample(&wo, self.alpha_x, self.alpha_y, u.x, u.y);
            if flip {
                -wh
            } else {
                wh
            }
        }
    }
}

/// Samples the slopes of the visible normal distribution for a normalized
/// incident direction.
///
/// * `cos_theta_i` - Cosine of the angle between the incident direction and
///                   the z-axis.
/// * `u1`          - The uniform random value.
/// * `u2`          - The uniform random value.
fn beckmann_sample_11(cos_theta_i: Float, u1: Float, u2: Float) -> (Float, Float) {
    // Special case (normal incidence).
    if cos_theta_i > 0.9999 {
        let r = (-(1.0 - u1).ln()).sqrt();
        let phi = TWO_PI * u2;
        return (r * phi.cos(), r * phi.sin());
    }

    let sin_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i).sqrt();
    let tan_theta_i = sin_theta_i / cos_theta_i;
    let cot_theta_i = 1.0 / tan_theta_i;

    // Solve the visible slope CDF with a combination of bisection and
    // Newton iterations.
    let mut a = -1.0;
    let mut c = erf(cot_theta_i);
    let sample_x = max(u1, 1e-6);

    // An initial guess fitted over a wide range of incidence angles.
    let theta_i = cos_theta_i.acos();
    let fit = 1.0 + theta_i * (-0.876 + theta_i * (0.4265 - 0.0594 * theta_i));
    let mut b = c - (1.0 + c) * (1.0 - sample_x).powf(fit);

    let normalization =
        1.0 / (1.0 + c + INV_SQRT_PI * tan_theta_i * (-cot_theta_i * cot_theta_i).exp());
    for _ in 0..10 {
        if !(b >= a && b <= c) {
            b = 0.5 * (a + c);
        }

        // Evaluate the CDF and its derivative, the density function.
        let inv_erf = erf_inv(b);
        let value = normalization
            * (1.0 + b + INV_SQRT_PI * tan_theta_i * (-inv_erf * inv_erf).exp())
            - sample_x;
        if abs(value) < 1e-5 {
            break;
        }
        let derivative = normalization * (1.0 - inv_erf * tan_theta_i);

        if value > 0.0 {
            c = b;
        } else {
            a = b;
        }
        b -= value / derivative;
    }

    let slope_x = erf_inv(b);
    let slope_y = erf_inv(2.0 * max(u2, 1e-6) - 1.0);

    debug_assert!(slope_x.is_finite());
    debug_assert!(slope_y.is_finite());

    (slope_x, slope_y)
}

/// Samples the visible area of normals for an incident direction.
///
/// * `wi`      - Incident direction.
/// * `alpha_x` - Roughness in the x direction.
/// * `alpha_y` - Roughness in the y direction.
/// * `u1`      - The uniform random value.
/// * `u2`      - The uniform random value.
fn beckmann_sample(wi: &Vector3f, alpha_x: Float, alpha_y: Float, u1: Float, u2: Float) -> Vector3f {
    // 1. Stretch wi.
    let wi_stretched = Vector3f::new(alpha_x * wi.x, alpha_y * wi.y, wi.z).normalize();

    // 2. Sample the slopes at normal incidence.
    let (mut slope_x, mut slope_y) = beckmann_sample_11(cos_theta(&wi_stretched), u1, u2);

    // 3. Rotate.
    let tmp = cos_phi(&wi_stretched) * slope_x - sin_phi(&wi_stretched) * slope_y;
    slope_y = sin_phi(&wi_stretched) * slope_x + cos_phi(&wi_stretched) * slope_y;
    slope_x = tmp;

    // 4. Unstretch.
    slope_x = alpha_x * slope_x;
    slope_y = alpha_y * slope_y;

    // 5. Compute the normal.
    Vector3f::new(-slope_x, -slope_y, 1.0).normalize()
}
