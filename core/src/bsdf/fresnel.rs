//! Fresnel reflectance models.

use crate::base::*;
use crate::spectrum::Spectrum;
use bumpalo::Bump;

/// Fresnel reflectance at an interface.
pub enum Fresnel<'arena> {
    Dielectric(&'arena mut FresnelDielectric),
    Conductor(&'arena mut FresnelConductor),
}

impl<'arena> Fresnel<'arena> {
    /// Returns the reflectance for light arriving at the given angle.
    ///
    /// * `cos_theta_i` - Cosine of the angle of incidence.
    pub fn evaluate(&self, cos_theta_i: Float) -> Spectrum {
        match self {
            Fresnel::Dielectric(f) => f.evaluate(cos_theta_i),
            Fresnel::Conductor(f) => f.evaluate(cos_theta_i),
        }
    }
}

/// Fresnel reflectance between two dielectric media.
pub struct FresnelDielectric {
    /// Refractive index of the incident medium.
    eta_i: Float,

    /// Refractive index of the transmitted medium.
    eta_t: Float,
}

impl FresnelDielectric {
    /// Allocates a new `FresnelDielectric` in the arena.
    ///
    /// * `arena` - The arena for allocations.
    /// * `eta_i` - Refractive index of the incident medium.
    /// * `eta_t` - Refractive index of the transmitted medium.
    pub fn alloc<'arena>(arena: &'arena Bump, eta_i: Float, eta_t: Float) -> &'arena mut Fresnel<'arena> {
        let model = arena.alloc(Self { eta_i, eta_t });
        arena.alloc(Fresnel::Dielectric(model))
    }

    fn evaluate(&self, cos_theta_i: Float) -> Spectrum {
        Spectrum::new(fr_dielectric(cos_theta_i, self.eta_i, self.eta_t))
    }
}

/// Fresnel reflectance between a dielectric and a conductor.
pub struct FresnelConductor {
    /// Refractive index of the incident medium.
    eta_i: Spectrum,

    /// Refractive index of the conductor.
    eta_t: Spectrum,

    /// Absorption coefficient of the conductor.
    k: Spectrum,
}

impl FresnelConductor {
    /// Allocates a new `FresnelConductor` in the arena.
    ///
    /// * `arena` - The arena for allocations.
    /// * `eta_i` - Refractive index of the incident medium.
    /// * `eta_t` - Refractive index of the conductor.
    /// * `k`     - Absorption coefficient of the conductor.
    pub fn alloc<'arena>(
        arena: &'arena Bump,
        eta_i: Spectrum,
        eta_t: Spectrum,
        k: Spectrum,
    ) -> &'arena mut Fresnel<'arena> {
        let model = arena.alloc(Self { eta_i, eta_t, k });
        arena.alloc(Fresnel::Conductor(model))
    }

    fn evaluate(&self, cos_theta_i: Float) -> Spectrum {
        fr_conductor(abs(cos_theta_i), self.eta_i, self.eta_t, self.k)
    }
}

/// Returns the unpolarized Fresnel reflectance between two dielectrics.
/// A negative cosine marks a ray arriving from inside the medium, in which
/// case the indices are swapped. Total internal reflection returns 1.
///
/// * `cos_theta_i` - Cosine of the angle of incidence.
/// * `eta_i`       - Refractive index of the incident medium.
/// * `eta_t`       - Refractive index of the transmitted medium.
pub fn fr_dielectric(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let mut cos_theta_i = clamp(cos_theta_i, -1.0, 1.0);

    let entering = cos_theta_i > 0.0;
    let (eta_i, eta_t) = if entering { (eta_i, eta_t) } else { (eta_t, eta_i) };
    if !entering {
        cos_theta_i = abs(cos_theta_i);
    }

    // Compute the transmitted angle using Snell's law.
    let sin_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i).sqrt();
    let sin_theta_t = eta_i / eta_t * sin_theta_i;

    // Total internal reflection.
    if sin_theta_t >= 1.0 {
        return 1.0;
    }

    let cos_theta_t = max(0.0, 1.0 - sin_theta_t * sin_theta_t).sqrt();
    let r_parl = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
        / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
    let r_perp = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
        / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
    (r_parl * r_parl + r_perp * r_perp) / 2.0
}

/// Returns the unpolarized Fresnel reflectance between a dielectric and a
/// conductor.
///
/// * `cos_theta_i` - Cosine of the angle of incidence.
/// * `eta_i`       - Refractive index of the incident medium.
/// * `eta_t`       - Refractive index of the conductor.
/// * `k`           - Absorption coefficient of the conductor.
pub fn fr_conductor(cos_theta_i: Float, eta_i: Spectrum, eta_t: Spectrum, k: Spectrum) -> Spectrum {
    let cos_theta_i = clamp(cos_theta_i, -1.0, 1.0);
    let eta = eta_t / eta_i;
    let eta_k = k / eta_i;

    let cos_theta_i2 = cos_theta_i * cos_theta_i;
    let sin_theta_i2 = 1.0 - cos_theta_i2;
    let eta_2 = eta * eta;
    let eta_k2 = eta_k * eta_k;

    let t0 = eta_2 - eta_k2 - Spectrum::new(sin_theta_i2);
    let a2_plus_b2 = (t0 * t0 + 4.0 * eta_2 * eta_k2).sqrt();
    let t1 = a2_plus_b2 + Spectrum::new(cos_theta_i2);
    let a = ((a2_plus_b2 + t0) * 0.5).sqrt();
    let t2 = (2.0 * cos_theta_i) * a;
    let rs = (t1 - t2) / (t1 + t2);

    let t3 = cos_theta_i2 * a2_plus_b2 + Spectrum::new(sin_theta_i2 * sin_theta_i2);
    let t4 = t2 * sin_theta_i2;
    let rp = rs * ((t3 - t4) / (t3 + t4));

    0.5 * (rp + rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Rng;
    use float_cmp::approx_eq;

    #[test]
    fn dielectric_normal_incidence() {
        // ((n1 - n2) / (n1 + n2))^2 at normal incidence.
        let expected = ((1.0 - 1.5) / (1.0 + 1.5) as Float).powi(2);
        assert!(approx_eq!(
            Float,
            fr_dielectric(1.0, 1.0, 1.5),
            expected,
            epsilon = 1e-6
        ));
    }

    #[test]
    fn dielectric_total_internal_reflection() {
        // From glass to air beyond the critical angle.
        assert_eq!(fr_dielectric(-0.2, 1.0, 1.5), 1.0);
    }

    #[test]
    fn dielectric_grazing_incidence_is_one() {
        assert!(fr_dielectric(1e-6, 1.0, 1.5) > 0.99);
    }

    #[test]
    fn dielectric_stays_in_unit_interval() {
        let mut rng = Rng::new(2);
        for _ in 0..10000 {
            let cos_theta_i = 2.0 * rng.uniform_float() - 1.0;
            let fr = fr_dielectric(cos_theta_i, 1.0, 1.5);
            assert!((0.0..=1.0).contains(&fr));
        }
    }

    #[test]
    fn conductor_is_finite_and_non_negative() {
        let eta = Spectrum::from_rgb(0.2, 0.92, 1.1);
        let k = Spectrum::from_rgb(3.9, 2.45, 2.14);
        let mut rng = Rng::new(4);
        for _ in 0..10000 {
            let cos_theta_i = rng.uniform_float();
            let fr = fr_conductor(cos_theta_i, Spectrum::ONE, eta, k);
            for i in 0..3 {
                assert!(fr[i].is_finite());
                assert!(fr[i] >= 0.0);
            }
        }
    }

    #[test]
    fn arena_models_evaluate_like_the_free_functions() {
        let arena = Bump::new();
        let dielectric = FresnelDielectric::alloc(&arena, 1.0, 1.5);
        assert_eq!(
            dielectric.evaluate(0.8),
            Spectrum::new(fr_dielectric(0.8, 1.0, 1.5))
        );

        let eta = Spectrum::from_rgb(0.2, 0.92, 1.1);
        let k = Spectrum::from_rgb(3.9, 2.45, 2.14);
        let conductor = FresnelConductor::alloc(&arena, Spectrum::ONE, eta, k);
        assert_eq!(
            conductor.evaluate(-0.8),
            fr_conductor(0.8, Spectrum::ONE, eta, k)
        );
    }

    #[test]
    fn conductor_reflects_strongly_at_grazing() {
        let eta = Spectrum::from_rgb(0.2, 0.92, 1.1);
        let k = Spectrum::from_rgb(3.9, 2.45, 2.14);
        let fr = fr_conductor(0.01, Spectrum::ONE, eta, k);
        assert!(fr.y() > 0.9);
    }
}
