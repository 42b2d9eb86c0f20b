//! Functions on directions in the shading coordinate system, where the
//! surface normal is the z-axis.

use crate::base::*;
use crate::geometry::Vector3f;

/// Cosine of the angle between a direction and the shading normal.
///
/// * `w` - The direction.
#[inline(always)]
pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}

/// Square of the cosine of the angle between a direction and the shading
/// normal.
///
/// * `w` - The direction.
#[inline(always)]
pub fn cos_2_theta(w: &Vector3f) -> Float {
    w.z * w.z
}

/// Absolute value of the cosine of the angle between a direction and the
/// shading normal.
///
/// * `w` - The direction.
#[inline(always)]
pub fn abs_cos_theta(w: &Vector3f) -> Float {
    abs(w.z)
}

/// Square of the sine of the angle between a direction and the shading
/// normal.
///
/// * `w` - The direction.
#[inline(always)]
pub fn sin_2_theta(w: &Vector3f) -> Float {
    max(0.0, 1.0 - cos_2_theta(w))
}

/// Sine of the angle between a direction and the shading normal.
///
/// * `w` - The direction.
#[inline(always)]
pub fn sin_theta(w: &Vector3f) -> Float {
    sin_2_theta(w).sqrt()
}

/// Tangent of the angle between a direction and the shading normal.
///
/// * `w` - The direction.
#[inline(always)]
pub fn tan_theta(w: &Vector3f) -> Float {
    sin_theta(w) / cos_theta(w)
}

/// Square of the tangent of the angle between a direction and the shading
/// normal.
///
/// * `w` - The direction.
#[inline(always)]
pub fn tan_2_theta(w: &Vector3f) -> Float {
    sin_2_theta(w) / cos_2_theta(w)
}

/// Cosine of the azimuthal angle of a direction.
///
/// * `w` - The direction.
#[inline(always)]
pub fn cos_phi(w: &Vector3f) -> Float {
    let s = sin_theta(w);
    if s == 0.0 {
        1.0
    } else {
        clamp(w.x / s, -1.0, 1.0)
    }
}

/// Sine of the azimuthal angle of a direction.
///
/// * `w` - The direction.
#[inline(always)]
pub fn sin_phi(w: &Vector3f) -> Float {
    let s = sin_theta(w);
    if s == 0.0 {
        0.0
    } else {
        clamp(w.y / s, -1.0, 1.0)
    }
}

/// Square of the cosine of the azimuthal angle of a direction.
///
/// * `w` - The direction.
#[inline(always)]
pub fn cos_2_phi(w: &Vector3f) -> Float {
    cos_phi(w) * cos_phi(w)
}

/// Square of the sine of the azimuthal angle of a direction.
///
/// * `w` - The direction.
#[inline(always)]
pub fn sin_2_phi(w: &Vector3f) -> Float {
    sin_phi(w) * sin_phi(w)
}

/// Returns true if two directions lie in the same hemisphere.
///
/// * `w`  - First direction.
/// * `wp` - Second direction.
#[inline(always)]
pub fn same_hemisphere(w: &Vector3f, wp: &Vector3f) -> bool {
    w.z * wp.z > 0.0
}

/// Reflects a direction about a normal.
///
/// * `wo` - The direction.
/// * `n`  - The normal.
#[inline(always)]
pub fn reflect(wo: &Vector3f, n: &Vector3f) -> Vector3f {
    -*wo + 2.0 * wo.dot(n) * *n
}

/// Builds a direction from spherical coordinates.
///
/// * `sin_theta` - Sine of the polar angle.
/// * `cos_theta` - Cosine of the polar angle.
/// * `phi`       - Azimuthal angle.
#[inline(always)]
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn trig_identities() {
        let w = Vector3f::new(0.3, -0.4, 0.5).normalize();
        assert!(approx_eq!(
            Float,
            cos_2_theta(&w) + sin_2_theta(&w),
            1.0,
            epsilon = 1e-5
        ));
        assert!(approx_eq!(
            Float,
            cos_2_phi(&w) + sin_2_phi(&w),
            1.0,
            epsilon = 1e-4
        ));
    }

    #[test]
    fn phi_at_pole_is_defined() {
        let w = Vector3f::new(0.0, 0.0, 1.0);
        assert_eq!(cos_phi(&w), 1.0);
        assert_eq!(sin_phi(&w), 0.0);
    }

    #[test]
    fn reflect_preserves_angle() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let wo = Vector3f::new(1.0, 0.0, 1.0).normalize();
        let wi = reflect(&wo, &n);
        assert!(approx_eq!(Float, wi.z, wo.z, epsilon = 1e-6));
        assert!(approx_eq!(Float, wi.x, -wo.x, epsilon = 1e-6));
        assert!(same_hemisphere(&wo, &wi));
    }
}
