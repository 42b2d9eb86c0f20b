//! Sampling functions.

use crate::base::*;
use crate::geometry::{Point2f, Vector3f};

/// Maps a uniform random sample to a point on the unit disk using Shirley's
/// concentric mapping.
///
/// * `u` - The random sample in [0, 1)^2.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map to [-1, 1]^2.
    let ox = 2.0 * u.x - 1.0;
    let oy = 2.0 * u.y - 1.0;

    // Handle degeneracy at the origin.
    if ox == 0.0 && oy == 0.0 {
        return Point2f::new(0.0, 0.0);
    }

    let (r, theta) = if abs(ox) > abs(oy) {
        (ox, PI_OVER_FOUR * (oy / ox))
    } else {
        (oy, PI_OVER_TWO - PI_OVER_FOUR * (ox / oy))
    };
    Point2f::new(r * theta.cos(), r * theta.sin())
}

/// Maps a uniform random sample to a cosine-weighted direction in the
/// hemisphere around +z.
///
/// * `u` - The random sample in [0, 1)^2.
pub fn cosine_sample_hemisphere(u: &Point2f) -> Vector3f {
    let d = concentric_sample_disk(u);
    let z = max(0.0, 1.0 - d.x * d.x - d.y * d.y).sqrt();
    Vector3f::new(d.x, d.y, z)
}

/// Returns the PDF of `cosine_sample_hemisphere` for a direction with the
/// given cosine.
///
/// * `cos_theta` - Cosine of the angle to +z.
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

/// Maps a uniform random sample to a uniformly distributed direction in the
/// hemisphere around +z.
///
/// * `u` - The random sample in [0, 1)^2.
pub fn uniform_sample_hemisphere(u: &Point2f) -> Vector3f {
    let z = u.x;
    let r = max(0.0, 1.0 - z * z).sqrt();
    let phi = TWO_PI * u.y;
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Returns the PDF of `uniform_sample_hemisphere`.
pub fn uniform_hemisphere_pdf() -> Float {
    INV_TWO_PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn disk_samples_stay_inside_unit_disk() {
        let mut rng = Rng::new(3);
        for _ in 0..10000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let d = concentric_sample_disk(&u);
            assert!(d.x * d.x + d.y * d.y <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn cosine_samples_lie_in_upper_hemisphere() {
        let mut rng = Rng::new(5);
        for _ in 0..10000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let w = cosine_sample_hemisphere(&u);
            assert!(w.z >= 0.0);
            assert!(abs(w.length() - 1.0) < 1e-3);
        }
    }

    #[test]
    fn uniform_hemisphere_estimates_projected_area() {
        // Monte Carlo estimate of the integral of cos(theta) over the
        // hemisphere, which is pi.
        let mut rng = Rng::new(11);
        let n = 100_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let w = uniform_sample_hemisphere(&u);
            sum += w.z / uniform_hemisphere_pdf();
        }
        let estimate = sum / n as Float;
        assert!(abs(estimate - PI) < 0.05);
    }
}
