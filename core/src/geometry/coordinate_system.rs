//! Coordinate system from a single vector.

use crate::base::*;
use crate::geometry::Vector3f;

/// Completes a unit vector to an orthonormal basis and returns the two
/// remaining axes.
///
/// * `v1` - The unit vector.
pub fn coordinate_system(v1: &Vector3f) -> (Vector3f, Vector3f) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        Vector3f::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3f::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };
    let v3 = v1.cross(&v2);
    (v2, v3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn basis_is_orthonormal(
            x in -1.0f32..1.0, y in -1.0f32..1.0, z in 0.01f32..1.0,
        ) {
            let v1 = Vector3f::new(x, y, z).normalize();
            let (v2, v3) = coordinate_system(&v1);
            prop_assert!(abs(v2.length() - 1.0) < 1e-4);
            prop_assert!(abs(v3.length() - 1.0) < 1e-4);
            prop_assert!(abs(v1.dot(&v2)) < 1e-4);
            prop_assert!(abs(v1.dot(&v3)) < 1e-4);
            prop_assert!(abs(v2.dot(&v3)) < 1e-4);
        }
    }
}
