//! Shading frame and scatter record.

use crate::base::*;
use crate::geometry::{coordinate_system, Vector3f};
use crate::interaction::Intersection;
use crate::spectrum::Spectrum;

/// An orthonormal basis at a surface point with the shading normal as the
/// z-axis. Used to transform directions between world space and the shading
/// coordinate system.
#[derive(Copy, Clone, Debug)]
pub struct ShadingFrame {
    /// First tangent, the local x-axis.
    pub tangent: Vector3f,

    /// Second tangent, the local y-axis.
    pub binormal: Vector3f,

    /// The shading normal, the local z-axis.
    pub normal: Vector3f,
}

impl ShadingFrame {
    /// Creates a new frame around a normal.
    ///
    /// * `n` - The shading normal.
    pub fn new(n: Vector3f) -> Self {
        let normal = n.normalize();
        let (tangent, binormal) = coordinate_system(&normal);
        Self {
            tangent,
            binormal,
            normal,
        }
    }

    /// Transforms a world space direction into the shading coordinate system.
    ///
    /// * `v` - The direction.
    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(
            v.dot(&self.tangent),
            v.dot(&self.binormal),
            v.dot(&self.normal),
        )
    }

    /// Transforms a direction in the shading coordinate system back to world
    /// space.
    ///
    /// * `v` - The direction.
    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        self.tangent * v.x + self.binormal * v.y + self.normal * v.z
    }
}

/// The result of sampling a BSDF at a surface point. Directions are stored
/// in the shading coordinate system of `frame`.
#[derive(Copy, Clone)]
pub struct ScatterRecord {
    /// The shading frame at the surface point.
    pub frame: ShadingFrame,

    /// Outgoing direction, towards the viewer.
    pub wo: Vector3f,

    /// Sampled incident direction.
    pub wi: Vector3f,

    /// BSDF value for the sampled pair of directions.
    pub value: Spectrum,

    /// PDF of the sampled incident direction.
    pub pdf: Float,

    /// Absolute cosine between the incident direction and the normal.
    pub cos_theta: Float,
}

impl ScatterRecord {
    /// Creates a new record at an intersection with the outgoing direction
    /// already transformed into the shading frame.
    ///
    /// * `isect` - The surface intersection.
    pub fn new(isect: &Intersection) -> Self {
        let frame = ShadingFrame::new(isect.n);
        let wo = frame.to_local(&isect.wo.normalize());
        Self {
            frame,
            wo,
            wi: Vector3f::default(),
            value: Spectrum::ZERO,
            pdf: 0.0,
            cos_theta: 0.0,
        }
    }

    /// Returns the sampled incident direction in world space.
    pub fn world_incident(&self) -> Vector3f {
        self.frame.to_world(&self.wi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn frame_is_orthonormal(
            x in -1.0f32..1.0, y in -1.0f32..1.0, z in 0.01f32..1.0,
        ) {
            let frame = ShadingFrame::new(Vector3f::new(x, y, z));
            prop_assert!(abs(frame.tangent.length() - 1.0) < 1e-4);
            prop_assert!(abs(frame.binormal.length() - 1.0) < 1e-4);
            prop_assert!(abs(frame.normal.length() - 1.0) < 1e-4);
            prop_assert!(abs(frame.tangent.dot(&frame.binormal)) < 1e-4);
            prop_assert!(abs(frame.tangent.dot(&frame.normal)) < 1e-4);
            prop_assert!(abs(frame.binormal.dot(&frame.normal)) < 1e-4);
        }

        #[test]
        fn world_local_roundtrip(
            nx in -1.0f32..1.0, ny in -1.0f32..1.0, nz in 0.01f32..1.0,
            vx in -1.0f32..1.0, vy in -1.0f32..1.0, vz in -1.0f32..1.0,
        ) {
            prop_assume!(vx * vx + vy * vy + vz * vz > 1e-4);
            let frame = ShadingFrame::new(Vector3f::new(nx, ny, nz));
            let v = Vector3f::new(vx, vy, vz).normalize();
            let back = frame.to_world(&frame.to_local(&v));
            prop_assert!((back - v).length() < 1e-3);
        }

        #[test]
        fn normal_maps_to_local_z(
            x in -1.0f32..1.0, y in -1.0f32..1.0, z in 0.01f32..1.0,
        ) {
            let n = Vector3f::new(x, y, z);
            let frame = ShadingFrame::new(n);
            let local = frame.to_local(&n.normalize());
            prop_assert!(abs(local.x) < 1e-4);
            prop_assert!(abs(local.y) < 1e-4);
            prop_assert!(abs(local.z - 1.0) < 1e-4);
        }
    }
}
