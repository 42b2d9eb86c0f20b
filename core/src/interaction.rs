//! Surface intersections.

use crate::base::*;
use crate::geometry::{Point2f, Point3f, Vector3f};
use crate::material::ArcMaterial;
use crate::shape::ArcShape;

/// A ray-scene intersection carrying everything needed for shading.
#[derive(Clone)]
pub struct Intersection {
    /// Parametric distance along the ray.
    pub t: Float,

    /// Surface point.
    pub p: Point3f,

    /// Outward unit surface normal.
    pub n: Vector3f,

    /// Unit vector towards the ray origin.
    pub wo: Vector3f,

    /// Surface parameterization.
    pub uv: Point2f,

    /// The material at the surface.
    pub material: ArcMaterial,

    /// The shape that was hit.
    pub shape: ArcShape,
}
