//! Shape interface.

use crate::base::*;
use crate::geometry::{Point2f, Point3f, Ray, Vector3f};
use std::sync::Arc;

/// Shapes reject hits closer than this to avoid re-intersecting the surface
/// a ray was spawned from.
pub const SHADOW_EPSILON: Float = 1e-3;

/// The geometric result of a ray-shape intersection.
#[derive(Copy, Clone, Debug)]
pub struct ShapeIntersection {
    /// Parametric distance along the ray.
    pub t: Float,

    /// Surface point.
    pub p: Point3f,

    /// Outward unit surface normal.
    pub n: Vector3f,

    /// Surface parameterization.
    pub uv: Point2f,
}

/// Interface for geometric shapes.
pub trait Shape: Send + Sync {
    /// Returns the nearest intersection of a ray with the shape inside the
    /// ray's validity interval, or `None` when the ray misses.
    ///
    /// * `ray` - The ray.
    fn intersect(&self, ray: &Ray) -> Option<ShapeIntersection>;
}

/// Atomic reference counted `Shape`.
pub type ArcShape = Arc<dyn Shape>;
