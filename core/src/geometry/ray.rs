//! Rays.

use crate::base::*;
use crate::geometry::{Point3f, Vector3f};

/// A ray with an origin, a direction and a validity interval. Once
/// constructed a ray is never mutated.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction.
    pub d: Vector3f,

    /// Maximum parametric distance along the ray.
    pub t_max: Float,
}

impl Ray {
    /// Creates a new ray with an unbounded interval.
    ///
    /// * `o` - Origin.
    /// * `d` - Direction.
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Self {
            o,
            d,
            t_max: INFINITY,
        }
    }

    /// Returns the point at the given parametric distance along the ray.
    ///
    /// * `t` - Parametric distance.
    pub fn at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}
