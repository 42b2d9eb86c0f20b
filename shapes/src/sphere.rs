//! Spheres.

use core::base::*;
use core::geometry::{Point2f, Point3f, Ray};
use core::shape::{Shape, ShapeIntersection, SHADOW_EPSILON};

/// A sphere described by its center and radius.
pub struct Sphere {
    /// The center.
    center: Point3f,

    /// The radius.
    radius: Float,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// * `center` - The center.
    /// * `radius` - The radius.
    pub fn new(center: Point3f, radius: Float) -> Self {
        debug_assert!(radius > 0.0);
        Self { center, radius }
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<ShapeIntersection> {
        let oc = ray.o - self.center;
        let a = ray.d.length_squared();
        let half_b = oc.dot(&ray.d);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        // Prefer the nearer root inside the ray's interval.
        let mut t = (-half_b - sqrt_d) / a;
        if t < SHADOW_EPSILON || t > ray.t_max {
            t = (-half_b + sqrt_d) / a;
            if t < SHADOW_EPSILON || t > ray.t_max {
                return None;
            }
        }

        let p = ray.at(t);
        let n = ((p - self.center) / self.radius).normalize();

        // Spherical surface parameterization.
        let theta = clamp(n.z, -1.0, 1.0).acos();
        let phi = n.y.atan2(n.x) + PI;
        let uv = Point2f::new(phi * INV_TWO_PI, theta * INV_PI);

        Some(ShapeIntersection { t, p, n, uv })
    }
}
