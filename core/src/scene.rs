//! Scene.

use crate::geometry::Ray;
use crate::interaction::Intersection;
use crate::material::ArcMaterial;
use crate::shape::ArcShape;
use std::sync::Arc;

/// A shape paired with its material.
#[derive(Clone)]
pub struct Primitive {
    /// The shape.
    pub shape: ArcShape,

    /// The material.
    pub material: ArcMaterial,
}

impl Primitive {
    /// Creates a new primitive.
    ///
    /// * `shape`    - The shape.
    /// * `material` - The material.
    pub fn new(shape: ArcShape, material: ArcMaterial) -> Self {
        Self { shape, material }
    }
}

/// The collection of primitives to render.
pub struct Scene {
    /// The primitives.
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Creates a new scene.
    ///
    /// * `primitives` - The primitives.
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    /// Returns the nearest intersection of a ray with the scene, or `None`
    /// when the ray escapes.
    ///
    /// * `ray` - The ray.
    pub fn is_intersect(&self, ray: &Ray) -> Option<Intersection> {
        let mut nearest: Option<Intersection> = None;
        let wo = -ray.d.normalize();

        for primitive in &self.primitives {
            if let Some(si) = primitive.shape.intersect(ray) {
                let closer = nearest.as_ref().map_or(true, |n| si.t < n.t);
                if closer {
                    nearest = Some(Intersection {
                        t: si.t,
                        p: si.p,
                        n: si.n,
                        wo,
                        uv: si.uv,
                        material: Arc::clone(&primitive.material),
                        shape: Arc::clone(&primitive.shape),
                    });
                }
            }
        }

        nearest
    }
}
