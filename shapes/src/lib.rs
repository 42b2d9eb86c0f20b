//! Shapes

mod sphere;

pub use sphere::Sphere;
