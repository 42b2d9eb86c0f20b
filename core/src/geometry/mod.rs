//! Geometry

mod bounds2;
mod coordinate_system;
mod point2;
mod point3;
mod ray;
mod vector3;

pub use bounds2::*;
pub use coordinate_system::*;
pub use point2::*;
pub use point3::*;
pub use ray::*;
pub use vector3::*;
