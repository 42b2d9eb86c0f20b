//! Materials

mod diffuse_light;
mod matte;
mod metal;

pub use diffuse_light::DiffuseLight;
pub use matte::Matte;
pub use metal::Metal;
