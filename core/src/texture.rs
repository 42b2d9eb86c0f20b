//! Texture interface.

use crate::geometry::Point2f;
use std::sync::Arc;

/// Interface for evaluating a value at a surface parameterization.
pub trait Texture<T>: Send + Sync {
    /// Returns the value at the given (u, v) coordinates.
    ///
    /// * `uv` - The surface parameterization.
    fn evaluate(&self, uv: &Point2f) -> T;
}

/// Atomic reference counted `Texture`.
pub type ArcTexture<T> = Arc<dyn Texture<T>>;

/// A texture that returns the same value everywhere.
#[derive(Copy, Clone, Debug)]
pub struct ConstantTexture<T> {
    /// The value.
    value: T,
}

impl<T: Copy + Send + Sync> ConstantTexture<T> {
    /// Creates a new constant texture.
    ///
    /// * `value` - The value.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Copy + Send + Sync> Texture<T> for ConstantTexture<T> {
    fn evaluate(&self, _uv: &Point2f) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::Spectrum;

    #[test]
    fn constant_texture_ignores_uv() {
        let tex = ConstantTexture::new(Spectrum::from_rgb(0.1, 0.2, 0.3));
        let a = tex.evaluate(&Point2f::new(0.0, 0.0));
        let b = tex.evaluate(&Point2f::new(0.7, 0.3));
        assert_eq!(a, b);
    }
}
