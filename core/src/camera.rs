//! Camera interface.

use crate::base::*;
use crate::geometry::{Point2f, Point2i, Ray};
use std::sync::Arc;

/// The film and lens values needed to generate a single camera ray.
#[derive(Copy, Clone, Debug, Default)]
pub struct CameraSample {
    /// Location on the film in raster coordinates.
    pub p_film: Point2f,

    /// Location on the lens in [0, 1)^2.
    pub p_lens: Point2f,
}

impl CameraSample {
    /// Creates a new camera sample.
    ///
    /// * `p_film` - Location on the film in raster coordinates.
    /// * `p_lens` - Location on the lens in [0, 1)^2.
    pub fn new(p_film: Point2f, p_lens: Point2f) -> Self {
        Self { p_film, p_lens }
    }
}

/// Interface for cameras.
pub trait Camera: Send + Sync {
    /// Returns a ray for the given sample along with its contribution weight.
    /// A weight of zero marks a sample the camera cannot realize; such rays
    /// must not be traced.
    ///
    /// * `sample` - The camera sample.
    fn generate_ray(&self, sample: &CameraSample) -> (Ray, Float);

    /// Returns the raster resolution of the camera's film.
    fn resolution(&self) -> Point2i;
}

/// Atomic reference counted `Camera`.
pub type ArcCamera = Arc<dyn Camera>;
