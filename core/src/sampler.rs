//! Sampler interface.

use crate::base::*;
use crate::geometry::Point2f;

/// Interface for generating the sample values consumed during rendering.
pub trait Sampler: Send + Sync {
    /// Returns the next 1-D sample value.
    fn get_1d(&mut self) -> Float;

    /// Returns the next 2-D sample value.
    fn get_2d(&mut self) -> Point2f;

    /// Returns an independent sampler of the same kind seeded for a new
    /// stream. Tiles get one clone each so sample sequences never overlap.
    ///
    /// * `seed` - The seed for the new stream.
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler>;
}
