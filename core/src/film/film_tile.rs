//! Film tiles.

use crate::geometry::{Bounds2i, Point2i};
use crate::spectrum::Spectrum;

/// A rectangular region of film pixels a single worker renders into. Tiles
/// are merged into the film once rendering completes.
pub struct FilmTile {
    /// The pixel bounds covered by the tile.
    bounds: Bounds2i,

    /// The pixel values in row-major order.
    pixels: Vec<Spectrum>,
}

impl FilmTile {
    /// Creates a new tile with all pixels set to black.
    ///
    /// * `bounds` - The pixel bounds covered by the tile.
    pub fn new(bounds: Bounds2i) -> Self {
        Self {
            bounds,
            pixels: vec![Spectrum::ZERO; bounds.area() as usize],
        }
    }

    /// Returns the pixel bounds covered by the tile.
    pub fn bounds(&self) -> Bounds2i {
        self.bounds
    }

    /// Returns the offset of a pixel in the tile's storage.
    ///
    /// * `p` - The pixel in raster coordinates.
    fn offset(&self, p: &Point2i) -> usize {
        debug_assert!(self.bounds.contains_exclusive(p));
        ((p.y - self.bounds.p_min.y) * self.bounds.width() + (p.x - self.bounds.p_min.x)) as usize
    }

    /// Returns the value of a pixel.
    ///
    /// * `p` - The pixel in raster coordinates.
    pub fn get(&self, p: &Point2i) -> Spectrum {
        self.pixels[self.offset(p)]
    }

    /// Adds a contribution to a pixel.
    ///
    /// * `p` - The pixel in raster coordinates.
    /// * `v` - The contribution.
    pub fn add(&mut self, p: &Point2i, v: &Spectrum) {
        let offset = self.offset(p);
        self.pixels[offset] += *v;
    }
}
