//! Film

mod film_tile;

use crate::base::*;
use crate::error::RenderError;
use crate::geometry::{Bounds2i, Point2i};
use crate::spectrum::Spectrum;
use std::path::Path;

pub use film_tile::FilmTile;

/// Controls how tile pixels combine with existing film pixels when a tile is
/// merged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MergeMode {
    /// Tile pixels overwrite film pixels.
    Replace,

    /// Tile pixels add to film pixels, for progressive accumulation across
    /// passes.
    Accumulate,
}

/// The full-resolution image being rendered.
pub struct Film {
    /// The raster resolution.
    resolution: Point2i,

    /// The pixel values in row-major order.
    pixels: Vec<Spectrum>,
}

impl Film {
    /// Creates a new film with all pixels set to black.
    ///
    /// * `resolution` - The raster resolution.
    pub fn new(resolution: Point2i) -> Self {
        Self {
            resolution,
            pixels: vec![Spectrum::ZERO; (resolution.x * resolution.y) as usize],
        }
    }

    /// Returns the raster resolution.
    pub fn resolution(&self) -> Point2i {
        self.resolution
    }

    /// Returns the bounds covering every pixel.
    pub fn bounds(&self) -> Bounds2i {
        Bounds2i::new(Point2i::new(0, 0), self.resolution)
    }

    fn offset(&self, x: Int, y: Int) -> usize {
        debug_assert!(x >= 0 && x < self.resolution.x);
        debug_assert!(y >= 0 && y < self.resolution.y);
        (y * self.resolution.x + x) as usize
    }

    /// Returns the value of a pixel.
    ///
    /// * `x` - The pixel column.
    /// * `y` - The pixel row.
    pub fn get(&self, x: Int, y: Int) -> Spectrum {
        self.pixels[self.offset(x, y)]
    }

    /// Sets the value of a pixel.
    ///
    /// * `x` - The pixel column.
    /// * `y` - The pixel row.
    /// * `v` - The value.
    pub fn set(&mut self, x: Int, y: Int, v: Spectrum) {
        let offset = self.offset(x, y);
        self.pixels[offset] = v;
    }

    /// Merges a finished tile into the film.
    ///
    /// * `tile` - The tile.
    /// * `mode` - How tile pixels combine with film pixels.
    pub fn merge_tile(&mut self, tile: &FilmTile, mode: MergeMode) {
        for p in tile.bounds() {
            let v = tile.get(&p);
            match mode {
                MergeMode::Replace => self.set(p.x, p.y, v),
                MergeMode::Accumulate => {
                    let existing = self.get(p.x, p.y);
                    self.set(p.x, p.y, existing + v);
                }
            }
        }
    }

    /// Writes the film to a PNG file with gamma correction applied.
    ///
    /// * `path` - The output path.
    pub fn write_image(&self, path: &Path) -> Result<(), RenderError> {
        let mut image = image::RgbImage::new(self.resolution.x as u32, self.resolution.y as u32);
        for p in self.bounds() {
            let v = self.get(p.x, p.y).clamp(0.0, 1.0);
            let pixel = image::Rgb([
                (v[0].powf(1.0 / 2.2) * 255.0) as u8,
                (v[1].powf(1.0 / 2.2) * 255.0) as u8,
                (v[2].powf(1.0 / 2.2) * 255.0) as u8,
            ]);
            image.put_pixel(p.x as u32, p.y as u32, pixel);
        }
        image.save(path)?;
        info!("Wrote image to {}", path.display());
        Ok(())
    }
}
