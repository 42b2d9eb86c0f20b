//! 2-D axis aligned bounding boxes.

use crate::base::*;
use crate::geometry::Point2i;

/// A 2-D integer bounding box. The lower bound is inclusive and the upper
/// bound is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bounds2i {
    /// Minimum bound.
    pub p_min: Point2i,

    /// Maximum bound.
    pub p_max: Point2i,
}

impl Bounds2i {
    /// Creates a new bounding box.
    ///
    /// * `p_min` - Minimum bound.
    /// * `p_max` - Maximum bound.
    pub fn new(p_min: Point2i, p_max: Point2i) -> Self {
        Self { p_min, p_max }
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> Int {
        (self.p_max.x - self.p_min.x).max(0)
    }

    /// Returns the height of the bounding box.
    pub fn height(&self) -> Int {
        (self.p_max.y - self.p_min.y).max(0)
    }

    /// Returns the number of raster locations covered.
    pub fn area(&self) -> Int {
        self.width() * self.height()
    }

    /// Returns true if the bounding box covers no raster locations.
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Returns true if a point lies inside the bounding box. The upper bound
    /// is excluded.
    ///
    /// * `p` - The point.
    pub fn contains_exclusive(&self, p: &Point2i) -> bool {
        p.x >= self.p_min.x && p.x < self.p_max.x && p.y >= self.p_min.y && p.y < self.p_max.y
    }
}

impl IntoIterator for Bounds2i {
    type Item = Point2i;
    type IntoIter = Bounds2iIterator;

    /// Iterates over the covered raster locations in row-major order.
    fn into_iter(self) -> Self::IntoIter {
        Bounds2iIterator {
            bounds: self,
            x: self.p_min.x,
            y: self.p_min.y,
        }
    }
}

/// Iterator over the raster locations of a `Bounds2i`.
pub struct Bounds2iIterator {
    bounds: Bounds2i,
    x: Int,
    y: Int,
}

impl Iterator for Bounds2iIterator {
    type Item = Point2i;

    fn next(&mut self) -> Option<Point2i> {
        if self.bounds.p_min.x >= self.bounds.p_max.x || self.y >= self.bounds.p_max.y {
            return None;
        }
        let p = Point2i::new(self.x, self.y);
        self.x += 1;
        if self.x >= self.bounds.p_max.x {
            self.x = self.bounds.p_min.x;
            self.y += 1;
        }
        Some(p)
    }
}
