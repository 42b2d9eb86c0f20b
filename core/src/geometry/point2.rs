//! 2-D points.

use crate::base::*;

/// A 2-D point with single precision coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2f {
    /// X-coordinate.
    pub x: Float,

    /// Y-coordinate.
    pub y: Float,
}

impl Point2f {
    /// Creates a new point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
}

/// A 2-D point with integer coordinates, used for raster locations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2i {
    /// X-coordinate.
    pub x: Int,

    /// Y-coordinate.
    pub y: Int,
}

impl Point2i {
    /// Creates a new point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: Int, y: Int) -> Self {
        Self { x, y }
    }
}
