//! Rendering errors.

use thiserror::Error;

/// Errors raised while rendering or writing output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A tile worker panicked and produced no result.
    #[error("tile {0} failed during rendering")]
    TileFailed(usize),

    /// The output image could not be written.
    #[error("failed to write image: {0}")]
    ImageWrite(#[from] image::ImageError),
}
