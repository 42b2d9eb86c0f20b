//! Command line options.

use clap::Parser;
use core::base::Int;

/// A tile-parallel path tracer.
// No `version` attribute. The `core` dependency shadows libcore in this
// crate's extern prelude and clap expands `version` to `core::env` paths.
#[derive(Parser)]
#[command(name = "talbot", about)]
pub struct Options {
    /// Image width in pixels.
    #[arg(long, default_value_t = 640)]
    pub width: Int,

    /// Image height in pixels.
    #[arg(long, default_value_t = 480)]
    pub height: Int,

    /// Number of radiance samples per subpixel.
    #[arg(long = "spp", default_value_t = 64)]
    pub samples_per_pixel: usize,

    /// Side of the square film tiles.
    #[arg(long, default_value_t = 64)]
    pub tile_size: Int,

    /// Maximum path length.
    #[arg(long, default_value_t = 15)]
    pub max_depth: usize,

    /// Path length after which Russian roulette termination starts.
    #[arg(long, default_value_t = 10)]
    pub rr_depth: usize,

    /// Number of worker threads. 0 uses all available cores.
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Base seed for the per-tile samplers.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Output image path.
    #[arg(long, default_value = "render.png")]
    pub output: String,
}

impl Options {
    /// Returns the number of worker threads to use, resolving 0 to the
    /// available parallelism.
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            self.threads
        }
    }
}
