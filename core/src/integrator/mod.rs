//! Integrator interfaces and the tile-parallel rendering harness.

use crate::base::*;
use crate::camera::{ArcCamera, CameraSample};
use crate::error::RenderError;
use crate::film::{Film, FilmTile, MergeMode};
use crate::geometry::{Bounds2i, Point2f, Point2i, Ray};
use crate::sampler::Sampler;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use indicatif::{ProgressBar, ProgressStyle};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

/// Number of times a pixel sample is retried when the camera rejects it
/// before the sample is dropped.
pub const MAX_CAMERA_SAMPLE_ATTEMPTS: usize = 8;

/// Side of the subpixel grid rendered for every pixel.
const SUBPIXEL_GRID: usize = 2;

/// Models an integrator that renders a scene to a film.
pub trait Integrator: Send + Sync {
    /// Renders the scene and merges the result into the film.
    ///
    /// * `scene` - The scene.
    /// * `film`  - The film to render into.
    fn render(&self, scene: &Scene, film: &mut Film) -> Result<(), RenderError>;

    /// Returns the incident radiance along a ray.
    ///
    /// * `ray`     - The ray.
    /// * `scene`   - The scene.
    /// * `sampler` - The sampler for random values.
    fn li(&self, ray: &Ray, scene: &Scene, sampler: &mut dyn Sampler) -> Spectrum;
}

/// Common data for sampler integrators.
pub struct SamplerIntegratorData {
    /// The camera.
    pub camera: ArcCamera,

    /// Prototype sampler, cloned with a distinct seed for every tile.
    pub sampler: Box<dyn Sampler>,

    /// Maximum path length.
    pub max_depth: usize,

    /// Path length after which Russian roulette termination starts.
    pub rr_depth: usize,

    /// Side of the square tiles the film is split into.
    pub tile_size: Int,

    /// Number of radiance samples per subpixel.
    pub samples_per_pixel: usize,

    /// Number of worker threads.
    pub threads: usize,

    /// Base seed for the per-tile samplers.
    pub seed: u64,
}

impl SamplerIntegratorData {
    /// Creates a new `SamplerIntegratorData`.
    ///
    /// * `camera`            - The camera.
    /// * `sampler`           - Prototype sampler.
    /// * `max_depth`         - Maximum path length.
    /// * `rr_depth`          - Path length after which Russian roulette starts.
    /// * `tile_size`         - Side of the square tiles.
    /// * `samples_per_pixel` - Number of radiance samples per subpixel.
    /// * `threads`           - Number of worker threads.
    /// * `seed`              - Base seed for the per-tile samplers.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        camera: ArcCamera,
        sampler: Box<dyn Sampler>,
        max_depth: usize,
        rr_depth: usize,
        tile_size: Int,
        samples_per_pixel: usize,
        threads: usize,
        seed: u64,
    ) -> Self {
        Self {
            camera,
            sampler,
            max_depth,
            rr_depth,
            tile_size: tile_size.max(1),
            samples_per_pixel: samples_per_pixel.max(1),
            threads: threads.max(1),
            seed,
        }
    }
}

/// Models an integrator that splits the film into tiles and renders them on
/// a pool of worker threads.
pub trait SamplerIntegrator: Integrator {
    /// Returns the common data.
    fn get_data(&self) -> &SamplerIntegratorData;

    /// Renders the scene tile by tile and merges the finished tiles into the
    /// film in tile submission order. A tile whose worker panicked is
    /// reported as an error after all other tiles complete.
    ///
    /// * `scene` - The scene.
    /// * `film`  - The film to render into.
    fn render(&self, scene: &Scene, film: &mut Film) -> Result<(), RenderError> {
        let data = self.get_data();
        let resolution = data.camera.resolution();
        let tiles = tile_bounds(&resolution, data.tile_size);
        let n_tiles = tiles.len();

        info!(
            "Rendering {} tiles of {}x{} pixels on {} threads",
            n_tiles, data.tile_size, data.tile_size, data.threads
        );
        let progress = create_progress_bar(n_tiles as u64);

        let mut results: Vec<Option<FilmTile>> =
            std::iter::repeat_with(|| None).take(n_tiles).collect();

        thread::scope(|scope| {
            let (work_tx, work_rx) = crossbeam_channel::bounded::<usize>(n_tiles);
            let (done_tx, done_rx) = crossbeam_channel::unbounded::<(usize, Option<FilmTile>)>();
            let tiles = &tiles;
            let progress = &progress;

            for _ in 0..data.threads {
                let work_rx = work_rx.clone();
                let done_tx = done_tx.clone();
                scope.spawn(move || {
                    for tile_idx in work_rx.iter() {
                        let tile = catch_unwind(AssertUnwindSafe(|| {
                            self.render_tile(tile_idx, tiles[tile_idx], scene)
                        }))
                        .ok();
                        if tile.is_none() {
                            error!("Tile {} panicked", tile_idx);
                        }
                        progress.inc(1);
                        if done_tx.send((tile_idx, tile)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(work_rx);
            drop(done_tx);

            for tile_idx in 0..n_tiles {
                if work_tx.send(tile_idx).is_err() {
                    break;
                }
            }
            drop(work_tx);

            // Collect every tile before merging anything so film updates
            // never interleave with rendering.
            for (tile_idx, tile) in done_rx.iter() {
                results[tile_idx] = tile;
            }
        });

        progress.finish();

        for (tile_idx, slot) in results.iter().enumerate() {
            let tile = slot.as_ref().ok_or(RenderError::TileFailed(tile_idx))?;
            film.merge_tile(tile, MergeMode::Replace);
        }

        Ok(())
    }

    /// Renders a single tile with a sampler seeded for that tile.
    ///
    /// * `tile_idx` - Index of the tile in submission order.
    /// * `bounds`   - The pixel bounds of the tile.
    /// * `scene`    - The scene.
    fn render_tile(&self, tile_idx: usize, bounds: Bounds2i, scene: &Scene) -> FilmTile {
        let data = self.get_data();
        let mut sampler = data.sampler.clone_sampler(data.seed + tile_idx as u64);
        let mut tile = FilmTile::new(bounds);

        debug!("Starting tile {}: {:?}", tile_idx, bounds);

        let spp = data.samples_per_pixel;
        let subpixel_weight = 1.0 / (SUBPIXEL_GRID * SUBPIXEL_GRID) as Float;

        for pixel in bounds {
            for sy in 0..SUBPIXEL_GRID {
                for sx in 0..SUBPIXEL_GRID {
                    // Fixed subpixel locations at the centers of a regular grid.
                    let p_film = Point2f::new(
                        pixel.x as Float + (sx as Float + 0.5) / SUBPIXEL_GRID as Float,
                        pixel.y as Float + (sy as Float + 0.5) / SUBPIXEL_GRID as Float,
                    );

                    let mut radiance = Spectrum::ZERO;
                    for _ in 0..spp {
                        let sample = match generate_camera_ray(
                            data.camera.as_ref(),
                            &p_film,
                            sampler.as_mut(),
                        ) {
                            Some(s) => s,
                            None => continue,
                        };
                        let (ray, weight) = sample;

                        let mut l = self.li(&ray, scene, sampler.as_mut()) * weight;

                        // Scrub values that would corrupt the image.
                        if l.has_nans() {
                            error!(
                                "NaN radiance for pixel ({}, {}), setting to black",
                                pixel.x, pixel.y
                            );
                            l = Spectrum::ZERO;
                        } else if l.y() < 0.0 {
                            error!(
                                "Negative luminance {} for pixel ({}, {}), setting to black",
                                l.y(),
                                pixel.x,
                                pixel.y
                            );
                            l = Spectrum::ZERO;
                        } else if l.y().is_infinite() {
                            error!(
                                "Infinite luminance for pixel ({}, {}), setting to black",
                                pixel.x, pixel.y
                            );
                            l = Spectrum::ZERO;
                        }

                        radiance += l / spp as Float;
                    }

                    tile.add(&pixel, &(radiance.clamp(0.0, 1.0) * subpixel_weight));
                }
            }
        }

        tile
    }
}

/// Generates a camera ray for a film location, retrying a bounded number of
/// times when the camera rejects the sample with a zero weight.
///
/// * `camera`  - The camera.
/// * `p_film`  - The film location in raster coordinates.
/// * `sampler` - The sampler for lens values.
pub fn generate_camera_ray(
    camera: &dyn crate::camera::Camera,
    p_film: &Point2f,
    sampler: &mut dyn Sampler,
) -> Option<(Ray, Float)> {
    for _ in 0..MAX_CAMERA_SAMPLE_ATTEMPTS {
        let sample = CameraSample::new(*p_film, sampler.get_2d());
        let (ray, weight) = camera.generate_ray(&sample);
        if weight > 0.0 {
            return Some((ray, weight));
        }
    }
    warn!(
        "No valid camera ray for film location ({}, {})",
        p_film.x, p_film.y
    );
    None
}

/// Splits the film into square tiles in row-major order. Tiles at the right
/// and bottom edges are clipped to the resolution.
///
/// * `resolution` - The raster resolution.
/// * `tile_size`  - Side of the square tiles.
pub fn tile_bounds(resolution: &Point2i, tile_size: Int) -> Vec<Bounds2i> {
    debug_assert!(tile_size > 0);

    let mut tiles = vec![];
    let mut y = 0;
    while y < resolution.y {
        let mut x = 0;
        while x < resolution.x {
            tiles.push(Bounds2i::new(
                Point2i::new(x, y),
                Point2i::new((x + tile_size).min(resolution.x), (y + tile_size).min(resolution.y)),
            ));
            x += tile_size;
        }
        y += tile_size;
    }
    tiles
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let progress = ProgressBar::new(len);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tiles")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    progress
}
