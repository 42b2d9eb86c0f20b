//! Command line renderer.

#[macro_use]
extern crate log;

mod options;

use anyhow::Result;
use cameras::PerspectiveCamera;
use clap::Parser;
use core::film::Film;
use core::geometry::{Point2i, Point3f, Vector3f};
use core::integrator::{Integrator, SamplerIntegratorData};
use core::scene::{Primitive, Scene};
use core::spectrum::Spectrum;
use core::texture::ConstantTexture;
use integrators::PathIntegrator;
use materials::{DiffuseLight, Matte, Metal};
use options::Options;
use samplers::RandomSampler;
use shapes::Sphere;
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::init();

    let options = Options::parse();
    let threads = options.effective_threads();
    let resolution = Point2i::new(options.width, options.height);

    info!(
        "Rendering {}x{} at {} samples per pixel on {} threads",
        options.width, options.height, options.samples_per_pixel, threads
    );

    let camera = Arc::new(PerspectiveCamera::new(
        Point3f::new(0.0, 1.2, 7.0),
        Point3f::new(0.0, 0.5, 0.0),
        Vector3f::new(0.0, 1.0, 0.0),
        45.0,
        resolution,
    ));

    let integrator = PathIntegrator::new(SamplerIntegratorData::new(
        camera,
        Box::new(RandomSampler::new(options.seed)),
        options.max_depth,
        options.rr_depth,
        options.tile_size,
        options.samples_per_pixel,
        threads,
        options.seed,
    ));

    let scene = build_scene();
    let mut film = Film::new(resolution);
    integrator.render(&scene, &mut film)?;
    film.write_image(Path::new(&options.output))?;

    Ok(())
}

/// Builds the demo scene, a pair of spheres on a large ground sphere lit by
/// a spherical area light.
fn build_scene() -> Scene {
    let ground = Arc::new(Matte::new(Arc::new(ConstantTexture::new(
        Spectrum::from_rgb(0.55, 0.55, 0.5),
    ))));
    let red = Arc::new(Matte::new(Arc::new(ConstantTexture::new(
        Spectrum::from_rgb(0.65, 0.15, 0.12),
    ))));
    // Measured refractive index and absorption for gold.
    let gold = Arc::new(Metal::new(
        Arc::new(ConstantTexture::new(Spectrum::from_rgb(0.14, 0.37, 1.44))),
        Arc::new(ConstantTexture::new(Spectrum::from_rgb(3.98, 2.39, 1.6))),
        Arc::new(ConstantTexture::new(0.15)),
        Arc::new(ConstantTexture::new(0.15)),
        true,
    ));
    let light = Arc::new(DiffuseLight::new(Arc::new(ConstantTexture::new(
        Spectrum::new(10.0),
    ))));

    Scene::new(vec![
        Primitive::new(
            Arc::new(Sphere::new(Point3f::new(0.0, -100.0, 0.0), 100.0)),
            ground,
        ),
        Primitive::new(
            Arc::new(Sphere::new(Point3f::new(-1.1, 1.0, 0.0), 1.0)),
            gold,
        ),
        Primitive::new(Arc::new(Sphere::new(Point3f::new(1.1, 1.0, 0.0), 1.0)), red),
        Primitive::new(
            Arc::new(Sphere::new(Point3f::new(0.0, 6.5, 1.0), 2.5)),
            light,
        ),
    ])
}
