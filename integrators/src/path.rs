//! Path tracing integrator.

use bumpalo::Bump;
use core::base::*;
use core::bsdf::ScatterRecord;
use core::error::RenderError;
use core::film::Film;
use core::geometry::Ray;
use core::integrator::{Integrator, SamplerIntegrator, SamplerIntegratorData};
use core::sampler::Sampler;
use core::scene::Scene;
use core::spectrum::Spectrum;
use std::sync::Arc;

/// Implements unidirectional path tracing. Paths start at the camera,
/// scatter off surfaces by importance sampling their BSDFs and terminate
/// when they hit an emitter, escape the scene or lose the Russian roulette.
pub struct PathIntegrator {
    /// Common data for sampler integrators.
    data: SamplerIntegratorData,
}

impl PathIntegrator {
    /// Creates a new `PathIntegrator`.
    ///
    /// * `data` - Common data for sampler integrators.
    pub fn new(data: SamplerIntegratorData) -> Self {
        Self { data }
    }
}

impl SamplerIntegrator for PathIntegrator {
    fn get_data(&self) -> &SamplerIntegratorData {
        &self.data
    }
}

impl Integrator for PathIntegrator {
    fn render(&self, scene: &Scene, film: &mut Film) -> Result<(), RenderError> {
        SamplerIntegrator::render(self, scene, film)
    }

    fn li(&self, ray: &Ray, scene: &Scene, sampler: &mut dyn Sampler) -> Spectrum {
        let mut l = Spectrum::ZERO;
        let mut beta = Spectrum::ONE;
        let mut ray = *ray;

        // All BSDFs along the path share one arena which is dropped when
        // the path terminates.
        let arena = Bump::new();

        for depth in 0..self.data.max_depth {
            let isect = match scene.is_intersect(&ray) {
                Some(isect) => isect,
                None => break,
            };
            let material = Arc::clone(&isect.material);

            l += beta * material.emission(&isect.uv);
            if material.has_emission() {
                // Emitters end the path.
                break;
            }

            // Russian roulette keeps the estimator unbiased by reweighting
            // the surviving paths.
            if depth > self.data.rr_depth {
                let q = min(1.0, l.max_component_value());
                if sampler.get_1d() >= q {
                    break;
                }
                beta /= q;
            }

            let mut record = ScatterRecord::new(&isect);
            let bsdf = material.allocate_bsdf(&isect, &arena);
            let f = bsdf.sample(&mut record, &sampler.get_2d());
            if f.is_black() || record.pdf == 0.0 {
                break;
            }

            beta *= f * (record.cos_theta / record.pdf);
            debug_assert!(!beta.has_nans());

            debug!("Depth {}: beta = {:?}", depth, beta);
            ray = Ray::new(isect.p, record.world_incident());
        }

        l
    }
}
