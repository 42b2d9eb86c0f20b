//! BSDF models.

pub mod common;
mod fresnel;
mod lambertian;
mod microfacet_reflection;
mod record;

use crate::base::*;
use crate::geometry::{Point2f, Vector3f};
use crate::spectrum::Spectrum;

pub use fresnel::*;
pub use lambertian::*;
pub use microfacet_reflection::*;
pub use record::*;

/// Dispatches calls to the concrete reflection model. All models and the
/// values they reference live in the per-path arena.
pub enum Bsdf<'arena> {
    LambertianReflection(&'arena mut LambertianReflection),
    MicrofacetReflection(&'arena mut MicrofacetReflection<'arena>),
}

impl<'arena> Bsdf<'arena> {
    /// Returns the value of the distribution function for the given pair of
    /// directions in the shading coordinate system.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        match self {
            Bsdf::LambertianReflection(model) => model.f(wo, wi),
            Bsdf::MicrofacetReflection(model) => model.f(wo, wi),
        }
    }

    /// Samples an incident direction for the outgoing direction in the
    /// record and fills in the sampled direction, value, PDF and cosine.
    ///
    /// * `record` - The scatter record to fill in.
    /// * `u`      - The 2D uniform random values.
    pub fn sample(&self, record: &mut ScatterRecord, u: &Point2f) -> Spectrum {
        match self {
            Bsdf::LambertianReflection(model) => model.sample(record, u),
            Bsdf::MicrofacetReflection(model) => model.sample(record, u),
        }
    }

    /// Returns the PDF of `sample` for the given pair of directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        match self {
            Bsdf::LambertianReflection(model) => model.pdf(wo, wi),
            Bsdf::MicrofacetReflection(model) => model.pdf(wo, wi),
        }
    }
}
