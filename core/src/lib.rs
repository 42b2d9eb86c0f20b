//! Core types and algorithms shared by every crate in the renderer.

#[macro_use]
extern crate hexf;

#[macro_use]
extern crate log;

pub mod base;
pub mod bsdf;
pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod integrator;
pub mod interaction;
pub mod material;
pub mod microfacet;
pub mod rng;
pub mod sampler;
pub mod sampling;
pub mod scene;
pub mod shape;
pub mod spectrum;
pub mod texture;
