//! Integrators

#[macro_use]
extern crate log;

mod path;

pub use path::PathIntegrator;
