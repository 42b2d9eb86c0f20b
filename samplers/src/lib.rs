//! Samplers

mod random;

pub use random::RandomSampler;
