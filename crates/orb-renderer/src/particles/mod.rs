//! The swirling particle cloud around the orb.
//!
//! [`ParticleField`] owns the CPU buffers and the motion model;
//! [`ParticlePipeline`] draws them as additive, depth-attenuated sprites.

mod field;
mod pipeline;

pub use field::*;
pub use pipeline::*;
