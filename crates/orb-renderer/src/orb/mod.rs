//! The orb: shading model, per-frame state, and GPU pipeline.
//!
//! The surface color is defined once and expressed three ways: the GLSL
//! pair in [`glsl`], the WGSL port used by [`OrbPipeline`], and the CPU
//! functions in [`shading`].

pub mod glsl;
mod pipeline;
pub mod shading;
mod state;

pub use glsl::{ORB_FRAGMENT_SHADER, ORB_UNIFORMS, ORB_VERTEX_SHADER};
pub use pipeline::*;
pub use shading::{fresnel, pattern, pulse, shade, ShadeInput, ORB_ALPHA};
pub use state::*;
