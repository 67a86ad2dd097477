//! Rendering and animation for the orb scene.
//!
//! The numeric core ([`particles::ParticleField`], [`orb::shading`]) is
//! plain CPU code; [`RenderState`] puts it on screen with wgpu.

pub mod camera;
pub mod clock;
pub mod gpu;
pub mod matrix;
pub mod orb;
pub mod particles;
pub mod render_state;
pub mod scene;
pub mod sphere;

#[cfg(test)]
mod shader_check;

pub use camera::OrbitCamera;
pub use clock::FrameClock;
pub use gpu::{GpuContext, RendererError};
pub use orb::{OrbShading, ORB_FRAGMENT_SHADER, ORB_VERTEX_SHADER};
pub use particles::ParticleField;
pub use render_state::RenderState;
pub use scene::Scene;
