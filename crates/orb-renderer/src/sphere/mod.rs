//! Orb sphere geometry: vertex layout and indexed UV-sphere generation.

mod mesh;
mod types;

pub use mesh::*;
pub use types::*;
