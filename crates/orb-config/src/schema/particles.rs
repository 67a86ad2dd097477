//! Particle cloud settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub count: u32,
    /// Inner radius of the spawn shell.
    pub inner_radius: f64,
    /// Shell thickness; the outer radius is `inner_radius + thickness`.
    pub thickness: f64,
    /// Point size in world units (attenuated with depth).
    pub size: f64,
    pub opacity: f64,
    /// Fixed RNG seed for a reproducible cloud. Random when unset.
    pub seed: Option<u64>,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            inner_radius: 4.0,
            thickness: 2.0,
            size: 0.05,
            opacity: 0.8,
            seed: None,
        }
    }
}
