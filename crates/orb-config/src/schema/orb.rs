//! Orb sphere settings.

use serde::{Deserialize, Serialize};

/// Geometry and shading inputs for the central orb.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbConfig {
    pub radius: f64,
    pub width_segments: u32,
    pub height_segments: u32,
    /// Shader `color1` (pattern low end).
    pub color1: String,
    /// Shader `color2` (pattern high end).
    pub color2: String,
    /// Radians added to both the X and Y rotation every frame.
    pub spin_per_frame: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            width_segments: 64,
            height_segments: 64,
            color1: "#6600ff".into(),
            color2: "#00ffff".into(),
            spin_per_frame: 0.005,
        }
    }
}
