//! Perspective camera and orbit control settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov: f64,
    pub near: f64,
    pub far: f64,
    /// Initial distance from the orbit target along +Z.
    pub distance: f64,
    pub enable_damping: bool,
    /// Fraction of the pending orbit delta applied per update (0.0-1.0).
    pub damping_factor: f64,
    pub rotate_speed: f64,
    pub zoom_speed: f64,
    pub enable_pan: bool,
    pub pan_speed: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 10.0,
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 0.5,
            zoom_speed: 1.0,
            enable_pan: true,
            pan_speed: 1.0,
            min_distance: 5.0,
            max_distance: 20.0,
        }
    }
}
