//! Configuration schema types for the orb scene.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the scene's stock values.

mod camera;
mod orb;
mod particles;
mod system;
mod window;

pub use camera::*;
pub use orb::*;
pub use particles::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub orb: OrbConfig,
    pub particles: ParticlesConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.particles.count, 1000);
        assert!((config.particles.inner_radius - 4.0).abs() < f64::EPSILON);
        assert!((config.particles.thickness - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.orb.color1, "#6600ff");
        assert_eq!(config.orb.color2, "#00ffff");
        assert_eq!(config.orb.width_segments, 64);
        assert!((config.camera.fov - 75.0).abs() < f64::EPSILON);
        assert!((config.camera.distance - 10.0).abs() < f64::EPSILON);
        assert!((config.camera.damping_factor - 0.05).abs() < f64::EPSILON);
        assert!((config.animation.frame_step - 0.016).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: SceneConfig = toml::from_str(
            r#"
[particles]
count = 250
seed = 7
"#,
        )
        .unwrap();
        assert_eq!(config.particles.count, 250);
        assert_eq!(config.particles.seed, Some(7));
        assert!((config.particles.opacity - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.window.title, "Orb");
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: SceneConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }
}
