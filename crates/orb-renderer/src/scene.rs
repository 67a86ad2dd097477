//! The animated scene: orb, particle cloud, camera, and frame clock.
//!
//! Everything here is plain CPU state so the same frame loop drives both
//! the windowed renderer and the headless run.

use orb_common::ConfigError;
use orb_config::SceneConfig;

use crate::camera::OrbitCamera;
use crate::clock::FrameClock;
use crate::orb::OrbShading;
use crate::particles::ParticleField;
use crate::sphere::SphereSegments;

/// Sprite appearance of the particle cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    /// World-space sprite size before depth attenuation.
    pub size: f32,
    pub opacity: f32,
}

pub struct Scene {
    pub particles: ParticleField,
    pub orb: OrbShading,
    pub camera: OrbitCamera,
    pub clock: FrameClock,
    pub points: PointStyle,
    pub segments: SphereSegments,
}

impl Scene {
    /// Build the scene for a drawing buffer of `width` × `height` pixels.
    pub fn from_config(config: &SceneConfig, width: u32, height: u32) -> Result<Self, ConfigError> {
        let orb = OrbShading::from_config(&config.orb)?;
        let particles = ParticleField::from_config(&config.particles);
        tracing::debug!(
            count = particles.len(),
            seed = ?config.particles.seed,
            "Particle field initialized"
        );

        Ok(Self {
            particles,
            orb,
            camera: OrbitCamera::from_config(&config.camera, width, height),
            clock: FrameClock::new(config.animation.frame_step),
            points: PointStyle {
                size: config.particles.size as f32,
                opacity: config.particles.opacity as f32,
            },
            segments: SphereSegments {
                width: config.orb.width_segments,
                height: config.orb.height_segments,
            },
        })
    }

    /// Run one frame of animation and return the new time.
    ///
    /// Order: clock, orb uniforms and spin, particle motion, camera.
    pub fn tick(&mut self) -> f64 {
        let time = self.clock.tick();

        self.orb.set_time(time);
        self.orb.spin();
        self.particles.advance(time);
        self.camera.update();

        if self.clock.report_due() {
            tracing::debug!(
                frame = self.clock.frame(),
                fps = format_args!("{:.1}", self.clock.fps()),
                frame_ms = format_args!("{:.2}", self.clock.frame_time_ms()),
                "Frame timing"
            );
        }

        time
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.particles.seed = Some(7);
        config
    }

    #[test]
    fn from_config_uses_sections() {
        let mut config = seeded_config();
        config.particles.count = 25;
        config.orb.width_segments = 16;
        let scene = Scene::from_config(&config, 800, 600).unwrap();

        assert_eq!(scene.particles.len(), 25);
        assert_eq!(scene.segments.width, 16);
        assert_eq!(scene.segments.height, 64);
        assert_eq!(scene.points.opacity, 0.8);
        assert_eq!(scene.clock.step(), 0.016);
    }

    #[test]
    fn bad_orb_color_is_a_config_error() {
        let mut config = seeded_config();
        config.orb.color1 = "#12".into();
        assert!(matches!(
            Scene::from_config(&config, 800, 600),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn tick_advances_every_part() {
        let mut scene = Scene::from_config(&seeded_config(), 800, 600).unwrap();
        let before = scene.particles.position(0);
        scene.particles.take_dirty();

        let time = scene.tick();

        assert_eq!(time, 0.016);
        assert_eq!(scene.orb.time(), 0.016);
        assert_eq!(scene.orb.rotation(), [0.005, 0.005]);
        assert_ne!(scene.particles.position(0), before);
        assert!(scene.particles.take_dirty());
        assert_eq!(scene.clock.frame(), 1);
    }

    #[test]
    fn seeded_scenes_match() {
        let mut a = Scene::from_config(&seeded_config(), 800, 600).unwrap();
        let mut b = Scene::from_config(&seeded_config(), 800, 600).unwrap();
        for _ in 0..50 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.particles.positions(), b.particles.positions());
    }

    #[test]
    fn long_run_stays_finite() {
        let mut scene = Scene::from_config(&seeded_config(), 800, 600).unwrap();
        for _ in 0..1000 {
            scene.tick();
        }
        assert_eq!(scene.particles.len(), 1000);
        assert!(scene.particles.positions().iter().all(|v| v.is_finite()));
        assert!(scene.camera.position().iter().all(|v| v.is_finite()));
    }
}
