//! CPU-only run of the frame loop.
//!
//! Steps the same scene the window would show, without a GPU, and reports
//! what the particles and the orb's front pixel look like at the end.

use orb_common::OrbError;
use orb_config::SceneConfig;
use orb_renderer::orb::shade;
use orb_renderer::Scene;
use serde::Serialize;

/// Final state of a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessSummary {
    pub frames: u64,
    pub final_time: f64,
    pub particle_count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub non_finite: usize,
    pub camera_distance: f32,
    /// RGBA of the orb pixel nearest the camera on the last frame.
    pub sample_color: [f32; 4],
}

/// Simulate `frames` frames at the configured window size.
pub fn run(config: &SceneConfig, frames: u64) -> orb_common::Result<HeadlessSummary> {
    let mut scene = Scene::from_config(config, config.window.width, config.window.height)?;
    tracing::info!(
        frames,
        particles = scene.particles.len(),
        "Running headless"
    );

    let mut sample_color = sample(&scene);
    for _ in 0..frames {
        let time = scene.tick();
        sample_color = sample(&scene);
        tracing::trace!(time, ?sample_color, "Headless frame");
    }

    let (radius_min, radius_max) = scene.particles.radius_bounds();
    let non_finite = scene
        .particles
        .positions()
        .iter()
        .filter(|v| !v.is_finite())
        .count();
    if non_finite > 0 {
        tracing::warn!(non_finite, "Particle positions went non-finite");
    }

    Ok(HeadlessSummary {
        frames: scene.clock.frame(),
        final_time: scene.clock.time(),
        particle_count: scene.particles.len(),
        radius_min,
        radius_max,
        non_finite,
        camera_distance: scene.camera.distance(),
        sample_color,
    })
}

fn sample(scene: &Scene) -> [f32; 4] {
    shade(&scene.orb.front_sample(scene.camera.position()))
}

/// Pretty JSON for stdout.
pub fn to_json(summary: &HeadlessSummary) -> Result<String, OrbError> {
    serde_json::to_string_pretty(summary)
        .map_err(|e| OrbError::Other(format!("failed to serialize summary: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(count: u32) -> SceneConfig {
        let mut config = SceneConfig::default();
        config.particles.count = count;
        config.particles.seed = Some(11);
        config
    }

    #[test]
    fn zero_frames_reports_initial_state() {
        let summary = run(&config(200), 0).unwrap();
        assert_eq!(summary.frames, 0);
        assert_eq!(summary.final_time, 0.0);
        assert_eq!(summary.particle_count, 200);
        assert!(summary.radius_min >= 3.999 && summary.radius_max <= 6.001);
        assert!((summary.camera_distance - 10.0).abs() < 1e-4);
    }

    #[test]
    fn runs_requested_frames() {
        let summary = run(&config(100), 120).unwrap();
        assert_eq!(summary.frames, 120);
        assert!((summary.final_time - 120.0 * 0.016).abs() < 1e-9);
        assert_eq!(summary.non_finite, 0);
        assert_eq!(summary.sample_color[3], 0.9);
        assert!(summary.sample_color[..3].iter().all(|c| c.is_finite()));
    }

    #[test]
    fn same_seed_same_summary() {
        let a = run(&config(50), 60).unwrap();
        let b = run(&config(50), 60).unwrap();
        assert_eq!(a.radius_min, b.radius_min);
        assert_eq!(a.radius_max, b.radius_max);
        assert_eq!(a.sample_color, b.sample_color);
    }

    #[test]
    fn summary_serializes_every_field() {
        let json = to_json(&run(&config(10), 5).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for key in [
            "frames",
            "final_time",
            "particle_count",
            "radius_min",
            "radius_max",
            "non_finite",
            "camera_distance",
            "sample_color",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["sample_color"].as_array().map(|a| a.len()), Some(4));
    }
}
