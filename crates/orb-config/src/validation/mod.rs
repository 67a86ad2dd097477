//! Full configuration validation.
//!
//! Validates numeric ranges, min/max ordering, and color formats. Every
//! problem is collected so a single error lists all of them.

mod helpers;


use crate::schema::SceneConfig;
use helpers::{validate_hex_color, validate_range, validate_range_f64};
use orb_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SceneConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_camera(&mut errors, config);
    validate_orb(&mut errors, config);
    validate_particles(&mut errors, config);

    validate_range_f64(
        &mut errors,
        "animation.frame_step",
        config.animation.frame_step,
        0.0001,
        1.0,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &SceneConfig) {
    validate_range(errors, "window.width", config.window.width, 1, 16384);
    validate_range(errors, "window.height", config.window.height, 1, 16384);
    validate_hex_color(errors, "window.clear_color", &config.window.clear_color);
    validate_range_f64(errors, "window.clear_alpha", config.window.clear_alpha, 0.0, 1.0);
}

fn validate_camera(errors: &mut Vec<String>, config: &SceneConfig) {
    let cam = &config.camera;
    validate_range_f64(errors, "camera.fov", cam.fov, 1.0, 179.0);
    validate_range_f64(errors, "camera.near", cam.near, 0.0001, 1000.0);
    validate_range_f64(errors, "camera.far", cam.far, 0.01, 100_000.0);
    if cam.far <= cam.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            cam.far, cam.near
        ));
    }
    validate_range_f64(errors, "camera.damping_factor", cam.damping_factor, 0.0, 1.0);
    validate_range_f64(errors, "camera.rotate_speed", cam.rotate_speed, 0.0, 10.0);
    validate_range_f64(errors, "camera.zoom_speed", cam.zoom_speed, 0.0, 10.0);
    validate_range_f64(errors, "camera.pan_speed", cam.pan_speed, 0.0, 10.0);
    validate_range_f64(errors, "camera.min_distance", cam.min_distance, 0.0, 10_000.0);
    validate_range_f64(errors, "camera.max_distance", cam.max_distance, 0.0, 10_000.0);
    if cam.min_distance > cam.max_distance {
        errors.push(format!(
            "camera.min_distance = {} exceeds camera.max_distance = {}",
            cam.min_distance, cam.max_distance
        ));
    }
    validate_range_f64(errors, "camera.distance", cam.distance, 0.001, 10_000.0);
}

fn validate_orb(errors: &mut Vec<String>, config: &SceneConfig) {
    let orb = &config.orb;
    validate_range_f64(errors, "orb.radius", orb.radius, 0.01, 1000.0);
    validate_range(errors, "orb.width_segments", orb.width_segments, 3, 512);
    validate_range(errors, "orb.height_segments", orb.height_segments, 2, 512);
    validate_hex_color(errors, "orb.color1", &orb.color1);
    validate_hex_color(errors, "orb.color2", &orb.color2);
    validate_range_f64(errors, "orb.spin_per_frame", orb.spin_per_frame, -1.0, 1.0);
}

fn validate_particles(errors: &mut Vec<String>, config: &SceneConfig) {
    let p = &config.particles;
    validate_range(errors, "particles.count", p.count, 1, 1_000_000);
    validate_range_f64(errors, "particles.inner_radius", p.inner_radius, 0.0, 1000.0);
    validate_range_f64(errors, "particles.thickness", p.thickness, 0.0, 1000.0);
    validate_range_f64(errors, "particles.size", p.size, 0.0, 10.0);
    validate_range_f64(errors, "particles.opacity", p.opacity, 0.0, 1.0);
}
