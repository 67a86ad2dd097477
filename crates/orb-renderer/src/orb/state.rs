//! Per-frame orb state: animation time, base colors, and spin.

use std::f32::consts::PI;

use orb_common::{Color, ConfigError};
use orb_config::schema::OrbConfig;

use super::shading::ShadeInput;
use crate::matrix::{self, Mat4, Vec3};

/// Uniform inputs of the orb material plus the mesh's Euler rotation.
#[derive(Debug, Clone)]
pub struct OrbShading {
    time: f64,
    color1: Color,
    color2: Color,
    /// Euler angles (x, y) in radians, applied in XYZ order.
    rotation: [f32; 2],
    spin_per_frame: f32,
    radius: f32,
}

impl OrbShading {
    pub fn new(color1: Color, color2: Color, radius: f32, spin_per_frame: f32) -> Self {
        Self {
            time: 0.0,
            color1,
            color2,
            rotation: [0.0, 0.0],
            spin_per_frame,
            radius,
        }
    }

    pub fn from_config(config: &OrbConfig) -> Result<Self, ConfigError> {
        let parse = |key: &str, hex: &str| {
            Color::from_hex(hex).ok_or_else(|| {
                ConfigError::ValidationError(format!("orb.{key}: invalid hex color '{hex}'"))
            })
        };
        Ok(Self::new(
            parse("color1", &config.color1)?,
            parse("color2", &config.color2)?,
            config.radius as f32,
            config.spin_per_frame as f32,
        ))
    }

    /// Written once per frame by the driver before rendering.
    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance both Euler angles by one frame's worth of spin.
    pub fn spin(&mut self) {
        self.rotation[0] += self.spin_per_frame;
        self.rotation[1] += self.spin_per_frame;
    }

    pub fn rotation(&self) -> [f32; 2] {
        self.rotation
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color1(&self) -> Vec3 {
        self.color1.to_rgb_f32()
    }

    pub fn color2(&self) -> Vec3 {
        self.color2.to_rgb_f32()
    }

    /// Object-to-world transform: `Rx * Ry`.
    pub fn model_matrix(&self) -> Mat4 {
        matrix::mul(
            &matrix::rotate_x(self.rotation[0]),
            &matrix::rotate_y(self.rotation[1]),
        )
    }

    /// Shader inputs for the surface point nearest the camera.
    ///
    /// The uv is recovered from the sphere parametrization of that point in
    /// object space, so it follows the spin.
    pub fn front_sample(&self, camera_position: Vec3) -> ShadeInput {
        let toward_camera = matrix::normalize(camera_position);
        let world = matrix::scaled(toward_camera, self.radius);

        let inverse = matrix::mul(
            &matrix::rotate_y(-self.rotation[1]),
            &matrix::rotate_x(-self.rotation[0]),
        );
        let object = matrix::transform_point(&inverse, world);

        ShadeInput {
            normal: toward_camera,
            uv: sphere_uv(object, self.radius),
            position: object,
            camera_position,
            time: self.time as f32,
            color1: self.color1(),
            color2: self.color2(),
        }
    }
}

/// Inverse of the mesh parametrization in `sphere::mesh`.
fn sphere_uv(p: Vec3, radius: f32) -> [f32; 2] {
    let v = (p[1] / radius).clamp(-1.0, 1.0).acos() / PI;
    let u = p[2].atan2(-p[0]) / (2.0 * PI);
    [u.rem_euclid(1.0), 1.0 - v]
}

// =============================================================================
// Tests
// =============================================================================
