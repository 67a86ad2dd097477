//! CPU evaluation of the orb surface color.
//!
//! Mirrors the fragment stage exactly so the look can be checked (and
//! sampled headless) without a GPU.

use crate::matrix::{self, Vec3};

/// Output alpha of every orb pixel.
pub const ORB_ALPHA: f32 = 0.9;

const WHITE: Vec3 = [1.0, 1.0, 1.0];

/// Everything one pixel of the orb depends on.
#[derive(Debug, Clone, Copy)]
pub struct ShadeInput {
    /// Interpolated surface normal, already transformed by the normal matrix.
    pub normal: Vec3,
    pub uv: [f32; 2],
    /// Object-space surface position.
    pub position: Vec3,
    /// World-space camera position.
    pub camera_position: Vec3,
    pub time: f32,
    pub color1: Vec3,
    pub color2: Vec3,
}

/// Rim term: 0 facing the viewer, approaching 1 at grazing angles.
pub fn fresnel(view_direction: Vec3, normal: Vec3) -> f32 {
    let facing = matrix::dot(view_direction, normal).max(0.0);
    (1.0 - facing).powi(3)
}

/// Two interfering sine grids over the uv plane, remapped by `* 0.5 + 0.5`.
///
/// The combined amplitude reaches 1.5, so the result can leave `0..1`.
/// It is not clamped.
pub fn pattern(uv: [f32; 2], time: f32) -> f32 {
    let [u, v] = uv;
    let mut p = (u * 10.0 + time * 0.5).sin() * (v * 10.0 + time * 0.3).cos();
    p += (u * 20.0 - time * 0.2).sin() * (v * 20.0 + time * 0.4).cos() * 0.5;
    p * 0.5 + 0.5
}

/// Global brightness pulse in `0..1`.
pub fn pulse(time: f32) -> f32 {
    (time * 0.5).sin() * 0.5 + 0.5
}

/// Final RGBA for one orb pixel.
pub fn shade(input: &ShadeInput) -> [f32; 4] {
    let view_direction = matrix::normalize(matrix::sub(input.camera_position, input.position));
    let rim = fresnel(view_direction, input.normal);

    let base = matrix::mix(input.color1, input.color2, pattern(input.uv, input.time));
    let lit = matrix::mix(base, WHITE, rim * 0.7);
    let [r, g, b] = matrix::scaled(lit, 1.0 + pulse(input.time) * 0.2);

    [r, g, b, ORB_ALPHA]
}

// =============================================================================
// Tests
// =============================================================================
