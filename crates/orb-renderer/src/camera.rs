//! Perspective camera with orbit controls.
//!
//! The camera orbits `target` in spherical coordinates (radius, azimuth
//! `theta` around +Y measured from +Z, polar `phi` from +Y). Input
//! accumulates into pending deltas; [`OrbitCamera::update`] applies them
//! once per frame, with damping spreading each delta over many frames.

use std::f32::consts::PI;

use orb_config::schema::CameraConfig;

use crate::matrix::{self, Mat4, Vec3};

/// Keeps `phi` off the poles so the view basis stays defined.
const PHI_EPS: f32 = 1e-6;

const UP: Vec3 = [0.0, 1.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = matrix::length(v);
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: v[0].atan2(v[2]),
            phi: (v[1] / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let ring = self.phi.sin() * self.radius;
        [
            ring * self.theta.sin(),
            self.phi.cos() * self.radius,
            ring * self.theta.cos(),
        ]
    }
}

/// Orbiting perspective camera.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    position: Vec3,
    target: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    viewport_height: f32,

    enable_damping: bool,
    damping_factor: f32,
    rotate_speed: f32,
    zoom_speed: f32,
    enable_pan: bool,
    pan_speed: f32,
    min_distance: f32,
    max_distance: f32,

    // Pending input, consumed by `update`.
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
}

impl OrbitCamera {
    /// Camera on +Z at `config.distance`, looking at the origin.
    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Self {
            position: [0.0, 0.0, config.distance as f32],
            target: [0.0; 3],
            fov_y: (config.fov as f32).to_radians(),
            aspect: 1.0,
            near: config.near as f32,
            far: config.far as f32,
            viewport_height: 1.0,
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor as f32,
            rotate_speed: config.rotate_speed as f32,
            zoom_speed: config.zoom_speed as f32,
            enable_pan: config.enable_pan,
            pan_speed: config.pan_speed as f32,
            min_distance: config.min_distance as f32,
            max_distance: config.max_distance as f32,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: [0.0; 3],
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Track the drawing buffer size: updates aspect ratio and the pixel
    /// scale used by rotate and pan.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        let width = width.max(1) as f32;
        let height = height.max(1) as f32;
        self.aspect = width / height;
        self.viewport_height = height;
    }

    /// Queue an orbit by a pointer drag of (`dx`, `dy`) pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let per_pixel = 2.0 * PI / self.viewport_height * self.rotate_speed;
        self.delta_theta -= dx * per_pixel;
        self.delta_phi -= dy * per_pixel;
    }

    /// Queue a zoom by wheel `notches`; positive moves toward the target.
    pub fn zoom(&mut self, notches: f32) {
        self.scale *= 0.95f32.powf(self.zoom_speed * notches);
    }

    /// Queue a screen-space pan by a pointer drag of (`dx`, `dy`) pixels.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !self.enable_pan {
            return;
        }
        let offset = matrix::sub(self.position, self.target);
        // Half the visible height at the target's depth.
        let target_distance = matrix::length(offset) * (self.fov_y / 2.0).tan();
        let (right, up) = self.basis();

        let left = -2.0 * dx * self.pan_speed * target_distance / self.viewport_height;
        let upward = 2.0 * dy * self.pan_speed * target_distance / self.viewport_height;
        self.pan_offset = matrix::add(self.pan_offset, matrix::scaled(right, left));
        self.pan_offset = matrix::add(self.pan_offset, matrix::scaled(up, upward));
    }

    /// Apply pending input. Call once per frame.
    pub fn update(&mut self) {
        let mut spherical = Spherical::from_offset(matrix::sub(self.position, self.target));

        let step = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };

        spherical.theta += self.delta_theta * step;
        spherical.phi = (spherical.phi + self.delta_phi * step).clamp(PHI_EPS, PI - PHI_EPS);
        spherical.radius =
            (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.target = matrix::add(self.target, matrix::scaled(self.pan_offset, step));
        self.position = matrix::add(self.target, spherical.to_offset());

        let keep = 1.0 - step;
        self.delta_theta *= keep;
        self.delta_phi *= keep;
        self.pan_offset = matrix::scaled(self.pan_offset, keep);
        self.scale = 1.0;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        matrix::length(matrix::sub(self.position, self.target))
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view_matrix(&self) -> Mat4 {
        matrix::look_at(self.position, self.target, UP)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        matrix::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Camera right and up vectors in world space.
    fn basis(&self) -> (Vec3, Vec3) {
        let forward = matrix::normalize(matrix::sub(self.target, self.position));
        let right = matrix::normalize(matrix::cross(forward, UP));
        let up = matrix::cross(right, forward);
        (right, up)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::from_config(&CameraConfig::default(), 1280, 800)
    }

    fn settle(camera: &mut OrbitCamera) {
        for _ in 0..2000 {
            camera.update();
        }
    }

    fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < eps)
    }

    #[test]
    fn starts_on_positive_z() {
        let camera = camera();
        assert_eq!(camera.position(), [0.0, 0.0, 10.0]);
        assert_eq!(camera.target(), [0.0; 3]);
        assert!((camera.aspect() - 1.6).abs() < 1e-6);
    }

    #[test]
    fn update_without_input_is_stable() {
        let mut camera = camera();
        for _ in 0..100 {
            camera.update();
        }
        assert!(approx(camera.position(), [0.0, 0.0, 10.0], 1e-4));
    }

    #[test]
    fn damping_applies_a_fraction_per_frame() {
        let mut camera = camera();
        // Half a turn's worth of drag: 2pi * dx / 800 * 0.5 = pi/2 -> dx = 400.
        camera.rotate(400.0, 0.0);
        camera.update();
        let first = camera.position()[0].atan2(camera.position()[2]);
        assert!((first + PI / 2.0 * 0.05).abs() < 1e-4, "{first}");
    }

    #[test]
    fn damped_rotation_converges_to_full_delta() {
        let mut camera = camera();
        camera.rotate(400.0, 0.0);
        settle(&mut camera);
        // theta = -pi/2: camera ends on -X.
        assert!(approx(camera.position(), [-10.0, 0.0, 0.0], 1e-3), "{:?}", camera.position());
        assert!((camera.distance() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn undamped_rotation_is_immediate() {
        let config = CameraConfig {
            enable_damping: false,
            ..Default::default()
        };
        let mut camera = OrbitCamera::from_config(&config, 800, 800);
        camera.rotate(400.0, 0.0);
        camera.update();
        assert!(approx(camera.position(), [-10.0, 0.0, 0.0], 1e-3));
        // Nothing left pending.
        camera.update();
        assert!(approx(camera.position(), [-10.0, 0.0, 0.0], 1e-3));
    }

    #[test]
    fn polar_angle_never_crosses_the_pole() {
        let mut camera = camera();
        camera.rotate(0.0, 10_000.0);
        settle(&mut camera);
        let p = camera.position();
        assert!(p.iter().all(|c| c.is_finite()));
        assert!(p[1] > 9.99, "{p:?}");
        assert!(camera.view_matrix().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn zoom_is_clamped_to_distance_range() {
        let mut camera = camera();
        camera.zoom(100.0);
        camera.update();
        assert!((camera.distance() - 5.0).abs() < 1e-4);

        camera.zoom(-200.0);
        camera.update();
        assert!((camera.distance() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn one_notch_scales_by_095() {
        let mut camera = camera();
        camera.zoom(1.0);
        camera.update();
        assert!((camera.distance() - 9.5).abs() < 1e-4);
    }

    #[test]
    fn pan_moves_target_and_camera_together() {
        let mut camera = camera();
        camera.pan(100.0, 0.0);
        settle(&mut camera);
        let target = camera.target();
        // Dragging right moves the scene right, so the target moves left.
        assert!(target[0] < 0.0);
        assert!(target[1].abs() < 1e-4);
        assert!((camera.distance() - 10.0).abs() < 1e-3);
        assert!((camera.position()[0] - target[0]).abs() < 1e-3);
    }

    #[test]
    fn pan_disabled_is_ignored() {
        let config = CameraConfig {
            enable_pan: false,
            ..Default::default()
        };
        let mut camera = OrbitCamera::from_config(&config, 800, 800);
        camera.pan(100.0, 100.0);
        settle(&mut camera);
        assert_eq!(camera.target(), [0.0; 3]);
    }

    #[test]
    fn view_matrix_centers_target() {
        let camera = camera();
        let p = matrix::transform_point(&camera.view_matrix(), [0.0; 3]);
        assert!(approx(p, [0.0, 0.0, -10.0], 1e-5));
    }

    #[test]
    fn set_viewport_updates_aspect() {
        let mut camera = camera();
        camera.set_viewport(500, 1000);
        assert!((camera.aspect() - 0.5).abs() < 1e-6);
        camera.set_viewport(0, 0);
        assert!((camera.aspect() - 1.0).abs() < 1e-6);
    }
}
