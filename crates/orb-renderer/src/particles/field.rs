//! CPU-side particle cloud: spherical-shell spawn and the per-frame swirl.
//!
//! Positions and colors live in flat `f32` buffers (`xyz xyz ...`,
//! `rgb rgb ...`) that are uploaded to the GPU verbatim. Both buffers are
//! exactly `3 * len()` long for the lifetime of the field.

use orb_config::schema::ParticlesConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Angular speed per unit of distance inside the shell's outer radius.
const SWIRL_RATE: f64 = 0.002;
/// Frequency of the vertical bob (per unit of animation time).
const BOB_FREQUENCY: f64 = 0.001;
/// Height added per frame at the peak of the bob.
const BOB_AMPLITUDE: f64 = 0.02;

/// Spawn shell bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellParams {
    pub inner_radius: f64,
    pub thickness: f64,
}

impl ShellParams {
    /// Distance at which the swirl speed crosses zero.
    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.thickness
    }
}

impl Default for ShellParams {
    fn default() -> Self {
        Self {
            inner_radius: 4.0,
            thickness: 2.0,
        }
    }
}

/// A fixed-size swirling point cloud.
pub struct ParticleField {
    positions: Vec<f32>,
    colors: Vec<f32>,
    outer_radius: f64,
    dirty: bool,
}

impl ParticleField {
    /// Spawn `count` particles on the default 4..6 shell with a thread-local RNG.
    pub fn initialize(count: usize) -> Self {
        Self::with_rng(count, ShellParams::default(), &mut rand::thread_rng())
    }

    /// Spawn from config; a configured seed makes the cloud reproducible.
    pub fn from_config(config: &ParticlesConfig) -> Self {
        let shell = ShellParams {
            inner_radius: config.inner_radius,
            thickness: config.thickness,
        };
        let count = config.count as usize;
        match config.seed {
            Some(seed) => Self::with_rng(count, shell, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(count, shell, &mut rand::thread_rng()),
        }
    }

    /// Spawn `count` particles uniformly over the shell's solid angle.
    ///
    /// The polar angle is `acos(2u - 1)`; sampling it uniformly in `[0, π]`
    /// would crowd the poles.
    pub fn with_rng<R: Rng + ?Sized>(count: usize, shell: ShellParams, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);

        for _ in 0..count {
            let radius = shell.inner_radius + rng.gen::<f64>() * shell.thickness;
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            let phi = (rng.gen::<f64>() * 2.0 - 1.0).acos();

            positions.push((radius * phi.sin() * theta.cos()) as f32);
            positions.push((radius * phi.sin() * theta.sin()) as f32);
            positions.push((radius * phi.cos()) as f32);

            // Purple (low mix) to cyan (high mix); blue stays saturated.
            let mix_ratio = rng.gen::<f32>();
            colors.push(mix_ratio * 0.4);
            colors.push(mix_ratio);
            colors.push(1.0);
        }

        Self {
            positions,
            colors,
            outer_radius: shell.outer_radius(),
            dirty: true,
        }
    }

    /// Advance every particle for the frame at cumulative time `time`.
    ///
    /// Each point is rotated about Y by `(outer - distance) * 0.002 * time`,
    /// so inner points turn faster than outer ones and points beyond the
    /// outer radius turn backwards. The vertical bob is added to the current
    /// height every call, so repeated calls with the same `time` keep moving
    /// points and heights drift over long runs.
    pub fn advance(&mut self, time: f64) {
        let outer = self.outer_radius;
        for p in self.positions.chunks_exact_mut(3) {
            let x = p[0] as f64;
            let y = p[1] as f64;
            let z = p[2] as f64;

            let distance = (x * x + y * y + z * z).sqrt();
            let rotation_speed = (outer - distance) * SWIRL_RATE;
            let (sin, cos) = (rotation_speed * time).sin_cos();

            p[0] = (x * cos - z * sin) as f32;
            p[1] = (y + (time * BOB_FREQUENCY + distance).sin() * BOB_AMPLITUDE) as f32;
            p[2] = (x * sin + z * cos) as f32;
        }
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `xyz` position buffer.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat `rgb` color buffer.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> [f32; 3] {
        let i = index * 3;
        [self.positions[i], self.positions[i + 1], self.positions[i + 2]]
    }

    pub fn color(&self, index: usize) -> [f32; 3] {
        let i = index * 3;
        [self.colors[i], self.colors[i + 1], self.colors[i + 2]]
    }

    /// The purple-to-cyan mix ratio the particle was spawned with.
    pub fn mix_ratio(&self, index: usize) -> f32 {
        self.colors[index * 3 + 1]
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Returns whether positions changed since the last call, and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Smallest and largest distance from the origin across all particles.
    pub fn radius_bounds(&self) -> (f32, f32) {
        self.positions
            .chunks_exact(3)
            .map(|p| (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt())
            .fold((f32::INFINITY, 0.0f32), |(lo, hi), r| (lo.min(r), hi.max(r)))
    }

    #[cfg(test)]
    fn from_positions(positions: Vec<f32>, shell: ShellParams) -> Self {
        let colors = vec![1.0; positions.len()];
        Self {
            positions,
            colors,
            outer_radius: shell.outer_radius(),
            dirty: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> ParticleField {
        ParticleField::with_rng(count, ShellParams::default(), &mut StdRng::seed_from_u64(42))
    }

    fn radius(p: [f32; 3]) -> f32 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    #[test]
    fn initialize_sizes_buffers() {
        let field = ParticleField::initialize(1000);
        assert_eq!(field.len(), 1000);
        assert_eq!(field.positions().len(), 3000);
        assert_eq!(field.colors().len(), 3000);
        assert!(!field.is_empty());
    }

    #[test]
    fn spawn_positions_lie_in_shell() {
        let field = seeded(1000);
        for i in 0..field.len() {
            let r = radius(field.position(i));
            assert!((4.0 - 1e-4..=6.0 + 1e-4).contains(&r), "particle {i}: r = {r}");
        }
    }

    #[test]
    fn spawn_is_not_pole_biased() {
        // Uniform solid angle: cos(phi) = z / r is uniform on [-1, 1], so
        // about half the points sit within |z/r| < 0.5.
        let field = seeded(4000);
        let equatorial = (0..field.len())
            .filter(|&i| {
                let p = field.position(i);
                (p[2] / radius(p)).abs() < 0.5
            })
            .count();
        let share = equatorial as f32 / field.len() as f32;
        assert!((0.45..0.55).contains(&share), "equatorial share = {share}");
    }

    #[test]
    fn colors_follow_mix_ratio() {
        let field = seeded(500);
        for i in 0..field.len() {
            let [r, g, b] = field.color(i);
            let m = field.mix_ratio(i);
            assert!((0.0..1.0).contains(&m));
            assert_eq!(g, m);
            assert!((r - 0.4 * m).abs() < 1e-6);
            assert_eq!(b, 1.0);
        }
    }

    #[test]
    fn same_seed_same_cloud() {
        let a = seeded(64);
        let b = seeded(64);
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn advance_preserves_count_and_finiteness() {
        let mut field = seeded(1000);
        for &t in &[0.0, 0.016, 1.0, 1000.0, 1.0e7] {
            field.advance(t);
            assert_eq!(field.len(), 1000);
            assert_eq!(field.positions().len(), 3000);
            assert!(field.positions().iter().all(|v| v.is_finite()), "t = {t}");
        }
    }

    #[test]
    fn advance_rotation_preserves_xz_radius() {
        let mut field = seeded(200);
        let before: Vec<f32> = (0..field.len())
            .map(|i| {
                let p = field.position(i);
                (p[0] * p[0] + p[2] * p[2]).sqrt()
            })
            .collect();

        field.advance(123.4);

        for (i, r0) in before.iter().enumerate() {
            let p = field.position(i);
            let r1 = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((r1 - r0).abs() < 1e-4, "particle {i}: {r0} -> {r1}");
        }
    }

    #[test]
    fn advance_matches_swirl_formula() {
        let mut field = ParticleField::from_positions(vec![5.0, 0.0, 0.0], ShellParams::default());
        let time = 100.0;
        field.advance(time);

        let angle = (6.0 - 5.0) * 0.002 * time;
        let expected_y = (time * 0.001 + 5.0_f64).sin() * 0.02;
        let [x, y, z] = field.position(0);
        assert!((x as f64 - 5.0 * angle.cos()).abs() < 1e-5);
        assert!((z as f64 - 5.0 * angle.sin()).abs() < 1e-5);
        assert!((y as f64 - expected_y).abs() < 1e-6);
    }

    #[test]
    fn outside_outer_radius_swirls_backwards() {
        let mut inner = ParticleField::from_positions(vec![5.0, 0.0, 0.0], ShellParams::default());
        let mut outer = ParticleField::from_positions(vec![7.0, 0.0, 0.0], ShellParams::default());
        inner.advance(10.0);
        outer.advance(10.0);
        // Positive angle moves +x toward +z; negative toward -z.
        assert!(inner.position(0)[2] > 0.0);
        assert!(outer.position(0)[2] < 0.0);
    }

    #[test]
    fn repeated_advance_is_additive_in_y() {
        let mut field = ParticleField::from_positions(vec![4.5, 1.0, 0.5], ShellParams::default());
        field.advance(50.0);
        let y1 = field.position(0)[1];
        field.advance(50.0);
        let y2 = field.position(0)[1];
        assert!((y2 - y1).abs() > 1e-4, "y did not move: {y1} -> {y2}");
    }

    #[test]
    fn dirty_flag_tracks_updates() {
        let mut field = seeded(10);
        assert!(field.take_dirty());
        assert!(!field.take_dirty());
        field.advance(1.0);
        assert!(field.take_dirty());
    }

    #[test]
    fn from_config_honors_seed_and_shell() {
        let config = ParticlesConfig {
            count: 300,
            inner_radius: 1.0,
            thickness: 0.5,
            seed: Some(9),
            ..Default::default()
        };
        let a = ParticleField::from_config(&config);
        let b = ParticleField::from_config(&config);
        assert_eq!(a.len(), 300);
        assert_eq!(a.positions(), b.positions());
        assert!((a.outer_radius() - 1.5).abs() < 1e-12);
        let (lo, hi) = a.radius_bounds();
        assert!(lo >= 1.0 - 1e-4 && hi <= 1.5 + 1e-4, "{lo}..{hi}");
    }

    #[test]
    fn thousand_particles_stay_near_shell_after_long_frame() {
        let mut field = ParticleField::initialize(1000);
        field.advance(1000.0);
        assert!(field.positions().iter().all(|v| v.is_finite()));
        let (lo, hi) = field.radius_bounds();
        assert!(lo >= 3.9 && hi <= 6.5, "{lo}..{hi}");
    }
}
