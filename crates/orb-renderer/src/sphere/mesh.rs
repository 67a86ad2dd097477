//! Sphere mesh generation.
//!
//! Builds an indexed UV sphere laid out row by row from the north pole
//! (`v = 1`) to the south pole (`v = 0`). Each row has `width + 1` vertices
//! so the seam column carries both `u = 0` and `u = 1`. The pole rows shift
//! their `u` by half a segment so each pole triangle samples the middle of
//! its column.

use std::f32::consts::PI;

use super::types::{SphereSegments, SphereVertex};

/// Vertices and triangle-list indices for one sphere.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Generate a UV sphere of `radius` centered at the origin.
///
/// Degenerate triangles touching the poles are skipped, giving
/// `width * (2 * height - 2)` triangles in total.
pub fn generate_sphere_mesh(radius: f32, segments: SphereSegments) -> SphereMesh {
    let SphereSegments { width, height } = segments.clamped();

    let mut vertices = Vec::with_capacity(segments.vertex_count());
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(height as usize + 1);

    for iy in 0..=height {
        let v = iy as f32 / height as f32;

        let u_offset = if iy == 0 {
            0.5 / width as f32
        } else if iy == height {
            -0.5 / width as f32
        } else {
            0.0
        };

        let mut row = Vec::with_capacity(width as usize + 1);
        for ix in 0..=width {
            let u = ix as f32 / width as f32;
            let position = sphere_point(radius, u, v);

            row.push(vertices.len() as u32);
            vertices.push(SphereVertex {
                position,
                normal: crate::matrix::normalize(position),
                uv: [u + u_offset, 1.0 - v],
            });
        }
        grid.push(row);
    }

    let mut indices = Vec::with_capacity(segments.index_count());
    for iy in 0..height as usize {
        for ix in 0..width as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height as usize - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    SphereMesh { vertices, indices }
}

/// Point on the sphere at normalized longitude `u` and colatitude `v`.
///
/// `u = 0` lies on -X and the longitude sweeps toward +Z; `v = 0` is the
/// north pole (+Y).
fn sphere_point(radius: f32, u: f32, v: f32) -> [f32; 3] {
    let phi = u * 2.0 * PI;
    let theta = v * PI;

    [
        -radius * phi.cos() * theta.sin(),
        radius * theta.cos(),
        radius * phi.sin() * theta.sin(),
    ]
}

// =============================================================================
// Tests
// =============================================================================
