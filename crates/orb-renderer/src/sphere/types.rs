//! Sphere mesh vertex types and buffer layout.

/// A single vertex of the sphere mesh.
///
/// Layout: position(vec3) + normal(vec3) + uv(vec2) = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl SphereVertex {
    /// wgpu vertex buffer layout for `SphereVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SphereVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            // uv: vec2<f32> at offset 24
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 24,
                shader_location: 2,
            },
        ],
    };
}

/// Tessellation of the orb sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereSegments {
    /// Segments around the equator (columns).
    pub width: u32,
    /// Segments from pole to pole (rows).
    pub height: u32,
}

impl SphereSegments {
    pub const DEFAULT: Self = Self {
        width: 64,
        height: 64,
    };

    /// Clamp to the smallest sphere that still closes: 3 columns, 2 rows.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(3),
            height: self.height.max(2),
        }
    }

    pub fn vertex_count(self) -> usize {
        let s = self.clamped();
        ((s.width + 1) * (s.height + 1)) as usize
    }

    /// Both pole rows contribute one triangle per quad instead of two.
    pub fn index_count(self) -> usize {
        let s = self.clamped();
        (s.width * (2 * s.height - 2) * 3) as usize
    }
}

// =============================================================================
// Tests
// =============================================================================
