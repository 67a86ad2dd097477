//! wgpu render pipeline for the orb sphere.
//!
//! Draws the indexed sphere straight into the frame's color target with
//! alpha blending, writing depth so particles behind the orb are hidden.
//! Both faces are visible: back faces go in a first pass and front faces in
//! a second, so the far side always blends under the near side whatever
//! the triangle order.

use super::state::OrbShading;
use crate::matrix::{self, Mat4, Vec3};
use crate::sphere::{SphereMesh, SphereVertex};

/// Per-frame uniforms for the orb shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OrbUniforms {
    /// View × model (column-major).
    pub model_view: [f32; 16],
    pub projection: [f32; 16],
    /// Inverse-transpose of `model_view`; the shader reads the upper 3×3.
    pub normal_matrix: [f32; 16],
    /// World-space camera position.
    pub camera_position: [f32; 3],
    pub time: f32,
    pub color1: [f32; 3],
    pub _pad0: f32,
    pub color2: [f32; 3],
    pub _pad1: f32,
}

impl OrbUniforms {
    pub fn new(view: &Mat4, projection: &Mat4, camera_position: Vec3, orb: &OrbShading) -> Self {
        let model_view = matrix::mul(view, &orb.model_matrix());
        Self {
            model_view,
            projection: *projection,
            normal_matrix: matrix::normal_matrix(&model_view),
            camera_position,
            time: orb.time() as f32,
            color1: orb.color1(),
            _pad0: 0.0,
            color2: orb.color2(),
            _pad1: 0.0,
        }
    }
}

/// Face culled by each orb pass, in draw order: the back-face pass culls
/// front faces, the front-face pass culls back faces.
pub const ORB_PASS_CULL: [wgpu::Face; 2] = [wgpu::Face::Front, wgpu::Face::Back];

fn primitive_state(cull: wgpu::Face) -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: Some(cull),
        ..Default::default()
    }
}

fn depth_state(depth_format: wgpu::TextureFormat) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: depth_format,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Manages the pipelines, mesh buffers, and uniforms for the orb.
pub struct OrbPipeline {
    /// One pipeline per entry of [`ORB_PASS_CULL`], same order.
    pipelines: [wgpu::RenderPipeline; 2],
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl OrbPipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        mesh: &SphereMesh,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orb shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/orb.wgsl").into()),
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orb vertex buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orb index buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("orb uniforms"),
            size: std::mem::size_of::<OrbUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("orb bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<OrbUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("orb bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("orb pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipelines = ORB_PASS_CULL.map(|cull| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(match cull {
                    wgpu::Face::Front => "orb back-face pipeline",
                    wgpu::Face::Back => "orb front-face pipeline",
                }),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[SphereVertex::LAYOUT],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: primitive_state(cull),
                depth_stencil: Some(depth_state(depth_format)),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        });

        Self {
            pipelines,
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            uniform_buffer,
            bind_group,
        }
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &OrbUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Draw the orb into an already-open pass, back faces first.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        for pipeline in &self.pipelines {
            pass.set_pipeline(pipeline);
            pass.draw_indexed(0..self.index_count, 0, 0..1);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use orb_config::schema::OrbConfig;

    #[test]
    fn orb_uniforms_size_is_240_bytes() {
        // 3 × mat4x4 + 3 × (vec3 + f32)
        assert_eq!(std::mem::size_of::<OrbUniforms>(), 240);
        assert_eq!(std::mem::size_of::<OrbUniforms>() % 16, 0);
    }

    #[test]
    fn uniforms_carry_orb_state() {
        let mut orb = OrbShading::from_config(&OrbConfig::default()).unwrap();
        orb.set_time(3.5);
        let view = matrix::look_at([0.0, 0.0, 10.0], [0.0; 3], [0.0, 1.0, 0.0]);
        let proj = matrix::perspective(1.0, 1.6, 0.1, 1000.0);

        let u = OrbUniforms::new(&view, &proj, [0.0, 0.0, 10.0], &orb);
        assert_eq!(u.time, 3.5);
        assert_eq!(u.color2, [0.0, 1.0, 1.0]);
        assert_eq!(u.camera_position, [0.0, 0.0, 10.0]);
        // Unrotated orb: model-view is the view matrix.
        assert_eq!(u.model_view, view);
        assert_eq!(u.projection, proj);
    }

    #[test]
    fn back_faces_draw_before_front_faces() {
        let [first, second] = ORB_PASS_CULL.map(primitive_state);
        assert_eq!(first.cull_mode, Some(wgpu::Face::Front));
        assert_eq!(second.cull_mode, Some(wgpu::Face::Back));
        assert_eq!(first.front_face, second.front_face);
        assert_eq!(first.topology, second.topology);
    }

    #[test]
    fn both_passes_share_depth_state() {
        let depth = depth_state(wgpu::TextureFormat::Depth32Float);
        assert!(depth.depth_write_enabled);
        assert_eq!(depth.depth_compare, wgpu::CompareFunction::Less);
    }

    #[test]
    fn orb_shader_validates() {
        crate::shader_check::validate_wgsl(include_str!("../shaders/orb.wgsl")).unwrap();
    }
}
