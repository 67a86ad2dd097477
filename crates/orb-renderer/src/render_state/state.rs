use std::sync::Arc;

use orb_config::schema::WindowConfig;
use winit::window::Window;

use super::helpers::{clear_color, log_first_frame};
use crate::gpu::{DepthTexture, GpuContext, RendererError, DEPTH_FORMAT};
use crate::orb::{OrbPipeline, OrbUniforms};
use crate::particles::{ParticlePipeline, PointUniforms};
use crate::scene::Scene;
use crate::sphere::generate_sphere_mesh;

/// GPU state for one window: surface, depth buffer, and the two pipelines.
pub struct RenderState {
    pub gpu: GpuContext,
    depth: DepthTexture,
    orb: OrbPipeline,
    particles: ParticlePipeline,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window and its scene.
    pub async fn new(
        window: Arc<Window>,
        config: &WindowConfig,
        scene: &Scene,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.transparent).await?;
        let depth = DepthTexture::new(&gpu.device, gpu.size.width, gpu.size.height);

        let mesh = generate_sphere_mesh(scene.orb.radius(), scene.segments);
        tracing::debug!(
            vertices = mesh.vertices.len(),
            indices = mesh.indices.len(),
            "Orb mesh generated"
        );

        let orb = OrbPipeline::new(&gpu.device, gpu.format(), DEPTH_FORMAT, &mesh);
        let particles =
            ParticlePipeline::new(&gpu.device, gpu.format(), DEPTH_FORMAT, &scene.particles);

        Ok(Self {
            gpu,
            depth,
            orb,
            particles,
            clear_color: clear_color(config),
        })
    }

    /// Handle a window resize by reconfiguring the surface and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.depth = DepthTexture::new(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
    }

    /// Upload this frame's scene state and draw it.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render(&mut self, scene: &mut Scene) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view_matrix = scene.camera.view_matrix();
        let projection = scene.camera.projection_matrix();
        let camera_position = scene.camera.position();

        self.orb.update_uniforms(
            &self.gpu.queue,
            &OrbUniforms::new(&view_matrix, &projection, camera_position, &scene.orb),
        );
        self.particles.update_uniforms(
            &self.gpu.queue,
            &PointUniforms {
                view: view_matrix,
                projection,
                viewport: [self.gpu.size.width as f32, self.gpu.size.height as f32],
                size: scene.points.size,
                opacity: scene.points.opacity,
            },
        );
        self.particles
            .sync_positions(&self.gpu.queue, &mut scene.particles);

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("orb frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orb main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Orb first, then the additive cloud over it.
            self.orb.render(&mut pass);
            self.particles.render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
