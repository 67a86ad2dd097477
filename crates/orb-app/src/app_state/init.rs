//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use orb_renderer::{RenderState, Scene};

use super::core::OrbApp;

impl OrbApp {
    /// Create the window, the scene, and the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(window_config.transparent)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size();
        let scene = match Scene::from_config(&self.config, size.width, size.height) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Failed to build scene: {e}");
                return false;
            }
        };

        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            &self.config.window,
            &scene,
        ));

        match render_state {
            Ok(rs) => self.render_state = Some(rs),
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.scene = Some(scene);
        self.window = Some(window);
        tracing::info!(
            width = size.width,
            height = size.height,
            "Window created and renderer initialized"
        );
        true
    }
}
