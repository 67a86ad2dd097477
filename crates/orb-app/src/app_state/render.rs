//! Per-frame tick and draw.

use super::core::OrbApp;

impl OrbApp {
    /// Advance the scene one frame, draw it, and schedule the next frame.
    pub(super) fn render_frame(&mut self) {
        let (Some(scene), Some(rs)) = (self.scene.as_mut(), self.render_state.as_mut()) else {
            return;
        };

        scene.tick();
        if let Err(e) = rs.render(scene) {
            tracing::error!("Render error: {e}");
        }

        self.request_redraw();
    }

    pub(super) fn handle_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(ref mut rs) = self.render_state {
            rs.resize(width, height);
        }
        if let Some(ref mut scene) = self.scene {
            scene.resize(width, height);
        }
        tracing::debug!("Resized to {width}x{height}");
    }
}
