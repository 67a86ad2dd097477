//! OrbApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use orb_config::SceneConfig;
use orb_renderer::{RenderState, Scene};

use super::input::PointerState;

/// Top-level application state.
pub struct OrbApp {
    pub(super) config: SceneConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Created with the window, sized to its drawing buffer.
    pub(super) scene: Option<Scene>,

    pub(super) pointer: PointerState,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl OrbApp {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            window: None,
            render_state: None,
            scene: None,
            pointer: PointerState::default(),
            should_exit: false,
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}
