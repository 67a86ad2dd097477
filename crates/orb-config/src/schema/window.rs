//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial logical width.
    pub width: u32,
    /// Initial logical height.
    pub height: u32,
    /// Request a transparent window surface.
    pub transparent: bool,
    /// Color the frame is cleared to before the scene is drawn.
    pub clear_color: String,
    /// Alpha of the clear color (valid range: 0.0-1.0).
    pub clear_alpha: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Orb".into(),
            width: 1280,
            height: 800,
            transparent: false,
            clear_color: "#000000".into(),
            clear_alpha: 1.0,
        }
    }
}
