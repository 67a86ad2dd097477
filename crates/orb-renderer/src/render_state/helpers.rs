use orb_common::Color;
use orb_config::schema::WindowConfig;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Background clear color from the window section.
///
/// An unparsable hex falls back to black with a warning.
pub fn clear_color(config: &WindowConfig) -> wgpu::Color {
    let [r, g, b] = match Color::from_hex(&config.clear_color) {
        Some(c) => c.to_rgb_f32(),
        None => {
            tracing::warn!(
                "Invalid window.clear_color '{}', using black",
                config.clear_color
            );
            [0.0; 3]
        }
    };
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: config.clear_alpha.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_from_hex() {
        let config = WindowConfig {
            clear_color: "#ff0000".into(),
            clear_alpha: 0.25,
            ..Default::default()
        };
        let c = clear_color(&config);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.0, 0.25));
    }

    #[test]
    fn invalid_clear_color_is_black() {
        let config = WindowConfig {
            clear_color: "nope".into(),
            ..Default::default()
        };
        let c = clear_color(&config);
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn clear_alpha_is_clamped() {
        let config = WindowConfig {
            clear_alpha: 3.0,
            ..Default::default()
        };
        assert_eq!(clear_color(&config).a, 1.0);
    }
}
