mod context;
mod depth;
mod types;

pub use context::*;
pub use depth::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_converts_to_orb_error() {
        let err: orb_common::OrbError = RendererError::AdapterNotFound.into();
        assert_eq!(err.to_string(), "renderer error: no suitable GPU adapter found");
    }

    #[test]
    fn depth_format_is_32_bit_float() {
        assert_eq!(DEPTH_FORMAT, wgpu::TextureFormat::Depth32Float);
        assert!(DEPTH_FORMAT.has_depth_aspect());
    }
}
