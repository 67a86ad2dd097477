//! Pointer input mapped onto the orbit camera.
//!
//! Left drag orbits, right drag pans, the wheel zooms.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use orb_renderer::OrbitCamera;

use super::core::OrbApp;

/// Pixel scroll distance treated as one wheel notch.
const PIXELS_PER_NOTCH: f64 = 100.0;

/// What a pointer drag currently controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DragMode {
    Rotate,
    Pan,
}

#[derive(Debug, Default)]
pub(super) struct PointerState {
    drag: Option<DragMode>,
    last: Option<(f64, f64)>,
}

impl PointerState {
    pub(super) fn button(&mut self, state: ElementState, button: MouseButton) {
        let mode = match button {
            MouseButton::Left => DragMode::Rotate,
            MouseButton::Right => DragMode::Pan,
            _ => return,
        };
        match state {
            ElementState::Pressed => self.drag = Some(mode),
            ElementState::Released if self.drag == Some(mode) => self.drag = None,
            ElementState::Released => {}
        }
    }

    /// Record a cursor position; returns the drag delta while a button is held.
    pub(super) fn moved(&mut self, x: f64, y: f64) -> Option<(DragMode, f32, f32)> {
        let last = self.last.replace((x, y));
        let mode = self.drag?;
        let (lx, ly) = last?;
        Some((mode, (x - lx) as f32, (y - ly) as f32))
    }

    pub(super) fn left(&mut self) {
        self.last = None;
    }
}

/// Wheel notches from a scroll event; positive means away from the user
/// (zoom in).
pub(super) fn wheel_notches(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => (y / PIXELS_PER_NOTCH) as f32,
    }
}

fn apply_drag(camera: &mut OrbitCamera, mode: DragMode, dx: f32, dy: f32) {
    match mode {
        DragMode::Rotate => camera.rotate(dx, dy),
        DragMode::Pan => camera.pan(dx, dy),
    }
}

impl OrbApp {
    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        self.pointer.button(state, button);
    }

    pub(super) fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((mode, dx, dy)) = self.pointer.moved(x, y) {
            if let Some(ref mut scene) = self.scene {
                apply_drag(&mut scene.camera, mode, dx, dy);
            }
        }
    }

    pub(super) fn handle_cursor_left(&mut self) {
        self.pointer.left();
    }

    pub(super) fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        if let Some(ref mut scene) = self.scene {
            scene.camera.zoom(wheel_notches(delta));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_config::schema::CameraConfig;

    #[test]
    fn no_delta_without_button() {
        let mut pointer = PointerState::default();
        assert_eq!(pointer.moved(10.0, 10.0), None);
        assert_eq!(pointer.moved(20.0, 15.0), None);
    }

    #[test]
    fn left_drag_rotates() {
        let mut pointer = PointerState::default();
        pointer.moved(10.0, 10.0);
        pointer.button(ElementState::Pressed, MouseButton::Left);
        assert_eq!(
            pointer.moved(15.0, 7.0),
            Some((DragMode::Rotate, 5.0, -3.0))
        );
        pointer.button(ElementState::Released, MouseButton::Left);
        assert_eq!(pointer.moved(20.0, 7.0), None);
    }

    #[test]
    fn right_drag_pans() {
        let mut pointer = PointerState::default();
        pointer.button(ElementState::Pressed, MouseButton::Right);
        // First move only records a position.
        assert_eq!(pointer.moved(0.0, 0.0), None);
        assert_eq!(pointer.moved(4.0, 0.0), Some((DragMode::Pan, 4.0, 0.0)));
    }

    #[test]
    fn releasing_other_button_keeps_drag() {
        let mut pointer = PointerState::default();
        pointer.button(ElementState::Pressed, MouseButton::Left);
        pointer.button(ElementState::Released, MouseButton::Right);
        pointer.moved(0.0, 0.0);
        assert!(pointer.moved(1.0, 1.0).is_some());
    }

    #[test]
    fn cursor_leaving_resets_anchor() {
        let mut pointer = PointerState::default();
        pointer.button(ElementState::Pressed, MouseButton::Left);
        pointer.moved(0.0, 0.0);
        pointer.left();
        assert_eq!(pointer.moved(100.0, 100.0), None);
    }

    #[test]
    fn middle_button_is_ignored() {
        let mut pointer = PointerState::default();
        pointer.button(ElementState::Pressed, MouseButton::Middle);
        pointer.moved(0.0, 0.0);
        assert_eq!(pointer.moved(1.0, 1.0), None);
    }

    #[test]
    fn wheel_notches_from_lines_and_pixels() {
        assert_eq!(wheel_notches(MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
        assert_eq!(
            wheel_notches(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -50.0))),
            -0.5
        );
    }

    #[test]
    fn drag_reaches_camera() {
        let mut camera = OrbitCamera::from_config(&CameraConfig::default(), 800, 800);
        apply_drag(&mut camera, DragMode::Rotate, 400.0, 0.0);
        for _ in 0..2000 {
            camera.update();
        }
        assert!(camera.position()[0] < -9.9);
    }
}
