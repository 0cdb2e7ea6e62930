//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize(state, size);
}

pub fn pan(state: &mut AppState, delta_px: DVec2) {
    use_cases::camera::pan(state, delta_px);
}

pub fn zoom_towards(state: &mut AppState, factor: f64, anchor_px: DVec2) {
    use_cases::camera::zoom_towards(state, factor, anchor_px);
}
