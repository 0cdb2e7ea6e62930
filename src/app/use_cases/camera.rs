//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use glam::DVec2;

/// Setzt die Kamera auf Zentrum und Zellgröße der aktuellen Auflösung zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.refit_camera(state.options.initial_zoom_px_per_cell);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta_px: DVec2) {
    state.view.camera.pan_pixels(delta_px);
}

/// Zoomt auf einen Bildschirmpunkt hin.
pub fn zoom_towards(state: &mut AppState, factor: f64, anchor_px: DVec2) {
    let [w, h] = state.view.viewport_size;
    let screen = DVec2::new(f64::from(w), f64::from(h));
    state.view.camera.zoom_towards(factor, anchor_px, screen);
}
