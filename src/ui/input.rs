//! Viewport-Input-Handling: Klick, Drag, Scroll → AppIntent.

use crate::app::AppIntent;
use crate::core::MapCamera;
use glam::DVec2;

/// Verwaltet den Input-Zustand für das Karten-Viewport.
#[derive(Default)]
pub struct InputState {
    /// Primär-Drag läuft (Klick am Ende wird dann nicht als Selektion gewertet)
    panning: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus-, Scroll- und Tastatur-Eingaben
    /// über der Karte.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        camera: &MapCamera,
        scroll_zoom_step: f64,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let viewport_size = [rect.width(), rect.height()];
        let screen_size = DVec2::new(rect.width() as f64, rect.height() as f64);

        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        if response.drag_started() {
            self.panning = true;
        }
        if response.dragged() {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CameraPan {
                    delta_px: to_dvec2(delta),
                });
            }
        }
        if response.drag_stopped() {
            self.panning = false;
        }

        if response.clicked() && !self.panning {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = to_dvec2(pos - rect.min);
                events.push(AppIntent::MapClicked {
                    position: camera.screen_to_latlon(local, screen_size),
                });
            }
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                let factor = if scroll > 0.0 {
                    scroll_zoom_step
                } else {
                    1.0 / scroll_zoom_step
                };
                let anchor_px = response
                    .hover_pos()
                    .map(|pos| to_dvec2(pos - rect.min))
                    .unwrap_or(screen_size * 0.5);
                events.push(AppIntent::CameraZoom { factor, anchor_px });
            }

            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                events.push(AppIntent::DeselectRequested);
            }
        }

        events
    }
}

fn to_dvec2(v: egui::Vec2) -> DVec2 {
    DVec2::new(v.x as f64, v.y as f64)
}
