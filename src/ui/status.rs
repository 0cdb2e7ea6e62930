//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};
use crate::core::LatLon;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.cells.is_loading() {
                ui.spinner();
                ui.label("Loading map data...");
            } else {
                ui.label(format!(
                    "Cells: {} | Resolution: {}",
                    state.cell_count(),
                    state.view.resolution
                ));
            }

            ui.separator();

            let center = LatLon::from_mercator(state.view.camera.center);
            ui.label(format!(
                "Center: ({:.4}, {:.4}) | {:.1} m/px",
                center.lat, center.lon, state.view.camera.meters_per_px
            ));

            ui.separator();

            match state
                .selection
                .selected()
                .and_then(|id| state.cells.get(id))
            {
                Some(cell) => ui.label(format!("Selected: {}", cell.id)),
                None => ui.label("Selected: none"),
            };

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
                if ui.small_button("✕").clicked() {
                    events.push(AppIntent::StatusDismissed);
                }
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });

    events
}
