//! Linke Seitenleiste: Layer, Auflösung und Legende.

use crate::app::{AppIntent, AppState};
use crate::core::{config_for, ColorScale, LayerKey, MAX_RESOLUTION};

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
pub fn render_sidebar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("sidebar")
        .default_width(200.0)
        .min_width(170.0)
        .resizable(true)
        .show(ctx, |ui| {
            let config = config_for(Some(state.session.role));
            ui.heading(config.display_name);
            ui.label(egui::RichText::new(config.description).small());
            ui.separator();

            ui.strong("Map layer");
            for key in LayerKey::catalogue().filter(LayerKey::is_exclusive) {
                layer_checkbox(ui, state, key, &mut events);
            }

            ui.add_space(6.0);
            ui.strong("Panels");
            for key in LayerKey::catalogue().filter(LayerKey::is_modal) {
                layer_checkbox(ui, state, key, &mut events);
            }

            ui.separator();
            ui.strong("Grid");
            let mut resolution = state.view.resolution;
            let slider = ui.add(
                egui::Slider::new(&mut resolution, 0..=MAX_RESOLUTION).text("Resolution"),
            );
            if slider.changed() && resolution != state.view.resolution {
                events.push(AppIntent::ResolutionChangeRequested { resolution });
            }
            ui.label(format!("{} cells", state.cell_count()));

            if let Some(scale) = state
                .layers
                .active_map_layer()
                .and_then(|key| ColorScale::for_layer(&key))
            {
                ui.separator();
                render_legend(ui, scale);
            }
        });

    events
}

fn layer_checkbox(
    ui: &mut egui::Ui,
    state: &AppState,
    key: LayerKey,
    events: &mut Vec<AppIntent>,
) {
    let mut active = state.layers.is_active(&key);
    if ui.checkbox(&mut active, key.label()).changed() {
        events.push(AppIntent::LayerToggled { key });
    }
}

fn render_legend(ui: &mut egui::Ui, scale: &ColorScale) {
    ui.strong(format!("Legend ({})", scale.unit));
    for (label, color) in scale.legend() {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 2.0, super::color32(color, 1.0));
            ui.label(label);
        });
    }
}
