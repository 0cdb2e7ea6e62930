//! Detail-Panel (rechte Seitenleiste) für die selektierte Zelle.

use crate::app::{AppIntent, AppState};
use crate::core::{config_for, tool_summary, DecisionTool, HexCell};

/// Rendert das Detail-Panel und gibt erzeugte Events zurück.
///
/// Ohne Selektion wird nichts angezeigt.
pub fn render_detail_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(cell) = state
        .selection
        .selected()
        .and_then(|id| state.cells.get(id))
        .cloned()
    else {
        return events;
    };

    egui::SidePanel::right("detail_panel")
        .default_width(280.0)
        .min_width(220.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Area details");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::DeselectRequested);
                    }
                });
            });
            ui.label(egui::RichText::new(cell.id.to_string()).monospace().small());
            ui.label(format!(
                "Center: {:.4}, {:.4}",
                cell.center.lat, cell.center.lon
            ));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                render_metrics(ui, &cell);
                ui.separator();
                render_tools(ui, state, &cell, &mut events);
                ui.separator();
                render_projection(ui, state, &cell, &mut events);
                ui.separator();
                if ui.button("Export as JSON...").clicked() {
                    events.push(AppIntent::ExportDialogRequested);
                }
            });
        });

    events
}

fn render_metrics(ui: &mut egui::Ui, cell: &HexCell) {
    let m = &cell.metrics;
    egui::Grid::new("cell_metrics")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            let mut row = |label: &str, value: String| {
                ui.label(label);
                ui.label(value);
                ui.end_row();
            };
            row("Temperature", format!("{:.1} °C", m.temperature));
            row("Soil moisture", format!("{:.0} %", m.soil_moisture * 100.0));
            row("Rainfall (24 h)", format!("{:.1} mm", m.rainfall_24h));
            row("Frost risk", m.frost_risk.to_string());
            row("Growing degree days", format!("{:.1}", m.gdd));
            row("Fire risk index", format!("{:.1}", m.fire_risk_index));
            row("Urban heat", format!("+{:.1} °C", m.urban_heat_intensity));
            row("Air quality index", format!("{:.0}", m.air_quality_index));
            row("Wind", format!("{:.1} km/h", m.wind_speed));
            row("Flood risk", m.flood_risk.to_string());
            row("Solar", format!("{:.1} kWh/m²/day", m.solar_irradiance));
        });
}

fn render_tools(
    ui: &mut egui::Ui,
    state: &AppState,
    cell: &HexCell,
    events: &mut Vec<AppIntent>,
) {
    let role = state.session.role;
    let featured = config_for(Some(role)).featured_tool;

    ui.strong("Decision tools");
    ui.horizontal(|ui| {
        // Hervorgehobenes Werkzeug der Rolle zuerst
        let mut tools: Vec<DecisionTool> = featured.into_iter().collect();
        tools.extend(DecisionTool::ALL.into_iter().filter(|t| Some(*t) != featured));
        for tool in tools {
            let active = state.selection.active_tool() == Some(tool);
            let enabled = !state.cells.is_loading();
            let clicked = ui
                .add_enabled_ui(enabled, |ui| ui.selectable_label(active, tool.label()).clicked())
                .inner;
            if clicked {
                events.push(if active {
                    AppIntent::ToolClosed
                } else {
                    AppIntent::ToolRequested { tool }
                });
            }
        }
    });

    if let Some(tool) = state.selection.active_tool() {
        ui.add_space(4.0);
        ui.label(tool_summary(tool, cell, role));
    }
}

fn render_projection(
    ui: &mut egui::Ui,
    state: &mut AppState,
    cell: &HexCell,
    events: &mut Vec<AppIntent>,
) {
    ui.strong("Temperature projection");
    let form = &mut state.ui.projection_form;
    egui::Grid::new("projection_form")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Date");
            ui.add(egui::TextEdit::singleline(&mut form.date).hint_text("YYYY-MM-DD"));
            ui.end_row();
            ui.label("Time");
            ui.add(egui::TextEdit::singleline(&mut form.time).hint_text("HH:MM"));
            ui.end_row();
        });

    if ui.button("Predict").clicked() {
        events.push(AppIntent::ProjectionRequested {
            date: form.date.trim().to_string(),
            time: form.time.trim().to_string(),
        });
    }

    if let Some(projected) = cell.metrics.projected_temp {
        ui.label(format!("Projected: {:.1} °C", projected));
    }
}
