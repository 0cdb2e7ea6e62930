//! Profilseite (ohne Karte).

use crate::app::{AppIntent, AppState};
use crate::core::{config_for, Role};

pub fn render_profile_page(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Profile");
        ui.add_space(8.0);

        egui::Grid::new("profile_info").num_columns(2).show(ui, |ui| {
            ui.label("Email");
            ui.label(state.session.user_email.as_deref().unwrap_or("-"));
            ui.end_row();
            ui.label("Role");
            ui.label(state.session.role.to_string());
            ui.end_row();
            ui.label("Grid resolution");
            ui.label(state.view.resolution.to_string());
            ui.end_row();
        });

        ui.add_space(12.0);
        ui.strong("Roles");
        for role in Role::ALL {
            let config = config_for(Some(role));
            ui.horizontal(|ui| {
                let current = role == state.session.role;
                if ui.selectable_label(current, config.display_name).clicked() && !current {
                    events.push(AppIntent::RoleChangeRequested { role });
                }
                ui.weak(config.description);
            });
        }

        ui.add_space(12.0);
        if ui.button("Log out").clicked() {
            events.push(AppIntent::LogoutRequested);
        }
    });

    events
}
