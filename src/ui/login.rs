//! Login- und Registrierungs-Bildschirm.

use crate::app::state::AuthMode;
use crate::app::{AppIntent, UiState};

/// Rendert das Anmeldeformular (zentriert).
pub fn render_login_screen(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);
            ui.heading("Climates");
            ui.label("Role-aware climate dashboard");
            ui.add_space(16.0);

            let form = &mut ui_state.login_form;
            ui.horizontal(|ui| {
                ui.selectable_value(&mut form.mode, AuthMode::Login, "Log in");
                ui.selectable_value(&mut form.mode, AuthMode::Signup, "Sign up");
            });
            ui.add_space(8.0);

            egui::Grid::new("login_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Email");
                    ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(220.0));
                    ui.end_row();

                    ui.label("Password");
                    let password = ui.add(
                        egui::TextEdit::singleline(&mut form.password)
                            .password(true)
                            .desired_width(220.0),
                    );
                    ui.end_row();

                    if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        events.push(submit(form.mode, &form.email, &form.password));
                    }
                });

            ui.add_space(8.0);
            let label = match form.mode {
                AuthMode::Login => "Log in",
                AuthMode::Signup => "Create account",
            };
            if ui.button(label).clicked() {
                events.push(submit(form.mode, &form.email, &form.password));
            }

            if let Some(error) = &form.error {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::from_rgb(220, 38, 38), error);
            }
        });
    });

    events
}

fn submit(mode: AuthMode, email: &str, password: &str) -> AppIntent {
    let email = email.to_string();
    let password = password.to_string();
    match mode {
        AuthMode::Login => AppIntent::LoginSubmitted { email, password },
        AuthMode::Signup => AppIntent::SignupSubmitted { email, password },
    }
}
