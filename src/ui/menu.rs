//! Kopfzeile: Menü, Navigation und Rollenwahl.

use crate::app::state::ActivePage;
use crate::app::{AppIntent, AppState};
use crate::core::Role;

/// Rendert die Kopfzeile
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Export selected cell...").clicked() {
                    events.push(AppIntent::ExportDialogRequested);
                    ui.close();
                }

                if ui.button("Save settings").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Log out").clicked() {
                    events.push(AppIntent::LogoutRequested);
                    ui.close();
                }

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }
            });

            ui.separator();

            for page in [ActivePage::Dashboard, ActivePage::Chatbot, ActivePage::Profile] {
                let active = state.session.active_page == page;
                if ui.selectable_label(active, page.label()).clicked() {
                    events.push(AppIntent::NavigateRequested { page });
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(email) = &state.session.user_email {
                    ui.label(email);
                    ui.separator();
                }

                let current = state.session.role;
                egui::ComboBox::from_id_salt("role_select")
                    .selected_text(current.to_string())
                    .show_ui(ui, |ui| {
                        for role in Role::ALL {
                            if ui
                                .selectable_label(role == current, role.to_string())
                                .clicked()
                                && role != current
                            {
                                events.push(AppIntent::RoleChangeRequested { role });
                            }
                        }
                    });
                ui.label("Role:");
            });
        });
    });

    events
}
