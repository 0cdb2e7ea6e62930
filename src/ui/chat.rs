//! Chat-Panel des KI-Assistenten.

use crate::app::state::ChatAuthor;
use crate::app::{AppIntent, AppState};

/// Rendert das Chat-Panel (rechts, neben der Karte).
pub fn render_chat_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("chat_panel")
        .default_width(320.0)
        .min_width(240.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Assistant");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Clear").clicked() {
                        events.push(AppIntent::ChatCleared);
                    }
                });
            });
            ui.separator();

            let input_height = 64.0;
            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - input_height)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if state.chat.messages().is_empty() {
                        ui.weak("Ask about the conditions in the selected area.");
                    }
                    for message in state.chat.messages() {
                        let (who, color) = match message.author {
                            ChatAuthor::User => ("You", egui::Color32::LIGHT_BLUE),
                            ChatAuthor::Assistant => ("Assistant", egui::Color32::LIGHT_GREEN),
                        };
                        ui.colored_label(color, who);
                        ui.label(&message.text);
                        ui.add_space(6.0);
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(&mut state.ui.chat_input)
                        .hint_text("Type a message")
                        .desired_width(ui.available_width() - 60.0),
                );
                let enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Send").clicked() || enter {
                    let text = std::mem::take(&mut state.ui.chat_input);
                    events.push(AppIntent::ChatMessageSubmitted { text });
                }
            });
        });

    events
}
