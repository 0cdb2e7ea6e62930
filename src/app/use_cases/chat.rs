//! Use-Cases des Chat-Panels.

use crate::app::state::ChatAuthor;
use crate::app::AppState;
use crate::services::{chat_prompt, AssistantClient, AssistantContext};

/// Sendet eine Nachricht; Verlauf wird nur bei Erfolg ergänzt.
pub fn send(state: &mut AppState, assistant: &mut dyn AssistantClient, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    let context = AssistantContext {
        role: state.session.role,
        cell: state
            .selection
            .selected()
            .and_then(|id| state.cells.get(id)),
    };
    let prompt = chat_prompt(text, context);

    match assistant.complete(&prompt, context) {
        Ok(reply) => {
            state.chat.push(ChatAuthor::User, text);
            state.chat.push(ChatAuthor::Assistant, reply.trim());
            state.ui.chat_input.clear();
        }
        Err(e) => {
            log::warn!("Chat-Anfrage fehlgeschlagen: {:#}", e);
            state.ui.status_message = Some("Failed to reach the assistant".into());
        }
    }
}

pub fn clear(state: &mut AppState) {
    state.chat.clear();
}
