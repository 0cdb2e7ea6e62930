//! Handler für Prognose und Chat (KI-Assistent).

use crate::app::use_cases;
use crate::app::AppState;
use crate::services::AssistantClient;

pub fn predict_temperature(
    state: &mut AppState,
    assistant: &mut dyn AssistantClient,
    date: &str,
    time: &str,
) {
    use_cases::projection::predict(state, assistant, date, time);
}

pub fn send_chat(state: &mut AppState, assistant: &mut dyn AssistantClient, text: &str) {
    use_cases::chat::send(state, assistant, text);
}

pub fn clear_chat(state: &mut AppState) {
    use_cases::chat::clear(state);
}
