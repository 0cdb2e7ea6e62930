//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::ActivePage;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{cell_at, CellId, LayerKey};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // ── Anmeldung ───────────────────────────────────────────
        AppIntent::LoginSubmitted { email, password } => {
            vec![AppCommand::VerifyLogin { email, password }]
        }
        AppIntent::SignupSubmitted { email, password } => {
            vec![AppCommand::RegisterAccount { email, password }]
        }
        AppIntent::LogoutRequested => vec![AppCommand::Logout],

        // ── Navigation & Rolle ──────────────────────────────────
        AppIntent::NavigateRequested { page } => {
            // Chat-Eintrag wirkt als Umschalter
            let target = if page == ActivePage::Chatbot
                && state.session.active_page == ActivePage::Chatbot
            {
                ActivePage::Dashboard
            } else {
                page
            };
            vec![AppCommand::NavigateTo { page: target }]
        }
        AppIntent::RoleChangeRequested { role } => vec![AppCommand::ChangeRole { role }],

        // ── Karte ───────────────────────────────────────────────
        AppIntent::LayerToggled { key } => {
            let load_trend = key == LayerKey::TrendGraph && !state.layers.is_active(&key);
            let mut commands = vec![AppCommand::ToggleLayer { key }];
            if load_trend {
                commands.push(AppCommand::LoadTrendData {
                    suburb: state.trend.suburb.clone(),
                });
            }
            commands
        }
        AppIntent::ResolutionChangeRequested { resolution } => {
            vec![AppCommand::SetResolution { resolution }]
        }
        AppIntent::CellClicked { id } => select_cell_commands(state, id),
        AppIntent::MapClicked { position } => {
            let resolution = state.cells.resolution().unwrap_or(state.view.resolution);
            match cell_at(position, resolution) {
                Some(id) => select_cell_commands(state, id),
                None => vec![],
            }
        }
        AppIntent::DeselectRequested => vec![AppCommand::ClearSelection],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta_px } => vec![AppCommand::PanCamera { delta_px }],
        AppIntent::CameraZoom { factor, anchor_px } => {
            vec![AppCommand::ZoomCamera { factor, anchor_px }]
        }
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],

        // ── Regeneration ────────────────────────────────────────
        AppIntent::CellsGenerated { token, cells } => {
            vec![AppCommand::ApplyGeneratedCells { token, cells }]
        }
        AppIntent::CellsGenerationFailed { token, message } => {
            vec![AppCommand::FailRegeneration { token, message }]
        }

        // ── Detail-Panel ────────────────────────────────────────
        AppIntent::ToolRequested { tool } => vec![AppCommand::OpenTool { tool }],
        AppIntent::ToolClosed => vec![AppCommand::CloseTool],
        AppIntent::ProjectionRequested { date, time } => {
            vec![AppCommand::PredictTemperature { date, time }]
        }
        AppIntent::ExportDialogRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportCellRequested { path } => vec![AppCommand::ExportSelectedCell { path }],

        // ── Chat & Trend ────────────────────────────────────────
        AppIntent::ChatMessageSubmitted { text } => vec![AppCommand::SendChatMessage { text }],
        AppIntent::ChatCleared => vec![AppCommand::ClearChat],
        AppIntent::TrendSuburbRequested { suburb } => vec![AppCommand::LoadTrendData { suburb }],
        AppIntent::TrendVariableChanged { variable } => {
            vec![AppCommand::SetTrendVariable { variable }]
        }
        AppIntent::TrendYearsChanged { years } => vec![AppCommand::SetTrendYears { years }],

        // ── Wetter ──────────────────────────────────────────────
        AppIntent::CurrentWeatherRequested { query } => {
            vec![AppCommand::FetchCurrentWeather { query }]
        }
        AppIntent::ForecastRequested { query, days } => {
            vec![AppCommand::FetchForecast { query, days }]
        }
        AppIntent::WeatherUnitsChanged { units } => vec![AppCommand::SetWeatherUnits { units }],
        AppIntent::ForecastMetricChanged { metric } => {
            vec![AppCommand::SetForecastMetric { metric }]
        }

        // ── Anwendung ───────────────────────────────────────────
        AppIntent::StatusDismissed => vec![AppCommand::ClearStatusMessage],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Zellklick im Chat-Modus schließt zuerst den Chat.
fn select_cell_commands(state: &AppState, id: CellId) -> Vec<AppCommand> {
    if state.session.active_page == ActivePage::Chatbot {
        vec![
            AppCommand::NavigateTo {
                page: ActivePage::Dashboard,
            },
            AppCommand::SelectCell { id },
        ]
    } else {
        vec![AppCommand::SelectCell { id }]
    }
}
