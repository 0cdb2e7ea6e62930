//! Application Controller für zentrale Event-Verarbeitung.

use super::collaborators::{Collaborators, RegenerationMode};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::SuburbIndex;
use crate::shared::{DashboardOptions, MapScene};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    collaborators: Collaborators,
    suburb_index: SuburbIndex,
    mode: RegenerationMode,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Controller mit lokalen Standard-Diensten und Inline-Regeneration.
    pub fn new() -> Self {
        Self::with_collaborators(
            Collaborators::offline(&DashboardOptions::default()),
            RegenerationMode::Inline,
        )
    }

    /// Controller mit expliziten Diensten.
    pub fn with_collaborators(collaborators: Collaborators, mode: RegenerationMode) -> Self {
        let suburb_index = SuburbIndex::from_suburbs(collaborators.seasonal.suburbs());
        log::info!(
            "Controller bereit: {} Vororte im Index, Regeneration {:?}",
            suburb_index.len(),
            mode
        );
        Self {
            collaborators,
            suburb_index,
            mode,
        }
    }

    pub fn mode(&self) -> RegenerationMode {
        self.mode
    }

    pub fn suburb_index(&self) -> &SuburbIndex {
        &self.suburb_index
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        let services = &mut self.collaborators;

        match command {
            // === Anmeldung & Navigation ===
            AppCommand::VerifyLogin { email, password } => handlers::session::verify_login(
                state,
                services.credentials.as_ref(),
                &email,
                &password,
            ),
            AppCommand::RegisterAccount { email, password } => handlers::session::register(
                state,
                services.credentials.as_mut(),
                &email,
                &password,
            ),
            AppCommand::Logout => handlers::session::logout(state),
            AppCommand::NavigateTo { page } => handlers::session::navigate(state, page),
            AppCommand::ChangeRole { role } => handlers::session::change_role(state, role),

            // === Karte ===
            AppCommand::ToggleLayer { key } => handlers::map::toggle_layer(state, &key),
            AppCommand::SetResolution { resolution } => {
                handlers::map::set_resolution(state, resolution)
            }
            AppCommand::SelectCell { id } => handlers::map::select_cell(state, id),
            AppCommand::ClearSelection => handlers::map::clear_selection(state),
            AppCommand::ApplyGeneratedCells { token, cells } => {
                handlers::map::apply_generated(state, token, cells)
            }
            AppCommand::FailRegeneration { token, message } => {
                handlers::map::fail_regeneration(state, token, &message)
            }

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomCamera { factor, anchor_px } => {
                handlers::view::zoom_towards(state, factor, anchor_px)
            }
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Detail-Panel ===
            AppCommand::OpenTool { tool } => handlers::map::open_tool(state, tool),
            AppCommand::CloseTool => handlers::map::close_tool(state),
            AppCommand::PredictTemperature { date, time } => {
                handlers::assistant::predict_temperature(
                    state,
                    services.assistant.as_mut(),
                    &date,
                    &time,
                )
            }
            AppCommand::RequestExportDialog => handlers::dialog::request_export_dialog(state),
            AppCommand::ExportSelectedCell { path } => {
                handlers::dialog::export_selected(state, &path)?
            }

            // === Chat & Trend ===
            AppCommand::SendChatMessage { text } => {
                handlers::assistant::send_chat(state, services.assistant.as_mut(), &text)
            }
            AppCommand::ClearChat => handlers::assistant::clear_chat(state),
            AppCommand::LoadTrendData { suburb } => handlers::trend::load(
                state,
                services.seasonal.as_ref(),
                &self.suburb_index,
                suburb,
            ),
            AppCommand::SetTrendVariable { variable } => {
                handlers::trend::set_variable(state, variable)
            }
            AppCommand::SetTrendYears { years } => handlers::trend::set_years(state, years),

            // === Wetter ===
            AppCommand::FetchCurrentWeather { query } => handlers::weather::fetch_current(
                state,
                services.weather.as_mut(),
                &self.suburb_index,
                query,
            ),
            AppCommand::FetchForecast { query, days } => handlers::weather::fetch_forecast(
                state,
                services.weather.as_mut(),
                &self.suburb_index,
                query,
                days,
            ),
            AppCommand::SetWeatherUnits { units } => handlers::weather::set_units(state, units),
            AppCommand::SetForecastMetric { metric } => {
                handlers::weather::set_metric(state, metric)
            }

            // === Anwendungssteuerung ===
            AppCommand::ClearStatusMessage => handlers::dialog::clear_status(state),
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        if self.mode == RegenerationMode::Inline {
            super::use_cases::regeneration::run_pending_inline(
                state,
                self.collaborators.metrics.as_mut(),
            );
        }

        Ok(())
    }

    /// Baut die Karten-Szene für den aktuellen Frame.
    pub fn build_map_scene(&self, state: &AppState) -> MapScene {
        render_scene::build(state)
    }
}
