//! Handler für Dialoge, Export, Optionen und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::DashboardOptions;

/// Öffnet den Speichern-Dialog für den Zell-Export.
pub fn request_export_dialog(state: &mut AppState) {
    if state.selection.selected().is_none() {
        state.ui.status_message = Some("Select a hexagon to export".into());
        return;
    }
    state.ui.show_export_dialog = true;
}

pub fn export_selected(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    state.ui.show_export_dialog = false;
    use_cases::export::export_selected(state, path)
}

pub fn clear_status(state: &mut AppState) {
    state.ui.status_message = None;
}

/// Speichert die Optionen neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&DashboardOptions::config_path())?;
    state.ui.status_message = Some("Settings saved".into());
    Ok(())
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
