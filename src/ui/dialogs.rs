//! Datei-Dialoge.

use crate::app::{AppIntent, UiState};
use crate::core::CellId;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet den ausstehenden Export-Dialog und gibt AppIntents zurück.
pub fn handle_export_dialog(ui_state: &mut UiState, selected: Option<CellId>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        let default_name = selected
            .map(|id| format!("cell_{id}.json"))
            .unwrap_or_else(|| "cell.json".to_string());

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(&default_name)
            .save_file()
        {
            events.push(AppIntent::ExportCellRequested {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
