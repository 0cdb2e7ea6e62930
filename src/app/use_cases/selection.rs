//! Use-Cases für Zell-Selektion und Entscheidungswerkzeuge.

use crate::app::AppState;
use crate::core::{CellId, DecisionTool};

/// Selektiert eine Zelle; unbekannte IDs sind ein stiller No-op.
pub fn select_cell(state: &mut AppState, id: CellId) {
    match state.selection.select(id, &state.cells) {
        Ok(()) => log::debug!("Zelle {} selektiert", id),
        Err(e) => log::debug!("Klick ignoriert: {}", e),
    }
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    state.selection.deselect();
}

/// Öffnet ein Werkzeug, sofern eine Zelle selektiert ist und nichts lädt.
pub fn open_tool(state: &mut AppState, tool: DecisionTool) {
    if state.cells.is_loading() {
        log::debug!("Werkzeug während Regeneration nicht verfügbar");
        return;
    }
    if !state.selection.open_tool(tool) {
        log::debug!("Werkzeug {:?} ohne Selektion ignoriert", tool);
    }
}

pub fn close_tool(state: &mut AppState) {
    state.selection.close_tool();
}
