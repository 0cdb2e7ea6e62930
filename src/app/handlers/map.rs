//! Handler für Layer, Auflösung, Selektion und Regeneration.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CellId, DecisionTool, GenerationToken, HexCell, LayerKey};

pub fn toggle_layer(state: &mut AppState, key: &LayerKey) {
    use_cases::layers::toggle(state, key);
}

pub fn set_resolution(state: &mut AppState, resolution: u8) {
    use_cases::layers::set_resolution(state, resolution);
}

pub fn select_cell(state: &mut AppState, id: CellId) {
    use_cases::selection::select_cell(state, id);
}

pub fn clear_selection(state: &mut AppState) {
    use_cases::selection::clear(state);
}

pub fn open_tool(state: &mut AppState, tool: DecisionTool) {
    use_cases::selection::open_tool(state, tool);
}

pub fn close_tool(state: &mut AppState) {
    use_cases::selection::close_tool(state);
}

/// Übernimmt Zellen eines Workers (veraltete Tokens werden verworfen).
pub fn apply_generated(state: &mut AppState, token: GenerationToken, cells: Vec<HexCell>) {
    use_cases::regeneration::apply_generated(state, token, cells);
}

pub fn fail_regeneration(state: &mut AppState, token: GenerationToken, message: &str) {
    use_cases::regeneration::fail(state, token, message);
}
