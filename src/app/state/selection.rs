use crate::core::{CellId, DecisionTool, HexCellStore};
use thiserror::Error;

/// Fehler der Zell-Selektion (Lookup-Miss, kein harter Fehler).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("Zelle {id} ist nicht im aktuellen Raster")]
    NotFound { id: CellId },
}

/// Selektierte Zelle und geöffnetes Werkzeug.
///
/// Hält nur die ID, nie eine Kopie der Zelle. Invariante: eine gesetzte ID
/// existiert im aktuellen `HexCellStore`; jede Regeneration invalidiert sie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<CellId>,
    active_tool: Option<DecisionTool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<CellId> {
        self.selected
    }

    pub fn is_selected(&self, id: CellId) -> bool {
        self.selected == Some(id)
    }

    pub fn active_tool(&self) -> Option<DecisionTool> {
        self.active_tool
    }

    /// Selektiert `id`, falls im Store vorhanden; das Werkzeug wird zurückgesetzt.
    ///
    /// Bei unbekannter ID bleibt die bisherige Selektion unverändert.
    pub fn select(&mut self, id: CellId, store: &HexCellStore) -> Result<(), SelectError> {
        if !store.contains(id) {
            return Err(SelectError::NotFound { id });
        }
        self.selected = Some(id);
        self.active_tool = None;
        Ok(())
    }

    /// Hebt Selektion und Werkzeug auf (idempotent).
    pub fn deselect(&mut self) {
        self.selected = None;
        self.active_tool = None;
    }

    /// Öffnet ein Werkzeug; nur mit selektierter Zelle.
    pub fn open_tool(&mut self, tool: DecisionTool) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.active_tool = Some(tool);
        true
    }

    pub fn close_tool(&mut self) {
        self.active_tool = None;
    }
}
