//! Builder für Karten-Szenen aus dem AppState.

use crate::app::use_cases::style::cell_style;
use crate::app::AppState;
use crate::shared::{MapScene, ScenePolygon};

/// Baut eine MapScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> MapScene {
    let polygons = state
        .cells
        .iter()
        .map(|cell| ScenePolygon {
            id: cell.id,
            ring: cell.to_polygon(),
            style: cell_style(state, cell.id),
        })
        .collect();

    // Hervorhebung nur dort, wo die Karte sichtbar ist
    let highlighted = if state.session.active_page.shows_map() {
        state.selection.selected()
    } else {
        None
    };

    MapScene {
        polygons,
        camera: state.view.camera.clone(),
        highlighted,
        loading: state.cells.is_loading(),
    }
}
