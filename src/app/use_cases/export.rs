//! Use-Case: selektierte Zelle als JSON exportieren.

use crate::app::AppState;
use crate::core::{to_polygon, CellId, CellMetrics};
use anyhow::Context;
use serde::Serialize;

#[derive(Serialize)]
struct CellExport<'a> {
    id: CellId,
    resolution: u8,
    /// [lon, lat]
    center: [f64; 2],
    /// Geschlossener Ring, [lon, lat]
    polygon: Vec<[f64; 2]>,
    metrics: &'a CellMetrics,
}

/// Schreibt die selektierte Zelle nach `path`.
pub fn export_selected(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let Some(cell) = state.selection.selected().and_then(|id| state.cells.get(id)) else {
        state.ui.status_message = Some("Select a hexagon to export".into());
        return Ok(());
    };

    let export = CellExport {
        id: cell.id,
        resolution: cell.id.resolution(),
        center: cell.center.to_geojson(),
        polygon: to_polygon(cell).into_iter().map(|p| p.to_geojson()).collect(),
        metrics: &cell.metrics,
    };
    let id = cell.id;
    let json = serde_json::to_string_pretty(&export)?;

    if let Err(e) = std::fs::write(path, json) {
        state.ui.status_message = Some(format!("Export failed: {e}"));
        return Err(e).with_context(|| format!("Zell-Export nach {path} fehlgeschlagen"));
    }
    log::info!("Zelle {} exportiert nach {}", id, path);
    state.ui.status_message = Some(format!("Exported cell {id}"));
    Ok(())
}
