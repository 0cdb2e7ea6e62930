//! Use-Cases für Layer-Schalter und Raster-Auflösung.

use super::regeneration;
use crate::app::AppState;
use crate::core::{LayerKey, MAX_RESOLUTION};

/// Schaltet einen Layer um (exklusiv für Karten-Layer).
pub fn toggle(state: &mut AppState, key: &LayerKey) {
    state.layers.toggle(key);
    log::debug!(
        "Layer '{}' → {}",
        key,
        if state.layers.is_active(key) { "an" } else { "aus" }
    );
}

/// Ändert die Raster-Auflösung manuell; Layer bleiben erhalten.
pub fn set_resolution(state: &mut AppState, resolution: u8) {
    if !state.session.logged_in {
        log::debug!("Auflösungswechsel ohne Sitzung ignoriert");
        return;
    }
    if resolution > MAX_RESOLUTION {
        state.ui.status_message = Some(format!(
            "Resolution must be between 0 and {MAX_RESOLUTION}"
        ));
        return;
    }
    if regeneration::is_settled_at(state, resolution) {
        return;
    }
    log::info!(
        "Auflösung gewechselt: {} → {}",
        state.view.resolution,
        resolution
    );
    regeneration::remember_applied(state);
    state.view.resolution = resolution;
    state.view.refit_camera(state.options.initial_zoom_px_per_cell);
    regeneration::request(state);
}
