//! Use-Cases für die Regeneration der Zellmenge.

use crate::app::state::AppliedView;
use crate::app::AppState;
use crate::core::{GenerationToken, HexCell, MetricsSource, RegenerationRequest};

/// Startet eine Regeneration für aktuelle Auflösung und Zentrum.
///
/// Invalidiert die Selektion sofort und reiht den Auftrag in
/// `pending_regenerations` ein; ältere Aufträge werden veraltet.
pub fn request(state: &mut AppState) -> GenerationToken {
    state.selection.deselect();

    let center = state.view.center;
    let resolution = state.view.resolution;
    let token = state.cells.begin_generation(center, resolution);
    state.pending_regenerations.push(RegenerationRequest {
        token,
        center,
        resolution,
        policy: state.options.grid,
    });
    log::debug!(
        "Regeneration angefordert (Token {}, Auflösung {})",
        token.0,
        resolution
    );
    token
}

/// Merkt Rolle, Layer und Auflösung vor einer Änderung, die regeneriert.
///
/// Nur der Stand der übernommenen Zellmenge zählt: läuft schon eine
/// Regeneration mit Rücksprungziel, bleibt dieses erhalten.
pub fn remember_applied(state: &mut AppState) {
    if state.rollback.is_some() {
        return;
    }
    let Some(resolution) = state.cells.resolution() else {
        return;
    };
    state.rollback = Some(AppliedView {
        role: state.session.role,
        layers: state.layers.clone(),
        resolution,
    });
}

/// Gibt `true` zurück, wenn `resolution` übernommen ist oder gerade lädt.
pub fn is_settled_at(state: &AppState, resolution: u8) -> bool {
    state.view.resolution == resolution
        && (state.cells.is_loading() || state.cells.resolution() == Some(resolution))
}

/// Entnimmt alle wartenden Aufträge (für Worker oder Inline-Ausführung).
pub fn take_pending(state: &mut AppState) -> Vec<RegenerationRequest> {
    std::mem::take(&mut state.pending_regenerations)
}

/// Übernimmt ein Ergebnis, sofern das Token aktuell ist.
pub fn apply_generated(state: &mut AppState, token: GenerationToken, cells: Vec<HexCell>) -> bool {
    if !state.cells.is_current(token) {
        log::debug!("Regeneration {} ist veraltet, Ergebnis verworfen", token.0);
        return false;
    }

    // Während des Ladens gewählte Zellen gehören zur alten Menge
    state.selection.deselect();
    let count = cells.len();
    let applied = state.cells.apply(token, cells);
    if applied {
        state.rollback = None;
        log::info!(
            "{} Zellen erzeugt (Auflösung {})",
            count,
            state.view.resolution
        );
    }
    applied
}

/// Beendet eine fehlgeschlagene Regeneration; bisherige Zellen bleiben sichtbar.
///
/// Rolle, Layer und Auflösung springen auf den Stand der Zellen zurück,
/// damit dieselbe Änderung erneut angefordert werden kann.
pub fn fail(state: &mut AppState, token: GenerationToken, message: &str) {
    if state.cells.fail(token) {
        log::warn!("Regeneration {} fehlgeschlagen: {}", token.0, message);
        if let Some(previous) = state.rollback.take() {
            log::info!(
                "Zurück auf Rolle {:?}, Auflösung {}",
                previous.role,
                previous.resolution
            );
            state.session.role = previous.role;
            state.layers = previous.layers;
            state.view.resolution = previous.resolution;
            state.view.refit_camera(state.options.initial_zoom_px_per_cell);
        }
        state.ui.status_message = Some(format!("Failed to load map data: {message}"));
    } else {
        log::debug!("Fehler der veralteten Regeneration {} ignoriert", token.0);
    }
}

/// Führt alle wartenden Aufträge synchron aus.
pub fn run_pending_inline(state: &mut AppState, source: &mut dyn MetricsSource) {
    for request in take_pending(state) {
        match request.execute(source) {
            Ok(cells) => {
                apply_generated(state, request.token, cells);
            }
            Err(e) => fail(state, request.token, &e.to_string()),
        }
    }
}
