//! Use-Cases der Sitzungssteuerung: Login, Logout, Navigation, Rollenwechsel.

use super::regeneration;
use crate::app::state::{ActivePage, ChatState, TrendState, WeatherState};
use crate::app::AppState;
use crate::core::{config_for, Role};

/// Startet eine Sitzung nach erfolgreicher Prüfung der Zugangsdaten.
///
/// Rolle auf Standard, Layer und Auflösung aus deren Konfiguration,
/// Selektion leer, Regeneration angestoßen.
pub fn start(state: &mut AppState, email: &str) {
    state.session.logged_in = true;
    state.session.user_email = Some(email.trim().to_lowercase());
    state.session.active_page = ActivePage::Dashboard;
    state.ui.login_form.password.clear();
    state.ui.login_form.error = None;
    log::info!("Angemeldet: {}", email.trim());
    apply_role(state, Role::default());
}

/// Beendet die Sitzung und verwirft alle Zellen.
pub fn logout(state: &mut AppState) {
    if !state.session.logged_in {
        log::debug!("Logout ohne Sitzung ignoriert");
        return;
    }
    let config = config_for(None);
    state.session.logged_in = false;
    state.session.user_email = None;
    state.session.role = config.role;
    state.session.active_page = ActivePage::Login;
    state.layers = config.default_layers.clone();
    state.view.resolution = config.resolution;
    state.view.refit_camera(state.options.initial_zoom_px_per_cell);
    state.selection.deselect();
    state.cells.clear();
    state.pending_regenerations.clear();
    state.rollback = None;
    state.chat = ChatState::default();
    state.trend = TrendState {
        years: state.options.trend_default_years,
        ..TrendState::default()
    };
    state.weather = WeatherState::default();
    log::info!("Abgemeldet");
}

/// Wechselt die aktive Seite.
///
/// Ein zweiter Klick auf den Chat wird vorher im Intent-Mapping zum
/// Rücksprung aufs Dashboard. Jeder echte Seitenwechsel hebt die Selektion auf.
pub fn navigate(state: &mut AppState, page: ActivePage) {
    if !state.session.logged_in {
        log::debug!("Navigation zu {:?} ohne Sitzung ignoriert", page);
        return;
    }
    if page == ActivePage::Login {
        log::debug!("Login-Seite nur über Logout erreichbar");
        return;
    }
    if page == state.session.active_page {
        return;
    }
    state.selection.deselect();
    state.session.active_page = page;
    log::info!("Seite gewechselt: {}", page.label());
}

/// Wechselt die Rolle: Layer und Auflösung werden komplett ersetzt.
pub fn change_role(state: &mut AppState, role: Role) {
    if !state.session.logged_in {
        log::debug!("Rollenwechsel ohne Sitzung ignoriert");
        return;
    }
    if role == state.session.role && regeneration::is_settled_at(state, state.view.resolution) {
        log::debug!("Rolle {:?} bereits aktiv, keine Änderung", role);
        return;
    }
    log::info!("Rolle gewechselt: {:?} → {:?}", state.session.role, role);
    apply_role(state, role);
}

fn apply_role(state: &mut AppState, role: Role) {
    regeneration::remember_applied(state);
    let config = config_for(Some(role));
    state.session.role = config.role;
    state.layers = config.default_layers.clone();
    state.view.resolution = config.resolution;
    state.view.refit_camera(state.options.initial_zoom_px_per_cell);
    regeneration::request(state);
}
