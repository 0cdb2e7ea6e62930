//! Handler für Anmeldung, Navigation und Rollenwechsel.

use crate::app::state::ActivePage;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Role;
use crate::services::{CredentialError, CredentialStore};

/// Prüft Zugangsdaten; bei Erfolg startet die Sitzung.
pub fn verify_login(
    state: &mut AppState,
    credentials: &dyn CredentialStore,
    email: &str,
    password: &str,
) {
    match credentials.login(email, password) {
        Ok(()) => use_cases::session::start(state, email),
        Err(e) => report(state, e),
    }
}

/// Registriert ein Konto; bei Erfolg startet die Sitzung direkt.
pub fn register(
    state: &mut AppState,
    credentials: &mut dyn CredentialStore,
    email: &str,
    password: &str,
) {
    match credentials.signup(email, password) {
        Ok(()) => use_cases::session::start(state, email),
        Err(e) => report(state, e),
    }
}

fn report(state: &mut AppState, error: CredentialError) {
    if let CredentialError::Storage(detail) = &error {
        log::warn!("Zugangsdaten-Dienst fehlgeschlagen: {}", detail);
    } else {
        log::debug!("Anmeldung abgelehnt: {}", error);
    }
    state.ui.login_form.error = Some(error.to_string());
}

pub fn logout(state: &mut AppState) {
    use_cases::session::logout(state);
}

pub fn navigate(state: &mut AppState, page: ActivePage) {
    use_cases::session::navigate(state, page);
}

pub fn change_role(state: &mut AppState, role: Role) {
    use_cases::session::change_role(state, role);
}
