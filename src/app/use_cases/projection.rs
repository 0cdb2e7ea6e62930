//! Use-Case: Temperatur-Prognose für die selektierte Zelle.

use crate::app::AppState;
use crate::services::{parse_temperature, projection_prompt, AssistantClient, AssistantContext};
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Fragt den Assistenten nach der Temperatur zu Datum und Uhrzeit.
///
/// Numerische Antwort ⇒ Wert; sonst Monatsmittel der Zelle.
/// Fehler des Assistenten ⇒ Statusmeldung, Zelle unverändert.
pub fn predict(state: &mut AppState, assistant: &mut dyn AssistantClient, date: &str, time: &str) {
    let Some(id) = state.selection.selected() else {
        state.ui.status_message = Some("Select a hexagon first".into());
        return;
    };
    let Ok(date) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
        state.ui.status_message = Some("Please enter a date as YYYY-MM-DD".into());
        return;
    };
    let Ok(time) = NaiveTime::parse_from_str(time.trim(), "%H:%M") else {
        state.ui.status_message = Some("Please enter a time as HH:MM".into());
        return;
    };
    let Some(cell) = state.cells.get(id) else {
        log::debug!("Zelle {} nicht mehr vorhanden, Prognose verworfen", id);
        return;
    };

    let prompt = projection_prompt(cell, date, time);
    let context = AssistantContext {
        role: state.session.role,
        cell: Some(cell),
    };
    let value = match assistant.complete(&prompt, context) {
        Ok(text) => parse_temperature(&text).unwrap_or_else(|| {
            log::debug!("Antwort nicht numerisch, verwende Monatsmittel: {:?}", text);
            cell.metrics
                .monthly_average(date.month())
                .unwrap_or(cell.metrics.temperature)
        }),
        Err(e) => {
            log::warn!("Prognose fehlgeschlagen: {:#}", e);
            state.ui.status_message = Some("Failed to fetch temperature prediction".into());
            return;
        }
    };

    match state.cells.get_mut(id) {
        Some(cell) => {
            cell.metrics.projected_temp = Some(value);
            log::info!("Prognose für {}: {:.1} °C", id, value);
        }
        None => log::debug!("Zelle {} regeneriert, Prognose verworfen", id),
    }
}
