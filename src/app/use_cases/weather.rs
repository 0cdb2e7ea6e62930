//! Use-Cases der Echtzeit- und Vorhersage-Fenster.
//!
//! Fehler landen nur in der Statusmeldung; Sitzung, Layer und Selektion
//! bleiben unberührt.

use crate::app::AppState;
use crate::core::{ForecastMetric, SuburbIndex, UnitSystem, WeatherQuery, FORECAST_MAX_DAYS};
use crate::services::WeatherProvider;

/// Vorort-Abfragen werden über das Verzeichnis zu Koordinaten aufgelöst.
///
/// Liefert die Abfrage für den Dienst und ggf. den Anzeigenamen.
fn resolve(
    query: WeatherQuery,
    index: &SuburbIndex,
) -> Result<(WeatherQuery, Option<String>), String> {
    match query {
        WeatherQuery::Suburb(name) => match index.find_by_name(&name) {
            Some(info) => Ok((WeatherQuery::Coords(info.position()), Some(info.name.clone()))),
            None => Err(format!("Unknown suburb: {}", name.trim())),
        },
        other => Ok((other, None)),
    }
}

pub fn fetch_current(
    state: &mut AppState,
    provider: &mut dyn WeatherProvider,
    index: &SuburbIndex,
    query: WeatherQuery,
) {
    let (resolved, display_name) = match resolve(query, index) {
        Ok(resolved) => resolved,
        Err(message) => {
            state.ui.status_message = Some(message);
            return;
        }
    };

    match provider.current(&resolved) {
        Ok(mut weather) => {
            if let Some(name) = display_name {
                weather.location.name = name;
            }
            log::info!(
                "Aktuelles Wetter für {}: {:.1} °C",
                weather.location.name,
                weather.temp_c
            );
            state.weather.current = Some(weather);
        }
        Err(e) => {
            log::warn!("Wetterabfrage für {} fehlgeschlagen: {:#}", resolved, e);
            state.ui.status_message = Some("Failed to fetch weather data".into());
        }
    }
}

/// Vorhersage über 1 bis `FORECAST_MAX_DAYS` Tage.
pub fn fetch_forecast(
    state: &mut AppState,
    provider: &mut dyn WeatherProvider,
    index: &SuburbIndex,
    query: WeatherQuery,
    days: u8,
) {
    let days = days.clamp(1, FORECAST_MAX_DAYS);
    state.weather.days = days;

    let (resolved, display_name) = match resolve(query, index) {
        Ok(resolved) => resolved,
        Err(message) => {
            state.ui.status_message = Some(message);
            return;
        }
    };

    match provider.forecast(&resolved, days) {
        Ok(mut forecast) => {
            if let Some(name) = display_name {
                forecast.location.name = name;
            }
            log::info!(
                "Vorhersage für {}: {} Tage",
                forecast.location.name,
                forecast.days.len()
            );
            state.weather.forecast = Some(forecast);
        }
        Err(e) => {
            log::warn!("Vorhersage für {} fehlgeschlagen: {:#}", resolved, e);
            state.ui.status_message = Some("Failed to fetch forecast".into());
        }
    }
}

pub fn set_units(state: &mut AppState, units: UnitSystem) {
    state.weather.units = units;
}

pub fn set_metric(state: &mut AppState, metric: ForecastMetric) {
    state.weather.metric = metric;
}
