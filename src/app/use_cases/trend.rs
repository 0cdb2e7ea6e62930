//! Use-Cases des saisonalen Trend-Panels.

use crate::app::AppState;
use crate::core::{SuburbIndex, TrendVariable};
use crate::services::SeasonalDataProvider;

/// Lädt Saisondaten; ohne Vorort wird der nächstgelegene zur Selektion
/// (bzw. zum Kartenzentrum) verwendet.
pub fn load(
    state: &mut AppState,
    provider: &dyn SeasonalDataProvider,
    index: &SuburbIndex,
    suburb: Option<String>,
) {
    let requested = suburb
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let (name, state_filter) = match requested {
        Some(name) => (name, None),
        None => {
            let position = state
                .selection
                .selected()
                .and_then(|id| state.cells.get(id))
                .map(|cell| cell.center)
                .unwrap_or(state.view.center);
            match index.nearest(position) {
                Some(hit) => (hit.suburb.name, hit.suburb.state),
                None => {
                    state.ui.status_message = Some("No suburb data available".into());
                    return;
                }
            }
        }
    };

    match provider.seasonal_records(&name, state_filter.as_deref()) {
        Ok(records) => {
            if records.is_empty() {
                state.ui.status_message = Some(format!("No seasonal data for {name}"));
            }
            log::info!("Trenddaten für {}: {} Jahre", name, records.len());
            state.ui.trend_suburb_input = name.clone();
            state.trend.suburb = Some(name);
            state.trend.state_filter = state_filter;
            state.trend.records = records;
        }
        Err(e) => {
            log::warn!("Saisondaten für {} fehlgeschlagen: {:#}", name, e);
            state.ui.status_message = Some("Failed to fetch seasonal data".into());
        }
    }
}

pub fn set_variable(state: &mut AppState, variable: TrendVariable) {
    state.trend.variable = variable;
}

/// Setzt das Zeitfenster (1 bis zur Jahres-Obergrenze).
pub fn set_years(state: &mut AppState, years: usize) {
    state.trend.years = years.clamp(1, state.options.seasonal_record_cap.max(1));
}
