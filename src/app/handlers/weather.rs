//! Handler der Wetterfenster.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ForecastMetric, SuburbIndex, UnitSystem, WeatherQuery};
use crate::services::WeatherProvider;

pub fn fetch_current(
    state: &mut AppState,
    provider: &mut dyn WeatherProvider,
    index: &SuburbIndex,
    query: WeatherQuery,
) {
    use_cases::weather::fetch_current(state, provider, index, query);
}

pub fn fetch_forecast(
    state: &mut AppState,
    provider: &mut dyn WeatherProvider,
    index: &SuburbIndex,
    query: WeatherQuery,
    days: u8,
) {
    use_cases::weather::fetch_forecast(state, provider, index, query, days);
}

pub fn set_units(state: &mut AppState, units: UnitSystem) {
    use_cases::weather::set_units(state, units);
}

pub fn set_metric(state: &mut AppState, metric: ForecastMetric) {
    use_cases::weather::set_metric(state, metric);
}
