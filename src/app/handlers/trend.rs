//! Handler des Trend-Panels.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{SuburbIndex, TrendVariable};
use crate::services::SeasonalDataProvider;

pub fn load(
    state: &mut AppState,
    provider: &dyn SeasonalDataProvider,
    index: &SuburbIndex,
    suburb: Option<String>,
) {
    use_cases::trend::load(state, provider, index, suburb);
}

pub fn set_variable(state: &mut AppState, variable: TrendVariable) {
    use_cases::trend::set_variable(state, variable);
}

pub fn set_years(state: &mut AppState, years: usize) {
    use_cases::trend::set_years(state, years);
}
