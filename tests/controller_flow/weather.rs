use super::{collaborators, logged_in, send, CLAYTON};
use climates_dashboard::core::{
    CurrentWeather, Forecast, ForecastMetric, UnitSystem, WeatherQuery, FORECAST_MAX_DAYS,
};
use climates_dashboard::services::{OfflineWeather, WeatherProvider};
use climates_dashboard::{
    AppController, AppIntent, AppState, LayerKey, RegenerationMode, Role,
};
use chrono::NaiveDate;

/// Wetterdienst ohne Verbindung.
struct Offline;

impl WeatherProvider for Offline {
    fn current(&mut self, _: &WeatherQuery) -> anyhow::Result<CurrentWeather> {
        anyhow::bail!("upstream timeout")
    }

    fn forecast(&mut self, _: &WeatherQuery, _: u8) -> anyhow::Result<Forecast> {
        anyhow::bail!("upstream timeout")
    }
}

fn fixed_weather() -> OfflineWeather {
    let noon = NaiveDate::from_ymd_opt(2025, 2, 3)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("gültiger Zeitpunkt");
    OfflineWeather::new().at(noon)
}

#[test]
fn test_suburb_forecast_uses_directory_position() {
    let mut controller = AppController::with_collaborators(
        collaborators().with_weather(fixed_weather()),
        RegenerationMode::Inline,
    );
    let mut state = AppState::new();
    super::login(&mut controller, &mut state);

    send(
        &mut controller,
        &mut state,
        AppIntent::ForecastRequested {
            query: WeatherQuery::Suburb("clayton".into()),
            days: 2,
        },
    );

    let forecast = state.weather.forecast.as_ref().expect("Vorhersage erwartet");
    assert_eq!(forecast.location.name, "Clayton");
    assert_eq!(forecast.location.position, CLAYTON);
    assert_eq!(forecast.days.len(), 2);
    assert_eq!(state.weather.days, 2);

    send(
        &mut controller,
        &mut state,
        AppIntent::WeatherUnitsChanged {
            units: UnitSystem::Imperial,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ForecastMetricChanged {
            metric: ForecastMetric::Precipitation,
        },
    );
    assert_eq!(state.weather.units, UnitSystem::Imperial);
    assert_eq!(state.weather.metric, ForecastMetric::Precipitation);
}

#[test]
fn test_current_weather_for_city() {
    let (mut controller, mut state) = logged_in();
    send(
        &mut controller,
        &mut state,
        AppIntent::CurrentWeatherRequested {
            query: WeatherQuery::City("Melbourne".into()),
        },
    );
    let current = state.weather.current.as_ref().expect("Wetter erwartet");
    assert_eq!(current.location.name, "Melbourne");
    assert!(state.ui.status_message.is_none());
}

#[test]
fn test_failed_weather_fetch_leaves_session_untouched() {
    let mut controller = AppController::with_collaborators(
        collaborators().with_weather(Offline),
        RegenerationMode::Inline,
    );
    let mut state = AppState::new();
    super::login(&mut controller, &mut state);
    send(
        &mut controller,
        &mut state,
        AppIntent::RoleChangeRequested { role: Role::Farmer },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::LayerToggled {
            key: LayerKey::Forecast,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::MapClicked { position: CLAYTON },
    );

    let selected = state.selection.selected();
    let layers = state.layers.clone();
    let cells = state.cell_count();
    assert!(selected.is_some());

    send(
        &mut controller,
        &mut state,
        AppIntent::CurrentWeatherRequested {
            query: WeatherQuery::City("Melbourne".into()),
        },
    );
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("Failed to fetch weather data")
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::ForecastRequested {
            query: WeatherQuery::Coords(CLAYTON),
            days: 12,
        },
    );
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("Failed to fetch forecast")
    );
    assert_eq!(state.weather.days, FORECAST_MAX_DAYS);

    assert!(state.is_logged_in());
    assert_eq!(state.session.role, Role::Farmer);
    assert_eq!(state.layers, layers);
    assert_eq!(state.selection.selected(), selected);
    assert_eq!(state.cell_count(), cells);
    assert!(state.weather.current.is_none());
    assert!(state.weather.forecast.is_none());
}

#[test]
fn test_logout_clears_weather_results() {
    let (mut controller, mut state) = logged_in();
    send(
        &mut controller,
        &mut state,
        AppIntent::CurrentWeatherRequested {
            query: WeatherQuery::Coords(CLAYTON),
        },
    );
    assert!(state.weather.current.is_some());

    send(&mut controller, &mut state, AppIntent::LogoutRequested);
    assert!(state.weather.current.is_none());
}
