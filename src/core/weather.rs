//! Wetterdaten für Echtzeit- und Vorhersage-Fenster.
//!
//! Werte liegen intern immer metrisch vor; `UnitSystem` rechnet erst bei der
//! Anzeige um.

use super::geo::LatLon;
use super::role::Role;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use thiserror::Error;

/// Standard-Ort der Stadtabfrage.
pub const DEFAULT_WEATHER_CITY: &str = "Melbourne";
/// Standard-Vorort der Vorortabfrage.
pub const DEFAULT_WEATHER_SUBURB: &str = "Clayton";
pub const FORECAST_DEFAULT_DAYS: u8 = 3;
pub const FORECAST_MAX_DAYS: u8 = 5;

/// Art der Ortsangabe im Abfrageformular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherQueryMode {
    #[default]
    City,
    Coords,
    Suburb,
}

impl WeatherQueryMode {
    pub const ALL: [WeatherQueryMode; 3] = [
        WeatherQueryMode::City,
        WeatherQueryMode::Coords,
        WeatherQueryMode::Suburb,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeatherQueryMode::City => "City",
            WeatherQueryMode::Coords => "Lat/Lon",
            WeatherQueryMode::Suburb => "Suburb",
        }
    }
}

/// Ort einer Wetterabfrage.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coords(LatLon),
    /// Wird vor der Abfrage über das Vorort-Verzeichnis aufgelöst
    Suburb(String),
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherQuery::City(name) | WeatherQuery::Suburb(name) => f.write_str(name),
            WeatherQuery::Coords(p) => write!(f, "{:.2}, {:.2}", p.lat, p.lon),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherQueryError {
    #[error("Please enter a location")]
    Empty,
    #[error("Latitude and longitude must be numbers")]
    NotANumber,
    #[error("Coordinates out of range")]
    OutOfRange,
}

/// Eingaben des Abfrageformulars (Echtzeit und Vorhersage teilen sich eins).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherForm {
    pub mode: WeatherQueryMode,
    pub city: String,
    pub lat: String,
    pub lon: String,
    pub suburb: String,
    /// Vorhersagetage
    pub days: u8,
}

impl Default for WeatherForm {
    fn default() -> Self {
        Self {
            mode: WeatherQueryMode::default(),
            city: DEFAULT_WEATHER_CITY.to_string(),
            lat: String::new(),
            lon: String::new(),
            suburb: DEFAULT_WEATHER_SUBURB.to_string(),
            days: FORECAST_DEFAULT_DAYS,
        }
    }
}

impl WeatherForm {
    /// Baut die Abfrage zum gewählten Modus.
    pub fn query(&self) -> Result<WeatherQuery, WeatherQueryError> {
        match self.mode {
            WeatherQueryMode::City => non_empty(&self.city).map(WeatherQuery::City),
            WeatherQueryMode::Suburb => non_empty(&self.suburb).map(WeatherQuery::Suburb),
            WeatherQueryMode::Coords => {
                let (lat, lon) = (self.lat.trim(), self.lon.trim());
                if lat.is_empty() || lon.is_empty() {
                    return Err(WeatherQueryError::Empty);
                }
                let lat: f64 = lat.parse().map_err(|_| WeatherQueryError::NotANumber)?;
                let lon: f64 = lon.parse().map_err(|_| WeatherQueryError::NotANumber)?;
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                    return Err(WeatherQueryError::OutOfRange);
                }
                Ok(WeatherQuery::Coords(LatLon::new(lat, lon)))
            }
        }
    }
}

fn non_empty(input: &str) -> Result<String, WeatherQueryError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(WeatherQueryError::Empty)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Metrisch oder imperial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric",
            UnitSystem::Imperial => "Imperial",
        }
    }

    pub fn temperature(self, celsius: f64) -> f64 {
        match self {
            UnitSystem::Metric => celsius,
            UnitSystem::Imperial => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn speed(self, kph: f64) -> f64 {
        match self {
            UnitSystem::Metric => kph,
            UnitSystem::Imperial => kph * 0.621_371,
        }
    }

    pub fn length(self, mm: f64) -> f64 {
        match self {
            UnitSystem::Metric => mm,
            UnitSystem::Imperial => mm / 25.4,
        }
    }

    pub fn temperature_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn speed_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "mph",
        }
    }

    pub fn length_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "mm",
            UnitSystem::Imperial => "in",
        }
    }
}

/// Aufgelöster Ort einer Antwort.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherLocation {
    pub name: String,
    pub position: LatLon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQuality {
    /// US-EPA-Index 1 (gut) bis 6 (gefährlich)
    pub us_epa_index: u8,
    pub pm2_5: f64,
    pub pm10: f64,
}

/// Momentaufnahme am Ort.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub location: WeatherLocation,
    pub observed_at: NaiveDateTime,
    pub temp_c: f64,
    pub feelslike_c: f64,
    /// Prozent
    pub humidity: f64,
    pub uv: f64,
    pub wind_kph: f64,
    pub gust_kph: f64,
    pub vis_km: f64,
    pub dewpoint_c: f64,
    pub precip_mm: f64,
    /// Bewölkung in Prozent
    pub cloud: f64,
    pub pressure_mb: f64,
    pub heatindex_c: f64,
    pub air_quality: AirQuality,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}

/// Kennzahlen der Echtzeit-Ansicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentMetric {
    Temperature,
    FeelsLike,
    Humidity,
    Uv,
    Wind,
    Visibility,
    DewPoint,
    Precipitation,
    Cloud,
    Pressure,
    Gust,
    HeatIndex,
    AirQualityIndex,
    Pm2_5,
    Pm10,
}

impl CurrentMetric {
    const COMMON: [CurrentMetric; 6] = [
        CurrentMetric::Temperature,
        CurrentMetric::FeelsLike,
        CurrentMetric::Humidity,
        CurrentMetric::Uv,
        CurrentMetric::Wind,
        CurrentMetric::Visibility,
    ];

    /// Rollenabhängige Kennzahlen, gemeinsame zuerst.
    pub fn for_role(role: Role) -> Vec<CurrentMetric> {
        let extra: &[CurrentMetric] = match role {
            Role::GeneralPublic => &[],
            Role::Farmer => &[
                CurrentMetric::DewPoint,
                CurrentMetric::Precipitation,
                CurrentMetric::Cloud,
                CurrentMetric::Pressure,
                CurrentMetric::Gust,
                CurrentMetric::HeatIndex,
            ],
            Role::UrbanPlanner => &[
                CurrentMetric::AirQualityIndex,
                CurrentMetric::Pm2_5,
                CurrentMetric::Pm10,
                CurrentMetric::Pressure,
                CurrentMetric::Cloud,
                CurrentMetric::DewPoint,
            ],
        };
        Self::COMMON.iter().chain(extra).copied().collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            CurrentMetric::Temperature => "Temperature",
            CurrentMetric::FeelsLike => "Feels Like",
            CurrentMetric::Humidity => "Humidity",
            CurrentMetric::Uv => "UV Index",
            CurrentMetric::Wind => "Wind",
            CurrentMetric::Visibility => "Visibility",
            CurrentMetric::DewPoint => "Dew Point",
            CurrentMetric::Precipitation => "Precipitation",
            CurrentMetric::Cloud => "Cloud Cover",
            CurrentMetric::Pressure => "Pressure",
            CurrentMetric::Gust => "Wind Gust",
            CurrentMetric::HeatIndex => "Heat Index",
            CurrentMetric::AirQualityIndex => "AQI (US EPA)",
            CurrentMetric::Pm2_5 => "PM2.5",
            CurrentMetric::Pm10 => "PM10",
        }
    }

    /// Anzeigetext inklusive Einheit.
    pub fn format(self, weather: &CurrentWeather, units: UnitSystem) -> String {
        let t = |c: f64| format!("{:.1} {}", units.temperature(c), units.temperature_unit());
        let s = |k: f64| format!("{:.1} {}", units.speed(k), units.speed_unit());
        match self {
            CurrentMetric::Temperature => t(weather.temp_c),
            CurrentMetric::FeelsLike => t(weather.feelslike_c),
            CurrentMetric::DewPoint => t(weather.dewpoint_c),
            CurrentMetric::HeatIndex => t(weather.heatindex_c),
            CurrentMetric::Wind => s(weather.wind_kph),
            CurrentMetric::Gust => s(weather.gust_kph),
            CurrentMetric::Humidity => format!("{:.0} %", weather.humidity),
            CurrentMetric::Cloud => format!("{:.0} %", weather.cloud),
            CurrentMetric::Uv => format!("{:.1}", weather.uv),
            CurrentMetric::Visibility => match units {
                UnitSystem::Metric => format!("{:.1} km", weather.vis_km),
                UnitSystem::Imperial => format!("{:.1} mi", weather.vis_km * 0.621_371),
            },
            CurrentMetric::Precipitation => {
                format!("{:.2} {}", units.length(weather.precip_mm), units.length_unit())
            }
            CurrentMetric::Pressure => format!("{:.0} mb", weather.pressure_mb),
            CurrentMetric::AirQualityIndex => weather.air_quality.us_epa_index.to_string(),
            CurrentMetric::Pm2_5 => format!("{:.1} µg/m³", weather.air_quality.pm2_5),
            CurrentMetric::Pm10 => format!("{:.1} µg/m³", weather.air_quality.pm10),
        }
    }
}

/// Stundenwerte der Vorhersage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastHour {
    pub time: NaiveDateTime,
    pub temp_c: f64,
    pub wind_kph: f64,
    pub precip_mm: f64,
    pub heatindex_c: f64,
    pub dewpoint_c: f64,
    pub humidity: f64,
    pub pressure_mb: f64,
    pub uv: f64,
}

/// Ein Vorhersagetag mit 24 Stundenwerten.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub avg_temp_c: f64,
    pub total_precip_mm: f64,
    pub avg_humidity: f64,
    pub hours: Vec<ForecastHour>,
}

impl ForecastDay {
    /// Tageswerte aus den Stundenwerten.
    pub fn from_hours(date: NaiveDate, hours: Vec<ForecastHour>) -> Self {
        let n = hours.len().max(1) as f64;
        let temps = hours.iter().map(|h| h.temp_c);
        Self {
            date,
            max_temp_c: temps.clone().fold(f64::NEG_INFINITY, f64::max),
            min_temp_c: temps.clone().fold(f64::INFINITY, f64::min),
            avg_temp_c: temps.sum::<f64>() / n,
            total_precip_mm: hours.iter().map(|h| h.precip_mm).sum(),
            avg_humidity: hours.iter().map(|h| h.humidity).sum::<f64>() / n,
            hours,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub location: WeatherLocation,
    pub days: Vec<ForecastDay>,
}

/// Im Vorhersage-Diagramm wählbare Größe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastMetric {
    #[default]
    Temperature,
    Wind,
    Precipitation,
    HeatIndex,
    DewPoint,
}

impl ForecastMetric {
    pub const ALL: [ForecastMetric; 5] = [
        ForecastMetric::Temperature,
        ForecastMetric::Wind,
        ForecastMetric::Precipitation,
        ForecastMetric::HeatIndex,
        ForecastMetric::DewPoint,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ForecastMetric::Temperature => "Temperature",
            ForecastMetric::Wind => "Wind Speed",
            ForecastMetric::Precipitation => "Precipitation",
            ForecastMetric::HeatIndex => "Heat Index",
            ForecastMetric::DewPoint => "Dew Point",
        }
    }

    pub fn unit(self, units: UnitSystem) -> &'static str {
        match self {
            ForecastMetric::Temperature | ForecastMetric::HeatIndex | ForecastMetric::DewPoint => {
                units.temperature_unit()
            }
            ForecastMetric::Wind => units.speed_unit(),
            ForecastMetric::Precipitation => units.length_unit(),
        }
    }

    /// Stundenwert in der gewählten Einheit.
    pub fn value(self, hour: &ForecastHour, units: UnitSystem) -> f64 {
        match self {
            ForecastMetric::Temperature => units.temperature(hour.temp_c),
            ForecastMetric::HeatIndex => units.temperature(hour.heatindex_c),
            ForecastMetric::DewPoint => units.temperature(hour.dewpoint_c),
            ForecastMetric::Wind => units.speed(hour.wind_kph),
            ForecastMetric::Precipitation => units.length(hour.precip_mm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn coords_form_is_validated() {
        let mut form = WeatherForm {
            mode: WeatherQueryMode::Coords,
            lat: " -37.81 ".into(),
            lon: "144.96".into(),
            ..WeatherForm::default()
        };
        assert_eq!(
            form.query(),
            Ok(WeatherQuery::Coords(LatLon::new(-37.81, 144.96)))
        );

        form.lon = "east".into();
        assert_eq!(form.query(), Err(WeatherQueryError::NotANumber));
        form.lon = "190".into();
        assert_eq!(form.query(), Err(WeatherQueryError::OutOfRange));
        form.lat.clear();
        assert_eq!(form.query(), Err(WeatherQueryError::Empty));
    }

    #[test]
    fn default_form_queries_melbourne() {
        let form = WeatherForm::default();
        assert_eq!(form.query(), Ok(WeatherQuery::City("Melbourne".into())));

        let suburb = WeatherForm {
            mode: WeatherQueryMode::Suburb,
            suburb: "   ".into(),
            ..WeatherForm::default()
        };
        assert_eq!(suburb.query(), Err(WeatherQueryError::Empty));
    }

    #[test]
    fn imperial_conversions() {
        let units = UnitSystem::Imperial;
        assert_relative_eq!(units.temperature(100.0), 212.0);
        assert_relative_eq!(units.temperature(-40.0), -40.0);
        assert_relative_eq!(units.length(25.4), 1.0);
        assert_relative_eq!(units.speed(100.0), 62.1371, epsilon = 1e-4);
        assert_eq!(ForecastMetric::Precipitation.unit(units), "in");
        assert_eq!(ForecastMetric::DewPoint.unit(UnitSystem::Metric), "°C");
    }

    #[test]
    fn role_metric_lists() {
        let public = CurrentMetric::for_role(Role::GeneralPublic);
        assert_eq!(public.len(), 6);

        let farmer = CurrentMetric::for_role(Role::Farmer);
        assert_eq!(farmer.len(), 12);
        assert_eq!(&farmer[..6], &public[..]);
        assert!(farmer.contains(&CurrentMetric::Gust));
        assert!(!farmer.contains(&CurrentMetric::Pm10));

        let planner = CurrentMetric::for_role(Role::UrbanPlanner);
        assert!(planner.contains(&CurrentMetric::AirQualityIndex));
        assert!(!planner.contains(&CurrentMetric::HeatIndex));
    }

    #[test]
    fn day_summary_from_hours() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).expect("gültiges Datum");
        let hour = |h: u32, temp_c: f64, precip_mm: f64| ForecastHour {
            time: date.and_hms_opt(h, 0, 0).expect("gültige Uhrzeit"),
            temp_c,
            wind_kph: 10.0,
            precip_mm,
            heatindex_c: temp_c,
            dewpoint_c: 8.0,
            humidity: 50.0,
            pressure_mb: 1015.0,
            uv: 3.0,
        };
        let day = ForecastDay::from_hours(date, vec![hour(0, 12.0, 0.5), hour(12, 24.0, 1.0)]);
        assert_relative_eq!(day.max_temp_c, 24.0);
        assert_relative_eq!(day.min_temp_c, 12.0);
        assert_relative_eq!(day.avg_temp_c, 18.0);
        assert_relative_eq!(day.total_precip_mm, 1.5);
    }
}
