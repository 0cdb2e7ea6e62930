//! Wetterdienst: aktuelle Werte und Stundenvorhersage für einen Ort.

use crate::core::{
    AirQuality, CurrentWeather, Forecast, ForecastDay, ForecastHour, LatLon, SuburbInfo,
    WeatherLocation, WeatherQuery, FORECAST_MAX_DAYS,
};
use anyhow::anyhow;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

/// Externer Wetterdienst. Ein unbekannter Ort ist ein Fehler.
pub trait WeatherProvider: Send {
    fn current(&mut self, query: &WeatherQuery) -> anyhow::Result<CurrentWeather>;

    /// Vorhersage über `days` Tage (1 bis `FORECAST_MAX_DAYS`), je 24 Stunden.
    fn forecast(&mut self, query: &WeatherQuery, days: u8) -> anyhow::Result<Forecast>;
}

const CITIES: [(&str, f64, f64); 8] = [
    ("Melbourne", -37.814, 144.963),
    ("Sydney", -33.869, 151.209),
    ("Brisbane", -27.470, 153.026),
    ("Perth", -31.953, 115.857),
    ("Adelaide", -34.929, 138.601),
    ("Hobart", -42.882, 147.327),
    ("Darwin", -12.463, 130.845),
    ("Canberra", -35.281, 149.130),
];

/// Wetter ohne Netzwerk: plausible Werte aus Breitengrad, Jahreszeit und
/// Tageszeit, pro Ort und Tag reproduzierbar.
#[derive(Debug, Clone, Default)]
pub struct OfflineWeather {
    places: Vec<SuburbInfo>,
    clock: Option<NaiveDateTime>,
}

impl OfflineWeather {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zusätzliche Orte, die per Name abfragbar sind.
    pub fn with_places(mut self, places: Vec<SuburbInfo>) -> Self {
        self.places = places;
        self
    }

    /// Feste Uhrzeit statt der lokalen Systemzeit.
    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.clock = Some(now);
        self
    }

    fn now(&self) -> NaiveDateTime {
        self.clock
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }

    fn locate(&self, query: &WeatherQuery) -> anyhow::Result<WeatherLocation> {
        match query {
            WeatherQuery::Coords(position) if position.is_finite() => Ok(WeatherLocation {
                name: format!("{:.2}, {:.2}", position.lat, position.lon),
                position: *position,
            }),
            WeatherQuery::Coords(_) => Err(anyhow!("Invalid location")),
            WeatherQuery::City(name) | WeatherQuery::Suburb(name) => {
                let name = name.trim();
                CITIES
                    .iter()
                    .find(|(city, _, _)| city.eq_ignore_ascii_case(name))
                    .map(|&(city, lat, lon)| WeatherLocation {
                        name: city.to_string(),
                        position: LatLon::new(lat, lon),
                    })
                    .or_else(|| {
                        self.places
                            .iter()
                            .find(|p| p.name.eq_ignore_ascii_case(name))
                            .map(|p| WeatherLocation {
                                name: p.name.clone(),
                                position: p.position(),
                            })
                    })
                    .ok_or_else(|| anyhow!("Invalid location: {name}"))
            }
        }
    }
}

/// Klimamodell eines Ortes an einem Tag.
struct DayModel {
    rng: ChaCha8Rng,
    /// Tagesmittel in °C
    mean_c: f64,
    /// Sommer +1, Winter -1 (halbkugelgerecht)
    season: f64,
    abs_lat: f64,
}

impl DayModel {
    fn new(position: LatLon, date: NaiveDate) -> Self {
        let lat_key = (position.lat * 100.0).round() as i64;
        let lon_key = (position.lon * 100.0).round() as i64;
        let seed = (lat_key as u64)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ (lon_key as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
            ^ u64::from(date.num_days_from_ce().unsigned_abs());

        // Nordhalbkugel: Sommer um Tag 196, Südhalbkugel um Tag 15
        let peak = if position.lat < 0.0 { 15.0 } else { 196.0 };
        let season = (TAU * (f64::from(date.ordinal()) - peak) / 365.0).cos();
        let abs_lat = position.lat.abs().min(90.0);
        let mean_c = 28.0 - 0.35 * abs_lat + season * (2.0 + abs_lat * 0.15);

        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            mean_c,
            season,
            abs_lat,
        }
    }

    fn jitter(&mut self, spread: f64) -> f64 {
        (self.rng.gen::<f64>() - 0.5) * 2.0 * spread
    }

    fn hour(&mut self, time: NaiveDateTime) -> ForecastHour {
        let h = f64::from(time.hour());
        // Tagesgang mit Maximum gegen 15 Uhr
        let temp_c = self.mean_c + 5.0 * (TAU * (h - 9.0) / 24.0).sin() + self.jitter(0.8);
        let humidity = (65.0 - 2.5 * (temp_c - self.mean_c) + self.jitter(8.0)).clamp(15.0, 100.0);
        let wind_kph = (12.0 + self.jitter(8.0)).max(0.0);
        let precip_mm = if self.rng.gen::<f64>() < 0.12 {
            self.rng.gen::<f64>() * 2.0
        } else {
            0.0
        };
        let daylight = (6.0..=18.0).contains(&h);
        let uv = if daylight {
            ((TAU * (h - 6.0) / 24.0).sin() * (11.0 - self.abs_lat * 0.12)).max(0.0)
        } else {
            0.0
        };
        ForecastHour {
            time,
            temp_c,
            wind_kph,
            precip_mm,
            heatindex_c: heat_index(temp_c, humidity),
            dewpoint_c: dew_point(temp_c, humidity),
            humidity,
            pressure_mb: 1013.0 + self.jitter(8.0),
            uv,
        }
    }

    /// Sonnenauf- und -untergang aus der Tageslänge.
    fn sun_times(&self) -> (NaiveTime, NaiveTime) {
        let daylight_h = 12.0 + self.season * 4.0 * (self.abs_lat / 45.0).min(1.5);
        let half = daylight_h.clamp(2.0, 22.0) / 2.0;
        let at = |hours: f64| {
            NaiveTime::from_num_seconds_from_midnight_opt((hours * 3600.0) as u32, 0)
                .unwrap_or_default()
        };
        (at(12.5 - half), at(12.5 + half))
    }
}

/// Magnus-Näherung.
fn dew_point(temp_c: f64, humidity: f64) -> f64 {
    let (a, b) = (17.27, 237.7);
    let gamma = a * temp_c / (b + temp_c) + (humidity.max(1.0) / 100.0).ln();
    b * gamma / (a - gamma)
}

/// Gefühlte Temperatur bei Hitze, unter 27 °C gleich der Lufttemperatur.
fn heat_index(temp_c: f64, humidity: f64) -> f64 {
    if temp_c < 27.0 {
        temp_c
    } else {
        temp_c + 0.1 * (humidity - 40.0).max(0.0)
    }
}

impl WeatherProvider for OfflineWeather {
    fn current(&mut self, query: &WeatherQuery) -> anyhow::Result<CurrentWeather> {
        let location = self.locate(query)?;
        let now = self.now();
        let mut model = DayModel::new(location.position, now.date());
        let hour = model.hour(now);
        let (sunrise, sunset) = model.sun_times();
        let pm2_5 = (8.0 + model.jitter(6.0)).max(0.5);

        Ok(CurrentWeather {
            observed_at: now,
            temp_c: hour.temp_c,
            feelslike_c: hour.heatindex_c - hour.wind_kph * 0.05,
            humidity: hour.humidity,
            uv: hour.uv,
            wind_kph: hour.wind_kph,
            gust_kph: hour.wind_kph * 1.6,
            vis_km: if hour.precip_mm > 0.0 { 6.0 } else { 10.0 },
            dewpoint_c: hour.dewpoint_c,
            precip_mm: hour.precip_mm,
            cloud: (hour.humidity - 20.0).clamp(0.0, 100.0),
            pressure_mb: hour.pressure_mb,
            heatindex_c: hour.heatindex_c,
            air_quality: AirQuality {
                us_epa_index: if pm2_5 < 12.0 { 1 } else { 2 },
                pm2_5,
                pm10: pm2_5 * 1.8,
            },
            sunrise,
            sunset,
            location,
        })
    }

    fn forecast(&mut self, query: &WeatherQuery, days: u8) -> anyhow::Result<Forecast> {
        let location = self.locate(query)?;
        let today = self.now().date();
        let days = (0..days.clamp(1, FORECAST_MAX_DAYS))
            .filter_map(|offset| today.checked_add_days(chrono::Days::new(u64::from(offset))))
            .map(|date| {
                let mut model = DayModel::new(location.position, date);
                let hours = (0..24)
                    .filter_map(|h| date.and_hms_opt(h, 0, 0))
                    .map(|time| model.hour(time))
                    .collect();
                ForecastDay::from_hours(date, hours)
            })
            .collect();

        Ok(Forecast { location, days })
    }
}
