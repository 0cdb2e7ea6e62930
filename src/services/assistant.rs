//! KI-Assistent: Prompt rein, Freitext raus.

use crate::core::{CellMetrics, HexCell, Role};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Kontext einer Anfrage (Rolle und ggf. selektierte Zelle).
#[derive(Debug, Clone, Copy)]
pub struct AssistantContext<'a> {
    pub role: Role,
    pub cell: Option<&'a HexCell>,
}

/// Externer Assistent. Nur der fertige Antworttext wird konsumiert.
pub trait AssistantClient: Send {
    fn complete(&mut self, prompt: &str, context: AssistantContext<'_>) -> anyhow::Result<String>;
}

/// Baut den Prompt für eine Temperatur-Prognose.
pub fn projection_prompt(cell: &HexCell, date: NaiveDate, time: NaiveTime) -> String {
    format!(
        "You are a climate model. Current temperature at latitude {:.4}, longitude {:.4} is {:.1} °C. \
         Predict the air temperature on {} at {}. Reply with a single number in degrees Celsius.",
        cell.center.lat,
        cell.center.lon,
        cell.metrics.temperature,
        date.format("%Y-%m-%d"),
        time.format("%H:%M")
    )
}

/// Baut den rollenbezogenen Chat-Prompt.
pub fn chat_prompt(message: &str, context: AssistantContext<'_>) -> String {
    let mut prompt = format!(
        "You are a helpful climate assistant for a {} user. ",
        context.role
    );
    if let Some(cell) = context.cell {
        let m = &cell.metrics;
        prompt.push_str(&format!(
            "The user is looking at an area with temperature {:.1} °C, soil moisture {:.0} %, \
             fire risk index {:.1} and urban heat +{:.1} °C. ",
            m.temperature,
            m.soil_moisture * 100.0,
            m.fire_risk_index,
            m.urban_heat_intensity
        ));
    }
    prompt.push_str("Question: ");
    prompt.push_str(message);
    prompt
}

/// Erste Zahl (Vorzeichen, Ziffern, Dezimalpunkt) in einer Antwort.
pub fn parse_temperature(response: &str) -> Option<f64> {
    static NUMBER: OnceLock<Option<Regex>> = OnceLock::new();
    let re = NUMBER
        .get_or_init(|| Regex::new(r"-?\d+(?:\.\d+)?").ok())
        .as_ref()?;
    re.find(response)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Assistent ohne Netzwerk: antwortet aus dem Sitzungskontext.
#[derive(Debug, Default, Clone)]
pub struct OfflineAssistant;

impl OfflineAssistant {
    fn projection(metrics: &CellMetrics, prompt: &str) -> String {
        // Monat aus dem Datum im Prompt, sonst aktuelle Temperatur
        let month = extract_date(prompt).map(|date| chrono::Datelike::month(&date));
        let base = month
            .and_then(|m| metrics.monthly_average(m))
            .unwrap_or(metrics.temperature);
        format!("{:.1}", (base + metrics.temperature) / 2.0)
    }

    fn advice(context: AssistantContext<'_>) -> String {
        let Some(cell) = context.cell else {
            return format!(
                "As a {} user, select a hexagon on the map and I can explain the local conditions.",
                context.role
            );
        };
        let m = &cell.metrics;
        match context.role {
            Role::Farmer => format!(
                "Soil moisture is {:.0} % with {:.1} mm of rain in the last 24 h; frost risk is {}. \
                 Check irrigation if moisture drops below 25 %.",
                m.soil_moisture * 100.0,
                m.rainfall_24h,
                m.frost_risk
            ),
            Role::UrbanPlanner => format!(
                "This block runs {:.1} °C hotter than its surroundings. Street trees and reflective \
                 surfaces give the largest reduction at solar loads around {:.1} kWh/m²/day.",
                m.urban_heat_intensity, m.solar_irradiance
            ),
            Role::GeneralPublic => format!(
                "It is {:.1} °C here with wind at {:.0} km/h and an air quality index of {:.0}.",
                m.temperature, m.wind_speed, m.air_quality_index
            ),
        }
    }
}

fn extract_date(prompt: &str) -> Option<NaiveDate> {
    static DATE: OnceLock<Option<Regex>> = OnceLock::new();
    let re = DATE
        .get_or_init(|| Regex::new(r"\d{4}-\d{2}-\d{2}").ok())
        .as_ref()?;
    re.find(prompt)
        .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
}

impl AssistantClient for OfflineAssistant {
    fn complete(&mut self, prompt: &str, context: AssistantContext<'_>) -> anyhow::Result<String> {
        match context.cell {
            Some(cell) if prompt.starts_with("You are a climate model.") => {
                Ok(Self::projection(&cell.metrics, prompt))
            }
            _ => Ok(Self::advice(context)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hex_cell::test_support::fixed_metrics;
    use crate::core::{cell_at, LatLon};

    fn cell() -> HexCell {
        let id = cell_at(LatLon::new(-37.915, 145.129), 10).expect("Zelle erwartet");
        HexCell::new(id, fixed_metrics(20.0))
    }

    #[test]
    fn parse_temperature_takes_first_number() {
        assert_eq!(parse_temperature("About 23.5 °C, maybe 24"), Some(23.5));
        assert_eq!(parse_temperature("-3"), Some(-3.0));
        assert_eq!(parse_temperature("no idea"), None);
    }

    #[test]
    fn projection_prompt_contains_date_and_time() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).expect("gültiges Datum");
        let time = NaiveTime::from_hms_opt(14, 30, 0).expect("gültige Zeit");
        let prompt = projection_prompt(&cell(), date, time);
        assert!(prompt.contains("2025-01-15"));
        assert!(prompt.contains("14:30"));
    }

    #[test]
    fn offline_projection_is_numeric() {
        let cell = cell();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).expect("gültiges Datum");
        let time = NaiveTime::from_hms_opt(9, 0, 0).expect("gültige Zeit");
        let mut assistant = OfflineAssistant;
        let context = AssistantContext {
            role: Role::GeneralPublic,
            cell: Some(&cell),
        };

        let answer = assistant
            .complete(&projection_prompt(&cell, date, time), context)
            .expect("Offline-Antwort erwartet");
        // März-Mittel 13.0, aktuell 20.0
        assert_eq!(parse_temperature(&answer), Some(16.5));
    }

    #[test]
    fn chat_prompt_is_role_aware() {
        let cell = cell();
        let prompt = chat_prompt(
            "Will it rain?",
            AssistantContext {
                role: Role::Farmer,
                cell: Some(&cell),
            },
        );
        assert!(prompt.contains("Farmer"));
        assert!(prompt.ends_with("Will it rain?"));
    }
}
