//! Hexagon-Zelle mit Geometrie und Messwerten.

use super::geo::LatLon;
use super::hex_grid::{cell_boundary, cell_center, CellId};
use super::layer::LayerKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kategorisches Risiko (Frost, Hochwasser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Historischer Monatsmittelwert (Monat 1..=12).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTemp {
    pub month: u8,
    pub avg_temp: f64,
}

/// Feste Messwert-Struktur einer Zelle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellMetrics {
    /// Temperatur in °C
    pub temperature: f64,
    /// Volumetrische Bodenfeuchte (0..1)
    pub soil_moisture: f64,
    /// Niederschlag der letzten 24 h in mm
    pub rainfall_24h: f64,
    pub frost_risk: RiskLevel,
    /// Growing Degree Days
    pub gdd: f64,
    pub fire_risk_index: f64,
    /// Temperaturdifferenz zum Umland in °C
    pub urban_heat_intensity: f64,
    pub air_quality_index: f64,
    /// Windgeschwindigkeit in km/h
    pub wind_speed: f64,
    pub flood_risk: RiskLevel,
    /// Solareinstrahlung in kWh/m²/Tag
    pub solar_irradiance: f64,
    /// Genau 12 Monatsmittelwerte, Monat aufsteigend
    pub historical_temp: Vec<MonthlyTemp>,
    /// Prognostizierte Temperatur, bis zur ersten Abfrage leer
    pub projected_temp: Option<f64>,
}

impl CellMetrics {
    /// Wert, den ein exklusiver Karten-Layer einfärbt.
    pub fn value_for(&self, key: &LayerKey) -> Option<f64> {
        match key {
            LayerKey::Temperature => Some(self.temperature),
            LayerKey::SoilMoisture => Some(self.soil_moisture),
            LayerKey::FireRiskIndex => Some(self.fire_risk_index),
            LayerKey::UrbanHeatIntensity => Some(self.urban_heat_intensity),
            _ => None,
        }
    }

    /// Monatsmittel für `month` (1..=12).
    pub fn monthly_average(&self, month: u32) -> Option<f64> {
        self.historical_temp
            .iter()
            .find(|entry| u32::from(entry.month) == month)
            .map(|entry| entry.avg_temp)
    }

    /// Prüft: alle Zahlenwerte endlich, Historie vollständig.
    pub fn is_complete(&self) -> bool {
        let scalars = [
            self.temperature,
            self.soil_moisture,
            self.rainfall_24h,
            self.gdd,
            self.fire_risk_index,
            self.urban_heat_intensity,
            self.air_quality_index,
            self.wind_speed,
            self.solar_irradiance,
        ];
        scalars.iter().all(|v| v.is_finite())
            && self.historical_temp.len() == 12
            && self.historical_temp.iter().all(|m| m.avg_temp.is_finite())
            && self.projected_temp.is_none_or(f64::is_finite)
    }
}

/// Eine Zelle des Hexagon-Rasters mit ihren Messwerten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexCell {
    pub id: CellId,
    pub center: LatLon,
    /// Offener Ring (6 Eckpunkte)
    pub boundary: Vec<LatLon>,
    pub metrics: CellMetrics,
}

impl HexCell {
    /// Erstellt eine Zelle, Geometrie wird aus der ID abgeleitet.
    pub fn new(id: CellId, metrics: CellMetrics) -> Self {
        Self {
            id,
            center: cell_center(id),
            boundary: cell_boundary(id),
            metrics,
        }
    }

    /// Geschlossener Ring (erster Punkt am Ende wiederholt).
    pub fn to_polygon(&self) -> Vec<LatLon> {
        to_polygon(self)
    }
}

/// Geschlossener Polygon-Ring einer Zelle für das Rendering.
pub fn to_polygon(cell: &HexCell) -> Vec<LatLon> {
    let mut ring = cell.boundary.clone();
    if let Some(first) = ring.first().copied() {
        if ring.last() != Some(&first) || ring.len() == 1 {
            ring.push(first);
        }
    }
    ring
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Zelle mit festen Messwerten für Tests.
    pub fn fixed_metrics(temperature: f64) -> CellMetrics {
        CellMetrics {
            temperature,
            soil_moisture: 0.3,
            rainfall_24h: 1.0,
            frost_risk: RiskLevel::Low,
            gdd: 9.0,
            fire_risk_index: 10.0,
            urban_heat_intensity: 0.8,
            air_quality_index: 30.0,
            wind_speed: 5.0,
            flood_risk: RiskLevel::VeryLow,
            solar_irradiance: 4.5,
            historical_temp: (1..=12)
                .map(|month| MonthlyTemp {
                    month,
                    avg_temp: 10.0 + f64::from(month),
                })
                .collect(),
            projected_temp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::fixed_metrics;
    use super::*;
    use crate::core::hex_grid::cell_at;

    #[test]
    fn polygon_is_closed() {
        let id = cell_at(LatLon::new(-37.915, 145.129), 9).expect("Zelle sollte existieren");
        let cell = HexCell::new(id, fixed_metrics(20.0));

        let ring = cell.to_polygon();
        assert_eq!(ring.len(), 7);
        assert_eq!(ring.first(), ring.last());
        // gespeicherte Grenze bleibt offen
        assert_eq!(cell.boundary.len(), 6);
    }

    #[test]
    fn value_for_maps_map_layers_only() {
        let metrics = fixed_metrics(22.0);
        assert_eq!(metrics.value_for(&LayerKey::Temperature), Some(22.0));
        assert_eq!(metrics.value_for(&LayerKey::SoilMoisture), Some(0.3));
        assert_eq!(metrics.value_for(&LayerKey::TrendGraph), None);
    }

    #[test]
    fn monthly_average_and_completeness() {
        let mut metrics = fixed_metrics(15.0);
        assert_eq!(metrics.monthly_average(3), Some(13.0));
        assert_eq!(metrics.monthly_average(13), None);
        assert!(metrics.is_complete());

        metrics.wind_speed = f64::NAN;
        assert!(!metrics.is_complete());
    }
}
