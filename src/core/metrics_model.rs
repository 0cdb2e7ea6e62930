//! Quellen für Zell-Messwerte.

use super::hex_cell::{CellMetrics, MonthlyTemp, RiskLevel};
use super::hex_grid::CellId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Liefert Messwerte pro Zelle (synthetisch oder live).
pub trait MetricsSource: Send {
    fn metrics_for(&mut self, cell: CellId, resolution: u8) -> anyhow::Result<CellMetrics>;
}

/// Platzhalter-Modell mit gleichverteilten Zufallswerten.
///
/// Die Wertebereiche hängen von der Auflösung ab, damit grobe Raster
/// größere Streuung zeigen als feine.
#[derive(Debug, Clone)]
pub struct SyntheticMetrics {
    rng: ChaCha8Rng,
}

impl SyntheticMetrics {
    /// Reproduzierbare Werte über einen festen Seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Nicht reproduzierbar (Seed aus dem Betriebssystem).
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seed aus der Konfiguration, sonst Entropie.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn generate(&mut self, resolution: u8) -> CellMetrics {
        let res = f64::from(resolution);
        // Bei res <= 5 wäre der Divisor <= 0
        let temp_spread = if resolution > 5 { 5.0 / (res - 5.0) } else { 5.0 };

        let temperature = 18.0 + self.unit() * temp_spread;
        let soil_moisture = 0.2 + self.unit() * 0.4;
        let rainfall_24h = self.unit() * if resolution < 10 { 5.0 } else { 3.0 };
        let frost_risk = if self.unit() < 0.1 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        };
        let gdd = 8.0 + self.unit() * 2.0;
        let fire_risk_index = 5.0 + self.unit() * if resolution < 9 { 30.0 } else { 15.0 };
        let urban_heat_intensity = if resolution > 9 {
            1.0 + self.unit() * 2.0
        } else {
            0.5 + self.unit()
        };
        let air_quality_index = 20.0 + self.unit() * 30.0;
        let wind_speed = self.unit() * 15.0;
        let flood_risk = if self.unit() < 0.02 {
            RiskLevel::Low
        } else {
            RiskLevel::VeryLow
        };
        let solar_irradiance = 4.0 + self.unit() * 1.5;
        let historical_temp = (0..12u8)
            .map(|i| MonthlyTemp {
                month: i + 1,
                avg_temp: 12.0 + self.unit() * 8.0 + 6.0 * (f64::from(i) / 1.9).sin(),
            })
            .collect();

        CellMetrics {
            temperature,
            soil_moisture,
            rainfall_24h,
            frost_risk,
            gdd,
            fire_risk_index,
            urban_heat_intensity,
            air_quality_index,
            wind_speed,
            flood_risk,
            solar_irradiance,
            historical_temp,
            projected_temp: None,
        }
    }
}

impl MetricsSource for SyntheticMetrics {
    fn metrics_for(&mut self, _cell: CellId, resolution: u8) -> anyhow::Result<CellMetrics> {
        Ok(self.generate(resolution))
    }
}
