//! Farbskalen der Karten-Layer (gestufte Schwellwerte).

use super::layer::LayerKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// sRGB-Farbe, textuell als `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Aus `0xRRGGBB`.
    pub const fn from_hex(value: u32) -> Self {
        Self([
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ])
    }

    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(format!("ungültige Farbe: {s}"));
        }
        u32::from_str_radix(digits, 16)
            .map(Rgb::from_hex)
            .map_err(|_| format!("ungültige Farbe: {s}"))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Eine Stufe: Werte `< upper` bekommen `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBand {
    pub upper: f64,
    pub color: Rgb,
}

/// Gestufte Skala mit Überlauf-Farbe für Werte über der letzten Stufe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub unit: &'static str,
    pub bands: &'static [ColorBand],
    pub overflow: Rgb,
}

const fn band(upper: f64, hex: u32) -> ColorBand {
    ColorBand {
        upper,
        color: Rgb::from_hex(hex),
    }
}

pub const TEMPERATURE_SCALE: ColorScale = ColorScale {
    unit: "°C",
    bands: &[
        band(10.0, 0x6366f1),
        band(15.0, 0x22c55e),
        band(20.0, 0x16a34a),
        band(25.0, 0xf59e0b),
    ],
    overflow: Rgb::from_hex(0xef4444),
};

pub const SOIL_MOISTURE_SCALE: ColorScale = ColorScale {
    unit: "m³/m³",
    bands: &[
        band(0.2, 0xca8a04),
        band(0.4, 0xa16207),
        band(0.6, 0x059669),
        band(0.8, 0x047857),
    ],
    overflow: Rgb::from_hex(0x065f46),
};

pub const FIRE_RISK_SCALE: ColorScale = ColorScale {
    unit: "FFDI",
    bands: &[
        band(12.0, 0x22c55e),
        band(25.0, 0xfacc15),
        band(50.0, 0xf97316),
        band(100.0, 0xdc2626),
    ],
    overflow: Rgb::from_hex(0x8b0000),
};

pub const URBAN_HEAT_SCALE: ColorScale = ColorScale {
    unit: "°C",
    bands: &[
        band(1.0, 0xbfdbfe),
        band(2.0, 0xfef08a),
        band(3.0, 0xfed7aa),
        band(4.0, 0xfecaca),
    ],
    overflow: Rgb::from_hex(0xfca5a5),
};

impl ColorScale {
    /// Skala eines exklusiven Karten-Layers.
    pub fn for_layer(key: &LayerKey) -> Option<&'static ColorScale> {
        match key {
            LayerKey::Temperature => Some(&TEMPERATURE_SCALE),
            LayerKey::SoilMoisture => Some(&SOIL_MOISTURE_SCALE),
            LayerKey::FireRiskIndex => Some(&FIRE_RISK_SCALE),
            LayerKey::UrbanHeatIntensity => Some(&URBAN_HEAT_SCALE),
            _ => None,
        }
    }

    /// Farbe für einen Wert (erste Stufe mit `value < upper`).
    pub fn color_for(&self, value: f64) -> Rgb {
        self.bands
            .iter()
            .find(|band| value < band.upper)
            .map(|band| band.color)
            .unwrap_or(self.overflow)
    }

    /// Legenden-Einträge von niedrig nach hoch.
    pub fn legend(&self) -> Vec<(String, Rgb)> {
        let mut entries = Vec::with_capacity(self.bands.len() + 1);
        let mut lower: Option<f64> = None;
        for band in self.bands {
            let label = match lower {
                None => format!("< {} {}", band.upper, self.unit),
                Some(low) => format!("{low} – {} {}", band.upper, self.unit),
            };
            entries.push((label, band.color));
            lower = Some(band.upper);
        }
        if let Some(low) = lower {
            entries.push((format!("≥ {low} {}", self.unit), self.overflow));
        }
        entries
    }
}
