//! Geographische Koordinaten und Web-Mercator-Projektion.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// WGS84-Äquatorradius in Metern (Web-Mercator-Kugel).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Breitengrad-Grenze der Web-Mercator-Projektion.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_6;

/// Geographische Position in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Breitengrad in Grad (Süden negativ)
    pub lat: f64,
    /// Längengrad in Grad (Westen negativ)
    pub lon: f64,
}

impl LatLon {
    /// Erstellt eine neue Position.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Gibt `true` zurück, wenn beide Komponenten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Projiziert die Position nach Web-Mercator (Meter).
    ///
    /// Breitengrade jenseits von ±85.05° werden auf die Projektionsgrenze geklemmt.
    pub fn to_mercator(self) -> DVec2 {
        let lat = self.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
        let x = EARTH_RADIUS_M * self.lon.to_radians();
        let y = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();
        DVec2::new(x, y)
    }

    /// Rechnet einen Web-Mercator-Punkt zurück in Grad.
    pub fn from_mercator(point: DVec2) -> Self {
        let lon = (point.x / EARTH_RADIUS_M).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
            .to_degrees();
        Self { lat, lon }
    }

    /// Liefert `[lon, lat]` in GeoJSON-Reihenfolge.
    pub fn to_geojson(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<[f64; 2]> for LatLon {
    /// Interpretiert `[lat, lon]` (Reihenfolge der Konfigurationsdatei).
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}
