//! Zentrale Konfiguration für das Klima-Dashboard.
//!
//! `DashboardOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{LatLon, RingPolicy, Rgb};
use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Kartenmittelpunkt [lat, lon] (Clayton, Victoria).
pub const MAP_CENTER: [f64; 2] = [-37.9150, 145.1290];
/// Bildschirmbreite einer Zelle in Pixeln beim Öffnen der Karte.
pub const INITIAL_ZOOM_PX_PER_CELL: f64 = 56.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Zell-Stile ──────────────────────────────────────────────────────

/// Füllfarbe ohne Daten.
pub const NO_DATA_FILL: Rgb = Rgb::from_hex(0xA0A0A0);
/// Füllfarbe während der Regeneration.
pub const LOADING_FILL: Rgb = Rgb::from_hex(0xE0E0E0);
pub const LOADING_OPACITY: f32 = 0.1;
pub const LOADING_STROKE_WEIGHT: f32 = 0.2;
/// Füllfarbe für Zellen mit Daten, aber ohne aktiven Karten-Layer.
pub const PRESENT_FILL: Rgb = Rgb::from_hex(0xB0B0B0);
pub const PRESENT_OPACITY: f32 = 0.35;
pub const PRESENT_STROKE_WEIGHT: f32 = 0.75;
/// Deckkraft eingefärbter Zellen.
pub const THEMED_OPACITY: f32 = 0.65;
pub const DEFAULT_STROKE: Rgb = Rgb::from_hex(0x808080);
pub const DEFAULT_STROKE_WEIGHT: f32 = 0.5;
/// Additiver Deckkraft-Bonus der selektierten Zelle.
pub const SELECTED_OPACITY_BOOST: f32 = 0.3;
/// Obergrenze der Deckkraft der selektierten Zelle.
pub const SELECTED_OPACITY_MAX: f32 = 0.9;
pub const HIGHLIGHT_STROKE: Rgb = Rgb::from_hex(0x0000FF);
pub const HIGHLIGHT_STROKE_WEIGHT: f32 = 2.5;

// ── Daten ───────────────────────────────────────────────────────────

/// Maximal gelesene Rohdokumente pro Saisondaten-Abfrage.
pub const SEASONAL_RAW_LIMIT: usize = 100;
/// Maximal gelieferte Jahre pro Saisondaten-Abfrage.
pub const SEASONAL_RECORD_CAP: usize = 20;
/// Standard-Zeitfenster des Trend-Graphen in Jahren.
pub const TREND_DEFAULT_YEARS: usize = 10;

/// Farben und Strichstärken der Zell-Darstellung.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleOptions {
    pub no_data_fill: Rgb,
    pub loading_fill: Rgb,
    pub loading_opacity: f32,
    pub loading_stroke_weight: f32,
    pub present_fill: Rgb,
    pub present_opacity: f32,
    pub present_stroke_weight: f32,
    pub themed_opacity: f32,
    pub default_stroke: Rgb,
    pub default_stroke_weight: f32,
    pub selected_opacity_boost: f32,
    pub selected_opacity_max: f32,
    pub highlight_stroke: Rgb,
    pub highlight_stroke_weight: f32,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            no_data_fill: NO_DATA_FILL,
            loading_fill: LOADING_FILL,
            loading_opacity: LOADING_OPACITY,
            loading_stroke_weight: LOADING_STROKE_WEIGHT,
            present_fill: PRESENT_FILL,
            present_opacity: PRESENT_OPACITY,
            present_stroke_weight: PRESENT_STROKE_WEIGHT,
            themed_opacity: THEMED_OPACITY,
            default_stroke: DEFAULT_STROKE,
            default_stroke_weight: DEFAULT_STROKE_WEIGHT,
            selected_opacity_boost: SELECTED_OPACITY_BOOST,
            selected_opacity_max: SELECTED_OPACITY_MAX,
            highlight_stroke: HIGHLIGHT_STROKE,
            highlight_stroke_weight: HIGHLIGHT_STROKE_WEIGHT,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Dashboard-Optionen.
/// Wird als `climates_dashboard.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardOptions {
    // ── Karte ───────────────────────────────────────────────────
    /// Kartenmittelpunkt [lat, lon]
    pub map_center: [f64; 2],
    /// Bildschirmbreite einer Zelle in Pixeln nach Auflösungswechsel
    pub initial_zoom_px_per_cell: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    #[serde(default = "default_scroll_zoom_step")]
    pub camera_scroll_zoom_step: f64,

    // ── Raster ──────────────────────────────────────────────────
    /// Ringradius pro Auflösungsstufe
    #[serde(default)]
    pub grid: RingPolicy,

    // ── Darstellung ─────────────────────────────────────────────
    #[serde(default)]
    pub style: StyleOptions,

    // ── Daten ───────────────────────────────────────────────────
    /// Fester Seed für synthetische Messwerte (reproduzierbare Karte)
    #[serde(default)]
    pub metrics_seed: Option<u64>,
    /// JSON-Dokumentenspeicher mit Saisondaten
    #[serde(default)]
    pub seasonal_data_path: Option<String>,
    /// JSON-Datei mit Zugangsdaten (Passwort-Hashes)
    #[serde(default)]
    pub credentials_path: Option<String>,
    #[serde(default = "default_seasonal_raw_limit")]
    pub seasonal_raw_limit: usize,
    #[serde(default = "default_seasonal_record_cap")]
    pub seasonal_record_cap: usize,
    #[serde(default = "default_trend_years")]
    pub trend_default_years: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            map_center: MAP_CENTER,
            initial_zoom_px_per_cell: INITIAL_ZOOM_PX_PER_CELL,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            grid: RingPolicy::default(),
            style: StyleOptions::default(),
            metrics_seed: None,
            seasonal_data_path: None,
            credentials_path: None,
            seasonal_raw_limit: SEASONAL_RAW_LIMIT,
            seasonal_record_cap: SEASONAL_RECORD_CAP,
            trend_default_years: TREND_DEFAULT_YEARS,
        }
    }
}

/// Serde-Default für `camera_scroll_zoom_step` (Abwärtskompatibilität).
fn default_scroll_zoom_step() -> f64 {
    CAMERA_SCROLL_ZOOM_STEP
}

fn default_seasonal_raw_limit() -> usize {
    SEASONAL_RAW_LIMIT
}

fn default_seasonal_record_cap() -> usize {
    SEASONAL_RECORD_CAP
}

fn default_trend_years() -> usize {
    TREND_DEFAULT_YEARS
}

impl DashboardOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(mut opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitize();
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt ungültige Teilbereiche durch Standardwerte (mit Warnung).
    pub fn sanitize(&mut self) {
        if let Err(e) = self.grid.validate() {
            log::warn!("Ring-Politik ungültig, verwende Standardwerte: {}", e);
            self.grid = RingPolicy::default();
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("climates_dashboard"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("climates_dashboard.toml")
    }

    /// Kartenmittelpunkt als Position.
    pub fn center(&self) -> LatLon {
        LatLon::from(self.map_center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut options = DashboardOptions::default();
        options.metrics_seed = Some(99);
        options.style.highlight_stroke = Rgb::from_hex(0x123456);

        let text = toml::to_string_pretty(&options).expect("Serialisierung sollte gelingen");
        let back: DashboardOptions = toml::from_str(&text).expect("Parsen sollte gelingen");
        assert_eq!(back, options);
    }

    #[test]
    fn minimal_file_falls_back_to_defaults() {
        let text = "map_center = [-33.87, 151.21]\ninitial_zoom_px_per_cell = 40.0\n";
        let options: DashboardOptions = toml::from_str(text).expect("Parsen sollte gelingen");

        assert_eq!(options.grid, RingPolicy::default());
        assert_eq!(options.style, StyleOptions::default());
        assert_eq!(options.seasonal_record_cap, SEASONAL_RECORD_CAP);
        assert_eq!(options.center(), LatLon::new(-33.87, 151.21));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("climates_dashboard_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(DashboardOptions::load_from_file(&path), DashboardOptions::default());
    }

    #[test]
    fn invalid_ring_policy_falls_back_to_default() {
        let path = std::env::temp_dir().join(format!(
            "climates_dashboard_bad_grid_{}.toml",
            std::process::id()
        ));
        let mut options = DashboardOptions::default();
        options.grid.ring_radius_coarse = 70_000;
        options.metrics_seed = Some(5);
        options.save_to_file(&path).expect("Speichern sollte gelingen");

        let loaded = DashboardOptions::load_from_file(&path);
        assert_eq!(loaded.grid, RingPolicy::default());
        assert_eq!(loaded.metrics_seed, Some(5));

        let _ = std::fs::remove_file(&path);
    }

}
