//! Karten-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::CellStyle;
use crate::core::{CellId, LatLon, MapCamera};

/// Ein zu zeichnendes Zell-Polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePolygon {
    pub id: CellId,
    /// Geschlossener Ring
    pub ring: Vec<LatLon>,
    pub style: CellStyle,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub polygons: Vec<ScenePolygon>,
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Zelle mit Hervorhebung (nur auf Dashboard/Chat gesetzt)
    pub highlighted: Option<CellId>,
    /// Regeneration läuft
    pub loading: bool,
}

impl MapScene {
    /// Gibt zurück, ob Zellen für das Overlay vorhanden sind.
    pub fn has_cells(&self) -> bool {
        !self.polygons.is_empty()
    }
}
