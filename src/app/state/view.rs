use crate::core::{config_for, ActiveLayerSet, LatLon, MapCamera, Role};
use crate::shared::DashboardOptions;

/// Kartenausschnitt: Raster-Auflösung, Zentrum und Kamera.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Aktuelle Raster-Auflösung (0..=15)
    pub resolution: u8,
    /// Zentrum der Zellscheibe
    pub center: LatLon,
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Ausgangsansicht der Standardrolle.
    pub fn new(options: &DashboardOptions) -> Self {
        let resolution = config_for(None).resolution;
        let center = options.center();
        Self {
            resolution,
            center,
            camera: MapCamera::for_resolution(center, resolution, options.initial_zoom_px_per_cell),
            viewport_size: [0.0, 0.0],
        }
    }

    /// Kamera auf Zentrum und Zellgröße der aktuellen Auflösung zurücksetzen.
    pub fn refit_camera(&mut self, px_per_cell: f64) {
        self.camera.look_at(self.center);
        self.camera.fit_resolution(self.resolution, px_per_cell);
    }
}

/// Rolle, Layer und Auflösung der zuletzt übernommenen Zellmenge.
///
/// Ziel des Rücksprungs, wenn eine Regeneration fehlschlägt.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedView {
    pub role: Role,
    pub layers: ActiveLayerSet,
    pub resolution: u8,
}
