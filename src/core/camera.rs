//! Karten-Kamera für Pan und Zoom in Web-Mercator-Metern.

use super::geo::LatLon;
use super::hex_grid::edge_length_m;
use glam::DVec2;

/// Kamera über der Mercator-Ebene.
///
/// Bildschirm-Y wächst nach unten, Mercator-Y nach Norden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    /// Bildmitte in Mercator-Metern
    pub center: DVec2,
    /// Maßstab: Meter pro Bildschirm-Pixel
    pub meters_per_px: f64,
}

impl MapCamera {
    /// Kleinster Maßstab (maximal hineingezoomt).
    pub const MIN_METERS_PER_PX: f64 = 0.05;
    /// Größter Maßstab (maximal herausgezoomt).
    pub const MAX_METERS_PER_PX: f64 = 50_000.0;

    pub fn new(center: LatLon, meters_per_px: f64) -> Self {
        Self {
            center: center.to_mercator(),
            meters_per_px: meters_per_px.clamp(Self::MIN_METERS_PER_PX, Self::MAX_METERS_PER_PX),
        }
    }

    /// Kamera, die eine Zelle der Auflösung mit `px_per_cell` Pixeln Breite zeigt.
    pub fn for_resolution(center: LatLon, resolution: u8, px_per_cell: f64) -> Self {
        let mut camera = Self::new(center, 1.0);
        camera.fit_resolution(resolution, px_per_cell);
        camera
    }

    /// Zentriert die Kamera auf eine Position.
    pub fn look_at(&mut self, target: LatLon) {
        self.center = target.to_mercator();
    }

    /// Setzt den Maßstab passend zur Zellgröße einer Auflösung.
    pub fn fit_resolution(&mut self, resolution: u8, px_per_cell: f64) {
        let cell_width = edge_length_m(resolution) * 3f64.sqrt();
        self.meters_per_px = (cell_width / px_per_cell.max(1.0))
            .clamp(Self::MIN_METERS_PER_PX, Self::MAX_METERS_PER_PX);
    }

    /// Verschiebt um ein Bildschirm-Delta (Drag).
    pub fn pan_pixels(&mut self, delta_px: DVec2) {
        self.center += DVec2::new(-delta_px.x, delta_px.y) * self.meters_per_px;
    }

    /// Zoomt um `factor` (> 1 = hinein), der Ankerpunkt bleibt ortsfest.
    pub fn zoom_towards(&mut self, factor: f64, anchor_px: DVec2, screen_size: DVec2) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let before = self.screen_to_world(anchor_px, screen_size);
        self.meters_per_px = (self.meters_per_px / factor)
            .clamp(Self::MIN_METERS_PER_PX, Self::MAX_METERS_PER_PX);
        let after = self.screen_to_world(anchor_px, screen_size);
        self.center += before - after;
    }

    pub fn screen_to_world(&self, screen_pos: DVec2, screen_size: DVec2) -> DVec2 {
        let offset = screen_pos - screen_size * 0.5;
        self.center + DVec2::new(offset.x, -offset.y) * self.meters_per_px
    }

    pub fn world_to_screen(&self, world: DVec2, screen_size: DVec2) -> DVec2 {
        let offset = (world - self.center) / self.meters_per_px;
        screen_size * 0.5 + DVec2::new(offset.x, -offset.y)
    }

    pub fn screen_to_latlon(&self, screen_pos: DVec2, screen_size: DVec2) -> LatLon {
        LatLon::from_mercator(self.screen_to_world(screen_pos, screen_size))
    }

    pub fn latlon_to_screen(&self, position: LatLon, screen_size: DVec2) -> DVec2 {
        self.world_to_screen(position.to_mercator(), screen_size)
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(LatLon::new(0.0, 0.0), 1.0)
    }
}
