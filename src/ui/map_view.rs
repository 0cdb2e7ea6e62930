//! Zeichnet die Karten-Szene (Zell-Polygone) in ein egui-Rechteck.

use crate::core::Rgb;
use crate::shared::MapScene;
use glam::DVec2;

/// Farbe mit Deckkraft (0..1) als egui-Farbe.
pub fn color32(rgb: Rgb, opacity: f32) -> egui::Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(rgb.r(), rgb.g(), rgb.b(), alpha)
}

/// Malt alle Polygone der Szene; die hervorgehobene Zelle zuletzt.
pub fn paint_map_scene(painter: &egui::Painter, rect: egui::Rect, scene: &MapScene) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(232, 236, 240));

    let screen_size = DVec2::new(rect.width() as f64, rect.height() as f64);
    let to_screen = |ring: &[crate::core::LatLon]| -> Vec<egui::Pos2> {
        ring.iter()
            .take(ring.len().saturating_sub(1))
            .map(|p| {
                let s = scene.camera.latlon_to_screen(*p, screen_size);
                rect.min + egui::vec2(s.x as f32, s.y as f32)
            })
            .collect()
    };

    let mut highlighted = None;
    for polygon in &scene.polygons {
        if Some(polygon.id) == scene.highlighted {
            highlighted = Some(polygon);
            continue;
        }
        paint_polygon(painter, rect, to_screen(&polygon.ring), &polygon.style);
    }
    if let Some(polygon) = highlighted {
        paint_polygon(painter, rect, to_screen(&polygon.ring), &polygon.style);
    }

    if !scene.has_cells() {
        let text = if scene.loading {
            "Loading map data..."
        } else {
            "No data for this area"
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(20.0),
            egui::Color32::DARK_GRAY,
        );
    }
}

fn paint_polygon(
    painter: &egui::Painter,
    clip: egui::Rect,
    points: Vec<egui::Pos2>,
    style: &crate::shared::CellStyle,
) {
    let bounds = egui::Rect::from_points(&points);
    if !clip.intersects(bounds) {
        return;
    }
    painter.add(egui::Shape::convex_polygon(
        points,
        color32(style.fill_color, style.fill_opacity),
        egui::Stroke::new(style.stroke_weight, color32(style.stroke_color, 1.0)),
    ));
}
