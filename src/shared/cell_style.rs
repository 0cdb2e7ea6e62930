//! Darstellungs-Stil einer Zelle als Vertrag zwischen App und Renderer.

use crate::core::Rgb;

/// Füllung und Umriss einer Zelle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub fill_color: Rgb,
    /// Deckkraft der Füllung (0.0 = transparent)
    pub fill_opacity: f32,
    pub stroke_color: Rgb,
    /// Strichstärke in Pixeln
    pub stroke_weight: f32,
}
