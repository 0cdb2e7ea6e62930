//! Darstellungs-Stil einer Zelle als reine Ableitung aus dem Zustand.

use crate::app::AppState;
use crate::core::{ActiveLayerSet, CellId, ColorScale, HexCell};
use crate::shared::{CellStyle, StyleOptions};

/// Leitet den Stil einer Zelle ab.
///
/// Priorität: Laden > kein Karten-Layer > Farbskala des aktiven Layers;
/// die Selektion verstärkt anschließend Deckkraft und Umriss.
pub fn current_style(
    cell: Option<&HexCell>,
    layers: &ActiveLayerSet,
    is_selected: bool,
    loading: bool,
    options: &StyleOptions,
) -> CellStyle {
    if loading {
        return CellStyle {
            fill_color: options.loading_fill,
            fill_opacity: options.loading_opacity,
            stroke_color: options.default_stroke,
            stroke_weight: options.loading_stroke_weight,
        };
    }

    let base = match cell {
        None => CellStyle {
            fill_color: options.no_data_fill,
            fill_opacity: 0.0,
            stroke_color: options.default_stroke,
            stroke_weight: options.default_stroke_weight,
        },
        Some(cell) => {
            let themed = layers.active_map_layer().and_then(|key| {
                let scale = ColorScale::for_layer(&key)?;
                let value = cell.metrics.value_for(&key)?;
                Some(scale.color_for(value))
            });
            match themed {
                Some(color) => CellStyle {
                    fill_color: color,
                    fill_opacity: options.themed_opacity,
                    stroke_color: options.default_stroke,
                    stroke_weight: options.default_stroke_weight,
                },
                None => CellStyle {
                    fill_color: options.present_fill,
                    fill_opacity: options.present_opacity,
                    stroke_color: options.default_stroke,
                    stroke_weight: options.present_stroke_weight,
                },
            }
        }
    };

    if !is_selected {
        return base;
    }
    CellStyle {
        fill_opacity: (base.fill_opacity + options.selected_opacity_boost)
            .min(options.selected_opacity_max),
        stroke_color: options.highlight_stroke,
        stroke_weight: options.highlight_stroke_weight,
        ..base
    }
}

/// Stil einer Zelle im aktuellen Zustand.
///
/// Die Hervorhebung erscheint nur auf Seiten mit Karte.
pub fn cell_style(state: &AppState, id: CellId) -> CellStyle {
    let highlighted = state.session.active_page.shows_map() && state.selection.is_selected(id);
    current_style(
        state.cells.get(id),
        &state.layers,
        highlighted,
        state.cells.is_loading(),
        &state.options.style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hex_cell::test_support::fixed_metrics;
    use crate::core::{cell_at, LatLon, LayerKey, Rgb};
    use approx::assert_relative_eq;

    fn cell(temperature: f64) -> HexCell {
        let id = cell_at(LatLon::new(-37.915, 145.129), 10).expect("Zelle erwartet");
        HexCell::new(id, fixed_metrics(temperature))
    }

    #[test]
    fn loading_wins_over_layers_and_selection() {
        let options = StyleOptions::default();
        let layers = ActiveLayerSet::all_off().with_map_layer(LayerKey::Temperature);
        let style = current_style(Some(&cell(22.0)), &layers, true, true, &options);

        assert_eq!(style.fill_color, options.loading_fill);
        assert_relative_eq!(style.fill_opacity, options.loading_opacity);
        assert_eq!(style.stroke_color, options.default_stroke);
    }

    #[test]
    fn present_but_unthemed_is_neutral_gray() {
        let options = StyleOptions::default();
        let style = current_style(
            Some(&cell(22.0)),
            &ActiveLayerSet::all_off(),
            false,
            false,
            &options,
        );
        assert_eq!(style.fill_color, options.present_fill);
        assert_relative_eq!(style.fill_opacity, 0.35);
    }

    #[test]
    fn temperature_layer_uses_amber_band() {
        let options = StyleOptions::default();
        let layers = ActiveLayerSet::all_off().with_map_layer(LayerKey::Temperature);
        let style = current_style(Some(&cell(22.0)), &layers, false, false, &options);

        assert_eq!(style.fill_color, Rgb::from_hex(0xf59e0b));
        assert_relative_eq!(style.fill_opacity, options.themed_opacity);
    }

    #[test]
    fn selection_boosts_opacity_and_highlights_stroke() {
        let options = StyleOptions::default();
        let layers = ActiveLayerSet::all_off().with_map_layer(LayerKey::Temperature);
        let plain = current_style(Some(&cell(22.0)), &layers, false, false, &options);
        let selected = current_style(Some(&cell(22.0)), &layers, true, false, &options);

        assert_eq!(selected.fill_color, plain.fill_color);
        assert!(selected.fill_opacity > plain.fill_opacity);
        assert_relative_eq!(selected.fill_opacity, options.selected_opacity_max);
        assert_eq!(selected.stroke_color, Rgb::from_hex(0x0000ff));
        assert_relative_eq!(selected.stroke_weight, 2.5);
    }

    #[test]
    fn missing_cell_is_transparent() {
        let options = StyleOptions::default();
        let style = current_style(None, &ActiveLayerSet::all_off(), false, false, &options);
        assert_relative_eq!(style.fill_opacity, 0.0);
    }
}
