//! Entscheidungswerkzeuge im Detail-Panel einer Zelle.

use super::hex_cell::HexCell;
use super::role::Role;
use serde::{Deserialize, Serialize};

/// Werkzeug, das für die selektierte Zelle geöffnet werden kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionTool {
    CropPlanner,
    HeatMitigation,
}

impl DecisionTool {
    pub const ALL: [DecisionTool; 2] = [DecisionTool::CropPlanner, DecisionTool::HeatMitigation];

    pub fn label(self) -> &'static str {
        match self {
            DecisionTool::CropPlanner => "Crop Planner",
            DecisionTool::HeatMitigation => "Heat Mitigation",
        }
    }
}

/// Erzeugt den Panel-Text eines Werkzeugs für Zelle und Rolle.
pub fn tool_summary(tool: DecisionTool, cell: &HexCell, role: Role) -> String {
    let m = &cell.metrics;
    match tool {
        DecisionTool::CropPlanner => {
            let outlook = if m.soil_moisture < 0.25 {
                "Soil is dry: schedule irrigation before sowing."
            } else if m.soil_moisture > 0.5 {
                "Soil is wet: delay machinery to avoid compaction."
            } else {
                "Soil moisture is in a workable range."
            };
            let frost = format!("Frost risk: {}.", m.frost_risk);
            match role {
                Role::Farmer => format!(
                    "Plan sowing windows with {:.1} GDD/day and {:.0} mm rain in the last 24 h. {outlook} {frost}",
                    m.gdd, m.rainfall_24h
                ),
                _ => format!(
                    "Current growing conditions: {:.1} GDD/day, soil moisture {:.0} %. {frost}",
                    m.gdd,
                    m.soil_moisture * 100.0
                ),
            }
        }
        DecisionTool::HeatMitigation => {
            let priority = if m.urban_heat_intensity >= 2.0 {
                "high"
            } else if m.urban_heat_intensity >= 1.0 {
                "medium"
            } else {
                "low"
            };
            match role {
                Role::UrbanPlanner => format!(
                    "Urban heat island +{:.1} °C ({priority} priority). Prioritise tree canopy and cool surfaces; solar load {:.1} kWh/m²/day.",
                    m.urban_heat_intensity, m.solar_irradiance
                ),
                _ => format!(
                    "This area is {:.1} °C warmer than its surroundings ({priority} heat stress). Seek shade and stay hydrated on hot days.",
                    m.urban_heat_intensity
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLon;
    use crate::core::hex_cell::test_support::fixed_metrics;
    use crate::core::hex_grid::cell_at;

    fn cell() -> HexCell {
        let id = cell_at(LatLon::new(-37.9, 145.1), 8).expect("Zelle sollte existieren");
        HexCell::new(id, fixed_metrics(20.0))
    }

    #[test]
    fn crop_planner_text_depends_on_role() {
        let cell = cell();
        let farmer = tool_summary(DecisionTool::CropPlanner, &cell, Role::Farmer);
        let public = tool_summary(DecisionTool::CropPlanner, &cell, Role::GeneralPublic);

        assert!(farmer.contains("sowing"));
        assert!(!public.contains("sowing"));
        assert!(public.contains("30 %"));
    }

    #[test]
    fn heat_mitigation_reports_priority() {
        let mut cell = cell();
        cell.metrics.urban_heat_intensity = 2.4;
        let text = tool_summary(DecisionTool::HeatMitigation, &cell, Role::UrbanPlanner);
        assert!(text.contains("high priority"));
    }
}
