//! Rollen und ihre statischen Karten-Voreinstellungen.

use super::decision_tool::DecisionTool;
use super::layer::{ActiveLayerSet, LayerKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Benutzer-Persona mit eigenen Karten-Voreinstellungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    GeneralPublic,
    Farmer,
    UrbanPlanner,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::GeneralPublic, Role::Farmer, Role::UrbanPlanner];

    /// Stabiler Textschlüssel.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::GeneralPublic => "general_public",
            Role::Farmer => "farmer",
            Role::UrbanPlanner => "urban_planner",
        }
    }

    /// Parst einen Textschlüssel; unbekannt ergibt `None`.
    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(config_for(Some(*self)).display_name)
    }
}

/// Statische Voreinstellungen einer Rolle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleConfig {
    pub role: Role,
    /// Raster-Auflösung der Karte
    pub resolution: u8,
    /// Vollständiger Layer-Katalog, höchstens ein Karten-Layer aktiv
    pub default_layers: ActiveLayerSet,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Hervorgehobenes Werkzeug im Detail-Panel
    pub featured_tool: Option<DecisionTool>,
}

/// Nachschlagetabelle Rolle → Voreinstellungen.
#[derive(Debug)]
pub struct RoleConfigRegistry {
    general_public: RoleConfig,
    farmer: RoleConfig,
    urban_planner: RoleConfig,
}

impl RoleConfigRegistry {
    fn build() -> Self {
        Self {
            general_public: RoleConfig {
                role: Role::GeneralPublic,
                resolution: 10,
                default_layers: ActiveLayerSet::all_off().with_map_layer(LayerKey::Temperature),
                display_name: "General Public",
                description: "Local temperature, air quality and everyday weather.",
                featured_tool: None,
            },
            farmer: RoleConfig {
                role: Role::Farmer,
                resolution: 8,
                default_layers: ActiveLayerSet::all_off().with_map_layer(LayerKey::SoilMoisture),
                display_name: "Farmer",
                description: "Soil moisture, frost and growing conditions across paddocks.",
                featured_tool: Some(DecisionTool::CropPlanner),
            },
            urban_planner: RoleConfig {
                role: Role::UrbanPlanner,
                resolution: 11,
                default_layers: ActiveLayerSet::all_off()
                    .with_map_layer(LayerKey::UrbanHeatIntensity),
                display_name: "Urban Planner",
                description: "Urban heat islands and mitigation priorities by block.",
                featured_tool: Some(DecisionTool::HeatMitigation),
            },
        }
    }

    /// Prozessweite Instanz, beim ersten Zugriff aufgebaut.
    pub fn global() -> &'static RoleConfigRegistry {
        static REGISTRY: OnceLock<RoleConfigRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::build)
    }

    /// Totale Abfrage; fehlende Rolle fällt auf `GeneralPublic` zurück.
    pub fn config_for(&self, role: Option<Role>) -> &RoleConfig {
        match role.unwrap_or_default() {
            Role::GeneralPublic => &self.general_public,
            Role::Farmer => &self.farmer,
            Role::UrbanPlanner => &self.urban_planner,
        }
    }
}

/// Kurzform für `RoleConfigRegistry::global().config_for(role)`.
pub fn config_for(role: Option<Role>) -> &'static RoleConfig {
    RoleConfigRegistry::global().config_for(role)
}

/// Wie [`config_for`], akzeptiert einen Textschlüssel (unbekannt ⇒ Standard).
pub fn config_for_name(name: &str) -> &'static RoleConfig {
    config_for(Role::parse(name))
}
