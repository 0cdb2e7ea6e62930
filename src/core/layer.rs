//! Daten-Layer und deren Schaltzustand.
//!
//! Zwei disjunkte Gruppen: exklusive Karten-Layer (höchstens einer aktiv,
//! weil pro Zelle nur eine Füllfarbe gerendert wird) und unabhängige
//! Overlay-Schalter (Trend-Graph, Echtzeit-Wetter, Prognose).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bezeichner eines schaltbaren Layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayerKey {
    /// Temperatur-Färbung
    Temperature,
    /// Bodenfeuchte-Färbung
    SoilMoisture,
    /// Waldbrand-Index-Färbung
    FireRiskIndex,
    /// Städtische Wärmeinsel-Färbung
    UrbanHeatIntensity,
    /// Overlay: saisonaler Trend-Graph
    TrendGraph,
    /// Overlay: Echtzeit-Wetter
    Realtime,
    /// Overlay: Prognose
    Forecast,
    /// Nicht katalogisierter Schlüssel (permissive Map-Semantik)
    Other(String),
}

impl LayerKey {
    /// Die exklusiven Karten-Layer (feste, zur Compile-Zeit bekannte Menge).
    pub const EXCLUSIVE: [LayerKey; 4] = [
        LayerKey::Temperature,
        LayerKey::SoilMoisture,
        LayerKey::FireRiskIndex,
        LayerKey::UrbanHeatIntensity,
    ];

    /// Die unabhängigen Overlay-Schalter.
    pub const MODAL: [LayerKey; 3] = [LayerKey::TrendGraph, LayerKey::Realtime, LayerKey::Forecast];

    /// Gibt `true` zurück für die vier exklusiven Karten-Layer.
    pub fn is_exclusive(&self) -> bool {
        matches!(
            self,
            LayerKey::Temperature
                | LayerKey::SoilMoisture
                | LayerKey::FireRiskIndex
                | LayerKey::UrbanHeatIntensity
        )
    }

    /// Gibt `true` zurück für die Overlay-Schalter.
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            LayerKey::TrendGraph | LayerKey::Realtime | LayerKey::Forecast
        )
    }

    /// Gibt `true` zurück, wenn der Schlüssel zum festen Katalog gehört.
    pub fn is_catalogued(&self) -> bool {
        !matches!(self, LayerKey::Other(_))
    }

    /// Alle katalogisierten Schlüssel: erst Karten-Layer, dann Overlays.
    pub fn catalogue() -> impl Iterator<Item = LayerKey> {
        Self::EXCLUSIVE.into_iter().chain(Self::MODAL)
    }

    /// Stabiler Textschlüssel (camelCase).
    pub fn as_str(&self) -> &str {
        match self {
            LayerKey::Temperature => "temperature",
            LayerKey::SoilMoisture => "soilMoisture",
            LayerKey::FireRiskIndex => "fireRiskIndex",
            LayerKey::UrbanHeatIntensity => "urbanHeatIntensity",
            LayerKey::TrendGraph => "trendGraph",
            LayerKey::Realtime => "realtime",
            LayerKey::Forecast => "forecast",
            LayerKey::Other(name) => name,
        }
    }

    /// Anzeigename für die Sidebar.
    pub fn label(&self) -> &str {
        match self {
            LayerKey::Temperature => "Temperature",
            LayerKey::SoilMoisture => "Soil Moisture",
            LayerKey::FireRiskIndex => "Fire Risk Index",
            LayerKey::UrbanHeatIntensity => "Urban Heat Intensity",
            LayerKey::TrendGraph => "Trend Graphs",
            LayerKey::Realtime => "Real-Time Weather",
            LayerKey::Forecast => "Forecast",
            LayerKey::Other(name) => name,
        }
    }
}

impl From<&str> for LayerKey {
    fn from(value: &str) -> Self {
        match value {
            "temperature" => LayerKey::Temperature,
            "soilMoisture" => LayerKey::SoilMoisture,
            "fireRiskIndex" => LayerKey::FireRiskIndex,
            "urbanHeatIntensity" => LayerKey::UrbanHeatIntensity,
            "trendGraph" => LayerKey::TrendGraph,
            "realtime" => LayerKey::Realtime,
            "forecast" => LayerKey::Forecast,
            other => LayerKey::Other(other.to_string()),
        }
    }
}

impl From<String> for LayerKey {
    fn from(value: String) -> Self {
        LayerKey::from(value.as_str())
    }
}

impl From<LayerKey> for String {
    fn from(key: LayerKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ActiveLayerSet ──────────────────────────────────────────────────

/// Schaltzustand aller Layer (Schlüssel → aktiv).
///
/// Invariante: unter den exklusiven Karten-Layern ist höchstens einer aktiv.
/// Sie wird ausschließlich durch [`ActiveLayerSet::toggle`] gehalten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLayerSet {
    flags: IndexMap<LayerKey, bool>,
}

impl Default for ActiveLayerSet {
    fn default() -> Self {
        Self::all_off()
    }
}

impl ActiveLayerSet {
    /// Alle katalogisierten Layer ausgeschaltet.
    pub fn all_off() -> Self {
        Self {
            flags: LayerKey::catalogue().map(|key| (key, false)).collect(),
        }
    }

    /// Builder: genau einen exklusiven Karten-Layer einschalten.
    pub fn with_map_layer(mut self, key: LayerKey) -> Self {
        for exclusive in LayerKey::EXCLUSIVE {
            let on = exclusive == key;
            self.flags.insert(exclusive, on);
        }
        self
    }

    /// Gibt zurück, ob ein Layer aktiv ist (unbekannte Schlüssel: inaktiv).
    pub fn is_active(&self, key: &LayerKey) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Der aktive exklusive Karten-Layer, falls vorhanden.
    pub fn active_map_layer(&self) -> Option<LayerKey> {
        LayerKey::EXCLUSIVE
            .into_iter()
            .find(|key| self.is_active(key))
    }

    /// Anzahl aktiver exklusiver Karten-Layer (0 oder 1 bei intakter Invariante).
    pub fn active_map_layer_count(&self) -> usize {
        LayerKey::EXCLUSIVE
            .iter()
            .filter(|key| self.is_active(key))
            .count()
    }

    /// Iteriert über alle Schlüssel in stabiler Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&LayerKey, bool)> {
        self.flags.iter().map(|(key, on)| (key, *on))
    }

    /// Gibt `true` zurück, wenn der Schlüssel in der Map vorhanden ist.
    pub fn contains(&self, key: &LayerKey) -> bool {
        self.flags.contains_key(key)
    }

    /// Anzahl der Schlüssel.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Gibt `true` zurück, wenn keine Schlüssel vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Schaltet einen Layer um.
    ///
    /// - Exklusiver Karten-Layer: Wert wird invertiert, alle anderen Karten-Layer
    ///   werden ausgeschaltet; Overlays bleiben unberührt.
    /// - Overlay: nur dieser Schlüssel wird invertiert.
    /// - Unbekannter Schlüssel: wird angelegt bzw. invertiert (Warnung im Log).
    pub fn toggle(&mut self, key: &LayerKey) {
        let was_active = self.is_active(key);

        if key.is_exclusive() {
            for exclusive in LayerKey::EXCLUSIVE {
                self.flags.insert(exclusive, false);
            }
        } else if !key.is_catalogued() {
            log::warn!(
                "Layer '{}' ist nicht katalogisiert, wird trotzdem umgeschaltet",
                key
            );
        }

        self.flags.insert(key.clone(), !was_active);
    }

    /// Reine Variante von [`toggle`](Self::toggle): liefert den Folgezustand.
    pub fn toggled(&self, key: &LayerKey) -> Self {
        let mut next = self.clone();
        next.toggle(key);
        next
    }
}

/// Folgezustand nach dem Umschalten von `key`.
pub fn toggle(layers: &ActiveLayerSet, key: &LayerKey) -> ActiveLayerSet {
    layers.toggled(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_toggle_twice_from_all_off_is_involution() {
        let start = ActiveLayerSet::all_off();
        let once = toggle(&start, &LayerKey::Temperature);
        assert!(once.is_active(&LayerKey::Temperature));
        assert_eq!(once.active_map_layer_count(), 1);

        let twice = toggle(&once, &LayerKey::Temperature);
        assert_eq!(twice, start);
    }

    #[test]
    fn exclusive_toggle_from_one_active_forces_others_off() {
        let start = ActiveLayerSet::all_off().with_map_layer(LayerKey::SoilMoisture);

        let once = toggle(&start, &LayerKey::Temperature);
        assert!(once.is_active(&LayerKey::Temperature));
        assert!(!once.is_active(&LayerKey::SoilMoisture));

        // Zweites Umschalten stellt den Ausgangszustand NICHT wieder her
        let twice = toggle(&once, &LayerKey::Temperature);
        assert_eq!(twice.active_map_layer(), None);
        assert_ne!(twice, start);
    }

    #[test]
    fn toggling_active_exclusive_layer_turns_it_off() {
        let start = ActiveLayerSet::all_off().with_map_layer(LayerKey::FireRiskIndex);
        let next = toggle(&start, &LayerKey::FireRiskIndex);
        assert_eq!(next.active_map_layer_count(), 0);
    }

    #[test]
    fn exclusive_toggle_leaves_overlays_untouched() {
        let mut layers = ActiveLayerSet::all_off();
        layers.toggle(&LayerKey::TrendGraph);
        layers.toggle(&LayerKey::Forecast);

        layers.toggle(&LayerKey::UrbanHeatIntensity);

        assert!(layers.is_active(&LayerKey::TrendGraph));
        assert!(layers.is_active(&LayerKey::Forecast));
        assert!(layers.is_active(&LayerKey::UrbanHeatIntensity));
    }

    #[test]
    fn overlay_toggle_is_independent() {
        let start = ActiveLayerSet::all_off().with_map_layer(LayerKey::Temperature);
        let next = toggle(&start, &LayerKey::Realtime);

        assert!(next.is_active(&LayerKey::Realtime));
        assert!(next.is_active(&LayerKey::Temperature));
        assert!(!next.is_active(&LayerKey::TrendGraph));
        assert_eq!(toggle(&next, &LayerKey::Realtime), start);
    }

    #[test]
    fn unknown_key_is_added_and_flipped() {
        let start = ActiveLayerSet::all_off().with_map_layer(LayerKey::Temperature);
        let key = LayerKey::from("windShear");
        assert!(!key.is_catalogued());

        let next = toggle(&start, &key);
        assert!(next.is_active(&key));
        assert_eq!(next.len(), start.len() + 1);
        assert!(next.is_active(&LayerKey::Temperature));
    }

    #[test]
    fn layer_set_serializes_as_ordered_map() {
        let layers = ActiveLayerSet::all_off().with_map_layer(LayerKey::SoilMoisture);
        let json = serde_json::to_value(&layers).expect("Serialisierung sollte gelingen");

        let flags = json["flags"].as_object().expect("Map erwartet");
        assert_eq!(flags.len(), layers.len());
        assert_eq!(flags[LayerKey::SoilMoisture.as_str()], serde_json::Value::Bool(true));

        let back: ActiveLayerSet = serde_json::from_value(json).expect("Parsen sollte gelingen");
        assert_eq!(back, layers);
    }

    #[test]
    fn layer_key_text_roundtrip() {
        for key in LayerKey::catalogue() {
            assert_eq!(LayerKey::from(key.as_str()), key);
        }
    }
}
