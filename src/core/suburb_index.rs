//! Spatial-Index (KD-Tree) über das Vorort-Verzeichnis.

use super::geo::LatLon;
use kiddo::{KdTree, SquaredEuclidean};
use serde::{Deserialize, Serialize};

/// Eintrag im Vorort-Verzeichnis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuburbInfo {
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl SuburbInfo {
    pub fn position(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

/// Ergebnis einer Abfrage gegen den Index.
#[derive(Debug, Clone, PartialEq)]
pub struct SuburbMatch {
    pub suburb: SuburbInfo,
    /// Distanz in Mercator-Metern
    pub distance_m: f64,
}

/// Read-only Index über alle Vororte (Mercator-Koordinaten).
#[derive(Debug, Clone)]
pub struct SuburbIndex {
    tree: KdTree<f64, 2>,
    suburbs: Vec<SuburbInfo>,
}

impl SuburbIndex {
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            suburbs: Vec::new(),
        }
    }

    /// Baut den Index; Einträge mit ungültiger Position entfallen.
    pub fn from_suburbs(suburbs: impl IntoIterator<Item = SuburbInfo>) -> Self {
        let suburbs: Vec<SuburbInfo> = suburbs
            .into_iter()
            .filter(|s| s.position().is_finite())
            .collect();

        let entries: Vec<[f64; 2]> = suburbs
            .iter()
            .map(|s| {
                let p = s.position().to_mercator();
                [p.x, p.y]
            })
            .collect();

        Self {
            tree: (&entries).into(),
            suburbs,
        }
    }

    pub fn len(&self) -> usize {
        self.suburbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suburbs.is_empty()
    }

    /// Vorort nach Name (Groß-/Kleinschreibung egal).
    pub fn find_by_name(&self, name: &str) -> Option<&SuburbInfo> {
        let name = name.trim();
        self.suburbs
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Nächstgelegener Vorort zu einer Position.
    pub fn nearest(&self, query: LatLon) -> Option<SuburbMatch> {
        if self.is_empty() || !query.is_finite() {
            return None;
        }

        let p = query.to_mercator();
        let result = self.tree.nearest_one::<SquaredEuclidean>(&[p.x, p.y]);
        let suburb = self.suburbs.get(result.item as usize)?.clone();

        Some(SuburbMatch {
            suburb,
            distance_m: result.distance.sqrt(),
        })
    }
}

impl Default for SuburbIndex {
    fn default() -> Self {
        Self::empty()
    }
}
