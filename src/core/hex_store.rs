//! Speicher aller Zellen der aktuellen Auflösung.
//!
//! Die Zellmenge wird nie inkrementell geändert, sondern pro Regeneration
//! komplett ersetzt. Jede Regeneration bekommt ein monoton steigendes
//! [`GenerationToken`]; Ergebnisse mit veraltetem Token werden verworfen.

use super::geo::LatLon;
use super::hex_cell::HexCell;
use super::hex_grid::{disk_around, CellId, RingPolicy};
use super::metrics_model::MetricsSource;
use indexmap::IndexMap;

/// Kennung einer Regeneration, streng monoton steigend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationToken(pub u64);

/// Auftrag für eine (ggf. asynchrone) Regeneration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegenerationRequest {
    pub token: GenerationToken,
    pub center: LatLon,
    pub resolution: u8,
    pub policy: RingPolicy,
}

impl RegenerationRequest {
    /// Führt den Auftrag mit der gegebenen Messwert-Quelle aus.
    pub fn execute(&self, source: &mut dyn MetricsSource) -> anyhow::Result<Vec<HexCell>> {
        generate_cells(self.center, self.resolution, &self.policy, source)
    }
}

/// Erzeugt die Zellen der Scheibe um `center` mit Messwerten aus `source`.
///
/// Ungültige Eingaben ergeben eine leere Menge, keinen Fehler.
pub fn generate_cells(
    center: LatLon,
    resolution: u8,
    policy: &RingPolicy,
    source: &mut dyn MetricsSource,
) -> anyhow::Result<Vec<HexCell>> {
    disk_around(center, resolution, policy)
        .into_iter()
        .map(|id| {
            let metrics = source.metrics_for(id, resolution)?;
            Ok::<_, anyhow::Error>(HexCell::new(id, metrics))
        })
        .collect()
}

/// Besitzt die Zellen der aktuellen Auflösung samt Lade-Zustand.
#[derive(Debug, Clone, Default)]
pub struct HexCellStore {
    cells: IndexMap<CellId, HexCell>,
    resolution: Option<u8>,
    center: Option<LatLon>,
    /// Ziel der laufenden Regeneration
    target: Option<(LatLon, u8)>,
    generation: u64,
    loading: bool,
}

impl HexCellStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, id: CellId) -> Option<&HexCell> {
        self.cells.get(&id)
    }

    pub fn get_mut(&mut self, id: CellId) -> Option<&mut HexCell> {
        self.cells.get_mut(&id)
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains_key(&id)
    }

    /// Zellen in Erzeugungsreihenfolge (Zentrum zuerst).
    pub fn iter(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.keys().copied()
    }

    /// Auflösung der aktuell gespeicherten Zellen.
    pub fn resolution(&self) -> Option<u8> {
        self.resolution
    }

    pub fn center(&self) -> Option<LatLon> {
        self.center
    }

    /// Gibt `true` zurück, solange eine Regeneration läuft.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Token der jüngsten gestarteten Regeneration.
    pub fn current_token(&self) -> GenerationToken {
        GenerationToken(self.generation)
    }

    pub fn is_current(&self, token: GenerationToken) -> bool {
        token.0 == self.generation
    }

    /// Startet eine Regeneration: neues Token, Lade-Flag gesetzt.
    ///
    /// Ältere, noch laufende Regenerationen werden dadurch veraltet.
    pub fn begin_generation(&mut self, center: LatLon, resolution: u8) -> GenerationToken {
        self.generation += 1;
        self.loading = true;
        self.target = Some((center, resolution));
        self.current_token()
    }

    /// Übernimmt das Ergebnis einer Regeneration.
    ///
    /// Gibt `false` zurück (und ändert nichts), wenn `token` veraltet ist.
    pub fn apply(&mut self, token: GenerationToken, cells: Vec<HexCell>) -> bool {
        let target = match self.target {
            Some(target) if self.is_current(token) => target,
            _ => {
                log::debug!(
                    "Veraltetes Regenerationsergebnis verworfen (Token {}, aktuell {})",
                    token.0,
                    self.generation
                );
                return false;
            }
        };
        let (center, resolution) = target;
        self.cells = cells.into_iter().map(|cell| (cell.id, cell)).collect();
        self.resolution = Some(resolution);
        self.center = Some(center);
        self.target = None;
        self.loading = false;
        true
    }

    /// Beendet eine fehlgeschlagene Regeneration; alte Zellen bleiben erhalten.
    pub fn fail(&mut self, token: GenerationToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.target = None;
        self.loading = false;
        true
    }

    /// Verwirft alle Zellen; laufende Regenerationen werden veraltet.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.resolution = None;
        self.center = None;
        self.target = None;
        self.generation += 1;
        self.loading = false;
    }
}
