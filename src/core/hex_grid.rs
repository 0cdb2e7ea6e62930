//! Hexagon-Raster über der Web-Mercator-Ebene.
//!
//! Pointy-Top-Hexagone in axialen Koordinaten (q, r), global am
//! Mercator-Ursprung verankert. Dadurch ist die Menge der Zell-IDs um ein
//! Zentrum eine reine Funktion von (Zentrum, Auflösung).
//!
//! Die Kantenlänge folgt der Apertur-7-Hierarchie: jede feinere Stufe
//! teilt die Kantenlänge durch √7.

use super::geo::LatLon;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Größte unterstützte Auflösung.
pub const MAX_RESOLUTION: u8 = 15;

/// Kantenlänge (= Umkreisradius) bei Auflösung 0 in Mercator-Metern.
const RES0_EDGE_M: f64 = 1_107_712.591;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

const AXIS_BITS: u32 = 30;
const AXIS_BIAS: i64 = 1 << (AXIS_BITS - 1);
const AXIS_MASK: u64 = (1 << AXIS_BITS) - 1;

/// Axiale Nachbar-Richtungen (Reihenfolge für den Ring-Lauf).
const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Kantenlänge eines Hexagons in Mercator-Metern für die gegebene Auflösung.
pub fn edge_length_m(resolution: u8) -> f64 {
    RES0_EDGE_M / 7f64.sqrt().powi(resolution as i32)
}

// ── CellId ──────────────────────────────────────────────────────────

/// Opaker Zell-Bezeichner: Auflösung + axiale Position, gepackt in 64 Bit.
///
/// Textform sind 16 Hex-Ziffern (`Display` / `FromStr`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CellId(u64);

/// Fehler beim Parsen einer textuellen Zell-ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ungültige Zell-ID: {0}")]
pub struct CellIdParseError(pub String);

impl CellId {
    /// Packt Auflösung und axiale Koordinaten. `None` außerhalb des Wertebereichs.
    pub fn new(resolution: u8, q: i32, r: i32) -> Option<Self> {
        if resolution > MAX_RESOLUTION {
            return None;
        }
        let q_biased = q as i64 + AXIS_BIAS;
        let r_biased = r as i64 + AXIS_BIAS;
        let range = 0..(1i64 << AXIS_BITS);
        if !range.contains(&q_biased) || !range.contains(&r_biased) {
            return None;
        }
        Some(Self(
            ((resolution as u64) << (2 * AXIS_BITS))
                | ((q_biased as u64) << AXIS_BITS)
                | r_biased as u64,
        ))
    }

    /// Auflösung der Zelle.
    pub fn resolution(self) -> u8 {
        (self.0 >> (2 * AXIS_BITS)) as u8
    }

    /// Axiale Koordinaten (q, r).
    pub fn axial(self) -> (i32, i32) {
        let q = ((self.0 >> AXIS_BITS) & AXIS_MASK) as i64 - AXIS_BIAS;
        let r = (self.0 & AXIS_MASK) as i64 - AXIS_BIAS;
        (q as i32, r as i32)
    }

    /// Rohwert (für Hashing/Seeds).
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellId({self})")
    }
}

impl FromStr for CellId {
    type Err = CellIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 16 {
            return Err(CellIdParseError(s.into()));
        }
        u64::from_str_radix(trimmed, 16)
            .map(CellId)
            .map_err(|_| CellIdParseError(s.into()))
    }
}

impl From<CellId> for String {
    fn from(id: CellId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for CellId {
    type Error = CellIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── Koordinaten-Umrechnung ─────────────────────────────────────────

fn axial_to_world(q: i32, r: i32, size: f64) -> DVec2 {
    let (q, r) = (q as f64, r as f64);
    DVec2::new(size * SQRT_3 * (q + r / 2.0), size * 1.5 * r)
}

/// Rundet fraktionale axiale Koordinaten auf das nächste Hexagon (Cube-Rounding).
fn axial_round(qf: f64, rf: f64) -> (i64, i64) {
    let sf = -qf - rf;
    let mut q = qf.round();
    let mut r = rf.round();
    let s = sf.round();

    let dq = (q - qf).abs();
    let dr = (r - rf).abs();
    let ds = (s - sf).abs();

    if dq > dr && dq > ds {
        q = -r - s;
    } else if dr > ds {
        r = -q - s;
    }
    (q as i64, r as i64)
}

/// Ermittelt die Zelle, die eine Mercator-Position enthält.
pub fn cell_at_mercator(point: DVec2, resolution: u8) -> Option<CellId> {
    if resolution > MAX_RESOLUTION || !point.is_finite() {
        return None;
    }
    let size = edge_length_m(resolution);
    let qf = (SQRT_3 / 3.0 * point.x - point.y / 3.0) / size;
    let rf = (2.0 / 3.0 * point.y) / size;
    let (q, r) = axial_round(qf, rf);
    CellId::new(resolution, i32::try_from(q).ok()?, i32::try_from(r).ok()?)
}

/// Ermittelt die Zelle, die eine geographische Position enthält.
pub fn cell_at(position: LatLon, resolution: u8) -> Option<CellId> {
    if !position.is_finite() {
        return None;
    }
    cell_at_mercator(position.to_mercator(), resolution)
}

/// Mittelpunkt einer Zelle in Mercator-Metern.
pub fn cell_center_mercator(id: CellId) -> DVec2 {
    let (q, r) = id.axial();
    axial_to_world(q, r, edge_length_m(id.resolution()))
}

/// Mittelpunkt einer Zelle in Grad.
pub fn cell_center(id: CellId) -> LatLon {
    LatLon::from_mercator(cell_center_mercator(id))
}

/// Die sechs Eckpunkte einer Zelle (gegen den Uhrzeigersinn, offener Ring).
pub fn cell_boundary(id: CellId) -> Vec<LatLon> {
    let center = cell_center_mercator(id);
    let size = edge_length_m(id.resolution());
    (0..6)
        .map(|i| {
            let angle = (60.0 * i as f64 - 30.0).to_radians();
            LatLon::from_mercator(center + DVec2::new(angle.cos(), angle.sin()) * size)
        })
        .collect()
}

/// Hex-Distanz zweier Zellen gleicher Auflösung.
pub fn grid_distance(a: CellId, b: CellId) -> Option<u32> {
    if a.resolution() != b.resolution() {
        return None;
    }
    let (aq, ar) = a.axial();
    let (bq, br) = b.axial();
    let dq = (aq as i64 - bq as i64).abs();
    let dr = (ar as i64 - br as i64).abs();
    let ds = (aq as i64 + ar as i64 - bq as i64 - br as i64).abs();
    u32::try_from((dq + dr + ds) / 2).ok()
}

/// Alle Zellen mit Hex-Distanz ≤ `k` um `center`, Zentrum zuerst, dann Ring für Ring.
///
/// Ergibt `3k(k+1)+1` Zellen; Zellen außerhalb des ID-Wertebereichs entfallen.
/// `k` wird auf [`MAX_RING_RADIUS`] begrenzt.
pub fn grid_disk(center: CellId, k: u32) -> Vec<CellId> {
    let k = k.min(MAX_RING_RADIUS);
    let mut cells = Vec::with_capacity(3 * k as usize * (k as usize + 1) + 1);
    cells.push(center);

    let (cq, cr) = center.axial();
    let resolution = center.resolution();
    for radius in 1..=k as i64 {
        let (sq, sr) = DIRECTIONS[4];
        let mut q = cq as i64 + sq as i64 * radius;
        let mut r = cr as i64 + sr as i64 * radius;
        for (dq, dr) in DIRECTIONS {
            for _ in 0..radius {
                if let (Ok(qi), Ok(ri)) = (i32::try_from(q), i32::try_from(r)) {
                    if let Some(id) = CellId::new(resolution, qi, ri) {
                        cells.push(id);
                    }
                }
                q += dq as i64;
                r += dr as i64;
            }
        }
    }
    cells
}

// ── Ring-Politik ────────────────────────────────────────────────────

/// Größter zulässiger Ringradius (3169 Zellen pro Scheibe).
pub const MAX_RING_RADIUS: u32 = 32;

/// Ungültige Ring-Politik aus der Konfiguration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingPolicyError {
    #[error("ring radius {0} exceeds the maximum of {MAX_RING_RADIUS}")]
    RadiusTooLarge(u32),
    #[error("ring radii must not grow with resolution (coarse {coarse}, medium {medium}, fine {fine})")]
    NotMonotonic { coarse: u32, medium: u32, fine: u32 },
    #[error("coarse threshold {coarse} lies above medium threshold {medium}")]
    ThresholdOrder { coarse: u8, medium: u8 },
}

/// Stufenfunktion Auflösung → Ringradius (in Zellen).
///
/// Monoton nicht steigend, damit die abgedeckte Fläche grob konstant bleibt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingPolicy {
    /// Höchste Auflösung, die noch als "grob" gilt
    pub coarse_max_resolution: u8,
    /// Höchste Auflösung, die noch als "mittel" gilt
    pub medium_max_resolution: u8,
    /// Ringradius für grobe Auflösungen
    pub ring_radius_coarse: u32,
    /// Ringradius für mittlere Auflösungen
    pub ring_radius_medium: u32,
    /// Ringradius für feine Auflösungen
    pub ring_radius_fine: u32,
}

impl Default for RingPolicy {
    fn default() -> Self {
        Self {
            coarse_max_resolution: 8,
            medium_max_resolution: 10,
            ring_radius_coarse: 5,
            ring_radius_medium: 3,
            ring_radius_fine: 2,
        }
    }
}

impl RingPolicy {
    /// Prüft Obergrenze und Monotonie der Radien sowie die Schwellen-Reihenfolge.
    pub fn validate(&self) -> Result<(), RingPolicyError> {
        let (coarse, medium, fine) = (
            self.ring_radius_coarse,
            self.ring_radius_medium,
            self.ring_radius_fine,
        );
        if let Some(&radius) = [coarse, medium, fine].iter().find(|&&r| r > MAX_RING_RADIUS) {
            return Err(RingPolicyError::RadiusTooLarge(radius));
        }
        if coarse < medium || medium < fine {
            return Err(RingPolicyError::NotMonotonic {
                coarse,
                medium,
                fine,
            });
        }
        if self.coarse_max_resolution > self.medium_max_resolution {
            return Err(RingPolicyError::ThresholdOrder {
                coarse: self.coarse_max_resolution,
                medium: self.medium_max_resolution,
            });
        }
        Ok(())
    }

    /// Ringradius für eine Auflösung.
    pub fn ring_radius(&self, resolution: u8) -> u32 {
        if resolution <= self.coarse_max_resolution {
            self.ring_radius_coarse
        } else if resolution <= self.medium_max_resolution {
            self.ring_radius_medium
        } else {
            self.ring_radius_fine
        }
    }
}

/// Zell-IDs der Scheibe um `center` bei `resolution`.
///
/// Leer bei ungültiger Auflösung oder nicht-endlichem Zentrum.
pub fn disk_around(center: LatLon, resolution: u8, policy: &RingPolicy) -> Vec<CellId> {
    match cell_at(center, resolution) {
        Some(center_cell) => grid_disk(center_cell, policy.ring_radius(resolution)),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    const CLAYTON: LatLon = LatLon::new(-37.915, 145.129);

    #[test]
    fn cell_id_packs_and_unpacks() {
        let id = CellId::new(10, -12345, 678).expect("gültige ID");
        assert_eq!(id.resolution(), 10);
        assert_eq!(id.axial(), (-12345, 678));
    }

    #[test]
    fn cell_id_text_roundtrip_and_rejects_garbage() {
        let id = cell_at(CLAYTON, 9).expect("Zelle erwartet");
        let text = id.to_string();
        assert_eq!(text.len(), 16);
        assert_eq!(text.parse::<CellId>(), Ok(id));

        assert!("zz".parse::<CellId>().is_err());
        assert!("1ffffffffffffffff".parse::<CellId>().is_err());
        assert!("".parse::<CellId>().is_err());
    }

    #[test]
    fn edge_length_shrinks_by_sqrt7_per_level() {
        let ratio = edge_length_m(9) / edge_length_m(10);
        assert_relative_eq!(ratio, 7f64.sqrt(), epsilon = 1e-9);
        // Auflösung 10 liegt im Bereich von ~66 m
        assert!((60.0..70.0).contains(&edge_length_m(10)));
    }

    #[test]
    fn center_of_cell_maps_back_to_same_cell() {
        for resolution in [0, 5, 8, 10, 11, 15] {
            let id = cell_at(CLAYTON, resolution).expect("Zelle erwartet");
            assert_eq!(cell_at(cell_center(id), resolution), Some(id));
        }
    }

    #[test]
    fn boundary_has_six_distinct_vertices() {
        let id = cell_at(CLAYTON, 10).expect("Zelle erwartet");
        let boundary = cell_boundary(id);
        assert_eq!(boundary.len(), 6);
        assert_ne!(boundary.first(), boundary.last());
    }

    #[test]
    fn disk_has_expected_size_and_center_first() {
        let center = cell_at(CLAYTON, 8).expect("Zelle erwartet");
        for k in 0..=5u32 {
            let disk = grid_disk(center, k);
            assert_eq!(disk.len() as u32, 3 * k * (k + 1) + 1);
            assert_eq!(disk[0], center);
            let unique: HashSet<_> = disk.iter().copied().collect();
            assert_eq!(unique.len(), disk.len());
            assert!(disk
                .iter()
                .all(|cell| grid_distance(center, *cell).is_some_and(|d| d <= k)));
        }
    }

    #[test]
    fn disk_membership_is_pure_function_of_center_and_resolution() {
        let policy = RingPolicy::default();
        let a = disk_around(CLAYTON, 10, &policy);
        let b = disk_around(CLAYTON, 10, &policy);
        assert_eq!(a, b);
        assert_eq!(a.len(), 37);
    }

    #[test]
    fn ring_policy_is_monotonically_non_increasing() {
        let policy = RingPolicy::default();
        let radii: Vec<u32> = (0..=MAX_RESOLUTION).map(|r| policy.ring_radius(r)).collect();
        assert!(radii.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(policy.ring_radius(8), 5);
        assert_eq!(policy.ring_radius(10), 3);
        assert_eq!(policy.ring_radius(11), 2);
    }

    #[test]
    fn invalid_input_yields_empty_disk() {
        let policy = RingPolicy::default();
        assert!(disk_around(CLAYTON, MAX_RESOLUTION + 1, &policy).is_empty());
        assert!(disk_around(LatLon::new(f64::NAN, 0.0), 10, &policy).is_empty());
    }

    #[test]
    fn same_position_differs_across_resolutions() {
        let a = cell_at(CLAYTON, 10).expect("Zelle erwartet");
        let b = cell_at(CLAYTON, 11).expect("Zelle erwartet");
        assert_ne!(a, b);
    }

    #[test]
    fn huge_ring_radius_is_clamped() {
        let center = cell_at(CLAYTON, 10).expect("Zelle erwartet");
        let cells = grid_disk(center, u32::MAX);
        let k = MAX_RING_RADIUS as usize;
        assert_eq!(cells.len(), 3 * k * (k + 1) + 1);
    }

    #[test]
    fn ring_policy_validation() {
        assert_eq!(RingPolicy::default().validate(), Ok(()));

        let growing = RingPolicy {
            ring_radius_fine: 4,
            ..RingPolicy::default()
        };
        assert!(matches!(
            growing.validate(),
            Err(RingPolicyError::NotMonotonic { .. })
        ));

        let huge = RingPolicy {
            ring_radius_coarse: 100_000,
            ..RingPolicy::default()
        };
        assert_eq!(huge.validate(), Err(RingPolicyError::RadiusTooLarge(100_000)));

        let swapped = RingPolicy {
            coarse_max_resolution: 12,
            ..RingPolicy::default()
        };
        assert!(matches!(
            swapped.validate(),
            Err(RingPolicyError::ThresholdOrder { .. })
        ));
    }

}
