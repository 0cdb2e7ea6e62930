//! Saisonale Klimadaten pro Vorort und daraus abgeleitete Trendreihen.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Jahreszeit (Südhalbkugel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Summer, Season::Autumn, Season::Winter, Season::Spring];

    pub fn label(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

/// Messwerte einer Jahreszeit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonValues {
    /// Mittlere Tageshöchsttemperatur in °C
    pub tmax: f64,
    /// Mittlere Tagestiefsttemperatur in °C
    pub tmin: f64,
    /// Niederschlag in mm
    pub precip: f64,
}

/// Ein Jahr mit bis zu vier Jahreszeiten.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeasonalRecord {
    pub year: i32,
    #[serde(rename = "Summer", default, skip_serializing_if = "Option::is_none")]
    pub summer: Option<SeasonValues>,
    #[serde(rename = "Autumn", default, skip_serializing_if = "Option::is_none")]
    pub autumn: Option<SeasonValues>,
    #[serde(rename = "Winter", default, skip_serializing_if = "Option::is_none")]
    pub winter: Option<SeasonValues>,
    #[serde(rename = "Spring", default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<SeasonValues>,
}

impl SeasonalRecord {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    pub fn season(&self, season: Season) -> Option<&SeasonValues> {
        match season {
            Season::Summer => self.summer.as_ref(),
            Season::Autumn => self.autumn.as_ref(),
            Season::Winter => self.winter.as_ref(),
            Season::Spring => self.spring.as_ref(),
        }
    }

    fn slot_mut(&mut self, season: Season) -> &mut Option<SeasonValues> {
        match season {
            Season::Summer => &mut self.summer,
            Season::Autumn => &mut self.autumn,
            Season::Winter => &mut self.winter,
            Season::Spring => &mut self.spring,
        }
    }
}

/// Flaches Dokument wie im Dokumentenspeicher abgelegt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeasonalDocument {
    pub suburb: String,
    #[serde(default)]
    pub state: Option<String>,
    pub year: i32,
    pub season: Season,
    pub tmax: f64,
    pub tmin: f64,
    pub precip: f64,
}

/// Formt flache Dokumente zu Jahres-Datensätzen um.
///
/// Ergebnis ist nach Jahr sortiert und auf die jüngsten `cap` Jahre begrenzt.
/// Doppelte (Jahr, Jahreszeit)-Paare: das spätere Dokument gewinnt.
pub fn reshape_documents<'a>(
    documents: impl IntoIterator<Item = &'a RawSeasonalDocument>,
    cap: usize,
) -> Vec<SeasonalRecord> {
    let mut by_year: BTreeMap<i32, SeasonalRecord> = BTreeMap::new();
    for doc in documents {
        let record = by_year
            .entry(doc.year)
            .or_insert_with(|| SeasonalRecord::new(doc.year));
        *record.slot_mut(doc.season) = Some(SeasonValues {
            tmax: doc.tmax,
            tmin: doc.tmin,
            precip: doc.precip,
        });
    }

    let records: Vec<SeasonalRecord> = by_year.into_values().collect();
    let skip = records.len().saturating_sub(cap);
    records.into_iter().skip(skip).collect()
}

// ── Trend ───────────────────────────────────────────────────────────

/// Darstellbare Größe im Trend-Graphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrendVariable {
    #[default]
    Tmax,
    Tmin,
    Precip,
}

impl TrendVariable {
    pub const ALL: [TrendVariable; 3] = [TrendVariable::Tmax, TrendVariable::Tmin, TrendVariable::Precip];

    pub fn label(self) -> &'static str {
        match self {
            TrendVariable::Tmax => "Max Temperature",
            TrendVariable::Tmin => "Min Temperature",
            TrendVariable::Precip => "Precipitation",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            TrendVariable::Tmax | TrendVariable::Tmin => "°C",
            TrendVariable::Precip => "mm",
        }
    }

    pub fn pick(self, values: &SeasonValues) -> f64 {
        match self {
            TrendVariable::Tmax => values.tmax,
            TrendVariable::Tmin => values.tmin,
            TrendVariable::Precip => values.precip,
        }
    }
}

impl fmt::Display for TrendVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ein Jahr im Trend-Graphen, fehlende Jahreszeiten bleiben leer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub summer: Option<f64>,
    pub autumn: Option<f64>,
    pub winter: Option<f64>,
    pub spring: Option<f64>,
}

impl TrendPoint {
    pub fn value(&self, season: Season) -> Option<f64> {
        match season {
            Season::Summer => self.summer,
            Season::Autumn => self.autumn,
            Season::Winter => self.winter,
            Season::Spring => self.spring,
        }
    }
}

/// Trendreihe der letzten `years` Jahre für eine Größe.
pub fn trend_series(records: &[SeasonalRecord], variable: TrendVariable, years: usize) -> Vec<TrendPoint> {
    let mut sorted: Vec<&SeasonalRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.year);
    let skip = sorted.len().saturating_sub(years);

    sorted
        .into_iter()
        .skip(skip)
        .map(|record| {
            let value = |season| record.season(season).map(|v| variable.pick(v));
            TrendPoint {
                year: record.year,
                summer: value(Season::Summer),
                autumn: value(Season::Autumn),
                winter: value(Season::Winter),
                spring: value(Season::Spring),
            }
        })
        .collect()
}
