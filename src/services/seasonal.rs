//! Saisondaten-Anbieter (Dokumentenspeicher als Blackbox).

use crate::core::{reshape_documents, RawSeasonalDocument, SeasonalRecord, SuburbInfo};
use crate::shared::options::{SEASONAL_RAW_LIMIT, SEASONAL_RECORD_CAP};
use serde::Deserialize;
use std::path::Path;

/// Liefert Jahres-Datensätze pro Vorort. Unbekannter Vorort ⇒ leere Liste.
pub trait SeasonalDataProvider: Send {
    fn seasonal_records(&self, suburb: &str, state: Option<&str>) -> anyhow::Result<Vec<SeasonalRecord>>;

    /// Vorort-Verzeichnis für die Suche nach dem nächstgelegenen Vorort.
    fn suburbs(&self) -> Vec<SuburbInfo>;
}

#[derive(Debug, Default, Deserialize)]
struct StoreFile {
    #[serde(default)]
    suburbs: Vec<SuburbInfo>,
    #[serde(default)]
    documents: Vec<RawSeasonalDocument>,
}

/// JSON-Dokumentenspeicher: flache Saison-Dokumente plus Vorort-Verzeichnis.
#[derive(Debug, Clone)]
pub struct JsonSeasonalStore {
    suburbs: Vec<SuburbInfo>,
    documents: Vec<RawSeasonalDocument>,
    raw_limit: usize,
    record_cap: usize,
}

impl Default for JsonSeasonalStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl JsonSeasonalStore {
    pub fn empty() -> Self {
        Self {
            suburbs: Vec::new(),
            documents: Vec::new(),
            raw_limit: SEASONAL_RAW_LIMIT,
            record_cap: SEASONAL_RECORD_CAP,
        }
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let file: StoreFile = serde_json::from_str(content)?;
        Ok(Self {
            suburbs: file.suburbs,
            documents: file.documents,
            ..Self::empty()
        })
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&content)?;
        log::info!(
            "Saisondaten geladen aus {}: {} Dokumente, {} Vororte",
            path.display(),
            store.documents.len(),
            store.suburbs.len()
        );
        Ok(store)
    }

    /// Setzt Roh-Limit und Jahres-Obergrenze pro Abfrage.
    pub fn with_limits(mut self, raw_limit: usize, record_cap: usize) -> Self {
        self.raw_limit = raw_limit;
        self.record_cap = record_cap;
        self
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

impl SeasonalDataProvider for JsonSeasonalStore {
    fn seasonal_records(&self, suburb: &str, state: Option<&str>) -> anyhow::Result<Vec<SeasonalRecord>> {
        let suburb = suburb.trim();
        let matches = self
            .documents
            .iter()
            .filter(|doc| doc.suburb.eq_ignore_ascii_case(suburb))
            .filter(|doc| match (state, doc.state.as_deref()) {
                (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
                (Some(_), None) => false,
                (None, _) => true,
            })
            .take(self.raw_limit);

        let records = reshape_documents(matches, self.record_cap);
        log::debug!("Saisondaten für '{}': {} Jahre", suburb, records.len());
        Ok(records)
    }

    fn suburbs(&self) -> Vec<SuburbInfo> {
        self.suburbs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "suburbs": [{"name": "Clayton", "state": "VIC", "lat": -37.915, "lon": 145.129}],
        "documents": [
            {"suburb": "Clayton", "state": "VIC", "year": 2021, "season": "Summer", "tmax": 27.1, "tmin": 15.2, "precip": 120.0},
            {"suburb": "Clayton", "state": "VIC", "year": 2020, "season": "Winter", "tmax": 14.0, "tmin": 6.1, "precip": 180.5},
            {"suburb": "clayton", "state": "NSW", "year": 2019, "season": "Spring", "tmax": 21.0, "tmin": 9.0, "precip": 80.0}
        ]
    }"#;

    #[test]
    fn query_is_case_insensitive_and_sorted() {
        let store = JsonSeasonalStore::from_json_str(SAMPLE).expect("Beispiel sollte parsen");
        let records = store
            .seasonal_records("CLAYTON", None)
            .expect("Abfrage sollte gelingen");
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
    }

    #[test]
    fn state_filter_narrows_results() {
        let store = JsonSeasonalStore::from_json_str(SAMPLE).expect("ok");
        let records = store.seasonal_records("Clayton", Some("vic")).expect("ok");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn unknown_suburb_is_empty_not_error() {
        let store = JsonSeasonalStore::from_json_str(SAMPLE).expect("ok");
        assert!(store.seasonal_records("Atlantis", None).expect("ok").is_empty());
    }

    #[test]
    fn raw_limit_applies_before_reshaping() {
        let store = JsonSeasonalStore::from_json_str(SAMPLE)
            .expect("ok")
            .with_limits(1, 20);
        let records = store.seasonal_records("Clayton", None).expect("ok");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2021);
    }
}
