use crate::core::{
    trend_series, CurrentWeather, Forecast, ForecastMetric, SeasonalRecord, TrendPoint,
    TrendVariable, UnitSystem, FORECAST_DEFAULT_DAYS,
};
use crate::shared::options::TREND_DEFAULT_YEARS;

/// Absender einer Chat-Nachricht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

/// Verlauf des Chat-Panels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
}

impl ChatState {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, author: ChatAuthor, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            author,
            text: text.into(),
        });
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Zustand des saisonalen Trend-Panels.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendState {
    /// Vorort der geladenen Daten
    pub suburb: Option<String>,
    pub state_filter: Option<String>,
    pub variable: TrendVariable,
    /// Zeitfenster in Jahren
    pub years: usize,
    pub records: Vec<SeasonalRecord>,
}

impl Default for TrendState {
    fn default() -> Self {
        Self {
            suburb: None,
            state_filter: None,
            variable: TrendVariable::default(),
            years: TREND_DEFAULT_YEARS,
            records: Vec::new(),
        }
    }
}

impl TrendState {
    /// Trendreihe für Variable und Zeitfenster.
    pub fn series(&self) -> Vec<TrendPoint> {
        trend_series(&self.records, self.variable, self.years)
    }
}

/// Ergebnisse der Echtzeit- und Vorhersage-Fenster.
///
/// Fehlgeschlagene Abfragen lassen die letzten Ergebnisse stehen.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherState {
    pub current: Option<CurrentWeather>,
    pub forecast: Option<Forecast>,
    /// Angefragte Vorhersagetage
    pub days: u8,
    pub units: UnitSystem,
    pub metric: ForecastMetric,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self {
            current: None,
            forecast: None,
            days: FORECAST_DEFAULT_DAYS,
            units: UnitSystem::default(),
            metric: ForecastMetric::default(),
        }
    }
}
