//! Externe Kollaborateure des Controllers.

use crate::core::{MetricsSource, SyntheticMetrics};
use crate::services::{
    AssistantClient, CredentialStore, InMemoryCredentialStore, JsonSeasonalStore,
    OfflineAssistant, OfflineWeather, SeasonalDataProvider, WeatherProvider,
};
use crate::shared::DashboardOptions;
use std::path::Path;

/// Wo Regenerationen ausgeführt werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegenerationMode {
    /// Synchron im Controller nach jedem Command
    #[default]
    Inline,
    /// Aufträge bleiben in `AppState::pending_regenerations` für einen Worker
    Deferred,
}

/// Bündel der Dienste hinter Traits.
pub struct Collaborators {
    pub credentials: Box<dyn CredentialStore>,
    pub assistant: Box<dyn AssistantClient>,
    pub seasonal: Box<dyn SeasonalDataProvider>,
    pub weather: Box<dyn WeatherProvider>,
    /// Messwert-Quelle für Inline-Regeneration
    pub metrics: Box<dyn MetricsSource>,
}

impl Collaborators {
    /// Lokale Dienste ohne Netzwerk, konfiguriert über die Optionen.
    ///
    /// Nicht lesbare Dateien führen zu einer Warnung und leeren Diensten.
    pub fn offline(options: &DashboardOptions) -> Self {
        let credentials = match options.credentials_path.as_deref() {
            Some(path) => InMemoryCredentialStore::with_persistence(Path::new(path))
                .unwrap_or_else(|e| {
                    log::warn!("Zugangsdaten nicht lesbar ({}): {:#}", path, e);
                    InMemoryCredentialStore::new()
                }),
            None => InMemoryCredentialStore::new(),
        };

        let seasonal = match options.seasonal_data_path.as_deref() {
            Some(path) => JsonSeasonalStore::load_from_file(Path::new(path)).unwrap_or_else(|e| {
                log::warn!("Saisondaten nicht lesbar ({}): {:#}", path, e);
                JsonSeasonalStore::empty()
            }),
            None => JsonSeasonalStore::empty(),
        }
        .with_limits(options.seasonal_raw_limit, options.seasonal_record_cap);

        let weather = OfflineWeather::new().with_places(seasonal.suburbs());

        Self {
            credentials: Box::new(credentials),
            assistant: Box::new(OfflineAssistant),
            seasonal: Box::new(seasonal),
            weather: Box::new(weather),
            metrics: Box::new(SyntheticMetrics::from_seed_option(options.metrics_seed)),
        }
    }

    pub fn with_credentials(mut self, credentials: impl CredentialStore + 'static) -> Self {
        self.credentials = Box::new(credentials);
        self
    }

    pub fn with_assistant(mut self, assistant: impl AssistantClient + 'static) -> Self {
        self.assistant = Box::new(assistant);
        self
    }

    pub fn with_seasonal(mut self, seasonal: impl SeasonalDataProvider + 'static) -> Self {
        self.seasonal = Box::new(seasonal);
        self
    }

    pub fn with_weather(mut self, weather: impl WeatherProvider + 'static) -> Self {
        self.weather = Box::new(weather);
        self
    }

    pub fn with_metrics(mut self, metrics: impl MetricsSource + 'static) -> Self {
        self.metrics = Box::new(metrics);
        self
    }
}
