//! Externe Kollaborateure hinter Traits: Zugangsdaten, KI-Assistent, Saisondaten, Wetter.

pub mod assistant;
pub mod credentials;
pub mod seasonal;
pub mod weather;

pub use assistant::{
    chat_prompt, parse_temperature, projection_prompt, AssistantClient, AssistantContext,
    OfflineAssistant,
};
pub use credentials::{CredentialError, CredentialStore, InMemoryCredentialStore};
pub use seasonal::{JsonSeasonalStore, SeasonalDataProvider};
pub use weather::{OfflineWeather, WeatherProvider};
