use crate::core::WeatherForm;

/// Anmelde- oder Registrierungsformular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Eingaben des Login-/Signup-Formulars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormState {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    /// Inline-Fehler (Validierung, falsche Zugangsdaten)
    pub error: Option<String>,
}

/// Eingaben der Temperatur-Prognose.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionFormState {
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
}

impl Default for ProjectionFormState {
    fn default() -> Self {
        Self {
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            time: "12:00".to_string(),
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Sichtbare Status- bzw. Fehlermeldung
    pub status_message: Option<String>,
    pub login_form: LoginFormState,
    pub projection_form: ProjectionFormState,
    /// Eingabefeld des Chat-Panels
    pub chat_input: String,
    /// Eingabefeld für den Vorort im Trend-Panel
    pub trend_suburb_input: String,
    /// Ortsangabe der Wetterfenster
    pub weather_form: WeatherForm,
    /// Speichern-Dialog für den Zell-Export anzeigen
    pub show_export_dialog: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
