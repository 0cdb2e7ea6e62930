use super::{
    AppliedView, ChatState, SelectionState, SessionState, TrendState, UiState, ViewState,
    WeatherState,
};
use crate::app::CommandLog;
use crate::core::{config_for, ActiveLayerSet, HexCellStore, RegenerationRequest};
use crate::shared::DashboardOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Anmeldung, Rolle, aktive Seite
    pub session: SessionState,
    /// Schaltzustand der Layer
    pub layers: ActiveLayerSet,
    /// Auflösung, Zentrum, Kamera
    pub view: ViewState,
    /// Zellen der aktuellen Auflösung (exklusiver Besitz)
    pub cells: HexCellStore,
    /// Selektierte Zelle und Werkzeug
    pub selection: SelectionState,
    /// UI-Eingaben und Meldungen
    pub ui: UiState,
    pub chat: ChatState,
    pub trend: TrendState,
    /// Echtzeit- und Vorhersagedaten
    pub weather: WeatherState,
    /// Noch nicht ausgeführte Regenerationen (Host/Worker holt sie ab)
    pub pending_regenerations: Vec<RegenerationRequest>,
    /// Stand vor der laufenden Regeneration (nur wenn Zellen übernommen waren)
    pub rollback: Option<AppliedView>,
    /// Command-Log
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: DashboardOptions,
    /// Signalisiert, dass die Anwendung beendet werden soll
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State (abgemeldet).
    pub fn new() -> Self {
        Self::with_options(DashboardOptions::default())
    }

    /// Wie [`new`](Self::new), mit geladenen Optionen.
    pub fn with_options(options: DashboardOptions) -> Self {
        Self {
            session: SessionState::new(),
            layers: config_for(None).default_layers.clone(),
            view: ViewState::new(&options),
            cells: HexCellStore::new(),
            selection: SelectionState::new(),
            ui: UiState::new(),
            chat: ChatState::default(),
            trend: TrendState {
                years: options.trend_default_years,
                ..TrendState::default()
            },
            weather: WeatherState::default(),
            pending_regenerations: Vec::new(),
            rollback: None,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Zellen zurück.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.logged_in
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
