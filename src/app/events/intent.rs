use crate::app::state::ActivePage;
use crate::core::{
    CellId, DecisionTool, ForecastMetric, GenerationToken, HexCell, LatLon, LayerKey, Role,
    TrendVariable, UnitSystem, WeatherQuery,
};
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Anmeldung ───────────────────────────────────────────────
    /// Login-Formular abgeschickt
    LoginSubmitted { email: String, password: String },
    /// Registrierungs-Formular abgeschickt
    SignupSubmitted { email: String, password: String },
    /// Abmelden
    LogoutRequested,

    // ── Navigation & Rolle ──────────────────────────────────────
    /// Navigationseintrag angeklickt
    NavigateRequested { page: ActivePage },
    /// Rolle im Header gewechselt
    RoleChangeRequested { role: Role },

    // ── Karte ───────────────────────────────────────────────────
    /// Layer-Schalter in der Sidebar betätigt
    LayerToggled { key: LayerKey },
    /// Raster-Auflösung manuell geändert
    ResolutionChangeRequested { resolution: u8 },
    /// Zelle angeklickt
    CellClicked { id: CellId },
    /// Karte an einer Position angeklickt (Zelle wird ermittelt)
    MapClicked { position: LatLon },
    /// Selektion aufheben (Detail-Panel schließen)
    DeselectRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um ein Bildschirm-Delta verschieben (Drag)
    CameraPan { delta_px: DVec2 },
    /// Kamera zoomen, Ankerpunkt bleibt ortsfest
    CameraZoom { factor: f64, anchor_px: DVec2 },
    /// Kamera auf Zentrum und Auflösung zurücksetzen
    ResetCameraRequested,

    // ── Regeneration (vom Worker) ───────────────────────────────
    /// Zellen einer Regeneration fertig berechnet
    CellsGenerated {
        token: GenerationToken,
        cells: Vec<HexCell>,
    },
    /// Regeneration fehlgeschlagen
    CellsGenerationFailed {
        token: GenerationToken,
        message: String,
    },

    // ── Detail-Panel ────────────────────────────────────────────
    /// Werkzeug für die selektierte Zelle öffnen
    ToolRequested { tool: DecisionTool },
    /// Werkzeug schließen
    ToolClosed,
    /// Temperatur-Prognose anfordern
    ProjectionRequested { date: String, time: String },
    /// Export-Dialog für die selektierte Zelle öffnen
    ExportDialogRequested,
    /// Export-Zielpfad gewählt
    ExportCellRequested { path: String },

    // ── Chat ────────────────────────────────────────────────────
    ChatMessageSubmitted { text: String },
    ChatCleared,

    // ── Trend-Panel ─────────────────────────────────────────────
    /// Saisondaten für einen Vorort laden (`None` = nächstgelegener)
    TrendSuburbRequested { suburb: Option<String> },
    TrendVariableChanged { variable: TrendVariable },
    TrendYearsChanged { years: usize },

    // ── Wetterfenster ───────────────────────────────────────────
    /// Aktuelles Wetter für einen Ort abfragen
    CurrentWeatherRequested { query: WeatherQuery },
    /// Stundenvorhersage über `days` Tage abfragen
    ForecastRequested { query: WeatherQuery, days: u8 },
    WeatherUnitsChanged { units: UnitSystem },
    ForecastMetricChanged { metric: ForecastMetric },

    // ── Anwendung ───────────────────────────────────────────────
    /// Statusmeldung schließen
    StatusDismissed,
    /// Optionen speichern
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
