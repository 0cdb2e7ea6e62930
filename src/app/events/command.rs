use crate::app::state::ActivePage;
use crate::core::{
    CellId, DecisionTool, ForecastMetric, GenerationToken, HexCell, LayerKey, Role,
    TrendVariable, UnitSystem, WeatherQuery,
};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Sitzung ─────────────────────────────────────────────────
    /// Zugangsdaten prüfen und bei Erfolg Sitzung starten
    VerifyLogin { email: String, password: String },
    /// Konto anlegen und bei Erfolg Sitzung starten
    RegisterAccount { email: String, password: String },
    /// Sitzung beenden
    Logout,
    /// Seite wechseln
    NavigateTo { page: ActivePage },
    /// Rolle wechseln (harter Reset von Layern und Auflösung)
    ChangeRole { role: Role },

    // ── Karte ───────────────────────────────────────────────────
    ToggleLayer { key: LayerKey },
    SetResolution { resolution: u8 },
    SelectCell { id: CellId },
    ClearSelection,
    SetViewportSize { size: [f32; 2] },
    PanCamera { delta_px: DVec2 },
    ZoomCamera { factor: f64, anchor_px: DVec2 },
    ResetCamera,

    // ── Regeneration ────────────────────────────────────────────
    ApplyGeneratedCells {
        token: GenerationToken,
        cells: Vec<HexCell>,
    },
    FailRegeneration {
        token: GenerationToken,
        message: String,
    },

    // ── Detail-Panel ────────────────────────────────────────────
    OpenTool { tool: DecisionTool },
    CloseTool,
    PredictTemperature { date: String, time: String },
    RequestExportDialog,
    ExportSelectedCell { path: String },

    // ── Chat ────────────────────────────────────────────────────
    SendChatMessage { text: String },
    ClearChat,

    // ── Trend-Panel ─────────────────────────────────────────────
    LoadTrendData { suburb: Option<String> },
    SetTrendVariable { variable: TrendVariable },
    SetTrendYears { years: usize },

    // ── Wetter ──────────────────────────────────────────────────
    FetchCurrentWeather { query: WeatherQuery },
    FetchForecast { query: WeatherQuery, days: u8 },
    SetWeatherUnits { units: UnitSystem },
    SetForecastMetric { metric: ForecastMetric },

    // ── Anwendung ───────────────────────────────────────────────
    ClearStatusMessage,
    SaveOptions,
    RequestExit,
}

impl AppCommand {
    /// Kurzbeschreibung für das Command-Log; Passwörter werden nie ausgegeben.
    pub fn summary(&self) -> String {
        match self {
            AppCommand::VerifyLogin { email, .. } => format!("VerifyLogin({email}, ***)"),
            AppCommand::RegisterAccount { email, .. } => format!("RegisterAccount({email}, ***)"),
            AppCommand::ApplyGeneratedCells { token, cells } => {
                format!("ApplyGeneratedCells(token {}, {} Zellen)", token.0, cells.len())
            }
            AppCommand::SendChatMessage { text } => {
                format!("SendChatMessage({} Zeichen)", text.chars().count())
            }
            other => format!("{other:?}"),
        }
    }
}
