//! Core-Domänentypen: Rollen, Layer, Hexagon-Raster, Zellen, Messwerte, Saisondaten, Wetter.

pub mod camera;
pub mod color_scale;
pub mod decision_tool;
pub mod geo;
pub mod hex_cell;
/// Globales Hexagon-Raster
///
/// Dieses Modul definiert die Zell-Geometrie:
/// - CellId: gepackte Zell-Kennung (Auflösung + axiale Koordinaten)
/// - cell_at / cell_center / cell_boundary: Umrechnung Position ↔ Zelle
/// - grid_disk / disk_around: Scheibe aus Ringen um eine Zentrumszelle
pub mod hex_grid;
pub mod hex_store;
pub mod layer;
pub mod metrics_model;
pub mod role;
pub mod seasonal;
pub mod suburb_index;
pub mod weather;

pub use camera::MapCamera;
pub use color_scale::{ColorBand, ColorScale, Rgb};
pub use decision_tool::{tool_summary, DecisionTool};
pub use geo::LatLon;
pub use hex_cell::{to_polygon, CellMetrics, HexCell, MonthlyTemp, RiskLevel};
pub use hex_grid::{
    cell_at, cell_boundary, cell_center, disk_around, edge_length_m, grid_disk, CellId,
    CellIdParseError, RingPolicy, RingPolicyError, MAX_RESOLUTION, MAX_RING_RADIUS,
};
pub use hex_store::{generate_cells, GenerationToken, HexCellStore, RegenerationRequest};
pub use layer::{toggle, ActiveLayerSet, LayerKey};
pub use metrics_model::{MetricsSource, SyntheticMetrics};
pub use role::{config_for, Role, RoleConfig, RoleConfigRegistry};
pub use seasonal::{
    reshape_documents, trend_series, RawSeasonalDocument, Season, SeasonValues, SeasonalRecord,
    TrendPoint, TrendVariable,
};
pub use suburb_index::{SuburbIndex, SuburbInfo, SuburbMatch};
pub use weather::{
    AirQuality, CurrentMetric, CurrentWeather, Forecast, ForecastDay, ForecastHour,
    ForecastMetric, UnitSystem, WeatherForm, WeatherLocation, WeatherQuery, WeatherQueryError,
    WeatherQueryMode, FORECAST_DEFAULT_DAYS, FORECAST_MAX_DAYS,
};
