//! Climates Dashboard Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod services;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, Collaborators, RegenerationMode,
    RegenerationWorker, UiState, ViewState,
};
pub use core::{
    cell_at, config_for, generate_cells, toggle, ActiveLayerSet, CellId, CellMetrics, HexCell,
    HexCellStore, LatLon, LayerKey, MapCamera, Role, RoleConfig, SyntheticMetrics,
};
pub use services::{AssistantClient, CredentialStore, SeasonalDataProvider, WeatherProvider};
pub use shared::{CellStyle, DashboardOptions, MapScene};
