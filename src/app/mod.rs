//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod collaborators;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod regeneration_worker;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Sitzung, Karte, Panels).
pub mod state;
pub mod use_cases;

pub use collaborators::{Collaborators, RegenerationMode};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use regeneration_worker::RegenerationWorker;
pub use render_scene::build as build_map_scene;
pub use state::{AppState, SelectionState, UiState, ViewState};
