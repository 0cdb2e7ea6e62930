//! Application State: zentrale Datenhaltung.
//!
//! `AppState` ist das einzige besitzende Sitzungs-Aggregat. Mutationen laufen
//! ausschließlich über die Use-Cases in `app::use_cases`.

mod app_state;
mod panels;
mod selection;
mod session;
mod ui;
mod view;

pub use app_state::AppState;
pub use panels::{ChatAuthor, ChatMessage, ChatState, TrendState, WeatherState};
pub use selection::{SelectError, SelectionState};
pub use session::{ActivePage, SessionState};
pub use ui::{AuthMode, LoginFormState, ProjectionFormState, UiState};
pub use view::{AppliedView, ViewState};
