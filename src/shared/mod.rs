//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod cell_style;
mod map_scene;
pub mod options;

pub use cell_style::CellStyle;
pub use map_scene::{MapScene, ScenePolygon};
pub use options::{DashboardOptions, StyleOptions};
