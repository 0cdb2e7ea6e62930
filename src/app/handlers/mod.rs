//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod assistant;
pub mod dialog;
pub mod map;
pub mod session;
pub mod trend;
pub mod view;
pub mod weather;
