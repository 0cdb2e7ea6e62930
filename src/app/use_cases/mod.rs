//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod chat;
pub mod export;
pub mod layers;
pub mod projection;
pub mod regeneration;
pub mod selection;
pub mod session;
pub mod style;
pub mod trend;
pub mod weather;
