//! UI-Layer mit egui.
//!
//! Jede Komponente liest den `AppState` und gibt `AppIntent`s zurück.
//! Nur reine Formular-Puffer (Texteingaben) werden direkt geschrieben.

mod chat;
pub mod detail_panel;
pub mod dialogs;
pub mod input;
pub mod login;
pub mod map_view;
pub mod menu;
pub mod overlays;
mod profile;
pub mod sidebar;
pub mod status;

pub use chat::render_chat_panel;
pub use detail_panel::render_detail_panel;
pub use dialogs::handle_export_dialog;
pub use input::InputState;
pub use login::render_login_screen;
pub use map_view::{color32, paint_map_scene};
pub use menu::render_menu;
pub use overlays::render_overlays;
pub use profile::render_profile_page;
pub use sidebar::render_sidebar;
pub use status::render_status_bar;
