use crate::core::Role;

/// Seite bzw. Ansicht der Anwendung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivePage {
    #[default]
    Login,
    Dashboard,
    Profile,
    Chatbot,
}

impl ActivePage {
    pub fn label(self) -> &'static str {
        match self {
            ActivePage::Login => "Login",
            ActivePage::Dashboard => "Dashboard",
            ActivePage::Profile => "Profile",
            ActivePage::Chatbot => "Chat",
        }
    }

    /// Seiten, auf denen die Karte samt Selektions-Hervorhebung sichtbar ist.
    pub fn shows_map(self) -> bool {
        matches!(self, ActivePage::Dashboard | ActivePage::Chatbot)
    }
}

/// Anmeldezustand, Rolle und aktive Seite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub logged_in: bool,
    pub user_email: Option<String>,
    pub role: Role,
    pub active_page: ActivePage,
}

impl SessionState {
    /// Abgemeldet, Standardrolle, Login-Seite.
    pub fn new() -> Self {
        Self::default()
    }
}
