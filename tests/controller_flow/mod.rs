use climates_dashboard::app::state::ActivePage;
use climates_dashboard::services::JsonSeasonalStore;
use climates_dashboard::{
    AppController, AppIntent, AppState, Collaborators, CredentialStore, DashboardOptions,
    LatLon, RegenerationMode, SyntheticMetrics,
};
use climates_dashboard::services::CredentialError;

mod regeneration;
mod selection;
mod session;
mod weather;

pub const CLAYTON: LatLon = LatLon::new(-37.915, 145.129);

/// Zugangsdaten-Dienst, der jede nichtleere Anmeldung akzeptiert.
pub struct AcceptAll;

impl CredentialStore for AcceptAll {
    fn signup(&mut self, email: &str, password: &str) -> Result<(), CredentialError> {
        self.login(email, password)
    }

    fn login(&self, email: &str, password: &str) -> Result<(), CredentialError> {
        if email.trim().is_empty() || password.is_empty() {
            Err(CredentialError::InvalidInput("Email and password are required".into()))
        } else {
            Ok(())
        }
    }
}

pub const SEASONAL_JSON: &str = r#"{
    "suburbs": [
        {"name": "Clayton", "state": "VIC", "lat": -37.915, "lon": 145.129},
        {"name": "Sydney", "state": "NSW", "lat": -33.868, "lon": 151.209}
    ],
    "documents": [
        {"suburb": "Clayton", "state": "VIC", "year": 2022, "season": "Summer", "tmax": 26.4, "tmin": 14.9, "precip": 140.2},
        {"suburb": "Clayton", "state": "VIC", "year": 2022, "season": "Winter", "tmax": 14.1, "tmin": 6.0, "precip": 190.0},
        {"suburb": "Clayton", "state": "VIC", "year": 2023, "season": "Summer", "tmax": 27.0, "tmin": 15.3, "precip": 120.8},
        {"suburb": "Sydney", "state": "NSW", "year": 2023, "season": "Summer", "tmax": 28.2, "tmin": 19.5, "precip": 300.1}
    ]
}"#;

pub fn collaborators() -> Collaborators {
    let seasonal = JsonSeasonalStore::from_json_str(SEASONAL_JSON).expect("Beispieldaten parsen");
    Collaborators::offline(&DashboardOptions::default())
        .with_credentials(AcceptAll)
        .with_seasonal(seasonal)
        .with_metrics(SyntheticMetrics::seeded(7))
}

pub fn inline_controller() -> AppController {
    AppController::with_collaborators(collaborators(), RegenerationMode::Inline)
}

/// Controller + angemeldeter State (Standardrolle, Zellen erzeugt).
pub fn logged_in() -> (AppController, AppState) {
    let mut controller = inline_controller();
    let mut state = AppState::new();
    login(&mut controller, &mut state);
    (controller, state)
}

pub fn login(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(
            state,
            AppIntent::LoginSubmitted {
                email: "tester@example.org".into(),
                password: "secret123".into(),
            },
        )
        .expect("Login sollte ohne Fehler durchlaufen");
    assert_eq!(state.session.active_page, ActivePage::Dashboard);
}

pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}
