use super::{inline_controller, logged_in, send};
use climates_dashboard::app::state::ActivePage;
use climates_dashboard::{
    AppController, AppIntent, AppState, Collaborators, DashboardOptions, LayerKey,
    RegenerationMode, Role, SyntheticMetrics,
};

#[test]
fn test_signup_with_real_credential_store_opens_dashboard() {
    let collaborators = Collaborators::offline(&DashboardOptions::default())
        .with_metrics(SyntheticMetrics::seeded(1));
    let mut controller =
        AppController::with_collaborators(collaborators, RegenerationMode::Inline);
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::SignupSubmitted {
            email: "Grower@Example.org".into(),
            password: "paddock42".into(),
        },
    );

    assert!(state.is_logged_in());
    assert_eq!(state.session.user_email.as_deref(), Some("grower@example.org"));
    assert_eq!(state.session.role, Role::GeneralPublic);
    assert_eq!(state.view.resolution, 10);
    assert!(state.layers.is_active(&LayerKey::Temperature));
    assert_eq!(state.cell_count(), 37);
    assert!(state.ui.login_form.password.is_empty());

    // Passwort taucht im Command-Log nicht auf
    assert!(state
        .command_log
        .entries()
        .all(|entry| !entry.contains("paddock42")));

    send(&mut controller, &mut state, AppIntent::LogoutRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::LoginSubmitted {
            email: "grower@example.org".into(),
            password: "wrong-pass1".into(),
        },
    );
    assert!(!state.is_logged_in());
    assert!(state.ui.login_form.error.is_some());
}

#[test]
fn test_empty_login_reports_inline_error_without_state_change() {
    let mut controller = inline_controller();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::LoginSubmitted {
            email: "".into(),
            password: "".into(),
        },
    );

    assert!(!state.is_logged_in());
    assert_eq!(state.session.active_page, ActivePage::Login);
    assert!(state.ui.login_form.error.is_some());
    assert_eq!(state.cell_count(), 0);
}

#[test]
fn test_role_switch_discards_manual_layer_toggles() {
    let (mut controller, mut state) = logged_in();

    send(
        &mut controller,
        &mut state,
        AppIntent::RoleChangeRequested { role: Role::Farmer },
    );
    assert_eq!(state.view.resolution, 8);
    assert!(state.layers.is_active(&LayerKey::SoilMoisture));

    // Manuelle Umschaltung unter der Farmer-Rolle
    send(
        &mut controller,
        &mut state,
        AppIntent::LayerToggled {
            key: LayerKey::FireRiskIndex,
        },
    );
    assert!(state.layers.is_active(&LayerKey::FireRiskIndex));
    assert!(!state.layers.is_active(&LayerKey::SoilMoisture));

    send(
        &mut controller,
        &mut state,
        AppIntent::RoleChangeRequested {
            role: Role::UrbanPlanner,
        },
    );

    assert_eq!(state.view.resolution, 11);
    assert_eq!(state.cell_count(), 19);
    assert_eq!(
        state.layers.active_map_layer(),
        Some(LayerKey::UrbanHeatIntensity)
    );
    assert_eq!(state.layers.active_map_layer_count(), 1);
    assert!(!state.layers.is_active(&LayerKey::FireRiskIndex));
}

#[test]
fn test_same_role_change_keeps_manual_toggles() {
    let (mut controller, mut state) = logged_in();
    send(
        &mut controller,
        &mut state,
        AppIntent::LayerToggled {
            key: LayerKey::SoilMoisture,
        },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::RoleChangeRequested {
            role: Role::GeneralPublic,
        },
    );

    assert!(state.layers.is_active(&LayerKey::SoilMoisture));
}

#[test]
fn test_chat_navigation_toggles_between_chat_and_dashboard() {
    let (mut controller, mut state) = logged_in();

    send(
        &mut controller,
        &mut state,
        AppIntent::NavigateRequested {
            page: ActivePage::Chatbot,
        },
    );
    assert_eq!(state.session.active_page, ActivePage::Chatbot);

    send(
        &mut controller,
        &mut state,
        AppIntent::NavigateRequested {
            page: ActivePage::Chatbot,
        },
    );
    assert_eq!(state.session.active_page, ActivePage::Dashboard);
}

#[test]
fn test_navigation_is_ignored_while_logged_out() {
    let mut controller = inline_controller();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::NavigateRequested {
            page: ActivePage::Profile,
        },
    );

    assert_eq!(state.session.active_page, ActivePage::Login);
}

#[test]
fn test_logout_discards_cells_and_resets_role() {
    let (mut controller, mut state) = logged_in();
    send(
        &mut controller,
        &mut state,
        AppIntent::RoleChangeRequested { role: Role::Farmer },
    );

    send(&mut controller, &mut state, AppIntent::LogoutRequested);

    assert!(!state.is_logged_in());
    assert_eq!(state.session.active_page, ActivePage::Login);
    assert_eq!(state.session.role, Role::GeneralPublic);
    assert_eq!(state.cell_count(), 0);
    assert!(state.selection.selected().is_none());
    assert!(!state.cells.is_loading());
}
