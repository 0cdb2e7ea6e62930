use super::{collaborators, inline_controller, login, logged_in, send};
use climates_dashboard::app::use_cases::regeneration;
use climates_dashboard::core::TrendVariable;
use climates_dashboard::{
    AppController, AppIntent, AppState, LayerKey, RegenerationMode, RegenerationWorker, Role,
    SyntheticMetrics,
};
use std::time::Duration;

fn deferred_controller() -> AppController {
    AppController::with_collaborators(collaborators(), RegenerationMode::Deferred)
}

#[test]
fn test_deferred_mode_marks_loading_until_cells_arrive() {
    let mut controller = deferred_controller();
    let mut state = AppState::new();
    login(&mut controller, &mut state);

    assert!(state.cells.is_loading());
    assert_eq!(state.cell_count(), 0);
    let requests = regeneration::take_pending(&mut state);
    assert_eq!(requests.len(), 1);

    // Während des Ladens: neutrale Darstellung, keine Werkzeuge
    let scene = controller.build_map_scene(&state);
    assert!(scene.loading);
    assert!(!scene.has_cells());

    let cells = requests[0]
        .execute(&mut SyntheticMetrics::seeded(3))
        .expect("Generierung sollte gelingen");
    send(
        &mut controller,
        &mut state,
        AppIntent::CellsGenerated {
            token: requests[0].token,
            cells,
        },
    );

    assert!(!state.cells.is_loading());
    assert_eq!(state.cell_count(), 37);
}

#[test]
fn test_stale_generation_result_is_discarded() {
    let mut controller = deferred_controller();
    let mut state = AppState::new();
    login(&mut controller, &mut state);

    // Neuere Regeneration (Rollenwechsel) überholt die erste
    send(
        &mut controller,
        &mut state,
        AppIntent::RoleChangeRequested {
            role: Role::UrbanPlanner,
        },
    );
    let requests = regeneration::take_pending(&mut state);
    assert_eq!(requests.len(), 2);
    let (older, newer) = (requests[0], requests[1]);
    let mut source = SyntheticMetrics::seeded(4);

    // Neuere zuerst fertig, dann die langsame ältere
    let newer_cells = newer.execute(&mut source).expect("ok");
    let older_cells = older.execute(&mut source).expect("ok");
    send(
        &mut controller,
        &mut state,
        AppIntent::CellsGenerated {
            token: newer.token,
            cells: newer_cells,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::CellsGenerated {
            token: older.token,
            cells: older_cells,
        },
    );

    assert_eq!(state.cells.resolution(), Some(11));
    assert_eq!(state.cell_count(), 19);
}

/// Führt alle wartenden Aufträge aus und liefert die Ergebnisse als Intents.
fn complete_pending(controller: &mut AppController, state: &mut AppState, seed: u64) {
    let mut source = SyntheticMetrics::seeded(seed);
    for request in regeneration::take_pending(state) {
        let cells = request.execute(&mut source).expect("Generierung sollte gelingen");
        send(
            controller,
            state,
            AppIntent::CellsGenerated {
                token: request.token,
                cells,
            },
        );
    }
}

/// Lässt alle wartenden Aufträge fehlschlagen.
fn fail_pending(controller: &mut AppController, state: &mut AppState) {
    for request in regeneration::take_pending(state) {
        send(
            controller,
            state,
            AppIntent::CellsGenerationFailed {
                token: request.token,
                message: "upstream timeout".into(),
            },
        );
    }
}

fn deferred_logged_in() -> (AppController, AppState) {
    let mut controller = deferred_controller();
    let mut state = AppState::new();
    login(&mut controller, &mut state);
    complete_pending(&mut controller, &mut state, 5);
    assert_eq!(state.cells.resolution(), Some(10));
    (controller, state)
}

#[test]
fn test_failed_resolution_change_can_be_retried() {
    let (mut controller, mut state) = deferred_logged_in();
    let before = state.cell_count();

    send(
        &mut controller,
        &mut state,
        AppIntent::ResolutionChangeRequested { resolution: 12 },
    );
    fail_pending(&mut controller, &mut state);

    assert!(!state.cells.is_loading());
    assert_eq!(state.cell_count(), before);
    assert_eq!(state.cells.resolution(), Some(10));
    assert_eq!(state.view.resolution, 10);
    let status = state.ui.status_message.as_deref().unwrap_or_default();
    assert!(status.contains("upstream timeout"));

    // Erneuter Versuch wird nicht als No-op verschluckt
    send(
        &mut controller,
        &mut state,
        AppIntent::ResolutionChangeRequested { resolution: 12 },
    );
    assert_eq!(state.pending_regenerations.len(), 1);
    complete_pending(&mut controller, &mut state, 6);

    assert_eq!(state.cells.resolution(), Some(12));
    assert_eq!(state.cell_count(), 19);
}

#[test]
fn test_failed_role_change_restores_previous_role() {
    let (mut controller, mut state) = deferred_logged_in();
    send(
        &mut controller,
        &mut state,
        AppIntent::LayerToggled {
            key: LayerKey::FireRiskIndex,
        },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::RoleChangeRequested { role: Role::Farmer },
    );
    assert_eq!(state.session.role, Role::Farmer);
    fail_pending(&mut controller, &mut state);

    assert_eq!(state.session.role, Role::GeneralPublic);
    assert_eq!(state.view.resolution, 10);
    assert!(state.layers.is_active(&LayerKey::FireRiskIndex));
    assert!(!state.layers.is_active(&LayerKey::SoilMoisture));

    send(
        &mut controller,
        &mut state,
        AppIntent::RoleChangeRequested { role: Role::Farmer },
    );
    assert_eq!(state.pending_regenerations.len(), 1);
    complete_pending(&mut controller, &mut state, 8);

    assert_eq!(state.session.role, Role::Farmer);
    assert_eq!(state.cells.resolution(), Some(8));
    assert_eq!(state.cell_count(), 91);
    assert!(state.layers.is_active(&LayerKey::SoilMoisture));
}

#[test]
fn test_failure_of_superseded_generation_is_ignored() {
    let (mut controller, mut state) = deferred_logged_in();

    send(
        &mut controller,
        &mut state,
        AppIntent::ResolutionChangeRequested { resolution: 9 },
    );
    let stale = regeneration::take_pending(&mut state);
    send(
        &mut controller,
        &mut state,
        AppIntent::ResolutionChangeRequested { resolution: 11 },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::CellsGenerationFailed {
            token: stale[0].token,
            message: "late".into(),
        },
    );

    assert!(state.cells.is_loading());
    assert_eq!(state.view.resolution, 11);
    complete_pending(&mut controller, &mut state, 2);
    assert_eq!(state.cells.resolution(), Some(11));
}

#[test]
fn test_worker_round_trip_through_controller() {
    let mut controller = deferred_controller();
    let mut state = AppState::new();
    login(&mut controller, &mut state);

    let worker =
        RegenerationWorker::spawn(Box::new(SyntheticMetrics::seeded(9))).expect("Thread-Start");
    for request in regeneration::take_pending(&mut state) {
        worker.submit(request).expect("Auftrag senden");
    }

    let intent = worker
        .recv_timeout(Duration::from_secs(10))
        .expect("Ergebnis erwartet");
    send(&mut controller, &mut state, intent);

    assert!(!state.cells.is_loading());
    assert_eq!(state.cell_count(), 37);
}

#[test]
fn test_trend_layer_loads_nearest_suburb() {
    let (mut controller, mut state) = logged_in();

    send(
        &mut controller,
        &mut state,
        AppIntent::LayerToggled {
            key: LayerKey::TrendGraph,
        },
    );

    assert!(state.layers.is_active(&LayerKey::TrendGraph));
    // Modaler Layer lässt die Kartenfärbung unberührt
    assert!(state.layers.is_active(&LayerKey::Temperature));
    assert_eq!(state.trend.suburb.as_deref(), Some("Clayton"));
    let years: Vec<i32> = state.trend.records.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2022, 2023]);

    send(
        &mut controller,
        &mut state,
        AppIntent::TrendVariableChanged {
            variable: TrendVariable::Precip,
        },
    );
    let series = state.trend.series();
    assert_eq!(series.len(), 2);
    assert_eq!(series[1].summer, Some(120.8));
    assert_eq!(series[0].autumn, None);
}

#[test]
fn test_trend_unknown_suburb_is_empty_with_status() {
    let mut controller = inline_controller();
    let mut state = AppState::new();
    login(&mut controller, &mut state);

    send(
        &mut controller,
        &mut state,
        AppIntent::TrendSuburbRequested {
            suburb: Some("Atlantis".into()),
        },
    );

    assert!(state.trend.records.is_empty());
    assert!(state.ui.status_message.is_some());
}
