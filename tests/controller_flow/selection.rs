use super::{logged_in, send, CLAYTON};
use climates_dashboard::app::state::{ActivePage, ChatAuthor};
use climates_dashboard::core::DecisionTool;
use climates_dashboard::{cell_at, AppIntent, CellId, LayerKey};

#[test]
fn test_map_click_selects_cell_under_pointer() {
    let (mut controller, mut state) = logged_in();
    let expected = cell_at(CLAYTON, state.view.resolution).expect("Zelle erwartet");

    send(
        &mut controller,
        &mut state,
        AppIntent::MapClicked { position: CLAYTON },
    );

    assert_eq!(state.selection.selected(), Some(expected));
    let scene = controller.build_map_scene(&state);
    assert_eq!(scene.highlighted, Some(expected));
}

#[test]
fn test_unknown_cell_click_keeps_previous_selection() {
    let (mut controller, mut state) = logged_in();
    let first = state.cells.ids().next().expect("Zellen erwartet");
    send(&mut controller, &mut state, AppIntent::CellClicked { id: first });

    // Zelle einer anderen Auflösung existiert im Store nicht
    let foreign = cell_at(CLAYTON, 3).expect("Zelle erwartet");
    send(
        &mut controller,
        &mut state,
        AppIntent::CellClicked { id: foreign },
    );

    assert_eq!(state.selection.selected(), Some(first));
}

#[test]
fn test_regeneration_clears_even_a_still_valid_selection() {
    let (mut controller, mut state) = logged_in();
    let center = cell_at(CLAYTON, 10).expect("Zelle erwartet");
    send(&mut controller, &mut state, AppIntent::CellClicked { id: center });
    assert!(state.selection.selected().is_some());

    // Gleiche Auflösung nach dem Rollenwechsel zurück: ID existiert wieder
    send(
        &mut controller,
        &mut state,
        AppIntent::ResolutionChangeRequested { resolution: 9 },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ResolutionChangeRequested { resolution: 10 },
    );

    assert!(state.cells.contains(center));
    assert!(state.selection.selected().is_none());
}

#[test]
fn test_resolution_change_keeps_layers() {
    let (mut controller, mut state) = logged_in();
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
        AppIntent::ResolutionChangeRequested { resolution: 12 },
    );

    assert_eq!(state.view.resolution, 12);
    assert_eq!(state.cells.resolution(), Some(12));
    assert!(state.layers.is_active(&LayerKey::FireRiskIndex));
}

#[test]
fn test_tool_resets_on_new_selection() {
    let (mut controller, mut state) = logged_in();
    let ids: Vec<CellId> = state.cells.ids().take(2).collect();
    let (a, b) = (ids[0], ids[1]);

    send(&mut controller, &mut state, AppIntent::CellClicked { id: a });
    send(
        &mut controller,
        &mut state,
        AppIntent::ToolRequested {
            tool: DecisionTool::CropPlanner,
        },
    );
    assert_eq!(
        state.selection.active_tool(),
        Some(DecisionTool::CropPlanner)
    );

    send(&mut controller, &mut state, AppIntent::CellClicked { id: b });
    assert_eq!(state.selection.selected(), Some(b));
    assert_eq!(state.selection.active_tool(), None);
}

#[test]
fn test_tool_without_selection_is_ignored() {
    let (mut controller, mut state) = logged_in();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToolRequested {
            tool: DecisionTool::HeatMitigation,
        },
    );

    assert_eq!(state.selection.active_tool(), None);
}

#[test]
fn test_cell_click_in_chat_returns_to_dashboard_and_selects() {
    let (mut controller, mut state) = logged_in();
    send(
        &mut controller,
        &mut state,
        AppIntent::NavigateRequested {
            page: ActivePage::Chatbot,
        },
    );
    let id = state.cells.ids().next().expect("Zelle erwartet");

    send(&mut controller, &mut state, AppIntent::CellClicked { id });

    assert_eq!(state.session.active_page, ActivePage::Dashboard);
    assert_eq!(state.selection.selected(), Some(id));
}

#[test]
fn test_profile_page_clears_selection_and_hides_highlight() {
    let (mut controller, mut state) = logged_in();
    let id = state.cells.ids().next().expect("Zelle erwartet");
    send(&mut controller, &mut state, AppIntent::CellClicked { id });

    send(
        &mut controller,
        &mut state,
        AppIntent::NavigateRequested {
            page: ActivePage::Profile,
        },
    );

    assert!(state.selection.selected().is_none());
    assert_eq!(controller.build_map_scene(&state).highlighted, None);
}

#[test]
fn test_projection_stores_numeric_prediction_on_cell() {
    let (mut controller, mut state) = logged_in();
    let id = state.cells.ids().next().expect("Zelle erwartet");
    send(&mut controller, &mut state, AppIntent::CellClicked { id });

    send(
        &mut controller,
        &mut state,
        AppIntent::ProjectionRequested {
            date: "2025-07-01".into(),
            time: "15:00".into(),
        },
    );

    let cell = state.cells.get(id).expect("Zelle erwartet");
    let projected = cell.metrics.projected_temp.expect("Prognose erwartet");
    assert!(projected.is_finite());
}

#[test]
fn test_projection_with_invalid_date_only_reports_status() {
    let (mut controller, mut state) = logged_in();
    let id = state.cells.ids().next().expect("Zelle erwartet");
    send(&mut controller, &mut state, AppIntent::CellClicked { id });

    send(
        &mut controller,
        &mut state,
        AppIntent::ProjectionRequested {
            date: "01/07/2025".into(),
            time: "15:00".into(),
        },
    );

    assert!(state.ui.status_message.is_some());
    let cell = state.cells.get(id).expect("Zelle erwartet");
    assert_eq!(cell.metrics.projected_temp, None);
}

#[test]
fn test_chat_exchange_appends_both_messages() {
    let (mut controller, mut state) = logged_in();

    send(
        &mut controller,
        &mut state,
        AppIntent::ChatMessageSubmitted {
            text: "  Is it hot today?  ".into(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ChatMessageSubmitted { text: "   ".into() },
    );

    let messages = state.chat.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].author, ChatAuthor::User);
    assert_eq!(messages[0].text, "Is it hot today?");
    assert_eq!(messages[1].author, ChatAuthor::Assistant);

    send(&mut controller, &mut state, AppIntent::ChatCleared);
    assert!(state.chat.messages().is_empty());
}

#[test]
fn test_export_writes_selected_cell_as_json() {
    let (mut controller, mut state) = logged_in();
    let id = state.cells.ids().next().expect("Zelle erwartet");
    send(&mut controller, &mut state, AppIntent::CellClicked { id });

    let path = std::env::temp_dir().join(format!("climates_export_{}.json", std::process::id()));
    send(
        &mut controller,
        &mut state,
        AppIntent::ExportCellRequested {
            path: path.to_string_lossy().into_owned(),
        },
    );

    let content = std::fs::read_to_string(&path).expect("Exportdatei erwartet");
    let value: serde_json::Value = serde_json::from_str(&content).expect("gültiges JSON");
    assert_eq!(value["id"], serde_json::Value::String(id.to_string()));
    let polygon = value["polygon"].as_array().expect("Polygon erwartet");
    assert_eq!(polygon.first(), polygon.last());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_export_without_selection_sets_status() {
    let (mut controller, mut state) = logged_in();

    send(&mut controller, &mut state, AppIntent::ExportDialogRequested);

    assert!(!state.ui.show_export_dialog);
    assert!(state.ui.status_message.is_some());
}
