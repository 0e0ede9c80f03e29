use super::{draw_route, junction_form, place, run};
use fiber_map_editor::app::persistence::ApiCall;
use fiber_map_editor::app::{ApiKind, NotificationLevel, PersistenceError, SyncReport};
use fiber_map_editor::{
    AdapterCommand, AppController, AppIntent, AppState, EditorOptions, EntityKind, ItemKind,
    MemoryApi,
};
use serde_json::json;

#[test]
fn test_sync_stores_remote_ids_and_notifies_success() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut api = MemoryApi::new();
    let junction = place(&mut controller, &mut state, junction_form("J1"), 52.5, 13.4);
    let route = draw_route(&mut controller, &mut state, "R1", &[(0.0, 0.0), (0.0, 1.0)]);

    let report = controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");

    assert_eq!(
        report,
        SyncReport {
            succeeded: 2,
            failed: 0,
            pending: 0
        }
    );
    assert!(state.registry.remote_id(junction).is_some());
    let route_id = state
        .registry
        .remote_id(route)
        .expect("Trasse sollte eine Backend-ID haben");
    let stored = api
        .get(ApiKind::Route, route_id)
        .expect("Trasse sollte im Backend liegen");
    assert_eq!(stored["length_km"], json!("111.19"));
    assert_eq!(stored["path"].as_array().map(Vec::len), Some(2));
    assert!(state
        .notifications
        .iter()
        .all(|n| n.level == NotificationLevel::Success));
}

#[test]
fn test_failed_create_keeps_local_item_and_reports_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut api = MemoryApi::new();
    let junction = place(&mut controller, &mut state, junction_form("J1"), 52.5, 13.4);
    api.fail_next(PersistenceError::Rejected {
        status: 500,
        message: "Interner Fehler".to_string(),
    });

    let report = controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");

    assert_eq!(report.failed, 1);
    assert!(state.registry.contains(junction));
    assert!(state.registry.remote_id(junction).is_none());
    let last = state
        .notifications
        .last()
        .expect("Es sollte eine Benachrichtigung geben");
    assert_eq!(last.level, NotificationLevel::Error);
    assert_eq!(api.count(ApiKind::Junction), 0);
}

#[test]
fn test_transport_error_keeps_requests_queued() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut api = MemoryApi::new();
    place(&mut controller, &mut state, junction_form("J1"), 1.0, 1.0);
    place(&mut controller, &mut state, junction_form("J2"), 2.0, 2.0);
    api.fail_next(PersistenceError::Transport("Zeitüberschreitung".to_string()));

    let report = controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");
    assert_eq!(report.pending, 2);
    assert_eq!(state.sync_queue.len(), 2);

    let report = controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");
    assert_eq!(report.succeeded, 2);
    assert_eq!(api.count(ApiKind::Junction), 2);
}

#[test]
fn test_fiber_length_limit_shows_upgrade_prompt() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut api = MemoryApi::new();
    api.fiber_length_limit_km = Some(100.0);

    let route = draw_route(&mut controller, &mut state, "Lang", &[(0.0, 0.0), (0.0, 1.0)]);
    controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");

    assert!(state.ui.show_upgrade_prompt);
    assert!(state.registry.contains(route));
    assert!(state
        .notifications
        .iter()
        .any(|n| n.level == NotificationLevel::Warning));
    assert_eq!(api.count(ApiKind::Route), 0);
}

#[test]
fn test_vertex_edit_is_sent_as_update() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut api = MemoryApi::new();
    let route = draw_route(&mut controller, &mut state, "R1", &[(0.0, 0.0), (0.0, 1.0)]);
    controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");
    let remote_id = state
        .registry
        .remote_id(route)
        .expect("Trasse sollte eine Backend-ID haben");

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, AppIntent::EditSelectedRouteRequested);
    let handle = state
        .editor
        .layers
        .handle_of(route.id)
        .expect("Trasse sollte ein Handle haben");
    run(
        &mut controller,
        &mut state,
        AppIntent::VertexEditCompleted {
            handle,
            points: vec![
                fiber_map_editor::core::PointLike::pair(0.0, 0.0),
                fiber_map_editor::core::PointLike::pair(0.0, 2.0),
            ],
        },
    );
    controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");

    assert_eq!(
        api.calls.last(),
        Some(&ApiCall::Update {
            kind: ApiKind::Route,
            remote_id
        })
    );
    let stored = api
        .get(ApiKind::Route, remote_id)
        .expect("Trasse sollte im Backend liegen");
    assert_eq!(stored["length_km"], json!("222.39"));
}

#[test]
fn test_delete_after_sync_removes_backend_record() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut api = MemoryApi::new();
    let junction = place(&mut controller, &mut state, junction_form("J1"), 1.0, 1.0);
    controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: junction });
    run(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
    controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");

    assert_eq!(api.count(ApiKind::Junction), 0);
}

#[test]
fn test_load_office_replaces_registry_and_skips_broken_records() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(EditorOptions {
        office_id: Some(7),
        ..EditorOptions::default()
    });
    let mut api = MemoryApi::new();
    api.seed(
        ApiKind::SubOffice,
        json!({
            "name": "Außenstelle",
            "address": "Weg 1",
            "latitude": 50.0,
            "logitude": "8.5",
            "office": 7
        }),
    );
    api.seed(
        ApiKind::Junction,
        json!({ "name": "Fremd", "latitude": 1.0, "longitude": 1.0, "office": 8 }),
    );
    api.seed(
        ApiKind::Route,
        json!({
            "name": "Backbone",
            "office": 7,
            "path": [
                { "latitude": 0.0, "longitude": 0.0 },
                { "latitude": "0", "longitude": "1" }
            ]
        }),
    );
    api.seed(
        ApiKind::Route,
        json!({ "name": "Kaputt", "office": 7, "path": [ { "latitude": 0.0, "longitude": 0.0 } ] }),
    );

    // Alter Stand wird verworfen
    let stale = draw_route(&mut controller, &mut state, "Alt", &[(5.0, 5.0), (6.0, 6.0)]);
    let stale_handle = state.editor.layers.handle_of(stale.id);
    // Ohne Sync-Auftrag, sonst wird das Neuladen abgelehnt
    state.sync_queue.clear();

    let loaded = controller
        .load_office(&mut state, &mut api)
        .expect("Laden sollte durchlaufen");

    assert_eq!(loaded, 2);
    assert_eq!(state.registry.len(ItemKind::Entity(EntityKind::SubOffice)), 1);
    assert_eq!(state.registry.len(ItemKind::Entity(EntityKind::Junction)), 0);
    assert_eq!(state.registry.len(ItemKind::Route), 1);
    assert!(state.sync_queue.is_empty());
    assert!(state.adapter_outbox.iter().any(|c| matches!(
        c,
        AdapterCommand::RemoveRoute { handle } if Some(*handle) == stale_handle
    )));

    let scene = controller.build_map_scene(&state);
    approx::assert_relative_eq!(scene.routes[0].length_km, 111.19, epsilon = 0.01);
    assert!(scene.routes[0].handle.is_some());
    approx::assert_relative_eq!(scene.markers[0].position.lng, 8.5);
}

#[test]
fn test_load_office_failure_leaves_state_unchanged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut api = MemoryApi::new();
    let junction = place(&mut controller, &mut state, junction_form("J1"), 1.0, 1.0);
    controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");
    api.fail_next(PersistenceError::Transport("offline".to_string()));

    let result = controller.load_office(&mut state, &mut api);

    assert!(result.is_err());
    assert!(state.registry.contains(junction));
    assert!(state.sync_queue.is_empty());
}

#[test]
fn test_load_office_refused_while_delete_is_pending() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut api = MemoryApi::new();
    let junction = place(&mut controller, &mut state, junction_form("J1"), 1.0, 1.0);
    controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: junction });
    run(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
    assert_eq!(state.sync_queue.len(), 1);

    let result = controller.load_office(&mut state, &mut api);

    assert!(result.is_err());
    assert_eq!(state.sync_queue.len(), 1);
    assert!(!state.registry.contains(junction));
    let last = state
        .notifications
        .last()
        .expect("Warnung sollte gemeldet sein");
    assert_eq!(last.level, NotificationLevel::Warning);

    // Nach dem Sync ist der Datensatz weg und das Laden klappt wieder
    controller
        .sync(&mut state, &mut api)
        .expect("Sync sollte durchlaufen");
    assert_eq!(api.count(ApiKind::Junction), 0);
    let loaded = controller
        .load_office(&mut state, &mut api)
        .expect("Laden sollte durchlaufen");
    assert_eq!(loaded, 0);
}

#[test]
fn test_options_change_rearms_active_draw_mode() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawModeSelected {
            mode: fiber_map_editor::DrawMode::Point,
        },
    );
    state.adapter_outbox.clear();

    let options = EditorOptions {
        point_line_color: "#00ff00".to_string(),
        notification_capacity: 3,
        ..EditorOptions::default()
    };
    run(
        &mut controller,
        &mut state,
        AppIntent::OptionsChanged {
            options: Box::new(options),
        },
    );

    assert_eq!(state.options.point_line_color, "#00ff00");
    match state.adapter_outbox.as_slice() {
        [AdapterCommand::SetDrawMode {
            config: Some(config),
            ..
        }] => assert_eq!(config.line_color, "#00ff00"),
        other => panic!("Unerwartete Adapter-Befehle: {other:?}"),
    }
    for i in 0..5 {
        state.notifications.info(format!("Meldung {i}"));
    }
    assert_eq!(state.notifications.len(), 3);
}
