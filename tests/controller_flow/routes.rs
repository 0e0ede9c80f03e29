use super::{draw_route, run};
use fiber_map_editor::app::{RouteForm, SyncRequest};
use fiber_map_editor::core::PointLike;
use fiber_map_editor::shared::ConflictPolicy;
use fiber_map_editor::{
    AdapterCommand, AppController, AppIntent, AppState, DrawMode, GeoPoint, ItemKind,
    RecordingMapAdapter,
};

fn gesture(points: &[(f64, f64)]) -> Vec<PointLike> {
    points.iter().map(|&(lat, lng)| PointLike::pair(lat, lng)).collect()
}

#[test]
fn test_route_with_empty_name_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        AppIntent::DrawModeSelected {
            mode: DrawMode::Freehand,
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawGestureCompleted {
            points: gesture(&[(0.0, 0.0), (0.0, 1.0)]),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::RouteNameConfirmed {
            form: RouteForm {
                name: "   ".to_string(),
                description: String::new(),
            },
        },
    );

    assert_eq!(state.registry.routes().len(), 0);
    assert!(state.editor.pending_route.is_some());
    assert!(state.ui.route_dialog.errors.contains("name"));
    assert_eq!(state.editor.draw_mode, DrawMode::Freehand);
    assert!(state.sync_queue.is_empty());
}

#[test]
fn test_route_save_resets_draw_mode_and_shows_polyline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut adapter = RecordingMapAdapter::new();

    let route = draw_route(
        &mut controller,
        &mut state,
        "Backbone Nord",
        &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
    );
    controller.flush_adapter(&mut state, &mut adapter);

    assert_eq!(state.editor.draw_mode, DrawMode::Disabled);
    assert_eq!(adapter.current_draw_mode(), DrawMode::Disabled);
    assert!(state.editor.pending_route.is_none());
    assert!(!state.ui.route_dialog.visible);

    let handle = state
        .editor
        .layers
        .handle_of(route.id)
        .expect("Gespeicherte Trasse sollte ein Handle haben");
    assert!(adapter.calls.iter().any(|c| matches!(
        c,
        AdapterCommand::ShowRoute { handle: h, points } if *h == handle && points.len() == 4
    )));

    let scene = controller.build_map_scene(&state);
    approx::assert_relative_eq!(scene.routes[0].length_km, 333.58, epsilon = 0.05);
    assert!(matches!(
        state.sync_queue.front(),
        Some(SyncRequest::Create { item, .. }) if *item == route
    ));
}

#[test]
fn test_gesture_without_draw_mode_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        AppIntent::DrawGestureCompleted {
            points: gesture(&[(0.0, 0.0), (0.0, 1.0)]),
        },
    );

    assert!(state.editor.pending_route.is_none());
    assert!(!state.ui.route_dialog.visible);
}

#[test]
fn test_second_gesture_while_naming_keeps_first_capture() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        AppIntent::DrawModeSelected {
            mode: DrawMode::Point,
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawGestureCompleted {
            points: gesture(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawGestureCompleted {
            points: gesture(&[(5.0, 5.0), (6.0, 6.0)]),
        },
    );

    let pending = state
        .editor
        .pending_route
        .as_ref()
        .expect("Erfasste Trasse sollte erhalten bleiben");
    assert_eq!(
        pending.points,
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0)
        ]
    );
    assert!(state.ui.route_dialog.visible);

    run(
        &mut controller,
        &mut state,
        AppIntent::RouteNameConfirmed {
            form: RouteForm {
                name: "Erste".to_string(),
                description: String::new(),
            },
        },
    );
    let stored = state
        .registry
        .routes()
        .values()
        .next()
        .expect("Trasse sollte gespeichert sein");
    assert_eq!(stored.points.len(), 3);
}

#[test]
fn test_route_name_cancel_keeps_draw_mode() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        AppIntent::DrawModeSelected {
            mode: DrawMode::Point,
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawGestureCompleted {
            points: gesture(&[(0.0, 0.0), (0.0, 1.0)]),
        },
    );
    run(&mut controller, &mut state, AppIntent::RouteNameCancelled);

    assert!(state.editor.pending_route.is_none());
    assert_eq!(state.editor.draw_mode, DrawMode::Point);
    assert_eq!(state.registry.routes().len(), 0);
}

#[test]
fn test_vertex_edit_then_finish_replaces_points_and_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut adapter = RecordingMapAdapter::new();
    let route = draw_route(
        &mut controller,
        &mut state,
        "R1",
        &[(0.0, 0.0), (0.0, 1.0)],
    );
    state.sync_queue.clear();
    state.adapter_outbox.clear();

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, AppIntent::EditSelectedRouteRequested);
    assert_eq!(state.editor.editing_route, Some(route.id));

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
            points: gesture(&[(0.0, 0.0), (0.5, 0.5), (0.0, 1.0)]),
        },
    );
    run(&mut controller, &mut state, AppIntent::FinishEditRequested);
    controller.flush_adapter(&mut state, &mut adapter);

    let stored = state
        .registry
        .get_route(route.id)
        .expect("Trasse sollte noch existieren");
    assert_eq!(
        stored.points,
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.5, 0.5),
            GeoPoint::new(0.0, 1.0)
        ]
    );
    assert!(state.selection.current.is_none());
    assert!(state.editor.editing_route.is_none());
    assert!(matches!(
        state.sync_queue.front(),
        Some(SyncRequest::Update { item, .. }) if *item == route
    ));
    assert_eq!(
        adapter.calls,
        vec![
            AdapterCommand::EnableVertexEdit { handle },
            AdapterCommand::DisableVertexEdit { handle },
        ]
    );
}

#[test]
fn test_edit_requires_selected_route() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_route(&mut controller, &mut state, "R1", &[(0.0, 0.0), (0.0, 1.0)]);

    run(
        &mut controller,
        &mut state,
        AppIntent::EditRouteRequested { index: 0 },
    );

    assert!(state.editor.editing_route.is_none());
}

#[test]
fn test_vertex_edit_below_minimum_restores_polyline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let route = draw_route(
        &mut controller,
        &mut state,
        "R1",
        &[(0.0, 0.0), (0.0, 1.0)],
    );
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, AppIntent::EditRouteRequested { index: 0 });
    state.adapter_outbox.clear();
    state.sync_queue.clear();

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
            points: gesture(&[(5.0, 5.0)]),
        },
    );

    let stored = state
        .registry
        .get_route(route.id)
        .expect("Trasse sollte noch existieren");
    assert_eq!(stored.points.len(), 2);
    assert!(state.sync_queue.is_empty());
    assert_eq!(state.notifications.len(), 1);
    assert!(matches!(
        state.adapter_outbox.as_slice(),
        [AdapterCommand::ShowRoute { handle: h, points }] if *h == handle && points.len() == 2
    ));
}

#[test]
fn test_vertex_edit_with_invalid_point_restores_polyline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let route = draw_route(
        &mut controller,
        &mut state,
        "R1",
        &[(0.0, 0.0), (0.0, 1.0)],
    );
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, AppIntent::EditRouteRequested { index: 0 });
    state.adapter_outbox.clear();
    state.sync_queue.clear();

    let handle = state
        .editor
        .layers
        .handle_of(route.id)
        .expect("Trasse sollte ein Handle haben");
    let result = controller.handle_intent(
        &mut state,
        AppIntent::VertexEditCompleted {
            handle,
            points: gesture(&[(0.0, 0.0), (f64::NAN, 2.0)]),
        },
    );

    assert!(result.is_err(), "NaN-Stützpunkt sollte abgelehnt werden");
    let stored = state
        .registry
        .get_route(route.id)
        .expect("Trasse sollte noch existieren");
    assert_eq!(stored.points, vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)]);
    assert!(state.sync_queue.is_empty());
    assert_eq!(
        state.adapter_outbox,
        vec![AdapterCommand::ShowRoute {
            handle,
            points: stored.points.clone()
        }]
    );
    assert_eq!(state.editor.editing_route, Some(route.id));
}

#[test]
fn test_vertex_edit_for_unknown_handle_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let route = draw_route(
        &mut controller,
        &mut state,
        "R1",
        &[(0.0, 0.0), (0.0, 1.0)],
    );
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, AppIntent::EditRouteRequested { index: 0 });
    let queued = state.sync_queue.len();

    run(
        &mut controller,
        &mut state,
        AppIntent::VertexEditCompleted {
            handle: fiber_map_editor::shared::LayerHandle(9999),
            points: gesture(&[(7.0, 7.0), (8.0, 8.0), (9.0, 9.0)]),
        },
    );

    let stored = state
        .registry
        .get_route(route.id)
        .expect("Trasse sollte noch existieren");
    assert_eq!(stored.points, vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)]);
    assert_eq!(state.sync_queue.len(), queued);
    assert_eq!(state.editor.editing_route, Some(route.id));
}

#[test]
fn test_second_edit_with_reject_keeps_first_edit() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.options.route_edit_policy, ConflictPolicy::Reject);
    let first = draw_route(&mut controller, &mut state, "R1", &[(0.0, 0.0), (0.0, 1.0)]);
    let second = draw_route(&mut controller, &mut state, "R2", &[(1.0, 0.0), (1.0, 1.0)]);

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: first });
    run(&mut controller, &mut state, AppIntent::EditSelectedRouteRequested);
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: second });
    run(&mut controller, &mut state, AppIntent::EditSelectedRouteRequested);

    assert_eq!(state.editor.editing_route, Some(first.id));
    assert_eq!(state.selection.current, Some(second));
}

#[test]
fn test_second_edit_with_replace_switches_route() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.route_edit_policy = ConflictPolicy::Replace;
    let first = draw_route(&mut controller, &mut state, "R1", &[(0.0, 0.0), (0.0, 1.0)]);
    let second = draw_route(&mut controller, &mut state, "R2", &[(1.0, 0.0), (1.0, 1.0)]);

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: first });
    run(&mut controller, &mut state, AppIntent::EditSelectedRouteRequested);
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: second });
    run(&mut controller, &mut state, AppIntent::EditSelectedRouteRequested);

    assert_eq!(state.editor.editing_route, Some(second.id));
    let first_handle = state.editor.layers.handle_of(first.id);
    assert!(state.adapter_outbox.iter().any(|c| matches!(
        c,
        AdapterCommand::DisableVertexEdit { handle } if Some(*handle) == first_handle
    )));
    assert_eq!(state.registry.len(ItemKind::Route), 2);
}

#[test]
fn test_leave_screen_tears_down_all_workflows() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let route = draw_route(&mut controller, &mut state, "R1", &[(0.0, 0.0), (0.0, 1.0)]);
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, AppIntent::EditSelectedRouteRequested);
    run(
        &mut controller,
        &mut state,
        AppIntent::DrawModeSelected {
            mode: DrawMode::Freehand,
        },
    );

    run(&mut controller, &mut state, AppIntent::LeaveScreenRequested);

    assert!(state.ui.left_screen);
    assert_eq!(state.editor.draw_mode, DrawMode::Disabled);
    assert!(state.editor.editing_route.is_none());
    assert!(state.selection.current.is_none());
    assert_eq!(state.registry.routes().len(), 1);
}
