use super::{draw_route, junction_form, place, run};
use fiber_map_editor::app::{SelectionEvent, SyncRequest};
use fiber_map_editor::core::PointLike;
use fiber_map_editor::{
    AdapterCommand, AppController, AppIntent, AppState, EntityKind, ItemKind, MemoryApi,
};

#[test]
fn test_selecting_b_after_a_leaves_only_b() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = place(&mut controller, &mut state, junction_form("A"), 1.0, 1.0);
    let b = draw_route(&mut controller, &mut state, "B", &[(0.0, 0.0), (0.0, 1.0)]);

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: a });
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: b });

    assert_eq!(state.selection.current, Some(b));
    let scene = controller.build_map_scene(&state);
    assert!(!scene.markers[0].selected);
    assert!(scene.routes[0].selected);
}

#[test]
fn test_delete_targets_identity_not_index() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let first = place(&mut controller, &mut state, junction_form("J0"), 1.0, 1.0);
    let target = place(&mut controller, &mut state, junction_form("J1"), 2.0, 2.0);

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: first });
    run(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: target });
    run(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert_eq!(state.registry.len(ItemKind::Entity(EntityKind::Junction)), 0);
    assert!(state.selection.current.is_none());
}

#[test]
fn test_delete_by_index_resolves_after_earlier_delete() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let first = place(&mut controller, &mut state, junction_form("J0"), 1.0, 1.0);
    let second = place(&mut controller, &mut state, junction_form("J1"), 2.0, 2.0);
    let third = place(&mut controller, &mut state, junction_form("J2"), 3.0, 3.0);
    let kind = ItemKind::Entity(EntityKind::Junction);

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: first });
    run(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
    // Index 1 zeigt jetzt auf das dritte Element
    run(
        &mut controller,
        &mut state,
        AppIntent::ItemAtIndexClicked { kind, index: 1 },
    );

    assert_eq!(state.selection.current, Some(third));
    assert!(state.registry.contains(second));
}

#[test]
fn test_stale_popup_close_keeps_newer_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = place(&mut controller, &mut state, junction_form("A"), 1.0, 1.0);
    let b = place(&mut controller, &mut state, junction_form("B"), 2.0, 2.0);

    // Popup von A schließt erst, nachdem B angeklickt wurde
    run(
        &mut controller,
        &mut state,
        AppIntent::SelectionEventsQueued {
            events: vec![
                SelectionEvent::Select { item: a },
                SelectionEvent::Select { item: b },
                SelectionEvent::PopupClosed { item: a },
            ],
        },
    );
    assert_eq!(state.selection.current, Some(b));

    run(
        &mut controller,
        &mut state,
        AppIntent::PopupAtIndexClosed {
            kind: ItemKind::Entity(EntityKind::Junction),
            index: 0,
        },
    );
    assert_eq!(state.selection.current, Some(b));

    run(&mut controller, &mut state, AppIntent::PopupClosed { item: b });
    assert!(state.selection.current.is_none());
}

#[test]
fn test_background_click_clears_selection_unless_editing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let route = draw_route(&mut controller, &mut state, "R1", &[(0.0, 0.0), (0.0, 1.0)]);
    let click = || AppIntent::MapClicked {
        point: PointLike::pair(10.0, 10.0),
    };

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, AppIntent::EditSelectedRouteRequested);
    run(&mut controller, &mut state, click());
    assert_eq!(state.selection.current, Some(route));

    run(&mut controller, &mut state, AppIntent::FinishEditRequested);
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, click());
    assert!(state.selection.current.is_none());

    state.options.deselect_on_background_click = false;
    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, click());
    assert_eq!(state.selection.current, Some(route));
}

#[test]
fn test_arming_placement_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = place(&mut controller, &mut state, junction_form("A"), 1.0, 1.0);

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: a });
    run(
        &mut controller,
        &mut state,
        AppIntent::PlacementToolSelected {
            kind: EntityKind::Customer,
        },
    );

    assert!(state.selection.current.is_none());
}

#[test]
fn test_delete_route_releases_polyline_and_queues_backend_delete() {
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
    let handle = state
        .editor
        .layers
        .handle_of(route.id)
        .expect("Trasse sollte ein Handle haben");

    run(&mut controller, &mut state, AppIntent::ItemClicked { item: route });
    run(&mut controller, &mut state, AppIntent::EditSelectedRouteRequested);
    run(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert_eq!(state.registry.routes().len(), 0);
    assert!(state.editor.editing_route.is_none());
    assert!(state.editor.layers.handle_of(route.id).is_none());
    assert!(state.adapter_outbox.ends_with(&[
        AdapterCommand::DisableVertexEdit { handle },
        AdapterCommand::RemoveRoute { handle },
    ]));
    assert!(matches!(
        state.sync_queue.back(),
        Some(SyncRequest::Delete { remote_id: id, .. }) if *id == remote_id
    ));
}

#[test]
fn test_delete_before_sync_drops_queued_create() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let item = place(&mut controller, &mut state, junction_form("J"), 1.0, 1.0);
    assert_eq!(state.sync_queue.len(), 1);

    run(&mut controller, &mut state, AppIntent::ItemClicked { item });
    run(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert!(state.sync_queue.is_empty());
    assert_eq!(state.item_count(), 0);
}
