use fiber_map_editor::app::forms::{CustomerForm, JunctionForm};
use fiber_map_editor::app::{EntityForm, RouteForm};
use fiber_map_editor::core::PointLike;
use fiber_map_editor::{
    AppController, AppIntent, AppState, DrawMode, EntityKind, ItemKind, ItemRef,
};

mod routes;
mod selection;
mod sync;

pub fn junction_form(name: &str) -> EntityForm {
    EntityForm::Junction(JunctionForm {
        name: name.to_string(),
        post_code: "10115".to_string(),
        junction_type: "Muffe".to_string(),
    })
}

pub fn customer_form(email: &str, phone: &str) -> EntityForm {
    EntityForm::Customer(CustomerForm {
        name: "Erika Muster".to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: "Hauptstraße 1".to_string(),
    })
}

/// Führt einen Intent aus und erwartet Erfolg.
pub fn run(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    let label = format!("{intent:?}");
    controller
        .handle_intent(state, intent)
        .unwrap_or_else(|e| panic!("{label} sollte ohne Fehler durchlaufen: {e:#}"));
}

/// Kompletter Platzierungs-Workflow: scharf schalten, klicken, bestätigen.
pub fn place(
    controller: &mut AppController,
    state: &mut AppState,
    form: EntityForm,
    lat: f64,
    lng: f64,
) -> ItemRef {
    let kind = form.kind();
    run(controller, state, AppIntent::PlacementToolSelected { kind });
    run(
        controller,
        state,
        AppIntent::MapClicked {
            point: PointLike::pair(lat, lng),
        },
    );
    run(controller, state, AppIntent::PlacementConfirmed { form });
    last_item(state, ItemKind::Entity(kind))
}

/// Kompletter Trassen-Workflow im Punkt-Modus.
pub fn draw_route(
    controller: &mut AppController,
    state: &mut AppState,
    name: &str,
    points: &[(f64, f64)],
) -> ItemRef {
    run(
        controller,
        state,
        AppIntent::DrawModeSelected {
            mode: DrawMode::Point,
        },
    );
    run(
        controller,
        state,
        AppIntent::DrawGestureCompleted {
            points: points
                .iter()
                .map(|&(lat, lng)| PointLike::lat_lng(lat, lng))
                .collect(),
        },
    );
    run(
        controller,
        state,
        AppIntent::RouteNameConfirmed {
            form: RouteForm {
                name: name.to_string(),
                description: String::new(),
            },
        },
    );
    last_item(state, ItemKind::Route)
}

pub fn last_item(state: &AppState, kind: ItemKind) -> ItemRef {
    let count = state.registry.len(kind);
    assert!(count > 0, "Collection {kind:?} sollte nicht leer sein");
    let id = state
        .registry
        .id_at(kind, count - 1)
        .expect("Letztes Element sollte existieren");
    ItemRef::new(kind, id)
}

pub fn entity_count(state: &AppState, kind: EntityKind) -> usize {
    state.registry.len(ItemKind::Entity(kind))
}
