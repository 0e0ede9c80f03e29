//! Use-Case: Stützpunkte einer gespeicherten Trasse bearbeiten.
//!
//! Es ist höchstens eine Trasse gleichzeitig in Bearbeitung. Adapter-Events
//! werden ausschließlich über das Polyline-Handle der Trasse zugeordnet.

use crate::app::adapter::AdapterCommand;
use crate::app::errors::ValidationErrors;
use crate::app::persistence::{route_payload, SyncRequest};
use crate::app::use_cases::selection;
use crate::app::AppState;
use crate::core::{normalize_all, InvalidPointError, ItemId, ItemKind, ItemRef, PointLike};
use crate::shared::{ConflictPolicy, LayerHandle};

/// Startet die Bearbeitung der Trasse am Index.
///
/// Nur erlaubt, wenn genau diese Trasse selektiert ist. Läuft schon eine
/// andere Bearbeitung, entscheidet `route_edit_policy`.
pub fn begin_edit(state: &mut AppState, route_index: usize) {
    let Some(route_id) = state.registry.id_at(ItemKind::Route, route_index) else {
        log::warn!("Trasse mit Index {} existiert nicht", route_index);
        return;
    };
    if !state.selection.is_selected(ItemRef::route(route_id)) {
        log::warn!("Trasse {} ist nicht selektiert, Bearbeitung abgelehnt", route_index);
        return;
    }

    if let Some(current) = state.editor.editing_route {
        if current == route_id {
            log::debug!("Trasse {} wird bereits bearbeitet", route_id);
            return;
        }
        match state.options.route_edit_policy {
            ConflictPolicy::Reject => {
                log::warn!(
                    "Bearbeitung von {} abgelehnt: {} ist noch in Bearbeitung",
                    route_id,
                    current
                );
                state
                    .notifications
                    .warning("Bitte zuerst die laufende Trassen-Bearbeitung beenden");
                return;
            }
            ConflictPolicy::Replace => end_edit(state),
        }
    }

    let handle = state.editor.layers.ensure(route_id);
    state.push_adapter(AdapterCommand::EnableVertexEdit { handle });
    state.editor.editing_route = Some(route_id);
    log::info!("Bearbeitung von Trasse {} gestartet", route_id);
}

/// Ersetzt die Stützpunkte der Trasse hinter `handle` vollständig.
///
/// Unbekannte Handles und Trassen außerhalb der Bearbeitung werden ignoriert.
/// Weniger als die Mindestpunktzahl wird abgelehnt und die Polyline zurückgesetzt.
pub fn apply_vertex_edit(
    state: &mut AppState,
    handle: LayerHandle,
    raw_points: &[PointLike],
) -> Result<(), InvalidPointError> {
    let Some(route_id) = state.editor.layers.route_of(handle) else {
        log::warn!("Stützpunkt-Änderung für unbekanntes Handle {:?} ignoriert", handle);
        return Ok(());
    };
    if state.editor.editing_route != Some(route_id) {
        log::warn!("Trasse {} ist nicht in Bearbeitung, Änderung ignoriert", route_id);
        return Ok(());
    }

    let points = match normalize_all(raw_points, state.options.strict_coordinates) {
        Ok(points) => points,
        Err(e) => {
            log::warn!("Stützpunkt-Änderung abgelehnt: {}", e);
            restore_polyline(state, route_id, handle);
            return Err(e);
        }
    };
    let min_points = state.options.effective_min_route_points();
    if points.len() < min_points {
        let errors = ValidationErrors::single(
            "points",
            format!("Eine Trasse braucht mindestens {min_points} Punkte"),
        );
        log::warn!("Stützpunkt-Änderung abgelehnt: {}", errors);
        state.notifications.warning(errors.to_string());
        restore_polyline(state, route_id, handle);
        return Ok(());
    }

    let point_count = points.len();
    state.registry.replace_route_points(route_id, points);
    let payload = state
        .registry
        .get_route(route_id)
        .map(|route| route_payload(route, state.options.office_id, &state.options));
    match payload.map(serde_json::to_value) {
        Some(Ok(payload)) => state.push_sync(SyncRequest::Update {
            item: ItemRef::route(route_id),
            payload,
        }),
        Some(Err(e)) => log::warn!("Trassen-Payload nicht serialisierbar: {}", e),
        None => {}
    }
    log::info!("Trasse {} hat jetzt {} Stützpunkte", route_id, point_count);
    Ok(())
}

/// Zeichnet die Polyline wieder mit den gespeicherten Stützpunkten.
fn restore_polyline(state: &mut AppState, route_id: ItemId, handle: LayerHandle) {
    if let Some(route) = state.registry.get_route(route_id) {
        let points = route.points.clone();
        state.push_adapter(AdapterCommand::ShowRoute { handle, points });
    }
}

/// Beendet die Bearbeitung und hebt die Selektion auf.
pub fn finish_edit(state: &mut AppState) {
    end_edit(state);
    selection::clear_selection(state);
}

/// Deaktiviert die Stützpunkt-Bearbeitung ohne die Selektion anzufassen.
pub(crate) fn end_edit(state: &mut AppState) {
    let Some(route_id) = state.editor.editing_route.take() else {
        return;
    };
    if let Some(handle) = state.editor.layers.handle_of(route_id) {
        state.push_adapter(AdapterCommand::DisableVertexEdit { handle });
    }
    log::info!("Bearbeitung von Trasse {} beendet", route_id);
}
