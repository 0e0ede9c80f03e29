//! Use-Case: gezeichnete Linie erfassen, benennen und als Trasse speichern.

use crate::app::adapter::AdapterCommand;
use crate::app::forms::{validate_route, RouteForm};
use crate::app::persistence::{route_payload, SyncRequest};
use crate::app::state::PendingRoute;
use crate::app::use_cases::draw_mode;
use crate::app::AppState;
use crate::core::{normalize_all, InvalidPointError, PointLike};
use crate::shared::DrawMode;

/// Übernimmt die fertige Zeichengeste als vorläufige Trasse und öffnet den Namensdialog.
///
/// Nur im Modus `Point` oder `Freehand`. Der erste ungültige Punkt bricht ab.
pub fn capture(state: &mut AppState, raw_points: &[PointLike]) -> Result<(), InvalidPointError> {
    if !state.editor.draw_mode.is_drawing() {
        log::warn!("Zeichengeste ohne aktiven Zeichenmodus ignoriert");
        return Ok(());
    }
    if state.editor.pending_route.is_some() {
        log::debug!("Zeichengeste ignoriert: Namensdialog der erfassten Trasse ist offen");
        return Ok(());
    }

    let points = normalize_all(raw_points, state.options.strict_coordinates)?;
    log::info!("Trasse mit {} Punkten erfasst, warte auf Namen", points.len());
    state.editor.pending_route = Some(PendingRoute { points });
    state.ui.route_dialog.open();
    Ok(())
}

/// Speichert die vorläufige Trasse unter dem Namen aus dem Formular.
///
/// Bei Erfolg wird der Zeichenmodus auf `Disabled` zurückgesetzt.
pub fn save(state: &mut AppState, form: &RouteForm) -> anyhow::Result<()> {
    let Some(pending) = state.editor.pending_route.as_ref() else {
        log::warn!("Speichern ohne erfasste Trasse ignoriert");
        return Ok(());
    };

    let route = match validate_route(form, &pending.points, &state.options) {
        Ok(route) => route,
        Err(errors) => {
            log::warn!("Trasse nicht gespeichert: {}", errors);
            state.ui.route_dialog.errors = errors;
            return Ok(());
        }
    };

    let payload = serde_json::to_value(route_payload(
        &route,
        state.options.office_id,
        &state.options,
    ))?;
    let points = route.points.clone();
    let length_km = route.length_km_with_radius(state.options.earth_radius_km);
    let name = route.name.clone();

    let (index, item) = state.registry.insert_route(route);
    let handle = state.editor.layers.ensure(item.id);
    state.push_adapter(AdapterCommand::ShowRoute { handle, points });
    state.push_sync(SyncRequest::Create { item, payload });

    state.editor.pending_route = None;
    state.ui.route_dialog.close();
    state.ui.show_upgrade_prompt = false;
    draw_mode::set_draw_mode(state, DrawMode::Disabled);

    log::info!(
        "Trasse '{}' gespeichert (Index {}, {:.2} km)",
        name,
        index,
        length_km
    );
    Ok(())
}

/// Verwirft die vorläufige Trasse; der Zeichenmodus bleibt unverändert.
pub fn cancel(state: &mut AppState) {
    if state.editor.pending_route.take().is_some() {
        log::info!("Erfasste Trasse verworfen");
    }
    state.ui.route_dialog.close();
}
