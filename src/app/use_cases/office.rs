//! Use-Case: Büro-Karte aus dem Backend laden.

use crate::app::adapter::AdapterCommand;
use crate::app::persistence::{
    entity_from_value, remote_id_of, route_from_value, ApiKind, TopologyApi,
};
use crate::app::use_cases::{placement, route_capture, route_edit, selection};
use crate::app::AppState;
use crate::core::ItemKind;

/// Lädt alle Objekte und Trassen des konfigurierten Büros und ersetzt die Registry.
///
/// Solange lokale Änderungen auf den Sync warten, wird nicht neu geladen.
/// Schlägt eine Liste fehl, bleibt der bisherige Zustand unverändert.
/// Fehlerhafte Datensätze werden mit Warnung übersprungen.
pub fn load_office(state: &mut AppState, api: &mut dyn TopologyApi) -> anyhow::Result<usize> {
    let office = state.options.office_id;
    let pending = state.sync_queue.len();
    if pending > 0 {
        state.notifications.warning(format!(
            "{pending} ungespeicherte Änderung(en): bitte zuerst synchronisieren"
        ));
        anyhow::bail!("Neuladen abgelehnt: {} Änderungen noch nicht synchronisiert", pending);
    }
    let mut fetched = Vec::with_capacity(ApiKind::ALL.len());
    for kind in ApiKind::ALL {
        fetched.push((kind, api.list(kind, office)?));
    }

    route_edit::end_edit(state);
    placement::cancel(state);
    route_capture::cancel(state);
    selection::clear_selection(state);
    state.selection.queue.clear();
    reset_registry(state);

    let mut loaded = 0;
    for (kind, values) in fetched {
        for value in &values {
            let item = match kind.item_kind() {
                ItemKind::Entity(entity_kind) => match entity_from_value(entity_kind, value) {
                    Ok(entity) => state.registry.insert_entity(entity).1,
                    Err(e) => {
                        log::warn!("{} übersprungen: {:#}", entity_kind.label(), e);
                        continue;
                    }
                },
                ItemKind::Route => match route_from_value(value) {
                    Ok(route) => {
                        let points = route.points.clone();
                        let item = state.registry.insert_route(route).1;
                        let handle = state.editor.layers.ensure(item.id);
                        state.push_adapter(AdapterCommand::ShowRoute { handle, points });
                        item
                    }
                    Err(e) => {
                        log::warn!("Trasse übersprungen: {:#}", e);
                        continue;
                    }
                },
            };
            if let Some(remote_id) = remote_id_of(value) {
                state.registry.set_remote_id(item, remote_id);
            }
            loaded += 1;
        }
    }

    log::info!("Büro {:?} geladen: {} Elemente", office, loaded);
    Ok(loaded)
}

/// Entfernt alle Elemente inkl. Polylines.
fn reset_registry(state: &mut AppState) {
    let handles: Vec<_> = state
        .registry
        .routes()
        .iter()
        .filter_map(|rec| state.editor.layers.handle_of(rec.id))
        .collect();
    for handle in handles {
        state.push_adapter(AdapterCommand::RemoveRoute { handle });
    }
    state.editor.layers.clear();
    state.registry.clear();
}
