//! Use-Case: exklusive Selektion über alle Objektarten und Trassen.
//!
//! Die Selektion hält eine stabile `ItemRef`. Index-basierte Aufrufe werden
//! zum Aufrufzeitpunkt in eine ID aufgelöst.

use crate::app::adapter::AdapterCommand;
use crate::app::persistence::SyncRequest;
use crate::app::state::SelectionEvent;
use crate::app::use_cases::route_edit;
use crate::app::AppState;
use crate::core::{ItemKind, ItemRef};

/// Selektiert das Element am Index der Collection; ersetzt jede bisherige Selektion.
pub fn select(state: &mut AppState, kind: ItemKind, index: usize) {
    match state.registry.id_at(kind, index) {
        Some(id) => select_item(state, ItemRef::new(kind, id)),
        None => log::warn!("Selektion ignoriert: {:?} hat keinen Index {}", kind, index),
    }
}

/// Selektiert ein Element per Identität; ersetzt jede bisherige Selektion.
///
/// Eine scharfe Platzierung bleibt dabei bestehen.
pub fn select_item(state: &mut AppState, item: ItemRef) {
    if !state.registry.contains(item) {
        log::warn!("Selektion ignoriert: {:?} {} existiert nicht", item.kind, item.id);
        return;
    }
    state.selection.current = Some(item);
    log::debug!("Selektiert: {:?} {}", item.kind, item.id);
}

/// Hebt die Selektion auf, falls sie genau das Element am Index ist.
pub fn clear_if_matches(state: &mut AppState, kind: ItemKind, index: usize) {
    if let Some(id) = state.registry.id_at(kind, index) {
        clear_if_matches_item(state, ItemRef::new(kind, id));
    }
}

/// Hebt die Selektion auf, falls sie genau dieses Element ist.
pub fn clear_if_matches_item(state: &mut AppState, item: ItemRef) {
    if state.selection.is_selected(item) {
        state.selection.current = None;
        log::debug!("Selektion von {} aufgehoben", item.id);
    }
}

/// Hebt die Selektion bedingungslos auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.current = None;
}

/// Reiht ein Selektions-Event ein.
pub fn queue_event(state: &mut AppState, event: SelectionEvent) {
    state.selection.queue.push_back(event);
}

/// Verarbeitet alle eingereihten Events in Ankunftsreihenfolge.
pub fn process_events(state: &mut AppState) {
    while let Some(event) = state.selection.queue.pop_front() {
        match event {
            SelectionEvent::Select { item } => select_item(state, item),
            SelectionEvent::PopupClosed { item } => clear_if_matches_item(state, item),
            SelectionEvent::BackgroundClicked => {
                if state.options.deselect_on_background_click
                    && state.editor.editing_route.is_none()
                {
                    clear_selection(state);
                }
            }
            SelectionEvent::Clear => clear_selection(state),
        }
    }
}

/// Löscht das selektierte Element und hebt die Selektion immer auf.
///
/// Ohne Selektion passiert nichts. Eine Trasse in Bearbeitung wird vorher
/// aus dem Bearbeitungsmodus genommen.
pub fn delete_selected(state: &mut AppState) {
    let Some(item) = state.selection.current else {
        log::debug!("Löschen ohne Selektion ignoriert");
        return;
    };

    if item.kind == ItemKind::Route && state.editor.editing_route == Some(item.id) {
        route_edit::end_edit(state);
    }
    clear_selection(state);

    let Some(remote_id) = state.registry.remove(item) else {
        log::warn!("Selektiertes Element {} existiert nicht mehr", item.id);
        return;
    };

    if item.kind == ItemKind::Route {
        if let Some(handle) = state.editor.layers.release(item.id) {
            state.push_adapter(AdapterCommand::RemoveRoute { handle });
        }
    }

    match remote_id {
        Some(remote_id) => state.push_sync(SyncRequest::Delete {
            kind: item.kind.into(),
            remote_id,
        }),
        // Noch nicht synchronisiert: ausstehende Anfragen verwerfen
        None => state.sync_queue.retain(|request| request.item() != Some(item)),
    }
    log::info!("{:?} {} gelöscht", item.kind, item.id);
}
