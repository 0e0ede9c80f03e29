//! Use-Case: ausstehende Änderungen an das Backend senden.
//!
//! Lokale Änderungen sind bereits angewendet. Fehler werden als
//! Benachrichtigung gemeldet und nicht zurückgerollt.

use crate::app::errors::PersistenceError;
use crate::app::persistence::{remote_id_of, ApiKind, SyncReport, SyncRequest, TopologyApi};
use crate::app::AppState;
use crate::core::{ItemKind, ItemRef};

/// Arbeitet die Sync-Queue in Reihenfolge ab.
///
/// Bei Verbindungsfehlern bleibt die Anfrage samt Rest in der Queue.
pub fn sync(state: &mut AppState, api: &mut dyn TopologyApi) -> SyncReport {
    let mut report = SyncReport::default();

    while let Some(request) = state.sync_queue.pop_front() {
        match send(state, api, &request) {
            Ok(()) => report.succeeded += 1,
            Err(PersistenceError::Transport(message)) => {
                log::warn!("Backend nicht erreichbar: {}", message);
                state
                    .notifications
                    .error(format!("Backend nicht erreichbar: {message}"));
                state.sync_queue.push_front(request);
                break;
            }
            Err(err) => {
                report_failure(state, &err);
                report.failed += 1;
            }
        }
    }

    report.pending = state.sync_queue.len();
    if report.succeeded + report.failed > 0 {
        log::info!(
            "Sync: {} erfolgreich, {} fehlgeschlagen, {} ausstehend",
            report.succeeded,
            report.failed,
            report.pending
        );
    }
    report
}

fn send(
    state: &mut AppState,
    api: &mut dyn TopologyApi,
    request: &SyncRequest,
) -> Result<(), PersistenceError> {
    match request {
        SyncRequest::Create { item, payload } => create(state, api, *item, payload),
        SyncRequest::Update { item, payload } => match state.registry.remote_id(*item) {
            Some(remote_id) => {
                api.update(ApiKind::from(item.kind), remote_id, payload.clone())?;
                Ok(())
            }
            None if state.registry.contains(*item) => {
                // Anlegen war fehlgeschlagen: vollständigen Stand neu anlegen
                log::info!("{} noch ohne Backend-ID, sende als Neuanlage", item.id);
                create(state, api, *item, payload)
            }
            None => Ok(()),
        },
        SyncRequest::Delete { kind, remote_id } => api.delete(*kind, *remote_id),
    }
}

fn create(
    state: &mut AppState,
    api: &mut dyn TopologyApi,
    item: ItemRef,
    payload: &serde_json::Value,
) -> Result<(), PersistenceError> {
    let kind = ApiKind::from(item.kind);
    let response = api.create(kind, payload.clone())?;
    let remote_id = remote_id_of(&response)
        .ok_or_else(|| PersistenceError::InvalidResponse("Antwort ohne 'id'".to_string()))?;

    if state.registry.set_remote_id(item, remote_id) {
        state
            .notifications
            .success(format!("{} erfolgreich gespeichert", label(item.kind)));
    } else {
        // Lokal inzwischen gelöscht: Backend nachziehen
        state.push_sync(SyncRequest::Delete { kind, remote_id });
    }
    Ok(())
}

fn report_failure(state: &mut AppState, err: &PersistenceError) {
    log::warn!("Backend-Anfrage fehlgeschlagen: {}", err);
    state
        .notifications
        .error(format!("Speichern fehlgeschlagen: {err}"));
    if err.is_fiber_length_limit() {
        state.ui.show_upgrade_prompt = true;
        state
            .notifications
            .warning("Glasfaser-Längenlimit überschritten, bitte Tarif upgraden");
    }
}

fn label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Entity(k) => k.label(),
        ItemKind::Route => "Route",
    }
}
