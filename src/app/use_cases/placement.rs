//! Use-Case: Objekt per Kartenklick platzieren (scharf → Klick → bestätigen/abbrechen).

use crate::app::forms::EntityForm;
use crate::app::persistence::{entity_payload, SyncRequest};
use crate::app::state::{PendingPlacement, PlacementState};
use crate::app::use_cases::selection;
use crate::app::AppState;
use crate::app::errors::ValidationErrors;
use crate::core::{normalize, normalize_strict, EntityKind, InvalidPointError, PointLike};
use crate::shared::ConflictPolicy;

/// Schaltet die Platzierung einer Objektart scharf und hebt die Selektion auf.
///
/// Läuft bereits eine Platzierung, entscheidet `rearm_policy`:
/// `Replace` verwirft die laufende, `Reject` behält sie.
pub fn arm(state: &mut AppState, kind: EntityKind) {
    if state.editor.placement.is_active() {
        match state.options.rearm_policy {
            ConflictPolicy::Reject => {
                log::warn!(
                    "Platzierung {} abgelehnt: andere Platzierung läuft noch",
                    kind.label()
                );
                state
                    .notifications
                    .warning("Bitte zuerst die laufende Platzierung abschließen");
                return;
            }
            ConflictPolicy::Replace => {
                log::info!("Laufende Platzierung verworfen zugunsten von {}", kind.label());
                state.ui.placement_dialog.close();
            }
        }
    }

    state.editor.placement = PlacementState {
        armed: Some(kind),
        pending: None,
    };
    selection::clear_selection(state);
    log::info!("Platzierung scharf: {}", kind.label());
}

/// Übernimmt den Klickpunkt als vorläufige Position und öffnet das Formular.
///
/// Ohne scharfe Platzierung oder bei offenem Formular wird der Klick ignoriert.
pub fn on_map_click(state: &mut AppState, point: &PointLike) -> Result<(), InvalidPointError> {
    let Some(kind) = state.editor.placement.armed else {
        log::debug!("Kartenklick ohne scharfe Platzierung ignoriert");
        return Ok(());
    };
    if state.editor.placement.pending.is_some() {
        log::debug!("Kartenklick ignoriert: Formular bereits offen");
        return Ok(());
    }

    let position = if state.options.strict_coordinates {
        normalize_strict(point)?
    } else {
        normalize(point)?
    };
    state.editor.placement.pending = Some(PendingPlacement { kind, position });
    state.ui.placement_dialog.open(kind);
    log::info!(
        "{} an ({:.5}, {:.5}) vorgemerkt",
        kind.label(),
        position.lat,
        position.lng
    );
    Ok(())
}

/// Validiert das Formular und legt das Objekt in der Registry an.
///
/// Bei Feldfehlern bleibt die Platzierung offen und die Fehler landen im Dialog.
pub fn confirm(state: &mut AppState, form: &EntityForm) -> anyhow::Result<()> {
    let Some(pending) = state.editor.placement.pending else {
        log::warn!("Bestätigung ohne offene Platzierung ignoriert");
        return Ok(());
    };
    if form.kind() != pending.kind {
        state.ui.placement_dialog.errors = ValidationErrors::single(
            "kind",
            format!("Formular passt nicht zu {}", pending.kind.label()),
        );
        return Ok(());
    }

    let entity = match form.validate(pending.position) {
        Ok(entity) => entity,
        Err(errors) => {
            log::warn!("{} nicht gespeichert: {}", pending.kind.label(), errors);
            state.ui.placement_dialog.errors = errors;
            return Ok(());
        }
    };

    let payload = entity_payload(&entity, state.options.office_id)?;
    let title = entity.title().to_string();
    let (index, item) = state.registry.insert_entity(entity);
    state.push_sync(SyncRequest::Create { item, payload });

    state.editor.placement = PlacementState::default();
    state.ui.placement_dialog.close();
    log::info!(
        "{} '{}' hinzugefügt (Index {}, {})",
        pending.kind.label(),
        title,
        index,
        item.id
    );
    Ok(())
}

/// Verwirft die Platzierung ohne Registry-Änderung.
pub fn cancel(state: &mut AppState) {
    if state.editor.placement.is_active() {
        log::info!("Platzierung abgebrochen");
    }
    state.editor.placement = PlacementState::default();
    state.ui.placement_dialog.close();
}
