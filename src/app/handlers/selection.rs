//! Handler für Selektions-Operationen.

use crate::app::state::SelectionEvent;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ItemKind;

/// Reiht ein Selektions-Event ein.
pub fn queue_event(state: &mut AppState, event: SelectionEvent) {
    use_cases::selection::queue_event(state, event);
}

/// Verarbeitet alle eingereihten Selektions-Events.
pub fn process_events(state: &mut AppState) {
    let before = state.selection.current;
    use_cases::selection::process_events(state);
    if before != state.selection.current {
        log::debug!("Selektion: {:?} → {:?}", before, state.selection.current);
    }
}

/// Selektiert ein Element per Index.
pub fn select_at(state: &mut AppState, kind: ItemKind, index: usize) {
    use_cases::selection::select(state, kind, index);
}

/// Hebt die Selektion auf, falls sie das Element am Index ist.
pub fn clear_if_matches_at(state: &mut AppState, kind: ItemKind, index: usize) {
    use_cases::selection::clear_if_matches(state, kind, index);
}

/// Löscht das selektierte Element.
pub fn delete_selected(state: &mut AppState) {
    use_cases::selection::delete_selected(state);
}
