//! Handler für den Platzierungs-Workflow.

use crate::app::forms::EntityForm;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{EntityKind, PointLike};

/// Schaltet die Platzierung einer Objektart scharf.
pub fn arm(state: &mut AppState, kind: EntityKind) {
    use_cases::placement::arm(state, kind);
}

/// Übernimmt einen Kartenklick als Position; ungültige Punkte brechen ab.
pub fn capture_position(state: &mut AppState, point: &PointLike) -> anyhow::Result<()> {
    use_cases::placement::on_map_click(state, point)?;
    Ok(())
}

/// Bestätigt das Formular.
pub fn confirm(state: &mut AppState, form: &EntityForm) -> anyhow::Result<()> {
    use_cases::placement::confirm(state, form)
}

/// Verwirft die Platzierung.
pub fn cancel(state: &mut AppState) {
    use_cases::placement::cancel(state);
}
