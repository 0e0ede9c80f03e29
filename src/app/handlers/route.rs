//! Handler für Erfassung und Bearbeitung von Trassen.

use crate::app::forms::RouteForm;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointLike;
use crate::shared::LayerHandle;

/// Übernimmt eine fertige Zeichengeste; ungültige Punkte brechen ab.
pub fn capture(state: &mut AppState, points: &[PointLike]) -> anyhow::Result<()> {
    use_cases::route_capture::capture(state, points)?;
    Ok(())
}

/// Speichert die erfasste Trasse.
pub fn save(state: &mut AppState, form: &RouteForm) -> anyhow::Result<()> {
    use_cases::route_capture::save(state, form)
}

/// Verwirft die erfasste Trasse.
pub fn cancel(state: &mut AppState) {
    use_cases::route_capture::cancel(state);
}

/// Startet die Stützpunkt-Bearbeitung.
pub fn begin_edit(state: &mut AppState, route_index: usize) {
    use_cases::route_edit::begin_edit(state, route_index);
}

/// Übernimmt geänderte Stützpunkte; ungültige Punkte brechen ab.
pub fn apply_vertex_edit(
    state: &mut AppState,
    handle: LayerHandle,
    points: &[PointLike],
) -> anyhow::Result<()> {
    use_cases::route_edit::apply_vertex_edit(state, handle, points)?;
    Ok(())
}

/// Beendet die Stützpunkt-Bearbeitung.
pub fn finish_edit(state: &mut AppState) {
    use_cases::route_edit::finish_edit(state);
}
