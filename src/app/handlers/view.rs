//! Handler für Zeichenmodus und Karten-Ansicht.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::DrawMode;

/// Setzt den Zeichenmodus.
pub fn set_draw_mode(state: &mut AppState, mode: DrawMode) {
    use_cases::draw_mode::set_draw_mode(state, mode);
}

/// Verlässt die Karten-Ansicht.
pub fn leave_screen(state: &mut AppState) {
    use_cases::draw_mode::leave_screen(state);
}
