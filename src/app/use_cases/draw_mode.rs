//! Use-Case: Zeichenmodus der Karte umschalten.

use crate::app::adapter::AdapterCommand;
use crate::app::use_cases::{placement, route_capture, route_edit, selection};
use crate::app::AppState;
use crate::shared::{DrawConfig, DrawMode};

/// Setzt den Zeichenmodus ohne Vorbedingung.
///
/// Jeder Aufruf schaltet den Adapter neu scharf, auch wenn sich der Modus
/// nicht ändert.
pub fn set_draw_mode(state: &mut AppState, mode: DrawMode) {
    let previous = state.editor.draw_mode;
    state.editor.draw_mode = mode;
    let config = DrawConfig::for_mode(mode, &state.options);
    state.push_adapter(AdapterCommand::SetDrawMode { mode, config });

    if previous != mode {
        log::info!("Zeichenmodus: {:?} → {:?}", previous, mode);
    }
}

/// Verlässt die Karten-Ansicht: Zeichnen aus, alle offenen Workflows verworfen.
pub fn leave_screen(state: &mut AppState) {
    route_edit::end_edit(state);
    placement::cancel(state);
    route_capture::cancel(state);
    selection::clear_selection(state);
    state.selection.queue.clear();
    set_draw_mode(state, DrawMode::Disabled);
    state.ui.show_upgrade_prompt = false;
    state.ui.left_screen = true;
    log::info!("Karten-Ansicht verlassen");
}
