//! Handler für Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und persistiert sie, falls ein Pfad gesetzt ist.
///
/// Ein aktiver Zeichenmodus wird mit den neuen Linienfarben neu scharfgeschaltet.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.notifications.set_capacity(options.notification_capacity);
    state.options = options;

    let mode = state.editor.draw_mode;
    if mode.is_drawing() {
        use_cases::draw_mode::set_draw_mode(state, mode);
    }

    match &state.options_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}
