//! Application State: zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod editor;
mod selection;

pub use app_state::AppState;
pub use dialogs::{PlacementDialogState, RouteDialogState, UiState};
pub use editor::{EditorState, PendingPlacement, PendingRoute, PlacementState};
pub use selection::{SelectionEvent, SelectionState};
