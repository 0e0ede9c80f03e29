//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Karten-Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod draw_mode;
mod map_scene;
pub mod options;

pub use draw_mode::{DrawConfig, DrawMode, FinishTrigger, LayerHandle};
pub use map_scene::{MapScene, SceneMarker, SceneRoute};
pub use options::{ConflictPolicy, EditorOptions};
