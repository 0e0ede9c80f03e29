//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod adapter;
pub mod command_log;
pub mod controller;
pub mod errors;
pub mod events;
pub mod forms;
pub mod handlers;
mod intent_mapping;
pub mod layer_map;
pub mod notifications;
pub mod persistence;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand des Editors (Registry, Zeichenmodus, Selektion, Dialoge).
pub mod state;
pub mod use_cases;

pub use adapter::{AdapterCommand, MapAdapter, RecordingMapAdapter};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use errors::{PersistenceError, ValidationErrors};
pub use events::{AppCommand, AppIntent};
pub use forms::{EntityForm, RouteForm};
pub use layer_map::RouteLayerMap;
pub use notifications::{Notification, NotificationLevel, Notifications};
pub use persistence::{ApiKind, MemoryApi, SyncReport, SyncRequest, TopologyApi};
pub use render_scene::build as build_map_scene;
pub use state::{AppState, EditorState, SelectionEvent, SelectionState, UiState};
