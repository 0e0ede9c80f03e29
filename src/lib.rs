//! Fiber Map Editor Library.
//! Kern des Topologie-Karteneditors eines Glasfaser-Netzbetreibers:
//! Objekte platzieren, Trassen zeichnen und bearbeiten, Selektion und
//! Backend-Synchronisation. Als Library exportiert für Host-Anbindung und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AdapterCommand, AppCommand, AppController, AppIntent, AppState, MapAdapter, MemoryApi,
    RecordingMapAdapter, TopologyApi, UiState,
};
pub use core::{
    EntityKind, EntityRegistry, GeoPoint, ItemId, ItemKind, ItemRef, PlacedEntity, Route,
};
pub use shared::{DrawMode, EditorOptions, MapScene};
