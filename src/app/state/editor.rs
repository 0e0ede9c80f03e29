use crate::app::layer_map::RouteLayerMap;
use crate::core::{EntityKind, GeoPoint, ItemId};
use crate::shared::DrawMode;

/// Vorgeschlagene Position eines neuen Objekts (Formular offen)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPlacement {
    pub kind: EntityKind,
    pub position: GeoPoint,
}

/// Erfasste, noch unbenannte Trasse
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRoute {
    pub points: Vec<GeoPoint>,
}

/// Platzierungs-Workflow: scharf → Klick → bestätigen/abbrechen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementState {
    /// Scharfgeschaltete Objektart (wartet auf Kartenklick)
    pub armed: Option<EntityKind>,
    /// Geklickte Position, Formular offen
    pub pending: Option<PendingPlacement>,
}

impl PlacementState {
    /// Läuft gerade ein Platzierungs-Workflow?
    pub fn is_active(&self) -> bool {
        self.armed.is_some() || self.pending.is_some()
    }
}

/// Zustand der Karten-Werkzeuge
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Zeichenmodus
    pub draw_mode: DrawMode,
    /// Platzierungs-Workflow
    pub placement: PlacementState,
    /// Erfasste Trasse, wartet auf Namen
    pub pending_route: Option<PendingRoute>,
    /// Trasse, deren Stützpunkte gerade bearbeitet werden
    pub editing_route: Option<ItemId>,
    /// Trasse ↔ Polyline-Handle
    pub layers: RouteLayerMap,
}

impl EditorState {
    /// Erstellt den Standard-Zustand (Zeichnen aus, nichts offen).
    pub fn new() -> Self {
        Self::default()
    }
}
