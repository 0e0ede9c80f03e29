//! Karten-Szene als expliziter Übergabevertrag zwischen App und Karten-Adapter.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie rendert.

use super::{DrawMode, LayerHandle};
use crate::core::{EntityKind, GeoPoint, ItemRef};
use serde::Serialize;

/// Ein platziertes Objekt als Marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneMarker {
    /// Stabile Identität (für Klick- und Popup-Events)
    pub item: ItemRef,
    /// Objektart (bestimmt das Icon)
    pub kind: EntityKind,
    /// Position
    pub position: GeoPoint,
    /// Popup-Titel
    pub title: String,
    /// Aktuell selektiert
    pub selected: bool,
}

/// Eine Trasse als Polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneRoute {
    /// Stabile Identität
    pub item: ItemRef,
    /// Adapter-Handle der Polyline
    pub handle: Option<LayerHandle>,
    /// Trassenname
    pub name: String,
    /// Stützpunkte
    pub points: Vec<GeoPoint>,
    /// Länge in Kilometern
    pub length_km: f64,
    /// Aktuell selektiert
    pub selected: bool,
    /// Stützpunkte werden gerade bearbeitet
    pub editing: bool,
}

/// Read-only Daten für ein Karten-Update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    /// Kartenmitte `[lat, lng]`
    pub center: [f64; 2],
    /// Zoomstufe
    pub zoom: u8,
    /// Aktiver Zeichenmodus
    pub draw_mode: DrawMode,
    /// Alle Objekt-Marker
    pub markers: Vec<SceneMarker>,
    /// Alle Trassen
    pub routes: Vec<SceneRoute>,
    /// Scharfgeschaltete Objektart (Cursor-Hinweis)
    pub armed_kind: Option<EntityKind>,
    /// Vorläufiger Marker einer offenen Platzierung
    pub pending_marker: Option<(EntityKind, GeoPoint)>,
    /// Vorläufige Linie einer ungespeicherten Trasse
    pub pending_route: Option<Vec<GeoPoint>>,
    /// Aktuelle Selektion
    pub selected: Option<ItemRef>,
}

impl MapScene {
    /// Anzahl aller sichtbaren Elemente.
    pub fn item_count(&self) -> usize {
        self.markers.len() + self.routes.len()
    }
}
