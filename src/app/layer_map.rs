//! Zuordnung Trasse ↔ Polyline-Handle des Karten-Adapters.
//!
//! Ersetzt das Wiedererkennen einer Polyline über ihre Koordinaten: jede
//! angezeigte Trasse bekommt beim ersten Anzeigen ein Handle, Events des
//! Adapters tragen dieses Handle zurück. Handles werden nie wiederverwendet.
//! Transient, gilt nur für die aktuelle Session.

use crate::core::ItemId;
use crate::shared::LayerHandle;
use std::collections::HashMap;

/// Bijektive Zuordnung `ItemId` (Trasse) ↔ `LayerHandle`.
#[derive(Debug, Clone, Default)]
pub struct RouteLayerMap {
    by_route: HashMap<ItemId, LayerHandle>,
    by_handle: HashMap<LayerHandle, ItemId>,
    next_handle: u64,
}

impl RouteLayerMap {
    /// Erstellt eine leere Zuordnung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert das Handle der Trasse; vergibt ein neues, falls noch keins existiert.
    pub fn ensure(&mut self, route: ItemId) -> LayerHandle {
        if let Some(handle) = self.by_route.get(&route) {
            return *handle;
        }
        self.next_handle += 1;
        let handle = LayerHandle(self.next_handle);
        self.by_route.insert(route, handle);
        self.by_handle.insert(handle, route);
        handle
    }

    /// Handle einer Trasse (falls angezeigt).
    pub fn handle_of(&self, route: ItemId) -> Option<LayerHandle> {
        self.by_route.get(&route).copied()
    }

    /// Trasse zu einem Handle.
    pub fn route_of(&self, handle: LayerHandle) -> Option<ItemId> {
        self.by_handle.get(&handle).copied()
    }

    /// Löst die Zuordnung einer Trasse und gibt das frei gewordene Handle zurück.
    pub fn release(&mut self, route: ItemId) -> Option<LayerHandle> {
        let handle = self.by_route.remove(&route)?;
        self.by_handle.remove(&handle);
        Some(handle)
    }

    /// Entfernt alle Zuordnungen; der Handle-Zähler läuft weiter.
    pub fn clear(&mut self) {
        self.by_route.clear();
        self.by_handle.clear();
    }

    /// Gibt die Anzahl der Zuordnungen zurück.
    pub fn len(&self) -> usize {
        self.by_route.len()
    }

    /// Gibt zurück ob keine Zuordnung existiert.
    pub fn is_empty(&self) -> bool {
        self.by_route.is_empty()
    }
}
