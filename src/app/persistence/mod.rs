//! Anbindung an die REST-Persistenz des Backends.
//!
//! Lokale Änderungen werden sofort (optimistisch) in der Registry angewendet
//! und als `SyncRequest` in `AppState::sync_queue` eingereiht. Der Host leert
//! die Queue über `AppController::sync` gegen eine `TopologyApi`.

mod memory;
mod payload;

pub use memory::{ApiCall, MemoryApi};
pub use payload::{
    entity_from_value, entity_payload, remote_id_of, route_from_value, route_payload,
    CustomerPayload, DevicePayload, JunctionPayload, PathPointPayload, RoutePayload,
    SubOfficePayload,
};

use super::errors::PersistenceError;
use crate::core::{EntityKind, ItemKind, ItemRef};
use serde::Serialize;
use serde_json::Value;

/// Ressource der Backend-API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKind {
    SubOffice,
    Junction,
    Device,
    Customer,
    Route,
}

impl ApiKind {
    /// Alle Ressourcen in Ladereihenfolge.
    pub const ALL: [ApiKind; 5] = [
        ApiKind::SubOffice,
        ApiKind::Junction,
        ApiKind::Device,
        ApiKind::Customer,
        ApiKind::Route,
    ];

    /// Pfadsegment der Ressource.
    pub fn resource(self) -> &'static str {
        match self {
            ApiKind::SubOffice => "sub-office",
            ApiKind::Junction => "junction",
            ApiKind::Device => "network-device",
            ApiKind::Customer => "customer",
            ApiKind::Route => "route",
        }
    }

    /// Zugehörige Registry-Collection.
    pub fn item_kind(self) -> ItemKind {
        match self {
            ApiKind::SubOffice => ItemKind::Entity(EntityKind::SubOffice),
            ApiKind::Junction => ItemKind::Entity(EntityKind::Junction),
            ApiKind::Device => ItemKind::Entity(EntityKind::Device),
            ApiKind::Customer => ItemKind::Entity(EntityKind::Customer),
            ApiKind::Route => ItemKind::Route,
        }
    }
}

impl From<ItemKind> for ApiKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Entity(EntityKind::SubOffice) => ApiKind::SubOffice,
            ItemKind::Entity(EntityKind::Junction) => ApiKind::Junction,
            ItemKind::Entity(EntityKind::Device) => ApiKind::Device,
            ItemKind::Entity(EntityKind::Customer) => ApiKind::Customer,
            ItemKind::Route => ApiKind::Route,
        }
    }
}

impl From<EntityKind> for ApiKind {
    fn from(kind: EntityKind) -> Self {
        ApiKind::from(ItemKind::Entity(kind))
    }
}

/// CRUD-Endpunkte pro Ressource.
///
/// Aus Sicht des Editors synchron; Antworten enthalten mindestens `id`
/// und die gesendeten Geo-Felder.
pub trait TopologyApi {
    /// Legt einen Datensatz an und liefert ihn inkl. `id` zurück.
    fn create(&mut self, kind: ApiKind, payload: Value) -> Result<Value, PersistenceError>;
    /// Aktualisiert einen Datensatz.
    fn update(
        &mut self,
        kind: ApiKind,
        remote_id: u64,
        payload: Value,
    ) -> Result<Value, PersistenceError>;
    /// Löscht einen Datensatz.
    fn delete(&mut self, kind: ApiKind, remote_id: u64) -> Result<(), PersistenceError>;
    /// Listet alle Datensätze eines Büros (`None` = alle).
    fn list(&mut self, kind: ApiKind, office_id: Option<u64>)
        -> Result<Vec<Value>, PersistenceError>;
}

/// Ausstehende Backend-Anfrage.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncRequest {
    /// Neues Element anlegen; die Antwort-ID wird am Record gespeichert
    Create { item: ItemRef, payload: Value },
    /// Bestehendes Element aktualisieren (Backend-ID wird beim Senden aufgelöst)
    Update { item: ItemRef, payload: Value },
    /// Element löschen
    Delete { kind: ApiKind, remote_id: u64 },
}

impl SyncRequest {
    /// Lokales Element der Anfrage (nicht bei `Delete`).
    pub fn item(&self) -> Option<ItemRef> {
        match self {
            SyncRequest::Create { item, .. } | SyncRequest::Update { item, .. } => Some(*item),
            SyncRequest::Delete { .. } => None,
        }
    }
}

/// Ergebnis eines Sync-Durchlaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Erfolgreich gesendete Anfragen
    pub succeeded: usize,
    /// Abgelehnte oder übersprungene Anfragen
    pub failed: usize,
    /// Nach Verbindungsfehler in der Queue verbliebene Anfragen
    pub pending: usize,
}
