//! In-Memory-Registry aller platzierten Objekte und Trassen der aktuellen Karte.
//!
//! Pro Objektart eine eigene Collection in Einfügereihenfolge. Indizes sind
//! stabil bis zum nächsten Entfernen; danach rücken alle folgenden Elemente
//! nach. Für dauerhafte Verweise daher immer `ItemId` verwenden.

use super::{EntityKind, GeoPoint, ItemId, ItemKind, ItemRef, PlacedEntity, Route};
use indexmap::IndexMap;

/// Ein Registry-Eintrag mit stabiler ID und optionaler Backend-ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    /// Lokale, stabile ID
    pub id: ItemId,
    /// Nutzdaten
    pub value: T,
    /// Vom Backend vergebener Schlüssel (None = noch nicht synchronisiert)
    pub remote_id: Option<u64>,
}

/// Geordnete Collection einer Objektart.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: IndexMap<ItemId, Record<T>>,
    next_id: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    /// Erstellt eine leere Collection.
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Hängt einen Wert an und gibt (Index, ID) zurück.
    pub fn push(&mut self, value: T) -> (usize, ItemId) {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        let (index, _) = self.items.insert_full(
            id,
            Record {
                id,
                value,
                remote_id: None,
            },
        );
        (index, id)
    }

    /// Entfernt das Element am Index; nachfolgende Indizes rücken auf.
    pub fn remove_at(&mut self, index: usize) -> Option<Record<T>> {
        self.items.shift_remove_index(index).map(|(_, rec)| rec)
    }

    /// Entfernt das Element mit der ID.
    pub fn remove(&mut self, id: ItemId) -> Option<Record<T>> {
        self.items.shift_remove(&id)
    }

    /// Eintrag per ID.
    pub fn get(&self, id: ItemId) -> Option<&Record<T>> {
        self.items.get(&id)
    }

    /// Mutabler Eintrag per ID.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Record<T>> {
        self.items.get_mut(&id)
    }

    /// Eintrag per Index.
    pub fn get_index(&self, index: usize) -> Option<&Record<T>> {
        self.items.get_index(index).map(|(_, rec)| rec)
    }

    /// Aktueller Index einer ID.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.get_index_of(&id)
    }

    /// ID am Index.
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.items.get_index(index).map(|(id, _)| *id)
    }

    /// Alle Einträge in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Record<T>> {
        self.items.values()
    }

    /// Alle Nutzdaten in Einfügereihenfolge.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.values().map(|rec| &rec.value)
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Gibt `true` zurück, wenn die Collection leer ist.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entfernt alle Einträge; ID-Zähler läuft weiter.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Container für alle Objekte und Trassen der aktuellen Büro-Karte.
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    entities: [Collection<PlacedEntity>; 4],
    routes: Collection<Route>,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            entities: std::array::from_fn(|_| Collection::new()),
            routes: Collection::new(),
        }
    }

    /// Fügt ein Objekt in die Collection seiner Art ein und gibt den Index zurück.
    pub fn add_entity(&mut self, entity: PlacedEntity) -> usize {
        self.insert_entity(entity).0
    }

    /// Fügt ein Objekt ein und gibt Index und Verweis zurück.
    pub fn insert_entity(&mut self, entity: PlacedEntity) -> (usize, ItemRef) {
        let kind = entity.kind();
        let (index, id) = self.entities[kind.slot()].push(entity);
        (index, ItemRef::new(kind, id))
    }

    /// Fügt eine Trasse ein und gibt den Index zurück.
    pub fn add_route(&mut self, route: Route) -> usize {
        self.insert_route(route).0
    }

    /// Fügt eine Trasse ein und gibt Index und Verweis zurück.
    pub fn insert_route(&mut self, route: Route) -> (usize, ItemRef) {
        let (index, id) = self.routes.push(route);
        (index, ItemRef::route(id))
    }

    /// Entfernt das Element am Index der jeweiligen Collection.
    pub fn remove_at(&mut self, kind: ItemKind, index: usize) -> Option<ItemId> {
        match kind {
            ItemKind::Entity(k) => self.entities[k.slot()].remove_at(index).map(|r| r.id),
            ItemKind::Route => self.routes.remove_at(index).map(|r| r.id),
        }
    }

    /// Entfernt ein Element per Verweis und gibt seine Backend-ID zurück (falls vorhanden).
    pub fn remove(&mut self, item: ItemRef) -> Option<Option<u64>> {
        match item.kind {
            ItemKind::Entity(k) => self.entities[k.slot()].remove(item.id).map(|r| r.remote_id),
            ItemKind::Route => self.routes.remove(item.id).map(|r| r.remote_id),
        }
    }

    /// Collection einer Objektart.
    pub fn entities(&self, kind: EntityKind) -> &Collection<PlacedEntity> {
        &self.entities[kind.slot()]
    }

    /// Collection aller Trassen.
    pub fn routes(&self) -> &Collection<Route> {
        &self.routes
    }

    /// Objekt per Art und ID.
    pub fn get_entity(&self, kind: EntityKind, id: ItemId) -> Option<&PlacedEntity> {
        self.entities[kind.slot()].get(id).map(|r| &r.value)
    }

    /// Trasse per ID.
    pub fn get_route(&self, id: ItemId) -> Option<&Route> {
        self.routes.get(id).map(|r| &r.value)
    }

    /// Ersetzt die Stützpunkte einer Trasse vollständig.
    pub fn replace_route_points(&mut self, id: ItemId, points: Vec<GeoPoint>) -> bool {
        match self.routes.get_mut(id) {
            Some(rec) => {
                rec.value.points = points;
                true
            }
            None => false,
        }
    }

    /// Anzahl der Elemente einer Collection.
    pub fn len(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Entity(k) => self.entities[k.slot()].len(),
            ItemKind::Route => self.routes.len(),
        }
    }

    /// Gesamtzahl aller Objekte und Trassen.
    pub fn total_count(&self) -> usize {
        self.entities.iter().map(Collection::len).sum::<usize>() + self.routes.len()
    }

    /// Gibt `true` zurück, wenn keine Objekte und Trassen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Aktueller Index eines Elements.
    pub fn index_of(&self, item: ItemRef) -> Option<usize> {
        match item.kind {
            ItemKind::Entity(k) => self.entities[k.slot()].index_of(item.id),
            ItemKind::Route => self.routes.index_of(item.id),
        }
    }

    /// ID am Index einer Collection.
    pub fn id_at(&self, kind: ItemKind, index: usize) -> Option<ItemId> {
        match kind {
            ItemKind::Entity(k) => self.entities[k.slot()].id_at(index),
            ItemKind::Route => self.routes.id_at(index),
        }
    }

    /// Existiert das Element noch?
    pub fn contains(&self, item: ItemRef) -> bool {
        self.index_of(item).is_some()
    }

    /// Backend-ID eines Elements.
    pub fn remote_id(&self, item: ItemRef) -> Option<u64> {
        match item.kind {
            ItemKind::Entity(k) => self.entities[k.slot()].get(item.id)?.remote_id,
            ItemKind::Route => self.routes.get(item.id)?.remote_id,
        }
    }

    /// Setzt die Backend-ID eines Elements.
    pub fn set_remote_id(&mut self, item: ItemRef, remote_id: u64) -> bool {
        let slot = match item.kind {
            ItemKind::Entity(k) => self.entities[k.slot()]
                .get_mut(item.id)
                .map(|r| &mut r.remote_id),
            ItemKind::Route => self.routes.get_mut(item.id).map(|r| &mut r.remote_id),
        };
        match slot {
            Some(remote) => {
                *remote = Some(remote_id);
                true
            }
            None => false,
        }
    }

    /// Entfernt alle Objekte und Trassen.
    pub fn clear(&mut self) {
        for collection in &mut self.entities {
            collection.clear();
        }
        self.routes.clear();
    }
}
