//! Platzierbare Netz-Objekte (Standorte, Muffen, Geräte, Kunden) und ihre Identität.

use super::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Art eines per Klick platzierbaren Objekts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Außenstelle eines Büros
    SubOffice,
    /// Muffe / Verteilerpunkt
    Junction,
    /// Netzwerkgerät (OLT, ONT, Splitter, Koppler)
    Device,
    /// Kundenanschluss
    Customer,
}

impl EntityKind {
    /// Alle Objektarten in fester Reihenfolge.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::SubOffice,
        EntityKind::Junction,
        EntityKind::Device,
        EntityKind::Customer,
    ];

    /// Fester Slot-Index in Registry-Arrays.
    pub(crate) fn slot(self) -> usize {
        match self {
            EntityKind::SubOffice => 0,
            EntityKind::Junction => 1,
            EntityKind::Device => 2,
            EntityKind::Customer => 3,
        }
    }

    /// Anzeigename für Log und Dialog-Titel.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::SubOffice => "Sub Office",
            EntityKind::Junction => "Junction",
            EntityKind::Device => "Network Device",
            EntityKind::Customer => "Customer",
        }
    }
}

/// Art eines selektierbaren Elements: platziertes Objekt oder Trasse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Platziertes Objekt
    Entity(EntityKind),
    /// Glasfaser-Trasse
    Route,
}

impl From<EntityKind> for ItemKind {
    fn from(kind: EntityKind) -> Self {
        ItemKind::Entity(kind)
    }
}

/// Stabile Identität innerhalb einer Collection (wird nie wiederverwendet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Verweis auf ein konkretes Element (Art + ID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    /// Collection des Elements
    pub kind: ItemKind,
    /// ID innerhalb der Collection
    pub id: ItemId,
}

impl ItemRef {
    /// Erstellt einen neuen Verweis.
    pub fn new(kind: impl Into<ItemKind>, id: ItemId) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }

    /// Verweis auf eine Trasse.
    pub fn route(id: ItemId) -> Self {
        Self {
            kind: ItemKind::Route,
            id,
        }
    }
}

/// Gerätetyp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    /// Optical Line Terminal
    #[serde(rename = "OLT")]
    Olt,
    /// Optical Network Terminal
    #[serde(rename = "ONT")]
    Ont,
    /// Passiver Splitter
    Splitter,
    /// Koppler
    Coupler,
}

impl DeviceType {
    /// Alle auswählbaren Gerätetypen.
    pub const ALL: [DeviceType; 4] = [
        DeviceType::Olt,
        DeviceType::Ont,
        DeviceType::Splitter,
        DeviceType::Coupler,
    ];

    /// Backend-/Formular-Bezeichnung.
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Olt => "OLT",
            DeviceType::Ont => "ONT",
            DeviceType::Splitter => "Splitter",
            DeviceType::Coupler => "Coupler",
        }
    }

    /// Parst die Formular-Bezeichnung.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value.trim())
    }
}

/// Split-Verhältnis eines Geräts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitRatio {
    /// 1:2
    #[serde(rename = "1:2")]
    OneToTwo,
    /// 1:4
    #[serde(rename = "1:4")]
    OneToFour,
    /// 1:8
    #[serde(rename = "1:8")]
    OneToEight,
    /// 1:16
    #[serde(rename = "1:16")]
    OneToSixteen,
    /// 1:32
    #[serde(rename = "1:32")]
    OneToThirtyTwo,
}

impl SplitRatio {
    /// Alle auswählbaren Verhältnisse.
    pub const ALL: [SplitRatio; 5] = [
        SplitRatio::OneToTwo,
        SplitRatio::OneToFour,
        SplitRatio::OneToEight,
        SplitRatio::OneToSixteen,
        SplitRatio::OneToThirtyTwo,
    ];

    /// Formular-Bezeichnung (`"1:8"`).
    pub fn as_str(self) -> &'static str {
        match self {
            SplitRatio::OneToTwo => "1:2",
            SplitRatio::OneToFour => "1:4",
            SplitRatio::OneToEight => "1:8",
            SplitRatio::OneToSixteen => "1:16",
            SplitRatio::OneToThirtyTwo => "1:32",
        }
    }

    /// Parst die Formular-Bezeichnung.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value.trim())
    }
}

/// Außenstelle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubOffice {
    pub name: String,
    pub address: String,
    pub position: GeoPoint,
}

/// Muffe / Verteilerpunkt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    pub name: String,
    pub post_code: String,
    pub junction_type: String,
    pub position: GeoPoint,
}

/// Netzwerkgerät mit optischen Kenndaten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub device_type: DeviceType,
    pub model_name: String,
    pub description: String,
    pub ratio: SplitRatio,
    /// Maximale Geschwindigkeit (Gbit/s)
    pub max_speed: f64,
    pub color_coding: String,
    pub port_count: u32,
    /// Einfügedämpfung (dB)
    pub insertion_loss: f64,
    /// Rückflussdämpfung (dB)
    pub return_loss: f64,
    pub supported_protocols: String,
    pub position: GeoPoint,
}

/// Kundenanschluss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub position: GeoPoint,
}

/// Ein platziertes Objekt einer der vier Arten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacedEntity {
    SubOffice(SubOffice),
    Junction(Junction),
    Device(Device),
    Customer(Customer),
}

impl PlacedEntity {
    /// Art des Objekts.
    pub fn kind(&self) -> EntityKind {
        match self {
            PlacedEntity::SubOffice(_) => EntityKind::SubOffice,
            PlacedEntity::Junction(_) => EntityKind::Junction,
            PlacedEntity::Device(_) => EntityKind::Device,
            PlacedEntity::Customer(_) => EntityKind::Customer,
        }
    }

    /// Position auf der Karte.
    pub fn position(&self) -> GeoPoint {
        match self {
            PlacedEntity::SubOffice(e) => e.position,
            PlacedEntity::Junction(e) => e.position,
            PlacedEntity::Device(e) => e.position,
            PlacedEntity::Customer(e) => e.position,
        }
    }

    /// Anzeigetitel für Popup und Log.
    pub fn title(&self) -> &str {
        match self {
            PlacedEntity::SubOffice(e) => &e.name,
            PlacedEntity::Junction(e) => &e.name,
            PlacedEntity::Device(e) => &e.model_name,
            PlacedEntity::Customer(e) => &e.name,
        }
    }
}
