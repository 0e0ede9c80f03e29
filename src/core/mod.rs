//! Core-Domänentypen: Geo-Punkte, Netz-Objekte, Trassen, Registry.

/// Geo-Punkte, Normalisierung und Haversine-Streckenlänge
pub mod geo;
pub mod entity;
pub mod registry;
pub mod route;

pub use entity::{
    Customer, Device, DeviceType, EntityKind, ItemId, ItemKind, ItemRef, Junction, PlacedEntity,
    SplitRatio, SubOffice,
};
pub use geo::{
    format_length_km, haversine_km, normalize, normalize_all, normalize_strict, path_length_km,
    path_length_km_with_radius, Coordinate, GeoPoint, InvalidPointError, PointLike, PointObject,
    EARTH_RADIUS_KM,
};
pub use registry::{Collection, EntityRegistry, Record};
pub use route::Route;
