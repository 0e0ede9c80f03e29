//! Backend-Payloads mit den Feldnamen der REST-API.
//!
//! Die Schreibweisen `logitude` (Sub Office) und `logitutde` (Device) sind
//! Teil des Backend-Schemas und werden beim Senden exakt so verwendet;
//! beim Lesen wird zusätzlich `longitude` akzeptiert.

use crate::core::{
    format_length_km, normalize, normalize_all, Coordinate, Customer, Device, DeviceType,
    EntityKind, GeoPoint, Junction, PlacedEntity, PointLike, PointObject, Route, SplitRatio,
    SubOffice,
};
use crate::shared::EditorOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubOfficePayload {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub latitude: Coordinate,
    #[serde(rename = "logitude", alias = "longitude")]
    pub longitude: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionPayload {
    pub name: String,
    #[serde(default)]
    pub post_code: String,
    #[serde(default)]
    pub junction_type: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePayload {
    pub device_type: DeviceType,
    pub model_name: String,
    #[serde(default)]
    pub description: String,
    pub ratio: SplitRatio,
    pub max_speed: f64,
    #[serde(default)]
    pub color_coding: String,
    pub port_count: u32,
    pub insertion_loss: f64,
    pub return_loss: f64,
    #[serde(default)]
    pub supported_protocols: String,
    pub latitude: Coordinate,
    #[serde(rename = "logitutde", alias = "longitude")]
    pub longitude: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<u64>,
}

/// Ein Stützpunkt im `path` einer Trasse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPointPayload {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    #[serde(default)]
    pub description: String,
}

/// Trasse im Backend-Format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<u64>,
    /// Ungerundete Länge in km
    #[serde(default)]
    pub total_km: f64,
    /// Gerundete Länge als Text (`"12.34"`)
    #[serde(default = "zero_length")]
    pub length_km: Coordinate,
    pub path: Vec<PathPointPayload>,
}

fn zero_length() -> Coordinate {
    Coordinate::Number(0.0)
}

fn split(position: GeoPoint) -> (Coordinate, Coordinate) {
    (position.lat.into(), position.lng.into())
}

fn join(latitude: Coordinate, longitude: Coordinate) -> anyhow::Result<GeoPoint> {
    let point = PointLike::Object(PointObject {
        latitude: Some(latitude),
        longitude: Some(longitude),
        ..PointObject::default()
    });
    Ok(normalize(&point)?)
}

/// Serialisiert ein Objekt in den Create/Update-Payload seiner Ressource.
pub fn entity_payload(entity: &PlacedEntity, office: Option<u64>) -> serde_json::Result<Value> {
    let (latitude, longitude) = split(entity.position());
    match entity {
        PlacedEntity::SubOffice(e) => serde_json::to_value(SubOfficePayload {
            name: e.name.clone(),
            address: e.address.clone(),
            latitude,
            longitude,
            office,
        }),
        PlacedEntity::Junction(e) => serde_json::to_value(JunctionPayload {
            name: e.name.clone(),
            post_code: e.post_code.clone(),
            junction_type: e.junction_type.clone(),
            latitude,
            longitude,
            office,
        }),
        PlacedEntity::Device(e) => serde_json::to_value(DevicePayload {
            device_type: e.device_type,
            model_name: e.model_name.clone(),
            description: e.description.clone(),
            ratio: e.ratio,
            max_speed: e.max_speed,
            color_coding: e.color_coding.clone(),
            port_count: e.port_count,
            insertion_loss: e.insertion_loss,
            return_loss: e.return_loss,
            supported_protocols: e.supported_protocols.clone(),
            latitude,
            longitude,
            office,
        }),
        PlacedEntity::Customer(e) => serde_json::to_value(CustomerPayload {
            name: e.name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            address: e.address.clone(),
            latitude,
            longitude,
            office,
        }),
    }
}

/// Liest ein Objekt aus einer Backend-Antwort.
pub fn entity_from_value(kind: EntityKind, value: &Value) -> anyhow::Result<PlacedEntity> {
    let entity = match kind {
        EntityKind::SubOffice => {
            let p: SubOfficePayload = serde_json::from_value(value.clone())?;
            PlacedEntity::SubOffice(SubOffice {
                name: p.name,
                address: p.address,
                position: join(p.latitude, p.longitude)?,
            })
        }
        EntityKind::Junction => {
            let p: JunctionPayload = serde_json::from_value(value.clone())?;
            PlacedEntity::Junction(Junction {
                name: p.name,
                post_code: p.post_code,
                junction_type: p.junction_type,
                position: join(p.latitude, p.longitude)?,
            })
        }
        EntityKind::Device => {
            let p: DevicePayload = serde_json::from_value(value.clone())?;
            PlacedEntity::Device(Device {
                device_type: p.device_type,
                model_name: p.model_name,
                description: p.description,
                ratio: p.ratio,
                max_speed: p.max_speed,
                color_coding: p.color_coding,
                port_count: p.port_count,
                insertion_loss: p.insertion_loss,
                return_loss: p.return_loss,
                supported_protocols: p.supported_protocols,
                position: join(p.latitude, p.longitude)?,
            })
        }
        EntityKind::Customer => {
            let p: CustomerPayload = serde_json::from_value(value.clone())?;
            PlacedEntity::Customer(Customer {
                name: p.name,
                email: p.email,
                phone: p.phone,
                address: p.address,
                position: join(p.latitude, p.longitude)?,
            })
        }
    };
    Ok(entity)
}

/// Baut den Trassen-Payload inkl. Länge.
pub fn route_payload(route: &Route, office: Option<u64>, options: &EditorOptions) -> RoutePayload {
    let total_km = route.length_km_with_radius(options.earth_radius_km);
    RoutePayload {
        name: route.name.clone(),
        description: route.description.clone(),
        office,
        total_km,
        length_km: Coordinate::Text(format_length_km(total_km, options.length_decimals)),
        path: route
            .points
            .iter()
            .map(|p| PathPointPayload {
                latitude: p.lat.into(),
                longitude: p.lng.into(),
                description: String::new(),
            })
            .collect(),
    }
}

/// Liest eine Trasse aus einer Backend-Antwort.
pub fn route_from_value(value: &Value) -> anyhow::Result<Route> {
    let payload: RoutePayload = serde_json::from_value(value.clone())?;
    let raw: Vec<PointLike> = payload
        .path
        .into_iter()
        .map(|p| {
            PointLike::Object(PointObject {
                latitude: Some(p.latitude),
                longitude: Some(p.longitude),
                ..PointObject::default()
            })
        })
        .collect();
    let points = normalize_all(&raw, false)
        .with_context(|| format!("Trasse '{}' enthält ungültige Punkte", payload.name))?;
    if points.len() < Route::MIN_POINTS {
        anyhow::bail!(
            "Trasse '{}' hat nur {} Punkt(e)",
            payload.name,
            points.len()
        );
    }
    Ok(Route {
        name: payload.name,
        description: payload.description,
        points,
    })
}

/// Backend-ID (`id`) aus einer Antwort; Zahl oder numerischer Text.
pub fn remote_id_of(value: &Value) -> Option<u64> {
    match value.get("id")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
