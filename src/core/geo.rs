//! Geografische Punkte, Normalisierung heterogener Punkt-Darstellungen und Streckenlänge.
//!
//! Karten-Events und die REST-API liefern Punkte in unterschiedlicher Form:
//! als `[lat, lng]`-Paar oder als Objekt mit `lat`/`lng` bzw. `latitude`/`longitude`.
//! `normalize` bringt alles auf ein kanonisches `GeoPoint`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mittlerer Erdradius in Kilometern (Haversine).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kanonischer geografischer Punkt in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt (ohne Bereichsprüfung).
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Beide Koordinaten sind endliche Zahlen.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Liegt der Punkt im gültigen Bereich (lat ∈ [-90, 90], lng ∈ [-180, 180])?
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Gibt den Punkt als `[lat, lng]`-Paar zurück.
    pub fn to_pair(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Punkt konnte nicht normalisiert werden.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("ungültiger Punkt: {reason}")]
pub struct InvalidPointError {
    /// Grund der Ablehnung (für Log und Notification)
    pub reason: String,
}

impl InvalidPointError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Einzelne Koordinate, wie sie aus Events oder JSON kommen kann.
///
/// Strings werden wie Formularwerte geparst (`" 51.5 "` → 51.5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    /// Numerischer Wert
    Number(f64),
    /// Textwert aus Formular oder API
    Text(String),
}

impl Coordinate {
    /// Liefert den Wert als `f64`, falls er eine endliche Zahl ergibt.
    pub fn as_finite(&self) -> Option<f64> {
        let value = match self {
            Coordinate::Number(v) => *v,
            Coordinate::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Coordinate::Number(value)
    }
}

/// Objekt-Darstellung eines Punkts mit allen bekannten Feld-Synonymen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointObject {
    /// Kurzform Breitengrad
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<Coordinate>,
    /// Langform Breitengrad
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Coordinate>,
    /// Kurzform Längengrad
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<Coordinate>,
    /// Langform Längengrad
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Coordinate>,
    /// Alternative Kurzform Längengrad
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<Coordinate>,
}

/// Heterogene Punkt-Eingabe: Paar oder Objekt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointLike {
    /// `[lat, lng]`
    Pair([Coordinate; 2]),
    /// `{lat, lng}` / `{latitude, longitude}` / gemischt
    Object(PointObject),
}

impl PointLike {
    /// `[lat, lng]`-Paar aus Zahlen.
    pub fn pair(lat: f64, lng: f64) -> Self {
        PointLike::Pair([Coordinate::Number(lat), Coordinate::Number(lng)])
    }

    /// Objekt mit `lat`/`lng`.
    pub fn lat_lng(lat: f64, lng: f64) -> Self {
        PointLike::Object(PointObject {
            lat: Some(lat.into()),
            lng: Some(lng.into()),
            ..PointObject::default()
        })
    }

    /// Objekt mit `latitude`/`longitude` (Backend-Format).
    pub fn latitude_longitude(latitude: f64, longitude: f64) -> Self {
        PointLike::Object(PointObject {
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
            ..PointObject::default()
        })
    }
}

impl From<GeoPoint> for PointLike {
    fn from(point: GeoPoint) -> Self {
        PointLike::lat_lng(point.lat, point.lng)
    }
}

/// Normalisiert eine beliebige Punkt-Darstellung auf `GeoPoint`.
///
/// Das erste vorhandene Feld gewinnt (`lat` vor `latitude`, `lng` vor
/// `longitude` vor `lon`), auch wenn es keinen gültigen Wert enthält.
pub fn normalize(point: &PointLike) -> Result<GeoPoint, InvalidPointError> {
    let (lat, lng) = match point {
        PointLike::Pair([lat, lng]) => (Some(lat), Some(lng)),
        PointLike::Object(obj) => (
            obj.lat.as_ref().or(obj.latitude.as_ref()),
            obj.lng
                .as_ref()
                .or(obj.longitude.as_ref())
                .or(obj.lon.as_ref()),
        ),
    };

    let lat = lat
        .and_then(Coordinate::as_finite)
        .ok_or_else(|| {
            InvalidPointError::new("Breitengrad fehlt oder ist keine endliche Zahl")
        })?;
    let lng = lng
        .and_then(Coordinate::as_finite)
        .ok_or_else(|| {
            InvalidPointError::new("Längengrad fehlt oder ist keine endliche Zahl")
        })?;

    Ok(GeoPoint { lat, lng })
}

/// Wie `normalize`, lehnt zusätzlich Punkte außerhalb des Koordinatenbereichs ab.
pub fn normalize_strict(point: &PointLike) -> Result<GeoPoint, InvalidPointError> {
    let geo = normalize(point)?;
    if !geo.is_in_range() {
        return Err(InvalidPointError::new(format!(
            "Koordinate außerhalb des Bereichs: ({}, {})",
            geo.lat, geo.lng
        )));
    }
    Ok(geo)
}

/// Normalisiert eine Punktfolge; der erste ungültige Punkt bricht ab.
pub fn normalize_all(
    points: &[PointLike],
    strict: bool,
) -> Result<Vec<GeoPoint>, InvalidPointError> {
    points
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let result = if strict {
                normalize_strict(p)
            } else {
                normalize(p)
            };
            result.map_err(|e| InvalidPointError::new(format!("Punkt {}: {}", idx, e.reason)))
        })
        .collect()
}

/// Großkreis-Distanz zweier Punkte (Haversine) in Kilometern.
pub fn haversine_km(a: GeoPoint, b: GeoPoint, radius_km: f64) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    radius_km * c
}

/// Streckenlänge in Kilometern mit Standard-Erdradius.
pub fn path_length_km(points: &[GeoPoint]) -> f64 {
    path_length_km_with_radius(points, EARTH_RADIUS_KM)
}

/// Streckenlänge in Kilometern.
///
/// Weniger als zwei Punkte ergeben 0. Segmente mit nicht-endlicher
/// Koordinate tragen 0 bei, der Rest wird normal summiert.
pub fn path_length_km_with_radius(points: &[GeoPoint], radius_km: f64) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    points
        .windows(2)
        .filter(|pair| pair[0].is_finite() && pair[1].is_finite())
        .map(|pair| haversine_km(pair[0], pair[1], radius_km))
        .sum()
}

/// Formatiert eine Länge mit fester Nachkommastellenzahl (Backend-Feld `length_km`).
pub fn format_length_km(km: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, km)
}
