//! Glasfaser-Trasse als benannte Punktfolge.

use super::geo::{path_length_km_with_radius, EARTH_RADIUS_KM};
use super::GeoPoint;
use serde::{Deserialize, Serialize};

/// Eine gespeicherte Trasse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Trassenname
    pub name: String,
    /// Freitext-Beschreibung (darf leer sein)
    #[serde(default)]
    pub description: String,
    /// Stützpunkte in Zeichenreihenfolge
    pub points: Vec<GeoPoint>,
}

impl Route {
    /// Minimale Punktanzahl einer gültigen Trasse.
    pub const MIN_POINTS: usize = 2;

    /// Erstellt eine neue Trasse ohne Beschreibung.
    pub fn new(name: impl Into<String>, points: Vec<GeoPoint>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            points,
        }
    }

    /// Trassenlänge in Kilometern (Standard-Erdradius).
    pub fn length_km(&self) -> f64 {
        self.length_km_with_radius(EARTH_RADIUS_KM)
    }

    /// Trassenlänge in Kilometern mit konfiguriertem Erdradius.
    pub fn length_km_with_radius(&self, radius_km: f64) -> f64 {
        path_length_km_with_radius(&self.points, radius_km)
    }

    /// Hat die Trasse genug Punkte, um gespeichert zu werden?
    pub fn is_committable(&self) -> bool {
        self.points.len() >= Self::MIN_POINTS
    }
}
