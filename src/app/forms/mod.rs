//! Bestätigungsformulare für Platzierungen und Trassen inkl. Feldvalidierung.
//!
//! Alle Felder kommen als Text aus der UI und werden vor der Prüfung getrimmt.

use super::errors::ValidationErrors;
use crate::core::{
    Customer, Device, DeviceType, EntityKind, GeoPoint, Junction, PlacedEntity, Route, SplitRatio,
    SubOffice,
};
use crate::shared::EditorOptions;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^\d{10}$";

fn email_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

fn phone_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).ok()).as_ref()
}

/// Formular "Sub Office hinzufügen"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubOfficeForm {
    pub name: String,
    pub address: String,
}

/// Formular "Junction hinzufügen"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JunctionForm {
    pub name: String,
    pub post_code: String,
    pub junction_type: String,
}

/// Formular "Network Device hinzufügen"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceForm {
    pub device_type: String,
    pub model_name: String,
    pub description: String,
    pub ratio: String,
    pub max_speed: String,
    pub color_coding: String,
    pub port_count: String,
    pub insertion_loss: String,
    pub return_loss: String,
    pub supported_protocols: String,
}

/// Formular "Customer hinzufügen"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Ausgefülltes Bestätigungsformular einer Platzierung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityForm {
    SubOffice(SubOfficeForm),
    Junction(JunctionForm),
    Device(DeviceForm),
    Customer(CustomerForm),
}

/// Sammelt Fehler beim Auslesen der Formularfelder.
struct FieldReader {
    errors: ValidationErrors,
}

impl FieldReader {
    fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    /// Pflichtfeld: getrimmter, nicht-leerer Text.
    fn required(&mut self, field: &str, label: &str, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.errors.insert(field, format!("{label} ist erforderlich"));
        }
        trimmed.to_string()
    }

    /// Pflichtfeld mit endlicher Fließkommazahl.
    fn float(&mut self, field: &str, label: &str, value: &str) -> f64 {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.errors.insert(field, format!("{label} ist erforderlich"));
            return 0.0;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                self.errors.insert(field, format!("{label} muss eine Zahl sein"));
                0.0
            }
        }
    }

    /// Pflichtfeld mit positiver Ganzzahl.
    fn positive_int(&mut self, field: &str, label: &str, value: &str) -> u32 {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.errors.insert(field, format!("{label} ist erforderlich"));
            return 0;
        }
        match trimmed.parse::<u32>() {
            Ok(v) if v > 0 => v,
            _ => {
                self.errors
                    .insert(field, format!("{label} muss eine positive Ganzzahl sein"));
                0
            }
        }
    }

    /// Pflichtfeld, das zusätzlich einem Muster entsprechen muss.
    fn pattern(
        &mut self,
        field: &str,
        label: &str,
        value: &str,
        regex: Option<&Regex>,
        message: &str,
    ) -> String {
        let trimmed = self.required(field, label, value);
        if !trimmed.is_empty() && !regex.is_some_and(|re| re.is_match(&trimmed)) {
            self.errors.insert(field, message);
        }
        trimmed
    }

    fn finish<T>(self, build: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        self.errors.into_result(build)
    }
}

impl EntityForm {
    /// Leeres Formular für eine Objektart.
    pub fn empty(kind: EntityKind) -> Self {
        match kind {
            EntityKind::SubOffice => EntityForm::SubOffice(SubOfficeForm::default()),
            EntityKind::Junction => EntityForm::Junction(JunctionForm::default()),
            EntityKind::Device => EntityForm::Device(DeviceForm::default()),
            EntityKind::Customer => EntityForm::Customer(CustomerForm::default()),
        }
    }

    /// Objektart des Formulars.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityForm::SubOffice(_) => EntityKind::SubOffice,
            EntityForm::Junction(_) => EntityKind::Junction,
            EntityForm::Device(_) => EntityKind::Device,
            EntityForm::Customer(_) => EntityKind::Customer,
        }
    }

    /// Prüft alle Felder und baut bei Erfolg das Objekt an `position`.
    pub fn validate(&self, position: GeoPoint) -> Result<PlacedEntity, ValidationErrors> {
        let mut r = FieldReader::new();
        match self {
            EntityForm::SubOffice(f) => {
                let name = r.required("name", "Name", &f.name);
                let address = r.required("address", "Adresse", &f.address);
                r.finish(|| {
                    PlacedEntity::SubOffice(SubOffice {
                        name,
                        address,
                        position,
                    })
                })
            }
            EntityForm::Junction(f) => {
                let name = r.required("name", "Name", &f.name);
                let post_code = r.required("post_code", "Postleitzahl", &f.post_code);
                let junction_type = r.required("junction_type", "Junction-Typ", &f.junction_type);
                r.finish(|| {
                    PlacedEntity::Junction(Junction {
                        name,
                        post_code,
                        junction_type,
                        position,
                    })
                })
            }
            EntityForm::Device(f) => validate_device(f, position, r),
            EntityForm::Customer(f) => {
                let name = r.required("name", "Name", &f.name);
                let email = r.pattern(
                    "email",
                    "E-Mail",
                    &f.email,
                    email_regex(),
                    "Ungültige E-Mail-Adresse",
                );
                let phone = r.pattern(
                    "phone",
                    "Telefonnummer",
                    &f.phone,
                    phone_regex(),
                    "Telefonnummer muss aus genau 10 Ziffern bestehen",
                );
                let address = r.required("address", "Adresse", &f.address);
                r.finish(|| {
                    PlacedEntity::Customer(Customer {
                        name,
                        email,
                        phone,
                        address,
                        position,
                    })
                })
            }
        }
    }
}

fn validate_device(
    f: &DeviceForm,
    position: GeoPoint,
    mut r: FieldReader,
) -> Result<PlacedEntity, ValidationErrors> {
    let device_type = DeviceType::parse(&f.device_type);
    if device_type.is_none() {
        r.errors
            .insert("device_type", "Gerätetyp muss OLT, ONT, Splitter oder Coupler sein");
    }
    let ratio = SplitRatio::parse(&f.ratio);
    if ratio.is_none() {
        r.errors
            .insert("ratio", "Verhältnis muss 1:2, 1:4, 1:8, 1:16 oder 1:32 sein");
    }
    let model_name = r.required("model_name", "Modellname", &f.model_name);
    let description = r.required("description", "Beschreibung", &f.description);
    let max_speed = r.float("max_speed", "Maximale Geschwindigkeit", &f.max_speed);
    let color_coding = r.required("color_coding", "Farbcodierung", &f.color_coding);
    let port_count = r.positive_int("port_count", "Portanzahl", &f.port_count);
    let insertion_loss = r.float("insertion_loss", "Einfügedämpfung", &f.insertion_loss);
    let return_loss = r.float("return_loss", "Rückflussdämpfung", &f.return_loss);
    let supported_protocols = r.required(
        "supported_protocols",
        "Unterstützte Protokolle",
        &f.supported_protocols,
    );

    match (device_type, ratio) {
        (Some(device_type), Some(ratio)) => r.finish(|| {
            PlacedEntity::Device(Device {
                device_type,
                model_name,
                description,
                ratio,
                max_speed,
                color_coding,
                port_count,
                insertion_loss,
                return_loss,
                supported_protocols,
                position,
            })
        }),
        _ => Err(r.errors),
    }
}

/// Benennungs-Formular einer erfassten Trasse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteForm {
    pub name: String,
    pub description: String,
}

/// Prüft Name, Beschreibung und Punktanzahl und baut die Trasse.
pub fn validate_route(
    form: &RouteForm,
    points: &[GeoPoint],
    options: &EditorOptions,
) -> Result<Route, ValidationErrors> {
    let mut r = FieldReader::new();
    let name = r.required("name", "Trassenname", &form.name);
    let description = if options.require_route_description {
        r.required("description", "Beschreibung", &form.description)
    } else {
        form.description.trim().to_string()
    };
    let min_points = options.effective_min_route_points();
    if points.len() < min_points {
        r.errors.insert(
            "points",
            format!("Mindestens {min_points} Punkte für die Trasse zeichnen"),
        );
    }
    r.finish(|| Route {
        name,
        description,
        points: points.to_vec(),
    })
}
