//! Fehler-Taxonomie der Application-Layer.
//!
//! `InvalidPointError` (core) blockiert den aufrufenden Command,
//! `ValidationErrors` werden inline im Dialog angezeigt,
//! `PersistenceError` wird als Notification gemeldet.

use std::collections::BTreeMap;
use thiserror::Error;

/// Feldbezogene Validierungsfehler eines Formulars (Feldname → Meldung).
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{} ungültige(s) Feld(er): {}", .fields.len(), field_names(.fields))]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

fn field_names(fields: &BTreeMap<String, String>) -> String {
    fields.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl ValidationErrors {
    /// Erstellt eine leere Fehlerliste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fehlerliste mit genau einem Eintrag.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Setzt die Meldung für ein Feld (erste Meldung gewinnt).
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Meldung zu einem Feld.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Enthält die Liste einen Fehler für das Feld?
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Anzahl fehlerhafter Felder.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Gibt `true` zurück, wenn keine Fehler vorliegen.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Alle (Feld, Meldung)-Paare alphabetisch nach Feld.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` wenn fehlerfrei, sonst `Err(self)`.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Fehler der Persistenz-API (REST-Backend).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// Backend hat die Anfrage fachlich abgelehnt
    #[error("Backend hat die Anfrage abgelehnt ({status}): {message}")]
    Rejected {
        /// HTTP-Status
        status: u16,
        /// Meldung des Backends
        message: String,
    },
    /// Datensatz existiert im Backend nicht (mehr)
    #[error("Datensatz {remote_id} nicht gefunden")]
    NotFound {
        /// Backend-ID
        remote_id: u64,
    },
    /// Netzwerk- oder Verbindungsfehler
    #[error("Verbindungsfehler: {0}")]
    Transport(String),
    /// Antwort ohne erwartete Felder
    #[error("unerwartete Backend-Antwort: {0}")]
    InvalidResponse(String),
}

impl PersistenceError {
    /// Meldet das Backend ein überschrittenes Glasfaser-Längenlimit?
    pub fn is_fiber_length_limit(&self) -> bool {
        match self {
            PersistenceError::Rejected { message, .. } => {
                message.to_lowercase().contains("fiber length limit")
            }
            _ => false,
        }
    }
}
