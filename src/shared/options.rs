//! Zentrale Konfiguration für den Fiber Map Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Standard-Kartenmitte `[lat, lng]` beim Öffnen der Büro-Karte.
pub const MAP_CENTER: [f64; 2] = [51.505, -0.09];
/// Standard-Zoomstufe der Kachelkarte.
pub const MAP_ZOOM: u8 = 13;

// ── Trassen ─────────────────────────────────────────────────────────

/// Minimale Punktanzahl einer speicherbaren Trasse.
pub const MIN_ROUTE_POINTS: usize = 2;
/// Nachkommastellen des `length_km`-Felds im Backend-Payload.
pub const LENGTH_DECIMALS: usize = 2;
/// Linienfarbe im Punkt-zu-Punkt-Modus.
pub const POINT_LINE_COLOR: &str = "blue";
/// Linienfarbe im Freihand-Modus.
pub const FREEHAND_LINE_COLOR: &str = "red";
/// Strichmuster der Hilfslinie beim Zeichnen.
pub const HINT_DASH_PATTERN: [u32; 2] = [5, 5];

// ── Benachrichtigungen ─────────────────────────────────────────────

/// Maximale Anzahl gepufferter Benachrichtigungen.
pub const NOTIFICATION_CAPACITY: usize = 50;

/// Verhalten, wenn ein Workflow gestartet wird, während derselbe schon läuft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Neuen Start ignorieren, laufenden Workflow behalten
    Reject,
    /// Laufenden Workflow verwerfen bzw. beenden und neu starten
    Replace,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `fiber_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Büro ────────────────────────────────────────────────────
    /// Backend-ID des Büros, dessen Karte bearbeitet wird
    #[serde(default)]
    pub office_id: Option<u64>,
    /// Kartenmitte `[lat, lng]`
    pub map_center: [f64; 2],
    /// Zoomstufe beim Öffnen
    pub map_zoom: u8,

    // ── Geometrie ───────────────────────────────────────────────
    /// Erdradius für Haversine in Kilometern
    pub earth_radius_km: f64,
    /// Punkte außerhalb von [-90,90]/[-180,180] ablehnen
    #[serde(default)]
    pub strict_coordinates: bool,

    // ── Trassen ─────────────────────────────────────────────────
    /// Minimale Punktanzahl einer Trasse
    pub min_route_points: usize,
    /// Nachkommastellen für `length_km`
    pub length_decimals: usize,
    /// Beschreibung beim Speichern einer Trasse verlangen
    #[serde(default)]
    pub require_route_description: bool,
    /// Linienfarbe Punkt-zu-Punkt
    pub point_line_color: String,
    /// Linienfarbe Freihand
    pub freehand_line_color: String,
    /// Strichmuster der Hilfslinie
    pub hint_dash_pattern: [u32; 2],

    // ── Workflows ───────────────────────────────────────────────
    /// Erneutes Scharfschalten einer Platzierung während eine offen ist
    #[serde(default = "default_rearm_policy")]
    pub rearm_policy: ConflictPolicy,
    /// Bearbeiten einer zweiten Trasse während eine in Bearbeitung ist
    #[serde(default = "default_route_edit_policy")]
    pub route_edit_policy: ConflictPolicy,
    /// Klick auf leere Kartenfläche hebt die Selektion auf
    #[serde(default = "default_true")]
    pub deselect_on_background_click: bool,

    // ── Benachrichtigungen ──────────────────────────────────────
    /// Maximale Anzahl gepufferter Benachrichtigungen
    #[serde(default = "default_notification_capacity")]
    pub notification_capacity: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            office_id: None,
            map_center: MAP_CENTER,
            map_zoom: MAP_ZOOM,

            earth_radius_km: EARTH_RADIUS_KM,
            strict_coordinates: false,

            min_route_points: MIN_ROUTE_POINTS,
            length_decimals: LENGTH_DECIMALS,
            require_route_description: false,
            point_line_color: POINT_LINE_COLOR.to_string(),
            freehand_line_color: FREEHAND_LINE_COLOR.to_string(),
            hint_dash_pattern: HINT_DASH_PATTERN,

            rearm_policy: default_rearm_policy(),
            route_edit_policy: default_route_edit_policy(),
            deselect_on_background_click: true,

            notification_capacity: NOTIFICATION_CAPACITY,
        }
    }
}

/// Serde-Default für `rearm_policy` (letzte Auswahl gewinnt).
fn default_rearm_policy() -> ConflictPolicy {
    ConflictPolicy::Replace
}

/// Serde-Default für `route_edit_policy`.
fn default_route_edit_policy() -> ConflictPolicy {
    ConflictPolicy::Reject
}

fn default_true() -> bool {
    true
}

fn default_notification_capacity() -> usize {
    NOTIFICATION_CAPACITY
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fiber_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fiber_map_editor.toml")
    }

    /// Effektive Mindestpunktzahl (nie unter 2).
    pub fn effective_min_route_points(&self) -> usize {
        self.min_route_points.max(MIN_ROUTE_POINTS)
    }
}
