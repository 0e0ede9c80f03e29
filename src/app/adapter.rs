//! Schnittstelle zum Karten-Adapter (Rendering-/Zeichen-Bibliothek des Hosts).
//!
//! Use-Cases schreiben `AdapterCommand`s in die Outbox des `AppState`;
//! der Host leert sie über `AppController::flush_adapter` in seine
//! `MapAdapter`-Implementierung.

use crate::core::GeoPoint;
use crate::shared::{DrawConfig, DrawMode, LayerHandle};
use serde::Serialize;

/// Befehl an den Karten-Adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdapterCommand {
    /// Zeichenfunktion passend zum Modus (neu) scharfschalten
    SetDrawMode {
        mode: DrawMode,
        config: Option<DrawConfig>,
    },
    /// Trassen-Polyline anzeigen bzw. aktualisieren
    ShowRoute {
        handle: LayerHandle,
        points: Vec<GeoPoint>,
    },
    /// Trassen-Polyline entfernen
    RemoveRoute { handle: LayerHandle },
    /// Stützpunkt-Bearbeitung einer Polyline aktivieren
    EnableVertexEdit { handle: LayerHandle },
    /// Stützpunkt-Bearbeitung einer Polyline deaktivieren
    DisableVertexEdit { handle: LayerHandle },
}

impl AdapterCommand {
    /// Führt den Befehl auf einem Adapter aus.
    pub fn dispatch(&self, adapter: &mut dyn MapAdapter) {
        match self {
            AdapterCommand::SetDrawMode { mode, config } => {
                adapter.set_draw_mode(*mode, config.as_ref())
            }
            AdapterCommand::ShowRoute { handle, points } => adapter.show_route(*handle, points),
            AdapterCommand::RemoveRoute { handle } => adapter.remove_route(*handle),
            AdapterCommand::EnableVertexEdit { handle } => adapter.enable_vertex_edit(*handle),
            AdapterCommand::DisableVertexEdit { handle } => adapter.disable_vertex_edit(*handle),
        }
    }
}

/// Fähigkeiten der Karten-Bibliothek, die der Editor ansteuert.
///
/// Rückmeldungen (Klick, fertige Geste, Stützpunkt-Änderung) kommen als
/// `AppIntent`s zurück.
pub trait MapAdapter {
    /// Zeichenmodus setzen; `config` ist `None` bei `Disabled`.
    fn set_draw_mode(&mut self, mode: DrawMode, config: Option<&DrawConfig>);
    /// Polyline anzeigen.
    fn show_route(&mut self, handle: LayerHandle, points: &[GeoPoint]);
    /// Polyline entfernen.
    fn remove_route(&mut self, handle: LayerHandle);
    /// Stützpunkt-Bearbeitung aktivieren.
    fn enable_vertex_edit(&mut self, handle: LayerHandle);
    /// Stützpunkt-Bearbeitung deaktivieren.
    fn disable_vertex_edit(&mut self, handle: LayerHandle);
}

/// Adapter ohne Karte: zeichnet alle Aufrufe auf (Tests, Headless-Binary).
#[derive(Debug, Clone, Default)]
pub struct RecordingMapAdapter {
    /// Alle empfangenen Befehle in Reihenfolge
    pub calls: Vec<AdapterCommand>,
}

impl RecordingMapAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zuletzt gesetzter Zeichenmodus.
    pub fn current_draw_mode(&self) -> DrawMode {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                AdapterCommand::SetDrawMode { mode, .. } => Some(*mode),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl MapAdapter for RecordingMapAdapter {
    fn set_draw_mode(&mut self, mode: DrawMode, config: Option<&DrawConfig>) {
        self.calls.push(AdapterCommand::SetDrawMode {
            mode,
            config: config.cloned(),
        });
    }

    fn show_route(&mut self, handle: LayerHandle, points: &[GeoPoint]) {
        self.calls.push(AdapterCommand::ShowRoute {
            handle,
            points: points.to_vec(),
        });
    }

    fn remove_route(&mut self, handle: LayerHandle) {
        self.calls.push(AdapterCommand::RemoveRoute { handle });
    }

    fn enable_vertex_edit(&mut self, handle: LayerHandle) {
        self.calls.push(AdapterCommand::EnableVertexEdit { handle });
    }

    fn disable_vertex_edit(&mut self, handle: LayerHandle) {
        self.calls.push(AdapterCommand::DisableVertexEdit { handle });
    }
}
