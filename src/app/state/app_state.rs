use crate::app::adapter::AdapterCommand;
use crate::app::notifications::Notifications;
use crate::app::persistence::SyncRequest;
use crate::app::CommandLog;
use crate::core::{EntityRegistry, ItemRef};
use crate::shared::EditorOptions;
use std::collections::VecDeque;
use std::path::PathBuf;

use super::{EditorState, SelectionState, UiState};

/// Hauptzustand des Karten-Editors (eine Büro-Karte)
pub struct AppState {
    /// Alle platzierten Objekte und Trassen
    pub registry: EntityRegistry,
    /// Zeichenmodus, Platzierung, Trassen-Erfassung und -Bearbeitung
    pub editor: EditorState,
    /// Exklusive Selektion inkl. Event-Queue
    pub selection: SelectionState,
    /// Dialog-Zustände
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ziel für geänderte Optionen (None = nicht persistieren)
    pub options_path: Option<PathBuf>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Noch nicht an den Karten-Adapter übergebene Befehle
    pub adapter_outbox: Vec<AdapterCommand>,
    /// Noch nicht an das Backend gesendete Änderungen
    pub sync_queue: VecDeque<SyncRequest>,
    /// Benachrichtigungen für den Host
    pub notifications: Notifications,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            registry: EntityRegistry::new(),
            editor: EditorState::new(),
            selection: SelectionState::new(),
            ui: UiState::new(),
            notifications: Notifications::new(options.notification_capacity),
            options,
            options_path: None,
            command_log: CommandLog::new(),
            adapter_outbox: Vec::new(),
            sync_queue: VecDeque::new(),
        }
    }

    /// Aktuelle Selektion.
    pub fn selected(&self) -> Option<ItemRef> {
        self.selection.current
    }

    /// Gibt die Anzahl aller Objekte und Trassen zurück (für UI-Anzeige)
    pub fn item_count(&self) -> usize {
        self.registry.total_count()
    }

    /// Reiht einen Befehl an den Karten-Adapter ein.
    pub fn push_adapter(&mut self, command: AdapterCommand) {
        self.adapter_outbox.push(command);
    }

    /// Reiht eine Backend-Anfrage ein.
    pub fn push_sync(&mut self, request: SyncRequest) {
        self.sync_queue.push_back(request);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
