use crate::app::errors::ValidationErrors;
use crate::core::EntityKind;

/// Zustand des Bestätigungsformulars einer Platzierung
#[derive(Debug, Clone, Default)]
pub struct PlacementDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Objektart des Formulars
    pub kind: Option<EntityKind>,
    /// Feldfehler der letzten Bestätigung
    pub errors: ValidationErrors,
}

impl PlacementDialogState {
    /// Öffnet den Dialog für eine Objektart mit leeren Fehlern.
    pub fn open(&mut self, kind: EntityKind) {
        self.visible = true;
        self.kind = Some(kind);
        self.errors = ValidationErrors::new();
    }

    /// Schließt den Dialog.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Zustand des Trassen-Benennungsdialogs
#[derive(Debug, Clone, Default)]
pub struct RouteDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Feldfehler der letzten Speicherung
    pub errors: ValidationErrors,
}

impl RouteDialogState {
    pub fn open(&mut self) {
        self.visible = true;
        self.errors = ValidationErrors::new();
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Platzierungs-Formular
    pub placement_dialog: PlacementDialogState,
    /// Trassen-Namensdialog
    pub route_dialog: RouteDialogState,
    /// Hinweis auf Tarif-Upgrade (Backend meldet Glasfaser-Längenlimit)
    pub show_upgrade_prompt: bool,
    /// Der Host soll die Karten-Ansicht verlassen
    pub left_screen: bool,
}

impl UiState {
    /// Erstellt den UI-State mit geschlossenen Dialogen.
    pub fn new() -> Self {
        Self::default()
    }
}
