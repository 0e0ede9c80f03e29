use crate::core::ItemRef;
use serde::Deserialize;
use std::collections::VecDeque;

/// Selektionsänderung in Ankunftsreihenfolge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// Element angeklickt
    Select { item: ItemRef },
    /// Detail-Popup eines Elements geschlossen
    PopupClosed { item: ItemRef },
    /// Klick auf leere Kartenfläche
    BackgroundClicked,
    /// Selektion explizit aufheben
    Clear,
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektiertes Element (höchstens eins)
    pub current: Option<ItemRef>,
    /// Noch nicht verarbeitete Selektions-Events
    pub queue: VecDeque<SelectionEvent>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ist genau dieses Element selektiert?
    pub fn is_selected(&self, item: ItemRef) -> bool {
        self.current == Some(item)
    }
}
