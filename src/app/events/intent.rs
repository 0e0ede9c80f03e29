use crate::app::forms::{EntityForm, RouteForm};
use crate::app::state::SelectionEvent;
use crate::core::{EntityKind, ItemKind, ItemRef, PointLike};
use crate::shared::{DrawMode, EditorOptions, LayerHandle};
use serde::Deserialize;

/// App-Intent Events.
/// Intents sind Eingaben aus UI, Karten-Adapter oder System ohne direkte Mutationslogik.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppIntent {
    /// Zeichenmodus in der Toolbar gewählt
    DrawModeSelected { mode: DrawMode },
    /// Karten-Ansicht wird verlassen
    LeaveScreenRequested,
    /// "Hinzufügen"-Button einer Objektart gedrückt
    PlacementToolSelected { kind: EntityKind },
    /// Roher Klick auf die Karte
    MapClicked { point: PointLike },
    /// Platzierungs-Formular abgeschickt
    PlacementConfirmed { form: EntityForm },
    /// Platzierungs-Formular abgebrochen
    PlacementCancelled,
    /// Karten-Adapter meldet eine fertig gezeichnete Linie
    DrawGestureCompleted { points: Vec<PointLike> },
    /// Trassen-Namensdialog abgeschickt
    RouteNameConfirmed { form: RouteForm },
    /// Trassen-Namensdialog abgebrochen
    RouteNameCancelled,
    /// Stützpunkt-Bearbeitung einer Trasse (per Index) starten
    EditRouteRequested { index: usize },
    /// Stützpunkt-Bearbeitung der selektierten Trasse starten
    EditSelectedRouteRequested,
    /// Karten-Adapter meldet geänderte Stützpunkte einer Polyline
    VertexEditCompleted {
        handle: LayerHandle,
        points: Vec<PointLike>,
    },
    /// Bearbeitung beenden
    FinishEditRequested,
    /// Marker oder Polyline angeklickt
    ItemClicked { item: ItemRef },
    /// Element per Listen-Index angeklickt
    ItemAtIndexClicked { kind: ItemKind, index: usize },
    /// Detail-Popup eines Elements geschlossen
    PopupClosed { item: ItemRef },
    /// Detail-Popup per Listen-Index geschlossen
    PopupAtIndexClosed { kind: ItemKind, index: usize },
    /// Mehrere Selektions-Events in Ankunftsreihenfolge
    SelectionEventsQueued { events: Vec<SelectionEvent> },
    /// Selektiertes Element löschen
    DeleteSelectedRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: Box<EditorOptions> },
}
