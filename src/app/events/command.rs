use crate::app::forms::{EntityForm, RouteForm};
use crate::app::state::SelectionEvent;
use crate::core::{EntityKind, ItemKind, PointLike};
use crate::shared::{DrawMode, EditorOptions, LayerHandle};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Zeichenmodus setzen und Adapter neu scharfschalten
    SetDrawMode { mode: DrawMode },
    /// Karten-Ansicht verlassen (alle offenen Workflows verwerfen)
    LeaveScreen,
    /// Platzierung einer Objektart scharfschalten
    ArmPlacement { kind: EntityKind },
    /// Klickposition als vorläufige Platzierung übernehmen
    CapturePlacementPosition { point: PointLike },
    /// Platzierung bestätigen
    ConfirmPlacement { form: EntityForm },
    /// Platzierung verwerfen
    CancelPlacement,
    /// Gezeichnete Linie als vorläufige Trasse übernehmen
    CaptureRoute { points: Vec<PointLike> },
    /// Vorläufige Trasse benennen und speichern
    SaveRoute { form: RouteForm },
    /// Vorläufige Trasse verwerfen
    CancelRoute,
    /// Stützpunkt-Bearbeitung einer Trasse starten
    BeginRouteEdit { route_index: usize },
    /// Neue Stützpunktliste einer Polyline übernehmen
    ApplyVertexEdit {
        handle: LayerHandle,
        points: Vec<PointLike>,
    },
    /// Stützpunkt-Bearbeitung beenden
    FinishRouteEdit,
    /// Selektions-Event einreihen
    QueueSelectionEvent { event: SelectionEvent },
    /// Eingereihte Selektions-Events abarbeiten
    ProcessSelectionEvents,
    /// Element per Index selektieren
    SelectItemAt { kind: ItemKind, index: usize },
    /// Selektion aufheben, falls sie genau dieses Element (per Index) ist
    ClearSelectionIfMatchesAt { kind: ItemKind, index: usize },
    /// Selektiertes Element löschen
    DeleteSelected,
    /// Optionen anwenden
    ApplyOptions { options: Box<EditorOptions> },
}

impl AppCommand {
    /// Stabiler Kurzname für Log und Statistik.
    pub fn label(&self) -> &'static str {
        match self {
            AppCommand::SetDrawMode { .. } => "set_draw_mode",
            AppCommand::LeaveScreen => "leave_screen",
            AppCommand::ArmPlacement { .. } => "arm_placement",
            AppCommand::CapturePlacementPosition { .. } => "capture_placement_position",
            AppCommand::ConfirmPlacement { .. } => "confirm_placement",
            AppCommand::CancelPlacement => "cancel_placement",
            AppCommand::CaptureRoute { .. } => "capture_route",
            AppCommand::SaveRoute { .. } => "save_route",
            AppCommand::CancelRoute => "cancel_route",
            AppCommand::BeginRouteEdit { .. } => "begin_route_edit",
            AppCommand::ApplyVertexEdit { .. } => "apply_vertex_edit",
            AppCommand::FinishRouteEdit => "finish_route_edit",
            AppCommand::QueueSelectionEvent { .. } => "queue_selection_event",
            AppCommand::ProcessSelectionEvents => "process_selection_events",
            AppCommand::SelectItemAt { .. } => "select_item_at",
            AppCommand::ClearSelectionIfMatchesAt { .. } => "clear_selection_if_matches_at",
            AppCommand::DeleteSelected => "delete_selected",
            AppCommand::ApplyOptions { .. } => "apply_options",
        }
    }
}
