//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::SelectionEvent;
use super::{AppCommand, AppIntent, AppState};
use crate::core::ItemKind;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DrawModeSelected { mode } => vec![AppCommand::SetDrawMode { mode }],
        AppIntent::LeaveScreenRequested => vec![AppCommand::LeaveScreen],
        AppIntent::PlacementToolSelected { kind } => vec![AppCommand::ArmPlacement { kind }],
        AppIntent::MapClicked { point } => map_click_commands(state, point),
        AppIntent::PlacementConfirmed { form } => vec![AppCommand::ConfirmPlacement { form }],
        AppIntent::PlacementCancelled => vec![AppCommand::CancelPlacement],
        AppIntent::DrawGestureCompleted { points } => vec![AppCommand::CaptureRoute { points }],
        AppIntent::RouteNameConfirmed { form } => vec![AppCommand::SaveRoute { form }],
        AppIntent::RouteNameCancelled => vec![AppCommand::CancelRoute],
        AppIntent::EditRouteRequested { index } => {
            vec![AppCommand::BeginRouteEdit { route_index: index }]
        }
        AppIntent::EditSelectedRouteRequested => {
            let index = state
                .selected()
                .filter(|item| item.kind == ItemKind::Route)
                .and_then(|item| state.registry.index_of(item));
            match index {
                Some(route_index) => vec![AppCommand::BeginRouteEdit { route_index }],
                None => {
                    log::warn!("Bearbeiten angefordert, aber keine Trasse selektiert");
                    vec![]
                }
            }
        }
        AppIntent::VertexEditCompleted { handle, points } => {
            vec![AppCommand::ApplyVertexEdit { handle, points }]
        }
        AppIntent::FinishEditRequested => vec![AppCommand::FinishRouteEdit],
        AppIntent::ItemClicked { item } => {
            selection_commands(vec![SelectionEvent::Select { item }])
        }
        AppIntent::PopupClosed { item } => {
            selection_commands(vec![SelectionEvent::PopupClosed { item }])
        }
        AppIntent::ItemAtIndexClicked { kind, index } => {
            vec![AppCommand::SelectItemAt { kind, index }]
        }
        AppIntent::PopupAtIndexClosed { kind, index } => {
            vec![AppCommand::ClearSelectionIfMatchesAt { kind, index }]
        }
        AppIntent::SelectionEventsQueued { events } => selection_commands(events),
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::ClearSelectionRequested => selection_commands(vec![SelectionEvent::Clear]),
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Kartenklick: Platzierung hat Vorrang, sonst Hintergrund-Klick für die Selektion.
fn map_click_commands(state: &AppState, point: crate::core::PointLike) -> Vec<AppCommand> {
    let placement = &state.editor.placement;
    if placement.pending.is_some() {
        log::debug!("Kartenklick ignoriert: Platzierungs-Formular ist offen");
        return vec![];
    }
    if placement.armed.is_some() {
        return vec![AppCommand::CapturePlacementPosition { point }];
    }
    if state.editor.draw_mode.is_drawing() {
        log::debug!("Kartenklick ignoriert: Zeichenmodus aktiv");
        return vec![];
    }
    selection_commands(vec![SelectionEvent::BackgroundClicked])
}

/// Reiht Selektions-Events ein und verarbeitet sie anschließend in Reihenfolge.
fn selection_commands(events: Vec<SelectionEvent>) -> Vec<AppCommand> {
    let mut commands: Vec<AppCommand> = events
        .into_iter()
        .map(|event| AppCommand::QueueSelectionEvent { event })
        .collect();
    commands.push(AppCommand::ProcessSelectionEvents);
    commands
}
