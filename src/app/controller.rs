//! Application Controller für zentrale Event-Verarbeitung.

use super::adapter::MapAdapter;
use super::persistence::{SyncReport, TopologyApi};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::MapScene;

/// Orchestriert UI-/Adapter-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Ein ungültiger Punkt bricht die restlichen Commands des Intents ab.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        log::trace!("Command: {}", command.label());
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichenmodus & Ansicht ===
            AppCommand::SetDrawMode { mode } => handlers::view::set_draw_mode(state, mode),
            AppCommand::LeaveScreen => handlers::view::leave_screen(state),

            // === Platzierung ===
            AppCommand::ArmPlacement { kind } => handlers::placement::arm(state, kind),
            AppCommand::CapturePlacementPosition { point } => {
                handlers::placement::capture_position(state, &point)?
            }
            AppCommand::ConfirmPlacement { form } => handlers::placement::confirm(state, &form)?,
            AppCommand::CancelPlacement => handlers::placement::cancel(state),

            // === Trassen ===
            AppCommand::CaptureRoute { points } => handlers::route::capture(state, &points)?,
            AppCommand::SaveRoute { form } => handlers::route::save(state, &form)?,
            AppCommand::CancelRoute => handlers::route::cancel(state),
            AppCommand::BeginRouteEdit { route_index } => {
                handlers::route::begin_edit(state, route_index)
            }
            AppCommand::ApplyVertexEdit { handle, points } => {
                handlers::route::apply_vertex_edit(state, handle, &points)?
            }
            AppCommand::FinishRouteEdit => handlers::route::finish_edit(state),

            // === Selektion ===
            AppCommand::QueueSelectionEvent { event } => {
                handlers::selection::queue_event(state, event)
            }
            AppCommand::ProcessSelectionEvents => handlers::selection::process_events(state),
            AppCommand::SelectItemAt { kind, index } => {
                handlers::selection::select_at(state, kind, index)
            }
            AppCommand::ClearSelectionIfMatchesAt { kind, index } => {
                handlers::selection::clear_if_matches_at(state, kind, index)
            }
            AppCommand::DeleteSelected => handlers::selection::delete_selected(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
        }

        Ok(())
    }

    /// Übergibt alle ausstehenden Adapter-Befehle in Reihenfolge an den Karten-Adapter.
    pub fn flush_adapter(&mut self, state: &mut AppState, adapter: &mut dyn MapAdapter) -> usize {
        let commands = std::mem::take(&mut state.adapter_outbox);
        for command in &commands {
            command.dispatch(adapter);
        }
        commands.len()
    }

    /// Sendet ausstehende Änderungen an das Backend.
    pub fn sync(
        &mut self,
        state: &mut AppState,
        api: &mut dyn TopologyApi,
    ) -> anyhow::Result<SyncReport> {
        Ok(super::use_cases::sync::sync(state, api))
    }

    /// Lädt die Karte des konfigurierten Büros neu aus dem Backend.
    pub fn load_office(
        &mut self,
        state: &mut AppState,
        api: &mut dyn TopologyApi,
    ) -> anyhow::Result<usize> {
        super::use_cases::office::load_office(state, api)
    }

    /// Baut die Map-Szene aus dem aktuellen State.
    pub fn build_map_scene(&self, state: &AppState) -> MapScene {
        render_scene::build(state)
    }
}
