//! Path-Controller für zentrale Event-Verarbeitung.

use super::{PathCommand, PathEditorState, PathIntent};

/// Orchestriert Host-Events und Handler auf den PathEditorState.
#[derive(Default)]
pub struct PathController;

impl PathController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut PathEditorState,
        intent: PathIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem PathEditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut PathEditorState,
        command: PathCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        let changes_spline = command.changes_spline();
        use super::handlers;

        match command {
            // === Topologie ===
            PathCommand::CreatePath { seed } => handlers::editing::create_path(state, seed),
            PathCommand::AddSegment { world_pos } => {
                handlers::editing::add_segment(state, world_pos)
            }
            PathCommand::SplitSegment {
                world_pos,
                segment_index,
            } => handlers::editing::split_segment(state, world_pos, segment_index),
            PathCommand::DeleteSegment { anchor_index } => {
                handlers::editing::delete_segment(state, anchor_index)
            }

            // === Punkte & Modi ===
            PathCommand::MovePoint { index, world_pos } => {
                handlers::editing::move_point(state, index, world_pos)
            }
            PathCommand::SetClosed { closed } => handlers::editing::set_closed(state, closed),
            PathCommand::SetAutoControl { enabled } => {
                handlers::editing::set_auto_control(state, enabled)
            }
            PathCommand::SetHoveredSegment { segment_index } => {
                handlers::editing::set_hovered_segment(state, segment_index)
            }
            PathCommand::RestoreState { state: restored } => {
                handlers::editing::restore_state(state, restored)?
            }

            // === Mesh ===
            PathCommand::RebuildRoadMesh => handlers::road::rebuild_road_mesh(state),

            // === History ===
            PathCommand::Undo => handlers::history::undo(state),
            PathCommand::Redo => handlers::history::redo(state),
        }

        if changes_spline && state.options.auto_update_road {
            handlers::road::rebuild_road_mesh(state);
        }

        Ok(())
    }
}
