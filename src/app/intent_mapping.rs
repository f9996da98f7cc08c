//! Mapping von Host-Intents auf mutierende Path-Commands.

use super::{PathCommand, PathEditorState, PathIntent};
use crate::core::Spline;

/// Übersetzt einen `PathIntent` in eine Sequenz ausführbarer `PathCommand`s.
pub fn map_intent_to_commands(state: &PathEditorState, intent: PathIntent) -> Vec<PathCommand> {
    match intent {
        PathIntent::CreatePathRequested { seed } => vec![PathCommand::CreatePath { seed }],
        PathIntent::PointerMoved { world_pos } => {
            let segment_index = state
                .spline
                .nearest_segment(world_pos, state.options.segment_pick_threshold);
            if segment_index == state.hovered_segment {
                Vec::new()
            } else {
                vec![PathCommand::SetHoveredSegment { segment_index }]
            }
        }
        PathIntent::AddPointRequested { world_pos } => {
            if let Some(segment_index) = state.valid_hovered_segment() {
                vec![PathCommand::SplitSegment {
                    world_pos,
                    segment_index,
                }]
            } else if !state.spline.is_closed() {
                vec![PathCommand::AddSegment { world_pos }]
            } else {
                log::debug!("Punkt hinzufügen: geschlossener Pfad ohne gehovertes Segment");
                Vec::new()
            }
        }
        PathIntent::DeleteAnchorRequested { world_pos } => {
            match state
                .spline
                .nearest_anchor(world_pos, state.options.anchor_pick_radius())
            {
                Some(anchor_index) => vec![PathCommand::DeleteSegment { anchor_index }],
                None => Vec::new(),
            }
        }
        PathIntent::PointDragged { index, world_pos } => {
            if index >= state.spline.num_points() {
                log::warn!(
                    "Punkt-Index {} außerhalb von 0..{} ignoriert",
                    index,
                    state.spline.num_points()
                );
                return Vec::new();
            }
            // Kontrollpunkte sind nur greifbar, wenn der Host sie anzeigt
            if !Spline::is_anchor(index) && !state.options.show_control_points {
                return Vec::new();
            }
            if state.spline[index] == world_pos {
                return Vec::new();
            }
            vec![PathCommand::MovePoint { index, world_pos }]
        }
        PathIntent::SetClosedRequested { closed } => {
            if closed == state.spline.is_closed() {
                Vec::new()
            } else {
                vec![PathCommand::SetClosed { closed }]
            }
        }
        PathIntent::SetAutoControlRequested { enabled } => {
            if enabled == state.spline.is_auto_control() {
                Vec::new()
            } else {
                vec![PathCommand::SetAutoControl { enabled }]
            }
        }
        PathIntent::RestoreStateRequested { state } => vec![PathCommand::RestoreState { state }],
        PathIntent::RoadMeshRequested => vec![PathCommand::RebuildRoadMesh],
        PathIntent::UndoRequested => vec![PathCommand::Undo],
        PathIntent::RedoRequested => vec![PathCommand::Redo],
    }
}

#[cfg(test)]
mod tests;
