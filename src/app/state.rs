//! Zustand einer Pfad-Bearbeitungssitzung.

use crate::app::history::EditHistory;
use crate::app::CommandLog;
use crate::core::Spline;
use crate::mesh::RoadMesh;
use crate::shared::PathOptions;
use glam::Vec2;

/// Hauptzustand einer Bearbeitungssitzung.
///
/// Besitzt den Spline exklusiv; alle Änderungen laufen über den `PathController`.
#[derive(Debug)]
pub struct PathEditorState {
    /// Der bearbeitete Pfad
    pub spline: Spline,
    /// Laufzeit-Optionen (Pick-Schwellen, Resampling, Mesh)
    pub options: PathOptions,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Segment unter dem Cursor (Ziel für „Punkt hinzufügen“)
    pub hovered_segment: Option<usize>,
    /// Zuletzt erzeugtes Straßen-Mesh
    pub road_mesh: Option<RoadMesh>,
    /// Textur-Wiederholungen passend zu `road_mesh`
    pub road_texture_repeat: i32,
}

impl PathEditorState {
    /// Neue Sitzung mit einem Pfad um `seed`.
    pub fn new(seed: Vec2, options: PathOptions) -> Self {
        let history = EditHistory::new_with_capacity(options.history_depth);
        Self {
            spline: Spline::new(seed),
            options,
            history,
            command_log: CommandLog::new(),
            hovered_segment: None,
            road_mesh: None,
            road_texture_repeat: 0,
        }
    }

    /// Gehovertes Segment, sofern es im aktuellen Spline noch existiert.
    pub fn valid_hovered_segment(&self) -> Option<usize> {
        self.hovered_segment
            .filter(|&segment| segment < self.spline.num_segments())
    }
}

impl Default for PathEditorState {
    fn default() -> Self {
        Self::new(Vec2::ZERO, PathOptions::default())
    }
}
