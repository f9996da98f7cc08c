use crate::core::SplineState;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    /// Pfad neu anlegen
    CreatePath { seed: Vec2 },
    /// Segment mit neuem End-Anker anhängen
    AddSegment { world_pos: Vec2 },
    /// Segment an Position teilen
    SplitSegment { world_pos: Vec2, segment_index: usize },
    /// Anker samt Kontrollpunkten löschen
    DeleteSegment { anchor_index: usize },
    /// Punkt verschieben
    MovePoint { index: usize, world_pos: Vec2 },
    /// Pfad öffnen/schließen
    SetClosed { closed: bool },
    /// Auto-Kontrollpunkte umschalten
    SetAutoControl { enabled: bool },
    /// Gehovertes Segment setzen (kein Undo-Schritt)
    SetHoveredSegment { segment_index: Option<usize> },
    /// Zustand wiederherstellen (schlägt bei ungültigem Zustand fehl)
    RestoreState { state: SplineState },
    /// Straßen-Mesh neu aufbauen
    RebuildRoadMesh,
    /// Undo
    Undo,
    /// Redo
    Redo,
}

impl PathCommand {
    /// Ob der Command den Spline verändern kann (inkl. Undo/Redo).
    pub fn changes_spline(&self) -> bool {
        !matches!(
            self,
            Self::SetHoveredSegment { .. } | Self::RebuildRoadMesh
        )
    }
}
