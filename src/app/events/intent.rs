use crate::core::SplineState;
use glam::Vec2;

/// Path-Intents: Eingaben aus Host/UI ohne direkte Mutationslogik.
///
/// Alle Positionen sind bereits in Weltkoordinaten aufgelöst.
#[derive(Debug, Clone)]
pub enum PathIntent {
    /// Neuen Pfad um `seed` anlegen (ersetzt den aktuellen)
    CreatePathRequested { seed: Vec2 },
    /// Cursor wurde bewegt (aktualisiert das gehoverte Segment)
    PointerMoved { world_pos: Vec2 },
    /// Punkt hinzufügen: gehovertes Segment teilen, sonst Segment anhängen
    AddPointRequested { world_pos: Vec2 },
    /// Anker unter dem Cursor löschen
    DeleteAnchorRequested { world_pos: Vec2 },
    /// Punkt-Handle wurde gezogen
    PointDragged { index: usize, world_pos: Vec2 },
    /// Pfad öffnen/schließen
    SetClosedRequested { closed: bool },
    /// Auto-Kontrollpunkte ein/aus
    SetAutoControlRequested { enabled: bool },
    /// Gespeicherten Zustand übernehmen
    RestoreStateRequested { state: SplineState },
    /// Straßen-Mesh aus dem aktuellen Pfad erzeugen
    RoadMeshRequested,
    /// Letzten Schritt rückgängig machen
    UndoRequested,
    /// Rückgängig gemachten Schritt wiederholen
    RedoRequested,
}
