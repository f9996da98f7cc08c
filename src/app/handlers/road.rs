//! Handler für das Straßen-Mesh.

use crate::app::PathEditorState;
use crate::mesh::{texture_repeat, RoadMesh};

/// Resampelt den Pfad mit den aktuellen Optionen und baut das Mesh neu.
pub fn rebuild_road_mesh(state: &mut PathEditorState) {
    let options = &state.options;
    let points = state
        .spline
        .evenly_spaced_points(options.spacing, options.resolution);
    let mesh = RoadMesh::build(&points, state.spline.is_closed(), options.road_width);

    state.road_texture_repeat = texture_repeat(options.road_tiling, points.len(), options.spacing);
    log::debug!(
        "Straßen-Mesh: {} Punkte, {} Dreiecke",
        points.len(),
        mesh.triangle_count()
    );
    state.road_mesh = Some(mesh);
}
