//! Handler für Pfad-Bearbeitung (Topologie, Punkte, Modi).
//!
//! Jeder Handler nimmt den Undo-Snapshot VOR der Mutation auf und behält
//! ihn nur, wenn sich der Spline tatsächlich geändert hat.

use crate::app::history::Snapshot;
use crate::app::PathEditorState;
use crate::core::{Spline, SplineState};
use anyhow::Context;
use glam::Vec2;

/// Führt `edit` aus und zeichnet bei Erfolg einen Undo-Schritt auf.
fn with_undo(state: &mut PathEditorState, edit: impl FnOnce(&mut Spline) -> bool) -> bool {
    let snapshot = Snapshot::from_state(state);
    let changed = edit(&mut state.spline);
    if changed {
        state.history.record_snapshot(snapshot);
    }
    changed
}

/// Ersetzt den Pfad durch ein neues Segment um `seed`.
pub fn create_path(state: &mut PathEditorState, seed: Vec2) {
    with_undo(state, |spline| {
        *spline = Spline::new(seed);
        true
    });
    state.hovered_segment = None;
    log::info!("Neuer Pfad um ({:.2}, {:.2})", seed.x, seed.y);
}

pub fn add_segment(state: &mut PathEditorState, world_pos: Vec2) {
    with_undo(state, |spline| spline.add_segment(world_pos));
}

pub fn split_segment(state: &mut PathEditorState, world_pos: Vec2, segment_index: usize) {
    if segment_index >= state.spline.num_segments() {
        log::warn!("Teilen ignoriert: Segment {} existiert nicht", segment_index);
        return;
    }
    with_undo(state, |spline| {
        spline.split_segment(world_pos, segment_index);
        true
    });
}

pub fn delete_segment(state: &mut PathEditorState, anchor_index: usize) {
    if anchor_index >= state.spline.num_points() {
        log::warn!("Löschen ignoriert: Punkt {} existiert nicht", anchor_index);
        return;
    }
    if with_undo(state, |spline| spline.delete_segment(anchor_index)) {
        state.hovered_segment = None;
    }
}

pub fn move_point(state: &mut PathEditorState, index: usize, world_pos: Vec2) {
    if index >= state.spline.num_points() {
        log::warn!("Verschieben ignoriert: Punkt {} existiert nicht", index);
        return;
    }
    with_undo(state, |spline| spline.move_point(index, world_pos));
}

pub fn set_closed(state: &mut PathEditorState, closed: bool) {
    with_undo(state, |spline| spline.set_closed(closed));
}

pub fn set_auto_control(state: &mut PathEditorState, enabled: bool) {
    with_undo(state, |spline| spline.set_auto_control(enabled));
}

/// Gehovertes Segment übernehmen (kein Undo-Schritt).
pub fn set_hovered_segment(state: &mut PathEditorState, segment_index: Option<usize>) {
    state.hovered_segment = segment_index;
}

/// Übernimmt einen gespeicherten Zustand; ungültige Zustände lassen den Pfad unverändert.
pub fn restore_state(state: &mut PathEditorState, restored: SplineState) -> anyhow::Result<()> {
    let spline =
        Spline::from_state(restored).context("Gespeicherter Pfad-Zustand ist ungültig")?;
    with_undo(state, |current| {
        *current = spline;
        true
    });
    state.hovered_segment = None;
    log::info!(
        "Pfad-Zustand übernommen ({} Segmente)",
        state.spline.num_segments()
    );
    Ok(())
}
