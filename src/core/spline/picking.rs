//! Hit-Tests für Anker und Segmente gegen eine Weltposition.

use super::Spline;
use crate::shared::bezier_geometry::{distance_to_cubic_bezier, DISTANCE_SAMPLES};
use glam::Vec2;

impl Spline {
    /// Nächster Anker mit Abstand kleiner `max_distance`.
    pub fn nearest_anchor(&self, pos: Vec2, max_distance: f32) -> Option<usize> {
        let mut best = None;
        let mut best_distance = max_distance;
        for index in (0..self.points.len()).step_by(3) {
            let distance = pos.distance(self.points[index]);
            if distance < best_distance {
                best_distance = distance;
                best = Some(index);
            }
        }
        best
    }

    /// Nächstes Segment, dessen Kurve näher als `max_distance` an `pos` liegt.
    pub fn nearest_segment(&self, pos: Vec2, max_distance: f32) -> Option<usize> {
        let mut best = None;
        let mut best_distance = max_distance;
        for segment_index in 0..self.num_segments() {
            let distance =
                distance_to_cubic_bezier(pos, self.segment(segment_index), DISTANCE_SAMPLES);
            if distance < best_distance {
                best_distance = distance;
                best = Some(segment_index);
            }
        }
        best
    }
}
