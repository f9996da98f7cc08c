//! Arc-Length-Resampling: gleichmäßig verteilte Punkte entlang des Splines.

use super::Spline;
use crate::shared::bezier_geometry::{cubic_bezier, estimated_segment_length};
use glam::Vec2;

/// Parameter-Schritte pro Längeneinheit bei `resolution = 1`.
const DIVISIONS_PER_UNIT: f32 = 10.0;

impl Spline {
    /// Punkte im Abstand `spacing` entlang der Kurve, beginnend bei `self[0]`.
    ///
    /// Jedes Segment wird in `ceil(länge * resolution * 10)` gleich große
    /// Parameter-Schritte zerlegt. Beim Überschreiten von `spacing` wird vom
    /// aktuellen Sample um den Überschuss zurück Richtung Vorgänger
    /// interpoliert; der Überschuss wird ins nächste Intervall übertragen.
    ///
    /// Kosten wachsen linear mit Kurvenlänge und `resolution`.
    pub fn evenly_spaced_points(&self, spacing: f32, resolution: f32) -> Vec<Vec2> {
        let first = self.points[0];
        if !(spacing.is_finite() && spacing > 0.0) {
            log::warn!("Resampling mit ungültigem Abstand {} ignoriert", spacing);
            return vec![first];
        }

        let mut result = vec![first];
        let mut previous = first;
        let mut dist_since_last = 0.0f32;

        for segment_index in 0..self.num_segments() {
            let segment = self.segment(segment_index);
            let [p0, p1, p2, p3] = segment;

            let length = estimated_segment_length(segment);
            let divisions = (length * resolution * DIVISIONS_PER_UNIT).ceil().max(1.0) as usize;

            for step in 1..=divisions {
                let t = step as f32 / divisions as f32;
                let on_curve = cubic_bezier(p0, p1, p2, p3, t);
                dist_since_last += previous.distance(on_curve);

                while dist_since_last >= spacing {
                    let overshoot = dist_since_last - spacing;
                    let evenly_spaced =
                        on_curve + (previous - on_curve).normalize_or_zero() * overshoot;
                    result.push(evenly_spaced);

                    previous = evenly_spaced;
                    dist_since_last = overshoot;
                }
                previous = on_curve;
            }
        }

        result
    }

    /// `evenly_spaced_points` mit Standard-Auflösung 1.
    pub fn evenly_spaced_points_default(&self, spacing: f32) -> Vec<Vec2> {
        self.evenly_spaced_points(spacing, 1.0)
    }
}
