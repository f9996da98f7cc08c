//! Reine Geometrie-Funktionen für kubische Bézier-Segmente.
//!
//! Layer-neutral: wird vom Spline-Modell, vom Picking und vom Mesh-Aufbau
//! gleichermaßen genutzt.

use glam::Vec2;

/// Anzahl der Polyline-Stücke für die Abstandsberechnung Punkt ↔ Segment.
pub const DISTANCE_SAMPLES: usize = 32;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Schnelle Längenschätzung eines Segments.
///
/// Sehnenlänge plus halbe Länge des Kontrollpolygons. Liegt zwischen
/// Sehne und Kontrollpolygon und ist keine exakte Bogenlänge.
pub fn estimated_segment_length(segment: [Vec2; 4]) -> f32 {
    let [p0, p1, p2, p3] = segment;
    let control_net_length = p0.distance(p1) + p1.distance(p2) + p2.distance(p3);
    p0.distance(p3) + control_net_length * 0.5
}

/// Kürzester Abstand von `point` zur Strecke `a`–`b`.
pub fn distance_to_line_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Approximierter Abstand von `point` zu einem kubischen Segment.
///
/// Das Segment wird in `samples` gleichmäßige Parameter-Schritte zerlegt und
/// der Abstand zur entstehenden Polyline bestimmt.
pub fn distance_to_cubic_bezier(point: Vec2, segment: [Vec2; 4], samples: usize) -> f32 {
    let [p0, p1, p2, p3] = segment;
    let samples = samples.max(1);
    let mut prev = p0;
    let mut best = f32::INFINITY;
    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let current = cubic_bezier(p0, p1, p2, p3, t);
        best = best.min(distance_to_line_segment(point, prev, current));
        prev = current;
    }
    best
}
