//! Straßen-Mesh: extrudiert gleichmäßig verteilte Pfadpunkte zu einem Band.

use glam::Vec2;

/// Dreiecks-Mesh eines Straßenbands.
///
/// Pro Eingabepunkt zwei Vertices (links, rechts), pro Quad zwei Dreiecke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadMesh {
    pub vertices: Vec<Vec2>,
    pub uvs: Vec<Vec2>,
    pub triangles: Vec<u32>,
}

impl RoadMesh {
    /// Baut das Band entlang `points` mit Gesamtbreite `road_width`.
    ///
    /// Bei `closed` wird zusätzlich das Quad vom letzten zum ersten Punkt erzeugt.
    /// Weniger als zwei Punkte ergeben ein leeres Mesh.
    pub fn build(points: &[Vec2], closed: bool, road_width: f32) -> Self {
        let n = points.len();
        if n < 2 {
            return Self::default();
        }

        let vertex_count = 2 * n;
        let quad_count = if closed { n } else { n - 1 };
        let mut mesh = Self {
            vertices: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(quad_count * 6),
        };
        let half_width = road_width * 0.5;

        for (i, &point) in points.iter().enumerate() {
            let has_next = i + 1 < n || closed;
            let has_prev = i > 0 || closed;

            let mut forward = Vec2::ZERO;
            if has_next {
                forward += points[(i + 1) % n] - point;
            }
            if has_prev {
                forward += point - points[(i + n - 1) % n];
            }
            let forward = forward.normalize_or_zero();
            let left = forward.perp();

            mesh.vertices.push(point + left * half_width);
            mesh.vertices.push(point - left * half_width);

            // v läuft 1 → 0 → 1, damit die Textur an beiden Enden nahtlos ist
            let completion = i as f32 / (n - 1) as f32;
            let v = (2.0 * completion - 1.0).abs();
            mesh.uvs.push(Vec2::new(0.0, v));
            mesh.uvs.push(Vec2::new(1.0, v));

            if has_next {
                let base = (2 * i) as u32;
                let wrap = |offset: u32| (base + offset) % vertex_count as u32;
                mesh.triangles
                    .extend_from_slice(&[base, wrap(2), base + 1, base + 1, wrap(2), wrap(3)]);
            }
        }

        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}

/// Anzahl Textur-Wiederholungen entlang der Straße.
pub fn texture_repeat(tiling: f32, point_count: usize, spacing: f32) -> i32 {
    (tiling * point_count as f32 * spacing * 0.05).round() as i32
}
