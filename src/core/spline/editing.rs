//! Topologie-Änderungen und Punkt-Verschiebung.
//!
//! Alle Operationen halten die Puffer-Invarianten (Punktanzahl, Anker auf
//! `3k`) ein. Nicht anwendbare Aufrufe sind No-Ops und liefern `false`.

use super::Spline;
use glam::Vec2;

/// Mindestanzahl Segmente, die nach einem Löschen übrig bleiben muss.
const MIN_SEGMENTS_AFTER_DELETE: usize = 1;

impl Spline {
    /// Hängt ein Segment mit neuem End-Anker an `anchor_pos` an (nur offene Splines).
    pub fn add_segment(&mut self, anchor_pos: Vec2) -> bool {
        if self.closed {
            log::warn!("Segment anhängen bei geschlossenem Spline ignoriert");
            return false;
        }

        let n = self.points.len();
        let mirrored = 2.0 * self.points[n - 1] - self.points[n - 2];
        self.points.push(mirrored);
        self.points.push((mirrored + anchor_pos) * 0.5);
        self.points.push(anchor_pos);

        if self.auto_control {
            self.auto_set_affected_control_points(self.points.len() - 1);
        }

        log::debug!("Segment angehängt → {} Segmente", self.num_segments());
        true
    }

    /// Teilt Segment `segment_index` an `split_pos` in zwei Segmente.
    ///
    /// Der neue Anker landet auf Index `3 * segment_index + 3`.
    /// Panics wenn `segment_index >= num_segments()`.
    pub fn split_segment(&mut self, split_pos: Vec2, segment_index: usize) {
        assert!(
            segment_index < self.num_segments(),
            "Segment-Index {} außerhalb von 0..{}",
            segment_index,
            self.num_segments()
        );

        let insert_at = segment_index * 3 + 2;
        self.points
            .splice(insert_at..insert_at, [Vec2::ZERO, split_pos, Vec2::ZERO]);

        let new_anchor = segment_index * 3 + 3;
        if self.closed || self.auto_control {
            self.auto_set_affected_control_points(new_anchor);
        } else {
            // Platzhalter ersetzen, manuelle Kontrollpunkte der Nachbarn bleiben
            self.auto_set_control_point(new_anchor);
        }

        log::debug!(
            "Segment {} geteilt → {} Segmente",
            segment_index,
            self.num_segments()
        );
    }

    /// Entfernt den Anker `anchor_index` samt seiner Kontrollpunkte.
    ///
    /// No-Op (`false`) wenn `anchor_index` kein Anker ist oder danach kein
    /// Segment übrig bliebe. Panics wenn der Index außerhalb des Puffers liegt.
    pub fn delete_segment(&mut self, anchor_index: usize) -> bool {
        let n = self.points.len();
        assert!(
            anchor_index < n,
            "Punkt-Index {} außerhalb von 0..{}",
            anchor_index,
            n
        );
        if !Self::is_anchor(anchor_index) {
            log::warn!("Löschen ignoriert: Index {} ist kein Anker", anchor_index);
            return false;
        }
        if self.num_segments() <= MIN_SEGMENTS_AFTER_DELETE {
            log::debug!("Löschen ignoriert: Spline hat nur noch ein Segment");
            return false;
        }

        if anchor_index == 0 {
            if self.closed {
                self.points[n - 1] = self.points[2];
            }
            self.points.drain(0..3);
        } else if anchor_index == n - 1 && !self.closed {
            self.points.truncate(n - 3);
        } else {
            self.points.drain(anchor_index - 1..anchor_index + 2);
        }

        if self.auto_control {
            self.auto_set_all_control_points();
        }

        log::debug!(
            "Anker {} gelöscht → {} Segmente",
            anchor_index,
            self.num_segments()
        );
        true
    }

    /// Verschiebt Punkt `index` nach `new_pos`.
    ///
    /// - Anker mit Auto-Modus: Nachbarschaft wird neu abgeleitet.
    /// - Anker ohne Auto-Modus: beide Kontrollpunkte wandern starr mit.
    /// - Kontrollpunkt ohne Auto-Modus: Gegenüber wird gespiegelt (Richtung,
    ///   nicht Länge).
    /// - Kontrollpunkt mit Auto-Modus: No-Op.
    ///
    /// Panics wenn `index >= num_points()`.
    pub fn move_point(&mut self, index: usize, new_pos: Vec2) -> bool {
        assert!(
            index < self.points.len(),
            "Punkt-Index {} außerhalb von 0..{}",
            index,
            self.points.len()
        );
        let is_anchor = Self::is_anchor(index);
        if !is_anchor && self.auto_control {
            return false;
        }

        let displacement = new_pos - self.points[index];
        self.points[index] = new_pos;

        if self.auto_control {
            self.auto_set_affected_control_points(index);
        } else if is_anchor {
            let i = index as isize;
            for neighbor in [i + 1, i - 1] {
                if let Some(control) = self.neighbor_index(neighbor) {
                    self.points[control] += displacement;
                }
            }
        } else {
            self.mirror_opposite_control(index, new_pos);
        }
        true
    }

    /// Hält den gegenüberliegenden Kontrollpunkt kollinear durch den gemeinsamen Anker.
    fn mirror_opposite_control(&mut self, control_index: usize, new_pos: Vec2) {
        let i = control_index as isize;
        let next_is_anchor = Self::is_anchor(control_index + 1);
        let (anchor, opposite) = if next_is_anchor {
            (i + 1, i + 2)
        } else {
            (i - 1, i - 2)
        };

        let (Some(anchor), Some(opposite)) =
            (self.neighbor_index(anchor), self.neighbor_index(opposite))
        else {
            return;
        };

        let anchor_pos = self.points[anchor];
        let handle_length = (self.points[opposite] - anchor_pos).length();
        let direction = (anchor_pos - new_pos).normalize_or_zero();
        self.points[opposite] = anchor_pos + direction * handle_length;
    }
}
