//! Automatische Kontrollpunkt-Platzierung aus den Anker-Positionen.

use super::Spline;

impl Spline {
    /// Leitet beide Kontrollpunkte des Ankers `anchor_index` aus den Nachbar-Ankern ab.
    ///
    /// Gemeinsame Tangentenrichtung aus den normierten Richtungen zu beiden
    /// Nachbarn, jeweils mit halbem Nachbar-Abstand skaliert. An offenen
    /// Enden fehlt ein Nachbar; dort greift `auto_set_start_and_end_controls`.
    pub(crate) fn auto_set_control_point(&mut self, anchor_index: usize) {
        let i = anchor_index as isize;
        let (Some(prev), Some(next)) = (self.neighbor_index(i - 3), self.neighbor_index(i + 3))
        else {
            return;
        };
        // Bei geschlossenen Splines existieren beide Kontrollpunkte immer
        let (Some(incoming), Some(outgoing)) =
            (self.neighbor_index(i - 1), self.neighbor_index(i + 1))
        else {
            return;
        };

        let anchor = self.points[anchor_index];
        let to_next = self.points[next] - anchor;
        let to_prev = self.points[prev] - anchor;

        let dir = (to_prev.normalize_or_zero() - to_next.normalize_or_zero()).normalize_or_zero();

        self.points[incoming] = anchor + dir * (to_prev.length() * 0.5);
        self.points[outgoing] = anchor - dir * (to_next.length() * 0.5);
    }

    /// Leitet alle Kontrollpunkte in der 7-Punkt-Nachbarschaft eines Ankers neu ab.
    pub(crate) fn auto_set_affected_control_points(&mut self, updated_anchor_index: usize) {
        let center = updated_anchor_index as isize;
        for i in [center - 3, center, center + 3] {
            if let Some(anchor) = self.neighbor_index(i) {
                self.auto_set_control_point(anchor);
            }
        }
        self.auto_set_start_and_end_controls();
    }

    /// Leitet sämtliche Kontrollpunkte aus den aktuellen Ankern ab.
    ///
    /// Reine Funktion der Anker-Positionen: zweimal hintereinander aufgerufen
    /// liefert sie identische Kontrollpunkte.
    pub fn auto_set_all_control_points(&mut self) {
        for anchor in (0..self.points.len()).step_by(3) {
            self.auto_set_control_point(anchor);
        }
        self.auto_set_start_and_end_controls();
    }

    /// Offene Enden: Kontrollpunkt in die Mitte zwischen End-Anker und innerem Nachbar-Anker.
    pub(crate) fn auto_set_start_and_end_controls(&mut self) {
        if self.closed {
            return;
        }
        let n = self.points.len();
        self.points[1] = (self.points[0] + self.points[3]) * 0.5;
        self.points[n - 2] = (self.points[n - 1] + self.points[n - 4]) * 0.5;
    }
}
