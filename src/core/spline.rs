//! Das zentrale Spline-Modell: kubische Bézier-Segmente mit geteilten Ankern.
//!
//! Punkt-Puffer-Layout: `[A, C, C, A, C, C, A, ...]`. Anker liegen auf
//! Indizes `≡ 0 (mod 3)`, dazwischen je zwei Kontrollpunkte.
//! Offen: `3k + 1` Punkte, geschlossen: `3k` Punkte (die letzten beiden
//! Kontrollpunkte überbrücken zurück zum ersten Anker).

mod auto_control;
mod editing;
mod picking;
mod resample;


use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Mindestanzahl Punkte eines geschlossenen Splines, damit er geöffnet werden kann.
const MIN_POINTS_TO_OPEN: usize = 6;

/// Rolle eines Punkts im Puffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    /// Punkt liegt auf der Kurve
    Anchor,
    /// Steuert die Tangente am benachbarten Anker
    Control,
}

/// Serialisierbarer Zustand eines Splines, wie ihn ein Host 1:1 speichern kann.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineState {
    pub points: Vec<Vec2>,
    pub closed: bool,
    pub auto_control: bool,
}

/// Bearbeitbarer Bézier-Pfad.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    points: Vec<Vec2>,
    closed: bool,
    auto_control: bool,
}

impl Spline {
    /// Erzeugt ein einzelnes offenes Segment symmetrisch um `seed`.
    ///
    /// Auto-Kontrollpunkte sind aktiv, die Start-Kontrollpunkte werden
    /// aber nicht neu abgeleitet.
    pub fn new(seed: Vec2) -> Self {
        Self {
            points: vec![
                seed + Vec2::new(-1.0, 0.0),
                seed + Vec2::new(-0.5, 0.5),
                seed + Vec2::new(0.5, -0.5),
                seed + Vec2::new(1.0, 0.0),
            ],
            closed: false,
            auto_control: true,
        }
    }

    /// Stellt einen Spline aus einem gespeicherten Zustand wieder her.
    ///
    /// Prüft Punktanzahl und Mindestgröße; Kontrollpunkte werden unverändert übernommen.
    pub fn from_state(state: SplineState) -> anyhow::Result<Self> {
        let n = state.points.len();
        if state.closed {
            if n < 3 || n % 3 != 0 {
                anyhow::bail!(
                    "Geschlossener Spline braucht 3k Punkte (k >= 1), erhalten: {}",
                    n
                );
            }
        } else if n < 4 || n % 3 != 1 {
            anyhow::bail!("Offener Spline braucht 3k+1 Punkte (k >= 1), erhalten: {}", n);
        }
        if let Some(i) = state.points.iter().position(|p| !p.is_finite()) {
            anyhow::bail!("Punkt {} ist nicht endlich", i);
        }
        Ok(Self {
            points: state.points,
            closed: state.closed,
            auto_control: state.auto_control,
        })
    }

    /// Liefert eine Kopie des Zustands zum Speichern.
    pub fn state(&self) -> SplineState {
        SplineState {
            points: self.points.clone(),
            closed: self.closed,
            auto_control: self.auto_control,
        }
    }

    // ── Lesende Zugriffe ────────────────────────────────────────────

    /// Anzahl aller Punkte (Anker + Kontrollpunkte).
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der kubischen Segmente.
    pub fn num_segments(&self) -> usize {
        self.points.len() / 3
    }

    /// Read-only Sicht auf den Punkt-Puffer.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_auto_control(&self) -> bool {
        self.auto_control
    }

    pub fn is_anchor(index: usize) -> bool {
        index % 3 == 0
    }

    /// Rolle des Punkts an `index`.
    pub fn role(&self, index: usize) -> PointRole {
        assert!(
            index < self.points.len(),
            "Punkt-Index {} außerhalb von 0..{}",
            index,
            self.points.len()
        );
        if Self::is_anchor(index) {
            PointRole::Anchor
        } else {
            PointRole::Control
        }
    }

    /// Alle Anker in Pufferreihenfolge.
    pub fn anchors(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().step_by(3).copied()
    }

    /// Die vier Punkte von Segment `segment_index`: Anker, Kontrollpunkt, Kontrollpunkt, Anker.
    ///
    /// Panics wenn `segment_index >= num_segments()`.
    pub fn segment(&self, segment_index: usize) -> [Vec2; 4] {
        assert!(
            segment_index < self.num_segments(),
            "Segment-Index {} außerhalb von 0..{}",
            segment_index,
            self.num_segments()
        );
        let base = segment_index * 3;
        [
            self.points[base],
            self.points[base + 1],
            self.points[base + 2],
            self.points[self.wrap(base as isize + 3)],
        ]
    }

    // ── Modus-Umschaltung ───────────────────────────────────────────

    /// Öffnet oder schließt den Pfad. Gibt `true` zurück, wenn sich etwas geändert hat.
    ///
    /// Ein geschlossenes Einzelsegment bleibt geschlossen (`false`).
    pub fn set_closed(&mut self, closed: bool) -> bool {
        if self.closed == closed {
            return false;
        }
        // Ein geschlossenes Einzelsegment (3 Punkte) hat offen keine 3k+1-Form
        if !closed && self.points.len() < MIN_POINTS_TO_OPEN {
            log::warn!(
                "Öffnen ignoriert: geschlossener Spline mit nur {} Punkten",
                self.points.len()
            );
            return false;
        }
        self.closed = closed;

        if closed {
            let n = self.points.len();
            let bridge_out = 2.0 * self.points[n - 1] - self.points[n - 2];
            let bridge_in = 2.0 * self.points[0] - self.points[1];
            self.points.push(bridge_out);
            self.points.push(bridge_in);

            if self.auto_control {
                let old_last_anchor = self.points.len() - 3;
                self.auto_set_affected_control_points(0);
                self.auto_set_affected_control_points(old_last_anchor);
            }
        } else {
            let n = self.points.len();
            self.points.truncate(n - 2);

            if self.auto_control {
                self.auto_set_start_and_end_controls();
            }
        }

        log::debug!(
            "Spline {} ({} Punkte)",
            if closed { "geschlossen" } else { "geöffnet" },
            self.points.len()
        );
        true
    }

    /// Schaltet die automatische Kontrollpunkt-Platzierung um.
    ///
    /// Beim Einschalten werden sofort alle Kontrollpunkte neu abgeleitet.
    pub fn set_auto_control(&mut self, enabled: bool) -> bool {
        if self.auto_control == enabled {
            return false;
        }
        self.auto_control = enabled;
        if enabled {
            self.auto_set_all_control_points();
        }
        log::debug!("Auto-Kontrollpunkte: {}", enabled);
        true
    }

    // ── Index-Helfer ────────────────────────────────────────────────

    /// Zirkulärer Index, unabhängig vom Modus.
    fn wrap(&self, index: isize) -> usize {
        index.rem_euclid(self.points.len() as isize) as usize
    }

    /// Nachbar-Index: geschlossen zirkulär, offen nur innerhalb des Puffers.
    fn neighbor_index(&self, index: isize) -> Option<usize> {
        if self.closed {
            Some(self.wrap(index))
        } else if index >= 0 && (index as usize) < self.points.len() {
            Some(index as usize)
        } else {
            None
        }
    }
}

impl Index<usize> for Spline {
    type Output = Vec2;

    fn index(&self, index: usize) -> &Vec2 {
        &self.points[index]
    }
}

impl TryFrom<SplineState> for Spline {
    type Error = anyhow::Error;

    fn try_from(state: SplineState) -> anyhow::Result<Self> {
        Self::from_state(state)
    }
}

impl From<&Spline> for SplineState {
    fn from(spline: &Spline) -> Self {
        spline.state()
    }
}
