//! Integrationstests für das Spline-Modell über die öffentliche API:
//! - Konkretes Bearbeitungs-Szenario (Anhängen, Löschen, Schließen)
//! - Invarianten über gemischte Bearbeitungsfolgen
//! - Resampling-Verträge

use approx::assert_abs_diff_eq;
use bezier_path_editor::{PointRole, Spline};
use glam::Vec2;

fn assert_invariants(spline: &Spline) {
    let n = spline.num_points();
    if spline.is_closed() {
        assert_eq!(n % 3, 0, "geschlossen: {} Punkte", n);
        assert!(n >= 3);
    } else {
        assert_eq!(n % 3, 1, "offen: {} Punkte", n);
        assert!(n >= 4);
    }
    assert_eq!(spline.num_segments(), n / 3);
    for i in 0..n {
        let expected = if i % 3 == 0 {
            PointRole::Anchor
        } else {
            PointRole::Control
        };
        assert_eq!(spline.role(i), expected);
    }
}

/// Im Auto-Modus muss jede Änderung dieselben Kontrollpunkte liefern wie eine
/// vollständige Neuableitung aus den Ankern.
fn assert_controls_derived(spline: &Spline) {
    let mut derived = spline.clone();
    derived.auto_set_all_control_points();
    for (i, (actual, expected)) in spline.points().iter().zip(derived.points()).enumerate() {
        assert!(
            actual.abs_diff_eq(*expected, 1e-4),
            "Kontrollpunkt {} nicht abgeleitet: {:?} vs {:?}",
            i,
            actual,
            expected
        );
    }
}

#[test]
fn test_concrete_scenario() {
    let mut spline = Spline::new(Vec2::ZERO);
    assert_eq!(spline.num_points(), 4);
    assert_eq!(spline.num_segments(), 1);
    assert!(!spline.is_closed());

    spline.add_segment(Vec2::new(2.0, 0.0));
    assert_eq!(spline.num_points(), 7);
    assert_eq!(spline.num_segments(), 2);

    spline.delete_segment(3);
    assert_eq!(spline.num_points(), 4);
    assert_eq!(spline.num_segments(), 1);
    assert_eq!(spline[0], Vec2::new(-1.0, 0.0));
    assert_eq!(spline[3], Vec2::new(2.0, 0.0));

    spline.add_segment(Vec2::new(3.0, 3.0));
    assert_eq!(spline.num_segments(), 2);
    let before = spline.num_points();
    assert!(spline.set_closed(true));
    assert_eq!(spline.num_points(), before + 2);
    assert_eq!(spline.num_segments(), 3);
}

#[test]
fn test_auto_mode_keeps_controls_derived_after_every_edit() {
    let mut spline = Spline::new(Vec2::new(5.0, 5.0));
    let edits: Vec<Box<dyn Fn(&mut Spline)>> = vec![
        Box::new(|s| {
            s.add_segment(Vec2::new(8.0, 7.0));
        }),
        Box::new(|s| {
            s.add_segment(Vec2::new(10.0, 4.0));
        }),
        Box::new(|s| s.split_segment(Vec2::new(5.0, 7.0), 0)),
        Box::new(|s| {
            s.move_point(6, Vec2::new(7.0, 8.0));
        }),
        Box::new(|s| {
            s.set_closed(true);
        }),
        Box::new(|s| {
            s.move_point(0, Vec2::new(3.0, 5.5));
        }),
        Box::new(|s| {
            s.delete_segment(3);
        }),
        Box::new(|s| {
            s.set_closed(false);
        }),
        Box::new(|s| {
            s.delete_segment(0);
        }),
    ];

    for edit in edits {
        edit(&mut spline);
        assert_invariants(&spline);
        assert_controls_derived(&spline);
    }
}

#[test]
fn test_manual_mode_invariants_over_edit_sequence() {
    let mut spline = Spline::new(Vec2::ZERO);
    spline.set_auto_control(false);

    for k in 1..6 {
        spline.add_segment(Vec2::new(k as f32 * 1.5, (k % 2) as f32));
        assert_invariants(&spline);
    }
    spline.move_point(4, Vec2::new(2.0, 2.0));
    spline.move_point(9, Vec2::new(4.5, -1.0));
    spline.split_segment(Vec2::new(1.0, 1.0), 1);
    assert_invariants(&spline);
    spline.set_closed(true);
    assert_invariants(&spline);
    while spline.delete_segment(0) {
        assert_invariants(&spline);
    }
    assert_eq!(spline.num_segments(), 1);
}

#[test]
fn test_closed_round_trip_keeps_count_and_anchors() {
    let mut spline = Spline::new(Vec2::ZERO);
    spline.add_segment(Vec2::new(2.0, 2.0));
    spline.add_segment(Vec2::new(4.0, 0.0));
    let count = spline.num_points();
    let anchors: Vec<Vec2> = spline.anchors().collect();

    spline.set_closed(true);
    spline.set_closed(false);

    assert_eq!(spline.num_points(), count);
    assert_eq!(spline.anchors().collect::<Vec<_>>(), anchors);
}

#[test]
fn test_segments_share_anchors_when_closed() {
    let mut spline = Spline::new(Vec2::ZERO);
    spline.add_segment(Vec2::new(2.0, 2.0));
    spline.add_segment(Vec2::new(4.0, 0.0));
    spline.set_closed(true);

    let n = spline.num_segments();
    for i in 0..n {
        assert_eq!(spline.segment(i)[3], spline.segment((i + 1) % n)[0]);
    }
}

#[test]
fn test_resampling_contracts() {
    let mut spline = Spline::new(Vec2::ZERO);
    spline.add_segment(Vec2::new(3.0, 1.0));
    spline.add_segment(Vec2::new(5.0, -1.0));

    for (spacing, resolution) in [(0.1, 1.0), (0.1, 4.0), (0.25, 2.0)] {
        let points = spline.evenly_spaced_points(spacing, resolution);
        assert_eq!(points[0], spline[0]);
        for pair in points.windows(2) {
            let d = pair[0].distance(pair[1]);
            assert!(d <= spacing + 1e-4, "Abstand {} > {}", d, spacing);
            assert!(d >= spacing * 0.9, "Abstand {} << {}", d, spacing);
        }
        // Der Pfad endet nahe dem letzten Anker
        let last = *points.last().expect("mindestens ein Punkt");
        assert!(last.distance(Vec2::new(5.0, -1.0)) <= spacing + 1e-3);
    }
}

#[test]
fn test_resampling_is_restartable() {
    let mut spline = Spline::new(Vec2::ZERO);
    spline.add_segment(Vec2::new(3.0, 1.0));
    let first = spline.evenly_spaced_points(0.2, 1.0);
    let second = spline.evenly_spaced_points(0.2, 1.0);
    assert_eq!(first, second);
}

#[test]
fn test_higher_resolution_tightens_spacing() {
    let mut spline = Spline::new(Vec2::ZERO);
    spline.add_segment(Vec2::new(1.0, 3.0));
    spline.add_segment(Vec2::new(-1.0, 3.0));

    let worst_deviation = |resolution: f32| {
        spline
            .evenly_spaced_points(0.2, resolution)
            .windows(2)
            .map(|pair| (pair[0].distance(pair[1]) - 0.2).abs())
            .fold(0.0f32, f32::max)
    };

    let fine = worst_deviation(8.0);
    assert!(fine <= worst_deviation(0.25) + 1e-6);
    assert_abs_diff_eq!(fine, 0.0, epsilon = 2e-3);
}
