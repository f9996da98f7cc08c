#![no_main]

use bezier_path_editor::{Spline, SplineState};
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&flags, coords)) = data.split_first() else {
        return;
    };
    let points = coords
        .chunks_exact(2)
        .map(|c| Vec2::new(c[0] as i8 as f32, c[1] as i8 as f32))
        .collect();
    let state = SplineState {
        points,
        closed: flags & 1 != 0,
        auto_control: flags & 2 != 0,
    };

    if let Ok(mut spline) = Spline::from_state(state) {
        let points = spline.evenly_spaced_points(1.0, 1.0);
        assert_eq!(points[0], spline[0]);
        spline.auto_set_all_control_points();
        assert!(spline.points().iter().all(|p| p.is_finite()));
    }
});
