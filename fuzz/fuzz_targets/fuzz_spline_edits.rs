#![no_main]

use bezier_path_editor::{PointRole, Spline};
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

fn position(a: u8, b: u8) -> Vec2 {
    Vec2::new(a as f32 / 16.0 - 8.0, b as f32 / 16.0 - 8.0)
}

fuzz_target!(|data: &[u8]| {
    let mut spline = Spline::new(Vec2::ZERO);

    for op in data.chunks_exact(4) {
        let pos = position(op[2], op[3]);
        let n = spline.num_points();
        match op[0] % 7 {
            0 => {
                spline.add_segment(pos);
            }
            1 => spline.split_segment(pos, op[1] as usize % spline.num_segments()),
            2 => {
                spline.delete_segment((op[1] as usize % n) / 3 * 3);
            }
            3 => {
                spline.move_point(op[1] as usize % n, pos);
            }
            4 => {
                spline.set_closed(op[1] % 2 == 0);
            }
            5 => {
                spline.set_auto_control(op[1] % 2 == 0);
            }
            _ => {
                let points = spline.evenly_spaced_points(0.5, 1.0);
                assert_eq!(points[0], spline[0]);
            }
        }

        let n = spline.num_points();
        if spline.is_closed() {
            assert!(n >= 3 && n % 3 == 0);
        } else {
            assert!(n >= 4 && n % 3 == 1);
        }
        assert_eq!(spline.role(n - 1 - (n - 1) % 3), PointRole::Anchor);
    }
});
