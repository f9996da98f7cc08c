use bezier_path_editor::{RoadMesh, Spline};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_synthetic_spline(segment_count: usize) -> Spline {
    let mut spline = Spline::new(Vec2::ZERO);
    for index in 1..segment_count {
        let x = index as f32 * 2.0;
        let y = ((index * 7) % 11) as f32 - 5.0;
        spline.add_segment(Vec2::new(x, y));
    }
    spline
}

fn bench_resampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("resampling");

    for &segment_count in &[10usize, 1_000usize] {
        let spline = build_synthetic_spline(segment_count);

        group.bench_with_input(
            BenchmarkId::new("evenly_spaced_points", segment_count),
            &spline,
            |b, spline| {
                b.iter(|| {
                    let points = spline.evenly_spaced_points(black_box(0.1), black_box(1.0));
                    black_box(points.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_auto_control(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_control");

    for &segment_count in &[100usize, 10_000usize] {
        let spline = build_synthetic_spline(segment_count);

        group.bench_with_input(
            BenchmarkId::new("auto_set_all", segment_count),
            &spline,
            |b, spline| {
                b.iter(|| {
                    let mut spline = spline.clone();
                    spline.auto_set_all_control_points();
                    black_box(spline.num_points())
                })
            },
        );
    }

    group.finish();
}

fn bench_road_mesh(c: &mut Criterion) {
    let points = build_synthetic_spline(200).evenly_spaced_points(0.1, 1.0);

    c.bench_function("road_mesh_build", |b| {
        b.iter(|| {
            let mesh = RoadMesh::build(black_box(&points), false, black_box(1.0));
            black_box(mesh.triangle_count())
        })
    });
}

criterion_group!(
    core_benches,
    bench_resampling,
    bench_auto_control,
    bench_road_mesh
);
criterion_main!(core_benches);
