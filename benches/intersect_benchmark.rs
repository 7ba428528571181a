//! Intersect benchmark: Measure single ray probes.
//!
//! Target: < 20ns per probe

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rayrect::{intersect, normalize_angle, Intersector, Rect};
use std::f64::consts::PI;

fn intersect_axis_aligned(c: &mut Criterion) {
    let rect = Rect::new(50, -5, 10, 10);

    c.bench_function("intersect_axis_hit", |b| {
        b.iter(|| intersect(black_box(&rect), black_box(0.0)))
    });
}

fn intersect_general(c: &mut Criterion) {
    let rect = Rect::new(50, -50, 10, 10);

    c.bench_function("intersect_general_hit", |b| {
        b.iter(|| intersect(black_box(&rect), black_box(1.76 * PI)))
    });

    c.bench_function("intersect_general_miss", |b| {
        b.iter(|| intersect(black_box(&rect), black_box(0.75 * PI)))
    });
}

fn intersect_spiral_sweep(c: &mut Criterion) {
    let intersector = Intersector::new();
    let placed: Vec<Rect> = (0..64)
        .map(|i| Rect::new((i % 8) * 20 - 80, (i / 8) * 20 - 80, 12, 8))
        .collect();

    c.bench_function("intersect_sweep_64_rects", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for (step, rect) in placed.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let angle = normalize_angle(step as f64 * 0.37);
                if intersector.intersect(black_box(rect), angle).is_some() {
                    hits += 1;
                }
            }
            hits
        })
    });
}

criterion_group!(
    benches,
    intersect_axis_aligned,
    intersect_general,
    intersect_spiral_sweep,
);
criterion_main!(benches);
