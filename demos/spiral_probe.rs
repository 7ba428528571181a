//! Spiral probe: Walk an Archimedean spiral and report which placed boxes
//! each probe ray leaves through.
//!
//! Run with `RUST_LOG=trace` to see every edge decision.

use rayrect::{normalize_angle, Intersector, Rect};
use std::f64::consts::PI;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Rayrect Spiral Probe");
    println!("====================");
    println!();

    let placed = [
        Rect::from_edges(-5, -5, 5, 5),
        Rect::from_edges(50, -5, 60, 5),
        Rect::from_edges(-5, 50, 5, 60),
        Rect::from_edges(-50, -5, -40, 5),
        Rect::from_edges(-5, -50, 5, -40),
        Rect::new(50, 50, 10, 10),
        Rect::new(50, -50, 10, 10),
    ];
    for rect in &placed {
        println!("Placed: {rect:?}");
    }
    println!();

    let intersector = Intersector::new();
    let mut angle = 0.0_f64;
    for step in 0..32 {
        let wrapped = normalize_angle(angle);
        let hits: Vec<_> = placed
            .iter()
            .filter_map(|rect| intersector.intersect(rect, wrapped).map(|p| (rect, p)))
            .collect();

        println!("step {step:2} angle {:.3}π: {} hit(s)", wrapped / PI, hits.len());
        for (rect, point) in hits {
            println!("    {rect:?} -> {point:?}");
        }
        angle += PI / 8.0;
    }
}
