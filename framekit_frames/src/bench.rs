//! Frame graph benchmarks
//!
//! Simple wall-clock measurements, kept out of the default test run.
//! Run with: cargo test --release -p framekit_frames frame_benchmark -- --nocapture --ignored

use std::time::Instant;

use framekit_geometry::{RigidTransform, Vector3};

use crate::frame::Frame;

const ITERATIONS: u64 = 100_000;

fn deep_chain(depth: usize) -> (Frame, Frame) {
    let root = Frame::new_root("root");
    let mut leaf = root.clone();
    for i in 0..depth {
        leaf = leaf.add_child_with_transform(
            format!("link_{}", i),
            &RigidTransform::from_translation(Vector3::new(0.1, 0.0, 0.0)),
        );
    }
    (root, leaf)
}

#[test]
#[ignore]
fn frame_benchmark_cached_query() {
    let (root, leaf) = deep_chain(10);

    // Warm up; later iterations all hit the cache.
    for _ in 0..1000 {
        let _ = leaf.transform_to(&root);
    }

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let _ = leaf.transform_to(&root);
    }
    let elapsed = start.elapsed();

    let ns_per_op = elapsed.as_nanos() / ITERATIONS as u128;
    println!("cached transform_to (depth 10): {} ns/op", ns_per_op);
    println!("  total time: {:?} for {} ops", elapsed, ITERATIONS);
}

#[test]
#[ignore]
fn frame_benchmark_update_then_query() {
    let (root, leaf) = deep_chain(10);
    let mid = leaf.parent().unwrap().parent().unwrap();

    let start = Instant::now();
    for i in 0..ITERATIONS {
        mid.set_transform_to_parent(&RigidTransform::rot_z(i as f64 * 1.0e-6));
        let _ = leaf.transform_to(&root);
    }
    let elapsed = start.elapsed();

    let ns_per_op = elapsed.as_nanos() / ITERATIONS as u128;
    println!("update + stale query (depth 10): {} ns/op", ns_per_op);
    println!("  total time: {:?} for {} ops", elapsed, ITERATIONS);
}

#[test]
#[ignore]
fn frame_benchmark_registration() {
    let count = 1000;

    let start = Instant::now();
    for _ in 0..100 {
        let root = Frame::new_root("root");
        for i in 0..count {
            root.add_child(format!("frame_{}", i));
        }
    }
    let elapsed = start.elapsed();

    let total_ops = 100 * (count + 1);
    let ns_per_op = elapsed.as_nanos() / total_ops as u128;
    println!("register frame: {} ns/op", ns_per_op);
    println!("  total time: {:?} for {} ops", elapsed, total_ops);
}
