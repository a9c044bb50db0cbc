//! Timing probe for one large random cloud.
//!
//! Purpose
//! - Provide a reproducible data point for "how long does a solve take on
//!   10^5 points?", comparing the recursion against the quadratic reference
//!   on a smaller prefix where the latter is still affordable.

use std::time::Instant;

use closest_pair::planar::rand::{draw_point_cloud, CloudCfg, CloudSize, ReplayToken};
use closest_pair::planar::{brute_force, solve_with_defaults, PointSet};

fn main() {
    let big = draw_point_cloud(
        CloudCfg {
            size: CloudSize::Fixed(100_000),
            half_extent: 1.0e5,
        },
        ReplayToken { seed: 7, index: 0 },
    );

    let start = Instant::now();
    let result = solve_with_defaults(&big).expect("valid cloud");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    println!("n={} strategy=divide_and_conquer", big.len());
    println!(
        "distance={:.9} pair=({}, {})",
        result.distance, result.i, result.j
    );
    println!("solve_time_ms={elapsed_ms:.3}");

    // Reference scan on a prefix, to sanity-check agreement and scaling.
    let small = PointSet::from_points(big.points()[..2000].to_vec());
    let start = Instant::now();
    let fast = solve_with_defaults(&small).expect("valid cloud");
    let fast_ms = start.elapsed().as_secs_f64() * 1e3;
    let start = Instant::now();
    let slow = brute_force(&small).expect("valid cloud");
    let slow_ms = start.elapsed().as_secs_f64() * 1e3;
    assert!((fast.distance - slow.distance).abs() <= 1e-9 * slow.distance.max(1.0));
    println!("prefix_n={} recursion_ms={fast_ms:.3} brute_ms={slow_ms:.3}", small.len());
}
