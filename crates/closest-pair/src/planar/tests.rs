//! Scenario and cross-validation tests for the closest-pair solvers.

use super::rand::{draw_point_cloud, CloudCfg, CloudSize, ReplayToken};
use super::*;

fn cloud(n: usize, index: u64) -> PointSet {
    draw_point_cloud(
        CloudCfg {
            size: CloudSize::Fixed(n),
            half_extent: 1000.0,
        },
        ReplayToken { seed: 71, index },
    )
}

#[test]
fn two_points_exact_distance() {
    let set = PointSet::from_coords([(0.0, 0.0), (3.0, 4.0)]);
    let r = solve_with_defaults(&set).unwrap();
    assert_eq!(r.distance, 5.0);
    assert_eq!((r.i, r.j), (0, 1));
}

#[test]
fn six_point_scenario() {
    let set = PointSet::from_coords([
        (2.0, 3.0),
        (12.0, 30.0),
        (40.0, 50.0),
        (5.0, 1.0),
        (12.0, 10.0),
        (3.0, 4.0),
    ]);
    let r = solve_with_defaults(&set).unwrap();
    assert!((r.distance - 2.0_f64.sqrt()).abs() < 1e-12);
    assert_eq!((r.i, r.j), (0, 5));
}

#[test]
fn collinear_points_adjacent_pair() {
    let set = PointSet::from_coords((0..100).map(|i| (i as f64, 0.0)));
    let r = solve_with_defaults(&set).unwrap();
    assert_eq!(r.distance, 1.0);
    assert_eq!(r.j, r.i + 1);
}

#[test]
fn too_few_points_is_an_error() {
    let empty = PointSet::from_points(Vec::new());
    assert_eq!(
        solve_with_defaults(&empty),
        Err(SolveError::InsufficientPoints { count: 0 })
    );
    let single = PointSet::from_coords([(1.0, 1.0)]);
    assert_eq!(
        solve_with_defaults(&single),
        Err(SolveError::InsufficientPoints { count: 1 })
    );
    assert_eq!(
        brute_force(&single),
        Err(SolveError::InsufficientPoints { count: 1 })
    );
}

#[test]
fn duplicate_points_yield_zero() {
    let set = PointSet::from_coords([(1.0, 2.0), (5.0, 5.0), (1.0, 2.0)]);
    let r = solve_with_defaults(&set).unwrap();
    assert_eq!(r.distance, 0.0);
    assert_eq!((r.i, r.j), (0, 2));

    // Duplicates far apart in input order, large enough to recurse.
    let mut coords: Vec<(f64, f64)> = (0..16).map(|i| (10.0 * i as f64, i as f64)).collect();
    coords[11] = coords[4];
    let set = PointSet::from_coords(coords);
    let r = solve_with_defaults(&set).unwrap();
    assert_eq!(r.distance, 0.0);
    assert_eq!((r.i, r.j), (4, 11));
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let set = PointSet::from_coords([(0.0, 0.0), (1.0, 1.0), (2.0, f64::NAN)]);
    match solve_with_defaults(&set) {
        Err(SolveError::InvalidCoordinate { index, axis, value }) => {
            assert_eq!(index, 2);
            assert_eq!(axis, Axis::Y);
            assert!(value.is_nan());
        }
        other => panic!("expected InvalidCoordinate, got {other:?}"),
    }

    let set = PointSet::from_coords([(f64::INFINITY, 0.0), (1.0, 1.0)]);
    assert_eq!(
        solve_with_defaults(&set),
        Err(SolveError::InvalidCoordinate {
            index: 0,
            axis: Axis::X,
            value: f64::INFINITY,
        })
    );
}

#[test]
fn ties_pick_first_lexicographic_pair() {
    // Unit square: four side pairs tie at distance 1; (0, 1) comes first.
    let set = PointSet::from_coords([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
    let r = brute_force(&set).unwrap();
    assert_eq!(r.distance, 1.0);
    assert_eq!((r.i, r.j), (0, 1));
}

#[test]
fn solve_is_deterministic() {
    let set = cloud(512, 0);
    let a = solve_with_defaults(&set).unwrap();
    let b = solve_with_defaults(&set).unwrap();
    assert_eq!(a, b);
}

#[test]
fn recursion_matches_brute_force_on_random_clouds() {
    for (k, &n) in [2usize, 3, 4, 5, 8, 13, 47, 256, 1000].iter().enumerate() {
        let set = cloud(n, k as u64);
        let fast = solve_with_defaults(&set).unwrap();
        let slow = brute_force(&set).unwrap();
        let tol = 1e-9 * slow.distance.max(1.0);
        assert!(
            (fast.distance - slow.distance).abs() <= tol,
            "n={n}: {} vs {}",
            fast.distance,
            slow.distance
        );
        // The reported pair must realize the reported distance.
        assert!(fast.i < fast.j && fast.j < n);
        let d = (set.point(fast.i) - set.point(fast.j)).norm();
        assert!((d - fast.distance).abs() <= 1e-12 * d.max(1.0));
    }
}

#[test]
fn cutoff_does_not_change_the_distance() {
    let set = cloud(200, 9);
    let reference = solve_with_defaults(&set).unwrap();
    for cutoff in [2usize, 5, 16, 64] {
        let r = solve(&set, SolveCfg { brute_cutoff: cutoff }).unwrap();
        assert_eq!(r.distance, reference.distance);
    }
}

#[test]
fn sorted_views_are_consistent() {
    let set = cloud(128, 3);
    let mut seen = vec![false; set.len()];
    for w in set.by_x().windows(2) {
        assert!(set.point(w[0]).x <= set.point(w[1]).x);
    }
    for w in set.by_y().windows(2) {
        assert!(set.point(w[0]).y <= set.point(w[1]).y);
    }
    for &i in set.by_x() {
        assert!(!seen[i]);
        seen[i] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn recursion_agrees_with_brute_force(
            coords in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 2..50)
        ) {
            let set = PointSet::from_coords(coords);
            let fast = solve_with_defaults(&set).unwrap();
            let slow = brute_force(&set).unwrap();
            let tol = 1e-9 * slow.distance.max(1.0);
            prop_assert!((fast.distance - slow.distance).abs() <= tol);
        }
    }
}
