//! Planar closest-pair solvers.
//!
//! Given a static batch of 2D points, find the minimum Euclidean distance
//! between any two distinct points and the pair of input indices realizing it.
//! Two interchangeable strategies live behind one entry point: an O(n²)
//! pairwise scan (`planar::brute_force`, the correctness reference) and the
//! O(n log n) divide-and-conquer recursion used for everything larger than a
//! handful of points (`planar::solve`).
//!
//! Point ingestion and result presentation belong to callers (see the `cli`
//! crate); this crate owns only the computation and its validation.

pub mod planar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so callers spell points the way this crate does.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::planar::rand::{draw_point_cloud, CloudCfg, CloudSize, ReplayToken};
    pub use crate::planar::{
        brute_force, solve, solve_with_defaults, Axis, ClosestPair, PointSet, SolveCfg, SolveError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
