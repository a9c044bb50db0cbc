//! Closest pair of points in the plane.
//!
//! Purpose
//! - Provide a single immutable point batch (`PointSet`) with precomputed
//!   x- and y-sorted index views, and two solvers over it: an exhaustive
//!   pairwise scan and the strip-based divide-and-conquer recursion.
//!
//! Why precomputed views
//! - Sorting once at construction and splitting/merging the y-view down the
//!   recursion keeps the whole solve at O(n log n); re-sorting per subrange
//!   would cost O(n log² n).
//!
//! Code cross-refs: `PointSet`, `solve`, `brute_force`, `SolveCfg`

mod points;
pub mod rand;
mod solvers;
mod types;

pub use points::PointSet;
pub use solvers::{brute_force, solve, solve_with_defaults};
pub use types::{Axis, ClosestPair, SolveCfg, SolveError};

#[cfg(test)]
mod tests;
