//! Data types for closest-pair queries.
//!
//! - `SolveCfg`: centralizes the brute-force cutoff for the recursion base case.
//! - `ClosestPair`: minimum distance plus the witnessing pair of input indices.
//! - `SolveError`: input rejection (too few points, non-finite coordinates).

use std::fmt;

use thiserror::Error;

/// Solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Subranges of at most this many points are solved by exhaustive scan.
    /// Clamped to >= 2 at use sites; the recursion never splits below it.
    pub brute_cutoff: usize,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self { brute_cutoff: 3 }
    }
}

/// Coordinate axis, used to pinpoint which half of a point was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Why a solve call rejected its input. Nothing partial is ever returned.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SolveError {
    /// No pair exists for fewer than two points.
    #[error("closest pair needs at least two points, got {count}")]
    InsufficientPoints { count: usize },

    /// A NaN or infinite coordinate would corrupt every comparison downstream.
    /// Reports the first offender in input order, x before y.
    #[error("point {index} has a non-finite {axis} coordinate ({value})")]
    InvalidCoordinate { index: usize, axis: Axis, value: f64 },
}

/// Minimum pairwise distance plus the witnessing input indices.
///
/// Invariants:
/// - `i < j`, both in `[0, n)` of the solved `PointSet`.
/// - `distance` is the Euclidean distance between points `i` and `j`, >= 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}
