//! Closest-pair solvers: exhaustive scan and strip-based divide and conquer.
//!
//! - `brute_force`: O(n²) reference scan over all pairs in input order.
//! - `solve`: validates, then brute-forces small sets or runs the O(n log n)
//!   recursion over the `PointSet`'s precomputed sorted views.
//!
//! Distances are compared as squared Euclidean norms throughout; the single
//! square root happens when the final result is materialized.

use nalgebra::Vector2;

use super::points::PointSet;
use super::types::{Axis, ClosestPair, SolveCfg, SolveError};

/// Entry point: validate the batch, then pick a strategy by size.
pub fn solve(set: &PointSet, cfg: SolveCfg) -> Result<ClosestPair, SolveError> {
    validate(set)?;
    let cutoff = cfg.brute_cutoff.max(2);
    if set.len() <= cutoff {
        return Ok(brute_force_input_order(set).into_result());
    }
    Ok(DivideRunner::new(set, cutoff).solve().into_result())
}

/// Convenience: solve with the default cutoff.
pub fn solve_with_defaults(set: &PointSet) -> Result<ClosestPair, SolveError> {
    solve(set, SolveCfg::default())
}

/// Exhaustive O(n²) scan over all pairs in increasing `(i, j)` input order.
///
/// Only strictly smaller distances replace the incumbent, so the first pair
/// found wins ties and the witness is deterministic.
pub fn brute_force(set: &PointSet) -> Result<ClosestPair, SolveError> {
    validate(set)?;
    Ok(brute_force_input_order(set).into_result())
}

fn validate(set: &PointSet) -> Result<(), SolveError> {
    if set.len() < 2 {
        return Err(SolveError::InsufficientPoints { count: set.len() });
    }
    for (index, p) in set.points().iter().enumerate() {
        if !p.x.is_finite() {
            return Err(SolveError::InvalidCoordinate {
                index,
                axis: Axis::X,
                value: p.x,
            });
        }
        if !p.y.is_finite() {
            return Err(SolveError::InvalidCoordinate {
                index,
                axis: Axis::Y,
                value: p.y,
            });
        }
    }
    Ok(())
}

/// Incumbent pair, tracked as squared distance.
#[derive(Clone, Copy, Debug)]
struct Best {
    d2: f64,
    i: usize,
    j: usize,
}

impl Best {
    const NONE: Best = Best {
        d2: f64::INFINITY,
        i: usize::MAX,
        j: usize::MAX,
    };

    /// Record `(a, b)` iff strictly closer; ties keep the earlier find.
    #[inline]
    fn offer(&mut self, d2: f64, a: usize, b: usize) {
        if d2 < self.d2 {
            self.d2 = d2;
            self.i = a.min(b);
            self.j = a.max(b);
        }
    }

    #[inline]
    fn merge(&mut self, other: Best) {
        if other.d2 < self.d2 {
            *self = other;
        }
    }

    #[inline]
    fn into_result(self) -> ClosestPair {
        ClosestPair {
            i: self.i,
            j: self.j,
            distance: self.d2.sqrt(),
        }
    }
}

fn brute_force_input_order(set: &PointSet) -> Best {
    let pts = set.points();
    let mut best = Best::NONE;
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            best.offer(dist2(pts[i], pts[j]), i, j);
        }
    }
    best
}

/// Exhaustive scan over an index subrange (recursion base case).
fn brute_force_over(pts: &[Vector2<f64>], idxs: &[usize]) -> Best {
    let mut best = Best::NONE;
    for (k, &a) in idxs.iter().enumerate() {
        for &b in &idxs[k + 1..] {
            best.offer(dist2(pts[a], pts[b]), a, b);
        }
    }
    best
}

#[inline]
fn dist2(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm_squared()
}

/// Recursion runner carrying shared context and scratch buffers.
///
/// Each call to `recur` owns the y-ordered index slice of its x-subrange: it
/// stable-partitions the slice into the two halves on the way down and merges
/// it back into y order on the way up, so the strip is always read in y order
/// without ever re-sorting.
struct DivideRunner<'a> {
    set: &'a PointSet,
    cutoff: usize,
    scratch: Vec<usize>,
    strip: Vec<usize>,
}

impl<'a> DivideRunner<'a> {
    fn new(set: &'a PointSet, cutoff: usize) -> Self {
        Self {
            set,
            cutoff,
            scratch: Vec::with_capacity(set.len()),
            strip: Vec::with_capacity(set.len()),
        }
    }

    fn solve(&mut self) -> Best {
        let mut ys = self.set.by_y().to_vec();
        self.recur(0, self.set.len(), &mut ys)
    }

    /// Closest pair within the x-sorted subrange `[lo, hi)`.
    ///
    /// `ys` holds exactly the input indices of the subrange; it is in y order
    /// on entry and restored to y order before returning.
    fn recur(&mut self, lo: usize, hi: usize, ys: &mut [usize]) -> Best {
        if hi - lo <= self.cutoff {
            return brute_force_over(self.set.points(), &self.set.by_x()[lo..hi]);
        }
        // Left half takes the ceiling share.
        let mid = lo + (hi - lo + 1) / 2;
        let left_len = self.partition_at(mid, ys);
        let (ys_l, ys_r) = ys.split_at_mut(left_len);
        let mut best = self.recur(lo, mid, ys_l);
        best.merge(self.recur(mid, hi, ys_r));
        self.merge_by_y(left_len, ys);
        self.scan_strip(mid, ys, &mut best);
        best
    }

    /// Stable partition of `ys`: indices with x-rank below `mid` first,
    /// y order preserved within each side. Returns the left count.
    fn partition_at(&mut self, mid: usize, ys: &mut [usize]) -> usize {
        self.scratch.clear();
        let mut w = 0;
        for r in 0..ys.len() {
            let i = ys[r];
            if self.set.x_rank(i) < mid {
                ys[w] = i;
                w += 1;
            } else {
                self.scratch.push(i);
            }
        }
        ys[w..].copy_from_slice(&self.scratch);
        w
    }

    /// Merge the two y-sorted runs of `ys` back into one y-sorted slice.
    fn merge_by_y(&mut self, left_len: usize, ys: &mut [usize]) {
        let pts = self.set.points();
        self.scratch.clear();
        {
            let (l, r) = ys.split_at(left_len);
            let mut a = 0;
            let mut b = 0;
            while a < l.len() && b < r.len() {
                if pts[l[a]].y <= pts[r[b]].y {
                    self.scratch.push(l[a]);
                    a += 1;
                } else {
                    self.scratch.push(r[b]);
                    b += 1;
                }
            }
            self.scratch.extend_from_slice(&l[a..]);
            self.scratch.extend_from_slice(&r[b..]);
        }
        ys.copy_from_slice(&self.scratch);
    }

    /// Collect the strip around the split line and scan it in y order.
    ///
    /// The inner loop stops once the y gap alone reaches the incumbent, which
    /// bounds it to a constant number of neighbors per strip point.
    fn scan_strip(&mut self, mid: usize, ys: &[usize], best: &mut Best) {
        let pts = self.set.points();
        let x_mid = pts[self.set.by_x()[mid]].x;
        self.strip.clear();
        for &i in ys {
            let dx = pts[i].x - x_mid;
            if dx * dx < best.d2 {
                self.strip.push(i);
            }
        }
        for (k, &a) in self.strip.iter().enumerate() {
            for &b in &self.strip[k + 1..] {
                let dy = pts[b].y - pts[a].y;
                if dy * dy >= best.d2 {
                    break;
                }
                best.offer(dist2(pts[a], pts[b]), a, b);
            }
        }
    }
}
