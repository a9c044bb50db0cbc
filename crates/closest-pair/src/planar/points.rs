//! Immutable point batches with precomputed sorted index views.

use nalgebra::Vector2;

/// Immutable batch of 2D points in input order, plus x- and y-sorted views.
///
/// Invariants:
/// - `by_x` / `by_y` are permutations of `0..len()`, sorted by the named
///   coordinate with ties broken by the other coordinate, then input order
///   (stable sort over ascending indices).
/// - `x_rank[i]` is the position of input point `i` within `by_x`.
/// - Views are computed once at construction and never change; duplicates are
///   permitted and non-finite coordinates are tolerated here (solvers reject
///   them before comparing anything).
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    pts: Vec<Vector2<f64>>,
    by_x: Vec<usize>,
    by_y: Vec<usize>,
    x_rank: Vec<usize>,
}

impl PointSet {
    /// Build from points in caller order.
    pub fn from_points(pts: Vec<Vector2<f64>>) -> Self {
        let n = pts.len();
        let mut by_x: Vec<usize> = (0..n).collect();
        by_x.sort_by(|&a, &b| cmp_xy(pts[a], pts[b]));
        let mut by_y: Vec<usize> = (0..n).collect();
        by_y.sort_by(|&a, &b| cmp_yx(pts[a], pts[b]));
        let mut x_rank = vec![0usize; n];
        for (pos, &i) in by_x.iter().enumerate() {
            x_rank[i] = pos;
        }
        Self {
            pts,
            by_x,
            by_y,
            x_rank,
        }
    }

    /// Build from `(x, y)` coordinate pairs.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::from_points(
            coords
                .into_iter()
                .map(|(x, y)| Vector2::new(x, y))
                .collect(),
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Point at input index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Vector2<f64> {
        self.pts[i]
    }

    /// All points in input order.
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.pts
    }

    /// Input indices sorted by ascending x.
    #[inline]
    pub fn by_x(&self) -> &[usize] {
        &self.by_x
    }

    /// Input indices sorted by ascending y.
    #[inline]
    pub fn by_y(&self) -> &[usize] {
        &self.by_y
    }

    /// Position of input index `i` within `by_x`.
    #[inline]
    pub(crate) fn x_rank(&self, i: usize) -> usize {
        self.x_rank[i]
    }
}

#[inline]
fn cmp_xy(a: Vector2<f64>, b: Vector2<f64>) -> std::cmp::Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
        std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
        o => o,
    }
}

#[inline]
fn cmp_yx(a: Vector2<f64>, b: Vector2<f64>) -> std::cmp::Ordering {
    match a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal) {
        std::cmp::Ordering::Equal => a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal),
        o => o,
    }
}
