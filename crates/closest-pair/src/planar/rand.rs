//! Random point clouds (uniform box + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for point batches used by the
//!   cross-validation tests, the benches, and the CLI generator. The sampler
//!   is parameterizable, reproducible, and returns a ready `PointSet` with
//!   its sorted views built.
//!
//! Model
//! - Draw `n` points uniformly from the centered square
//!   `[-half_extent, half_extent]²`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::points::PointSet;

/// Cloud size distribution.
#[derive(Clone, Copy, Debug)]
pub enum CloudSize {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl CloudSize {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            CloudSize::Fixed(n) => n,
            CloudSize::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Uniform-box sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub size: CloudSize,
    /// Half side length of the centered sampling square. Clamped to > 0.
    pub half_extent: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            size: CloudSize::Fixed(1000),
            half_extent: 1000.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point cloud with precomputed sorted views.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let n = cfg.size.sample(&mut rng);
    let h = cfg.half_extent.max(1e-9);
    let pts: Vec<Vector2<f64>> = (0..n)
        .map(|_| {
            let x = (rng.gen::<f64>() * 2.0 - 1.0) * h;
            let y = (rng.gen::<f64>() * 2.0 - 1.0) * h;
            Vector2::new(x, y)
        })
        .collect();
    PointSet::from_points(pts)
}
