//! Segment-set generators for benches, tests and demos.
//!
//! - `draw_segments`: reproducible random segments in a square window.
//! - `star_edges`, `grid_edges`: deterministic line drawings with known face counts.
//!
//! Determinism uses a replay token `(seed, index)` mixed into one `StdRng`,
//! so a failing draw can be replayed from the two integers alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Point, Segment};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn advance(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }
}

/// Random segment configuration.
#[derive(Clone, Copy, Debug)]
pub struct SegmentCfg {
    pub count: usize,
    /// Endpoints are uniform in `[0, extent]²`.
    pub extent: f64,
    /// Minimum segment length; shorter draws are resampled.
    pub min_len: f64,
}

impl Default for SegmentCfg {
    fn default() -> Self {
        Self {
            count: 12,
            extent: 500.0,
            min_len: 20.0,
        }
    }
}

/// Draw `cfg.count` random segments.
pub fn draw_segments(cfg: SegmentCfg, tok: ReplayToken) -> Vec<Segment> {
    let mut rng = tok.rng();
    let extent = cfg.extent.abs().max(1e-9);
    let min_len = cfg.min_len.clamp(0.0, 0.5 * extent);
    let point = |rng: &mut StdRng| {
        Point::new(rng.gen_range(0.0..=extent), rng.gen_range(0.0..=extent))
    };
    let mut out = Vec::with_capacity(cfg.count);
    while out.len() < cfg.count {
        let a = point(&mut rng);
        let b = point(&mut rng);
        if (b - a).norm() >= min_len {
            out.push(Segment::new(a, b));
        }
    }
    out
}

/// Chords of the star polygon `{n/k}` on a circle: vertex `i` joins vertex `i + k`.
///
/// `{5/2}` (pentagram) bounds 6 faces: five tips and the inner pentagon.
pub fn star_edges(n: usize, k: usize, center: Point, radius: f64) -> Vec<Segment> {
    let n = n.max(3);
    let pts: Vec<Point> = (0..n)
        .map(|i| {
            let a = std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * i as f64 / n as f64;
            center + Point::new(a.cos(), a.sin()) * radius
        })
        .collect();
    (0..n)
        .map(|i| Segment::new(pts[i], pts[(i + k) % n]))
        .collect()
}

/// Full-length lines of an `n × n` grid of `cell`-sized squares from `origin`.
pub fn grid_edges(n: usize, cell: f64, origin: Point) -> Vec<Segment> {
    let len = n as f64 * cell;
    let mut out = Vec::with_capacity(2 * (n + 1));
    for i in 0..=n {
        let o = i as f64 * cell;
        out.push(Segment::new(origin + Point::new(o, 0.0), origin + Point::new(o, len)));
        out.push(Segment::new(origin + Point::new(0.0, o), origin + Point::new(len, o)));
    }
    out
}
