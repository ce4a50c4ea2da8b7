//! Segment–segment intersection (Cramer's rule on the two parametric lines).
//!
//! Only the bounded extents count: a hit must satisfy `t, u ∈ [-eps, 1 + eps]`.
//! Parallel and collinear pairs report no hit; overlapping collinear runs are
//! not split against each other.

use super::types::{Point, Segment, Tolerances};

/// Intersection of two segments: the point plus its parameter on each.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub point: Point,
    /// Parameter along the first segment.
    pub t: f64,
    /// Parameter along the second segment.
    pub u: f64,
}

/// Crossing between segments `i < j` of an input slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairCrossing {
    pub i: usize,
    pub j: usize,
    pub crossing: Crossing,
}

/// Intersect `a` and `b` within their bounded extents.
///
/// Returns `None` for (near-)parallel pairs and for hits outside the
/// parameter band. The point is interpolated along `a`.
pub fn intersect_segments(a: &Segment, b: &Segment, tol: &Tolerances) -> Option<Crossing> {
    let (a1, a2) = (a.a, a.b);
    let (b1, b2) = (b.a, b.b);
    let den = (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x);
    if !den.is_finite() || den.abs() < tol.eps_parallel {
        return None;
    }
    let t = ((a1.x - b1.x) * (b1.y - b2.y) - (a1.y - b1.y) * (b1.x - b2.x)) / den;
    let u = ((a1.x - b1.x) * (a1.y - a2.y) - (a1.y - b1.y) * (a1.x - a2.x)) / den;
    let lo = -tol.eps_param;
    let hi = 1.0 + tol.eps_param;
    if !(lo..=hi).contains(&t) || !(lo..=hi).contains(&u) {
        return None;
    }
    Some(Crossing {
        point: a.at(t),
        t,
        u,
    })
}

/// All pairwise crossings `i < j` (O(n²); inputs are polyhedron edge sets).
pub fn pairwise_crossings(segments: &[Segment], tol: &Tolerances) -> Vec<PairCrossing> {
    let mut out = Vec::new();
    for (i, si) in segments.iter().enumerate() {
        for (j, sj) in segments.iter().enumerate().skip(i + 1) {
            if let Some(crossing) = intersect_segments(si, sj, tol) {
                out.push(PairCrossing { i, j, crossing });
            }
        }
    }
    out
}
