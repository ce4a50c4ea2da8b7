//! Cleanup of traced circuits into the bounded face set.
//!
//! Steps per circuit: drop near-duplicate neighbours and collinear vertices
//! (never below a triangle) until nothing changes, then reject rings with
//! < 3 vertices or tiny area.
//! Across circuits: remove the outer boundary.

use crate::geom::{cross2, signed_area, Point, Polygon, Tolerances};

/// Rule for recognising the unbounded outer face among the cleaned circuits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OuterFace {
    /// Drop the single circuit with maximum `|area|`; ties go to the one with
    /// negative signed area.
    #[default]
    LargestArea,
    /// Drop every circuit with negative signed area (one outer boundary per
    /// connected component). Named for a y-up frame.
    Clockwise,
}

/// Cleaned faces split into bounded output and discarded circuits.
#[derive(Clone, Debug, Default)]
pub struct Normalized {
    pub bounded: Vec<Polygon>,
    pub outer: Vec<Polygon>,
    /// Circuits rejected as degenerate (< 3 vertices or `|area| < eps_area`).
    pub degenerate: usize,
}

/// Merge cyclically consecutive vertices closer than `eps` (the wrap-around pair included).
pub fn dedupe_close(ring: &[Point], eps: f64) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(ring.len());
    for &p in ring {
        if out.last().is_none_or(|q| (p - q).norm() >= eps) {
            out.push(p);
        }
    }
    while out.len() > 1 && (out[out.len() - 1] - out[0]).norm() < eps {
        out.pop();
    }
    out
}

/// Drop vertices whose incoming and outgoing edges are collinear within `eps`.
///
/// Returns the input unchanged if fewer than 3 vertices would remain.
pub fn compress_collinear(ring: Vec<Point>, eps: f64) -> Vec<Point> {
    let n = ring.len();
    if n < 3 {
        return ring;
    }
    let kept: Vec<Point> = (0..n)
        .filter(|&i| {
            let a = ring[(i + n - 1) % n];
            let b = ring[i];
            let c = ring[(i + 1) % n];
            cross2(b - a, c - b).abs() > eps
        })
        .map(|i| ring[i])
        .collect();
    if kept.len() >= 3 {
        kept
    } else {
        ring
    }
}

/// Clean one traced circuit; `None` if it is degenerate.
///
/// Dedupe and compression repeat until the ring stops shrinking: removing a
/// spike tip leaves its base doubled, and the base may itself be collinear.
pub fn clean(ring: &[Point], tol: &Tolerances) -> Option<Polygon> {
    let mut ring = dedupe_close(ring, tol.eps_dup);
    loop {
        let before = ring.len();
        ring = dedupe_close(&compress_collinear(ring, tol.eps_collinear), tol.eps_dup);
        if ring.len() == before {
            break;
        }
    }
    if ring.len() < 3 || signed_area(&ring).abs() < tol.eps_area {
        return None;
    }
    Some(Polygon::new(ring))
}

fn largest_area_index(polys: &[Polygon]) -> Option<usize> {
    let mut best: Option<(usize, f64, bool)> = None;
    for (i, p) in polys.iter().enumerate() {
        let signed = p.signed_area();
        let area = signed.abs();
        let cw = signed < 0.0;
        let better = match best {
            None => true,
            Some((_, best_area, best_cw)) => {
                let slack = 1e-9 * best_area.max(1.0);
                area > best_area + slack || ((area - best_area).abs() <= slack && cw && !best_cw)
            }
        };
        if better {
            best = Some((i, area, cw));
        }
    }
    best.map(|(i, _, _)| i)
}

/// Split cleaned polygons into (bounded, outer) according to `rule`.
pub fn remove_outer(polys: Vec<Polygon>, rule: OuterFace) -> (Vec<Polygon>, Vec<Polygon>) {
    match rule {
        OuterFace::LargestArea => {
            let Some(idx) = largest_area_index(&polys) else {
                return (polys, Vec::new());
            };
            let mut bounded = polys;
            let outer = bounded.remove(idx);
            (bounded, vec![outer])
        }
        OuterFace::Clockwise => polys.into_iter().partition(|p| p.is_ccw()),
    }
}

/// Clean every circuit, drop degenerate ones, then drop the outer face.
pub fn normalize(raw: &[Vec<Point>], tol: &Tolerances, rule: OuterFace) -> Normalized {
    let mut cleaned = Vec::with_capacity(raw.len());
    let mut degenerate = 0;
    for ring in raw {
        match clean(ring, tol) {
            Some(p) => cleaned.push(p),
            None => degenerate += 1,
        }
    }
    let (bounded, outer) = remove_outer(cleaned, rule);
    Normalized {
        bounded,
        outer,
        degenerate,
    }
}
