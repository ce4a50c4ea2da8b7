//! Face walk over the half-edge graph.
//!
//! Each walk starts at an unconsumed half-edge and repeatedly steps to
//! `Arrangement::next_in_face` until it returns to the start. Bounded faces
//! come out with positive signed area and the outer boundary of each
//! component with negative signed area (counterclockwise and clockwise when
//! y points up).

use crate::geom::Point;

use super::types::{Arrangement, HalfEdgeId};

/// Result of tracing every half-edge once.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    /// Closed circuits with at least 3 vertices, as vertex positions.
    pub faces: Vec<Vec<Point>>,
    /// Closed circuits with fewer than 3 vertices (isolated edges, spikes).
    pub short_circuits: usize,
    /// Walks that ran into a consumed half-edge or hit the step cap.
    pub abandoned: usize,
    /// Half-edges consumed; equals the half-edge count after a full trace.
    pub consumed: usize,
}

/// Walk all faces of `arr`.
///
/// `max_steps` caps a single walk (default: the half-edge count). A walk that
/// stalls is dropped without affecting the others.
pub fn trace_faces(arr: &Arrangement, max_steps: Option<usize>) -> Trace {
    let n = arr.half_edge_count();
    let cap = max_steps.unwrap_or(n).max(1);
    let mut used = vec![false; n];
    let mut out = Trace::default();
    for start in 0..n {
        if used[start] {
            continue;
        }
        let mut ring: Vec<Point> = Vec::new();
        let mut cur = start;
        let closed = loop {
            used[cur] = true;
            out.consumed += 1;
            ring.push(arr.origin_pos(HalfEdgeId(cur)));
            let next = arr.next_in_face(HalfEdgeId(cur)).0;
            if next == start {
                break true;
            }
            if used[next] || ring.len() >= cap {
                break false;
            }
            cur = next;
        };
        if !closed {
            tracing::trace!(start, len = ring.len(), "abandoned face walk");
            out.abandoned += 1;
        } else if ring.len() >= 3 {
            out.faces.push(ring);
        } else {
            out.short_circuits += 1;
        }
    }
    debug_assert_eq!(out.consumed, n);
    out
}
