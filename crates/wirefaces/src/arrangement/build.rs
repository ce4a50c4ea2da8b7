//! Graph construction: split points, atomic edges, merged vertices, half-edges.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::geom::{pairwise_crossings, PairCrossing, Point, PointIndex, Segment, Tolerances};

use super::types::{Arrangement, AtomicEdge, HalfEdge, HalfEdgeId, SplitPoint, Vertex, VertexId};

fn push_unique(splits: &mut Vec<SplitPoint>, sp: SplitPoint, eps: f64) {
    if splits.iter().any(|q| (q.point - sp.point).norm() < eps) {
        return;
    }
    splits.push(sp);
}

/// Per-segment split points sorted by `t`: both endpoints plus every crossing,
/// deduplicated within `eps_merge` along each segment.
pub fn split_points(
    segments: &[Segment],
    crossings: &[PairCrossing],
    tol: &Tolerances,
) -> Vec<Vec<SplitPoint>> {
    let mut splits: Vec<Vec<SplitPoint>> = segments
        .iter()
        .map(|s| {
            vec![
                SplitPoint { point: s.a, t: 0.0 },
                SplitPoint { point: s.b, t: 1.0 },
            ]
        })
        .collect();
    for pc in crossings {
        let p = pc.crossing.point;
        push_unique(
            &mut splits[pc.i],
            SplitPoint {
                point: p,
                t: pc.crossing.t,
            },
            tol.eps_merge,
        );
        push_unique(
            &mut splits[pc.j],
            SplitPoint {
                point: p,
                t: pc.crossing.u,
            },
            tol.eps_merge,
        );
    }
    for s in &mut splits {
        s.sort_by(|p, q| p.t.partial_cmp(&q.t).unwrap_or(Ordering::Equal));
    }
    splits
}

/// Slice each segment between consecutive split points; near-zero pieces are dropped.
pub fn atomic_edges(splits: &[Vec<SplitPoint>], tol: &Tolerances) -> Vec<AtomicEdge> {
    let mut edges = Vec::new();
    for pts in splits {
        for w in pts.windows(2) {
            let (p, q) = (w[0].point, w[1].point);
            if (q - p).norm() < tol.eps_merge {
                continue;
            }
            edges.push(AtomicEdge { a: p, b: q });
        }
    }
    edges
}

fn vertex_for(index: &mut PointIndex, vertices: &mut Vec<Vertex>, p: Point) -> usize {
    let (id, created) = index.find_or_insert(p);
    if created {
        debug_assert_eq!(id, vertices.len());
        vertices.push(Vertex {
            pos: p,
            out: Vec::new(),
        });
    }
    id
}

impl Arrangement {
    /// Build the half-edge graph from atomic edges.
    ///
    /// - Endpoints merge into vertices within `eps_merge`.
    /// - Edges collapsing onto one vertex, and repeats of an already inserted
    ///   vertex pair (collinear overlaps), are skipped.
    /// - Every fan is sorted by angle ascending and each half-edge learns its slot.
    pub fn from_edges(edges: &[AtomicEdge], tol: &Tolerances) -> Arrangement {
        let mut index = PointIndex::new(tol.eps_merge);
        let mut vertices: Vec<Vertex> = Vec::new();
        let mut half_edges: Vec<HalfEdge> = Vec::with_capacity(edges.len() * 2);
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        for e in edges {
            let a = vertex_for(&mut index, &mut vertices, e.a);
            let b = vertex_for(&mut index, &mut vertices, e.b);
            if a == b || !seen.insert((a.min(b), a.max(b))) {
                continue;
            }
            let d = vertices[b].pos - vertices[a].pos;
            let h_ab = HalfEdgeId(half_edges.len());
            let h_ba = HalfEdgeId(half_edges.len() + 1);
            half_edges.push(HalfEdge {
                origin: VertexId(a),
                dest: VertexId(b),
                angle: d.y.atan2(d.x),
                twin: h_ba,
                slot: 0,
            });
            half_edges.push(HalfEdge {
                origin: VertexId(b),
                dest: VertexId(a),
                angle: (-d.y).atan2(-d.x),
                twin: h_ab,
                slot: 0,
            });
            vertices[a].out.push(h_ab);
            vertices[b].out.push(h_ba);
        }
        for v in &mut vertices {
            v.out.sort_by(|x, y| {
                half_edges[x.0]
                    .angle
                    .partial_cmp(&half_edges[y.0].angle)
                    .unwrap_or(Ordering::Equal)
            });
            for (slot, h) in v.out.iter().enumerate() {
                half_edges[h.0].slot = slot;
            }
        }
        debug_assert!(half_edges
            .iter()
            .enumerate()
            .all(|(i, h)| half_edges[h.twin.0].twin.0 == i));
        Arrangement {
            vertices,
            half_edges,
        }
    }
}

/// Full construction: crossings → split points → atomic edges → half-edge graph.
pub fn build_arrangement(segments: &[Segment], tol: &Tolerances) -> Arrangement {
    let crossings = pairwise_crossings(segments, tol);
    let splits = split_points(segments, &crossings, tol);
    let edges = atomic_edges(&splits, tol);
    Arrangement::from_edges(&edges, tol)
}
