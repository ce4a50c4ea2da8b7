//! Arena types for the half-edge graph.
//!
//! Handles are plain indices into `Arrangement::{vertices, half_edges}`.

use crate::geom::Point;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);

/// Point on a segment with its parameter `t ∈ [0, 1]` (ordering key only).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitPoint {
    pub point: Point,
    pub t: f64,
}

/// Segment fragment between two consecutive split points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtomicEdge {
    pub a: Point,
    pub b: Point,
}

/// Merged vertex with its outgoing half-edges, sorted by angle ascending.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub pos: Point,
    pub out: Vec<HalfEdgeId>,
}

/// Directed edge `origin → dest`.
#[derive(Clone, Copy, Debug)]
pub struct HalfEdge {
    pub origin: VertexId,
    pub dest: VertexId,
    /// `atan2(Δy, Δx)` at the origin.
    pub angle: f64,
    pub twin: HalfEdgeId,
    /// Position of this half-edge in `vertices[origin].out`.
    pub slot: usize,
}

/// Half-edge graph of an arrangement. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Arrangement {
    pub vertices: Vec<Vertex>,
    pub half_edges: Vec<HalfEdge>,
}

impl Arrangement {
    #[inline]
    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v.0]
    }

    #[inline]
    pub fn half_edge(&self, h: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[h.0]
    }

    #[inline]
    pub fn origin_pos(&self, h: HalfEdgeId) -> Point {
        self.vertex(self.half_edge(h).origin).pos
    }

    /// Next half-edge around the same face: at `h.dest`, the fan entry just
    /// before `h.twin` (wrapping), i.e. the first turn clockwise from the way back.
    #[inline]
    pub fn next_in_face(&self, h: HalfEdgeId) -> HalfEdgeId {
        let he = self.half_edge(h);
        let twin = self.half_edge(he.twin);
        let fan = &self.vertex(he.dest).out;
        let n = fan.len();
        fan[(twin.slot + n - 1) % n]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Undirected edge count (two half-edges each).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.half_edges.len() / 2
    }
}
