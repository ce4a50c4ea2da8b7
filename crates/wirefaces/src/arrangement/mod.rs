//! Planar arrangement: half-edge graph of split segments and the face walk.
//!
//! Purpose
//! - Slice every input segment at all its crossings into atomic edges.
//! - Merge coincident endpoints into shared vertices (grid proximity merge).
//! - Build twinned half-edges, sort each vertex's fan by polar angle, and
//!   walk closed circuits by rotating to the neighbour just before the twin.
//!
//! Layout
//! - `types.rs` (arena types and handles), `build.rs` (split points, atomic
//!   edges, graph construction), `trace.rs` (face walk).
//!
//! Code cross-refs: `geom::{pairwise_crossings, PointIndex}`, `normalize::normalize`

mod build;
mod trace;
mod types;

pub use build::{atomic_edges, build_arrangement, split_points};
pub use trace::{trace_faces, Trace};
pub use types::{Arrangement, AtomicEdge, HalfEdge, HalfEdgeId, SplitPoint, Vertex, VertexId};

#[cfg(test)]
mod tests;
