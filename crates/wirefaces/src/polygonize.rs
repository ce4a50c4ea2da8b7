//! End-to-end polygonization: segments in, bounded faces out.
//!
//! The call is pure: it builds a fresh arrangement, traces it, normalizes the
//! circuits and returns. Nothing is cached between calls.

use crate::arrangement::{atomic_edges, split_points, trace_faces, Arrangement};
use crate::geom::{pairwise_crossings, Polygon, Segment, Tolerances};
use crate::normalize::{normalize, OuterFace};

/// Polygonization configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolygonizeCfg {
    pub tol: Tolerances,
    pub outer: OuterFace,
    /// Step cap for a single face walk. `None` uses the half-edge count.
    pub max_trace_steps: Option<usize>,
}

/// Counters collected along the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub segments: usize,
    /// Input segments shorter than `eps_merge`, ignored.
    pub skipped_segments: usize,
    pub crossings: usize,
    pub atomic_edges: usize,
    pub vertices: usize,
    pub half_edges: usize,
    pub raw_faces: usize,
    pub abandoned_traces: usize,
    pub degenerate_faces: usize,
    pub bounded_faces: usize,
}

/// Full result of one polygonization.
#[derive(Clone, Debug, Default)]
pub struct Polygonization {
    /// Bounded faces.
    pub faces: Vec<Polygon>,
    /// Circuits classified as outer boundary and excluded from `faces`.
    pub outer: Vec<Polygon>,
    pub stats: Stats,
}

/// Bounded faces of the arrangement of `segments`, with default settings.
pub fn polygonize(segments: &[Segment]) -> Vec<Polygon> {
    polygonize_with(segments, &PolygonizeCfg::default()).faces
}

/// Polygonize with explicit configuration and return faces, outer circuits and stats.
pub fn polygonize_with(segments: &[Segment], cfg: &PolygonizeCfg) -> Polygonization {
    let tol = &cfg.tol;
    let mut stats = Stats {
        segments: segments.len(),
        ..Stats::default()
    };
    let input: Vec<Segment> = segments
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            if s.length() < tol.eps_merge || !s.length().is_finite() {
                tracing::warn!(index = i, ?s, "skipping degenerate segment");
                None
            } else {
                Some(*s)
            }
        })
        .collect();
    stats.skipped_segments = segments.len() - input.len();

    let crossings = pairwise_crossings(&input, tol);
    let splits = split_points(&input, &crossings, tol);
    let edges = atomic_edges(&splits, tol);
    let arr = Arrangement::from_edges(&edges, tol);
    stats.crossings = crossings.len();
    stats.atomic_edges = edges.len();
    stats.vertices = arr.vertex_count();
    stats.half_edges = arr.half_edge_count();

    let trace = trace_faces(&arr, cfg.max_trace_steps);
    stats.raw_faces = trace.faces.len();
    stats.abandoned_traces = trace.abandoned;
    if trace.abandoned > 0 {
        tracing::debug!(abandoned = trace.abandoned, "face walks did not close");
    }

    let normalized = normalize(&trace.faces, tol, cfg.outer);
    stats.degenerate_faces = normalized.degenerate;
    stats.bounded_faces = normalized.bounded.len();
    tracing::debug!(
        segments = stats.segments,
        crossings = stats.crossings,
        vertices = stats.vertices,
        half_edges = stats.half_edges,
        raw_faces = stats.raw_faces,
        bounded = stats.bounded_faces,
        "polygonized"
    );
    Polygonization {
        faces: normalized.bounded,
        outer: normalized.outer,
        stats,
    }
}
