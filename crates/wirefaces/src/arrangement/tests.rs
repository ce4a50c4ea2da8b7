//! Builder and face-walk invariants on small hand-made inputs.

use super::*;
use crate::geom::{pairwise_crossings, signed_area, Point, Segment, Tolerances};
use nalgebra::vector;

fn square(side: f64) -> Vec<Segment> {
    vec![
        Segment::from_coords(0.0, 0.0, side, 0.0),
        Segment::from_coords(side, 0.0, side, side),
        Segment::from_coords(side, side, 0.0, side),
        Segment::from_coords(0.0, side, 0.0, 0.0),
    ]
}

fn cross_pair() -> Vec<Segment> {
    vec![
        Segment::from_coords(-1.0, 0.0, 1.0, 0.0),
        Segment::from_coords(0.0, -1.0, 0.0, 1.0),
    ]
}

#[test]
fn split_points_are_sorted_and_deduplicated() {
    let tol = Tolerances::default();
    // Three segments through one point: each crossing is reported twice per segment.
    let segs = vec![
        Segment::from_coords(-2.0, 0.0, 2.0, 0.0),
        Segment::from_coords(0.0, -2.0, 0.0, 2.0),
        Segment::from_coords(-2.0, -2.0, 2.0, 2.0),
    ];
    let crossings = pairwise_crossings(&segs, &tol);
    assert_eq!(crossings.len(), 3);
    let splits = split_points(&segs, &crossings, &tol);
    for s in &splits {
        assert_eq!(s.len(), 3);
        assert!(s.windows(2).all(|w| w[0].t <= w[1].t));
        assert!((s[1].point - vector![0.0, 0.0]).norm() < 1e-12);
    }
}

#[test]
fn x_crossing_merges_into_one_vertex() {
    let tol = Tolerances::default();
    let arr = build_arrangement(&cross_pair(), &tol);
    // 4 tips + centre; 4 atomic edges.
    assert_eq!(arr.vertex_count(), 5);
    assert_eq!(arr.edge_count(), 4);
    let centre = arr
        .vertices
        .iter()
        .find(|v| v.pos.norm() < 1e-9)
        .expect("centre vertex");
    assert_eq!(centre.out.len(), 4);
}

#[test]
fn t_junction_and_shared_endpoints_merge() {
    let tol = Tolerances::default();
    let segs = vec![
        Segment::from_coords(0.0, 0.0, 10.0, 0.0),
        // Ends exactly on the first segment's interior.
        Segment::from_coords(5.0, 5.0, 5.0, 0.0),
        // Starts a hair away from the first segment's endpoint.
        Segment::from_coords(10.0 + 1e-7, 0.0, 10.0, 10.0),
    ];
    let arr = build_arrangement(&segs, &tol);
    // (0,0) (5,0) (10,0) (5,5) (10,10)
    assert_eq!(arr.vertex_count(), 5);
    assert_eq!(arr.edge_count(), 4);
    for (i, a) in arr.vertices.iter().enumerate() {
        for b in arr.vertices.iter().skip(i + 1) {
            assert!((a.pos - b.pos).norm() >= tol.eps_merge);
        }
    }
}

#[test]
fn twins_and_fans_are_consistent() {
    let tol = Tolerances::default();
    let mut segs = square(10.0);
    segs.push(Segment::from_coords(0.0, 0.0, 10.0, 10.0));
    let arr = build_arrangement(&segs, &tol);
    for (i, h) in arr.half_edges.iter().enumerate() {
        let t = arr.half_edge(h.twin);
        assert_eq!(t.twin, HalfEdgeId(i));
        assert_eq!(t.origin, h.dest);
        assert_eq!(t.dest, h.origin);
        assert_eq!(arr.vertex(h.origin).out[h.slot], HalfEdgeId(i));
    }
    for v in &arr.vertices {
        let angles: Vec<f64> = v.out.iter().map(|&h| arr.half_edge(h).angle).collect();
        assert!(angles.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn collinear_overlap_does_not_duplicate_edges() {
    let tol = Tolerances::default();
    let mut segs = square(10.0);
    segs.push(Segment::from_coords(0.0, 0.0, 10.0, 0.0));
    let arr = build_arrangement(&segs, &tol);
    assert_eq!(arr.edge_count(), 4);
}

#[test]
fn square_traces_inner_and_outer_face() {
    let tol = Tolerances::default();
    let arr = build_arrangement(&square(10.0), &tol);
    let trace = trace_faces(&arr, None);
    assert_eq!(trace.consumed, arr.half_edge_count());
    assert_eq!(trace.abandoned, 0);
    assert_eq!(trace.faces.len(), 2);
    let mut areas: Vec<f64> = trace.faces.iter().map(|f| signed_area(f)).collect();
    areas.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((areas[0] + 100.0).abs() < 1e-9);
    assert!((areas[1] - 100.0).abs() < 1e-9);
}

#[test]
fn diagonal_splits_square_into_two_ccw_triangles() {
    let tol = Tolerances::default();
    let mut segs = square(10.0);
    segs.push(Segment::from_coords(0.0, 0.0, 10.0, 10.0));
    let arr = build_arrangement(&segs, &tol);
    let trace = trace_faces(&arr, None);
    let ccw: Vec<f64> = trace
        .faces
        .iter()
        .map(|f| signed_area(f))
        .filter(|&a| a > 0.0)
        .collect();
    assert_eq!(ccw.len(), 2);
    assert!(ccw.iter().all(|a| (a - 50.0).abs() < 1e-9));
}

#[test]
fn dangling_edges_become_short_circuits() {
    let tol = Tolerances::default();
    let trace = trace_faces(&build_arrangement(&cross_pair(), &tol), None);
    // A plus sign bounds nothing: one walk around the whole tree.
    assert_eq!(trace.faces.len(), 1);
    assert!(signed_area(&trace.faces[0]).abs() < 1e-12);
    assert_eq!(trace.consumed, 8);

    let single = build_arrangement(&[Segment::from_coords(0.0, 0.0, 1.0, 0.0)], &tol);
    let trace = trace_faces(&single, None);
    assert!(trace.faces.is_empty());
    assert_eq!(trace.short_circuits, 1);
}

#[test]
fn step_cap_abandons_long_walks_only() {
    let tol = Tolerances::default();
    let mut segs = square(10.0);
    segs.push(Segment::from_coords(0.0, 0.0, 10.0, 10.0));
    let arr = build_arrangement(&segs, &tol);
    // Triangles need 3 steps, the outer square 4.
    let trace = trace_faces(&arr, Some(3));
    assert_eq!(trace.consumed, arr.half_edge_count());
    assert_eq!(trace.faces.len(), 2);
    assert!(trace.abandoned >= 1);
}

#[test]
fn empty_input_yields_empty_graph() {
    let tol = Tolerances::default();
    let arr = build_arrangement(&[], &tol);
    assert_eq!(arr.vertex_count(), 0);
    let trace = trace_faces(&arr, None);
    assert!(trace.faces.is_empty());
    assert_eq!(trace.consumed, 0);
}

fn spike_square() -> Vec<Segment> {
    let mut segs = square(100.0);
    segs.push(Segment::from_coords(0.0, 50.0, 50.0, 50.0));
    segs
}

#[test]
fn spike_inside_square_joins_the_inner_walk() {
    let tol = Tolerances::default();
    let arr = build_arrangement(&spike_square(), &tol);
    assert_eq!(arr.vertex_count(), 6);
    assert_eq!(arr.edge_count(), 6);
    let trace = trace_faces(&arr, None);
    assert_eq!(trace.consumed, 12);
    assert_eq!(trace.abandoned, 0);
    assert_eq!(trace.faces.len(), 2);

    let inner = trace
        .faces
        .iter()
        .find(|f| signed_area(f) > 0.0)
        .expect("inner walk");
    // Four corners, the split point twice, and the tip once.
    assert_eq!(inner.len(), 7);
    assert!((signed_area(inner) - 10_000.0).abs() < 1e-9);
    let count = |q: Point| inner.iter().filter(|p| (*p - q).norm() < 1e-9).count();
    assert_eq!(count(vector![0.0, 50.0]), 2);
    assert_eq!(count(vector![50.0, 50.0]), 1);
}

#[test]
fn branching_tree_inside_square_stays_in_one_walk() {
    let tol = Tolerances::default();
    let mut segs = spike_square();
    segs.push(Segment::from_coords(50.0, 50.0, 70.0, 30.0));
    segs.push(Segment::from_coords(50.0, 50.0, 70.0, 70.0));
    let arr = build_arrangement(&segs, &tol);
    assert_eq!(arr.vertex_count(), 8);
    assert_eq!(arr.edge_count(), 8);
    let trace = trace_faces(&arr, None);
    let mut lens: Vec<usize> = trace.faces.iter().map(|f| f.len()).collect();
    lens.sort_unstable();
    // Outer side of the square (split once), inner side plus both sides of the tree.
    assert_eq!(lens, vec![5, 11]);
    let total: f64 = trace.faces.iter().map(|f| signed_area(f)).sum();
    assert!(total.abs() < 1e-9);
}
