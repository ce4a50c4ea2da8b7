//! 2D primitives for the arrangement pipeline.
//!
//! Purpose
//! - Points, segments and polygons in `f64` plane coordinates.
//! - Pairwise segment intersection (the leaf of the pipeline).
//! - Proximity-based point identity via a small grid index.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; equality is always eps-aware.
//! - All tolerances live in `Tolerances`; nothing here hard-codes an epsilon.
//!
//! Code cross-refs: `arrangement::build_arrangement`, `normalize::normalize`

mod intersect;
mod polygon;
mod types;
mod util;

pub use intersect::{intersect_segments, pairwise_crossings, Crossing, PairCrossing};
pub use polygon::{signed_area, Polygon};
pub use types::{Point, Segment, Tolerances};
pub use util::{cross2, PointIndex};
