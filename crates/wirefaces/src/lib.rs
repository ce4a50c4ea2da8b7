//! Bounded faces of the planar arrangement induced by 2D line segments.
//!
//! Pipeline (leaves first)
//! - `geom`: segment intersection, polygons, proximity point index.
//! - `arrangement`: split segments into atomic edges, build the half-edge
//!   graph, walk its faces.
//! - `normalize`: dedupe, collinearity compression, degenerate and outer-face
//!   filtering.
//! - `polygonize`: the end-to-end call.
//!
//! ```
//! use wirefaces::{polygonize, Segment};
//!
//! let square = [
//!     Segment::from_coords(0.0, 0.0, 100.0, 0.0),
//!     Segment::from_coords(100.0, 0.0, 100.0, 100.0),
//!     Segment::from_coords(100.0, 100.0, 0.0, 100.0),
//!     Segment::from_coords(0.0, 100.0, 0.0, 0.0),
//! ];
//! let faces = polygonize(&square);
//! assert_eq!(faces.len(), 1);
//! assert!((faces[0].area() - 10_000.0).abs() < 1e-9);
//! ```
//!
//! Every call is pure and builds its own graph; there is no shared state.

pub mod arrangement;
pub mod geom;
pub mod normalize;
pub mod polygonize;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Point, Polygon, Segment, Tolerances};
pub use normalize::OuterFace;
pub use polygonize::{polygonize, polygonize_with, PolygonizeCfg, Polygonization, Stats};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arrangement::{build_arrangement, trace_faces, Arrangement};
    pub use crate::geom::{intersect_segments, Crossing, Point, Polygon, Segment, Tolerances};
    pub use crate::normalize::OuterFace;
    pub use crate::polygonize::{polygonize, polygonize_with, PolygonizeCfg, Polygonization};
    pub use crate::sample::{draw_segments, grid_edges, star_edges, ReplayToken, SegmentCfg};
}
