//! Basic 2D types and the tolerance set shared by every pipeline stage.
//!
//! - `Tolerances`: centralizes epsilons for merging, parallelism, parameter
//!   bands, dedupe, collinearity and area filtering.
//! - `Segment`: immutable input segment `a → b`.

use nalgebra::Vector2;

/// Plane point (also used for plane vectors).
pub type Point = Vector2<f64>;

/// Tolerances for the polygonization pipeline.
///
/// Units follow the input coordinates (e.g. screen pixels); `eps_area` is in
/// squared units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Two points closer than this are the same arrangement vertex.
    pub eps_merge: f64,
    /// `|den|` below this means the segment pair is treated as parallel.
    pub eps_parallel: f64,
    /// Slack around `[0, 1]` for the intersection parameters `t` and `u`.
    pub eps_param: f64,
    /// Consecutive face vertices closer than this are merged during cleanup.
    pub eps_dup: f64,
    /// `|cross|` below this marks a face vertex as collinear with its neighbours.
    pub eps_collinear: f64,
    /// Faces with `|area|` below this are dropped as degenerate.
    pub eps_area: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            eps_merge: 1e-5,
            eps_parallel: 1e-6,
            eps_param: 1e-6,
            eps_dup: 1e-4,
            eps_collinear: 1e-6,
            eps_area: 1.0,
        }
    }
}

/// Closed segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn from_coords(ax: f64, ay: f64, bx: f64, by: f64) -> Self {
        Self::new(Point::new(ax, ay), Point::new(bx, by))
    }

    /// Direction vector `b - a` (not normalized).
    #[inline]
    pub fn direction(&self) -> Point {
        self.b - self.a
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Point at parameter `t` (`t = 0` is `a`, `t = 1` is `b`).
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.a + self.direction() * t
    }
}
