//! Closed polygons as ordered vertex rings.

use super::types::Point;

/// Shoelace signed area of a closed ring.
///
/// Positive when the ring turns counterclockwise with the y axis pointing up;
/// on a y-down canvas the same ring looks clockwise on screen.
pub fn signed_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// Closed polygon; the last vertex connects back to the first.
///
/// Invariant (for pipeline output): at least 3 vertices and `|area|` above the
/// configured area epsilon.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// `signed_area() > 0`: counterclockwise when y points up.
    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Area-weighted centroid; falls back to the vertex mean for near-zero area.
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len();
        if n == 0 {
            return Point::zeros();
        }
        let mut a = 0.0;
        let mut c = Point::zeros();
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            let w = p.x * q.y - q.x * p.y;
            a += w;
            c += (p + q) * w;
        }
        a *= 0.5;
        if a.abs() < 1e-6 {
            let sum = self.vertices.iter().fold(Point::zeros(), |acc, p| acc + p);
            return sum / n as f64;
        }
        c / (6.0 * a)
    }

    /// Copy shifted by `offset`.
    pub fn translated(&self, offset: Point) -> Polygon {
        Polygon::new(self.vertices.iter().map(|p| p + offset).collect())
    }

    /// Same ring up to cyclic rotation and reversal, vertex-wise within `eps`.
    pub fn approx_eq_cyclic(&self, other: &Polygon, eps: f64) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        let a = &self.vertices;
        let b = &other.vertices;
        let close = |p: Point, q: Point| (p - q).norm() <= eps;
        (0..n).any(|shift| {
            let forward = (0..n).all(|k| close(a[k], b[(k + shift) % n]));
            let backward = (0..n).all(|k| close(a[k], b[(shift + n - k) % n]));
            forward || backward
        })
    }
}
