//! Cube wireframe → 2D segments (rotation + perspective projection).
//!
//! All 3D work lives here; output segments are in canvas pixels with y pointing down.

use nalgebra::{Rotation3, Vector3};
use wirefaces::{Point, Segment};

/// Corners of the cube `[-1, 1]³`.
pub const CUBE_VERTICES: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// The 12 cube edges as vertex index pairs.
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Perspective camera looking down +z at a `width × height` canvas.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
    pub fov: f64,
    /// Distance added to z before the perspective divide.
    pub dist: f64,
    /// World-to-pixel scale.
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 560.0,
            fov: 500.0,
            dist: 3.0,
            scale: 100.0,
        }
    }
}

impl Camera {
    pub fn project(&self, v: Vector3<f64>) -> Point {
        let zz = v.z + self.dist;
        let s = self.fov / (self.fov + zz * self.scale);
        Point::new(
            self.width * 0.5 + v.x * self.scale * s,
            self.height * 0.5 - v.y * self.scale * s,
        )
    }
}

/// Rotation about Y by `rot_y`, then about X by `rot_x`.
pub fn orientation(rot_x: f64, rot_y: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), rot_x)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), rot_y)
}

/// Projected cube edges for the given orientation.
pub fn cube_segments(rot_x: f64, rot_y: f64, camera: &Camera) -> Vec<Segment> {
    let r = orientation(rot_x, rot_y);
    let projected: Vec<Point> = CUBE_VERTICES
        .iter()
        .map(|&[x, y, z]| camera.project(r * Vector3::new(x, y, z)))
        .collect();
    CUBE_EDGES
        .iter()
        .map(|&(a, b)| Segment::new(projected[a], projected[b]))
        .collect()
}
