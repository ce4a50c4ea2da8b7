use std::collections::HashMap;

use super::types::Point;

/// z-component of `a × b`. Positive when `a → b` turns counterclockwise.
#[inline]
pub fn cross2(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Grid-bucketed point set with proximity lookup.
///
/// Points within `radius` of a stored point resolve to that point's id.
/// Cells are `2 * radius` wide, so any match lies in the 3×3 block around the
/// query cell.
#[derive(Clone, Debug)]
pub struct PointIndex {
    cells: HashMap<(i64, i64), Vec<usize>>,
    points: Vec<Point>,
    cell_size: f64,
    radius: f64,
}

impl PointIndex {
    pub fn new(radius: f64) -> Self {
        let radius = radius.max(f64::MIN_POSITIVE);
        Self {
            cells: HashMap::new(),
            points: Vec::new(),
            cell_size: radius * 2.0,
            radius,
        }
    }

    #[inline]
    fn cell_of(&self, p: Point) -> (i64, i64) {
        let discretize = |v: f64| (v / self.cell_size).floor() as i64;
        (discretize(p.x), discretize(p.y))
    }

    /// Id of the closest stored point within `radius`, if any.
    pub fn find(&self, p: Point) -> Option<usize> {
        let (cx, cy) = self.cell_of(p);
        let mut best: Option<(usize, f64)> = None;
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(ids) = self.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &id in ids {
                    let d = (self.points[id] - p).norm();
                    if d < self.radius && best.is_none_or(|(_, bd)| d < bd) {
                        best = Some((id, d));
                    }
                }
            }
        }
        best.map(|(id, _)| id)
    }

    /// Return the id of a stored point near `p`, inserting `p` if none exists.
    /// The flag is `true` when a new point was created.
    pub fn find_or_insert(&mut self, p: Point) -> (usize, bool) {
        if let Some(id) = self.find(p) {
            return (id, false);
        }
        let id = self.points.len();
        self.points.push(p);
        self.cells.entry(self.cell_of(p)).or_default().push(id);
        (id, true)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
