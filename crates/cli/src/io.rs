//! JSON formats for segments in and faces out.
//!
//! Segments: `[[[x1, y1], [x2, y2]], ...]`.
//! Faces: `{ "faces": [{ "vertices": [[x, y], ...], "area": .., "centroid": [x, y] }], "stats": {..} }`.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use wirefaces::{Point, Polygon, Polygonization, Segment};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SegmentJson(pub [f64; 2], pub [f64; 2]);

impl From<SegmentJson> for Segment {
    fn from(s: SegmentJson) -> Self {
        Segment::from_coords(s.0[0], s.0[1], s.1[0], s.1[1])
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FaceJson {
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
    pub centroid: [f64; 2],
}

impl From<&Polygon> for FaceJson {
    fn from(p: &Polygon) -> Self {
        let c: Point = p.centroid();
        FaceJson {
            vertices: p.vertices().iter().map(|v| [v.x, v.y]).collect(),
            area: p.area(),
            centroid: [c.x, c.y],
        }
    }
}

/// Parse a segment list; non-finite coordinates are rejected.
pub fn parse_segments(text: &str) -> Result<Vec<Segment>> {
    let raw: Vec<SegmentJson> = serde_json::from_str(text).context("parsing segment JSON")?;
    for (i, s) in raw.iter().enumerate() {
        if !s.0.iter().chain(s.1.iter()).all(|c| c.is_finite()) {
            bail!("segment {i} has a non-finite coordinate");
        }
    }
    Ok(raw.into_iter().map(Segment::from).collect())
}

pub fn read_segments(path: &Path) -> Result<Vec<Segment>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_segments(&text).with_context(|| format!("in {}", path.display()))
}

/// Faces document for a polygonization result.
pub fn faces_document(result: &Polygonization) -> Value {
    let faces: Vec<FaceJson> = result.faces.iter().map(FaceJson::from).collect();
    let s = &result.stats;
    json!({
        "faces": faces,
        "stats": {
            "segments": s.segments,
            "skipped_segments": s.skipped_segments,
            "crossings": s.crossings,
            "vertices": s.vertices,
            "half_edges": s.half_edges,
            "raw_faces": s.raw_faces,
            "abandoned_traces": s.abandoned_traces,
            "degenerate_faces": s.degenerate_faces,
            "bounded_faces": s.bounded_faces
        }
    })
}

pub fn write_json(path: &Path, doc: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}
