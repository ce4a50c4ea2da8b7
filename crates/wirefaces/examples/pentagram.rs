//! Print the bounded faces of a pentagram and a random segment soup.
//!
//! Usage:
//!   cargo run -p wirefaces --example pentagram
//!   cargo run -p wirefaces --example pentagram -- 7

use wirefaces::sample::{draw_segments, star_edges, ReplayToken, SegmentCfg};
use wirefaces::{polygonize, polygonize_with, Point, PolygonizeCfg};

fn main() {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);

    let star = star_edges(5, 2, Point::new(250.0, 250.0), 200.0);
    for (i, face) in polygonize(&star).iter().enumerate() {
        let c = face.centroid();
        println!(
            "pentagram face {i}: n={}, area={:.1}, centroid=({:.1}, {:.1})",
            face.len(),
            face.area(),
            c.x,
            c.y
        );
    }

    let soup = draw_segments(SegmentCfg::default(), ReplayToken { seed, index: 0 });
    let out = polygonize_with(&soup, &PolygonizeCfg::default());
    println!(
        "random soup (seed {seed}): {} segments, {} crossings, {} bounded faces",
        out.stats.segments, out.stats.crossings, out.stats.bounded_faces
    );
}
