use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use wirefaces::sample::{draw_segments, ReplayToken, SegmentCfg};
use wirefaces::{polygonize_with, OuterFace, PolygonizeCfg, Polygonization, Tolerances};

mod io;
mod provenance;
mod wireframe;

use provenance::Provenance;
use wireframe::{cube_segments, Camera};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Bounded faces of 2D segment arrangements")]
struct Cmd {
    #[command(flatten)]
    tol: TolArgs,

    #[command(subcommand)]
    action: Action,
}

/// Overrides for the polygonizer tolerances.
#[derive(Args)]
struct TolArgs {
    /// Minimum |area| of an output face
    #[arg(long, global = true)]
    eps_area: Option<f64>,
    /// Vertex merge radius
    #[arg(long, global = true)]
    eps_merge: Option<f64>,
    /// How the outer face is recognised
    #[arg(long, value_enum, global = true, default_value_t = OuterArg::Largest)]
    outer: OuterArg,
    /// Step cap for a single face walk
    #[arg(long, global = true)]
    max_trace_steps: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OuterArg {
    /// Drop the largest-area circuit
    Largest,
    /// Drop every circuit with negative signed area (clockwise with y up)
    Clockwise,
}

#[derive(Subcommand)]
enum Action {
    /// Polygonize a JSON segment list
    Polygonize {
        #[arg(long)]
        input: PathBuf,
        /// Faces JSON path; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Project the cube wireframe and polygonize it
    Cube {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        rot_x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        rot_y: f64,
        #[arg(long, default_value_t = 560.0)]
        width: f64,
        #[arg(long, default_value_t = 560.0)]
        height: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Polygonize random segments and print the counts
    Random {
        #[arg(long, default_value_t = 12)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 500.0)]
        extent: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

impl TolArgs {
    fn cfg(&self) -> Result<PolygonizeCfg> {
        let mut tol = Tolerances::default();
        if let Some(a) = self.eps_area {
            if !a.is_finite() || a < 0.0 {
                bail!("--eps-area must be non-negative, got {a}");
            }
            tol.eps_area = a;
        }
        if let Some(m) = self.eps_merge {
            if !m.is_finite() || m <= 0.0 {
                bail!("--eps-merge must be positive, got {m}");
            }
            tol.eps_merge = m;
        }
        let outer = match self.outer {
            OuterArg::Largest => OuterFace::LargestArea,
            OuterArg::Clockwise => OuterFace::Clockwise,
        };
        Ok(PolygonizeCfg {
            tol,
            outer,
            max_trace_steps: self.max_trace_steps,
        })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.tol.cfg()?;
    match cmd.action {
        Action::Polygonize { input, out } => run_polygonize(input, out, &cfg),
        Action::Cube {
            rot_x,
            rot_y,
            width,
            height,
            out,
        } => run_cube(rot_x, rot_y, width, height, out, &cfg),
        Action::Random {
            count,
            seed,
            extent,
        } => run_random(count, seed, extent, &cfg),
        Action::Report => report(),
    }
}

fn emit(result: &Polygonization, out: Option<PathBuf>, params: serde_json::Value) -> Result<()> {
    let doc = io::faces_document(result);
    match out {
        Some(path) => {
            io::write_json(&path, &doc)?;
            let prov = Provenance::new(params, Vec::new()).write_beside(&path)?;
            tracing::info!(out = %path.display(), provenance = %prov.display(), "wrote faces");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn run_polygonize(input: PathBuf, out: Option<PathBuf>, cfg: &PolygonizeCfg) -> Result<()> {
    let segments = io::read_segments(&input)?;
    tracing::info!(input = %input.display(), segments = segments.len(), "polygonize");
    let result = polygonize_with(&segments, cfg);
    tracing::info!(
        faces = result.faces.len(),
        crossings = result.stats.crossings,
        "polygonized"
    );
    let params = json!({
        "command": "polygonize",
        "input": input.to_string_lossy(),
        "eps_area": cfg.tol.eps_area,
        "eps_merge": cfg.tol.eps_merge
    });
    emit(&result, out, params)
}

fn run_cube(
    rot_x: f64,
    rot_y: f64,
    width: f64,
    height: f64,
    out: Option<PathBuf>,
    cfg: &PolygonizeCfg,
) -> Result<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        bail!("canvas must have positive size, got {width}x{height}");
    }
    let camera = Camera {
        width,
        height,
        ..Camera::default()
    };
    let segments = cube_segments(rot_x, rot_y, &camera);
    let result = polygonize_with(&segments, cfg);
    tracing::info!(rot_x, rot_y, faces = result.faces.len(), "cube");
    let params = json!({
        "command": "cube",
        "rot_x": rot_x,
        "rot_y": rot_y,
        "width": width,
        "height": height
    });
    emit(&result, out, params)
}

fn run_random(count: usize, seed: u64, extent: f64, cfg: &PolygonizeCfg) -> Result<()> {
    let seg_cfg = SegmentCfg {
        count,
        extent,
        ..SegmentCfg::default()
    };
    let segments = draw_segments(seg_cfg, ReplayToken { seed, index: 0 });
    let result = polygonize_with(&segments, cfg);
    let s = result.stats;
    tracing::info!(
        count,
        seed,
        crossings = s.crossings,
        vertices = s.vertices,
        faces = s.bounded_faces,
        degenerate = s.degenerate_faces,
        "random"
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "seed": seed,
            "segments": s.segments,
            "crossings": s.crossings,
            "vertices": s.vertices,
            "bounded_faces": s.bounded_faces
        }))?
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = Provenance::new(json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
