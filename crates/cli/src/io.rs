use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use closest_pair::planar::{ClosestPair, PointSet};
use polars::prelude::*;
use serde::Serialize;

/// JSON report emitted by the `solve` subcommand.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub n: usize,
    pub distance: f64,
    pub i: usize,
    pub j: usize,
    pub elapsed_ms: f64,
}

impl SolveReport {
    pub fn new(result: &ClosestPair, n: usize, elapsed_ms: f64) -> Self {
        Self {
            n,
            distance: result.distance,
            i: result.i,
            j: result.j,
            elapsed_ms,
        }
    }
}

/// Read `x`/`y` float columns from a CSV into a point batch.
///
/// Null cells become NaN so the solver reports the offending row index
/// instead of this layer guessing a policy.
pub fn read_points_csv(path: &str) -> Result<PointSet> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?;
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {path}"))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let coords: Vec<(f64, f64)> = xs
        .into_iter()
        .zip(ys.into_iter())
        .map(|(x, y)| (x.unwrap_or(f64::NAN), y.unwrap_or(f64::NAN)))
        .collect();
    Ok(PointSet::from_coords(coords))
}

/// Write a point batch as a two-column CSV, creating parent dirs as needed.
pub fn write_points_csv(path: &str, set: &PointSet) -> Result<()> {
    let xs: Vec<f64> = set.points().iter().map(|p| p.x).collect();
    let ys: Vec<f64> = set.points().iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys).context("building point frame")?;
    ensure_parent(path)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {path}"))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}

/// Write the JSON report, creating parent dirs as needed.
pub fn write_report(path: &str, report: &SolveReport) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}

fn ensure_parent(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
