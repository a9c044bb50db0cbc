use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use closest_pair::planar::rand::{draw_point_cloud, CloudCfg, CloudSize, ReplayToken};
use closest_pair::planar::{solve, SolveCfg};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest-pair runner and input generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve the closest pair for a CSV of points, emit a JSON report
    Solve {
        /// CSV with `x` and `y` float columns
        #[arg(long)]
        input: String,
        /// Path for the JSON report; stdout when omitted
        #[arg(long)]
        out: Option<String>,
        /// Brute-force cutoff for the recursion base case
        #[arg(long, default_value_t = 3)]
        cutoff: usize,
    },
    /// Generate a uniform random point cloud as CSV
    Gen {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Half side length of the sampling square
        #[arg(long, default_value_t = 1000.0)]
        half_extent: f64,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, out, cutoff } => run_solve(input, out, cutoff),
        Action::Gen {
            count,
            seed,
            half_extent,
            out,
        } => run_gen(count, seed, half_extent, out),
    }
}

fn run_solve(input: String, out: Option<String>, cutoff: usize) -> Result<()> {
    let set = io::read_points_csv(&input)?;
    tracing::info!(input, n = set.len(), cutoff, "solve");

    let start = Instant::now();
    let result = solve(
        &set,
        SolveCfg {
            brute_cutoff: cutoff,
        },
    )
    .with_context(|| format!("solving {input}"))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        distance = result.distance,
        i = result.i,
        j = result.j,
        elapsed_ms,
        "solved"
    );

    let report = io::SolveReport::new(&result, set.len(), elapsed_ms);
    match out {
        Some(path) => io::write_report(&path, &report)?,
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_gen(count: usize, seed: u64, half_extent: f64, out: String) -> Result<()> {
    tracing::info!(count, seed, half_extent, out, "gen");
    let set = draw_point_cloud(
        CloudCfg {
            size: CloudSize::Fixed(count),
            half_extent,
        },
        ReplayToken { seed, index: 0 },
    );
    io::write_points_csv(&out, &set)
}
