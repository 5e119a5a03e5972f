//! triangle-sum CLI: run the upper-triangle summation variants on a generated matrix.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;
use thiserror::Error;
use triangle_sum::{
    loop_conditional, SumStrategy, TriangleError, TriangularMatrixSummer, SUM_TOLERANCE,
};

#[derive(Parser)]
#[command(name = "triangle-sum")]
#[command(about = "Upper-triangle summation variants and loop-ordering demos")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum the upper triangle of a random square matrix
    Sum {
        /// Matrix dimension
        #[arg(short, long, default_value = "1024", allow_hyphen_values = true)]
        size: i64,

        /// Random seed for reproducibility (entropy if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Strategy: baseline, skip-inner, bounded-inner or all
        #[arg(long, default_value = "all")]
        strategy: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare the branchy and bounded integer loops
    Loops {
        /// Loop limit
        #[arg(short, long, default_value = "1024")]
        limit: u32,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Triangle(#[from] TriangleError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("strategies disagree: {0}")]
    Disagreement(String),
}

impl CliError {
    /// 1 for bad input or output failure, 2 when the strategies disagree.
    fn exit_code(&self) -> u8 {
        match self {
            Self::Triangle(_) | Self::Json(_) => 1,
            Self::Disagreement(_) => 2,
        }
    }
}

#[derive(Serialize)]
struct StrategyResult {
    strategy: SumStrategy,
    sum: f64,
}

#[derive(Serialize)]
struct SumReport {
    size: usize,
    seed: Option<u64>,
    results: Vec<StrategyResult>,
    agree: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "triangle_sum=info"
                    .parse()
                    .expect("valid tracing directive"),
            ),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sum {
            size,
            seed,
            strategy,
            json,
        } => cmd_sum(size, seed, &strategy, json),
        Commands::Loops { limit } => {
            cmd_loops(limit);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn parse_strategies(name: &str) -> Result<Vec<SumStrategy>, CliError> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(SumStrategy::all().to_vec());
    }
    Ok(vec![name.parse::<SumStrategy>()?])
}

fn cmd_sum(size: i64, seed: Option<u64>, strategy: &str, json: bool) -> Result<(), CliError> {
    let strategies = parse_strategies(strategy)?;
    let summer = TriangularMatrixSummer::new(size, seed)?;
    tracing::info!(size = summer.size(), strategies = strategies.len(), "matrix ready");

    let results: Vec<StrategyResult> = strategies
        .into_iter()
        .map(|strategy| StrategyResult {
            strategy,
            sum: summer.sum(strategy),
        })
        .collect();

    let reference = results.first().map_or(0.0, |r| r.sum);
    let agree = results
        .iter()
        .all(|r| (r.sum - reference).abs() < SUM_TOLERANCE);

    let report = SumReport {
        size: summer.size(),
        seed,
        results,
        agree,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Upper-triangle sum, {0}x{0} matrix", report.size);
        println!("===============================");
        for r in &report.results {
            println!("  {:<14} {:.9}", r.strategy.name(), r.sum);
        }
        println!("  agree within {SUM_TOLERANCE:e}: {}", report.agree);
    }

    if !report.agree {
        let detail = report
            .results
            .iter()
            .map(|r| format!("{}={}", r.strategy, r.sum))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!(%detail, "summation strategies disagree");
        return Err(CliError::Disagreement(detail));
    }
    Ok(())
}

fn cmd_loops(limit: u32) {
    tracing::info!(limit, "running loop-conditional comparison");
    let original = loop_conditional::original(limit);
    let optimized = loop_conditional::optimized(limit);
    println!("Loop conditional, limit {limit}");
    println!("  original   {original}");
    println!("  optimized  {optimized}");
    println!("  expected   {}", loop_conditional::closed_form(limit));
}
