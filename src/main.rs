//! # held-karp CLI
//!
//! Reads a cost matrix from a text file, asks for a starting city and
//! prints an optimal tour.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, error};
use std::io::{self, BufRead, Write};
use std::path::Path;
use u_heldkarp::heldkarp::{HeldKarpConfig, HeldKarpRunner, Strategy};
use u_heldkarp::matrix::AdjacencyMatrix;
use u_heldkarp::MatrixError;

/// Command-line interface for the Held-Karp solver
#[derive(Parser)]
#[command(name = "held-karp")]
#[command(version)]
#[command(about = "Exact TSP solver using Held-Karp dynamic programming")]
#[command(long_about = "Solves the Traveling Salesman Problem exactly for a directed cost matrix.

The input file holds one row per line, whitespace-delimited; use `inf` for a missing edge:
  0   10  15  20
  10  0   35  25
  15  35  0   inf
  20  25  30  0")]
struct Cli {
    /// Matrix file
    file: String,

    /// Starting city, 1-based (prompted for when omitted)
    #[arg(short, long)]
    start: Option<usize>,

    /// Evaluation strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Recursive)]
    strategy: StrategyArg,

    /// Refuse matrices with more cities than this
    #[arg(long, default_value_t = 20)]
    max_cities: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Recursive,
    Iterative,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::Iterative => Strategy::Iterative,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&cli) {
        error!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let matrix = load_matrix(&cli.file)?;
    let n = matrix.size();
    debug!("loaded {n}x{n} matrix from {}", cli.file);

    println!("\nInput matrix:");
    print!("{matrix}");

    let display_start = match cli.start {
        Some(start) => start,
        None => prompt_start(n)?,
    };
    if !(1..=n).contains(&display_start) {
        bail!("starting node must be between 1 and {n}");
    }
    let start = display_start - 1;

    let config = HeldKarpConfig::default()
        .with_strategy(cli.strategy.into())
        .with_max_cities(cli.max_cities);
    let result = HeldKarpRunner::run(&matrix, start, &config)?;

    let Some(tour) = result.tour else {
        println!("\nNo valid tour exists (cost is infinite).");
        return Ok(());
    };

    println!("\n --------- SOLUTION ---------");
    println!("Tour path: {tour}");
    println!("\nTour details:");
    for (k, (from, to, cost)) in tour.edges(&matrix).enumerate() {
        println!("{}) {} → {}: {cost:.1}", k + 1, from + 1, to + 1);
    }
    println!("\nTotal tour cost: {:.1}", tour.cost());
    debug!(
        "{} memo states, {} memo hits",
        result.memo_states, result.memo_hits
    );

    Ok(())
}

fn load_matrix(file: &str) -> Result<AdjacencyMatrix> {
    match AdjacencyMatrix::from_path(Path::new(file)) {
        Ok(matrix) => Ok(matrix),
        Err(MatrixError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            Err(anyhow!("File '{file}' not found."))
        }
        Err(e) => Err(e).with_context(|| format!("failed to read matrix from '{file}'")),
    }
}

fn prompt_start(n: usize) -> Result<usize> {
    println!("\nEnter the starting city (1 to {n}):");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read starting city")?;
    line.trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("starting node must be between 1 and {n}"))
}
