use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chronosat::Solver;

const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const END: &str = "\u{1b}[0m";

/// Solve a DIMACS CNF formula with a DPLL solver.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a DIMACS CNF file.
    input: PathBuf,

    /// Print solver statistics after solving.
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let mut solver = Solver::from_dimacs(&input).context("parsing DIMACS input")?;

    match solver.solve() {
        chronosat::Result::Sat(model) => {
            println!("{GREEN}SAT{END}");
            let assignment: Vec<String> = model.as_vec().iter().map(i32::to_string).collect();
            println!("{}", assignment.join(" "));
        }
        chronosat::Result::Unsat(_) => {
            println!("{RED}UNSAT{END}");
        }
    }

    if args.stats {
        eprintln!("{}", solver.stats());
    }

    Ok(())
}
