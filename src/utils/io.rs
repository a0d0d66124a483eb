use clap::{Parser, ValueEnum};

use crate::error::{Result, SolverError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProblemKind {
    Knapsack,
    Subset,
    Tsp,
}

impl ProblemKind {
    pub fn name(self) -> &'static str {
        match self {
            ProblemKind::Knapsack => "knapsack",
            ProblemKind::Subset => "subset",
            ProblemKind::Tsp => "tsp",
        }
    }

    fn default_sizes(self) -> Vec<usize> {
        match self {
            ProblemKind::Knapsack => vec![10, 20, 40, 80, 160, 320, 640],
            ProblemKind::Subset => vec![10, 20, 40, 80, 160],
            ProblemKind::Tsp => (2..=12).collect(),
        }
    }
}

#[derive(Parser)]
pub struct Args {
    /// Problem family to benchmark
    #[arg(short, long, value_enum)]
    pub problem: ProblemKind,

    /// Instance sizes, comma separated (defaults depend on the problem)
    #[arg(short = 'n', long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Number of random instances per size
    #[arg(short, long, default_value_t = 30)]
    pub trials: usize,

    /// Seed for the instance generator (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path of a parquet file receiving one row per solver run
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn resolve_sizes(args: &Args) -> Result<Vec<usize>> {
    if args.trials == 0 {
        return Err(SolverError::invalid_argument("--trials must be at least 1"));
    }

    match &args.sizes {
        Some(sizes) if sizes.is_empty() => Err(SolverError::invalid_argument(
            "--sizes must list at least one size",
        )),
        Some(sizes) => Ok(sizes.clone()),
        None => Ok(args.problem.default_sizes()),
    }
}
