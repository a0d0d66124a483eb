use std::time::Instant;

use combopt::bench;
use combopt::metrics;
use combopt::utils::{Args, Parser, resolve_sizes};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let sizes = resolve_sizes(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    println!("------");
    println!("Problem: {}", args.problem.name());
    println!("Sizes: {:?}", sizes);
    println!("Trials: {}", args.trials);
    println!("Seed: {}", seed);

    let start_time = Instant::now();
    let records = bench::run(args.problem, &sizes, args.trials, &mut rng)?;
    println!("Time computing: {:?}", start_time.elapsed());

    println!("{:<18} {:>6} {:>6} {:>14} {:>10}", "Algorithm", "N", "Runs", "Mean time (ms)", "Score");
    for summary in bench::summarize(&records) {
        println!(
            "{:<18} {:>6} {:>6} {:>14.6} {:>10.2}",
            summary.algorithm, summary.n, summary.runs, summary.mean_time_ms, summary.mean_score
        );
    }

    if let Some(output) = &args.output {
        metrics::serialize_to_parquet(&records, output)?;
        println!("Saved benchmark to: {}", output);
    }

    Ok(())
}
