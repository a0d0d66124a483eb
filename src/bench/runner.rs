use std::time::Instant;

use log::{info, warn};
use rand::Rng;

use crate::bench::instances::*;
use crate::error::Result;
use crate::graph::build_complete_graph;
use crate::knapsack::{heuristic_knapsack, knapsack_dp};
use crate::metrics::BenchRecord;
use crate::subset::{has_subset_sum, is_subset_sum};
use crate::tsp::{MAX_HELD_KARP_CITIES, solve_branch_and_bound, solve_held_karp};
use crate::utils::ProblemKind;

/// Mean time and score of one algorithm at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeSummary {
    pub algorithm: &'static str,
    pub n: usize,
    pub runs: usize,
    pub mean_time_ms: f64,
    pub mean_score: f64,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64() * 1_000.0)
}

pub fn run<R: Rng>(
    kind: ProblemKind,
    sizes: &[usize],
    trials: usize,
    rng: &mut R,
) -> Result<Vec<BenchRecord>> {
    let mut records = Vec::with_capacity(sizes.len() * trials * 2);

    for &n in sizes {
        info!("{}: n = {}", kind.name(), n);
        for trial in 0..trials {
            match kind {
                ProblemKind::Knapsack => knapsack_trial(rng, n, trial, &mut records)?,
                ProblemKind::Subset => subset_trial(rng, n, trial, &mut records)?,
                ProblemKind::Tsp => tsp_trial(rng, n, trial, &mut records)?,
            }
        }
    }

    Ok(records)
}

fn knapsack_trial<R: Rng>(
    rng: &mut R,
    n: usize,
    trial: usize,
    records: &mut Vec<BenchRecord>,
) -> Result<()> {
    let items = generate_items(rng, n);
    let capacity = choose_capacity(&items);

    let (exact, dp_ms) = timed(|| knapsack_dp(&items, capacity));
    let exact = exact?;
    let (heuristic, heuristic_ms) = timed(|| heuristic_knapsack(&items, capacity));

    let score = if exact.total_value > 0 {
        heuristic.total_value as f64 / exact.total_value as f64 * 100.0
    } else {
        100.0
    };

    let record = |algorithm, time_ms, score| BenchRecord {
        problem: "knapsack",
        algorithm,
        n,
        trial,
        parameter: capacity as i64,
        time_ms,
        score,
    };
    records.push(record("dp", dp_ms, 100.0));
    records.push(record("heuristic", heuristic_ms, score));
    Ok(())
}

fn subset_trial<R: Rng>(
    rng: &mut R,
    n: usize,
    trial: usize,
    records: &mut Vec<BenchRecord>,
) -> Result<()> {
    let numbers = generate_numbers(rng, n);
    let target = generate_target(rng);

    let (table, table_ms) = timed(|| has_subset_sum(&numbers, target));
    let table = table?;
    let (branching, branching_ms) = timed(|| is_subset_sum(&numbers, target));

    let record = |algorithm, time_ms, score| BenchRecord {
        problem: "subset",
        algorithm,
        n,
        trial,
        parameter: target,
        time_ms,
        score,
    };
    records.push(record("table", table_ms, 100.0));
    records.push(record("branching", branching_ms, if table == branching { 100.0 } else { -100.0 }));
    Ok(())
}

fn tsp_trial<R: Rng>(
    rng: &mut R,
    n: usize,
    trial: usize,
    records: &mut Vec<BenchRecord>,
) -> Result<()> {
    let graph = build_complete_graph(generate_cities(rng, n));
    let start = 0;

    let record = |algorithm, time_ms, score| BenchRecord {
        problem: "tsp",
        algorithm,
        n,
        trial,
        parameter: start as i64,
        time_ms,
        score,
    };

    let (bb, bb_ms) = timed(|| solve_branch_and_bound(&graph, start));
    let bb = bb?;

    if n > MAX_HELD_KARP_CITIES {
        warn!("Skipping Held-Karp for n = {} (limit {})", n, MAX_HELD_KARP_CITIES);
        records.push(record("branch_and_bound", bb_ms, 100.0));
        return Ok(());
    }

    let (hk, hk_ms) = timed(|| solve_held_karp(&graph, start));
    let hk = hk?;

    let score = if bb.total_distance_km > 0.0 {
        hk.total_distance_km / bb.total_distance_km * 100.0
    } else {
        100.0
    };
    records.push(record("held_karp", hk_ms, 100.0));
    records.push(record("branch_and_bound", bb_ms, score));
    Ok(())
}

/// Groups records by `(algorithm, n)` in first-seen order.
pub fn summarize(records: &[BenchRecord]) -> Vec<SizeSummary> {
    let mut summaries: Vec<SizeSummary> = Vec::new();

    for record in records {
        let existing = summaries
            .iter_mut()
            .find(|s| s.algorithm == record.algorithm && s.n == record.n);
        match existing {
            Some(summary) => {
                summary.runs += 1;
                summary.mean_time_ms += record.time_ms;
                summary.mean_score += record.score;
            }
            None => summaries.push(SizeSummary {
                algorithm: record.algorithm,
                n: record.n,
                runs: 1,
                mean_time_ms: record.time_ms,
                mean_score: record.score,
            }),
        }
    }

    for summary in &mut summaries {
        summary.mean_time_ms /= summary.runs as f64;
        summary.mean_score /= summary.runs as f64;
    }

    summaries
}
