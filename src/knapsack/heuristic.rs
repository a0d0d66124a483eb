use log::debug;

use crate::types::{Item, TotalValue, Weight};

/// Trade-off points between value (alpha) and weight (1 - alpha).
pub const ALPHA_VALUES: [f64; 3] = [0.2, 0.5, 0.8];

const EPSILON: f64 = 0.0001;

#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicResult {
    pub selected_items: Vec<Item>,
    pub total_value: TotalValue,
    pub remaining_capacity: Weight,
    /// `None` when no run collects any value.
    pub alpha_used: Option<f64>,
}

impl HeuristicResult {
    fn empty(capacity: Weight) -> Self {
        HeuristicResult {
            selected_items: Vec::new(),
            total_value: 0,
            remaining_capacity: capacity,
            alpha_used: None,
        }
    }
}

struct Normalized<'a> {
    item: &'a Item,
    norm_weight: f64,
    norm_value: f64,
}

/// Greedy knapsack over three weighted scorings, keeping the best run.
///
/// Starts from the empty selection; a run replaces the incumbent only with a
/// strictly higher total value, so ties keep the lower alpha.
pub fn heuristic_knapsack(items: &[Item], capacity: Weight) -> HeuristicResult {
    let working: Vec<&Item> = items.iter().filter(|item| item.weight <= capacity).collect();

    if working.is_empty() {
        debug!("heuristic_knapsack: no item fits capacity {}", capacity);
        return HeuristicResult::empty(capacity);
    }

    let (min_w, max_w) = min_max(working.iter().map(|item| item.weight as f64));
    let (min_v, max_v) = min_max(working.iter().map(|item| item.value as f64));

    let normalized: Vec<Normalized> = working
        .iter()
        .map(|&item| Normalized {
            item,
            norm_weight: (item.weight as f64 - min_w) / (max_w - min_w + EPSILON),
            norm_value: (item.value as f64 - min_v) / (max_v - min_v + EPSILON),
        })
        .collect();

    let mut best = HeuristicResult::empty(capacity);

    for alpha in ALPHA_VALUES {
        let run = greedy_run(&normalized, capacity, alpha);
        debug!("heuristic_knapsack: alpha={} value={}", alpha, run.total_value);

        if run.total_value > best.total_value {
            best = run;
        }
    }

    debug!("Returned knapsack for alpha={:?}", best.alpha_used);
    best
}

fn greedy_run(normalized: &[Normalized], capacity: Weight, alpha: f64) -> HeuristicResult {
    let beta = 1.0 - alpha;

    let mut order: Vec<(usize, f64)> = normalized
        .iter()
        .enumerate()
        .map(|(i, n)| (i, alpha * n.norm_value - beta * n.norm_weight))
        .collect();
    // Stable: equal scores keep input order.
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut capacity_left = capacity;
    let mut total_value: TotalValue = 0;
    let mut used = vec![false; normalized.len()];
    let mut chosen = Vec::new();

    for (i, _) in order {
        let item = normalized[i].item;
        if item.weight <= capacity_left {
            capacity_left -= item.weight;
            total_value += item.value as TotalValue;
            used[i] = true;
            chosen.push(item.clone());
        }
    }

    if capacity_left > 0 {
        let mut unused: Vec<usize> = (0..normalized.len()).filter(|&i| !used[i]).collect();
        unused.sort_by(|&a, &b| normalized[b].item.value.cmp(&normalized[a].item.value));

        for i in unused {
            let item = normalized[i].item;
            if item.weight <= capacity_left {
                capacity_left -= item.weight;
                total_value += item.value as TotalValue;
                chosen.push(item.clone());
            }
            if capacity_left == 0 {
                break;
            }
        }
    }

    HeuristicResult {
        selected_items: chosen,
        total_value,
        remaining_capacity: capacity_left,
        alpha_used: Some(alpha),
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
