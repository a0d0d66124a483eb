use log::debug;

use crate::error::Result;
use crate::types::{Item, TotalValue, Weight};
use crate::utils::Matrix2;

#[derive(Clone, Debug, PartialEq)]
pub struct DpResult {
    /// Selected items, in input order.
    pub selected_items: Vec<Item>,
    pub total_value: TotalValue,
    pub remaining_capacity: Weight,
}

/// Exact 0/1 knapsack over a `(n+1) x (capacity+1)` table.
///
/// `dp[i][w]` holds the best value using the first `i` items within weight
/// `w`. An item only replaces the exclude branch when it is strictly better,
/// and the backward walk marks item `i` as taken exactly when
/// `dp[i][w] != dp[i-1][w]`, so among equal-value selections the one that
/// leaves later items out wins.
pub fn knapsack_dp(items: &[Item], capacity: Weight) -> Result<DpResult> {
    let n = items.len();
    let cols = capacity as usize + 1;
    let mut dp = Matrix2::try_new(n + 1, cols, 0 as TotalValue)?;

    for (i, item) in items.iter().enumerate().map(|(i, item)| (i + 1, item)) {
        let weight = item.weight as usize;
        let value = item.value as TotalValue;

        for w in 0..cols {
            let exclude = *dp.get(i - 1, w);
            let best = if weight <= w {
                let include = value + *dp.get(i - 1, w - weight);
                if include > exclude { include } else { exclude }
            } else {
                exclude
            };
            dp.set(i, w, best);
        }
    }

    let total_value = *dp.get(n, capacity as usize);

    let mut w = capacity as usize;
    let mut selected_items = Vec::new();
    for i in (1..=n).rev() {
        if dp.get(i, w) != dp.get(i - 1, w) {
            let item = &items[i - 1];
            selected_items.push(item.clone());
            w -= item.weight as usize;
        }
    }
    selected_items.reverse();

    debug!(
        "knapsack_dp: n={} capacity={} value={} selected={}",
        n,
        capacity,
        total_value,
        selected_items.len()
    );

    Ok(DpResult {
        selected_items,
        total_value,
        remaining_capacity: w as Weight,
    })
}
