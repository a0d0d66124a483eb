use log::debug;

use crate::error::{Result, SolverError};
use crate::utils::Matrix2;

/// Reachability table: cell `(i, j)` is true iff some subset of the first
/// `i` numbers sums to exactly `j`.
#[derive(Clone, Debug)]
pub struct SubsetTable {
    table: Matrix2<bool>,
}

impl SubsetTable {
    pub fn reachable(&self, i: usize, j: usize) -> bool {
        *self.table.get(i, j)
    }

    /// `n + 1`
    pub fn rows(&self) -> usize {
        self.table.rows
    }

    /// `target + 1`
    pub fn cols(&self) -> usize {
        self.table.cols
    }

    pub fn target(&self) -> usize {
        self.table.cols - 1
    }

    /// Bottom-right cell: whether all numbers together can reach the target.
    pub fn answer(&self) -> bool {
        self.reachable(self.rows() - 1, self.target())
    }
}

fn check_non_negative(items: &[i64], target: i64) -> Result<()> {
    if target < 0 {
        return Err(SolverError::invalid_argument(format!(
            "target must be non-negative, got {}",
            target
        )));
    }
    if let Some(item) = items.iter().find(|&&item| item < 0) {
        return Err(SolverError::invalid_argument(format!(
            "numbers must be non-negative, got {}",
            item
        )));
    }
    Ok(())
}

/// Fills the `(n+1) x (target+1)` reachability table.
pub fn subset_sum_table(items: &[i64], target: i64) -> Result<SubsetTable> {
    check_non_negative(items, target)?;

    let n = items.len();
    let cols = target as usize + 1;
    let mut table = Matrix2::try_new(n + 1, cols, false)?;

    for i in 0..=n {
        table.set(i, 0, true);
    }

    for i in 1..=n {
        let item = items[i - 1] as usize;
        for j in 0..cols {
            let reachable = if item > j {
                *table.get(i - 1, j)
            } else if item == j {
                true
            } else {
                *table.get(i - 1, j) || *table.get(i - 1, j - item)
            };
            table.set(i, j, reachable);
        }
    }

    debug!("subset_sum_table: {}x{} table", n + 1, cols);

    Ok(SubsetTable { table })
}

pub fn has_subset_sum(items: &[i64], target: i64) -> Result<bool> {
    Ok(subset_sum_table(items, target)?.answer())
}

/// Recovers one subset reaching the table's target, in input order.
///
/// Walks rows upward from the last item. Item `i` is skipped whenever the
/// current column is already reachable without it, and taken otherwise,
/// which moves the column to `col - item_i`. Returns `None` when the target
/// is unreachable or `items` does not match the table.
pub fn subset_from_table(items: &[i64], table: &SubsetTable) -> Option<Vec<i64>> {
    if items.len() + 1 != table.rows() || !table.answer() {
        return None;
    }

    let mut col = table.target();
    let mut result = Vec::new();

    for i in (1..table.rows()).rev() {
        if col == 0 {
            break;
        }
        if table.reachable(i - 1, col) {
            continue;
        }
        let item = items[i - 1];
        let rest = usize::try_from(item).ok().and_then(|item| col.checked_sub(item))?;
        if !table.reachable(i - 1, rest) {
            return None;
        }
        result.push(item);
        col = rest;
    }

    if col != 0 {
        return None;
    }
    result.reverse();
    Some(result)
}
