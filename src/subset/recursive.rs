use crate::error::{Result, SolverError};

/// Existence check that recurses on the last number, keeping nothing but
/// the call stack.
pub fn is_subset_sum_rec(items: &[i64], target: i64) -> Result<bool> {
    if target < 0 || items.iter().any(|&item| item < 0) {
        return Err(SolverError::invalid_argument(
            "recursive subset sum needs non-negative numbers and target",
        ));
    }
    Ok(reach(items, target))
}

fn reach(items: &[i64], sum: i64) -> bool {
    if sum == 0 {
        return true;
    }
    let Some((&last, rest)) = items.split_last() else {
        return false;
    };

    if last > sum {
        return reach(rest, sum);
    }
    reach(rest, sum) || reach(rest, sum - last)
}
