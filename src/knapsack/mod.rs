mod dp;
mod heuristic;

pub use dp::{DpResult, knapsack_dp};
pub use heuristic::{ALPHA_VALUES, HeuristicResult, heuristic_knapsack};
