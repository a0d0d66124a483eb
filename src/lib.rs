pub mod bench;
pub mod error;
pub mod graph;
pub mod knapsack;
pub mod metrics;
pub mod subset;
pub mod tsp;
pub mod types;
pub mod utils;

pub use error::{Result, SolverError};
