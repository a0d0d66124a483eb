//! Randomized timing runs comparing the solvers of each problem family.

pub mod instances;
mod runner;

pub use runner::{SizeSummary, run, summarize};
