pub mod matrix;
mod io;

pub use matrix::{MAX_TABLE_CELLS, Matrix2};

pub use io::{Args, ProblemKind, resolve_sizes};
pub use clap::Parser;
