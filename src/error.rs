use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("table of {rows}x{cols} cells exceeds the supported size")]
    TableTooLarge { rows: usize, cols: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("metrics: {0}")]
    Metrics(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn metrics(message: impl Into<String>) -> Self {
        Self::Metrics(message.into())
    }
}

impl From<arrow::error::ArrowError> for SolverError {
    fn from(err: arrow::error::ArrowError) -> Self {
        Self::metrics(err.to_string())
    }
}

impl From<parquet::errors::ParquetError> for SolverError {
    fn from(err: parquet::errors::ParquetError) -> Self {
        Self::metrics(err.to_string())
    }
}
