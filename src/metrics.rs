use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_writer::ArrowWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

/// One timed solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRecord {
    pub problem: &'static str,
    pub algorithm: &'static str,
    pub n: usize,
    pub trial: usize,
    /// Capacity for knapsack, target for subset-sum, start index for TSP.
    pub parameter: i64,
    pub time_ms: f64,
    pub score: f64,
}

pub fn serialize_to_parquet(records: &[BenchRecord], path: impl AsRef<Path>) -> Result<()> {
    let problems: StringArray = records.iter().map(|r| Some(r.problem)).collect();
    let algorithms: StringArray = records.iter().map(|r| Some(r.algorithm)).collect();
    let sizes: Int64Array = records.iter().map(|r| r.n as i64).collect();
    let trials: Int64Array = records.iter().map(|r| r.trial as i64).collect();
    let parameters: Int64Array = records.iter().map(|r| r.parameter).collect();
    let times: Float64Array = records.iter().map(|r| r.time_ms).collect();
    let scores: Float64Array = records.iter().map(|r| r.score).collect();

    // Arrow schema
    let schema = Schema::new(vec![
        Field::new("problem", DataType::Utf8, false),
        Field::new("algorithm", DataType::Utf8, false),
        Field::new("n", DataType::Int64, false),
        Field::new("trial", DataType::Int64, false),
        Field::new("parameter", DataType::Int64, false),
        Field::new("time_ms", DataType::Float64, false),
        Field::new("score", DataType::Float64, false),
    ]);

    let batch = RecordBatch::try_new(
        Arc::new(schema),
        vec![
            Arc::new(problems),
            Arc::new(algorithms),
            Arc::new(sizes),
            Arc::new(trials),
            Arc::new(parameters),
            Arc::new(times),
            Arc::new(scores),
        ],
    )?;

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}
