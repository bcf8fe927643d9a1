use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// The dataset does not have the shape the reports require.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Required column '{0}' is missing from the dataset")]
    MissingColumn(String),

    #[error("Column '{column}' holds a non-numeric value at row {row}")]
    NonNumeric { column: String, row: usize },
}

/// Any failure to turn the source into a `Dataset`. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Cannot read dataset at {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset at {} is empty", .0.display())]
    Empty(PathBuf),

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] PolarsError),

    #[error("Schema validation failed: {0}")]
    Schema(#[from] SchemaError),

    #[error("Column '{column}' has no value at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Invalid value at row {row}: {reason}")]
    InvalidValue { row: usize, reason: String },
}
