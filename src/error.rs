//! Errors raised while loading, tabulating, or learning rules.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiniRulesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load the table: {0}")]
    Load(#[from] polars::prelude::PolarsError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Row {row} has {got} values, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("The table has no columns")]
    NoColumns,

    #[error("No data: the table has no rows")]
    NoData,

    #[error("The rule on `{0}` covered no rows")]
    NoProgress(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MiniRulesError>;
