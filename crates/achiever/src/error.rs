use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SubgoalError>;

#[derive(Error, Debug)]
pub enum SubgoalError {
    #[error("invalid achiever configuration: {0}")]
    Configuration(String),
    #[error("failed to read subgoal table {}: {source}", .path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid cell {value:?} at row {row}, column {column}")]
    Cell {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("malformed achiever config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("observation has {actual} values, expected {expected}")]
    ContractViolation { expected: usize, actual: usize },
}

impl SubgoalError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether this error was raised while building an achiever, as opposed
    /// to while evaluating one.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::ContractViolation { .. })
    }
}
