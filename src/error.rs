//! Error types for the matrix pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("parse error: {0}")]
    Parse(#[from] std::num::ParseIntError),

    #[error("{0} worker thread panicked")]
    WorkerPanicked(&'static str),

    #[error(
        "totals mismatch: produced {produced} (sum {sum_produced}) vs consumed {consumed} (sum {sum_consumed}), expected {expected} matrices"
    )]
    TotalsMismatch {
        produced: u64,
        consumed: u64,
        sum_produced: i64,
        sum_consumed: i64,
        expected: u64,
    },
}
