//! Bounded-buffer producer/consumer pipeline for matrix multiplication.
//!
//! `matrix-pipeline` runs N producer threads and N consumer threads against a
//! fixed-capacity shared buffer. Producers generate random matrices (each
//! thread working through a fair quota of the run total) and block while the
//! buffer is saturated. Consumers drain matrices one at a time and pair them
//! for multiplication: a consumer holds its first matrix as the left operand
//! and searches forward through the stream for a right operand with a
//! matching row count, discarding incompatible candidates along the way.
//!
//! Synchronization follows the classic one-mutex/two-condvar bounded buffer:
//! producers wait on `not_full`, consumers on `not_empty`, and both re-check
//! their predicate after every wake. The produced and consumed counters share
//! the buffer lock, so termination (the global consumed count reaching the
//! configured total) is observed as a consistent snapshot and propagated to
//! every sleeping consumer with a broadcast.
//!
//! Each worker returns its own statistics at join time; the pipeline
//! aggregates them and verifies that both sides accounted for every matrix
//! and every element sum exactly once.
//!
//! # Example
//!
//! ```no_run
//! use matrix_pipeline::{MatrixMode, RunConfig, pipeline};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RunConfig {
//!         workers: 2,
//!         buffer_capacity: 8,
//!         total_matrices: 20,
//!         mode: MatrixMode::Random,
//!     };
//!     let report = pipeline::run(config)?;
//!     assert_eq!(report.total_produced, 20);
//!     assert_eq!(report.sum_produced, report.sum_consumed);
//!     Ok(())
//! }
//! ```

pub mod buffer;
pub mod config;
pub mod consumer;
pub mod counter;
mod error;
pub mod matrix;
pub mod pipeline;
pub mod producer;
pub mod stats;

pub use buffer::BoundedBuffer;
pub use config::{MatrixMode, RunConfig};
pub use error::Error;
pub use matrix::Matrix;
pub use stats::{Report, WorkerStats};
