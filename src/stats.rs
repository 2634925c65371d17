//! Per-worker statistics and the aggregated run report.

use crate::error::Error;

/// Accumulated totals for one worker thread.
///
/// Created at worker start, owned solely by its worker, and handed back
/// through the join, never shared between threads. For producers
/// `matrix_total` counts matrices generated and `mult_total` stays zero; for
/// consumers `matrix_total` counts matrices drained and `mult_total` counts
/// completed multiplications.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    /// Matrices produced or consumed by this worker.
    pub matrix_total: u64,
    /// Sum of all elements of those matrices.
    pub sum_total: i64,
    /// Multiplications completed (consumers only).
    pub mult_total: u64,
}

impl WorkerStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Aggregate of every worker's statistics, computed after all joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub total_produced: u64,
    pub total_consumed: u64,
    pub sum_produced: i64,
    pub sum_consumed: i64,
    pub total_multiplied: u64,
}

impl Report {
    /// Sums the per-thread statistics. Needs no synchronization: it runs only
    /// after every worker thread has been joined.
    pub fn aggregate(producers: &[WorkerStats], consumers: &[WorkerStats]) -> Self {
        Self {
            total_produced: producers.iter().map(|s| s.matrix_total).sum(),
            total_consumed: consumers.iter().map(|s| s.matrix_total).sum(),
            sum_produced: producers.iter().map(|s| s.sum_total).sum(),
            sum_consumed: consumers.iter().map(|s| s.sum_total).sum(),
            total_multiplied: consumers.iter().map(|s| s.mult_total).sum(),
        }
    }

    /// Validates the run: both sides must account for exactly the configured
    /// number of matrices and the same element sum.
    pub fn verify(&self, total_matrices: u64) -> Result<(), Error> {
        let matched = self.total_produced == total_matrices
            && self.total_consumed == total_matrices
            && self.sum_produced == self.sum_consumed;
        if matched {
            Ok(())
        } else {
            Err(Error::TotalsMismatch {
                produced: self.total_produced,
                consumed: self.total_consumed,
                sum_produced: self.sum_produced,
                sum_consumed: self.sum_consumed,
                expected: total_matrices,
            })
        }
    }
}
