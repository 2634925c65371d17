//! Producer worker: generates matrices and publishes them to the buffer.

use tracing::debug;

use crate::buffer::BoundedBuffer;
use crate::config::MatrixMode;
use crate::matrix::Matrix;
use crate::stats::WorkerStats;

/// Splits the run total into per-producer quotas.
///
/// The division is as even as possible, with the remainder assigned to the
/// earliest threads; the quotas always sum to exactly `total`. A quota of
/// zero is valid; that producer simply returns zeroed stats.
pub fn split_quota(total: usize, workers: usize) -> Vec<usize> {
    let base = total / workers;
    let remainder = total % workers;
    (0..workers)
        .map(|i| base + usize::from(i < remainder))
        .collect()
}

/// Runs one producer to completion and returns its accumulated statistics.
///
/// Each iteration generates a matrix, records its element sum while the
/// producer still owns it, then moves it into the buffer (blocking while the
/// buffer is saturated).
pub fn produce(buffer: &BoundedBuffer, mode: MatrixMode, quota: usize) -> WorkerStats {
    let mut rng = rand::thread_rng();
    let mut stats = WorkerStats::new();
    for _ in 0..quota {
        let matrix = Matrix::generate(mode, &mut rng);
        stats.sum_total += matrix.sum();
        stats.matrix_total += 1;
        buffer.push(matrix);
    }
    debug!(quota, sum = stats.sum_total, "producer finished");
    stats
}
