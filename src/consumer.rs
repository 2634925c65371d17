//! Consumer worker: drains matrices and pairs them for multiplication.
//!
//! Each consumer repeatedly takes one matrix as its left operand, then
//! searches forward through the shared stream for a right operand with a
//! matching row count. Incompatible candidates are counted, then discarded;
//! the left operand is kept until a partner is found or the run completes.
//!
//! Termination is driven purely by the global consumed count reaching the run
//! total, never by a thread-local loop bound: consumers steal from one
//! shared stream, so no thread knows in advance how many matrices it will
//! personally drain. [`BoundedBuffer::pop`] returning `None` is the signal;
//! any operand still held at that point is dropped before the worker returns.

use tracing::debug;

use crate::buffer::BoundedBuffer;
use crate::stats::WorkerStats;

/// Runs one consumer until the run completes, returning its accumulated
/// statistics.
pub fn consume(buffer: &BoundedBuffer) -> WorkerStats {
    let mut stats = WorkerStats::new();
    'pairs: loop {
        let Some(left) = buffer.pop() else {
            break;
        };
        stats.matrix_total += 1;
        stats.sum_total += left.sum();

        // Search for a compatible right operand, keeping `left` across
        // failed attempts.
        loop {
            let Some(right) = buffer.pop() else {
                // Run complete with an unpaired operand; it is counted in the
                // totals above but never multiplied.
                drop(left);
                break 'pairs;
            };
            stats.matrix_total += 1;
            stats.sum_total += right.sum();

            match left.multiply(&right) {
                Some(product) => {
                    println!(
                        "MULTIPLY ({}x{}) BY ({}x{}):\n{}\n    X\n{}\n    =\n{}\n",
                        left.rows(),
                        left.cols(),
                        right.rows(),
                        right.cols(),
                        left,
                        right,
                        product
                    );
                    stats.mult_total += 1;
                    continue 'pairs;
                }
                None => drop(right),
            }
        }
    }
    debug!(
        consumed = stats.matrix_total,
        multiplied = stats.mult_total,
        "consumer finished"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn pairing_survives_incompatible_operand() {
        // (2x3), (4x5), (3x2): the 4x5 is rejected (3 != 4) and discarded,
        // then the 2x3 pairs with the 3x2 without being re-processed.
        let buffer = BoundedBuffer::new(4, 3);
        let m1 = Matrix::from_rows(&[&[1, 2, 3], &[4, 5, 6]]);
        let wide: &[i64] = &[1; 5];
        let m2 = Matrix::from_rows(&[wide, wide, wide, wide]);
        let m3 = Matrix::from_rows(&[&[1, 0], &[0, 1], &[1, 1]]);
        let expected_sum = m1.sum() + m2.sum() + m3.sum();
        buffer.push(m1);
        buffer.push(m2);
        buffer.push(m3);

        let stats = consume(&buffer);
        assert_eq!(stats.matrix_total, 3);
        assert_eq!(stats.mult_total, 1);
        assert_eq!(stats.sum_total, expected_sum);
    }

    #[test]
    fn orphan_operand_is_still_counted() {
        // Two incompatible matrices: the left operand never finds a partner
        // but both are drained and counted before termination.
        let buffer = BoundedBuffer::new(4, 2);
        buffer.push(Matrix::from_rows(&[&[1, 2, 3]]));
        buffer.push(Matrix::from_rows(&[&[1], &[2]]));

        let stats = consume(&buffer);
        assert_eq!(stats.matrix_total, 2);
        assert_eq!(stats.mult_total, 0);
        assert_eq!(stats.sum_total, 9);
    }

    #[test]
    fn empty_run_returns_immediately() {
        let buffer = BoundedBuffer::new(2, 0);
        assert_eq!(consume(&buffer), WorkerStats::new());
    }
}
