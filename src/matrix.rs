//! Matrix generation, summation, and multiplication.
//!
//! Matrices are owned by exactly one thread at a time: a producer owns each
//! matrix it generates until the buffer accepts it, and whichever consumer
//! drains it owns it from then on. Dropping a matrix releases it; there is no
//! shared ownership anywhere in the pipeline.

use std::fmt;

use rand::Rng;

use crate::config::MatrixMode;

/// Upper bound for randomly chosen row/column counts.
const MAX_DIM: usize = 4;
/// Upper bound for randomly chosen element values.
const MAX_VALUE: i64 = 10;

/// A dense row-major integer matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Generates a matrix according to the run's generation mode.
    ///
    /// `Random` picks each dimension uniformly in `1..=4` and `Fixed(n)`
    /// always yields `n`-by-`n`; elements are uniform in `1..=10` either way.
    pub fn generate<R: Rng>(mode: MatrixMode, rng: &mut R) -> Self {
        let (rows, cols) = match mode {
            MatrixMode::Random => (rng.gen_range(1..=MAX_DIM), rng.gen_range(1..=MAX_DIM)),
            MatrixMode::Fixed(n) => (n, n),
        };
        let data = (0..rows * cols)
            .map(|_| rng.gen_range(1..=MAX_VALUE))
            .collect();
        Self { rows, cols, data }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty or ragged.
    pub fn from_rows(rows: &[&[i64]]) -> Self {
        assert!(!rows.is_empty(), "matrix needs at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "matrix needs at least one column");
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            assert_eq!(row.len(), cols, "all rows must have the same length");
            data.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sum of all elements.
    pub fn sum(&self) -> i64 {
        self.data.iter().sum()
    }

    /// Computes `self × other`, or `None` when the operands are incompatible
    /// (column count of the left operand differs from the row count of the
    /// right). Incompatibility is routine control flow for the consumer's
    /// pairing search, not an error.
    pub fn multiply(&self, other: &Matrix) -> Option<Matrix> {
        if self.cols != other.rows {
            return None;
        }
        let mut data = vec![0i64; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0i64;
                for k in 0..self.cols {
                    acc += self.at(i, k) * other.at(k, j);
                }
                data[i * other.cols + j] = acc;
            }
        }
        Some(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for j in 0..self.cols {
                write!(f, "{:4}", self.at(i, j))?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}
