//! The shared bounded buffer connecting producers to consumers.
//!
//! A fixed-capacity circular slot array guarded by one mutex and two condition
//! variables (`not_full` for producers, `not_empty` for consumers). The
//! produced and consumed counters live inside the same mutex-guarded state, so
//! every occupancy or termination decision is made against a consistent
//! `(produced, consumed)` snapshot.
//!
//! Matrices move through the buffer by ownership transfer: [`BoundedBuffer::push`]
//! takes the matrix from the producer, [`BoundedBuffer::pop`] hands it to the
//! consumer. A single shared cursor pair makes consumption globally FIFO.

use std::sync::{Condvar, Mutex};

use crate::counter::Counter;
use crate::matrix::Matrix;

/// Fixed-capacity circular buffer of matrices shared by all workers.
pub struct BoundedBuffer {
    state: Mutex<State>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
    /// Total matrices for the run; once `consumed` reaches this, `pop`
    /// returns `None` to every consumer.
    total: u64,
}

struct State {
    slots: Vec<Option<Matrix>>,
    fill: usize,
    take: usize,
    produced: Counter,
    consumed: Counter,
}

impl State {
    fn occupied(&self) -> u64 {
        debug_assert!(self.consumed.value() <= self.produced.value());
        self.produced.value() - self.consumed.value()
    }
}

impl BoundedBuffer {
    /// Creates a buffer with the given slot capacity for a run of `total`
    /// matrices.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; configuration validation rejects that
    /// before the pipeline is built.
    pub fn new(capacity: usize, total: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be at least 1");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            state: Mutex::new(State {
                slots,
                fill: 0,
                take: 0,
                produced: Counter::new(),
                consumed: Counter::new(),
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
            total: total as u64,
        }
    }

    /// Publishes a matrix, blocking while the buffer is saturated.
    ///
    /// Waits on `not_full` in a guarded loop (the occupancy predicate is
    /// re-tested after every wake), writes the slot at the fill cursor,
    /// advances the cursor modulo capacity, increments the produced counter,
    /// and signals `not_empty`.
    pub fn push(&self, matrix: Matrix) {
        let mut state = self.state.lock().unwrap();
        while state.occupied() >= self.capacity as u64 {
            state = self.not_full.wait(state).unwrap();
        }
        let fill = state.fill;
        debug_assert!(state.slots[fill].is_none(), "fill cursor hit an occupied slot");
        state.slots[fill] = Some(matrix);
        state.fill = (fill + 1) % self.capacity;
        state.produced.increment();
        self.not_empty.notify_one();
    }

    /// Takes the next matrix, or `None` once the run is complete.
    ///
    /// Blocks on `not_empty` while the buffer is empty and the run is still
    /// in progress. Once the consumed count reaches the run total, every
    /// waiting consumer must learn about it, so the terminating observer
    /// broadcasts `not_empty` before returning `None`; each woken peer
    /// re-checks the predicate, observes completion, and broadcasts in turn.
    pub fn pop(&self) -> Option<Matrix> {
        let mut state = self.state.lock().unwrap();
        loop {
            if state.consumed.value() >= self.total {
                self.not_empty.notify_all();
                return None;
            }
            if state.produced.value() == state.consumed.value() {
                state = self.not_empty.wait(state).unwrap();
                continue;
            }
            let take = state.take;
            let matrix = state.slots[take]
                .take()
                .expect("take cursor hit an empty slot");
            state.take = (take + 1) % self.capacity;
            state.consumed.increment();
            self.not_full.notify_one();
            return Some(matrix);
        }
    }

    /// Consistent `(produced, consumed)` snapshot, taken under the buffer
    /// lock. Used for the occupancy invariant `0 <= produced - consumed <=
    /// capacity` and for final accounting.
    pub fn occupancy(&self) -> (u64, u64) {
        let state = self.state.lock().unwrap();
        (state.produced.value(), state.consumed.value())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::config::MatrixMode;

    fn unit_matrix() -> Matrix {
        Matrix::from_rows(&[&[1]])
    }

    #[test]
    fn pop_is_fifo() {
        let buffer = BoundedBuffer::new(4, 3);
        for n in 1..=3 {
            buffer.push(Matrix::from_rows(&[&[n]]));
        }
        for n in 1..=3 {
            assert_eq!(buffer.pop(), Some(Matrix::from_rows(&[&[n]])));
        }
        assert_eq!(buffer.pop(), None);
    }

    #[test]
    fn cursors_wrap_around_capacity() {
        let buffer = BoundedBuffer::new(2, 4);
        buffer.push(Matrix::from_rows(&[&[1]]));
        buffer.push(Matrix::from_rows(&[&[2]]));
        assert_eq!(buffer.pop(), Some(Matrix::from_rows(&[&[1]])));
        buffer.push(Matrix::from_rows(&[&[3]]));
        assert_eq!(buffer.pop(), Some(Matrix::from_rows(&[&[2]])));
        buffer.push(Matrix::from_rows(&[&[4]]));
        assert_eq!(buffer.pop(), Some(Matrix::from_rows(&[&[3]])));
        assert_eq!(buffer.pop(), Some(Matrix::from_rows(&[&[4]])));
        assert_eq!(buffer.pop(), None);
    }

    #[test]
    fn occupancy_tracks_counters() {
        let buffer = BoundedBuffer::new(4, 2);
        assert_eq!(buffer.occupancy(), (0, 0));
        buffer.push(unit_matrix());
        assert_eq!(buffer.occupancy(), (1, 0));
        buffer.pop();
        assert_eq!(buffer.occupancy(), (1, 1));
    }

    #[test]
    fn completed_run_releases_every_waiter() {
        // Zero-matrix run: every consumer must observe completion and return
        // instead of blocking forever.
        let buffer = Arc::new(BoundedBuffer::new(2, 0));
        let handles: Vec<_> = (0..3)
            .map(|_| {
                let buffer = Arc::clone(&buffer);
                thread::spawn(move || buffer.pop())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), None);
        }
    }

    #[test]
    fn push_blocks_until_a_slot_frees() {
        let buffer = Arc::new(BoundedBuffer::new(1, 2));
        buffer.push(unit_matrix());

        let pusher = {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                buffer.push(Matrix::generate(MatrixMode::Fixed(2), &mut rng));
            })
        };

        // The second push cannot land before a pop frees the single slot;
        // occupancy never exceeds capacity.
        let (produced, consumed) = buffer.occupancy();
        assert!(produced - consumed <= 1);

        assert!(buffer.pop().is_some());
        pusher.join().unwrap();
        assert!(buffer.pop().is_some());
        assert_eq!(buffer.pop(), None);
    }
}
