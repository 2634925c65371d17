//! Monotonic event counters for the produced and consumed totals.

/// A monotonically increasing counter.
///
/// The pipeline keeps one counter for matrices produced and one for matrices
/// consumed. Both live inside the buffer's mutex-guarded state, so the buffer
/// lock doubles as the counter lock and any thread holding it observes the
/// `(produced, consumed)` pair as a single consistent snapshot. There is no
/// decrement or reset: the value only moves forward for the lifetime of a run.
#[derive(Debug, Default)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter and returns the new value.
    pub fn increment(&mut self) -> u64 {
        self.value += 1;
        self.value
    }

    /// Current value.
    pub fn value(&self) -> u64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Counter::new().value(), 0);
    }

    #[test]
    fn increment_returns_new_value() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.value(), 2);
    }
}
