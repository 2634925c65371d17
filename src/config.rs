//! Run configuration for the pipeline.

use crate::error::Error;

/// Default worker thread count (producers and consumers each).
pub const DEFAULT_WORKERS: usize = 1;
/// Default bounded buffer capacity.
pub const DEFAULT_BUFFER_CAPACITY: usize = 100;
/// Default number of matrices to produce for the run.
pub const DEFAULT_TOTAL_MATRICES: usize = 200;

/// Matrix generation strategy.
///
/// Mode `0` on the command line maps to [`MatrixMode::Random`]; any `n > 0`
/// maps to [`MatrixMode::Fixed`], which generates only `n`-by-`n` matrices
/// (every pair is then compatible for multiplication).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixMode {
    /// Random dimensions, each side uniform in `1..=4`.
    Random,
    /// Fixed square dimensions.
    Fixed(usize),
}

impl MatrixMode {
    /// Maps the numeric command-line mode to a strategy.
    pub fn from_arg(mode: usize) -> Self {
        if mode == 0 {
            MatrixMode::Random
        } else {
            MatrixMode::Fixed(mode)
        }
    }
}

/// Immutable configuration for a single run, read-only for all workers.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Number of producer threads and, equally, consumer threads.
    pub workers: usize,
    /// Capacity of the shared bounded buffer.
    pub buffer_capacity: usize,
    /// Total matrices produced across all producers for the whole run.
    pub total_matrices: usize,
    /// Matrix generation strategy.
    pub mode: MatrixMode,
}

impl RunConfig {
    /// Parses positional arguments `[workers] [buffer_size] [matrices]
    /// [matrix_mode]`, falling back to the defaults for anything omitted.
    pub fn from_args(args: &[String]) -> Result<Self, Error> {
        let workers = match args.first() {
            Some(arg) => arg.parse()?,
            None => DEFAULT_WORKERS,
        };
        let buffer_capacity = match args.get(1) {
            Some(arg) => arg.parse()?,
            None => DEFAULT_BUFFER_CAPACITY,
        };
        let total_matrices = match args.get(2) {
            Some(arg) => arg.parse()?,
            None => DEFAULT_TOTAL_MATRICES,
        };
        let mode_arg: usize = match args.get(3) {
            Some(arg) => arg.parse()?,
            None => 0,
        };
        let config = Self {
            workers,
            buffer_capacity,
            total_matrices,
            mode: MatrixMode::from_arg(mode_arg),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.workers == 0 {
            return Err(Error::InvalidConfig(
                "worker thread count must be at least 1".to_string(),
            ));
        }
        if self.buffer_capacity == 0 {
            return Err(Error::InvalidConfig(
                "bounded buffer capacity must be at least 1".to_string(),
            ));
        }
        if let MatrixMode::Fixed(0) = self.mode {
            return Err(Error::InvalidConfig(
                "fixed matrix dimension must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            total_matrices: DEFAULT_TOTAL_MATRICES,
            mode: MatrixMode::Random,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let config = RunConfig {
            workers: 0,
            ..RunConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn zero_capacity_rejected() {
        let config = RunConfig {
            buffer_capacity: 0,
            ..RunConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn mode_zero_is_random() {
        assert_eq!(MatrixMode::from_arg(0), MatrixMode::Random);
        assert_eq!(MatrixMode::from_arg(3), MatrixMode::Fixed(3));
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_args_fills_defaults() {
        let config = RunConfig::from_args(&args(&["3"])).unwrap();
        assert_eq!(config.workers, 3);
        assert_eq!(config.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
        assert_eq!(config.total_matrices, DEFAULT_TOTAL_MATRICES);
        assert_eq!(config.mode, MatrixMode::Random);
    }

    #[test]
    fn from_args_parses_all_positions() {
        let config = RunConfig::from_args(&args(&["2", "4", "10", "3"])).unwrap();
        assert_eq!(config.workers, 2);
        assert_eq!(config.buffer_capacity, 4);
        assert_eq!(config.total_matrices, 10);
        assert_eq!(config.mode, MatrixMode::Fixed(3));
    }

    #[test]
    fn from_args_rejects_garbage() {
        assert!(matches!(
            RunConfig::from_args(&args(&["two"])),
            Err(Error::Parse(_))
        ));
    }
}
