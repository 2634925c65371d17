//! Pipeline orchestration: spawn the workers, join them, aggregate and
//! verify their statistics.

use std::sync::Arc;
use std::thread;

use tracing::info;

use crate::buffer::BoundedBuffer;
use crate::config::RunConfig;
use crate::consumer;
use crate::error::Error;
use crate::producer::{self, split_quota};
use crate::stats::{Report, WorkerStats};

/// Runs a complete pipeline for the given configuration.
///
/// Spawns `config.workers` producers (each with a fair share of the run
/// total) and the same number of consumers, all sharing one bounded buffer.
/// Joins every thread, aggregates the returned per-worker statistics, and
/// verifies the run accounted for every matrix exactly once.
pub fn run(config: RunConfig) -> Result<Report, Error> {
    config.validate()?;

    let buffer = Arc::new(BoundedBuffer::new(
        config.buffer_capacity,
        config.total_matrices,
    ));
    let quotas = split_quota(config.total_matrices, config.workers);
    info!(
        workers = config.workers,
        capacity = config.buffer_capacity,
        matrices = config.total_matrices,
        "starting pipeline"
    );

    let producers: Vec<_> = quotas
        .into_iter()
        .map(|quota| {
            let buffer = Arc::clone(&buffer);
            let mode = config.mode;
            thread::spawn(move || producer::produce(&buffer, mode, quota))
        })
        .collect();

    let consumers: Vec<_> = (0..config.workers)
        .map(|_| {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || consumer::consume(&buffer))
        })
        .collect();

    let producer_stats = join_all(producers, "producer")?;
    let consumer_stats = join_all(consumers, "consumer")?;

    let report = Report::aggregate(&producer_stats, &consumer_stats);
    report.verify(config.total_matrices as u64)?;
    Ok(report)
}

fn join_all(
    handles: Vec<thread::JoinHandle<WorkerStats>>,
    role: &'static str,
) -> Result<Vec<WorkerStats>, Error> {
    let mut stats = Vec::with_capacity(handles.len());
    for handle in handles {
        stats.push(handle.join().map_err(|_| Error::WorkerPanicked(role))?);
    }
    Ok(stats)
}
