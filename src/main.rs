use std::env;
use std::process;

use matrix_pipeline::{MatrixMode, RunConfig, pipeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 5 {
        eprintln!(
            "Usage: {} [workers] [buffer_size] [matrices] [matrix_mode]",
            args[0]
        );
        eprintln!("  workers      producer and consumer thread count");
        eprintln!("  buffer_size  bounded buffer capacity");
        eprintln!("  matrices     total matrices for the run");
        eprintln!("  matrix_mode  0 = random dimensions, n = fixed n x n");
        process::exit(1);
    }

    let config = RunConfig::from_args(&args[1..])?;
    let mode_arg = match config.mode {
        MatrixMode::Random => 0,
        MatrixMode::Fixed(n) => n,
    };

    if args.len() == 1 {
        println!(
            "USING DEFAULTS: worker_threads={} bounded_buffer_size={} matrices={} matrix_mode={}",
            config.workers, config.buffer_capacity, config.total_matrices, mode_arg
        );
    } else {
        println!(
            "USING: worker_threads={} bounded_buffer_size={} matrices={} matrix_mode={}",
            config.workers, config.buffer_capacity, config.total_matrices, mode_arg
        );
    }
    println!(
        "Producing {} matrices in mode {}.",
        config.total_matrices, mode_arg
    );
    println!("Using a shared buffer of size={}", config.buffer_capacity);
    println!("With {} producer and consumer thread(s).", config.workers);
    println!();

    let report = pipeline::run(config)?;

    println!(
        "Sum of Matrix elements --> Produced={} = Consumed={}",
        report.sum_produced, report.sum_consumed
    );
    println!(
        "Matrices produced={} consumed={} multiplied={}",
        report.total_produced, report.total_consumed, report.total_multiplied
    );

    Ok(())
}
