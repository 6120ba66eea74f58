//! Serial vs. parallel LU decomposition benchmark
//!
//! Loads a matrix, factors one copy with the serial kernel and another with
//! the parallel kernel, and reports the timings and the speedup.
//!
//! Usage:
//!     cargo run --release --bin lu-bench -- data_tests/micro.txt 4
//!     cargo run --release --bin lu-bench -- - 8 --generate 1000 --verify

use anyhow::{Context, ensure};
use clap::Parser;
use math_audio_lu::{
    DenseMatrix, LuConfig, compare_matrix, gaussian_parallel_with_config,
    gaussian_serial_with_config, load_matrix, max_relative_error, print_matrix, reconstruct,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Tolerance for the `L·U` reconstruction check
const RECONSTRUCTION_TOLERANCE: f64 = 1e-9;

#[derive(Parser, Debug)]
#[command(
    name = "lu-bench",
    about = "Compare serial and barrier-synchronized parallel LU decomposition"
)]
struct Cli {
    /// Input matrix, one row per line with whitespace-separated values ("-" with --generate)
    input: PathBuf,

    /// Number of worker threads for the parallel run
    threads: usize,

    /// Ignore the input file and use a random diagonally dominant matrix of this size
    #[arg(long)]
    generate: Option<usize>,

    /// Random seed for --generate
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Pivots with a smaller magnitude abort the decomposition
    #[arg(long, default_value_t = 1e-30)]
    pivot_tolerance: f64,

    /// Log progress every N pivot steps (0 = never, needs RUST_LOG=info)
    #[arg(long, default_value_t = 0)]
    print_interval: usize,

    /// Check that both runs agree and that L·U reproduces the input
    #[arg(long)]
    verify: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    ensure!(args.threads >= 1, "thread count must be at least 1");

    let config = LuConfig {
        pivot_tolerance: args.pivot_tolerance,
        print_interval: args.print_interval,
    };

    let matrix: DenseMatrix = match args.generate {
        Some(n) => {
            println!(
                "Generating {n}x{n} diagonally dominant matrix (seed {})",
                args.seed
            );
            let mut rng = StdRng::seed_from_u64(args.seed);
            DenseMatrix::random_diagonally_dominant(n, &mut rng)?
        }
        None => {
            println!("Loading from {}", args.input.display());
            load_matrix(&args.input)
                .with_context(|| format!("failed to load {}", args.input.display()))?
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Input mtx size {}", matrix.dimension())?;
    print_matrix(&mut out, &matrix)?;

    writeln!(out, "===========\nGaussian serial")?;
    let mut serial = matrix.clone();
    let start = Instant::now();
    gaussian_serial_with_config(&mut serial, &config).context("serial elimination failed")?;
    let serial_ms = start.elapsed().as_secs_f64() * 1e3;
    print_matrix(&mut out, &serial)?;
    writeln!(out, "Time taken: {serial_ms:.3}ms\n")?;

    writeln!(out, "===========\nGaussian parallel ({} threads)", args.threads)?;
    let mut parallel = matrix.clone();
    let start = Instant::now();
    gaussian_parallel_with_config(&mut parallel, args.threads, &config)
        .context("parallel elimination failed")?;
    let parallel_ms = start.elapsed().as_secs_f64() * 1e3;
    print_matrix(&mut out, &parallel)?;
    writeln!(out, "Time taken: {parallel_ms:.3}ms\n")?;

    if parallel_ms > 0.0 {
        writeln!(out, "Speedup: {:.3}x", serial_ms / parallel_ms)?;
    } else {
        writeln!(out, "Speedup: n/a (parallel run below timer resolution)")?;
    }

    if args.verify {
        let identical = compare_matrix(&serial, &parallel);
        let error = max_relative_error(&matrix, &reconstruct(&parallel)?)?;
        writeln!(out, "Serial == parallel: {identical}")?;
        writeln!(out, "Max relative reconstruction error: {error:.3e}")?;
        ensure!(identical, "serial and parallel results differ");
        ensure!(
            error <= RECONSTRUCTION_TOLERANCE,
            "L·U differs from the input by {error:.3e}"
        );
    }

    Ok(())
}
