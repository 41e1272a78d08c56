//! Self-check and benchmark for Cantor pairing.
//!
//! Runs a fixed suite of pair/depair checks, times repeated runs of it, and
//! sweeps a square of the lattice to confirm every code is distinct and
//! decodes to its pair.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use cantor::{PairError, depair, pair};
use clap::Parser;
use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Largest accepted `--grid`; the whole square stays far below `MAX_SAFE_SUM`.
const MAX_GRID: u32 = 65_536;

#[derive(Debug, Parser)]
#[command(name = "bench-pairing", about = "Benchmark and self-check Cantor pairing")]
struct Args {
    /// Number of times to run the check suite.
    #[arg(long, default_value_t = 20_000)]
    iterations: u32,

    /// Edge length of the lattice square to sweep.
    #[arg(
        long,
        default_value_t = 512,
        value_parser = clap::value_parser!(u32).range(1..=MAX_GRID as i64)
    )]
    grid: u32,

    /// Print a JSON report instead of text.
    #[arg(long)]
    json: bool,
}

// =============================================================================
// CHECK SUITE
// =============================================================================

#[derive(Debug, Error)]
enum CheckFailure {
    #[error("({a}, {b}) decoded as {got:?}")]
    Roundtrip { a: i64, b: i64, got: (i64, i64) },

    #[error("pair({a}, {b}) returned {}", describe(.result))]
    Unexpected {
        a: i64,
        b: i64,
        result: Result<u64, PairError>,
    },

    #[error("cannot track {pairs} codes: {reason}")]
    Capacity { pairs: u64, reason: String },
}

fn describe(result: &Result<u64, PairError>) -> String {
    match result {
        Ok(code) => format!("Ok({})", code),
        Err(e) => {
            let (a, b) = e.operands();
            format!("{} for ({}, {})", e.code().code(), a, b)
        }
    }
}

fn check_roundtrip(a: i64, b: i64) -> Result<u64, CheckFailure> {
    let code = pair(a, b).map_err(|e| CheckFailure::Unexpected { a, b, result: Err(e) })?;
    let got = depair(code);
    if got != (a, b) {
        return Err(CheckFailure::Roundtrip { a, b, got });
    }
    Ok(code)
}

fn check_rejected(a: i64, b: i64, expected: PairError) -> Result<(), CheckFailure> {
    match pair(a, b) {
        Err(e) if e == expected => Ok(()),
        result => Err(CheckFailure::Unexpected { a, b, result }),
    }
}

fn run_checks() -> Result<(), CheckFailure> {
    check_roundtrip(22, 33)?;
    check_roundtrip(1 << 8, 1 << 8)?;
    check_roundtrip(1 << 16, 1 << 16)?;

    let big = 1i64 << 52;
    check_rejected(big, big, PairError::Unpairable { a: big, b: big })?;
    check_rejected(-1, -1, PairError::InvalidInput { a: -1, b: -1 })?;

    Ok(())
}

// =============================================================================
// LATTICE SWEEP
// =============================================================================

#[derive(Debug, Serialize)]
struct SweepStats {
    pairs: u64,
    distinct_codes: u64,
    max_code: u64,
    #[serde(skip)]
    elapsed: Duration,
}

fn sweep(grid: u32) -> Result<SweepStats, CheckFailure> {
    let start = Instant::now();
    let pairs = grid as u64 * grid as u64;
    let mut seen: FxHashSet<u64> = FxHashSet::default();
    seen.try_reserve(pairs as usize).map_err(|e| CheckFailure::Capacity {
        pairs,
        reason: e.to_string(),
    })?;
    let mut max_code = 0u64;

    for a in 0..grid as i64 {
        for b in 0..grid as i64 {
            let code = check_roundtrip(a, b)?;
            seen.insert(code);
            max_code = max_code.max(code);
        }
    }

    Ok(SweepStats {
        pairs,
        distinct_codes: seen.len() as u64,
        max_code,
        elapsed: start.elapsed(),
    })
}

// =============================================================================
// REPORT
// =============================================================================

#[derive(Debug, Serialize)]
struct Report {
    version: &'static str,
    iterations: u32,
    total_secs: f64,
    per_iteration_ns: f64,
    sweep: SweepStats,
    sweep_secs: f64,
}

fn print_text(report: &Report) {
    println!("Tests pass.");
    println!("Benchmarking...");
    println!(
        "{:.5} sec, {} iterations ({:.1} ns/iteration)",
        report.total_secs, report.iterations, report.per_iteration_ns
    );
    println!(
        "\nSwept {} pairs in {:.5} sec",
        report.sweep.pairs, report.sweep_secs
    );
    println!("  - {} distinct codes", report.sweep.distinct_codes);
    println!("  - max code {}", report.sweep.max_code);
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    if let Err(e) = run_checks() {
        eprintln!("check failed: {}", e);
        return ExitCode::FAILURE;
    }

    let bench_start = Instant::now();
    for _ in 0..args.iterations {
        if let Err(e) = run_checks() {
            eprintln!("check failed: {}", e);
            return ExitCode::FAILURE;
        }
    }
    let total = bench_start.elapsed();
    tracing::debug!(iterations = args.iterations, ?total, "check suite timed");

    let sweep = match sweep(args.grid) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("sweep failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if sweep.distinct_codes != sweep.pairs {
        eprintln!(
            "sweep failed: {} pairs produced only {} distinct codes",
            sweep.pairs, sweep.distinct_codes
        );
        return ExitCode::FAILURE;
    }

    let report = Report {
        version: cantor::VERSION,
        iterations: args.iterations,
        total_secs: total.as_secs_f64(),
        per_iteration_ns: total.as_nanos() as f64 / args.iterations.max(1) as f64,
        sweep_secs: sweep.elapsed.as_secs_f64(),
        sweep,
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_text(&report);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_suite_passes() {
        run_checks().unwrap();
    }

    #[test]
    fn test_sweep_codes_are_distinct() {
        let stats = sweep(64).unwrap();
        assert_eq!(stats.pairs, 64 * 64);
        assert_eq!(stats.distinct_codes, stats.pairs);
        assert_eq!(stats.max_code, pair(63, 63).unwrap());
    }

    #[test]
    fn test_check_rejected_reports_mismatch() {
        let err = check_rejected(1, 2, PairError::InvalidInput { a: 1, b: 2 }).unwrap_err();
        assert!(err.to_string().contains("pair(1, 2) returned Ok("));
    }

    #[test]
    fn test_check_rejected_reports_error_code() {
        let err = check_rejected(-1, 5, PairError::Unpairable { a: -1, b: 5 }).unwrap_err();
        assert_eq!(err.to_string(), "pair(-1, 5) returned E001 for (-1, 5)");
    }

    #[test]
    fn test_args_reject_out_of_range_grid() {
        assert!(Args::try_parse_from(["bench-pairing", "--grid", "90000"]).is_err());
        assert!(Args::try_parse_from(["bench-pairing", "--grid", "0"]).is_err());
        let args = Args::try_parse_from(["bench-pairing", "--grid", "65536"]).unwrap();
        assert_eq!(args.grid, MAX_GRID);
    }

    #[test]
    fn test_max_grid_stays_pairable() {
        let edge = (MAX_GRID - 1) as i64;
        assert!(cantor::is_pairable(edge, edge));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["bench-pairing"]);
        assert_eq!(args.iterations, 20_000);
        assert_eq!(args.grid, 512);
        assert!(!args.json);
    }
}
