//! # QueensSolver
//!
//! `QueensSolver` is a configurable command-line N-Queens solver. It
//! enumerates every placement of N non-attacking queens on an N-by-N board
//! via depth-first backtracking, one queen per row, with bit-set pruning of
//! attacked columns and diagonals.
//!
//! ## Features
//!
//! -   **Full enumeration**: every solution, in lexicographic order of the
//!     placement sequence.
//! -   **Count tables**: solution counts over a range of dimensions.
//! -   **Verification**: option to re-check every emitted board with the
//!     pairwise attack predicate.
//! -   **Symmetry reduction**: option to also report the number of solutions
//!     distinct under rotation and reflection.
//! -   **Statistics**: solve time, node and backtrack counts, and memory
//!     usage.
//! -   **Memory management**: uses `tikv-jemallocator` for memory allocation
//!     and provides memory usage statistics.
//!
//! ## Usage
//!
//! ```sh
//! # Enumerate the classic 8-queens board
//! queens_solver 8
//!
//! # Explicit subcommand form, printing every board
//! queens_solver solve -n 6 --print-solutions
//!
//! # Count solutions for dimensions 1 through 10
//! queens_solver count --to 10
//!
//! # Report fundamental solutions as well
//! queens_solver 8 --fundamental
//! ```
//!
//! This file (`main.rs`) contains the main entry point and orchestrates the
//! solving process based on user input. The CLI definition lives in
//! `command_line::cli`; the solver itself in the library's `queens` module.

use crate::command_line::cli::{Cli, Commands, CommonOptions};
use clap::{CommandFactory, Parser};
use queens_solver::queens::solver::{Enumeration, Queens, SearchStats};
use queens_solver::queens::symmetry;
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

mod command_line;

/// Global allocator using `tikv-jemallocator` for potentially better performance
/// and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Main entry point of the QueensSolver application.
///
/// Parses command-line arguments, dispatches to the appropriate command handler,
/// and manages the overall execution flow.
fn main() {
    let cli = Cli::parse();

    // Handle the case where a dimension is provided globally without a
    // subcommand. This defaults to a full enumeration.
    if let Some(n) = cli.n {
        if cli.command.is_none() {
            solve_and_report(n, &cli.common);
            return;
        }
    }

    match cli.command {
        Some(Commands::Solve { dimension, common }) => solve_and_report(dimension, &common),

        Some(Commands::Count { from, to, common }) => count_range(from, to, &common),

        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "queens_solver",
                &mut std::io::stdout(),
            );
        }

        None => {
            // This case is reached if no subcommand was provided and `cli.n`
            // was also None.
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    }
}

/// Builds a solver for `n`, exiting with an error message when the dimension
/// is not a positive integer.
fn build_solver(n: i64) -> Queens {
    Queens::new(n).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// Enumerates every solution for one dimension and reports results including
/// stats and verification.
///
/// # Arguments
/// * `n` - The board dimension.
/// * `common` - `CommonOptions` controlling verification, printing and stats.
#[allow(clippy::cast_precision_loss)]
fn solve_and_report(n: i64, common: &CommonOptions) {
    let queens = build_solver(n);

    println!("Solving the {n} Queens Problem...");

    // Advance epoch for memory stats collection; helps isolate memory usage
    // of the enumeration itself.
    epoch::advance().unwrap();

    let time = std::time::Instant::now();
    let enumeration = queens.solve();
    let elapsed = time.elapsed();

    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solutions(queens.dimension(), &enumeration);
    }

    if common.print_solutions {
        for (i, solution) in enumeration.solutions.iter().enumerate() {
            println!("Solution {}:\n{solution}\n", i + 1);
        }
    }

    let fundamental = common
        .fundamental
        .then(|| symmetry::fundamental_count(&enumeration.solutions));

    if common.stats {
        print_stats(
            elapsed,
            queens.dimension(),
            &enumeration.stats,
            fundamental,
            allocated_mib,
            resident_mib,
        );
    }

    if enumeration.count == 0 {
        println!("\nNo solutions found for {n} queens.");
    } else {
        println!("\nTotal solutions found: {}", enumeration.count);
    }
}

/// Prints a table of solution counts for every dimension in `from..=to`.
fn count_range(from: i64, to: i64, common: &CommonOptions) {
    if from > to {
        eprintln!("Error: empty dimension range {from}..={to}");
        std::process::exit(1);
    }

    if common.stats {
        println!("{:>4} {:>14} {:>12}", "n", "solutions", "time (s)");
    } else {
        println!("{:>4} {:>14}", "n", "solutions");
    }

    for n in from..=to {
        let queens = build_solver(n);

        let time = std::time::Instant::now();
        let count = queens.count();
        let elapsed = time.elapsed();

        if common.stats {
            println!("{n:>4} {count:>14} {:>12.3}", elapsed.as_secs_f64());
        } else {
            println!("{n:>4} {count:>14}");
        }
    }
}

/// Verifies every enumerated solution with the pairwise attack predicate.
///
/// Prints whether the verification was successful. If verification fails, it panics.
///
/// # Arguments
/// * `n` - The board dimension the solutions were enumerated for.
/// * `enumeration` - The enumeration result to verify.
fn verify_solutions(n: usize, enumeration: &Enumeration) {
    let ok = enumeration
        .solutions
        .iter()
        .all(|solution| solution.is_valid(n));
    println!("Verified: {ok:?}");
    if !ok {
        panic!("Solution failed verification!");
    }
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {:<28} {:>18}  |", label, value);
}

/// Helper function to print a statistic line that includes a rate (value/second).
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The raw count for the statistic.
/// * `elapsed` - The elapsed time in seconds, used to calculate the rate.
#[allow(clippy::cast_precision_loss)]
fn stat_line_with_rate(label: &str, value: u64, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {:<20} {:>12} ({:>9.0}/sec)  |", label, value, rate);
}

/// Prints a summary of problem and search statistics.
///
/// # Arguments
/// * `elapsed` - Duration spent by the solver.
/// * `dimension` - The board dimension.
/// * `s` - `SearchStats` collected during the enumeration.
/// * `fundamental` - Count of solutions distinct under symmetry, if requested.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
fn print_stats(
    elapsed: Duration,
    dimension: usize,
    s: &SearchStats,
    fundamental: Option<usize>,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Dimension", dimension);
    stat_line("Board squares", dimension * dimension);

    println!("========================[ Search Statistics ]========================");
    stat_line("Solutions", s.solutions);
    if let Some(fundamental) = fundamental {
        stat_line("Fundamental solutions", fundamental);
    }
    stat_line_with_rate("Nodes", s.nodes, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
