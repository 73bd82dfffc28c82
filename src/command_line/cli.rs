#![allow(dead_code, clippy::cast_precision_loss)]

use clap::{Args, Parser, Subcommand};

/// Defines the command-line interface for the queens solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "queens_solver", version, about = "A configurable N-Queens solver")]
pub(crate) struct Cli {
    /// An optional global board dimension. If provided without a subcommand,
    /// every solution for that dimension is enumerated.
    #[arg(global = true)]
    pub n: Option<i64>,

    /// Specifies the subcommand to execute (e.g. `solve`, `count`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the queens solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Enumerate every solution for one board dimension.
    Solve {
        /// The board dimension (number of queens and board side length).
        #[arg(short = 'n', long)]
        dimension: i64,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Print a table of solution counts over a range of board dimensions.
    Count {
        /// The first dimension of the range (inclusive).
        #[arg(long, default_value_t = 1)]
        from: i64,

        /// The last dimension of the range (inclusive).
        #[arg(long)]
        to: i64,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Enable verification of the enumerated solutions. Every emitted board is
    /// re-checked with the pairwise attack predicate.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of performance and search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable printing of every solution as a rendered board.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_solutions: bool,

    /// Also report the number of solutions distinct under rotation and reflection.
    #[arg(short, long, default_value_t = false)]
    pub(crate) fundamental: bool,
}
