#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Error taxonomy for the solver.
//!
//! There is a single failure mode: asking for a board whose dimension is not
//! a positive integer. Dimensions with no solutions (2 and 3) are valid
//! inputs that terminate normally with an empty enumeration.

use thiserror::Error;

/// Errors surfaced by [`crate::queens::solver::Queens`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueensError {
    /// The requested board dimension was zero or negative. Raised before any
    /// search work begins; a failed call produces no partial results.
    #[error("board dimension must be a positive integer, got {n}")]
    InvalidDimension {
        /// The rejected dimension as supplied by the caller.
        n: i64,
    },
}
