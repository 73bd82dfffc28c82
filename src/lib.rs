#![deny(missing_docs)]
//! This crate provides a backtracking solver for the N-Queens placement problem.


/// The `queens` module implements the N-Queens solver, which enumerates all placements of N
/// non-attacking queens on an N-by-N board.
pub mod queens;
