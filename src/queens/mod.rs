#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The N-Queens solver: board model, backtracking search, error taxonomy and
//! symmetry helpers.

/// The `board` module defines queen placements and the pairwise attack predicate.
pub mod board;

/// The `error` module defines the solver's error taxonomy.
pub mod error;

/// The `solver` module implements the row-by-row backtracking enumeration.
pub mod solver;

/// The `symmetry` module groups solutions under the eight board symmetries.
pub mod symmetry;
