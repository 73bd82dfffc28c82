#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Defines the main N-Queens backtracking solver.
//!
//! This module provides the `Queens` struct, which enumerates every placement
//! of N non-attacking queens on an N-by-N board. Queens are placed one per
//! row, top to bottom, and at each row every column is tried in ascending
//! order. A candidate column is pruned when it is attacked by a queen in an
//! earlier row; an accepted column descends into the next row. Reaching row N
//! means every row holds a queen and a complete solution has been found.
//!
//! Because columns are tried in ascending order at every row, solutions are
//! discovered in lexicographic order of the placement sequence, and two runs
//! over the same dimension produce identical output.
//!
//! The core logic involves:
//! 1.  **Pruning:** three bit sets track which columns, up-diagonals
//!     (`row + col`) and down-diagonals (`row - col + n - 1`) are already
//!     occupied, making the safety check constant time. The masks answer
//!     exactly the same question as the pairwise scan in
//!     [`Placement::attacks`], which is kept as the verification predicate.
//! 2.  **Descent:** a safe column is recorded in the placement and its three
//!     attack lines are marked before recursing into the next row.
//! 3.  **Backtracking:** when the recursive call returns, the column and its
//!     attack lines are explicitly released before the next candidate is
//!     tried. Rows at or below the current row are never inspected.
//!
//! All search state lives in a per-call `Search` frame, so repeated or
//! interleaved `solve` calls cannot observe each other.

use crate::queens::board::{Col, Placement};
use crate::queens::error::QueensError;
use bit_vec::BitVec;

/// A consumer of solutions at the moment they are discovered.
///
/// The solver hands each sink a borrowed [`Placement`]; the underlying board
/// keeps mutating after the call returns, so a sink that wants to keep a
/// solution must clone it.
pub trait SolutionSink {
    /// Called once per complete, valid placement, in discovery order.
    fn on_solution(&mut self, solution: &Placement);

    /// Whether the search should continue. Checked before every candidate
    /// column, which lets a sink stop the enumeration early.
    fn keep_searching(&self) -> bool {
        true
    }
}

/// A sink that clones every discovered solution into a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectSolutions {
    /// The solutions collected so far, in discovery order.
    pub solutions: Vec<Placement>,
}

impl CollectSolutions {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solutions: Vec::new(),
        }
    }
}

impl SolutionSink for CollectSolutions {
    fn on_solution(&mut self, solution: &Placement) {
        self.solutions.push(solution.clone());
    }
}

/// A sink that discards solutions; the count is reported via [`SearchStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOnly;

impl SolutionSink for CountOnly {
    fn on_solution(&mut self, _: &Placement) {}
}

/// A sink that keeps the first solution and stops the search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstOnly(
    /// The first discovered solution, once one has been seen.
    pub Option<Placement>,
);

impl SolutionSink for FirstOnly {
    fn on_solution(&mut self, solution: &Placement) {
        self.0.get_or_insert_with(|| solution.clone());
    }

    fn keep_searching(&self) -> bool {
        self.0.is_none()
    }
}

/// Adapts a closure into a [`SolutionSink`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SinkFn<F>(
    /// The closure invoked once per discovered solution.
    pub F,
);

impl<F: FnMut(&Placement)> SolutionSink for SinkFn<F> {
    fn on_solution(&mut self, solution: &Placement) {
        (self.0)(solution);
    }
}

/// Counters collected during one enumeration run.
///
/// Reset at the start of every run; `nodes` counts accepted queen placements
/// (internal search-tree nodes), and `backtracks` counts their removals, so
/// the two are always equal once a run has finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of complete valid placements found.
    pub solutions: u64,
    /// Number of queens placed during the search.
    pub nodes: u64,
    /// Number of queens removed while unwinding.
    pub backtracks: u64,
}

/// The eager result of a full enumeration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Total number of valid complete placements.
    pub count: u64,
    /// Every solution, as an immutable snapshot, in discovery order.
    pub solutions: Vec<Placement>,
    /// Search counters for the run.
    pub stats: SearchStats,
}

/// An N-Queens solver for a fixed board dimension.
///
/// The solver itself is stateless between runs; each call to
/// [`Queens::solve`] (or its variants) owns a fresh search frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Queens {
    n: usize,
}

impl Queens {
    /// Creates a solver for an `n`-by-`n` board.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::InvalidDimension`] when `n < 1`. The check
    /// happens before any search state is built; dimensions with zero
    /// solutions (2 and 3) are accepted and enumerate normally.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn new(n: i64) -> Result<Self, QueensError> {
        if n < 1 {
            return Err(QueensError::InvalidDimension { n });
        }

        Ok(Self { n: n as usize })
    }

    /// The board dimension this solver enumerates.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.n
    }

    /// Enumerates every solution eagerly.
    ///
    /// Solutions are returned in lexicographic order of the placement
    /// sequence. Calling this twice yields identical results.
    #[must_use]
    pub fn solve(&self) -> Enumeration {
        let mut sink = CollectSolutions::new();
        let stats = self.solve_with(&mut sink);

        Enumeration {
            count: stats.solutions,
            solutions: sink.solutions,
            stats,
        }
    }

    /// Runs the search, emitting each solution to `sink` as it is found.
    ///
    /// This is the streaming form of [`Queens::solve`]: the sink sees each
    /// board at the moment of discovery and can stop the search early via
    /// [`SolutionSink::keep_searching`].
    pub fn solve_with<S: SolutionSink>(&self, sink: &mut S) -> SearchStats {
        let mut search = Search::new(self.n, sink);
        search.descend(0);
        search.stats
    }

    /// Counts solutions without materialising any of them.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.solve_with(&mut CountOnly).solutions
    }

    /// Returns the lexicographically first solution, stopping the search as
    /// soon as it is found. `None` when the board has no solutions.
    #[must_use]
    pub fn first(&self) -> Option<Placement> {
        let mut sink = FirstOnly::default();
        self.solve_with(&mut sink);
        sink.0
    }
}

/// One in-flight enumeration run.
///
/// Exclusively owns the mutable placement and the three attack masks for the
/// duration of the run, which is what makes `Queens` re-entrant.
struct Search<'a, S: SolutionSink> {
    n: usize,
    placement: Placement,
    cols: BitVec,
    up_diagonals: BitVec,
    down_diagonals: BitVec,
    stats: SearchStats,
    sink: &'a mut S,
}

impl<'a, S: SolutionSink> Search<'a, S> {
    fn new(n: usize, sink: &'a mut S) -> Self {
        let diagonals = 2 * n - 1;

        Self {
            n,
            placement: Placement::with_capacity(n),
            cols: BitVec::from_elem(n, false),
            up_diagonals: BitVec::from_elem(diagonals, false),
            down_diagonals: BitVec::from_elem(diagonals, false),
            stats: SearchStats::default(),
            sink,
        }
    }

    /// Whether a queen at `(row, col)` would be attacked from an earlier row.
    fn attacked(&self, row: usize, col: usize) -> bool {
        self.cols.get(col) == Some(true)
            || self.up_diagonals.get(row + col) == Some(true)
            || self.down_diagonals.get(row + self.n - 1 - col) == Some(true)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn place(&mut self, row: usize, col: usize) {
        self.cols.set(col, true);
        self.up_diagonals.set(row + col, true);
        self.down_diagonals.set(row + self.n - 1 - col, true);
        self.placement.push(col as Col);
    }

    fn unplace(&mut self, row: usize, col: usize) {
        self.placement.pop();
        self.cols.set(col, false);
        self.up_diagonals.set(row + col, false);
        self.down_diagonals.set(row + self.n - 1 - col, false);
    }

    /// Tries every column of `row` in ascending order, descending one row per
    /// accepted placement. `row == n` is the exit condition: every row holds
    /// a queen, so the placement is snapshotted to the sink.
    #[allow(clippy::cast_possible_truncation)]
    fn descend(&mut self, row: usize) {
        if row == self.n {
            self.stats.solutions += 1;
            self.sink.on_solution(&self.placement);
            return;
        }

        for col in 0..self.n {
            if !self.sink.keep_searching() {
                return;
            }

            if self.attacked(row, col) {
                continue;
            }

            // The masks must agree with the pairwise predicate on the rows
            // placed so far.
            debug_assert!(!self.placement.attacks(col as Col));

            self.stats.nodes += 1;
            self.place(row, col);
            self.descend(row + 1);
            self.unplace(row, col);
            self.stats.backtracks += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Known solution counts for dimensions 1 through 8.
    const KNOWN_COUNTS: [u64; 8] = [1, 0, 0, 2, 10, 4, 40, 92];

    #[test]
    fn test_known_counts() {
        for (i, &expected) in KNOWN_COUNTS.iter().enumerate() {
            let n = i64::try_from(i).unwrap() + 1;
            let queens = Queens::new(n).unwrap();
            assert_eq!(queens.count(), expected, "count mismatch for n = {n}");
        }
    }

    #[test]
    fn test_solve_count_matches_solutions_len() {
        let enumeration = Queens::new(6).unwrap().solve();
        assert_eq!(enumeration.count, enumeration.solutions.len() as u64);
        assert_eq!(enumeration.count, enumeration.stats.solutions);
    }

    #[test]
    fn test_every_solution_is_valid() {
        for n in 1..=8 {
            let queens = Queens::new(n).unwrap();
            for solution in queens.solve().solutions {
                assert!(
                    solution.is_valid(queens.dimension()),
                    "invalid solution {solution:?} for n = {n}"
                );
            }
        }
    }

    #[test]
    fn test_lexicographic_order_n4() {
        let enumeration = Queens::new(4).unwrap().solve();
        assert_eq!(enumeration.solutions[0].as_slice(), &[1, 3, 0, 2]);
        assert_eq!(enumeration.solutions[1].as_slice(), &[2, 0, 3, 1]);
    }

    #[test]
    fn test_solutions_sorted() {
        let enumeration = Queens::new(7).unwrap().solve();
        assert!(
            enumeration
                .solutions
                .windows(2)
                .all(|pair| pair[0] < pair[1])
        );
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            Queens::new(0),
            Err(QueensError::InvalidDimension { n: 0 })
        );
        assert_eq!(
            Queens::new(-1),
            Err(QueensError::InvalidDimension { n: -1 })
        );
    }

    #[test]
    fn test_unsolvable_dimensions_are_not_errors() {
        for n in [2, 3] {
            let enumeration = Queens::new(n).unwrap().solve();
            assert_eq!(enumeration.count, 0);
            assert!(enumeration.solutions.is_empty());
        }
    }

    #[test]
    fn test_idempotent() {
        let queens = Queens::new(6).unwrap();
        assert_eq!(queens.solve(), queens.solve());
    }

    #[test]
    fn test_reentrant() {
        // Run a full n=5 enumeration from inside an n=6 sink; neither run
        // may disturb the other's board.
        let outer = Queens::new(6).unwrap();
        let inner = Queens::new(5).unwrap();

        let mut inner_counts = Vec::new();
        let mut sink = SinkFn(|_: &Placement| {
            inner_counts.push(inner.count());
        });
        let stats = outer.solve_with(&mut sink);

        assert_eq!(stats.solutions, 4);
        assert!(inner_counts.iter().all(|&count| count == 10));
        assert_eq!(outer.solve(), outer.solve());
    }

    #[test]
    fn test_first_matches_full_enumeration() {
        let queens = Queens::new(6).unwrap();
        let enumeration = queens.solve();
        assert_eq!(queens.first(), enumeration.solutions.first().cloned());
    }

    #[test]
    fn test_first_none_when_unsolvable() {
        assert_eq!(Queens::new(3).unwrap().first(), None);
    }

    #[test]
    fn test_first_stops_early() {
        let queens = Queens::new(8).unwrap();
        let full = queens.solve().stats;

        let mut sink = FirstOnly::default();
        let early = queens.solve_with(&mut sink);

        assert!(early.nodes < full.nodes);
        assert_eq!(early.solutions, 1);
    }

    #[test]
    fn test_stats_balanced() {
        let stats = Queens::new(5).unwrap().solve().stats;
        assert_eq!(stats.nodes, stats.backtracks);
        assert!(stats.nodes >= stats.solutions * 5);
    }

    #[test]
    fn test_trivial_board() {
        let enumeration = Queens::new(1).unwrap().solve();
        assert_eq!(enumeration.count, 1);
        assert_eq!(enumeration.solutions[0].as_slice(), &[0]);
    }
}
