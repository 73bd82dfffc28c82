#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Queen placements and the pairwise attack predicate.
//!
//! A [`Placement`] records one queen per visited row as `placement[row] = col`.
//! Rows are filled strictly top to bottom, so the length of the sequence is
//! also the index of the next row to be decided. Entries for rows that have
//! not been visited yet do not exist at all, which makes the "unset rows must
//! never be read" invariant structural rather than a matter of overwrite
//! ordering.

use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};
use std::ops::Index;

/// A column index on the board.
pub type Col = u32;

/// An ordered sequence of queen columns, one per placed row.
///
/// Boards up to dimension 16 are stored inline; larger boards spill to the
/// heap. A complete solution for dimension `n` has exactly `n` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Placement(SmallVec<[Col; 16]>);

impl Placement {
    /// Creates an empty placement.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Creates an empty placement with room for `n` rows.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self(SmallVec::with_capacity(n))
    }

    /// The number of rows that have a queen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no queen has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The column of the queen in `row`, if that row has been placed.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<Col> {
        self.0.get(row).copied()
    }

    /// The placed columns in row order.
    pub fn iter(&self) -> impl Iterator<Item = Col> + '_ {
        self.0.iter().copied()
    }

    /// The placed columns as a slice, indexed by row.
    #[must_use]
    pub fn as_slice(&self) -> &[Col] {
        &self.0
    }

    /// Places a queen in the next row.
    pub(crate) fn push(&mut self, col: Col) {
        self.0.push(col);
    }

    /// Removes the queen from the most recently placed row.
    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }

    /// Pairwise attack check for a candidate queen in the next unplaced row.
    ///
    /// The candidate conflicts with a queen in a previous row `r` iff they
    /// share a column (`placement[r] == col`) or a diagonal
    /// (`|placement[r] - col| == |r - row|`). Only rows strictly above the
    /// candidate are consulted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn attacks(&self, col: Col) -> bool {
        let row = self.0.len();
        self.0
            .iter()
            .enumerate()
            .any(|(r, &placed)| placed == col || placed.abs_diff(col) as usize == row - r)
    }

    /// Whether this placement is a complete, conflict-free solution for an
    /// `n`-by-`n` board.
    ///
    /// Unlike [`Placement::attacks`], this re-checks every pair of rows, so
    /// it is usable to verify snapshots that were produced elsewhere.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn is_valid(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }

        self.0.iter().enumerate().all(|(i, &a)| {
            self.0
                .iter()
                .enumerate()
                .skip(i + 1)
                .all(|(j, &b)| a != b && a.abs_diff(b) as usize != j - i)
        })
    }
}

impl Index<usize> for Placement {
    type Output = Col;

    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl From<Vec<Col>> for Placement {
    fn from(cols: Vec<Col>) -> Self {
        Self(SmallVec::from_vec(cols))
    }
}

impl From<&[Col]> for Placement {
    fn from(cols: &[Col]) -> Self {
        Self(SmallVec::from_slice(cols))
    }
}

impl From<Placement> for Vec<Col> {
    fn from(placement: Placement) -> Self {
        placement.0.into_vec()
    }
}

impl FromIterator<Col> for Placement {
    fn from_iter<I: IntoIterator<Item = Col>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Placement {
    /// Renders the board with `Q` for the queen in each row and `.` for every
    /// other square. The board dimension is taken from the number of placed
    /// rows, so rendering is meant for complete solutions.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = self.0.len();
        let board = self
            .0
            .iter()
            .map(|&queen| {
                (0..n)
                    .map(|col| if col == queen as usize { "Q" } else { "." })
                    .join(" ")
            })
            .join("\n");
        write!(f, "{board}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacks_column_clash() {
        let placement = Placement::from(vec![1, 3]);
        assert!(placement.attacks(1));
        assert!(placement.attacks(3));
    }

    #[test]
    fn test_attacks_diagonal_clash() {
        let placement = Placement::from(vec![1]);
        // Queen at (0, 1): squares (1, 0) and (1, 2) are diagonal neighbours.
        assert!(placement.attacks(0));
        assert!(placement.attacks(2));
        assert!(!placement.attacks(3));
    }

    #[test]
    fn test_attacks_only_consults_placed_rows() {
        let placement = Placement::new();
        assert!(!placement.attacks(0));
    }

    #[test]
    fn test_is_valid_known_solution() {
        let placement = Placement::from(vec![1, 3, 0, 2]);
        assert!(placement.is_valid(4));
    }

    #[test]
    fn test_is_valid_rejects_conflicts() {
        assert!(!Placement::from(vec![0, 0, 2, 3]).is_valid(4));
        assert!(!Placement::from(vec![0, 1, 2, 3]).is_valid(4));
    }

    #[test]
    fn test_is_valid_rejects_incomplete() {
        assert!(!Placement::from(vec![1, 3]).is_valid(4));
    }

    #[test]
    fn test_display_marks_queen_column() {
        let placement = Placement::from(vec![1, 3, 0, 2]);
        let rendered = placement.to_string();
        assert_eq!(rendered, ". Q . .\n. . . Q\nQ . . .\n. . Q .");
    }
}
